use std::borrow::Cow;

const MAX_ERROR_CHARS: usize = 200;

// Backend errors echo crawled URLs and upstream model errors, either of which
// can carry credentials in query strings or headers.
const MARKER_PATTERNS: [&str; 9] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "api_key=",
    "apikey=",
    "access_token=",
    "refresh_token=",
    "token=",
    "\"api_key\":\"",
    "\"access_token\":\"",
];

// Bare key prefixes only count at a word start and with a key-length tail,
// so slugs like `desk-setup` and `task-list` pass through.
const KEY_PREFIX: &str = "sk-";
const MIN_KEY_TAIL_CHARS: usize = 16;

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=' | '%')
}

fn redact_after(scrubbed: &mut String, marker: &str) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let value_start = start + marker.len();
        let value_len: usize = scrubbed[value_start..]
            .chars()
            .take_while(|c| is_secret_char(*c))
            .map(char::len_utf8)
            .sum();

        if value_len == 0 {
            search_from = value_start;
            continue;
        }

        scrubbed.replace_range(start..value_start + value_len, "[REDACTED]");
        search_from = start + "[REDACTED]".len();
    }
}

fn starts_word(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_'))
}

fn redact_key_prefix(scrubbed: &mut String) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(KEY_PREFIX) {
        let start = search_from + rel;
        let value_start = start + KEY_PREFIX.len();
        let tail: Vec<char> = scrubbed[value_start..]
            .chars()
            .take_while(|c| is_secret_char(*c))
            .collect();

        if tail.len() < MIN_KEY_TAIL_CHARS || !starts_word(scrubbed, start) {
            search_from = value_start;
            continue;
        }

        let value_len: usize = tail.iter().copied().map(char::len_utf8).sum();
        scrubbed.replace_range(start..value_start + value_len, "[REDACTED]");
        search_from = start + "[REDACTED]".len();
    }
}

fn has_key_prefix(input: &str) -> bool {
    input
        .match_indices(KEY_PREFIX)
        .any(|(at, _)| starts_word(input, at))
}

/// Redact credential-looking values from backend error text.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    if !MARKER_PATTERNS.iter().any(|marker| input.contains(marker)) && !has_key_prefix(input) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in MARKER_PATTERNS {
        redact_after(&mut scrubbed, marker);
    }
    redact_key_prefix(&mut scrubbed);
    Cow::Owned(scrubbed)
}

/// Pull the human-readable part out of an error body.
///
/// FastAPI wraps failures as `{"detail": "..."}`; the analyze endpoint uses
/// `{"status": "error", "message": "..."}`. Anything else is used verbatim.
pub fn error_message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["detail", "message", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(text)) => return text.clone(),
                Some(other) if !other.is_null() => return other.to_string(),
                _ => {}
            }
        }
    }
    trimmed.to_string()
}

/// Scrub secrets from backend error text and cap its length.
pub fn sanitize_backend_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    if scrubbed.chars().count() <= MAX_ERROR_CHARS {
        return scrubbed.into_owned();
    }

    let truncated: String = scrubbed.chars().take(MAX_ERROR_CHARS).collect();
    format!("{truncated}...")
}

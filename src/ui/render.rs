//! Plain-text views of stage results. Callers add colour.

use crate::composer::{GeneratedPost, StyleProfile};

#[must_use]
pub fn tone_label(is_polite: bool) -> &'static str {
    if is_polite {
        "polite (haeyo-che)"
    } else {
        "casual (hae-che)"
    }
}

/// Summary lines shown once analysis succeeds.
#[must_use]
pub fn profile_lines(profile: &StyleProfile) -> Vec<(&'static str, String)> {
    let endings = if profile.top_endings.is_empty() {
        "-".to_string()
    } else {
        profile.top_endings.join(", ")
    };
    vec![
        (
            "Average sentence length",
            format!("{:.1} chars", profile.avg_length),
        ),
        ("Tone", tone_label(profile.is_polite).to_string()),
        ("Frequent endings", endings),
    ]
}

/// Markdown document for a generated post, titled with its topic.
#[must_use]
pub fn post_markdown(topic: &str, post: &GeneratedPost) -> String {
    let mut out = String::new();
    let title = topic.trim();
    if !title.is_empty() {
        out.push_str("# ");
        out.push_str(title);
        out.push_str("\n\n");
    }
    out.push_str(post.content.trim_end());
    out.push_str("\n\n---\n\n");
    out.push_str("Image as seen by the model: ");
    out.push_str(post.image_desc.trim());
    out.push('\n');
    out
}

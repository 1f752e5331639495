use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STYLEMIND_API_URL").or_else(|_| std::env::var("API_URL"))
            && !url.is_empty()
        {
            self.api.base_url = url;
        }

        if let Ok(secs_str) = std::env::var("STYLEMIND_ANALYZE_TIMEOUT")
            && let Ok(secs) = secs_str.parse::<u64>()
            && secs > 0
        {
            self.api.analyze_timeout_secs = secs;
        }

        if let Ok(secs_str) = std::env::var("STYLEMIND_GENERATE_TIMEOUT")
            && let Ok(secs) = secs_str.parse::<u64>()
            && secs > 0
        {
            self.api.generate_timeout_secs = secs;
        }
    }
}

//! Joinable meeting links: base URL + stored code.

/// Default base URL when none is configured.
pub const DEFAULT_BASE_MEET_URL: &str = "https://meet.google.com";

#[derive(Debug, Clone)]
pub struct MeetLinks {
    base_url: String,
}

impl MeetLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

impl Default for MeetLinks {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_MEET_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_joins_base_and_code() {
        assert_eq!(
            MeetLinks::default().link("abc-defg-hij"),
            "https://meet.google.com/abc-defg-hij"
        );
        assert_eq!(
            MeetLinks::new("https://meet.example.org/ ").link("x"),
            "https://meet.example.org/x"
        );
    }
}

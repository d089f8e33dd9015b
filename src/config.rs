use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_STATUS_CLEAR_MS: u64 = 5000;
pub const DEFAULT_HEADER_SCROLL_OFFSET: f64 = 50.0;

/// Site-wide settings read from `content/site.json`.
///
/// Every field has a default so the file only needs to carry what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub role: String,
    pub tagline: String,
    /// Text of the home link in the header.
    pub brand: String,
    /// Fraction of a section that must be on screen before it fades in.
    pub reveal_threshold: f64,
    /// Simulated round trip of a contact form submission.
    pub submit_delay_ms: u64,
    /// How long the success/error banner stays up.
    pub status_clear_ms: u64,
    /// Vertical scroll (px) after which the header gets its background.
    pub header_scroll_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            role: String::new(),
            tagline: String::new(),
            brand: "Portfolio".to_string(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            header_scroll_offset: DEFAULT_HEADER_SCROLL_OFFSET,
        }
    }
}

impl SiteConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.owner.trim().is_empty() {
            return Err("owner must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(format!(
                "reveal_threshold must be within 0.0..=1.0, got {}",
                self.reveal_threshold
            ));
        }
        if self.header_scroll_offset < 0.0 {
            return Err("header_scroll_offset must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{ "owner": "Ada" }"#).unwrap();
        assert_eq!(config.owner, "Ada");
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.status_clear_delay(), Duration::from_secs(5));
        assert_eq!(config.brand, "Portfolio");
    }

    #[test]
    fn test_check_rejects_bad_threshold() {
        let config = SiteConfig {
            owner: "Ada".to_string(),
            reveal_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.check().is_err());

        let config = SiteConfig {
            owner: "Ada".to_string(),
            ..Default::default()
        };
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_check_requires_owner() {
        assert!(SiteConfig::default().check().is_err());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Picks the class list for the current variant.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// Background and text colours for a page section.
    pub fn section(self, tone: Tone) -> &'static str {
        match tone {
            Tone::Base => self.pick("bg-gray-800 text-white", "bg-white text-gray-900"),
            Tone::Deep => self.pick("bg-gray-900 text-white", "bg-gray-50 text-gray-900"),
        }
    }

    pub fn muted_text(self) -> &'static str {
        self.pick("text-gray-300", "text-gray-600")
    }

    pub fn card(self) -> &'static str {
        self.pick("bg-gray-700", "bg-white")
    }
}

/// The two alternating section backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Base,
    Deep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::from_dark(true), Theme::Dark);
    }

    #[test]
    fn test_section_classes() {
        assert_eq!(Theme::Dark.section(Tone::Deep), "bg-gray-900 text-white");
        assert_eq!(Theme::Light.section(Tone::Base), "bg-white text-gray-900");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
    }
}

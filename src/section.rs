use std::fmt;

/// The scrollable regions of the page, addressed by their anchor ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Education,
    Projects,
    Certifications,
    Contact,
}

/// Sections listed in the header navigation, in page order.
pub const NAV_SECTIONS: [Section; 5] = [
    Section::About,
    Section::Education,
    Section::Projects,
    Section::Certifications,
    Section::Contact,
];

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_targets_id() {
        for section in NAV_SECTIONS.iter().copied().chain([Section::Hero]) {
            assert_eq!(section.href(), format!("#{section}"));
        }
    }

    #[test]
    fn test_nav_order() {
        let ids = NAV_SECTIONS.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["about", "education", "projects", "certifications", "contact"]
        );
    }
}

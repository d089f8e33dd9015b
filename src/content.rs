use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("{file} must contain at least one entry")]
    Empty { file: String },
    #[error("duplicate id {id} in {file}")]
    DuplicateId { file: String, id: u32 },
    #[error("invalid entry {id} in {file}: {reason}")]
    Invalid {
        file: String,
        id: u32,
        reason: String,
    },
    #[error("bad link for {label} in {file}: {reason}")]
    BadLink {
        file: String,
        label: String,
        reason: String,
    },
    #[error("invalid site config: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Live,
    Demo,
}

impl LinkKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Github => "fab fa-github",
            Self::Live => "fas fa-globe",
            Self::Demo => "fas fa-external-link-alt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "Source code",
            Self::Live => "Live site",
            Self::Demo => "Demo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

impl ProjectLinks {
    /// Present links in the order the cards show them.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        [
            (LinkKind::Github, self.github.as_deref()),
            (LinkKind::Live, self.live.as_deref()),
            (LinkKind::Demo, self.demo.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.map(|u| (kind, u)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub location: String,
}

impl EducationItem {
    pub fn heading(&self) -> String {
        format!("{} in {}", self.degree, self.field)
    }

    pub fn period(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    pub logo: String,
    #[serde(default)]
    pub verification_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub info: Vec<ContactInfo>,
    pub socials: Vec<SocialLink>,
}

/// Everything the page renders, loaded once from the embedded `content/` tables.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub site: SiteConfig,
    pub projects: Vec<Project>,
    /// Rendered as a fixed showcase, never filtered.
    pub client_projects: Vec<Project>,
    pub education: Vec<EducationItem>,
    pub certifications: Vec<Certification>,
    pub about: AboutContent,
    pub contact: ContactContent,
}

pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

impl SiteContent {
    fn load() -> Result<Self, ContentError> {
        let content = Self {
            site: load_table("site.json")?,
            projects: load_table("projects.json")?,
            client_projects: load_table("client_projects.json")?,
            education: load_table("education.json")?,
            certifications: load_table("certifications.json")?,
            about: load_table("about.json")?,
            contact: load_table("contact.json")?,
        };
        content.validate()?;
        log::debug!(
            "loaded site content: {} projects, {} client projects, {} education, {} certifications",
            content.projects.len(),
            content.client_projects.len(),
            content.education.len(),
            content.certifications.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        self.site.check().map_err(ContentError::Config)?;
        if self.projects.is_empty() {
            return Err(ContentError::Empty {
                file: "projects.json".to_string(),
            });
        }
        validate_table("projects.json", &self.projects)?;
        validate_table("client_projects.json", &self.client_projects)?;
        validate_table("education.json", &self.education)?;
        validate_table("certifications.json", &self.certifications)?;
        for info in &self.contact.info {
            if let Some(link) = &info.link {
                check_url(link).map_err(|reason| ContentError::BadLink {
                    file: "contact.json".to_string(),
                    label: info.label.clone(),
                    reason,
                })?;
            }
        }
        for social in &self.contact.socials {
            check_url(&social.url).map_err(|reason| ContentError::BadLink {
                file: "contact.json".to_string(),
                label: social.label.clone(),
                reason,
            })?;
        }
        Ok(())
    }
}

fn load_table<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = ContentFiles::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    parse_table(file, &data.data)
}

fn parse_table<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

/// A row of one of the content tables.
trait Entry {
    fn id(&self) -> u32;
    fn check(&self) -> Result<(), String>;
}

fn validate_table<T: Entry>(file: &str, entries: &[T]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(ContentError::DuplicateId {
                file: file.to_string(),
                id: entry.id(),
            });
        }
        entry.check().map_err(|reason| ContentError::Invalid {
            file: file.to_string(),
            id: entry.id(),
            reason,
        })?;
    }
    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

fn check_url(url: &str) -> Result<(), String> {
    const SCHEMES: [&str; 4] = ["https://", "http://", "mailto:", "tel:"];
    if SCHEMES.iter().any(|s| url.starts_with(s) && url.len() > s.len()) {
        Ok(())
    } else {
        Err(format!("unsupported link: {url:?}"))
    }
}

fn check_asset(path: &str) -> Result<(), String> {
    if path.starts_with('/') || path.starts_with("https://") || path.starts_with("http://") {
        Ok(())
    } else {
        Err(format!("asset must be absolute: {path:?}"))
    }
}

impl Entry for Project {
    fn id(&self) -> u32 {
        self.id
    }

    fn check(&self) -> Result<(), String> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        check_asset(&self.image)?;
        if self.tags.is_empty() {
            return Err("a project needs at least one tag".to_string());
        }
        for tag in &self.tags {
            require("tag", tag)?;
        }
        for (_, url) in self.links.iter() {
            check_url(url)?;
        }
        Ok(())
    }
}

impl Entry for EducationItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn check(&self) -> Result<(), String> {
        require("institution", &self.institution)?;
        require("degree", &self.degree)?;
        require("field", &self.field)?;
        require("start_date", &self.start_date)?;
        require("end_date", &self.end_date)
    }
}

impl Entry for Certification {
    fn id(&self) -> u32 {
        self.id
    }

    fn check(&self) -> Result<(), String> {
        require("title", &self.title)?;
        require("organization", &self.organization)?;
        require("date", &self.date)?;
        check_asset(&self.logo)?;
        if let Some(url) = &self.verification_url {
            check_url(url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: u32, tags: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "A project".to_string(),
            image: "/project.png".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            links: ProjectLinks::default(),
        }
    }

    #[test]
    fn test_shipped_content_is_valid() {
        let content = site_content().expect("embedded content should load");
        assert!(!content.projects.is_empty());
        assert!(!content.client_projects.is_empty());
        assert!(!content.education.is_empty());
        assert!(!content.certifications.is_empty());
        assert_eq!(content.about.highlights.len(), 4);
        assert_eq!(content.site.reveal_threshold, 0.1);
    }

    #[test]
    fn test_shipped_images_resolve() {
        let content = site_content().expect("embedded content should load");
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let images = content
            .projects
            .iter()
            .chain(&content.client_projects)
            .map(|p| p.image.as_str())
            .chain(content.certifications.iter().map(|c| c.logo.as_str()));
        for image in images {
            if let Some(local) = image.strip_prefix('/') {
                assert!(public.join(local).is_file(), "{image} is not in public/");
            } else {
                assert!(image.starts_with("https://"), "{image} is neither local nor https");
            }
        }
    }

    #[test]
    fn test_project_links_order_and_presence() {
        let links: ProjectLinks = serde_json::from_str(
            r#"{ "demo": "https://demo.example", "github": "https://github.com/x/y" }"#,
        )
        .unwrap();
        let kinds = links.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(kinds, vec![LinkKind::Github, LinkKind::Demo]);
    }

    #[test]
    fn test_parse_error_names_file() {
        let res = parse_table::<Vec<Project>>("projects.json", b"[{ \"id\": 1 }]");
        match res {
            Err(ContentError::Parse { file, .. }) => assert_eq!(file, "projects.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_project_without_tags_is_rejected() {
        let projects = vec![project(1, &["Rust"]), project(2, &[])];
        let err = validate_table("projects.json", &projects).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { id: 2, .. }));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let projects = vec![project(7, &["Rust"]), project(7, &["Go"])];
        assert_eq!(
            validate_table("projects.json", &projects),
            Err(ContentError::DuplicateId {
                file: "projects.json".to_string(),
                id: 7
            })
        );
    }

    #[test]
    fn test_bad_links_are_rejected() {
        let mut p = project(1, &["Rust"]);
        p.links.live = Some("javascript:alert(1)".to_string());
        assert!(p.check().is_err());

        p.links.live = Some("https://example.com".to_string());
        assert!(p.check().is_ok());

        p.image = "relative.png".to_string();
        assert!(p.check().is_err());
    }

    #[test]
    fn test_empty_project_table_is_rejected() {
        let mut content = site_content().unwrap().clone();
        content.projects.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::Empty { .. })
        ));
    }

    #[test]
    fn test_education_display_helpers() {
        let content = site_content().unwrap();
        let first = &content.education[0];
        assert_eq!(first.heading(), "Bachelor of Technology in Computer Engineering");
        assert_eq!(first.period(), "2022 - 2026");
    }
}

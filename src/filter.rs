//! Tag filtering for the project gallery.
//!
//! The vocabulary is every distinct tag across the project list, in the order
//! it is first met, behind the reserved [`ALL_TAG`]. Selecting a tag narrows
//! the visible projects to those carrying it without reordering them.

use std::collections::HashSet;

use crate::content::Project;

/// Selecting this tag shows every project.
pub const ALL_TAG: &str = "all";

/// Returns `["all", t1, t2, ...]` with each tag listed once, in first-seen order.
pub fn derive_vocabulary(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = vec![ALL_TAG.to_string()];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if tag != ALL_TAG && seen.insert(tag.as_str()) {
            vocabulary.push(tag.clone());
        }
    }
    vocabulary
}

/// Button text for a tag: first letter upper-cased, the rest untouched.
pub fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagFilter {
    projects: Vec<Project>,
    vocabulary: Vec<String>,
    active_tag: String,
    visible: Vec<Project>,
}

impl TagFilter {
    pub fn new(projects: Vec<Project>) -> Self {
        let vocabulary = derive_vocabulary(&projects);
        Self {
            visible: projects.clone(),
            projects,
            vocabulary,
            active_tag: ALL_TAG.to_string(),
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tag() == tag
    }

    pub fn visible(&self) -> &[Project] {
        &self.visible
    }

    /// Makes `tag` the active filter and returns the projects it leaves visible.
    ///
    /// A tag no project carries is allowed and leaves nothing visible.
    pub fn select_tag(&mut self, tag: &str) -> &[Project] {
        let visible = if tag == ALL_TAG {
            self.projects.clone()
        } else {
            self.projects
                .iter()
                .filter(|p| p.has_tag(tag))
                .cloned()
                .collect()
        };
        log::debug!("filter {:?}: {} of {} projects", tag, visible.len(), self.projects.len());
        self.active_tag = tag.to_string();
        self.visible = visible;
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{site_content, tests::project};

    fn scenario_projects() -> Vec<Project> {
        vec![project(1, &["React", "Node.js"]), project(2, &["Python"])]
    }

    fn ids(projects: &[Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_vocabulary_scenario() {
        let vocab = derive_vocabulary(&scenario_projects());
        assert_eq!(vocab, vec!["all", "React", "Node.js", "Python"]);
    }

    #[test]
    fn test_select_python_scenario() {
        let mut filter = TagFilter::new(scenario_projects());
        assert_eq!(ids(filter.select_tag("Python")), vec![2]);
        assert_eq!(filter.active_tag(), "Python");
    }

    #[test]
    fn test_unknown_tag_yields_empty() {
        let mut filter = TagFilter::new(scenario_projects());
        assert!(filter.select_tag("Rust").is_empty());
        assert_eq!(filter.active_tag(), "Rust");
        assert!(filter.visible().is_empty());
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let filter = TagFilter::new(scenario_projects());
        assert_eq!(filter.active_tag(), ALL_TAG);
        assert_eq!(filter.visible(), scenario_projects().as_slice());
    }

    #[test]
    fn test_vocabulary_dedupes_in_first_seen_order() {
        let projects = vec![
            project(1, &["Go", "Rust"]),
            project(2, &["Rust", "Wasm", "Go"]),
            project(3, &["Wasm", "Leptos"]),
        ];
        let vocab = derive_vocabulary(&projects);
        assert_eq!(vocab, vec!["all", "Go", "Rust", "Wasm", "Leptos"]);
        let unique = vocab.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), vocab.len());
    }

    #[test]
    fn test_project_tag_named_all_is_not_duplicated() {
        let vocab = derive_vocabulary(&[project(1, &["all", "Rust"])]);
        assert_eq!(vocab, vec!["all", "Rust"]);
    }

    #[test]
    fn test_every_tag_selects_exact_stable_subset() {
        let projects = vec![
            project(1, &["Go", "Rust"]),
            project(2, &["Python"]),
            project(3, &["Rust"]),
            project(4, &["Go"]),
        ];
        let mut filter = TagFilter::new(projects.clone());
        for tag in filter.vocabulary().to_vec().into_iter().skip(1) {
            let expected = projects
                .iter()
                .filter(|p| p.tags.contains(&tag))
                .map(|p| p.id)
                .collect::<Vec<_>>();
            let got = ids(filter.select_tag(&tag));
            assert_eq!(got, expected, "tag {tag}");
            assert!(got.len() <= projects.len());
        }
        assert_eq!(ids(filter.select_tag("Rust")), vec![1, 3]);
    }

    #[test]
    fn test_all_restores_full_list_in_order() {
        let mut filter = TagFilter::new(scenario_projects());
        filter.select_tag("React");
        assert_eq!(ids(filter.select_tag(ALL_TAG)), vec![1, 2]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut filter = TagFilter::new(scenario_projects());
        let first = filter.select_tag("Node.js").to_vec();
        let second = filter.select_tag("Node.js").to_vec();
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![1]);
    }

    #[test]
    fn test_shipped_projects_vocabulary() {
        let content = site_content().unwrap();
        let filter = TagFilter::new(content.projects.clone());
        assert_eq!(filter.vocabulary()[0], ALL_TAG);
        assert!(filter.vocabulary().iter().any(|t| t == "Python"));
        // client projects stay out of the filter
        assert!(!filter.vocabulary().iter().any(|t| t == "SEO"));
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label("all"), "All");
        assert_eq!(tag_label("node.js"), "Node.js");
        assert_eq!(tag_label("React"), "React");
        assert_eq!(tag_label(""), "");
    }
}

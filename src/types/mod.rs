use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Navigation Types =============

/// Top-level view of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Directory,
    Privacy,
    Terms,
    Cookies,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Directory,
        Page::Privacy,
        Page::Terms,
        Page::Cookies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Directory => "directory",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
            Page::Cookies => "cookies",
        }
    }

    /// Whether this page is one of the static legal documents
    pub fn is_legal(&self) -> bool {
        matches!(self, Page::Privacy | Page::Terms | Page::Cookies)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown page: {}", s)))
    }
}

/// Addressable anchors on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Gallery,
    JoinCommunity,
}

impl Section {
    /// DOM id of the anchor element
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Gallery => "gallery",
            Section::JoinCommunity => "join-community",
        }
    }
}

/// A request to switch page and optionally land on a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: Page,
    pub section_id: Option<String>,
}

impl NavigationRequest {
    pub fn page(target: Page) -> Self {
        Self {
            target,
            section_id: None,
        }
    }

    pub fn section(target: Page, section_id: impl Into<String>) -> Self {
        Self {
            target,
            section_id: Some(section_id.into()),
        }
    }

    /// URL fragment mirroring this request, without the leading `#`
    pub fn fragment(&self) -> &str {
        match (&self.section_id, self.target) {
            (Some(id), _) => id.as_str(),
            (None, Page::Home) => "",
            (None, page) => page.as_str(),
        }
    }

    /// Inverse of [`NavigationRequest::fragment`]. Anything that is not a page
    /// name is taken as a home page anchor.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.trim_start_matches('#');
        if fragment.is_empty() {
            return Self::page(Page::Home);
        }
        match fragment.parse::<Page>() {
            Ok(page) => Self::page(page),
            Err(_) => Self::section(Page::Home, fragment),
        }
    }
}

impl From<Page> for NavigationRequest {
    fn from(page: Page) -> Self {
        Self::page(page)
    }
}

impl From<Section> for NavigationRequest {
    /// Sections only exist on the home page
    fn from(section: Section) -> Self {
        Self::section(Page::Home, section.id())
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::utils::config::ConfigError),

    #[error("Feed error: {0}")]
    Feed(#[from] crate::feed::FeedError),

    #[error("Lead error: {0}")]
    Lead(#[from] crate::lead::LeadError),

    #[error("Submission error: {0}")]
    Submit(#[from] crate::lead::SubmitError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_round_trips_through_str() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert!("blog".parse::<Page>().is_err());
    }

    #[test]
    fn test_legal_pages() {
        assert!(Page::Privacy.is_legal());
        assert!(Page::Cookies.is_legal());
        assert!(!Page::Directory.is_legal());
    }

    #[test]
    fn test_fragment_round_trip() {
        for req in [
            NavigationRequest::page(Page::Home),
            NavigationRequest::page(Page::Directory),
            NavigationRequest::page(Page::Terms),
            NavigationRequest::from(Section::Gallery),
        ] {
            assert_eq!(NavigationRequest::from_fragment(req.fragment()), req);
        }
        assert_eq!(
            NavigationRequest::from_fragment("#about"),
            NavigationRequest::from(Section::About)
        );
    }

    #[test]
    fn test_section_request_targets_home() {
        let req = NavigationRequest::from(Section::JoinCommunity);
        assert_eq!(req.target, Page::Home);
        assert_eq!(req.section_id.as_deref(), Some("join-community"));
    }
}

//! Project record and catalog loading.
//!
//! # Responsibility
//! - Define the immutable record rendered as one project card.
//! - Provide the compiled-in reference catalog.
//! - Load an externalized catalog asset (JSON array of records).
//!
//! # Invariants
//! - Records are read-only after load; nothing mutates them at runtime.
//! - No uniqueness is enforced: duplicate titles are valid.
//! - Tag order is preserved exactly as declared.
//! - Loaded links are fragments, relative paths or `http(s)` URLs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// One portfolio entry rendered as a display card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Image reference, usually a relative asset path.
    pub image: String,
    pub tags: Vec<String>,
    /// Serialized as `demoLink`.
    pub demo_link: String,
    /// Serialized as `codeLink`.
    pub code_link: String,
}

impl Project {
    /// Creates a record with `#` placeholder links.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: image.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            demo_link: "#".to_string(),
            code_link: "#".to_string(),
        }
    }
}

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("valid scheme regex")
});

/// Whether `link` may be used as an anchor target on the page.
///
/// Leading controls and embedded tab/newline characters are ignored the
/// way browsers ignore them when parsing a URL.
pub fn is_safe_link(link: &str) -> bool {
    let normalized: String = link
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    match SCHEME_RE.captures(normalized.as_str()) {
        Some(caps) => {
            let scheme = &caps[1];
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        }
        None => true,
    }
}

/// Returns the reference catalog shipped with the site.
pub fn default_catalog() -> Vec<Project> {
    vec![
        Project::new(
            "Weather Application",
            "A responsive weather app that displays current weather and forecasts using JavaScript, CSS, HTML, and PHP.",
            "assets/weather-app.jpg",
            &["HTML", "CSS", "JavaScript", "PHP"],
        ),
        Project::new(
            "Unity Game Project",
            "A 3D game developed with Unity and C++ featuring immersive gameplay and stunning visuals.",
            "assets/game-project.jpg",
            &["Unity", "C++", "3D Modeling"],
        ),
        Project::new(
            "Mobile Application",
            "A cross-platform mobile app built with Java and C++ with focus on user experience and performance.",
            "assets/mobile-app.jpg",
            &["Java", "C++", "UI/UX"],
        ),
        Project::new(
            "E-commerce Website",
            "A fully responsive e-commerce platform with product listings, cart functionality, and secure checkout.",
            "assets/ecommerce.jpg",
            &["HTML", "CSS", "JavaScript", "PHP"],
        ),
    ]
}

/// Catalog asset loading errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Asset file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Asset content is not a JSON array of project records.
    Parse(serde_json::Error),
    /// A record links to a scheme other than `http(s)`.
    UnsafeLink { title: String, link: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
            Self::UnsafeLink { title, link } => {
                write!(f, "project `{title}` has unsupported link `{link}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::UnsafeLink { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Ordered, read-only project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parses a JSON array of project records.
    ///
    /// An empty array is a valid, empty catalog. Any record whose demo or
    /// code link uses a non-`http(s)` scheme rejects the whole asset.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let projects = serde_json::from_str::<Vec<Project>>(raw)?;
        for project in &projects {
            for link in [&project.demo_link, &project.code_link] {
                if !is_safe_link(link) {
                    return Err(CatalogError::UnsafeLink {
                        title: project.title.clone(),
                        link: link.clone(),
                    });
                }
            }
        }
        Ok(Self { projects })
    }

    /// Reads and parses a catalog asset from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(raw.as_str())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::{default_catalog, is_safe_link, Catalog, CatalogError};

    #[test]
    fn default_catalog_has_four_reference_entries() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].title, "Weather Application");
        assert_eq!(catalog[1].tags, vec!["Unity", "C++", "3D Modeling"]);
        assert!(catalog.iter().all(|project| project.demo_link == "#"));
    }

    #[test]
    fn parses_camel_case_link_fields() {
        let catalog = Catalog::from_json_str(
            r##"[{"title":"A","description":"d","image":"a.png","tags":["x","y"],"demoLink":"https://demo","codeLink":"#"}]"##,
        )
        .expect("valid catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.projects()[0].demo_link, "https://demo");
        assert_eq!(catalog.projects()[0].tags, vec!["x", "y"]);
    }

    #[test]
    fn accepts_empty_array() {
        let catalog = Catalog::from_json_str("[]").expect("empty catalog");
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_missing_fields() {
        let err = Catalog::from_json_str(r#"[{"title":"only"}]"#).expect_err("missing fields");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn rejects_script_scheme_links() {
        let err = Catalog::from_json_str(
            r#"[{"title":"A","description":"d","image":"a.png","tags":[],"demoLink":"https://ok","codeLink":"JavaScript:alert(1)"}]"#,
        )
        .expect_err("script link");
        match err {
            CatalogError::UnsafeLink { title, link } => {
                assert_eq!(title, "A");
                assert_eq!(link, "JavaScript:alert(1)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn link_check_allows_web_fragment_and_relative_targets() {
        for link in [
            "#",
            "#about",
            "https://x.io/a?b=c",
            "HTTP://x.io",
            "demo/index.html",
            "/code",
        ] {
            assert!(is_safe_link(link), "{link}");
        }
        for link in [
            "javascript:alert(1)",
            " javascript:alert(1)",
            "java\tscript:alert(1)",
            "data:text/html,x",
            "vbscript:x",
        ] {
            assert!(!is_safe_link(link), "{link}");
        }
    }
}

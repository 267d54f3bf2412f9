//! In-page anchor smooth scrolling.

use crate::config::PageConfig;
use crate::model::page::Layout;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static FRAGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Za-z][A-Za-z0-9_\-:.]*)$").expect("valid fragment regex")
});

/// Smooth-scroll target handed back to the host. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
}

/// Result of activating a link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// Not an in-page fragment; default navigation proceeds.
    NotFragment,
    /// Fragment link whose target does not exist; default suppressed, no scroll.
    NoTarget,
    /// Default suppressed; host animates to the request.
    ScrollTo(ScrollRequest),
}

impl AnchorAction {
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::NotFragment)
    }
}

/// Extracts the element id from a `#id` href.
pub fn fragment_id(href: &str) -> Option<&str> {
    FRAGMENT_RE
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// Resolves `href` against the sections measured at click time.
///
/// Targets are cleared by the header height; the result never goes above
/// the top of the document.
pub fn on_link_click(layout: &Layout, config: &PageConfig, href: &str) -> AnchorAction {
    if !href.starts_with('#') {
        return AnchorAction::NotFragment;
    }
    let Some(section) = fragment_id(href).and_then(|id| layout.section(id)) else {
        debug!("event=anchor_scroll module=anchor status=no_target");
        return AnchorAction::NoTarget;
    };
    let top = (section.top - config.header_clearance).max(0.0);
    debug!(
        "event=anchor_scroll module=anchor status=ok target={} top={}",
        section.id, top
    );
    AnchorAction::ScrollTo(ScrollRequest { top })
}

#[cfg(test)]
mod tests {
    use super::{fragment_id, on_link_click, AnchorAction, ScrollRequest};
    use crate::config::PageConfig;
    use crate::model::page::{Layout, SectionBounds};

    fn measured_layout() -> Layout {
        Layout {
            sections: vec![
                SectionBounds::new("home", 0.0, 800.0),
                SectionBounds::new("about", 800.0, 600.0),
            ],
            ..Layout::default()
        }
    }

    #[test]
    fn parses_fragment_ids() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("#1bad"), None);
        assert_eq!(fragment_id("about"), None);
    }

    #[test]
    fn scrolls_to_target_minus_header() {
        let action = on_link_click(&measured_layout(), &PageConfig::default(), "#about");
        assert_eq!(action, AnchorAction::ScrollTo(ScrollRequest { top: 720.0 }));
        assert!(action.prevents_default());
    }

    #[test]
    fn clamps_first_section_to_document_top() {
        let action = on_link_click(&measured_layout(), &PageConfig::default(), "#home");
        assert_eq!(action, AnchorAction::ScrollTo(ScrollRequest { top: 0.0 }));
    }

    #[test]
    fn missing_target_is_silent_noop() {
        let layout = measured_layout();
        let config = PageConfig::default();
        assert_eq!(on_link_click(&layout, &config, "#nowhere"), AnchorAction::NoTarget);
        assert_eq!(on_link_click(&layout, &config, "#"), AnchorAction::NoTarget);
    }

    #[test]
    fn external_links_keep_default_navigation() {
        let action = on_link_click(
            &measured_layout(),
            &PageConfig::default(),
            "https://example.com/#about",
        );
        assert_eq!(action, AnchorAction::NotFragment);
        assert!(!action.prevents_default());
    }
}

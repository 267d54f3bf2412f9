//! Scroll tracker: navbar style, progress bar and active nav link.
//!
//! # Responsibility
//! - Recompute every scroll-derived value from the reported layout.
//! - Keep the derivations pure so they can be checked in isolation.
//!
//! # Invariants
//! - Progress is never NaN and stays within `0.0..=100.0`.
//! - Exactly one nav link is active, or none when no section matches.

use crate::config::PageConfig;
use crate::model::page::{Layout, Page, SectionBounds};

/// One scroll event as measured by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub layout: Layout,
    /// Host clock in milliseconds, used for throttling.
    pub at_ms: u64,
}

/// Applies one scroll snapshot to the page.
pub fn on_scroll(page: &mut Page, config: &PageConfig, snapshot: &ScrollSnapshot) {
    let scroll_y = snapshot.scroll_y;
    page.layout = snapshot.layout.clone();
    page.navbar_scrolled = scroll_y > config.scrolled_threshold;
    page.progress_width = progress_percent(
        scroll_y,
        snapshot.layout.scroll_height,
        snapshot.layout.client_height,
    );

    let current = active_section(
        &snapshot.layout.sections,
        scroll_y,
        config.section_activation_offset,
    )
    .map(|section| format!("#{}", section.id));
    for link in &mut page.nav.links {
        link.active = current.as_deref() == Some(link.href.as_str());
    }
}

/// Scroll progress as a percentage of the scrollable distance.
///
/// Documents no taller than the viewport report `0.0`.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    ((scroll_y / scrollable) * 100.0).clamp(0.0, 100.0)
}

/// Last section, in document order, whose shifted extent contains `scroll_y`.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    activation_offset: f64,
) -> Option<&SectionBounds> {
    sections.iter().rev().find(|section| {
        let threshold = section.top - activation_offset;
        scroll_y >= threshold && scroll_y < threshold + section.height
    })
}

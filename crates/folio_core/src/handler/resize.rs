//! Viewport resize handling.

use crate::config::PageConfig;
use crate::handler::nav::close_menu;
use crate::model::page::Page;

/// Collapses the mobile menu once the viewport is wider than the breakpoint.
///
/// Returns `true` when the menu was closed by this call.
pub fn on_resize(page: &mut Page, config: &PageConfig, viewport_width: f64) -> bool {
    page.layout.viewport_width = viewport_width;
    if viewport_width > config.desktop_breakpoint {
        return close_menu(page);
    }
    false
}

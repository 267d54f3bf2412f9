//! Mobile navigation toggle.
//!
//! # Invariants
//! - `menu_open`, `toggle_expanded` and `icon` are always written together.

use crate::model::page::{LinkOrigin, MenuIcon, Page};
use log::debug;

/// Flips the menu-open flag and its expanded indicator and glyph.
///
/// Returns the new menu-open value.
pub fn toggle(page: &mut Page) -> bool {
    set_menu_open(page, !page.nav.menu_open);
    debug!(
        "event=menu_toggle module=nav status=ok open={}",
        page.nav.menu_open
    );
    page.nav.menu_open
}

/// Closes the menu through the toggle path when it is open.
///
/// Returns `true` when a transition happened.
pub fn close_menu(page: &mut Page) -> bool {
    if !page.nav.menu_open {
        return false;
    }
    toggle(page);
    true
}

/// Auto-close-on-navigate policy for links inside the nav container.
///
/// Links elsewhere on the page never touch the menu, even when they point
/// at the same section as a nav link.
pub fn on_nav_link_click(page: &mut Page, origin: LinkOrigin) -> bool {
    match origin {
        LinkOrigin::NavMenu => close_menu(page),
        LinkOrigin::Page => false,
    }
}

fn set_menu_open(page: &mut Page, open: bool) {
    page.nav.menu_open = open;
    page.nav.toggle_expanded = open;
    page.nav.icon = if open {
        MenuIcon::Times
    } else {
        MenuIcon::Bars
    };
}

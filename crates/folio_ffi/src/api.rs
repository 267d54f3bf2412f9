//! FFI page-event API for host UI shells.
//!
//! # Responsibility
//! - Accept host events through sync FRB calls and forward them to one
//!   process-wide `PageController`.
//! - Return a flat `PageView` the host applies to its rendering surface.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All events are handled one at a time under a single lock.
//! - Asset loading failures fall back to compiled-in defaults.

use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Catalog, ContactSubmission, EventOutcome, Layout, LinkActivation, LinkOrigin, Page,
    PageConfig, PageController, PageEvent, ScrollSnapshot, SectionBounds,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";
const CATALOG_PATH_ENV: &str = "FOLIO_CATALOG_PATH";
static CONTROLLER: OnceLock<Mutex<PageController>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One section measured by the host, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Flat page snapshot the host mirrors onto its elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub menu_open: bool,
    /// Value for `aria-expanded` on the toggle.
    pub toggle_expanded: bool,
    /// `fa-bars` or `fa-times`.
    pub menu_icon_class: String,
    pub navbar_scrolled: bool,
    /// Percentage for the progress bar width.
    pub progress_width: f64,
    pub active_href: Option<String>,
    pub form_message: Option<String>,
    pub form_message_color: Option<String>,
    pub form_name: String,
    pub form_email: String,
    pub form_message_body: String,
    pub year_text: Option<String>,
    pub projects_html: String,
}

/// Result envelope for every page event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventResponse {
    /// Host must cancel its default action.
    pub default_prevented: bool,
    /// Smooth-scroll target, when one was requested.
    pub scroll_top: Option<f64>,
    /// Scroll was throttled; call `page_tick` later.
    pub deferred: bool,
    pub page: PageView,
}

#[flutter_rust_bridge::frb(sync)]
pub fn page_load(year: i32) -> EventResponse {
    dispatch(PageEvent::Load { year })
}

#[flutter_rust_bridge::frb(sync)]
pub fn page_menu_toggle() -> EventResponse {
    dispatch(PageEvent::MenuToggleClick)
}

/// Delivers one link activation with the layout measured at click time.
///
/// `in_nav_menu` is true when the link sits inside the `navLinks` container.
#[flutter_rust_bridge::frb(sync)]
pub fn page_link_click(
    href: String,
    in_nav_menu: bool,
    scroll_height: f64,
    client_height: f64,
    viewport_width: f64,
    sections: Vec<SectionView>,
) -> EventResponse {
    let origin = if in_nav_menu {
        LinkOrigin::NavMenu
    } else {
        LinkOrigin::Page
    };
    dispatch(PageEvent::LinkClick(LinkActivation::new(
        href,
        origin,
        to_layout(scroll_height, client_height, viewport_width, sections),
    )))
}

#[flutter_rust_bridge::frb(sync)]
pub fn page_submit(name: String, email: String, message: String) -> EventResponse {
    dispatch(PageEvent::Submit(ContactSubmission {
        name,
        email,
        message,
    }))
}

/// Delivers one scroll event with the live layout metrics.
#[flutter_rust_bridge::frb(sync)]
pub fn page_scroll(
    scroll_y: f64,
    scroll_height: f64,
    client_height: f64,
    viewport_width: f64,
    sections: Vec<SectionView>,
    at_ms: u64,
) -> EventResponse {
    dispatch(PageEvent::Scroll(ScrollSnapshot {
        scroll_y,
        layout: to_layout(scroll_height, client_height, viewport_width, sections),
        at_ms,
    }))
}

#[flutter_rust_bridge::frb(sync)]
pub fn page_resize(width: f64) -> EventResponse {
    dispatch(PageEvent::Resize { width })
}

/// Flushes a throttled scroll event; hosts call this from a frame callback.
#[flutter_rust_bridge::frb(sync)]
pub fn page_tick(now_ms: u64) -> EventResponse {
    let mut controller = lock_controller();
    let outcome = controller.tick(now_ms);
    to_response(outcome, controller.page())
}

#[flutter_rust_bridge::frb(sync)]
pub fn page_snapshot() -> PageView {
    to_page_view(lock_controller().page())
}

fn dispatch(event: PageEvent) -> EventResponse {
    let mut controller = lock_controller();
    let outcome = controller.handle(event);
    to_response(outcome, controller.page())
}

fn lock_controller() -> MutexGuard<'static, PageController> {
    let controller = CONTROLLER.get_or_init(|| Mutex::new(build_controller()));
    // A poisoned lock still holds consistent state: handlers never panic midway.
    controller
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn build_controller() -> PageController {
    PageController::new(resolve_config(), resolve_catalog())
}

fn resolve_config() -> PageConfig {
    let Some(path) = env_path(CONFIG_PATH_ENV) else {
        return PageConfig::default();
    };
    PageConfig::load(path.as_str()).unwrap_or_else(|err| {
        warn!("event=config_load module=ffi status=fallback error={err}");
        PageConfig::default()
    })
}

fn resolve_catalog() -> Catalog {
    let Some(path) = env_path(CATALOG_PATH_ENV) else {
        return Catalog::default();
    };
    Catalog::load(path.as_str()).unwrap_or_else(|err| {
        warn!("event=catalog_load module=ffi status=fallback error={err}");
        Catalog::default()
    })
}

fn env_path(name: &str) -> Option<String> {
    let raw = std::env::var(name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn to_layout(
    scroll_height: f64,
    client_height: f64,
    viewport_width: f64,
    sections: Vec<SectionView>,
) -> Layout {
    Layout {
        scroll_height,
        client_height,
        viewport_width,
        sections: sections
            .into_iter()
            .map(|section| SectionBounds::new(section.id, section.top, section.height))
            .collect(),
    }
}

fn to_response(outcome: EventOutcome, page: &Page) -> EventResponse {
    EventResponse {
        default_prevented: outcome.default_prevented,
        scroll_top: outcome.scroll_to.map(|request| request.top),
        deferred: outcome.deferred,
        page: to_page_view(page),
    }
}

fn to_page_view(page: &Page) -> PageView {
    PageView {
        menu_open: page.nav.menu_open,
        toggle_expanded: page.nav.toggle_expanded,
        menu_icon_class: page.nav.icon.class_name().to_string(),
        navbar_scrolled: page.navbar_scrolled,
        progress_width: page.progress_width,
        active_href: page.nav.active_href().map(str::to_string),
        form_message: page.form_message.as_ref().map(|m| m.text.clone()),
        form_message_color: page
            .form_message
            .as_ref()
            .map(|m| m.tone.color().to_string()),
        form_name: page.form.name.clone(),
        form_email: page.form.email.clone(),
        form_message_body: page.form.message.clone(),
        year_text: page.year_text.clone(),
        projects_html: page.projects_html(),
    }
}

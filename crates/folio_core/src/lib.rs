//! Core page behavior for the Folio portfolio site.
//! This crate is the single source of truth for page-state invariants.

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod logging;
pub mod model;
pub mod render;

pub use config::{ConfigError, PageConfig};
pub use dispatch::{
    Dispatcher, EventKind, EventOutcome, Handler, HandlerContext, PageController, PageEvent,
    ScrollThrottle,
};
pub use handler::anchor::{AnchorAction, ScrollRequest};
pub use handler::contact::{ContactField, ContactSubmission, ContactValidationError};
pub use handler::scroll::ScrollSnapshot;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::page::{
    ContactForm, FormMessage, Layout, LinkActivation, LinkOrigin, MenuIcon, NavLink, NavState,
    Page, SectionBounds, Tone,
};
pub use model::project::{default_catalog, is_safe_link, Catalog, CatalogError, Project};
pub use render::{render_project_card, Node};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

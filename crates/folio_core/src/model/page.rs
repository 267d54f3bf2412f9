//! Injectable page state.
//!
//! # Responsibility
//! - Hold every presentational value the handlers read or write.
//! - Carry the last layout metrics reported by the host.
//!
//! # Invariants
//! - `nav.menu_open`, `nav.toggle_expanded` and `nav.icon` always agree.
//! - At most one nav link is active.
//! - `progress_width` stays within `0.0..=100.0`.

use crate::config::PageConfig;
use crate::render::node::Node;

/// Stable identifiers of the rendering-surface elements.
pub mod ids {
    pub const MENU_TOGGLE: &str = "menuToggle";
    pub const NAV_LINKS: &str = "navLinks";
    pub const CONTACT_FORM: &str = "contactForm";
    pub const FORM_MESSAGE: &str = "formMessage";
    pub const PROJECTS_GRID: &str = "projectsGrid";
    pub const SCROLL_PROGRESS: &str = "scrollProgress";
    pub const CURRENT_YEAR: &str = "currentYear";
    pub const INPUT_NAME: &str = "name";
    pub const INPUT_EMAIL: &str = "email";
    pub const INPUT_MESSAGE: &str = "message";
}

/// Glyph shown on the menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Closed menu (hamburger).
    Bars,
    /// Open menu (close cross).
    Times,
}

impl MenuIcon {
    /// Icon-font class name for host renderers.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Times => "fa-times",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

/// Mobile navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    /// Mirrors `aria-expanded` on the toggle control.
    pub toggle_expanded: bool,
    pub icon: MenuIcon,
    pub links: Vec<NavLink>,
}

impl NavState {
    pub fn new(hrefs: &[String]) -> Self {
        Self {
            menu_open: false,
            toggle_expanded: false,
            icon: MenuIcon::Bars,
            links: hrefs
                .iter()
                .map(|href| NavLink {
                    href: href.clone(),
                    active: false,
                })
                .collect(),
        }
    }

    pub fn active_href(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.href.as_str())
    }
}

/// Contact form input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// Text colour the message is styled with.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Error => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub tone: Tone,
}

/// Vertical extent of one named page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Layout metrics as measured by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Full document height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub client_height: f64,
    pub viewport_width: f64,
    /// Sections in document order.
    pub sections: Vec<SectionBounds>,
}

impl Layout {
    pub fn section(&self, id: &str) -> Option<&SectionBounds> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Where an activated link lives on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    /// Inside the `navLinks` container.
    NavMenu,
    /// Anywhere else (hero buttons, footer, cards).
    Page,
}

/// One link activation with the layout measured at click time.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkActivation {
    pub href: String,
    pub origin: LinkOrigin,
    pub layout: Layout,
}

impl LinkActivation {
    pub fn new(href: impl Into<String>, origin: LinkOrigin, layout: Layout) -> Self {
        Self {
            href: href.into(),
            origin,
            layout,
        }
    }
}

/// Whole page state handed to every handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub nav: NavState,
    pub navbar_scrolled: bool,
    pub progress_width: f64,
    pub projects_grid: Vec<Node>,
    pub form: ContactForm,
    pub form_message: Option<FormMessage>,
    pub year_text: Option<String>,
    pub layout: Layout,
}

impl Page {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            nav: NavState::new(&config.nav_links),
            navbar_scrolled: false,
            progress_width: 0.0,
            projects_grid: Vec::new(),
            form: ContactForm::default(),
            form_message: None,
            year_text: None,
            layout: Layout::default(),
        }
    }

    /// Grid container holding the rendered cards.
    pub fn projects_grid_node(&self) -> Node {
        Node::element("div")
            .attr("id", ids::PROJECTS_GRID)
            .class("projects-grid")
            .children(self.projects_grid.iter().cloned())
    }

    /// Serialized markup of the project grid contents.
    pub fn projects_html(&self) -> String {
        self.projects_grid
            .iter()
            .map(Node::to_html)
            .collect::<String>()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

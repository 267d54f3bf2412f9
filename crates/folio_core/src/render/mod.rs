//! Display-fragment construction.
//!
//! # Responsibility
//! - Build card fragments as typed node trees, never by string splicing.
//! - Serialize node trees to escaped HTML for hosts that need markup.

pub mod cards;
pub mod node;

pub use cards::{render_project_card, render_project_grid};
pub use node::{escape_html, Node};

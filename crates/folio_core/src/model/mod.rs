//! Page domain model.
//!
//! # Responsibility
//! - Define the project record rendered as cards.
//! - Define the explicit page state every handler receives.
//!
//! # Invariants
//! - Project records are immutable after load.
//! - The menu-open flag is the only state shared between handlers.

pub mod page;
pub mod project;

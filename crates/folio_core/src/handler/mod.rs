//! Page event handlers.
//!
//! # Responsibility
//! - One plain function per page behavior, taking explicit page state.
//! - No handler reaches ambient globals; hosts and tests call them directly.
//!
//! # Invariants
//! - Handlers are total: unknown targets and empty inputs are no-ops.
//! - Only `nav` and `resize` write the menu-open flag.

pub mod anchor;
pub mod contact;
pub mod load;
pub mod nav;
pub mod projects;
pub mod resize;
pub mod scroll;

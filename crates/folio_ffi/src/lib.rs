//! Host bridge for Folio page behavior.
//!
//! Dart/FRB bindings are generated against `api`.

pub mod api;

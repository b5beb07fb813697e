//! Board pages as render-model producers.
//!
//! # Responsibility
//! - Turn stored records into the markdown fragments the UI shell displays.
//! - Drive the create/edit workflows against services and session state.
//!
//! Widgets themselves (tabs, expanders, inputs) are opaque to this crate;
//! pages only compute what those widgets show and what happens on save.

pub mod projects;
pub mod research;

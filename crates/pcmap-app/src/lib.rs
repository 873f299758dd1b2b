//! Application state and orchestration for the PCMAP store directory.
//!
//! Owns the in-memory repository and the current navigation selection,
//! derives the visible listing (filter, shuffle, premium-first sort), and
//! drives the presentation collaborator through the [`Presenter`] trait.
//! The startup sequence renders the built-in seed data first, then makes the
//! one external fetch and swaps the repository wholesale on success.

pub mod controller;
pub mod loader;
pub mod pipeline;
pub mod selection;

pub use controller::{Directory, Presenter};
pub use loader::load;
pub use pipeline::visible_stores;
pub use selection::Selection;

//! Section layout grid for CMS page documents.
//!
//! Pure logic only: the page layout model, span calculation, row
//! organization, row-span inference, ordering diagnostics, and editor
//! reorder helpers. Nothing here performs I/O, so both the HTTP service
//! and any future renderer tooling can depend on it.

pub mod error;
pub mod layout;
pub mod types;

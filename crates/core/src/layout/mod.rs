//! Page layout model and the section grid built from it.
//!
//! Data flows page → sections → column-major block lists → row-major
//! grid. [`organizer`] builds the grid, [`span`] and [`placement`] size
//! each cell, [`validator`] reports inconsistent row annotations, and
//! [`editor`] provides the reorder operations the admin UI performs.

pub mod block;
pub mod columns;
pub mod editor;
pub mod organizer;
pub mod page;
pub mod placement;
pub mod section;
pub mod span;
pub mod validator;

pub use block::{Block, BlockData, BlockKind, MAX_ROW_INDEX};
pub use columns::{column_count, resolve_column_count, ColumnCountSource, ResolvedColumns};
pub use organizer::{organize_into_rows, Cell, Row};
pub use page::{PageLayout, LAYOUT_VERSION};
pub use placement::{place_blocks, PlacedBlock};
pub use section::{Column, Section, SectionSettings};
pub use span::{calculate_span, grid_placement, GridPlacement};
pub use validator::{validate_page, validate_section, LayoutValidation};

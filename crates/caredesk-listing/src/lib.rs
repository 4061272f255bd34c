//! Listing view models for CareDesk.
//!
//! This crate holds the two presentation abstractions shared by every role
//! page of the dashboard, kept free of any UI framework so they can be unit
//! tested in isolation:
//!
//! - **Tabular list**: a [`ColumnSet`] applied to a row slice produces a
//!   [`TableRender`] with exactly one of the Loading / Empty / Populated
//!   states, plus caller-owned [`PaginationState`].
//! - **Searchable selection**: [`QueryFields`] plus [`filter_candidates`]
//!   narrow a fixed candidate collection by case-insensitive substring match.
//!
//! The GUI crate maps these view models onto Iced widgets; nothing here
//! performs I/O or owns long-lived state.

pub mod column;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod table;

pub use column::{Column, ColumnSet, ColumnWidth};
pub use error::ListingError;
pub use filter::{QueryFields, filter_candidates};
pub use pagination::PaginationState;
pub use table::{HeaderCell, TableBody, TableRender, TableRow, build_table};

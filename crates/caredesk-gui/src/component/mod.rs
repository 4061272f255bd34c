//! Reusable UI components for CareDesk.
//!
//! Building blocks for the role pages:
//!
//! - **Display**: `DataTable`, `status_badge`, `stat_card`
//! - **Form**: `search_box`, `search_box_compact`, `Picker`
//! - **Feedback**: `EmptyState`, `LoadingState`, `ErrorState`, `NoFilteredResults`
//! - **Layout**: `sidebar`, `page_header`
//!
//! Components take messages (or message factories) from the caller and
//! return `Element<M>`; they hold no state of their own.

mod data_table;
mod empty_state;
mod page_header;
mod picker;
mod search_box;
mod sidebar;
mod stat_card;
mod status_badge;

pub use data_table::DataTable;
pub use empty_state::{EmptyState, ErrorState, LoadingState, NoFilteredResults};
pub use page_header::page_header;
pub use picker::{Picker, PickerEntry};
pub use search_box::{search_box, search_box_compact};
pub use sidebar::{SidebarItem, sidebar};
pub use stat_card::stat_card;
pub use status_badge::{Tone, status_badge};

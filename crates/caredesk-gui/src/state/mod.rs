//! Application state.
//!
//! [`AppState`] owns the datasets and the current [`ViewState`]; each view
//! variant owns its transient UI state (query strings, page cursor,
//! selection), so navigating away clears it automatically.

mod app_state;
mod view_state;

pub use app_state::AppState;
pub use view_state::{
    AdminUi, AppointmentsUi, InsuranceUi, LaboratoryUi, NursingUi, PatientsUi, PharmacyUi, Section,
    ViewState,
};

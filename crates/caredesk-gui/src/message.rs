//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task results flow through
//! [`Message`]; `App::update` is the only place state changes.

use caredesk_model::{AppointmentDetail, Specialty};

use crate::state::Section;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch to a section, replacing the current view state.
    Navigate(Section),
    /// Flip light/dark appearance.
    ToggleDarkMode,

    /// Patients page messages.
    Patients(PatientsMessage),
    /// Appointments page messages.
    Appointments(AppointmentsMessage),
    /// Pharmacy page messages.
    Pharmacy(PharmacyMessage),
    /// Laboratory page messages.
    Laboratory(LaboratoryMessage),
    /// Insurance page messages.
    Insurance(InsuranceMessage),
    /// Nursing page messages.
    Nursing(NursingMessage),
    /// Administration page messages.
    Admin(AdminMessage),
}

#[derive(Debug, Clone)]
pub enum PatientsMessage {
    QueryChanged(String),
    QueryCleared,
    PageChanged(u32),
    /// A row was picked; the page owns the selection.
    RowSelected(String),
}

#[derive(Debug, Clone)]
pub enum AppointmentsMessage {
    /// Re-fetch appointments and specialties from the directory.
    Reload,
    /// Terminal result of the appointment fetch.
    Loaded(Result<Vec<AppointmentDetail>, String>),
    /// Terminal result of the specialty fetch.
    SpecialtiesLoaded(Result<Vec<Specialty>, String>),
    QueryChanged(String),
    QueryCleared,
    PageChanged(u32),
    /// Toggle a specialty filter chip by code.
    SpecialtyToggled(String),
}

#[derive(Debug, Clone)]
pub enum PharmacyMessage {
    QueryChanged(String),
    QueryCleared,
    PageChanged(u32),
}

#[derive(Debug, Clone)]
pub enum LaboratoryMessage {
    RequestQueryChanged(String),
    RequestQueryCleared,
    PageChanged(u32),
    // New-request form.
    PatientQueryChanged(String),
    PatientQueryCleared,
    PatientPicked(String),
    TestQueryChanged(String),
    TestQueryCleared,
    TestPicked(String),
    PriorityToggled,
    SubmitRequest,
}

#[derive(Debug, Clone)]
pub enum InsuranceMessage {
    QueryChanged(String),
    QueryCleared,
    PageChanged(u32),
}

#[derive(Debug, Clone)]
pub enum NursingMessage {
    QueryChanged(String),
    QueryCleared,
    PageChanged(u32),
    ShowDoneToggled,
}

#[derive(Debug, Clone)]
pub enum AdminMessage {
    QueryChanged(String),
    QueryCleared,
    PageChanged(u32),
}

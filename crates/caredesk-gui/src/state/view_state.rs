//! Per-view UI state.

use caredesk_model::{AppointmentDetail, RequestPriority, Specialty};

use crate::error::GuiError;

// =============================================================================
// SECTIONS
// =============================================================================

/// The role sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Patients,
    Appointments,
    Pharmacy,
    Laboratory,
    Insurance,
    Nursing,
    Admin,
}

impl Section {
    /// All sections in sidebar order.
    pub fn all() -> [Self; 7] {
        [
            Self::Patients,
            Self::Appointments,
            Self::Pharmacy,
            Self::Laboratory,
            Self::Insurance,
            Self::Nursing,
            Self::Admin,
        ]
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Patients => "Patients",
            Self::Appointments => "Appointments",
            Self::Pharmacy => "Pharmacy",
            Self::Laboratory => "Laboratory",
            Self::Insurance => "Insurance",
            Self::Nursing => "Nursing",
            Self::Admin => "Administration",
        }
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// Current view and its UI state.
///
/// Navigation replaces the whole value, which resets queries, cursors, and
/// selections for the page being left.
#[derive(Debug, Clone)]
pub enum ViewState {
    Patients(PatientsUi),
    Appointments(AppointmentsUi),
    Pharmacy(PharmacyUi),
    Laboratory(LaboratoryUi),
    Insurance(InsuranceUi),
    Nursing(NursingUi),
    Admin(AdminUi),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Patients(PatientsUi::default())
    }
}

impl ViewState {
    /// The section this view belongs to, for sidebar highlighting.
    pub fn section(&self) -> Section {
        match self {
            Self::Patients(_) => Section::Patients,
            Self::Appointments(_) => Section::Appointments,
            Self::Pharmacy(_) => Section::Pharmacy,
            Self::Laboratory(_) => Section::Laboratory,
            Self::Insurance(_) => Section::Insurance,
            Self::Nursing(_) => Section::Nursing,
            Self::Admin(_) => Section::Admin,
        }
    }

    /// Fresh view state for a section.
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Patients => Self::Patients(PatientsUi::default()),
            Section::Appointments => Self::Appointments(AppointmentsUi::default()),
            Section::Pharmacy => Self::Pharmacy(PharmacyUi::default()),
            Section::Laboratory => Self::Laboratory(LaboratoryUi::default()),
            Section::Insurance => Self::Insurance(InsuranceUi::default()),
            Section::Nursing => Self::Nursing(NursingUi::default()),
            Section::Admin => Self::Admin(AdminUi::default()),
        }
    }
}

// =============================================================================
// PER-VIEW UI STATE
// =============================================================================

/// Reception / patients page state.
#[derive(Debug, Clone)]
pub struct PatientsUi {
    pub query: String,
    /// 1-based page cursor, owned here, clamped at render.
    pub page: u32,
    /// Key of the row shown in the detail panel.
    pub selected: Option<String>,
}

impl Default for PatientsUi {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            selected: None,
        }
    }
}

/// Appointments page state.
///
/// `rows: None` plus `is_loading` models the fetch lifecycle: the rows stay
/// absent until the directory answers, and absence renders as Empty, never
/// as an error.
#[derive(Debug, Clone)]
pub struct AppointmentsUi {
    pub query: String,
    pub page: u32,
    /// Active specialty filter chip (code), if any.
    pub specialty: Option<String>,
    pub rows: Option<Vec<AppointmentDetail>>,
    pub specialties: Vec<Specialty>,
    pub is_loading: bool,
    pub error: Option<GuiError>,
}

impl Default for AppointmentsUi {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            specialty: None,
            rows: None,
            specialties: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

/// Pharmacy / prescriptions page state.
#[derive(Debug, Clone)]
pub struct PharmacyUi {
    pub query: String,
    pub page: u32,
}

impl Default for PharmacyUi {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

/// Laboratory page state: request listing plus the new-request form.
#[derive(Debug, Clone)]
pub struct LaboratoryUi {
    pub request_query: String,
    pub page: u32,
    // New-request form. Selection is owned here, not by the pickers.
    pub patient_query: String,
    pub selected_patient: Option<String>,
    pub test_query: String,
    pub selected_test: Option<String>,
    pub priority: RequestPriority,
    /// Last submission failure, shown beside the form.
    pub error: Option<GuiError>,
}

impl Default for LaboratoryUi {
    fn default() -> Self {
        Self {
            request_query: String::new(),
            page: 1,
            patient_query: String::new(),
            selected_patient: None,
            test_query: String::new(),
            selected_test: None,
            priority: RequestPriority::default(),
            error: None,
        }
    }
}

/// Insurance / claims page state.
#[derive(Debug, Clone)]
pub struct InsuranceUi {
    pub query: String,
    pub page: u32,
}

impl Default for InsuranceUi {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

/// Nursing tasks page state.
#[derive(Debug, Clone)]
pub struct NursingUi {
    pub query: String,
    pub page: u32,
    /// Whether completed tasks are included in the listing.
    pub show_done: bool,
}

impl Default for NursingUi {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            show_done: false,
        }
    }
}

/// Administration / activity page state.
#[derive(Debug, Clone)]
pub struct AdminUi {
    pub query: String,
    pub page: u32,
}

impl Default for AdminUi {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fresh_view_starts_on_page_one() {
        assert_eq!(PatientsUi::default().page, 1);
        assert_eq!(AppointmentsUi::default().page, 1);
        assert_eq!(PharmacyUi::default().page, 1);
        assert_eq!(LaboratoryUi::default().page, 1);
        assert_eq!(InsuranceUi::default().page, 1);
        assert_eq!(NursingUi::default().page, 1);
        assert_eq!(AdminUi::default().page, 1);
    }
}

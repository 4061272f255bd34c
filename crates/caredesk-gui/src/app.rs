//! Application shell: state, update loop, and root view.

use iced::widget::row;
use iced::{Element, Task, Theme};

use caredesk_model::{LabRequest, LabStatus, PatientId, RequestPriority};

use crate::error::GuiError;
use crate::message::{
    AdminMessage, AppointmentsMessage, InsuranceMessage, LaboratoryMessage, Message,
    NursingMessage, PatientsMessage, PharmacyMessage,
};
use crate::service;
use crate::state::{AppState, Section, ViewState};
use crate::theme::desk_theme;
use crate::view;

pub struct App {
    state: AppState,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(),
        };
        // The default view renders from local repositories; nothing to fetch.
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("CareDesk - {}", self.state.view.section().label())
    }

    pub fn theme(&self) -> Theme {
        desk_theme(self.state.dark_mode)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(section) => self.navigate(section),
            Message::ToggleDarkMode => {
                self.state.dark_mode = !self.state.dark_mode;
                Task::none()
            }
            Message::Patients(msg) => self.update_patients(msg),
            Message::Appointments(msg) => self.update_appointments(msg),
            Message::Pharmacy(msg) => self.update_pharmacy(msg),
            Message::Laboratory(msg) => self.update_laboratory(msg),
            Message::Insurance(msg) => self.update_insurance(msg),
            Message::Nursing(msg) => self.update_nursing(msg),
            Message::Admin(msg) => self.update_admin(msg),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = crate::component::sidebar(
            self.state.view.section(),
            self.state.dark_mode,
            Message::Navigate,
            Message::ToggleDarkMode,
        );
        row![sidebar, view::content(&self.state)].into()
    }

    /// Replace the view state wholesale, which resets the leaving page's
    /// query, cursor, and selection. Entering Appointments kicks off the
    /// directory fetches.
    fn navigate(&mut self, section: Section) -> Task<Message> {
        if self.state.view.section() == section {
            return Task::none();
        }
        self.state.view = ViewState::for_section(section);
        if section == Section::Appointments {
            Task::batch([
                service::load_appointments(&self.state.directory),
                service::load_specialties(&self.state.directory),
            ])
        } else {
            Task::none()
        }
    }

    fn update_patients(&mut self, message: PatientsMessage) -> Task<Message> {
        let ViewState::Patients(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            PatientsMessage::QueryChanged(query) => {
                ui.query = query;
                ui.page = 1;
            }
            PatientsMessage::QueryCleared => {
                ui.query.clear();
                ui.page = 1;
            }
            PatientsMessage::PageChanged(page) => ui.page = page,
            PatientsMessage::RowSelected(key) => {
                // Clicking the selected row again closes the panel.
                ui.selected = if ui.selected.as_deref() == Some(key.as_str()) {
                    None
                } else {
                    Some(key)
                };
            }
        }
        Task::none()
    }

    fn update_appointments(&mut self, message: AppointmentsMessage) -> Task<Message> {
        let ViewState::Appointments(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            AppointmentsMessage::Reload => {
                ui.is_loading = true;
                ui.error = None;
                return Task::batch([
                    service::load_appointments(&self.state.directory),
                    service::load_specialties(&self.state.directory),
                ]);
            }
            AppointmentsMessage::Loaded(Ok(rows)) => {
                ui.is_loading = false;
                ui.rows = Some(rows);
            }
            AppointmentsMessage::Loaded(Err(reason)) => {
                ui.is_loading = false;
                ui.error = Some(GuiError::directory(reason));
            }
            AppointmentsMessage::SpecialtiesLoaded(Ok(specialties)) => {
                ui.specialties = specialties;
            }
            AppointmentsMessage::SpecialtiesLoaded(Err(reason)) => {
                tracing::warn!(%reason, "specialty fetch failed");
                if ui.error.is_none() {
                    ui.error = Some(GuiError::directory(reason));
                }
            }
            AppointmentsMessage::QueryChanged(query) => {
                ui.query = query;
                ui.page = 1;
            }
            AppointmentsMessage::QueryCleared => {
                ui.query.clear();
                ui.page = 1;
            }
            AppointmentsMessage::PageChanged(page) => ui.page = page,
            AppointmentsMessage::SpecialtyToggled(code) => {
                ui.specialty = if ui.specialty.as_deref() == Some(code.as_str()) {
                    None
                } else {
                    Some(code)
                };
                ui.page = 1;
            }
        }
        Task::none()
    }

    fn update_pharmacy(&mut self, message: PharmacyMessage) -> Task<Message> {
        let ViewState::Pharmacy(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            PharmacyMessage::QueryChanged(query) => {
                ui.query = query;
                ui.page = 1;
            }
            PharmacyMessage::QueryCleared => {
                ui.query.clear();
                ui.page = 1;
            }
            PharmacyMessage::PageChanged(page) => ui.page = page,
        }
        Task::none()
    }

    fn update_laboratory(&mut self, message: LaboratoryMessage) -> Task<Message> {
        let ViewState::Laboratory(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            LaboratoryMessage::RequestQueryChanged(query) => {
                ui.request_query = query;
                ui.page = 1;
            }
            LaboratoryMessage::RequestQueryCleared => {
                ui.request_query.clear();
                ui.page = 1;
            }
            LaboratoryMessage::PageChanged(page) => ui.page = page,
            LaboratoryMessage::PatientQueryChanged(query) => ui.patient_query = query,
            LaboratoryMessage::PatientQueryCleared => ui.patient_query.clear(),
            LaboratoryMessage::PatientPicked(key) => ui.selected_patient = Some(key),
            LaboratoryMessage::TestQueryChanged(query) => ui.test_query = query,
            LaboratoryMessage::TestQueryCleared => ui.test_query.clear(),
            LaboratoryMessage::TestPicked(key) => ui.selected_test = Some(key),
            LaboratoryMessage::PriorityToggled => {
                ui.priority = match ui.priority {
                    RequestPriority::Routine => RequestPriority::Urgent,
                    RequestPriority::Urgent => RequestPriority::Routine,
                };
            }
            LaboratoryMessage::SubmitRequest => return self.submit_lab_request(),
        }
        Task::none()
    }

    fn submit_lab_request(&mut self) -> Task<Message> {
        let ViewState::Laboratory(ui) = &mut self.state.view else {
            return Task::none();
        };
        let (Some(patient_key), Some(test_code)) =
            (ui.selected_patient.clone(), ui.selected_test.clone())
        else {
            return Task::none();
        };
        let patient_id = match PatientId::new(patient_key) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(%err, "rejecting lab request with invalid patient id");
                ui.error = Some(GuiError::operation("Submitting lab request", err));
                return Task::none();
            }
        };

        let priority = ui.priority;
        ui.error = None;
        ui.patient_query.clear();
        ui.test_query.clear();
        ui.selected_patient = None;
        ui.selected_test = None;
        ui.priority = RequestPriority::default();

        let request = LabRequest {
            id: self.state.next_request_id(),
            patient_id,
            test_code,
            requested_on: chrono::Local::now().date_naive(),
            priority,
            status: LabStatus::Requested,
        };
        tracing::info!(request = %request.id, "lab request submitted");
        self.state.data.lab_requests.push(request);
        Task::none()
    }

    fn update_insurance(&mut self, message: InsuranceMessage) -> Task<Message> {
        let ViewState::Insurance(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            InsuranceMessage::QueryChanged(query) => {
                ui.query = query;
                ui.page = 1;
            }
            InsuranceMessage::QueryCleared => {
                ui.query.clear();
                ui.page = 1;
            }
            InsuranceMessage::PageChanged(page) => ui.page = page,
        }
        Task::none()
    }

    fn update_nursing(&mut self, message: NursingMessage) -> Task<Message> {
        let ViewState::Nursing(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            NursingMessage::QueryChanged(query) => {
                ui.query = query;
                ui.page = 1;
            }
            NursingMessage::QueryCleared => {
                ui.query.clear();
                ui.page = 1;
            }
            NursingMessage::PageChanged(page) => ui.page = page,
            NursingMessage::ShowDoneToggled => {
                ui.show_done = !ui.show_done;
                ui.page = 1;
            }
        }
        Task::none()
    }

    fn update_admin(&mut self, message: AdminMessage) -> Task<Message> {
        let ViewState::Admin(ui) = &mut self.state.view else {
            return Task::none();
        };
        match message {
            AdminMessage::QueryChanged(query) => {
                ui.query = query;
                ui.page = 1;
            }
            AdminMessage::QueryCleared => {
                ui.query.clear();
                ui.page = 1;
            }
            AdminMessage::PageChanged(page) => ui.page = page,
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caredesk_model::Specialty;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn navigation_replaces_view_state() {
        let mut app = app();
        let _ = app.update(Message::Patients(PatientsMessage::QueryChanged(
            "an".to_string(),
        )));

        let _ = app.update(Message::Navigate(Section::Nursing));
        assert_eq!(app.state.view.section(), Section::Nursing);

        // Coming back starts from a fresh page state.
        let _ = app.update(Message::Navigate(Section::Patients));
        let ViewState::Patients(ui) = &app.state.view else {
            panic!("expected patients view");
        };
        assert!(ui.query.is_empty());
        assert_eq!(ui.selected, None);
    }

    #[test]
    fn query_change_resets_the_page_cursor() {
        let mut app = app();
        let _ = app.update(Message::Patients(PatientsMessage::PageChanged(3)));
        let _ = app.update(Message::Patients(PatientsMessage::QueryChanged(
            "ng".to_string(),
        )));

        let ViewState::Patients(ui) = &app.state.view else {
            panic!("expected patients view");
        };
        assert_eq!(ui.page, 1);
        assert_eq!(ui.query, "ng");
    }

    #[test]
    fn selecting_the_same_row_twice_clears_the_selection() {
        let mut app = app();
        let _ = app.update(Message::Patients(PatientsMessage::RowSelected(
            "BN-0001".to_string(),
        )));
        let ViewState::Patients(ui) = &app.state.view else {
            panic!("expected patients view");
        };
        assert_eq!(ui.selected.as_deref(), Some("BN-0001"));

        let _ = app.update(Message::Patients(PatientsMessage::RowSelected(
            "BN-0001".to_string(),
        )));
        let ViewState::Patients(ui) = &app.state.view else {
            panic!("expected patients view");
        };
        assert_eq!(ui.selected, None);
    }

    #[test]
    fn appointment_load_lifecycle_reaches_a_terminal_state() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Section::Appointments));
        let ViewState::Appointments(ui) = &app.state.view else {
            panic!("expected appointments view");
        };
        assert!(ui.is_loading);

        let _ = app.update(Message::Appointments(AppointmentsMessage::Loaded(Ok(
            vec![],
        ))));
        let ViewState::Appointments(ui) = &app.state.view else {
            panic!("expected appointments view");
        };
        assert!(!ui.is_loading);
        assert_eq!(ui.rows.as_deref(), Some(&[][..]));
        assert_eq!(ui.error, None);
    }

    #[test]
    fn appointment_load_failure_surfaces_a_visible_error() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Section::Appointments));
        let _ = app.update(Message::Appointments(AppointmentsMessage::Loaded(Err(
            "directory unreachable".to_string(),
        ))));

        let ViewState::Appointments(ui) = &app.state.view else {
            panic!("expected appointments view");
        };
        assert!(!ui.is_loading);
        assert_eq!(
            ui.error,
            Some(GuiError::Directory {
                reason: "directory unreachable".to_string()
            })
        );
    }

    #[test]
    fn specialty_chip_toggles_off_on_second_press() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Section::Appointments));
        let _ = app.update(Message::Appointments(
            AppointmentsMessage::SpecialtiesLoaded(Ok(vec![Specialty {
                code: "CARD".to_string(),
                name: "Cardiology".to_string(),
            }])),
        ));

        let _ = app.update(Message::Appointments(
            AppointmentsMessage::SpecialtyToggled("CARD".to_string()),
        ));
        let ViewState::Appointments(ui) = &app.state.view else {
            panic!("expected appointments view");
        };
        assert_eq!(ui.specialty.as_deref(), Some("CARD"));

        let _ = app.update(Message::Appointments(
            AppointmentsMessage::SpecialtyToggled("CARD".to_string()),
        ));
        let ViewState::Appointments(ui) = &app.state.view else {
            panic!("expected appointments view");
        };
        assert_eq!(ui.specialty, None);
    }

    #[test]
    fn lab_submission_appends_a_request_and_resets_the_form() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Section::Laboratory));
        let before = app.state.data.lab_requests.len();

        let _ = app.update(Message::Laboratory(LaboratoryMessage::PatientPicked(
            "BN-0002".to_string(),
        )));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::TestPicked(
            "CBC".to_string(),
        )));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::PriorityToggled));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::SubmitRequest));

        assert_eq!(app.state.data.lab_requests.len(), before + 1);
        let added = app
            .state
            .data
            .lab_requests
            .rows()
            .last()
            .expect("request was appended");
        assert_eq!(added.patient_id.as_str(), "BN-0002");
        assert_eq!(added.test_code, "CBC");
        assert_eq!(added.priority, RequestPriority::Urgent);
        assert_eq!(added.status, LabStatus::Requested);

        let ViewState::Laboratory(ui) = &app.state.view else {
            panic!("expected laboratory view");
        };
        assert_eq!(ui.selected_patient, None);
        assert_eq!(ui.selected_test, None);
        assert_eq!(ui.priority, RequestPriority::Routine);
    }

    #[test]
    fn lab_submission_with_an_invalid_patient_surfaces_an_error() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Section::Laboratory));
        let before = app.state.data.lab_requests.len();

        let _ = app.update(Message::Laboratory(LaboratoryMessage::PatientPicked(
            "   ".to_string(),
        )));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::TestPicked(
            "CBC".to_string(),
        )));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::SubmitRequest));

        // Nothing is appended and the failure is visible, not just logged.
        assert_eq!(app.state.data.lab_requests.len(), before);
        let ViewState::Laboratory(ui) = &app.state.view else {
            panic!("expected laboratory view");
        };
        assert!(matches!(ui.error, Some(GuiError::Operation { .. })));

        // A subsequent valid submission clears the error.
        let _ = app.update(Message::Laboratory(LaboratoryMessage::PatientPicked(
            "BN-0003".to_string(),
        )));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::TestPicked(
            "GLU".to_string(),
        )));
        let _ = app.update(Message::Laboratory(LaboratoryMessage::SubmitRequest));
        let ViewState::Laboratory(ui) = &app.state.view else {
            panic!("expected laboratory view");
        };
        assert_eq!(ui.error, None);
        assert_eq!(app.state.data.lab_requests.len(), before + 1);
    }

    #[test]
    fn lab_submission_without_a_selection_is_a_noop() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Section::Laboratory));
        let before = app.state.data.lab_requests.len();

        let _ = app.update(Message::Laboratory(LaboratoryMessage::SubmitRequest));
        assert_eq!(app.state.data.lab_requests.len(), before);
    }

    #[test]
    fn messages_for_another_page_are_ignored() {
        let mut app = app();
        // Default view is Patients; a nursing message must not panic or apply.
        let _ = app.update(Message::Nursing(NursingMessage::ShowDoneToggled));
        assert_eq!(app.state.view.section(), Section::Patients);
    }
}

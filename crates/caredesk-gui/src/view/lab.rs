//! Laboratory: request listing plus the new-request form.
//!
//! The form holds two searchable selection lists, one over patients and one
//! over the test catalog. Selection lives in the page state; the pickers
//! only emit picked keys.

use iced::widget::{Space, button, column, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};
use caredesk_model::{LabTest, Patient, RequestPriority};

use crate::component::{
    DataTable, NoFilteredResults, Picker, PickerEntry, Tone, page_header, search_box, status_badge,
};
use crate::message::{LaboratoryMessage, Message};
use crate::state::{AppState, LaboratoryUi};
use crate::theme::{DeskColors, SPACING_LG, SPACING_MD, SPACING_SM, button_chip, button_primary};
use crate::view::card;

const PAGE_SIZE: usize = 8;

/// Lab request joined with patient and test names.
#[derive(Clone)]
struct RequestRow {
    id: String,
    patient: String,
    test: String,
    requested: String,
    priority: &'static str,
    status: &'static str,
}

fn joined_rows(state: &AppState) -> Vec<RequestRow> {
    state
        .data
        .lab_requests
        .rows()
        .iter()
        .map(|request| {
            let patient = state
                .data
                .patients
                .rows()
                .iter()
                .find(|p| p.id == request.patient_id)
                .map_or_else(|| request.patient_id.to_string(), |p| p.name.clone());
            let test = state
                .data
                .lab_tests
                .rows()
                .iter()
                .find(|t| t.code == request.test_code)
                .map_or_else(|| request.test_code.clone(), |t| t.name.clone());
            RequestRow {
                id: request.id.clone(),
                patient,
                test,
                requested: request.requested_on.format("%d/%m/%Y").to_string(),
                priority: request.priority.display_name(),
                status: request.status.display_name(),
            }
        })
        .collect()
}

fn query_fields() -> QueryFields<RequestRow> {
    QueryFields::new()
        .field(|r: &RequestRow| r.patient.clone())
        .field(|r: &RequestRow| r.test.clone())
        .field(|r: &RequestRow| r.id.clone())
}

fn columns() -> ColumnSet<RequestRow> {
    ColumnSet::new(vec![
        Column::new("id", "ID", |r: &RequestRow| r.id.clone()).fixed(90.0),
        Column::new("patient", "Patient", |r: &RequestRow| r.patient.clone()).portion(2),
        Column::new("test", "Test", |r: &RequestRow| r.test.clone()).portion(2),
        Column::new("requested", "Requested", |r: &RequestRow| {
            r.requested.clone()
        })
        .fixed(100.0),
        Column::new("priority", "Priority", |r: &RequestRow| {
            r.priority.to_string()
        })
        .fixed(90.0),
        Column::new("status", "Status", |r: &RequestRow| r.status.to_string()).fixed(110.0),
    ])
    .expect("column keys are unique")
}

fn patient_fields() -> QueryFields<Patient> {
    QueryFields::new()
        .field(|p: &Patient| p.name.clone())
        .field(|p: &Patient| p.id.to_string())
}

fn test_fields() -> QueryFields<LabTest> {
    QueryFields::new()
        .field(|t: &LabTest| t.name.clone())
        .field(|t: &LabTest| t.code.clone())
        .field(|t: &LabTest| t.category.clone())
}

pub fn view<'a>(state: &'a AppState, ui: &'a LaboratoryUi) -> Element<'a, Message> {
    let rows = joined_rows(state);
    let filtered = filter_candidates(&rows, &query_fields(), &ui.request_query);

    let search = search_box(
        &ui.request_query,
        "Search by patient, test, or request ID",
        |q| Message::Laboratory(LaboratoryMessage::RequestQueryChanged(q)),
        Message::Laboratory(LaboratoryMessage::RequestQueryCleared),
    );

    let table: Element<'a, Message> = if filtered.is_empty() && !ui.request_query.is_empty() {
        NoFilteredResults::new("lab requests")
            .clear_action(Message::Laboratory(LaboratoryMessage::RequestQueryCleared))
            .view()
    } else {
        let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
        let window: Vec<RequestRow> = pager
            .page_slice(&filtered, PAGE_SIZE)
            .iter()
            .map(|&r| r.clone())
            .collect();
        let render = build_table(&columns(), Some(&window), |r| r.id.clone(), false);
        DataTable::new(render)
            .paginate(pager, |page| {
                Message::Laboratory(LaboratoryMessage::PageChanged(page))
            })
            .empty_copy("No lab requests", "Submitted requests appear here")
            .view()
    };

    let listing = column![search, Space::new().height(SPACING_SM), card(table)];

    column![
        page_header("Laboratory", "Test requests and the order form"),
        Space::new().height(SPACING_MD),
        row![
            listing.width(Length::FillPortion(3)),
            request_form(state, ui).width(Length::FillPortion(2)),
        ]
        .spacing(SPACING_MD),
    ]
    .padding(SPACING_LG)
    .into()
}

fn request_form<'a>(state: &'a AppState, ui: &'a LaboratoryUi) -> iced::widget::Column<'a, Message> {
    let patients = filter_candidates(
        state.data.patients.rows(),
        &patient_fields(),
        &ui.patient_query,
    );
    let patient_entries: Vec<PickerEntry> = patients
        .iter()
        .map(|p| PickerEntry::new(p.id.as_str(), p.name.clone()).secondary(p.id.to_string()))
        .collect();

    let tests = filter_candidates(state.data.lab_tests.rows(), &test_fields(), &ui.test_query);
    let test_entries: Vec<PickerEntry> = tests
        .iter()
        .map(|t| PickerEntry::new(t.code.clone(), t.name.clone()).secondary(t.category.clone()))
        .collect();

    let patient_picker = Picker::new(
        &ui.patient_query,
        "Search patients",
        patient_entries,
        |q| Message::Laboratory(LaboratoryMessage::PatientQueryChanged(q)),
        Message::Laboratory(LaboratoryMessage::PatientQueryCleared),
        |key| Message::Laboratory(LaboratoryMessage::PatientPicked(key)),
    )
    .selected(ui.selected_patient.as_deref())
    .subject("patients")
    .height(150.0);

    let test_picker = Picker::new(
        &ui.test_query,
        "Search the test catalog",
        test_entries,
        |q| Message::Laboratory(LaboratoryMessage::TestQueryChanged(q)),
        Message::Laboratory(LaboratoryMessage::TestQueryCleared),
        |key| Message::Laboratory(LaboratoryMessage::TestPicked(key)),
    )
    .selected(ui.selected_test.as_deref())
    .subject("tests")
    .height(150.0);

    let priority_chips = row![
        button(text("Routine").size(12))
            .on_press(Message::Laboratory(LaboratoryMessage::PriorityToggled))
            .padding([5.0, 10.0])
            .style(button_chip(ui.priority == RequestPriority::Routine)),
        button(text("Urgent").size(12))
            .on_press(Message::Laboratory(LaboratoryMessage::PriorityToggled))
            .padding([5.0, 10.0])
            .style(button_chip(ui.priority == RequestPriority::Urgent)),
    ]
    .spacing(SPACING_SM);

    // Submission needs both a patient and a test.
    let can_submit = ui.selected_patient.is_some() && ui.selected_test.is_some();
    let submit = button(
        row![lucide::plus().size(14), text("Submit request").size(13)]
            .spacing(SPACING_SM)
            .align_y(iced::Alignment::Center),
    )
    .on_press_maybe(can_submit.then_some(Message::Laboratory(LaboratoryMessage::SubmitRequest)))
    .padding([8.0, 16.0])
    .style(button_primary);

    let label = |value: &'static str| {
        text(value)
            .size(12)
            .style(|theme: &iced::Theme| text::Style {
                color: Some(theme.desk().text_secondary),
            })
    };

    let priority_badge = match ui.priority {
        RequestPriority::Routine => status_badge("Routine", Tone::Info),
        RequestPriority::Urgent => status_badge("Urgent", Tone::Warning),
    };

    let mut form = column![
        text("New request").size(16),
        Space::new().height(SPACING_MD),
        label("Patient"),
        patient_picker.view(),
        Space::new().height(SPACING_SM),
        label("Test"),
        test_picker.view(),
        Space::new().height(SPACING_SM),
        label("Priority"),
        row![priority_chips, priority_badge]
            .spacing(SPACING_SM)
            .align_y(iced::Alignment::Center),
        Space::new().height(SPACING_MD),
        submit,
    ]
    .spacing(4)
    .padding(SPACING_MD);

    if let Some(error) = &ui.error {
        form = form.push(Space::new().height(SPACING_SM)).push(
            text(error.to_string())
                .size(12)
                .style(|theme: &iced::Theme| text::Style {
                    color: Some(theme.desk().danger),
                }),
        );
    }

    column![card(form)]
}

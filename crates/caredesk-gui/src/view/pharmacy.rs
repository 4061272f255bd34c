//! Pharmacy: prescription listing.

use iced::widget::{Space, column};
use iced::Element;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};

use crate::component::{DataTable, NoFilteredResults, page_header, search_box};
use crate::message::{Message, PharmacyMessage};
use crate::state::{AppState, PharmacyUi};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM};
use crate::view::card;

const PAGE_SIZE: usize = 9;

/// Prescription joined with the patient name for display and search.
#[derive(Clone)]
struct PrescriptionRow {
    id: String,
    patient: String,
    medication: String,
    dose: String,
    issued: String,
    status: &'static str,
}

fn joined_rows(state: &AppState) -> Vec<PrescriptionRow> {
    state
        .data
        .prescriptions
        .rows()
        .iter()
        .map(|rx| {
            let patient = state
                .data
                .patients
                .rows()
                .iter()
                .find(|p| p.id == rx.patient_id)
                .map_or_else(|| rx.patient_id.to_string(), |p| p.name.clone());
            PrescriptionRow {
                id: rx.id.clone(),
                patient,
                medication: rx.medication.clone(),
                dose: rx.dose.clone(),
                issued: rx.issued_on.format("%d/%m/%Y").to_string(),
                status: rx.status.display_name(),
            }
        })
        .collect()
}

fn query_fields() -> QueryFields<PrescriptionRow> {
    QueryFields::new()
        .field(|r: &PrescriptionRow| r.patient.clone())
        .field(|r: &PrescriptionRow| r.medication.clone())
        .field(|r: &PrescriptionRow| r.id.clone())
}

fn columns() -> ColumnSet<PrescriptionRow> {
    ColumnSet::new(vec![
        Column::new("id", "ID", |r: &PrescriptionRow| r.id.clone()).fixed(90.0),
        Column::new("patient", "Patient", |r: &PrescriptionRow| r.patient.clone()).portion(2),
        Column::new("medication", "Medication", |r: &PrescriptionRow| {
            r.medication.clone()
        })
        .portion(2),
        Column::new("dose", "Dose", |r: &PrescriptionRow| r.dose.clone()).portion(2),
        Column::new("issued", "Issued", |r: &PrescriptionRow| r.issued.clone()).fixed(100.0),
        Column::new("status", "Status", |r: &PrescriptionRow| {
            r.status.to_string()
        })
        .fixed(100.0),
    ])
    .expect("column keys are unique")
}

pub fn view<'a>(state: &'a AppState, ui: &'a PharmacyUi) -> Element<'a, Message> {
    let rows = joined_rows(state);
    let filtered = filter_candidates(&rows, &query_fields(), &ui.query);

    let search = search_box(
        &ui.query,
        "Search by patient, medication, or prescription ID",
        |q| Message::Pharmacy(PharmacyMessage::QueryChanged(q)),
        Message::Pharmacy(PharmacyMessage::QueryCleared),
    );

    let table: Element<'a, Message> = if filtered.is_empty() && !ui.query.is_empty() {
        NoFilteredResults::new("prescriptions")
            .clear_action(Message::Pharmacy(PharmacyMessage::QueryCleared))
            .view()
    } else {
        let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
        let window: Vec<PrescriptionRow> = pager
            .page_slice(&filtered, PAGE_SIZE)
            .iter()
            .map(|&r| r.clone())
            .collect();
        let render = build_table(&columns(), Some(&window), |r| r.id.clone(), false);
        DataTable::new(render)
            .paginate(pager, |page| {
                Message::Pharmacy(PharmacyMessage::PageChanged(page))
            })
            .empty_copy("No prescriptions", "Issued prescriptions appear here")
            .view()
    };

    column![
        page_header("Pharmacy", "Issued and dispensed prescriptions"),
        Space::new().height(SPACING_MD),
        search,
        Space::new().height(SPACING_SM),
        card(table),
    ]
    .padding(SPACING_LG)
    .into()
}

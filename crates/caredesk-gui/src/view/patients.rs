//! Reception: patient registry with search and a detail panel.

use iced::widget::{Space, column, row, rule, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};
use caredesk_model::Patient;

use crate::component::{DataTable, NoFilteredResults, Tone, page_header, search_box, stat_card, status_badge};
use crate::message::{Message, PatientsMessage};
use crate::state::{AppState, PatientsUi};
use crate::theme::{DeskColors, SPACING_LG, SPACING_MD, SPACING_SM};
use crate::view::card;

const PAGE_SIZE: usize = 8;

fn query_fields() -> QueryFields<Patient> {
    QueryFields::new()
        .field(|p: &Patient| p.name.clone())
        .field(|p: &Patient| p.id.to_string())
        .field(|p: &Patient| p.phone.clone())
}

fn columns() -> ColumnSet<Patient> {
    ColumnSet::new(vec![
        Column::new("id", "ID", |p: &Patient| p.id.to_string()).fixed(100.0),
        Column::new("name", "Full name", |p: &Patient| p.name.clone()).portion(2),
        Column::new("dob", "Born", |p: &Patient| {
            p.date_of_birth.format("%d/%m/%Y").to_string()
        })
        .fixed(100.0),
        Column::new("phone", "Phone", |p: &Patient| p.phone.clone()).fixed(130.0),
        Column::new("address", "Address", |p: &Patient| p.address.clone()).portion(3),
    ])
    .expect("column keys are unique")
}

pub fn view<'a>(state: &'a AppState, ui: &'a PatientsUi) -> Element<'a, Message> {
    let patients = state.data.patients.rows();
    let filtered = filter_candidates(patients, &query_fields(), &ui.query);

    let insured = patients.iter().filter(|p| p.policy_no.is_some()).count();
    let stats = row![
        stat_card(
            lucide::users().size(18),
            patients.len().to_string(),
            "Registered patients",
        ),
        stat_card(lucide::shield().size(18), insured.to_string(), "Insured"),
        stat_card(
            lucide::calendar().size(18),
            state.data.appointments.len().to_string(),
            "Appointments on file",
        ),
    ]
    .spacing(SPACING_MD);

    let search = search_box(
        &ui.query,
        "Search by name, patient ID, or phone",
        |q| Message::Patients(PatientsMessage::QueryChanged(q)),
        Message::Patients(PatientsMessage::QueryCleared),
    );

    let table: Element<'a, Message> = if filtered.is_empty() && !ui.query.is_empty() {
        NoFilteredResults::new("patients")
            .clear_action(Message::Patients(PatientsMessage::QueryCleared))
            .view()
    } else {
        let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
        let window: Vec<Patient> = pager
            .page_slice(&filtered, PAGE_SIZE)
            .iter()
            .map(|&p| p.clone())
            .collect();
        let render = build_table(&columns(), Some(&window), |p| p.id.to_string(), false);

        DataTable::new(render)
            .selected(ui.selected.clone())
            .on_select(|key| Message::Patients(PatientsMessage::RowSelected(key)))
            .paginate(pager, |page| {
                Message::Patients(PatientsMessage::PageChanged(page))
            })
            .empty_copy("No patients registered", "New registrations appear here")
            .view()
    };

    let mut body = row![card(table)].spacing(SPACING_MD).height(Length::Fill);
    if let Some(patient) = ui
        .selected
        .as_ref()
        .and_then(|key| patients.iter().find(|p| p.id.as_str() == key))
    {
        body = body.push(detail_panel(patient));
    }

    column![
        page_header("Patients", "Reception desk and patient registry"),
        Space::new().height(SPACING_MD),
        stats,
        Space::new().height(SPACING_MD),
        search,
        Space::new().height(SPACING_SM),
        body,
    ]
    .padding(SPACING_LG)
    .into()
}

fn detail_panel(patient: &Patient) -> Element<'_, Message> {
    let coverage = match &patient.policy_no {
        Some(policy) => status_badge(format!("Insured ({policy})"), Tone::Success),
        None => status_badge("No coverage", Tone::Neutral),
    };

    let field = |label: &'static str, value: String| {
        column![
            text(label).size(11).style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_muted),
            }),
            text(value).size(13).style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_primary),
            }),
        ]
        .spacing(2)
    };

    let panel = column![
        text(patient.name.clone())
            .size(16)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_primary),
            }),
        Space::new().height(SPACING_SM),
        coverage,
        Space::new().height(SPACING_MD),
        rule::horizontal(1),
        Space::new().height(SPACING_MD),
        field("Patient ID", patient.id.to_string()),
        Space::new().height(SPACING_SM),
        field(
            "Date of birth",
            patient.date_of_birth.format("%d/%m/%Y").to_string(),
        ),
        Space::new().height(SPACING_SM),
        field("Phone", patient.phone.clone()),
        Space::new().height(SPACING_SM),
        field("Address", patient.address.clone()),
    ]
    .padding(SPACING_MD);

    iced::widget::container(card(panel))
        .width(Length::Fixed(300.0))
        .height(Length::Fill)
        .into()
}

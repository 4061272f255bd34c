//! Administration: facility counts and the activity feed.

use iced::widget::{Space, column, row};
use iced::Element;
use iced_fonts::lucide;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};
use caredesk_model::ActivityEntry;

use crate::component::{DataTable, NoFilteredResults, page_header, search_box, stat_card};
use crate::message::{AdminMessage, Message};
use crate::state::{AdminUi, AppState};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM};
use crate::view::card;

const PAGE_SIZE: usize = 9;

fn query_fields() -> QueryFields<ActivityEntry> {
    QueryFields::new()
        .field(|e: &ActivityEntry| e.actor.clone())
        .field(|e: &ActivityEntry| e.action.clone())
}

fn columns() -> ColumnSet<ActivityEntry> {
    ColumnSet::new(vec![
        Column::new("at", "When", |e: &ActivityEntry| {
            e.at.format("%d/%m %H:%M").to_string()
        })
        .fixed(110.0),
        Column::new("actor", "Actor", |e: &ActivityEntry| e.actor.clone()).portion(2),
        Column::new("action", "Action", |e: &ActivityEntry| e.action.clone()).portion(5),
    ])
    .expect("column keys are unique")
}

pub fn view<'a>(state: &'a AppState, ui: &'a AdminUi) -> Element<'a, Message> {
    let stats = row![
        stat_card(
            lucide::users().size(18),
            state.data.patients.len().to_string(),
            "Patients",
        ),
        stat_card(
            lucide::stethoscope().size(18),
            state.data.doctors.len().to_string(),
            "Doctors",
        ),
        stat_card(
            lucide::calendar().size(18),
            state.data.appointments.len().to_string(),
            "Appointments",
        ),
        stat_card(
            lucide::flask_conical().size(18),
            state.data.lab_requests.len().to_string(),
            "Lab requests",
        ),
    ]
    .spacing(SPACING_MD);

    let entries = state.data.activity.rows();
    let filtered = filter_candidates(entries, &query_fields(), &ui.query);

    let search = search_box(
        &ui.query,
        "Search the activity feed",
        |q| Message::Admin(AdminMessage::QueryChanged(q)),
        Message::Admin(AdminMessage::QueryCleared),
    );

    let table: Element<'a, Message> = if filtered.is_empty() && !ui.query.is_empty() {
        NoFilteredResults::new("activity entries")
            .clear_action(Message::Admin(AdminMessage::QueryCleared))
            .view()
    } else {
        let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
        let window: Vec<ActivityEntry> = pager
            .page_slice(&filtered, PAGE_SIZE)
            .iter()
            .map(|&e| e.clone())
            .collect();
        let render = build_table(&columns(), Some(&window), |e| e.id.clone(), false);
        DataTable::new(render)
            .paginate(pager, |page| Message::Admin(AdminMessage::PageChanged(page)))
            .empty_copy("No activity", "Staff actions appear here")
            .view()
    };

    column![
        page_header("Administration", "Facility overview and audit trail"),
        Space::new().height(SPACING_MD),
        stats,
        Space::new().height(SPACING_MD),
        search,
        Space::new().height(SPACING_SM),
        card(table),
    ]
    .padding(SPACING_LG)
    .into()
}

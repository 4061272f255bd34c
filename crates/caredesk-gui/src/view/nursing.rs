//! Nursing: ward task list with a completed-tasks toggle.

use iced::widget::{Space, button, column, row, text};
use iced::Element;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};

use crate::component::{DataTable, NoFilteredResults, page_header, search_box};
use crate::message::{Message, NursingMessage};
use crate::state::{AppState, NursingUi};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, button_chip};
use crate::view::card;

const PAGE_SIZE: usize = 9;

/// Ward task joined with the patient name.
#[derive(Clone)]
struct TaskRow {
    id: String,
    due: String,
    ward: String,
    patient: String,
    description: String,
    priority: &'static str,
    done: bool,
}

fn joined_rows(state: &AppState, show_done: bool) -> Vec<TaskRow> {
    state
        .data
        .tasks
        .rows()
        .iter()
        .filter(|task| show_done || !task.done)
        .map(|task| {
            let patient = state
                .data
                .patients
                .rows()
                .iter()
                .find(|p| p.id == task.patient_id)
                .map_or_else(|| task.patient_id.to_string(), |p| p.name.clone());
            TaskRow {
                id: task.id.clone(),
                due: task.due.format("%H:%M").to_string(),
                ward: task.ward.clone(),
                patient,
                description: task.description.clone(),
                priority: task.priority.display_name(),
                done: task.done,
            }
        })
        .collect()
}

fn query_fields() -> QueryFields<TaskRow> {
    QueryFields::new()
        .field(|r: &TaskRow| r.patient.clone())
        .field(|r: &TaskRow| r.ward.clone())
        .field(|r: &TaskRow| r.description.clone())
}

fn columns() -> ColumnSet<TaskRow> {
    ColumnSet::new(vec![
        Column::new("due", "Due", |r: &TaskRow| r.due.clone()).fixed(70.0),
        Column::new("ward", "Ward", |r: &TaskRow| r.ward.clone()).fixed(90.0),
        Column::new("patient", "Patient", |r: &TaskRow| r.patient.clone()).portion(2),
        Column::new("task", "Task", |r: &TaskRow| r.description.clone()).portion(4),
        Column::new("priority", "Priority", |r: &TaskRow| {
            r.priority.to_string()
        })
        .fixed(90.0),
        Column::new("state", "State", |r: &TaskRow| {
            if r.done { "Done" } else { "Open" }.to_string()
        })
        .fixed(70.0),
    ])
    .expect("column keys are unique")
}

pub fn view<'a>(state: &'a AppState, ui: &'a NursingUi) -> Element<'a, Message> {
    let rows = joined_rows(state, ui.show_done);
    let filtered = filter_candidates(&rows, &query_fields(), &ui.query);

    let search = search_box(
        &ui.query,
        "Search by patient, ward, or task",
        |q| Message::Nursing(NursingMessage::QueryChanged(q)),
        Message::Nursing(NursingMessage::QueryCleared),
    );

    let done_toggle = button(text("Show completed").size(12))
        .on_press(Message::Nursing(NursingMessage::ShowDoneToggled))
        .padding([5.0, 10.0])
        .style(button_chip(ui.show_done));

    let table: Element<'a, Message> = if filtered.is_empty() && !ui.query.is_empty() {
        NoFilteredResults::new("tasks")
            .clear_action(Message::Nursing(NursingMessage::QueryCleared))
            .view()
    } else {
        let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
        let window: Vec<TaskRow> = pager
            .page_slice(&filtered, PAGE_SIZE)
            .iter()
            .map(|&r| r.clone())
            .collect();
        let render = build_table(&columns(), Some(&window), |r| r.id.clone(), false);
        DataTable::new(render)
            .paginate(pager, |page| {
                Message::Nursing(NursingMessage::PageChanged(page))
            })
            .empty_copy("All caught up", "Open ward tasks appear here")
            .view()
    };

    column![
        page_header("Nursing", "Ward tasks by shift"),
        Space::new().height(SPACING_MD),
        row![search, done_toggle]
            .spacing(SPACING_SM)
            .align_y(iced::Alignment::Center),
        Space::new().height(SPACING_SM),
        card(table),
    ]
    .padding(SPACING_LG)
    .into()
}

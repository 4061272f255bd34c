//! Insurance: claims listing with amount summaries.

use iced::widget::{Space, column, row};
use iced::Element;
use iced_fonts::lucide;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};
use caredesk_model::ClaimStatus;

use crate::component::{DataTable, NoFilteredResults, page_header, search_box, stat_card};
use crate::message::{InsuranceMessage, Message};
use crate::state::{AppState, InsuranceUi};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM};
use crate::view::card;

const PAGE_SIZE: usize = 8;

/// Claim joined with the patient name and the policy on file.
#[derive(Clone)]
struct ClaimRow {
    id: String,
    patient: String,
    policy: String,
    provider: String,
    amount: String,
    submitted: String,
    status: &'static str,
}

fn joined_rows(state: &AppState) -> Vec<ClaimRow> {
    state
        .data
        .claims
        .rows()
        .iter()
        .map(|claim| {
            let patient = state
                .data
                .patients
                .rows()
                .iter()
                .find(|p| p.id == claim.patient_id)
                .map_or_else(|| claim.patient_id.to_string(), |p| p.name.clone());
            let provider = state
                .data
                .policies
                .rows()
                .iter()
                .find(|policy| policy.number == claim.policy_no)
                .map_or_else(|| "-".to_string(), |policy| policy.provider.clone());
            ClaimRow {
                id: claim.id.clone(),
                patient,
                policy: claim.policy_no.clone(),
                provider,
                amount: claim.amount_display(),
                submitted: claim.submitted_on.format("%d/%m/%Y").to_string(),
                status: claim.status.display_name(),
            }
        })
        .collect()
}

fn query_fields() -> QueryFields<ClaimRow> {
    QueryFields::new()
        .field(|r: &ClaimRow| r.patient.clone())
        .field(|r: &ClaimRow| r.policy.clone())
        .field(|r: &ClaimRow| r.id.clone())
}

fn columns() -> ColumnSet<ClaimRow> {
    ColumnSet::new(vec![
        Column::new("id", "ID", |r: &ClaimRow| r.id.clone()).fixed(90.0),
        Column::new("patient", "Patient", |r: &ClaimRow| r.patient.clone()).portion(2),
        Column::new("policy", "Policy", |r: &ClaimRow| r.policy.clone()).fixed(110.0),
        Column::new("provider", "Provider", |r: &ClaimRow| r.provider.clone()).fixed(90.0),
        Column::new("amount", "Amount", |r: &ClaimRow| r.amount.clone()).fixed(110.0),
        Column::new("submitted", "Submitted", |r: &ClaimRow| r.submitted.clone()).fixed(100.0),
        Column::new("status", "Status", |r: &ClaimRow| r.status.to_string()).fixed(100.0),
    ])
    .expect("column keys are unique")
}

pub fn view<'a>(state: &'a AppState, ui: &'a InsuranceUi) -> Element<'a, Message> {
    let claims = state.data.claims.rows();
    let pending = claims
        .iter()
        .filter(|c| matches!(c.status, ClaimStatus::Submitted | ClaimStatus::InReview))
        .count();
    let approved_kvnd: i64 = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Approved)
        .map(|c| c.amount_kvnd)
        .sum();

    let stats = row![
        stat_card(
            lucide::file_text().size(18),
            claims.len().to_string(),
            "Claims on file",
        ),
        stat_card(lucide::clock_three().size(18), pending.to_string(), "Pending review"),
        stat_card(
            lucide::circle_check().size(18),
            format!("{approved_kvnd}k\u{20ab}"),
            "Approved amount",
        ),
    ]
    .spacing(SPACING_MD);

    let rows = joined_rows(state);
    let filtered = filter_candidates(&rows, &query_fields(), &ui.query);

    let search = search_box(
        &ui.query,
        "Search by patient, policy, or claim ID",
        |q| Message::Insurance(InsuranceMessage::QueryChanged(q)),
        Message::Insurance(InsuranceMessage::QueryCleared),
    );

    let table: Element<'a, Message> = if filtered.is_empty() && !ui.query.is_empty() {
        NoFilteredResults::new("claims")
            .clear_action(Message::Insurance(InsuranceMessage::QueryCleared))
            .view()
    } else {
        let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
        let window: Vec<ClaimRow> = pager
            .page_slice(&filtered, PAGE_SIZE)
            .iter()
            .map(|&r| r.clone())
            .collect();
        let render = build_table(&columns(), Some(&window), |r| r.id.clone(), false);
        DataTable::new(render)
            .paginate(pager, |page| {
                Message::Insurance(InsuranceMessage::PageChanged(page))
            })
            .empty_copy("No claims", "Filed claims appear here")
            .view()
    };

    column![
        page_header("Insurance", "Claims and coverage"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_claim_joins_to_a_policy_on_file() {
        let state = AppState::new();
        let rows = joined_rows(&state);

        assert_eq!(rows.len(), state.data.claims.len());
        for row in &rows {
            assert_ne!(row.provider, "-", "claim {} has no policy on file", row.id);
        }

        let first = rows
            .iter()
            .find(|r| r.id == "YC-4001")
            .expect("sample claim present");
        assert_eq!(first.policy, "BHYT-8341");
        assert_eq!(first.provider, "VSS");
    }
}

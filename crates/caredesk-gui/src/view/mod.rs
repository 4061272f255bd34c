//! Role pages.
//!
//! One module per sidebar section. Pages are pure functions of the
//! application state: they run the filter, clamp the page cursor, build the
//! table render, and wire widget events to messages. All mutation happens
//! in `App::update`.

mod admin;
mod appointments;
mod insurance;
mod lab;
mod nursing;
mod patients;
mod pharmacy;

use iced::widget::container;
use iced::{Border, Element, Length, Theme};

use crate::message::Message;
use crate::state::{AppState, ViewState};
use crate::theme::{BORDER_RADIUS_MD, DeskColors};

/// Render the page for the current view state.
pub fn content(state: &AppState) -> Element<'_, Message> {
    match &state.view {
        ViewState::Patients(ui) => patients::view(state, ui),
        ViewState::Appointments(ui) => appointments::view(ui),
        ViewState::Pharmacy(ui) => pharmacy::view(state, ui),
        ViewState::Laboratory(ui) => lab::view(state, ui),
        ViewState::Insurance(ui) => insurance::view(state, ui),
        ViewState::Nursing(ui) => nursing::view(state, ui),
        ViewState::Admin(ui) => admin::view(state, ui),
    }
}

/// Bordered surface card wrapping a table or panel body.
pub(crate) fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content.into())
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(1)
        .style(|theme: &Theme| {
            let desk = theme.desk();
            container::Style {
                background: Some(desk.surface.into()),
                border: Border {
                    color: desk.border,
                    width: 1.0,
                    radius: BORDER_RADIUS_MD.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

//! Directory fetch tasks.
//!
//! Each fetch is a single in-flight request that resolves to exactly one
//! terminal message, success or failure. Errors cross the task boundary as
//! strings because `iced::Task` requires `Clone` messages.

use std::sync::Arc;

use iced::Task;

use caredesk_data::Directory;

use crate::message::{AppointmentsMessage, Message};

/// Fetch the detailed appointment listing.
pub fn load_appointments(directory: &Arc<Directory>) -> Task<Message> {
    let directory = Arc::clone(directory);
    Task::perform(
        async move {
            directory
                .list_appointments_detailed()
                .await
                .map_err(|err| err.to_string())
        },
        |result| Message::Appointments(AppointmentsMessage::Loaded(result)),
    )
}

/// Fetch the specialty list for the filter chips.
pub fn load_specialties(directory: &Arc<Directory>) -> Task<Message> {
    let directory = Arc::clone(directory);
    Task::perform(
        async move {
            directory
                .list_specialties()
                .await
                .map_err(|err| err.to_string())
        },
        |result| Message::Appointments(AppointmentsMessage::SpecialtiesLoaded(result)),
    )
}

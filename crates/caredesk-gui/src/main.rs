//! CareDesk desktop entry point.

/// Initialize logging, then hand off to the Iced application.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting CareDesk");

    caredesk_gui::run()
}

//! CareDesk - hospital operations dashboard.
//!
//! A multi-role dashboard (reception, appointments, pharmacy, laboratory,
//! insurance, nursing, administration) built with Iced using the Elm
//! architecture. Every role page is a consumer of two shared abstractions
//! from `caredesk-listing`: the tabular list renderer and the searchable
//! selection list.

pub mod app;
pub mod component;
pub mod error;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

use iced::window;
use iced::Size;

use app::App;

/// Run the dashboard application.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 640.0)),
            ..Default::default()
        })
        .run()
}

//! Background tasks bridging the async directory into the message loop.

mod directory;

pub use directory::{load_appointments, load_specialties};

//! Status enums used across the dashboard.
//!
//! Each enum exposes `display_name` for badge labels. Mapping a status to a
//! color tone is a GUI concern and lives with the theme.

use serde::{Deserialize, Serialize};

/// Lifecycle of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    CheckedIn,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::CheckedIn => "Checked in",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Lifecycle of a prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Issued,
    Dispensed,
    Cancelled,
}

impl PrescriptionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Issued => "Issued",
            Self::Dispensed => "Dispensed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Lifecycle of a lab request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabStatus {
    Requested,
    InProgress,
    Ready,
}

impl LabStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::InProgress => "In progress",
            Self::Ready => "Ready",
        }
    }
}

/// Ordering priority for lab requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestPriority {
    #[default]
    Routine,
    Urgent,
}

impl RequestPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Routine => "Routine",
            Self::Urgent => "Urgent",
        }
    }
}

/// Lifecycle of an insurance claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Submitted,
    InReview,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InReview => "In review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Priority of a nursing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Normal,
    High,
}

impl TaskPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

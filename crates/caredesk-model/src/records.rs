//! Entity records rendered by the role pages.
//!
//! All records are plain data with a unique key for list identity. Money is
//! carried in thousand-dong units to stay integral.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::enums::{
    AppointmentStatus, ClaimStatus, LabStatus, PrescriptionStatus, RequestPriority, TaskPriority,
};
use crate::ids::{PatientId, StaffId};

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub address: String,
    /// Insurance policy number, when the patient is covered.
    pub policy_no: Option<String>,
}

/// A doctor on staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: StaffId,
    pub name: String,
    pub specialty_code: String,
}

/// A clinical specialty, served by the directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub code: String,
    pub name: String,
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: PatientId,
    pub doctor_id: StaffId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub reason: String,
}

/// An appointment joined with patient, doctor, and specialty details, as
/// returned by the directory collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialty_code: String,
    pub specialty_name: String,
}

/// A prescription issued to a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient_id: PatientId,
    pub prescriber_id: StaffId,
    pub medication: String,
    pub dose: String,
    pub issued_on: NaiveDate,
    pub status: PrescriptionStatus,
}

/// A test offered by the laboratory, selectable in the request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTest {
    pub code: String,
    pub name: String,
    pub category: String,
}

/// A lab request for one patient and one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabRequest {
    pub id: String,
    pub patient_id: PatientId,
    pub test_code: String,
    pub requested_on: NaiveDate,
    pub priority: RequestPriority,
    pub status: LabStatus,
}

/// An insurance claim filed for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceClaim {
    pub id: String,
    pub patient_id: PatientId,
    pub policy_no: String,
    /// Claimed amount in thousand dong.
    pub amount_kvnd: i64,
    pub submitted_on: NaiveDate,
    pub status: ClaimStatus,
}

/// An insurance policy on file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub number: String,
    pub provider: String,
    pub holder: PatientId,
    pub valid_until: NaiveDate,
}

/// A ward task assigned to nursing staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NursingTask {
    pub id: String,
    pub patient_id: PatientId,
    pub ward: String,
    pub description: String,
    pub due: NaiveTime,
    pub priority: TaskPriority,
    pub done: bool,
}

/// One line of the admin activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub actor: String,
    pub action: String,
    pub at: NaiveDateTime,
}

impl InsuranceClaim {
    /// Amount formatted for display, e.g. `1.250k₫`.
    pub fn amount_display(&self) -> String {
        format!("{}k₫", group_thousands(self.amount_kvnd))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PatientId;
    use crate::ClaimStatus;

    #[test]
    fn claim_amount_groups_thousands() {
        let claim = InsuranceClaim {
            id: "YC-01".to_string(),
            patient_id: PatientId::new("BN-0001").expect("valid id"),
            policy_no: "BHYT-123".to_string(),
            amount_kvnd: 1_250,
            submitted_on: NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"),
            status: ClaimStatus::Submitted,
        };
        assert_eq!(claim.amount_display(), "1.250k₫");
    }
}

//! Domain records for CareDesk.
//!
//! Plain data types shared by the data layer and the GUI: patients, staff,
//! appointments, prescriptions, lab work, insurance, nursing tasks, and the
//! admin activity feed. Records have no lifecycle beyond being rendered;
//! every record carries a unique key used for list identity.

pub mod enums;
pub mod error;
pub mod ids;
pub mod records;

pub use enums::{
    AppointmentStatus, ClaimStatus, LabStatus, PrescriptionStatus, RequestPriority, TaskPriority,
};
pub use error::ModelError;
pub use ids::{PatientId, StaffId};
pub use records::{
    ActivityEntry, Appointment, AppointmentDetail, Doctor, InsuranceClaim, LabRequest, LabTest,
    NursingTask, Patient, Policy, Prescription, Specialty,
};

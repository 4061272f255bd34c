//! Tests for caredesk-model types.

use caredesk_model::{
    AppointmentStatus, ClaimStatus, ModelError, Patient, PatientId, StaffId, TaskPriority,
};
use chrono::NaiveDate;

#[test]
fn patient_id_trims_and_rejects_blank() {
    let id = PatientId::new("  BN-0042 ").expect("valid id");
    assert_eq!(id.as_str(), "BN-0042");
    assert_eq!(id.to_string(), "BN-0042");

    assert_eq!(
        PatientId::new("   "),
        Err(ModelError::InvalidPatientId("   ".to_string()))
    );
}

#[test]
fn staff_id_rejects_blank() {
    assert!(StaffId::new("NV-031").is_ok());
    assert_eq!(
        StaffId::new(""),
        Err(ModelError::InvalidStaffId(String::new()))
    );
}

#[test]
fn status_display_names_are_user_facing() {
    assert_eq!(AppointmentStatus::CheckedIn.display_name(), "Checked in");
    assert_eq!(ClaimStatus::InReview.display_name(), "In review");
    assert_eq!(TaskPriority::default(), TaskPriority::Normal);
}

#[test]
fn patient_serializes_round_trip() {
    let patient = Patient {
        id: PatientId::new("BN-0001").expect("valid id"),
        name: "Nguyễn Văn A".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1987, 5, 14).expect("valid date"),
        phone: "0903 555 111".to_string(),
        address: "12 Lý Thường Kiệt, Hà Nội".to_string(),
        policy_no: Some("BHYT-8341".to_string()),
    };

    let json = serde_json::to_string(&patient).expect("serialize patient");
    let round: Patient = serde_json::from_str(&json).expect("deserialize patient");
    assert_eq!(round, patient);
}

//! Async directory collaborator.
//!
//! The directory answers joined lookups the flat repositories cannot: the
//! specialty list and appointments enriched with patient, doctor, and
//! specialty details. Calls are single in-flight requests awaited to a
//! terminal success or failure; there is no retry or cancellation here, the
//! page owns the loading flag.

use caredesk_model::{Appointment, AppointmentDetail, Specialty};

use crate::error::DataError;
use crate::sample::SampleData;

/// In-memory stand-in for the hospital directory service.
///
/// `with_outage` simulates an unreachable backend so the failure path stays
/// exercised end to end.
pub struct Directory {
    data: SampleData,
    outage: bool,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            data: SampleData::load(),
            outage: false,
        }
    }

    /// A directory whose calls all fail, for testing terminal error states.
    pub fn with_outage() -> Self {
        Self {
            data: SampleData::load(),
            outage: true,
        }
    }

    /// List all clinical specialties.
    pub async fn list_specialties(&self) -> Result<Vec<Specialty>, DataError> {
        if self.outage {
            return Err(DataError::DirectoryUnavailable {
                operation: "listing specialties".to_string(),
            });
        }
        Ok(self.data.specialties.clone())
    }

    /// List appointments joined with patient, doctor, and specialty details.
    ///
    /// Rows whose references cannot be resolved are skipped with a warning
    /// rather than failing the whole listing.
    pub async fn list_appointments_detailed(&self) -> Result<Vec<AppointmentDetail>, DataError> {
        if self.outage {
            return Err(DataError::DirectoryUnavailable {
                operation: "listing appointments".to_string(),
            });
        }
        Ok(self
            .data
            .appointments
            .rows()
            .iter()
            .filter_map(|appointment| self.join_appointment(appointment))
            .collect())
    }

    fn join_appointment(&self, appointment: &Appointment) -> Option<AppointmentDetail> {
        let patient = self
            .data
            .patients
            .rows()
            .iter()
            .find(|p| p.id == appointment.patient_id);
        let doctor = self
            .data
            .doctors
            .rows()
            .iter()
            .find(|d| d.id == appointment.doctor_id);

        let (Some(patient), Some(doctor)) = (patient, doctor) else {
            tracing::warn!(appointment = %appointment.id, "skipping appointment with unresolved references");
            return None;
        };

        let specialty = self
            .data
            .specialties
            .iter()
            .find(|s| s.code == doctor.specialty_code);

        Some(AppointmentDetail {
            appointment: appointment.clone(),
            patient_name: patient.name.clone(),
            doctor_name: doctor.name.clone(),
            specialty_code: doctor.specialty_code.clone(),
            specialty_name: specialty.map_or_else(
                || doctor.specialty_code.clone(),
                |s| s.name.clone(),
            ),
        })
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn joins_every_sample_appointment() {
        let directory = Directory::new();
        let details = directory
            .list_appointments_detailed()
            .await
            .expect("directory is up");

        // Every sample appointment resolves; order follows the source.
        assert_eq!(details.len(), directory.data.appointments.len());
        assert_eq!(details[0].appointment.id, "LH-1001");
        assert_eq!(details[0].patient_name, "Nguyễn Văn An");
        assert_eq!(details[0].specialty_name, "Cardiology");
    }

    #[tokio::test]
    async fn outage_surfaces_a_terminal_error() {
        let directory = Directory::with_outage();
        let err = directory
            .list_specialties()
            .await
            .expect_err("outage directory fails");
        assert_eq!(
            err,
            DataError::DirectoryUnavailable {
                operation: "listing specialties".to_string()
            }
        );
    }
}

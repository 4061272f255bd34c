//! Built-in sample datasets.
//!
//! The dashboard ships with a small, internally consistent hospital data
//! set: every appointment, prescription, claim, and task references a
//! patient and (where relevant) a doctor defined here. Identifiers follow
//! the house conventions: `BN-*` patients, `NV-*` staff, `LH-*`
//! appointments, `DT-*` prescriptions, `XN-*` lab requests, `YC-*` claims.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use caredesk_model::{
    ActivityEntry, Appointment, AppointmentStatus, ClaimStatus, Doctor, InsuranceClaim, LabRequest,
    LabStatus, LabTest, NursingTask, Patient, PatientId, Policy, Prescription, PrescriptionStatus,
    RequestPriority, Specialty, StaffId, TaskPriority,
};

use crate::repository::InMemoryRepository;

/// Every dataset the dashboard renders, loaded once at startup.
pub struct SampleData {
    pub patients: InMemoryRepository<Patient>,
    pub doctors: InMemoryRepository<Doctor>,
    pub specialties: Vec<Specialty>,
    pub appointments: InMemoryRepository<Appointment>,
    pub prescriptions: InMemoryRepository<Prescription>,
    pub lab_tests: InMemoryRepository<LabTest>,
    pub lab_requests: InMemoryRepository<LabRequest>,
    pub claims: InMemoryRepository<InsuranceClaim>,
    pub policies: InMemoryRepository<Policy>,
    pub tasks: InMemoryRepository<NursingTask>,
    pub activity: InMemoryRepository<ActivityEntry>,
}

impl SampleData {
    /// Build the full sample data set.
    pub fn load() -> Self {
        Self {
            patients: InMemoryRepository::new(patients()),
            doctors: InMemoryRepository::new(doctors()),
            specialties: specialties(),
            appointments: InMemoryRepository::new(appointments()),
            prescriptions: InMemoryRepository::new(prescriptions()),
            lab_tests: InMemoryRepository::new(lab_tests()),
            lab_requests: InMemoryRepository::new(lab_requests()),
            claims: InMemoryRepository::new(claims()),
            policies: InMemoryRepository::new(policies()),
            tasks: InMemoryRepository::new(tasks()),
            activity: InMemoryRepository::new(activity()),
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::load()
    }
}

fn pid(raw: &str) -> PatientId {
    PatientId::new(raw).expect("sample patient ids are non-empty")
}

fn sid(raw: &str) -> StaffId {
    StaffId::new(raw).expect("sample staff ids are non-empty")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    date(y, mo, d).and_time(time(h, mi))
}

fn patient(
    id: &str,
    name: &str,
    born: NaiveDate,
    phone: &str,
    address: &str,
    policy_no: Option<&str>,
) -> Patient {
    Patient {
        id: pid(id),
        name: name.to_string(),
        date_of_birth: born,
        phone: phone.to_string(),
        address: address.to_string(),
        policy_no: policy_no.map(str::to_string),
    }
}

fn patients() -> Vec<Patient> {
    vec![
        patient("BN-0001", "Nguyễn Văn An", date(1987, 5, 14), "0903 555 111", "12 Lý Thường Kiệt, Hà Nội", Some("BHYT-8341")),
        patient("BN-0002", "Trần Thị Bích", date(1992, 11, 2), "0912 404 220", "48 Hai Bà Trưng, Hà Nội", Some("BHYT-2210")),
        patient("BN-0003", "Lê Hoàng Cường", date(1978, 1, 23), "0988 777 015", "5 Trần Hưng Đạo, Hải Phòng", None),
        patient("BN-0004", "Phạm Thu Dung", date(2001, 7, 9), "0934 268 932", "102 Nguyễn Trãi, Hà Nội", Some("BHYT-5077")),
        patient("BN-0005", "Hoàng Minh Đức", date(1965, 3, 30), "0905 118 664", "77 Lê Lợi, Đà Nẵng", Some("BHYT-1192")),
        patient("BN-0006", "Vũ Ngọc Giang", date(1990, 9, 17), "0977 350 402", "230 Cầu Giấy, Hà Nội", None),
        patient("BN-0007", "Đặng Quốc Huy", date(1984, 12, 5), "0918 225 873", "16 Bạch Đằng, Huế", Some("BHYT-6630")),
        patient("BN-0008", "Bùi Thanh Lan", date(1996, 4, 21), "0939 014 557", "89 Võ Thị Sáu, TP.HCM", Some("BHYT-0915")),
        patient("BN-0009", "Đỗ Khánh Linh", date(2008, 8, 8), "0902 663 140", "3 Phan Chu Trinh, Hà Nội", Some("BHYT-7768")),
        patient("BN-0010", "Ngô Tuấn Minh", date(1959, 6, 1), "0983 491 206", "54 Điện Biên Phủ, Hà Nội", None),
    ]
}

fn doctors() -> Vec<Doctor> {
    let doctor = |id: &str, name: &str, specialty: &str| Doctor {
        id: sid(id),
        name: name.to_string(),
        specialty_code: specialty.to_string(),
    };
    vec![
        doctor("NV-011", "BS. Phan Anh Tú", "CARD"),
        doctor("NV-014", "BS. Lương Thị Hà", "PEDS"),
        doctor("NV-019", "BS. Trịnh Công Sơn", "ORTH"),
        doctor("NV-023", "BS. Mai Xuân Quý", "DERM"),
        doctor("NV-027", "BS. Võ Hồng Nhung", "NEUR"),
        doctor("NV-031", "BS. Lý Đức Thắng", "GAST"),
    ]
}

fn specialties() -> Vec<Specialty> {
    let specialty = |code: &str, name: &str| Specialty {
        code: code.to_string(),
        name: name.to_string(),
    };
    vec![
        specialty("CARD", "Cardiology"),
        specialty("PEDS", "Pediatrics"),
        specialty("ORTH", "Orthopedics"),
        specialty("DERM", "Dermatology"),
        specialty("NEUR", "Neurology"),
        specialty("GAST", "Gastroenterology"),
    ]
}

fn appointments() -> Vec<Appointment> {
    let appt = |id: &str,
                patient: &str,
                doctor: &str,
                d: NaiveDate,
                t: NaiveTime,
                status: AppointmentStatus,
                reason: &str| Appointment {
        id: id.to_string(),
        patient_id: pid(patient),
        doctor_id: sid(doctor),
        date: d,
        time: t,
        status,
        reason: reason.to_string(),
    };
    vec![
        appt("LH-1001", "BN-0001", "NV-011", date(2026, 8, 25), time(8, 0), AppointmentStatus::CheckedIn, "Chest pain follow-up"),
        appt("LH-1002", "BN-0004", "NV-014", date(2026, 8, 25), time(8, 30), AppointmentStatus::Scheduled, "Vaccination schedule"),
        appt("LH-1003", "BN-0002", "NV-023", date(2026, 8, 25), time(9, 0), AppointmentStatus::Scheduled, "Skin rash"),
        appt("LH-1004", "BN-0009", "NV-014", date(2026, 8, 25), time(9, 30), AppointmentStatus::Cancelled, "Fever, cough"),
        appt("LH-1005", "BN-0005", "NV-011", date(2026, 8, 25), time(10, 0), AppointmentStatus::Scheduled, "Hypertension review"),
        appt("LH-1006", "BN-0007", "NV-019", date(2026, 8, 26), time(8, 0), AppointmentStatus::Scheduled, "Knee pain after fall"),
        appt("LH-1007", "BN-0003", "NV-031", date(2026, 8, 26), time(8, 45), AppointmentStatus::Scheduled, "Stomach ache, bloating"),
        appt("LH-1008", "BN-0010", "NV-027", date(2026, 8, 26), time(9, 15), AppointmentStatus::Scheduled, "Recurring headaches"),
        appt("LH-1009", "BN-0006", "NV-023", date(2026, 8, 24), time(14, 0), AppointmentStatus::Completed, "Eczema check"),
        appt("LH-1010", "BN-0008", "NV-011", date(2026, 8, 24), time(15, 0), AppointmentStatus::Completed, "Palpitations"),
        appt("LH-1011", "BN-0001", "NV-031", date(2026, 8, 27), time(10, 30), AppointmentStatus::Scheduled, "Endoscopy consult"),
        appt("LH-1012", "BN-0002", "NV-027", date(2026, 8, 28), time(11, 0), AppointmentStatus::Scheduled, "Dizziness"),
    ]
}

fn prescriptions() -> Vec<Prescription> {
    let rx = |id: &str,
              patient: &str,
              doctor: &str,
              med: &str,
              dose: &str,
              issued: NaiveDate,
              status: PrescriptionStatus| Prescription {
        id: id.to_string(),
        patient_id: pid(patient),
        prescriber_id: sid(doctor),
        medication: med.to_string(),
        dose: dose.to_string(),
        issued_on: issued,
        status,
    };
    vec![
        rx("DT-2001", "BN-0001", "NV-011", "Amlodipine", "5mg, 1x/day", date(2026, 8, 24), PrescriptionStatus::Dispensed),
        rx("DT-2002", "BN-0005", "NV-011", "Losartan", "50mg, 1x/day", date(2026, 8, 24), PrescriptionStatus::Issued),
        rx("DT-2003", "BN-0004", "NV-014", "Paracetamol", "250mg, 3x/day", date(2026, 8, 23), PrescriptionStatus::Dispensed),
        rx("DT-2004", "BN-0006", "NV-023", "Hydrocortisone cream", "1%, 2x/day", date(2026, 8, 24), PrescriptionStatus::Dispensed),
        rx("DT-2005", "BN-0003", "NV-031", "Omeprazole", "20mg, 1x/day", date(2026, 8, 22), PrescriptionStatus::Issued),
        rx("DT-2006", "BN-0010", "NV-027", "Sumatriptan", "50mg, as needed", date(2026, 8, 21), PrescriptionStatus::Issued),
        rx("DT-2007", "BN-0008", "NV-011", "Metoprolol", "25mg, 2x/day", date(2026, 8, 24), PrescriptionStatus::Cancelled),
        rx("DT-2008", "BN-0002", "NV-023", "Cetirizine", "10mg, 1x/day", date(2026, 8, 20), PrescriptionStatus::Dispensed),
        rx("DT-2009", "BN-0009", "NV-014", "Amoxicillin", "250mg, 3x/day", date(2026, 8, 19), PrescriptionStatus::Dispensed),
        rx("DT-2010", "BN-0007", "NV-019", "Ibuprofen", "400mg, 2x/day", date(2026, 8, 24), PrescriptionStatus::Issued),
    ]
}

fn lab_tests() -> Vec<LabTest> {
    let test = |code: &str, name: &str, category: &str| LabTest {
        code: code.to_string(),
        name: name.to_string(),
        category: category.to_string(),
    };
    vec![
        test("CBC", "Complete blood count", "Hematology"),
        test("GLU", "Fasting glucose", "Biochemistry"),
        test("LIP", "Lipid panel", "Biochemistry"),
        test("LFT", "Liver function tests", "Biochemistry"),
        test("TSH", "Thyroid stimulating hormone", "Endocrinology"),
        test("URI", "Urinalysis", "Microbiology"),
        test("ECG", "Electrocardiogram", "Cardiology"),
        test("XRC", "Chest X-ray", "Imaging"),
    ]
}

fn lab_requests() -> Vec<LabRequest> {
    let req = |id: &str,
               patient: &str,
               test: &str,
               requested: NaiveDate,
               priority: RequestPriority,
               status: LabStatus| LabRequest {
        id: id.to_string(),
        patient_id: pid(patient),
        test_code: test.to_string(),
        requested_on: requested,
        priority,
        status,
    };
    vec![
        req("XN-3001", "BN-0001", "ECG", date(2026, 8, 25), RequestPriority::Urgent, LabStatus::InProgress),
        req("XN-3002", "BN-0001", "LIP", date(2026, 8, 25), RequestPriority::Routine, LabStatus::Requested),
        req("XN-3003", "BN-0005", "GLU", date(2026, 8, 24), RequestPriority::Routine, LabStatus::Ready),
        req("XN-3004", "BN-0003", "LFT", date(2026, 8, 24), RequestPriority::Routine, LabStatus::InProgress),
        req("XN-3005", "BN-0009", "CBC", date(2026, 8, 23), RequestPriority::Urgent, LabStatus::Ready),
        req("XN-3006", "BN-0010", "XRC", date(2026, 8, 23), RequestPriority::Routine, LabStatus::Ready),
        req("XN-3007", "BN-0008", "ECG", date(2026, 8, 24), RequestPriority::Routine, LabStatus::Ready),
        req("XN-3008", "BN-0002", "URI", date(2026, 8, 25), RequestPriority::Routine, LabStatus::Requested),
    ]
}

fn claims() -> Vec<InsuranceClaim> {
    let claim = |id: &str,
                 patient: &str,
                 policy: &str,
                 amount: i64,
                 submitted: NaiveDate,
                 status: ClaimStatus| InsuranceClaim {
        id: id.to_string(),
        patient_id: pid(patient),
        policy_no: policy.to_string(),
        amount_kvnd: amount,
        submitted_on: submitted,
        status,
    };
    vec![
        claim("YC-4001", "BN-0001", "BHYT-8341", 1_250, date(2026, 8, 24), ClaimStatus::InReview),
        claim("YC-4002", "BN-0004", "BHYT-5077", 320, date(2026, 8, 23), ClaimStatus::Approved),
        claim("YC-4003", "BN-0005", "BHYT-1192", 2_780, date(2026, 8, 22), ClaimStatus::Submitted),
        claim("YC-4004", "BN-0007", "BHYT-6630", 1_940, date(2026, 8, 21), ClaimStatus::Approved),
        claim("YC-4005", "BN-0008", "BHYT-0915", 560, date(2026, 8, 20), ClaimStatus::Rejected),
        claim("YC-4006", "BN-0009", "BHYT-7768", 415, date(2026, 8, 19), ClaimStatus::Approved),
        claim("YC-4007", "BN-0002", "BHYT-2210", 880, date(2026, 8, 25), ClaimStatus::Submitted),
        claim("YC-4008", "BN-0001", "BHYT-8341", 150, date(2026, 8, 18), ClaimStatus::Approved),
    ]
}

fn policies() -> Vec<Policy> {
    let policy = |number: &str, provider: &str, holder: &str, until: NaiveDate| Policy {
        number: number.to_string(),
        provider: provider.to_string(),
        holder: pid(holder),
        valid_until: until,
    };
    vec![
        policy("BHYT-8341", "VSS", "BN-0001", date(2026, 12, 31)),
        policy("BHYT-2210", "VSS", "BN-0002", date(2027, 6, 30)),
        policy("BHYT-5077", "Bảo Việt", "BN-0004", date(2026, 12, 31)),
        policy("BHYT-1192", "VSS", "BN-0005", date(2026, 10, 31)),
        policy("BHYT-6630", "Bảo Việt", "BN-0007", date(2027, 3, 31)),
        policy("BHYT-0915", "PVI", "BN-0008", date(2026, 9, 30)),
        policy("BHYT-7768", "VSS", "BN-0009", date(2027, 1, 31)),
    ]
}

fn tasks() -> Vec<NursingTask> {
    let task = |id: &str,
                patient: &str,
                ward: &str,
                description: &str,
                due: NaiveTime,
                priority: TaskPriority,
                done: bool| NursingTask {
        id: id.to_string(),
        patient_id: pid(patient),
        ward: ward.to_string(),
        description: description.to_string(),
        due,
        priority,
        done,
    };
    vec![
        task("CV-5001", "BN-0005", "A2", "Blood pressure check", time(8, 0), TaskPriority::High, true),
        task("CV-5002", "BN-0005", "A2", "Administer morning medication", time(8, 30), TaskPriority::High, true),
        task("CV-5003", "BN-0003", "B1", "Pre-endoscopy fasting check", time(9, 0), TaskPriority::Normal, false),
        task("CV-5004", "BN-0010", "A1", "Neuro observation round", time(10, 0), TaskPriority::High, false),
        task("CV-5005", "BN-0007", "C3", "Change wound dressing", time(10, 30), TaskPriority::Normal, false),
        task("CV-5006", "BN-0001", "A2", "ECG electrode placement", time(11, 0), TaskPriority::High, false),
        task("CV-5007", "BN-0009", "B2", "Temperature check", time(13, 0), TaskPriority::Low, false),
        task("CV-5008", "BN-0005", "A2", "Evening medication", time(19, 0), TaskPriority::Normal, false),
    ]
}

fn activity() -> Vec<ActivityEntry> {
    let entry = |id: &str, actor: &str, action: &str, when: NaiveDateTime| ActivityEntry {
        id: id.to_string(),
        actor: actor.to_string(),
        action: action.to_string(),
        at: when,
    };
    vec![
        entry("HD-6001", "le.thu", "Registered patient BN-0010", at(2026, 8, 25, 7, 42)),
        entry("HD-6002", "BS. Phan Anh Tú", "Checked in appointment LH-1001", at(2026, 8, 25, 7, 58)),
        entry("HD-6003", "pharmacy.01", "Dispensed prescription DT-2001", at(2026, 8, 25, 8, 15)),
        entry("HD-6004", "lab.tech.03", "Started lab request XN-3001", at(2026, 8, 25, 8, 20)),
        entry("HD-6005", "claims.desk", "Submitted claim YC-4007", at(2026, 8, 25, 8, 40)),
        entry("HD-6006", "nurse.a2", "Completed task CV-5001", at(2026, 8, 25, 8, 5)),
        entry("HD-6007", "le.thu", "Cancelled appointment LH-1004", at(2026, 8, 25, 8, 55)),
        entry("HD-6008", "admin", "Updated ward A2 roster", at(2026, 8, 25, 9, 10)),
        entry("HD-6009", "lab.tech.01", "Released results for XN-3005", at(2026, 8, 25, 9, 25)),
        entry("HD-6010", "claims.desk", "Approved claim YC-4006", at(2026, 8, 25, 9, 48)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_keys_are_unique() {
        let data = SampleData::load();
        let ids: Vec<&str> = data.patients.rows().iter().map(|p| p.id.as_str()).collect();
        let unique: HashSet<&&str> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());

        let appt_ids: HashSet<&str> = data
            .appointments
            .rows()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(appt_ids.len(), data.appointments.len());
    }

    #[test]
    fn references_resolve_within_the_sample() {
        let data = SampleData::load();
        let patient_ids: HashSet<&str> =
            data.patients.rows().iter().map(|p| p.id.as_str()).collect();
        let doctor_ids: HashSet<&str> =
            data.doctors.rows().iter().map(|d| d.id.as_str()).collect();
        let specialty_codes: HashSet<&str> =
            data.specialties.iter().map(|s| s.code.as_str()).collect();
        let test_codes: HashSet<&str> =
            data.lab_tests.rows().iter().map(|t| t.code.as_str()).collect();

        for appt in data.appointments.rows() {
            assert!(patient_ids.contains(appt.patient_id.as_str()), "{}", appt.id);
            assert!(doctor_ids.contains(appt.doctor_id.as_str()), "{}", appt.id);
        }
        for doctor in data.doctors.rows() {
            assert!(specialty_codes.contains(doctor.specialty_code.as_str()));
        }
        for request in data.lab_requests.rows() {
            assert!(test_codes.contains(request.test_code.as_str()), "{}", request.id);
        }

        let policy_numbers: HashSet<&str> =
            data.policies.rows().iter().map(|p| p.number.as_str()).collect();
        for claim in data.claims.rows() {
            assert!(policy_numbers.contains(claim.policy_no.as_str()), "{}", claim.id);
        }
        for policy in data.policies.rows() {
            assert!(patient_ids.contains(policy.holder.as_str()), "{}", policy.number);
        }
    }
}

//! Patient records and form validation.

/// Fitting pipeline status for a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Scanning,
    Review,
    Approved,
    Delivered,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 4] = [
        PatientStatus::Scanning,
        PatientStatus::Review,
        PatientStatus::Approved,
        PatientStatus::Delivered,
    ];

    /// Display label shown next to the status icon.
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Scanning => "In Progress",
            PatientStatus::Review => "Under Review",
            PatientStatus::Approved => "Approved for Print",
            PatientStatus::Delivered => "Delivered",
        }
    }
}

/// A patient being fitted for a custom neck brace.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub condition: String,
    pub status: PatientStatus,
    /// Relative description of the last change ("2 hours ago").
    pub last_update: String,
    pub has_trach: bool,
    pub trach_size: Option<String>,
    pub notes: String,
}

impl Patient {
    /// Case-insensitive substring match against name or condition.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.condition.to_lowercase().contains(&query)
    }
}

/// Seed records shown until a real record store exists.
pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "John Smith".to_string(),
            age: 67,
            condition: "ALS".to_string(),
            status: PatientStatus::Review,
            last_update: "2 hours ago".to_string(),
            has_trach: false,
            trach_size: None,
            notes: String::new(),
        },
        Patient {
            id: 2,
            name: "Maria Garcia".to_string(),
            age: 54,
            condition: "Cervical Support".to_string(),
            status: PatientStatus::Delivered,
            last_update: "1 week ago".to_string(),
            has_trach: true,
            trach_size: Some("8.0mm".to_string()),
            notes: String::new(),
        },
        Patient {
            id: 3,
            name: "Robert Johnson".to_string(),
            age: 72,
            condition: "ALS".to_string(),
            status: PatientStatus::Approved,
            last_update: "3 days ago".to_string(),
            has_trach: false,
            trach_size: None,
            notes: String::new(),
        },
    ]
}

/// Editable form fields for creating or editing a patient. Age is kept as the
/// raw text input so partial entries survive until save.
#[derive(Debug, Clone, Default)]
pub struct PatientDraft {
    pub name: String,
    pub age: String,
    pub condition: String,
    pub has_trach: bool,
    pub trach_size: String,
    pub notes: String,
}

/// Per-field validation errors, shown inline next to each field. Empty means
/// the draft may be saved; nothing is thrown or logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub age: Option<&'static str>,
    pub condition: Option<&'static str>,
    pub trach_size: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.condition.is_none() && self.trach_size.is_none()
    }
}

impl PatientDraft {
    /// Pre-fill the draft from an existing record for editing.
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            age: patient.age.to_string(),
            condition: patient.condition.clone(),
            has_trach: patient.has_trach,
            trach_size: patient.trach_size.clone().unwrap_or_default(),
            notes: patient.notes.clone(),
        }
    }

    /// Validate all fields. Invalid fields block only the save action.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }

        if self.age.trim().is_empty() {
            errors.age = Some("Age is required");
        } else if !matches!(self.age.trim().parse::<u32>(), Ok(1..=120)) {
            errors.age = Some("Please enter a valid age");
        }

        if self.condition.trim().is_empty() {
            errors.condition = Some("Medical condition is required");
        }

        if self.has_trach && self.trach_size.trim().is_empty() {
            errors.trach_size = Some("Tracheostomy size is required when trach is present");
        }

        errors
    }

    /// Build a patient record from the draft. Returns `None` unless the draft
    /// validates, so a record can never hold an out-of-range age.
    pub fn to_patient(&self, id: u32, status: PatientStatus) -> Option<Patient> {
        if !self.validate().is_empty() {
            return None;
        }
        let age = self.age.trim().parse::<u8>().ok()?;

        Some(Patient {
            id,
            name: self.name.trim().to_string(),
            age,
            condition: self.condition.trim().to_string(),
            status,
            last_update: "Just now".to_string(),
            has_trach: self.has_trach,
            trach_size: if self.has_trach {
                Some(self.trach_size.trim().to_string())
            } else {
                None
            },
            notes: self.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PatientDraft {
        PatientDraft {
            name: "Jane Doe".to_string(),
            age: "45".to_string(),
            condition: "ALS".to_string(),
            has_trach: false,
            trach_size: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_age_must_be_numeric() {
        let mut draft = valid_draft();
        draft.age = "abc".to_string();
        assert!(draft.validate().age.is_some());
    }

    #[test]
    fn test_age_range() {
        let mut draft = valid_draft();

        draft.age = "200".to_string();
        assert!(draft.validate().age.is_some());

        draft.age = "0".to_string();
        assert!(draft.validate().age.is_some());

        draft.age = "45".to_string();
        assert!(draft.validate().age.is_none());
    }

    #[test]
    fn test_required_fields() {
        let mut draft = valid_draft();
        draft.name = "  ".to_string();
        draft.condition = String::new();

        let errors = draft.validate();
        assert!(errors.name.is_some());
        assert!(errors.condition.is_some());
    }

    #[test]
    fn test_trach_size_required_when_trach_present() {
        let mut draft = valid_draft();
        draft.has_trach = true;
        assert!(draft.validate().trach_size.is_some());

        draft.trach_size = "8.0mm".to_string();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_to_patient_rejects_invalid() {
        let mut draft = valid_draft();
        draft.age = "abc".to_string();
        assert!(draft.to_patient(1, PatientStatus::Scanning).is_none());
    }

    #[test]
    fn test_to_patient_trims_fields() {
        let mut draft = valid_draft();
        draft.name = "  Jane Doe ".to_string();

        let patient = draft.to_patient(7, PatientStatus::Scanning).expect("draft is valid");
        assert_eq!(patient.id, 7);
        assert_eq!(patient.name, "Jane Doe");
        assert_eq!(patient.age, 45);
        assert_eq!(patient.trach_size, None);
    }

    #[test]
    fn test_search_matches_name_and_condition() {
        let patients = sample_patients();
        assert!(patients[0].matches("john"));
        assert!(patients[0].matches("als"));
        assert!(!patients[0].matches("garcia"));
        assert!(patients[1].matches("cervical"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PatientStatus::Scanning.label(), "In Progress");
        assert_eq!(PatientStatus::Review.label(), "Under Review");
        assert_eq!(PatientStatus::Approved.label(), "Approved for Print");
        assert_eq!(PatientStatus::Delivered.label(), "Delivered");
    }
}

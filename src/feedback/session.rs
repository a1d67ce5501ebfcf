//! Form session value object

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Accumulated field values, keyed by field name
pub type FormValues = BTreeMap<String, String>;

/// One screen of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// Welcome banner, navigation only
    #[default]
    Banner,
    /// Showroom, visit date and sales executive
    Showroom,
    /// Customer phone number
    CustomerNumber,
    /// Customer name and address
    CustomerDetails,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Banner,
        Step::Showroom,
        Step::CustomerNumber,
        Step::CustomerDetails,
    ];

    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Step::Banner => 1,
            Step::Showroom => 2,
            Step::CustomerNumber => 3,
            Step::CustomerDetails => 4,
        }
    }

    /// The step that follows, `None` for the last one
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Banner => Some(Step::Showroom),
            Step::Showroom => Some(Step::CustomerNumber),
            Step::CustomerNumber => Some(Step::CustomerDetails),
            Step::CustomerDetails => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Banner => "Welcome",
            Step::Showroom => "Select Your Showroom",
            Step::CustomerNumber => "Enter Customer Number",
            Step::CustomerDetails => "Customer Details",
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// The accumulated, in-progress record of a single form-filling pass.
///
/// Only [`StepFormController`](super::StepFormController) mutates a session.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    pub(super) id: Uuid,
    pub(super) current_step: Step,
    pub(super) values: FormValues,
    pub(super) is_complete: bool,
    pub(super) started_at: DateTime<Utc>,
    pub(super) completed_at: Option<DateTime<Utc>>,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current_step: Step::default(),
            values: FormValues::new(),
            is_complete: false,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod step {
        use super::*;

        #[test]
        fn test_numbers_are_one_to_four() {
            let numbers: Vec<u8> = Step::ALL.iter().map(|s| s.number()).collect();
            assert_eq!(numbers, vec![1, 2, 3, 4]);
        }

        #[test]
        fn test_next_walks_forward_without_skipping() {
            for pair in Step::ALL.windows(2) {
                assert_eq!(pair[0].next(), Some(pair[1]));
            }
            assert_eq!(Step::CustomerDetails.next(), None);
        }

        #[test]
        fn test_only_customer_details_is_last() {
            assert!(Step::CustomerDetails.is_last());
            assert!(!Step::Banner.is_last());
            assert!(!Step::Showroom.is_last());
        }

        #[test]
        fn test_default_is_banner() {
            assert_eq!(Step::default(), Step::Banner);
        }
    }

    mod form_session {
        use super::*;

        #[test]
        fn test_new_session_starts_empty() {
            let session = FormSession::new();
            assert_eq!(session.current_step(), Step::Banner);
            assert!(session.values().is_empty());
            assert!(!session.is_complete());
            assert!(session.completed_at().is_none());
        }

        #[test]
        fn test_sessions_get_distinct_ids() {
            assert_ne!(FormSession::new().id(), FormSession::new().id());
        }

        #[test]
        fn test_value_lookup() {
            let mut session = FormSession::new();
            session
                .values
                .insert("showroom".to_string(), "Salem".to_string());
            assert_eq!(session.value("showroom"), Some("Salem"));
            assert_eq!(session.value("date"), None);
        }
    }
}

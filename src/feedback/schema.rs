//! Per-step validation rules

use super::input::StepInput;
use super::session::{FormValues, Step};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Field names used across the steps
pub mod fields {
    pub const SHOWROOM: &str = "showroom";
    pub const DATE: &str = "date";
    pub const SALES_EXEC_NUMBER: &str = "salesExecNumber";
    pub const SALES_EXEC_NAME: &str = "salesExecName";
    pub const CUSTOMER_NUMBER: &str = "customerNumber";
    pub const CUSTOMER_NAME: &str = "customerName";
    pub const CUSTOMER_ADDRESS: &str = "customerAddress";
}

/// Date format accepted by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Value kind a field must parse as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
}

impl FieldKind {
    /// Whether a non-empty `value` parses as this kind
    pub fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FieldKind::Text => true,
            // Round-trip so unpadded or signed years don't slip through
            FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == value),
            FieldKind::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
        }
    }

    fn format_message(self) -> &'static str {
        match self {
            FieldKind::Text => "Invalid value",
            FieldKind::Date => "Enter a valid date (YYYY-MM-DD)",
            FieldKind::Number => "Enter a valid number",
        }
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    Required,
    TooShort { min: usize },
    InvalidFormat(FieldKind),
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Required => write!(f, "required"),
            ValidationReason::TooShort { .. } => write!(f, "too-short"),
            ValidationReason::InvalidFormat(_) => write!(f, "invalid-format"),
        }
    }
}

/// A field-scoped failure reported instead of advancing the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
    /// User-facing message shown next to the field
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.reason)
    }
}

/// All field errors for the active step, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field)
    }
}

/// Rule for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    /// Message used when a required value is missing
    pub message: &'static str,
}

impl FieldRule {
    /// A required text field
    pub fn required(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
            min_length: None,
            message,
        }
    }

    pub fn of_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Check one value. Empty values only fail when the field is required.
    pub fn check(&self, value: &str) -> Option<ValidationError> {
        let reason = match self.min_length {
            _ if value.is_empty() => self.required.then_some(ValidationReason::Required)?,
            Some(min) if value.chars().count() < min => ValidationReason::TooShort { min },
            _ if !self.kind.accepts(value) => ValidationReason::InvalidFormat(self.kind),
            _ => return None,
        };

        let message = match reason {
            ValidationReason::Required => self.message.to_string(),
            ValidationReason::TooShort { min } => format!("Must be at least {min} characters"),
            ValidationReason::InvalidFormat(kind) => kind.format_message().to_string(),
        };

        Some(ValidationError {
            field: self.name.to_string(),
            reason,
            message,
        })
    }
}

/// Ordered rule set for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSchema {
    pub step: Step,
    pub rules: Vec<FieldRule>,
}

impl StepSchema {
    pub fn new(step: Step, rules: Vec<FieldRule>) -> Self {
        Self { step, rules }
    }

    /// The rule table for `step`
    pub fn for_step(step: Step) -> Self {
        let rules = match step {
            Step::Banner => vec![],
            Step::Showroom => vec![
                FieldRule::required(fields::SHOWROOM, "Please select a showroom"),
                FieldRule::required(fields::DATE, "Please select a date").of_kind(FieldKind::Date),
                FieldRule::required(fields::SALES_EXEC_NUMBER, "Enter Sales Executive E-Number"),
                FieldRule::required(fields::SALES_EXEC_NAME, "Enter Sales Executive Name"),
            ],
            Step::CustomerNumber => vec![FieldRule::required(
                fields::CUSTOMER_NUMBER,
                "Enter Customer Number",
            )
            .of_kind(FieldKind::Number)],
            Step::CustomerDetails => vec![
                FieldRule::required(fields::CUSTOMER_NAME, "Enter Customer Name"),
                FieldRule::required(fields::CUSTOMER_ADDRESS, "Enter Customer Address"),
            ],
        };
        Self::new(step, rules)
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == field)
    }

    /// Validate `input` against every rule.
    ///
    /// On success returns the declared fields present in `input`, with null
    /// values normalized to `""`. Undeclared fields are dropped.
    pub fn validate(&self, input: &StepInput) -> Result<FormValues, ValidationErrors> {
        let errors: Vec<ValidationError> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(input.value(rule.name).unwrap_or_default()))
            .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(self
            .rules
            .iter()
            .filter_map(|rule| {
                input
                    .value(rule.name)
                    .map(|value| (rule.name.to_string(), value.to_string()))
            })
            .collect())
    }
}

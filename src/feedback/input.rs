//! Raw field values submitted for one step

use std::collections::HashMap;

/// Raw values for the active step's fields.
///
/// A `None` value stands for a null input (e.g. no radio option chosen) and
/// is read back as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInput(HashMap<String, Option<String>>);

impl StepInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a present value
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Builder-style setter for a null value
    pub fn with_null(mut self, field: &str) -> Self {
        self.set(field, None);
        self
    }

    pub fn set(&mut self, field: &str, value: Option<String>) {
        self.0.insert(field.to_string(), value);
    }

    /// Value for `field` with null normalized to `""`; `None` when absent
    pub fn value(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|value| value.as_deref().unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

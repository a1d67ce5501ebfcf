//! Form field value objects

use crate::feedback::SHOWROOM_GRID_COLUMNS;

/// Which characters a text field accepts as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    #[default]
    Any,
    /// Digits and the characters that can appear in a number
    Numeric,
    /// Digits and dashes (`YYYY-MM-DD`)
    Date,
}

impl InputFilter {
    pub fn accepts(self, c: char) -> bool {
        match self {
            InputFilter::Any => !c.is_control(),
            InputFilter::Numeric => c.is_ascii_digit() || matches!(c, '.' | '-' | '+'),
            InputFilter::Date => c.is_ascii_digit() || c == '-',
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Single choice out of a fixed option list
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
        cursor: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub filter: InputFilter,
    /// Hint shown while the field is empty
    pub placeholder: Option<&'static str>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_multiline: false,
            filter: InputFilter::Any,
            placeholder: None,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: &'static str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new numeric field
    pub fn numeric(name: &'static str, label: &'static str) -> Self {
        Self {
            filter: InputFilter::Numeric,
            ..Self::text(name, label)
        }
    }

    /// Create a new date field
    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            filter: InputFilter::Date,
            placeholder: Some("YYYY-MM-DD"),
            ..Self::text(name, label)
        }
    }

    /// Create a new single-choice field with nothing selected
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            value: FieldValue::Choice {
                options,
                selected: None,
                cursor: 0,
            },
            ..Self::text(name, label)
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { .. } => "",
        }
    }

    /// The chosen option of a choice field
    pub fn selected_option(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Choice {
                options, selected, ..
            } => selected.and_then(|i| options.get(i).copied()),
            FieldValue::Text(_) => None,
        }
    }

    /// Value handed to the controller; `None` means nothing was chosen
    pub fn input_value(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Choice { .. } => self.selected_option().map(str::to_string),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.filter.accepts(c) {
                s.push(c);
            }
        }
    }

    /// Insert a line break (multiline fields only)
    pub fn push_newline(&mut self) {
        if let (true, FieldValue::Text(s)) = (self.is_multiline, &mut self.value) {
            s.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice {
                selected, cursor, ..
            } => {
                *selected = None;
                *cursor = 0;
            }
        }
    }

    /// Move the choice highlight by whole columns and rows of the grid.
    /// Stops at the edges.
    pub fn move_cursor(&mut self, columns: isize, rows: isize) {
        if let FieldValue::Choice {
            options, cursor, ..
        } = &mut self.value
        {
            let delta = columns + rows * SHOWROOM_GRID_COLUMNS as isize;
            let target = *cursor as isize + delta;
            if (0..options.len() as isize).contains(&target) {
                *cursor = target as usize;
            }
        }
    }

    /// Choose the highlighted option
    pub fn select_cursor(&mut self) {
        if let FieldValue::Choice {
            selected, cursor, ..
        } = &mut self.value
        {
            *selected = Some(*cursor);
        }
    }

    /// Highlighted option index of a choice field
    pub fn cursor(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Choice { cursor, .. } => Some(*cursor),
            FieldValue::Text(_) => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => self.selected_option().unwrap_or_default().to_string(),
        }
    }
}

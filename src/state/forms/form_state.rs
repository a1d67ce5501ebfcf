//! Form state management and per-step form structs

use super::field::FormField;
use crate::feedback::{fields, Step, StepInput, SHOWROOM_LOCATIONS};

/// Trait for common form operations.
///
/// Focus indices run over the input fields followed by one trailing index
/// for the submit button.
pub trait Form {
    /// Number of input fields, excluding the submit button
    fn input_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    /// Focus stops, including the submit button
    fn field_count(&self) -> usize {
        self.input_count() + 1
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn is_button_active(&self) -> bool {
        self.active_field() == self.input_count()
    }
    fn get_active_field(&self) -> Option<&FormField> {
        self.get_field(self.active_field())
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }
    /// Collect the raw values of every input field
    fn step_input(&self) -> StepInput {
        let mut input = StepInput::new();
        for field in (0..self.input_count()).filter_map(|i| self.get_field(i)) {
            input.set(field.name, field.input_value());
        }
        input
    }
}

/// The form shown for the current step
#[derive(Debug, Clone, Default)]
pub enum FormState {
    /// Banner and thank-you screens have no inputs
    #[default]
    None,
    Showroom(ShowroomForm),
    CustomerNumber(CustomerNumberForm),
    CustomerDetails(CustomerDetailsForm),
}

impl FormState {
    /// Fresh, empty form for `step`
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Banner => FormState::None,
            Step::Showroom => FormState::Showroom(ShowroomForm::new()),
            Step::CustomerNumber => FormState::CustomerNumber(CustomerNumberForm::new()),
            Step::CustomerDetails => FormState::CustomerDetails(CustomerDetailsForm::new()),
        }
    }

    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::Showroom(f) => Some(f),
            FormState::CustomerNumber(f) => Some(f),
            FormState::CustomerDetails(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::Showroom(f) => Some(f),
            FormState::CustomerNumber(f) => Some(f),
            FormState::CustomerDetails(f) => Some(f),
        }
    }

    pub fn next_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.prev_field();
        }
    }

    pub fn get_active_field(&self) -> Option<&FormField> {
        self.as_form().and_then(|f| f.get_active_field())
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.as_form_mut().and_then(|f| f.get_active_field_mut())
    }

    pub fn is_button_active(&self) -> bool {
        self.as_form().is_some_and(|f| f.is_button_active())
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_active_field().is_some_and(|f| f.is_multiline)
    }

    pub fn is_active_field_choice(&self) -> bool {
        self.get_active_field().is_some_and(|f| f.is_choice())
    }

    /// Raw values of the current form; empty when there is no form
    pub fn step_input(&self) -> StepInput {
        self.as_form().map(|f| f.step_input()).unwrap_or_default()
    }
}

// Showroom step
#[derive(Debug, Clone)]
pub struct ShowroomForm {
    pub showroom: FormField,
    pub date: FormField,
    pub sales_exec_number: FormField,
    pub sales_exec_name: FormField,
    pub active_field_index: usize,
}

impl ShowroomForm {
    pub fn new() -> Self {
        Self {
            showroom: FormField::choice(fields::SHOWROOM, "Showroom", SHOWROOM_LOCATIONS),
            date: FormField::date(fields::DATE, "Date"),
            sales_exec_number: FormField::text(
                fields::SALES_EXEC_NUMBER,
                "Sales Executive E-Number",
            ),
            sales_exec_name: FormField::text(fields::SALES_EXEC_NAME, "Sales Executive Name"),
            active_field_index: 0,
        }
    }
}

impl Default for ShowroomForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ShowroomForm {
    fn input_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.showroom),
            1 => Some(&self.date),
            2 => Some(&self.sales_exec_number),
            3 => Some(&self.sales_exec_name),
            // Index 4 is the Continue button, no FormField for it
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.showroom),
            1 => Some(&mut self.date),
            2 => Some(&mut self.sales_exec_number),
            3 => Some(&mut self.sales_exec_name),
            _ => None,
        }
    }
}

// Customer number step
#[derive(Debug, Clone)]
pub struct CustomerNumberForm {
    pub customer_number: FormField,
    pub active_field_index: usize,
}

impl CustomerNumberForm {
    pub fn new() -> Self {
        Self {
            customer_number: FormField::numeric(fields::CUSTOMER_NUMBER, "Customer Number"),
            active_field_index: 0,
        }
    }
}

impl Default for CustomerNumberForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CustomerNumberForm {
    fn input_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.customer_number),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.customer_number),
            _ => None,
        }
    }
}

// Customer details step
#[derive(Debug, Clone)]
pub struct CustomerDetailsForm {
    pub customer_name: FormField,
    pub customer_address: FormField,
    pub active_field_index: usize,
}

impl CustomerDetailsForm {
    pub fn new() -> Self {
        Self {
            customer_name: FormField::text(fields::CUSTOMER_NAME, "Name"),
            customer_address: FormField::multiline(fields::CUSTOMER_ADDRESS, "Address"),
            active_field_index: 0,
        }
    }
}

impl Default for CustomerDetailsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CustomerDetailsForm {
    fn input_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.customer_name),
            1 => Some(&self.customer_address),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.customer_name),
            1 => Some(&mut self.customer_address),
            _ => None,
        }
    }
}

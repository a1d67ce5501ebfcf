//! Feedback form domain: steps, validation rules and the step controller

mod catalog;
mod controller;
mod input;
mod record;
mod schema;
mod session;
mod sink;

pub use catalog::{SHOWROOM_GRID_COLUMNS, SHOWROOM_LOCATIONS};
pub use controller::StepFormController;
pub use input::StepInput;
pub use record::FeedbackRecord;
pub use schema::{
    fields, FieldKind, FieldRule, StepSchema, ValidationError, ValidationErrors, ValidationReason,
};
pub use session::{FormSession, FormValues, Step};
pub use sink::{SubmissionSink, TracingSink};

#[cfg(test)]
pub use sink::MockSubmissionSink;

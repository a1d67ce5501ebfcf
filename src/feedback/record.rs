//! Final combined feedback record

use super::schema::{fields, DATE_FORMAT};
use super::session::FormSession;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The record produced once every step has been validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub session_id: Uuid,
    pub showroom: String,
    pub date: NaiveDate,
    pub sales_exec_number: String,
    pub sales_exec_name: String,
    pub customer_number: String,
    pub customer_name: String,
    pub customer_address: String,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build the record from a completed session; `None` while incomplete
    pub fn from_session(session: &FormSession) -> Option<Self> {
        if !session.is_complete() {
            return None;
        }

        let text = |field: &str| session.value(field).map(|v| v.trim().to_string());

        Some(Self {
            session_id: session.id(),
            showroom: text(fields::SHOWROOM)?,
            date: NaiveDate::parse_from_str(session.value(fields::DATE)?.trim(), DATE_FORMAT)
                .ok()?,
            sales_exec_number: text(fields::SALES_EXEC_NUMBER)?,
            sales_exec_name: text(fields::SALES_EXEC_NAME)?,
            customer_number: text(fields::CUSTOMER_NUMBER)?,
            customer_name: text(fields::CUSTOMER_NAME)?,
            customer_address: text(fields::CUSTOMER_ADDRESS)?,
            submitted_at: session.completed_at()?,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Destination for completed feedback records

use super::record::FeedbackRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Receives the final record when a session completes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, record: &FeedbackRecord) -> Result<()>;
}

/// Emits each record as a structured log event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn submit(&self, record: &FeedbackRecord) -> Result<()> {
        let payload = serde_json::to_string(record)?;
        tracing::info!(
            target: "feedback_tui::submission",
            session_id = %record.session_id,
            showroom = %record.showroom,
            record = %payload,
            "final submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn sample_record() -> FeedbackRecord {
        FeedbackRecord {
            session_id: Uuid::new_v4(),
            showroom: "Erode".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            sales_exec_number: "E7".to_string(),
            sales_exec_name: "Meena".to_string(),
            customer_number: "9444400000".to_string(),
            customer_name: "Arun".to_string(),
            customer_address: "Erode".to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_tracing_sink_accepts_record() {
        let result = tokio_test::block_on(TracingSink.submit(&sample_record()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_mock_sink_sees_record() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit()
            .withf(|record| record.showroom == "Erode")
            .times(1)
            .returning(|_| Ok(()));

        let result = tokio_test::block_on(sink.submit(&sample_record()));
        assert!(result.is_ok());
    }
}

//! Data loader
//!
//! Issues the single usage request of a session and hands the result to the view.

use crate::error_classifier::ErrorClassifier;
use crate::source::UsageSource;
use crate::source::error::UsageSourceError;
use crate::usage::{MessageId, UsageRecord, UsageView};
use log::{debug, info, log, warn};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::oneshot;

pub type LoadOutcome = Result<Vec<UsageRecord>, UsageSourceError>;

/// Progress of the session's one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded { records: usize },
    Failed { reason: String },
}

/// Fetch all usage records, logging the outcome.
pub async fn load_usage(source: &dyn UsageSource) -> LoadOutcome {
    debug!("Fetching usage from {}", source.base_url());
    match source.fetch_usage().await {
        Ok(records) => {
            warn_on_duplicate_ids(&records);
            info!(
                "Loaded {} usage records from {}",
                records.len(),
                source.base_url()
            );
            Ok(records)
        }
        Err(e) => {
            let level = ErrorClassifier::new().classify_fetch_error(&e);
            log!(level.into(), "Failed to fetch usage: {}", e);
            Err(e)
        }
    }
}

/// Run the fetch on its own task. The receiver yields exactly one outcome.
pub fn spawn_loader(source: Arc<dyn UsageSource>) -> oneshot::Receiver<LoadOutcome> {
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = load_usage(source.as_ref()).await;
        let _ = sender.send(outcome);
    });
    receiver
}

/// Apply a finished fetch to the view. Failures leave the view untouched.
pub fn apply_outcome(view: &mut UsageView, outcome: LoadOutcome) -> LoadState {
    match outcome {
        Ok(records) => {
            let count = records.len();
            view.load(records);
            LoadState::Loaded { records: count }
        }
        Err(e) => LoadState::Failed {
            reason: e.to_string(),
        },
    }
}

fn warn_on_duplicate_ids(records: &[UsageRecord]) {
    let mut seen: HashSet<&MessageId> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.message_id) {
            warn!("Duplicate message id {} in usage response", record.message_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockUsageSource;
    use crate::usage::MessageId;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, credits_used: f64) -> UsageRecord {
        UsageRecord {
            message_id: MessageId::Number(id),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            report_name: None,
            credits_used,
        }
    }

    fn mock_source() -> MockUsageSource {
        let mut source = MockUsageSource::new();
        source
            .expect_base_url()
            .return_const("http://localhost:8000".to_string());
        source
    }

    #[tokio::test]
    /// A successful fetch fills both lists in server order.
    async fn loads_records_into_view() {
        let mut source = mock_source();
        source
            .expect_fetch_usage()
            .times(1)
            .returning(|| Ok(vec![record(2, 1.0), record(1, 2.0)]));

        let outcome = load_usage(&source).await;
        let mut view = UsageView::default();
        assert_eq!(
            apply_outcome(&mut view, outcome),
            LoadState::Loaded { records: 2 }
        );
        assert_eq!(view.display(), view.reference());
        assert_eq!(view.reference()[0].message_id, MessageId::Number(2));
        assert_eq!(view.chart().total(), 3.0);
    }

    #[tokio::test]
    /// A failed fetch leaves the table and chart empty without panicking.
    async fn fetch_failure_leaves_view_empty() {
        let mut source = mock_source();
        source.expect_fetch_usage().times(1).returning(|| {
            Err(UsageSourceError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        });

        let outcome = load_usage(&source).await;
        let mut view = UsageView::default();
        let state = apply_outcome(&mut view, outcome);

        assert!(matches!(state, LoadState::Failed { ref reason } if reason.contains("500")));
        assert!(view.display().is_empty());
        assert!(view.chart().is_empty());
    }

    #[tokio::test]
    /// The spawned loader issues exactly one request.
    async fn spawned_loader_fetches_once() {
        let mut source = mock_source();
        source
            .expect_fetch_usage()
            .times(1)
            .returning(|| Ok(vec![record(1, 4.0)]));

        let receiver = spawn_loader(Arc::new(source));
        let outcome = receiver.await.expect("loader task dropped its sender");
        assert_eq!(outcome.unwrap().len(), 1);
    }
}

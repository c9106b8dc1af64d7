use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::calendar::CalendarClient;
use crate::error::AppError;
use crate::models::Course;
use crate::services::planner::{self, Confirm, NOTHING_TO_SYNC, SyncPlan};

pub const SYNC_FAILED: &str = "Failed to sync.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    NothingToSync,
    Declined,
    Succeeded { message: String, count: usize },
    Failed { reason: String },
}

impl SyncOutcome {
    /// Text to show the user, if any. Declining is silent.
    pub fn notification(&self) -> Option<String> {
        match self {
            SyncOutcome::NothingToSync => Some(NOTHING_TO_SYNC.to_string()),
            SyncOutcome::Declined => None,
            SyncOutcome::Succeeded { message, .. } => Some(message.clone()),
            SyncOutcome::Failed { .. } => Some(SYNC_FAILED.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncRecord {
    #[serde(flatten)]
    pub outcome: SyncOutcome,
    pub finished_at: String,
}

/// Runs plan, confirm and dispatch, one sync at a time.
pub struct SyncService {
    calendar: Arc<dyn CalendarClient>,
    syncing: AtomicBool,
    last: Mutex<Option<SyncRecord>>,
}

struct SyncingGuard<'a>(&'a AtomicBool);

impl Drop for SyncingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SyncService {
    pub fn new(calendar: Arc<dyn CalendarClient>) -> Self {
        Self {
            calendar,
            syncing: AtomicBool::new(false),
            last: Mutex::new(None),
        }
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::Acquire)
    }

    pub async fn last_sync(&self) -> Option<SyncRecord> {
        self.last.lock().await.clone()
    }

    /// Never touches `courses`; a failed sync leaves the caller free to retry.
    pub async fn sync(
        &self,
        courses: &[Course],
        add_reminders: bool,
        confirm: &dyn Confirm,
    ) -> Result<SyncOutcome, AppError> {
        let _guard = self.begin()?;

        let plan = planner::plan(courses);
        let Some(prompt) = plan.prompt() else {
            info!("Nothing to sync");
            return Ok(self.finish(SyncOutcome::NothingToSync).await);
        };

        if !confirm.confirm(&prompt) {
            info!("Sync declined");
            return Ok(self.finish(SyncOutcome::Declined).await);
        }

        if let SyncPlan::Ready { skipped, .. } = &plan {
            if *skipped > 0 {
                info!("Skipping {} events without dates", skipped);
            }
        }

        let Some(payload) = plan.into_payload(add_reminders) else {
            return Ok(self.finish(SyncOutcome::NothingToSync).await);
        };
        let count = payload.events.len();

        info!("Syncing {} events (reminders: {})", count, add_reminders);
        let outcome = match self.calendar.create_events(&payload).await {
            Ok(message) => {
                info!("Sync completed: {}", message);
                SyncOutcome::Succeeded { message, count }
            }
            Err(e) => {
                warn!("Sync failed: {}", e);
                SyncOutcome::Failed { reason: e.to_string() }
            }
        };

        Ok(self.finish(outcome).await)
    }

    fn begin(&self) -> Result<SyncingGuard<'_>, AppError> {
        self.syncing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::SyncInProgress)?;
        Ok(SyncingGuard(&self.syncing))
    }

    async fn finish(&self, outcome: SyncOutcome) -> SyncOutcome {
        *self.last.lock().await = Some(SyncRecord {
            outcome: outcome.clone(),
            finished_at: Utc::now().to_rfc3339(),
        });
        outcome
    }
}

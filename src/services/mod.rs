pub mod ingestion;
pub mod planner;
pub mod sync_service;
pub mod weight;

pub use ingestion::{FileOutcome, IngestionService, UploadReport};
pub use planner::{Confirm, PlanPreview, Preconfirmed, SyncPlan};
pub use sync_service::{SyncOutcome, SyncRecord, SyncService};
pub use weight::{WeightStatus, WeightSummary, compute_total_weight};

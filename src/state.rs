use std::sync::Arc;

use tokio::sync::Mutex;

use crate::calendar::CalendarClient;
use crate::extraction::Extractor;
use crate::ids::IdGenerator;
use crate::services::{IngestionService, SyncService};
use crate::store::CourseStore;

/// Everything the user has curated during this run. Nothing is persisted.
pub struct Session {
    pub store: CourseStore,
    pub add_reminders: bool,
}

impl Session {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: CourseStore::new(ids),
            add_reminders: true,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub ingestion: Arc<IngestionService>,
    pub sync: Arc<SyncService>,
}

impl AppState {
    pub fn new(
        ids: Arc<dyn IdGenerator>,
        extractor: Arc<dyn Extractor>,
        calendar: Arc<dyn CalendarClient>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(ids))),
            ingestion: Arc::new(IngestionService::new(extractor)),
            sync: Arc::new(SyncService::new(calendar)),
        }
    }
}

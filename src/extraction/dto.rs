use serde::{Deserialize, Serialize};

use crate::models::Event;

/// What the extraction service reports for one document. Either field may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
}

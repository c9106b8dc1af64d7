use serde::{Deserialize, Serialize};

/// One event flattened out of its course, as the calendar endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEvent {
    pub title: String,
    pub date: String,
    pub weight: String,
    pub course: String,
    pub color_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    pub events: Vec<SyncEvent>,
    pub add_reminders: bool,
}

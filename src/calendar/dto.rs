use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateEventsResponse {
    pub message: String,
}

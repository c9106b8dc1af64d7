use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_EVENT_TITLE: &str = "New Assignment";
pub const DEFAULT_EVENT_WEIGHT: &str = "0%";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// ISO date, or empty when the user has not picked one yet.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub weight: String,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            title: DEFAULT_EVENT_TITLE.to_string(),
            date: String::new(),
            weight: DEFAULT_EVENT_WEIGHT.to_string(),
        }
    }
}

impl Event {
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }

    pub fn set(&mut self, field: EventField, value: String) {
        match field {
            EventField::Title => self.title = value,
            EventField::Date => self.date = value,
            EventField::Weight => self.weight = value,
        }
    }
}

/// Extraction output is loosely typed: `null` becomes empty and numbers keep
/// their textual form, so `10` reads as `"10"`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    Title,
    Date,
    Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub field: EventField,
    pub value: String,
}

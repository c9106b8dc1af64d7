use serde::{Deserialize, Serialize};

use super::Event;

pub const DEFAULT_COURSE_NAME: &str = "New Course";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub color: String,
    pub events: Vec<Event>,
}

/// A course before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl NewCourse {
    /// An empty course as added by hand, tagged with the manual default color.
    pub fn manual() -> Self {
        Self {
            name: DEFAULT_COURSE_NAME.to_string(),
            color: super::palette::DEFAULT_MANUAL_COLOR.to_string(),
            events: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

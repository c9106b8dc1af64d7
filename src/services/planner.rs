use serde::Serialize;

use crate::models::{Course, SyncEvent, SyncPayload};

pub const NOTHING_TO_SYNC: &str = "No events with dates found to sync.";

/// Asks the user whether to go ahead with a sync.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirmation given ahead of time, e.g. by a flag on an API request.
#[derive(Debug, Clone, Copy)]
pub struct Preconfirmed(pub bool);

impl Confirm for Preconfirmed {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!("confirmation prompt: {} -> {}", prompt, self.0);
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncPlan {
    /// No event anywhere has a date.
    Empty,
    Ready { events: Vec<SyncEvent>, skipped: usize },
}

impl SyncPlan {
    pub fn prompt(&self) -> Option<String> {
        match self {
            SyncPlan::Empty => None,
            SyncPlan::Ready { events, skipped } if *skipped > 0 => Some(format!(
                "Found {} events to sync (skipping {} without dates). Proceed?",
                events.len(),
                skipped
            )),
            SyncPlan::Ready { events, .. } => {
                Some(format!("Add {} events to Google Calendar?", events.len()))
            }
        }
    }

    pub fn into_payload(self, add_reminders: bool) -> Option<SyncPayload> {
        match self {
            SyncPlan::Empty => None,
            SyncPlan::Ready { events, .. } => Some(SyncPayload { events, add_reminders }),
        }
    }
}

/// What the user sees before confirming.
#[derive(Debug, Clone, Serialize)]
pub struct PlanPreview {
    pub count: usize,
    pub skipped: usize,
    pub prompt: String,
}

impl From<&SyncPlan> for PlanPreview {
    fn from(plan: &SyncPlan) -> Self {
        match plan {
            SyncPlan::Empty => Self {
                count: 0,
                skipped: 0,
                prompt: NOTHING_TO_SYNC.to_string(),
            },
            SyncPlan::Ready { events, skipped } => Self {
                count: events.len(),
                skipped: *skipped,
                prompt: plan.prompt().unwrap_or_default(),
            },
        }
    }
}

/// Flattens every dated event, courses in store order and events in course
/// order. Undated events are counted and left out.
pub fn plan(courses: &[Course]) -> SyncPlan {
    let mut events = Vec::new();
    let mut skipped = 0;

    for course in courses {
        for event in &course.events {
            if event.has_date() {
                events.push(SyncEvent {
                    title: event.title.clone(),
                    date: event.date.clone(),
                    weight: event.weight.clone(),
                    course: course.name.clone(),
                    color_id: course.color.clone(),
                });
            } else {
                skipped += 1;
            }
        }
    }

    if events.is_empty() {
        SyncPlan::Empty
    } else {
        SyncPlan::Ready { events, skipped }
    }
}

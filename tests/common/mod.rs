#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use syllasync::calendar::CalendarClient;
use syllasync::error::AppError;
use syllasync::extraction::{Document, ExtractionResult, Extractor};
use syllasync::ids::SequentialIds;
use syllasync::models::{Course, Event, NewCourse, SyncPayload};
use syllasync::services::Confirm;
use syllasync::store::CourseStore;
use tokio::sync::Notify;

pub fn event(title: &str, date: &str, weight: &str) -> Event {
    Event {
        title: title.to_string(),
        date: date.to_string(),
        weight: weight.to_string(),
    }
}

pub fn store() -> CourseStore {
    CourseStore::new(Arc::new(SequentialIds::default()))
}

pub fn course(store: &mut CourseStore, name: &str, color: &str, events: Vec<Event>) -> String {
    store
        .add_course(NewCourse {
            name: name.to_string(),
            color: color.to_string(),
            events,
        })
        .id
        .clone()
}

pub fn cs101() -> Vec<Course> {
    let mut store = store();
    course(
        &mut store,
        "CS101",
        "1",
        vec![
            event("HW1", "2024-05-01", "10%"),
            event("HW2", "", "5%"),
        ],
    );
    store.courses().to_vec()
}

/// Extractor answering from a table keyed by file name; unknown files fail.
#[derive(Default)]
pub struct StubExtractor {
    results: HashMap<String, ExtractionResult>,
    pub calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl StubExtractor {
    pub fn with(mut self, file_name: &str, result: ExtractionResult) -> Self {
        self.results.insert(file_name.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Extractor for StubExtractor {
    async fn extract(&self, document: &Document) -> Result<ExtractionResult, AppError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.calls.lock().unwrap().push(document.file_name.clone());
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.results
            .get(&document.file_name)
            .cloned()
            .ok_or_else(|| AppError::Extraction(format!("cannot read {}", document.file_name)))
    }
}

/// Calendar client that records every payload and answers with a fixed result.
pub struct RecordingCalendar {
    reply: Result<String, String>,
    pub payloads: Mutex<Vec<SyncPayload>>,
    gate: Option<Arc<Notify>>,
}

impl RecordingCalendar {
    pub fn replying(message: &str) -> Self {
        Self {
            reply: Ok(message.to_string()),
            payloads: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            payloads: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Holds every call until the returned notify is signalled.
    pub fn gated(message: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let client = Self {
            reply: Ok(message.to_string()),
            payloads: Mutex::new(Vec::new()),
            gate: Some(gate.clone()),
        };
        (client, gate)
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<SyncPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CalendarClient for RecordingCalendar {
    async fn create_events(&self, payload: &SyncPayload) -> Result<String, AppError> {
        self.payloads.lock().unwrap().push(payload.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.clone().map_err(AppError::Sync)
    }
}

/// Confirm port that records the prompts it was shown.
pub struct ScriptedConfirm {
    answer: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

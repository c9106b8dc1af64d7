use axum::Json;
use axum::extract::{Multipart, Path};
use axum::routing::{patch, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::extraction::Document;
use crate::models::palette::{self, PALETTE};
use crate::models::*;
use crate::services::planner;
use crate::services::{PlanPreview, Preconfirmed, SyncOutcome, SyncRecord, UploadReport, WeightSummary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct CourseView {
    #[serde(flatten)]
    course: Course,
    color_hex: &'static str,
    weight: WeightSummary,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            color_hex: palette::display(&course.color).hex,
            weight: WeightSummary::of(&course.events),
            course: course.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AddedEvent {
    index: usize,
    event: Event,
}

#[derive(Debug, Serialize, Deserialize)]
struct Settings {
    add_reminders: bool,
}

#[derive(Debug, Deserialize)]
struct UpdateSettingsRequest {
    add_reminders: Option<bool>,
}

/// `count` and `skipped` echo the preview the user confirmed; when given they
/// must still match the plan at sync time.
#[derive(Debug, Deserialize)]
struct SyncRequest {
    #[serde(default)]
    confirmed: bool,
    count: Option<usize>,
    skipped: Option<usize>,
}

#[derive(Debug, Serialize)]
struct SyncResponse {
    #[serde(flatten)]
    outcome: SyncOutcome,
    notification: Option<String>,
}

#[derive(Debug, Serialize)]
struct SyncStatus {
    syncing: bool,
    last: Option<SyncRecord>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/palette", get(list_palette))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", patch(update_course).delete(delete_course))
        .route("/courses/{id}/events", post(add_event))
        .route("/courses/{id}/events/{index}", patch(update_event).delete(delete_event))
        .route("/uploads", post(upload))
        .route("/settings", get(get_settings).patch(update_settings))
        .route("/sync/plan", get(sync_plan))
        .route("/sync/status", get(sync_status))
        .route("/sync", post(sync_now))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_palette() -> Json<Vec<PaletteColor>> {
    Json(PALETTE.to_vec())
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<CourseView>> {
    let session = state.session.lock().await;
    Json(session.store.courses().iter().map(CourseView::from).collect())
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>
) -> Json<CourseView> {
    let mut new = NewCourse::manual();
    if let Some(name) = req.name {
        new.name = name;
    }
    if let Some(color) = req.color {
        new.color = color;
    }
    let mut session = state.session.lock().await;
    Json(CourseView::from(session.store.add_course(new)))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCourseRequest>
) -> StatusCode {
    let mut session = state.session.lock().await;
    if let Some(name) = req.name {
        session.store.rename_course(&id, &name);
    }
    if let Some(color) = req.color {
        session.store.recolor_course(&id, &color);
    }
    StatusCode::NO_CONTENT
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>
) -> StatusCode {
    let mut session = state.session.lock().await;
    session.store.remove_course(&id);
    StatusCode::NO_CONTENT
}

async fn add_event(
    State(state): State<AppState>,
    Path(id): Path<String>
) -> Result<Json<AddedEvent>, AppError> {
    let mut session = state.session.lock().await;
    let index = session.store.add_event(&id)?;
    Ok(Json(AddedEvent { index, event: Event::default() }))
}

async fn update_event(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(req): Json<UpdateEventRequest>
) -> Result<Json<Event>, AppError> {
    let mut session = state.session.lock().await;
    session.store.edit_event(&id, index, req.field, &req.value)?;
    let event = session
        .store
        .get(&id)
        .and_then(|c| c.events.get(index))
        .cloned()
        .ok_or(AppError::NotFound)?;
    Ok(Json(event))
}

async fn delete_event(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>
) -> Result<StatusCode, AppError> {
    let mut session = state.session.lock().await;
    session.store.delete_event(&id, index)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart
) -> Result<Json<UploadReport>, AppError> {
    let mut documents = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if !matches!(field.name(), Some("file") | Some("files")) {
            debug!("ignoring multipart field {:?}", field.name());
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read {}: {}", file_name, e)))?;
        documents.push(Document {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if documents.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    // The lock is held for the whole batch so uploads never interleave.
    let mut session = state.session.lock().await;
    let report = state.ingestion.ingest_batch(&mut session.store, documents).await;
    Ok(Json(report))
}

async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let session = state.session.lock().await;
    Json(Settings { add_reminders: session.add_reminders })
}

async fn update_settings(
    State(state): State<AppState>,
    Json(req): Json<UpdateSettingsRequest>
) -> Json<Settings> {
    let mut session = state.session.lock().await;
    if let Some(add_reminders) = req.add_reminders {
        session.add_reminders = add_reminders;
    }
    Json(Settings { add_reminders: session.add_reminders })
}

async fn sync_plan(State(state): State<AppState>) -> Json<PlanPreview> {
    let session = state.session.lock().await;
    let plan = planner::plan(session.store.courses());
    Json(PlanPreview::from(&plan))
}

async fn sync_now(
    State(state): State<AppState>,
    Json(req): Json<SyncRequest>
) -> Result<Json<SyncResponse>, AppError> {
    let (courses, add_reminders) = {
        let session = state.session.lock().await;
        (session.store.courses().to_vec(), session.add_reminders)
    };

    if req.confirmed {
        let preview = PlanPreview::from(&planner::plan(&courses));
        let count_changed = req.count.is_some_and(|n| n != preview.count);
        let skipped_changed = req.skipped.is_some_and(|n| n != preview.skipped);
        if count_changed || skipped_changed {
            debug!(
                "sync preview mismatch: confirmed {:?}/{:?}, now {}/{}",
                req.count, req.skipped, preview.count, preview.skipped
            );
            return Err(AppError::PlanChanged);
        }
    }

    let outcome = state
        .sync
        .sync(&courses, add_reminders, &Preconfirmed(req.confirmed))
        .await?;

    Ok(Json(SyncResponse {
        notification: outcome.notification(),
        outcome,
    }))
}

async fn sync_status(State(state): State<AppState>) -> Json<SyncStatus> {
    Json(SyncStatus {
        syncing: state.sync.is_syncing(),
        last: state.sync.last_sync().await,
    })
}

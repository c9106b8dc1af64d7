use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::extraction::{Document, ExtractionResult, Extractor};
use crate::models::course::DEFAULT_COURSE_NAME;
use crate::models::palette::DEFAULT_UPLOAD_COLOR;
use crate::models::{Course, NewCourse};
use crate::store::CourseStore;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Added { file_name: String, course_id: String, events: usize },
    Failed { file_name: String, message: String },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadReport {
    pub files: Vec<FileOutcome>,
}

impl UploadReport {
    pub fn added(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f, FileOutcome::Added { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.added()
    }
}

/// Turns extraction results into courses.
pub struct IngestionService {
    extractor: Arc<dyn Extractor>,
}

impl IngestionService {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self { extractor }
    }

    /// Appends one course built from an extraction result, filling in the
    /// default name and an empty event list where the service gave nothing.
    pub fn ingest<'a>(store: &'a mut CourseStore, result: ExtractionResult) -> &'a Course {
        store.add_course(NewCourse {
            name: result.course.unwrap_or_else(|| DEFAULT_COURSE_NAME.to_string()),
            color: DEFAULT_UPLOAD_COLOR.to_string(),
            events: result.events.unwrap_or_default(),
        })
    }

    /// Extracts the documents one after another. A document that fails adds
    /// nothing and does not stop the rest of the batch.
    pub async fn ingest_batch(
        &self,
        store: &mut CourseStore,
        documents: Vec<Document>,
    ) -> UploadReport {
        info!("Processing {} uploaded documents", documents.len());
        let mut report = UploadReport::default();

        for document in documents {
            match self.extractor.extract(&document).await {
                Ok(result) => {
                    let course = Self::ingest(store, result);
                    info!("Added course {} from {}", course.name, document.file_name);
                    report.files.push(FileOutcome::Added {
                        file_name: document.file_name,
                        course_id: course.id.clone(),
                        events: course.events.len(),
                    });
                }
                Err(e) => {
                    warn!("Error uploading {}: {}", document.file_name, e);
                    report.files.push(FileOutcome::Failed {
                        message: format!("Failed to upload {}", document.file_name),
                        file_name: document.file_name,
                    });
                }
            }
        }

        info!("Upload finished: {} added, {} failed", report.added(), report.failed());
        report
    }
}

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::{StubExtractor, event, store};
use syllasync::extraction::{Document, ExtractionResult};
use syllasync::services::{FileOutcome, IngestionService};

fn document(name: &str) -> Document {
    Document::new(name, b"%PDF-1.4".to_vec())
}

fn extracted(course: &str, titles: &[&str]) -> ExtractionResult {
    ExtractionResult {
        course: Some(course.to_string()),
        events: Some(titles.iter().map(|t| event(t, "2024-04-01", "10%")).collect()),
    }
}

#[test]
fn ingest_fills_in_defaults() {
    let mut store = store();

    let course = IngestionService::ingest(&mut store, ExtractionResult::default());

    assert_eq!(course.name, "New Course");
    assert_eq!(course.color, "9");
    assert!(course.events.is_empty());
}

#[test]
fn ingest_keeps_extracted_events_in_order() {
    let mut store = store();

    let course = IngestionService::ingest(&mut store, extracted("MATH 200", &["Quiz 1", "Midterm", "Final"]));

    assert_eq!(course.name, "MATH 200");
    let titles: Vec<_> = course.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Quiz 1", "Midterm", "Final"]);
}

#[test]
fn extraction_result_tolerates_missing_fields() {
    let result: ExtractionResult =
        serde_json::from_str(r#"{"events": [{"title": "Essay"}]}"#).unwrap();

    assert!(result.course.is_none());
    let events = result.events.unwrap();
    assert_eq!(events[0].title, "Essay");
    assert_eq!(events[0].date, "");
    assert_eq!(events[0].weight, "");

    let nulls: ExtractionResult = serde_json::from_str(r#"{"course": null, "events": null}"#).unwrap();
    assert_eq!(nulls, ExtractionResult::default());
}

#[test]
fn extraction_result_accepts_null_dates_and_numeric_weights() {
    let result: ExtractionResult = serde_json::from_str(
        r#"{"course": "X", "events": [
            {"title": "A", "date": null, "weight": "10%"},
            {"title": "B", "date": "2024-05-01", "weight": 10},
            {"title": "C", "date": "2024-05-02", "weight": 7.5},
            {"title": "D", "weight": null}
        ]}"#,
    )
    .unwrap();

    let events = result.events.unwrap();
    assert_eq!(events[0], event("A", "", "10%"));
    assert_eq!(events[1], event("B", "2024-05-01", "10"));
    assert_eq!(events[2], event("C", "2024-05-02", "7.5"));
    assert_eq!(events[3], event("D", "", ""));
    assert_eq!(syllasync::services::compute_total_weight(&events), 27.5);
}

#[tokio::test]
async fn lenient_events_still_ingest_the_document() {
    let result: ExtractionResult = serde_json::from_str(
        r#"{"course": "CHEM 110", "events": [{"title": "Lab", "date": null, "weight": 15}]}"#,
    )
    .unwrap();
    let extractor = Arc::new(StubExtractor::default().with("chem.pdf", result));
    let service = IngestionService::new(extractor);
    let mut store = store();

    let report = service.ingest_batch(&mut store, vec![document("chem.pdf")]).await;

    assert_eq!(report.added(), 1);
    assert_eq!(store.courses()[0].events[0], event("Lab", "", "15"));
}

#[tokio::test]
async fn failed_document_does_not_stop_the_batch() {
    let extractor = Arc::new(
        StubExtractor::default()
            .with("one.pdf", extracted("Course One", &["A"]))
            .with("three.pdf", extracted("Course Three", &["B", "C"])),
    );
    let service = IngestionService::new(extractor.clone());
    let mut store = store();

    let report = service
        .ingest_batch(
            &mut store,
            vec![document("one.pdf"), document("two.pdf"), document("three.pdf")],
        )
        .await;

    let names: Vec<_> = store.courses().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Course One", "Course Three"]);
    assert_eq!(extractor.calls(), vec!["one.pdf", "two.pdf", "three.pdf"]);

    assert_eq!(report.added(), 2);
    assert_eq!(report.failed(), 1);
    match &report.files[1] {
        FileOutcome::Failed { file_name, message } => {
            assert_eq!(file_name, "two.pdf");
            assert_eq!(message, "Failed to upload two.pdf");
        }
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[tokio::test]
async fn batch_runs_one_extraction_at_a_time() {
    let extractor = Arc::new(
        StubExtractor::default()
            .with("a.pdf", extracted("A", &[]))
            .with("b.pdf", extracted("B", &[]))
            .with("c.pdf", extracted("C", &[])),
    );
    let service = IngestionService::new(extractor.clone());
    let mut store = store();

    service
        .ingest_batch(&mut store, vec![document("a.pdf"), document("b.pdf"), document("c.pdf")])
        .await;

    assert_eq!(extractor.max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn report_links_files_to_courses() {
    let extractor = Arc::new(StubExtractor::default().with("bio.pdf", extracted("BIO 101", &["Lab 1", "Lab 2"])));
    let service = IngestionService::new(extractor);
    let mut store = store();

    let report = service.ingest_batch(&mut store, vec![document("bio.pdf")]).await;

    match &report.files[0] {
        FileOutcome::Added { file_name, course_id, events } => {
            assert_eq!(file_name, "bio.pdf");
            assert_eq!(*events, 2);
            assert_eq!(store.get(course_id).unwrap().name, "BIO 101");
        }
        other => panic!("expected an added course, got {:?}", other),
    }
}

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::models::{Course, Event, EventField, NewCourse};

/// A mutation that was applied to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StoreOp {
    AddCourse { course_id: String },
    RemoveCourse { course_id: String },
    RenameCourse { course_id: String, name: String },
    RecolorCourse { course_id: String, color: String },
    AddEvent { course_id: String, index: usize },
    EditEvent { course_id: String, index: usize, field: EventField, value: String },
    DeleteEvent { course_id: String, index: usize },
}

/// Most recent mutations kept in [`CourseStore::history`].
pub const HISTORY_LIMIT: usize = 500;

/// Ordered, in-memory collection of courses for one session.
///
/// Course-level lookups that miss are no-ops and report `false`. Event-level
/// operations assume the course exists and return [`AppError::NotFound`] when
/// it does not, or when the event index is out of range.
pub struct CourseStore {
    courses: Vec<Course>,
    ids: Arc<dyn IdGenerator>,
    history: VecDeque<StoreOp>,
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl CourseStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            courses: Vec::new(),
            ids,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Applied mutations, oldest first; only the last [`HISTORY_LIMIT`] are kept.
    pub fn history(&self) -> &VecDeque<StoreOp> {
        &self.history
    }

    pub fn add_course(&mut self, new: NewCourse) -> &Course {
        let id = self.ids.next_id();
        debug!("adding course {} ({})", new.name, id);
        self.record(StoreOp::AddCourse { course_id: id.clone() });
        self.courses.push(Course {
            id,
            name: new.name,
            color: new.color,
            events: new.events,
        });
        &self.courses[self.courses.len() - 1]
    }

    pub fn remove_course(&mut self, course_id: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != course_id);
        if self.courses.len() == before {
            debug!("remove_course: no course with id {}", course_id);
            return false;
        }
        self.record(StoreOp::RemoveCourse { course_id: course_id.to_string() });
        true
    }

    pub fn rename_course(&mut self, course_id: &str, name: &str) -> bool {
        let Some(course) = self.course_mut(course_id) else {
            debug!("rename_course: no course with id {}", course_id);
            return false;
        };
        course.name = name.to_string();
        self.record(StoreOp::RenameCourse {
            course_id: course_id.to_string(),
            name: name.to_string(),
        });
        true
    }

    /// Any string is accepted as a color; palette membership is not checked here.
    pub fn recolor_course(&mut self, course_id: &str, color: &str) -> bool {
        let Some(course) = self.course_mut(course_id) else {
            debug!("recolor_course: no course with id {}", course_id);
            return false;
        };
        course.color = color.to_string();
        self.record(StoreOp::RecolorCourse {
            course_id: course_id.to_string(),
            color: color.to_string(),
        });
        true
    }

    /// Appends a blank assignment and returns its index.
    pub fn add_event(&mut self, course_id: &str) -> Result<usize, AppError> {
        let course = self.course_mut(course_id).ok_or(AppError::NotFound)?;
        course.events.push(Event::default());
        let index = course.events.len() - 1;
        self.record(StoreOp::AddEvent { course_id: course_id.to_string(), index });
        Ok(index)
    }

    pub fn edit_event(
        &mut self,
        course_id: &str,
        index: usize,
        field: EventField,
        value: &str,
    ) -> Result<(), AppError> {
        let course = self.course_mut(course_id).ok_or(AppError::NotFound)?;
        let event = course.events.get_mut(index).ok_or(AppError::NotFound)?;
        event.set(field, value.to_string());
        self.record(StoreOp::EditEvent {
            course_id: course_id.to_string(),
            index,
            field,
            value: value.to_string(),
        });
        Ok(())
    }

    pub fn delete_event(&mut self, course_id: &str, index: usize) -> Result<Event, AppError> {
        let course = self.course_mut(course_id).ok_or(AppError::NotFound)?;
        if index >= course.events.len() {
            return Err(AppError::NotFound);
        }
        let removed = course.events.remove(index);
        self.record(StoreOp::DeleteEvent { course_id: course_id.to_string(), index });
        Ok(removed)
    }

    fn record(&mut self, op: StoreOp) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(op);
    }

    fn course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }
}

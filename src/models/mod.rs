pub mod course;
pub mod event;
pub mod palette;
pub mod sync;

pub use course::{Course, NewCourse, NewCourseRequest, UpdateCourseRequest};
pub use event::{Event, EventField, UpdateEventRequest};
pub use palette::PaletteColor;
pub use sync::{SyncEvent, SyncPayload};

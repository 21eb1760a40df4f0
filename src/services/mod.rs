//! Capability layer: one service per content concern, all sharing the
//! key-rotating LLM service.

pub mod chapter;
pub mod content;
pub mod llm;
pub mod notes;

pub use chapter::ChapterService;
pub use content::{ContentService, LessonRequest};
pub use llm::LlmService;
pub use notes::NotesService;

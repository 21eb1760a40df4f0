pub mod catalog;
pub mod content;
pub mod settings;

pub use catalog::{Board, ClassLevel, Language, Stream, Subject};
pub use content::{
    BilingualNotes, Chapter, ContentType, LessonContent, McqItem, NoteSection, SectionKind,
};
pub use settings::SystemSettings;

//! # Study Content
//!
//! Content-fetching layer for the study app: chapter lists, MCQ tests and
//! bilingual notes, generated on demand through an OpenAI-compatible
//! completion API with fallbacks to admin-curated content.
//!
//! ## Architecture
//!
//! The crate keeps a strict layering:
//!
//! ### ① Clients (infrastructure)
//! - `clients/` - raw API access, one concern per client
//! - `LlmClient` - a single-credential chat-completion call
//! - `StoreClient` - remote document store lookups
//!
//! ### ② Services (capabilities)
//! - `services/` - "what we can do", one lesson/chapter at a time
//! - `LlmService` - key-rotation wrapper over `LlmClient`
//! - `ChapterService` - chapter list resolution (custom → cache → static → AI)
//! - `ContentService` - lesson resolution (admin → local → coming-soon → AI)
//! - `NotesService` - bilingual notes generation
//!
//! ### ③ Orchestration
//! - `orchestrator/batch_generator` - wave-chunked bulk MCQ generation
//! - `app` - wires everything together for the binary
//!
//! ### ④ Output
//! - `render/` - self-contained HTML report for bilingual notes

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod storage;
pub mod syllabus;

// Re-export the types callers touch most.
pub use app::App;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::catalog::{Board, ClassLevel, Language, Stream, Subject};
pub use models::content::{
    BilingualNotes, Chapter, ContentType, LessonContent, McqItem, NoteSection, SectionKind,
};
pub use models::settings::SystemSettings;
pub use orchestrator::McqBatchGenerator;
pub use services::{ChapterService, ContentService, LlmService, NotesService};

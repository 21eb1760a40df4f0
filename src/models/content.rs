//! Content records
//!
//! Plain data passed through unchanged: constructed, returned, cached. Wire
//! names are camelCase because the admin dashboard and the AI prompts both
//! speak that format.

use serde::{Deserialize, Serialize};

use crate::models::catalog::Subject;

/// A chapter of a subject's syllabus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqItem {
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
    /// Short memory trick, only some prompts request it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    /// Core concept tag, only some prompts request it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

/// What kind of content a lesson record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "PDF_FREE")]
    PdfFree,
    #[serde(rename = "PDF_PREMIUM")]
    PdfPremium,
    #[serde(rename = "PDF_ULTRA")]
    PdfUltra,
    #[serde(rename = "PDF_VIEWER")]
    PdfViewer,
    #[serde(rename = "VIDEO_LECTURE")]
    VideoLecture,
    #[serde(rename = "MCQ_SIMPLE")]
    McqSimple,
    #[serde(rename = "MCQ_ANALYSIS")]
    McqAnalysis,
    #[serde(rename = "NOTES_QUICK")]
    NotesQuick,
    #[serde(rename = "NOTES_PREMIUM")]
    NotesPremium,
}

impl ContentType {
    /// Link-style content that must come from an admin, never generated
    pub fn is_link(self) -> bool {
        matches!(
            self,
            ContentType::PdfFree
                | ContentType::PdfPremium
                | ContentType::PdfUltra
                | ContentType::PdfViewer
                | ContentType::VideoLecture
        )
    }

    pub fn is_mcq(self) -> bool {
        matches!(self, ContentType::McqSimple | ContentType::McqAnalysis)
    }

    pub fn is_notes(self) -> bool {
        matches!(self, ContentType::NotesQuick | ContentType::NotesPremium)
    }
}

/// A resolved piece of lesson content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Markdown notes or a link, depending on `content_type`
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub date_created: String,
    pub subject_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcq_data: Option<Vec<McqItem>>,
    #[serde(default)]
    pub is_coming_soon: bool,
}

impl LessonContent {
    /// Fresh record with a millisecond id and an RFC 3339 timestamp
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
        subject: Subject,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            title: title.into(),
            subtitle: subtitle.into(),
            content: content.into(),
            content_type,
            date_created: now.to_rfc3339(),
            subject_name: subject.name().to_string(),
            mcq_data: None,
            is_coming_soon: false,
        }
    }

    /// Placeholder shown while no admin content exists and generation is off
    pub fn coming_soon(title: impl Into<String>, content_type: ContentType, subject: Subject) -> Self {
        let mut content = Self::new(title, "Content Unavailable", "", content_type, subject);
        content.is_coming_soon = true;
        content
    }

    pub fn with_mcqs(mut self, mcqs: Vec<McqItem>) -> Self {
        self.mcq_data = Some(mcqs);
        self
    }
}

/// Section highlight kind in bilingual notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Blue
    Info,
    /// Red, important
    Alert,
    /// Green, key formula
    Success,
    #[default]
    Normal,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Info => "info",
            SectionKind::Alert => "alert",
            SectionKind::Success => "success",
            SectionKind::Normal => "normal",
        }
    }
}

/// One section of bilingual notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSection {
    pub title: String,
    #[serde(rename = "titleHi", default)]
    pub title_hi: Option<String>,
    #[serde(rename = "contentEn", default)]
    pub content_en: String,
    #[serde(rename = "contentHi", default)]
    pub content_hi: String,
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
}

/// Bilingual study notes for one chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilingualNotes {
    pub title: String,
    pub sections: Vec<NoteSection>,
}

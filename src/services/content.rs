//! Lesson content resolution - capability layer
//!
//! Resolution order for one lesson: admin document from the remote store →
//! local cache under the same key → "coming soon" for link types and for
//! anything when AI generation is not allowed → AI generation (MCQ test or
//! markdown notes). Admin content always wins over generation.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::StoreClient;
use crate::error::Result;
use crate::models::catalog::{Board, ClassLevel, Language, Stream, Subject};
use crate::models::content::{Chapter, ContentType, LessonContent, McqItem};
use crate::services::llm::LlmService;
use crate::storage::{keys, LocalStore};

/// One lesson request
#[derive(Debug, Clone)]
pub struct LessonRequest {
    pub board: Board,
    pub class_level: ClassLevel,
    pub stream: Option<Stream>,
    pub subject: Subject,
    pub chapter: Chapter,
    pub language: Language,
    pub content_type: ContentType,
    /// Question count for MCQ generation
    pub target_questions: usize,
    /// Admin's one-off prompt override for this lesson
    pub admin_prompt_override: Option<String>,
    /// Generation is opt-in; without it missing content is "coming soon"
    pub allow_ai_generation: bool,
}

/// Admin-curated chapter document, as the dashboard saves it
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminChapterDocument {
    #[serde(default)]
    free_link: Option<String>,
    #[serde(default)]
    premium_link: Option<String>,
    #[serde(default)]
    ultra_pdf_link: Option<String>,
    #[serde(default)]
    premium_video_link: Option<String>,
    #[serde(default)]
    free_video_link: Option<String>,
    /// Legacy single-link field from the old dashboard
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    manual_mcq_data: Option<Vec<McqItem>>,
}

/// Lesson content resolution
pub struct ContentService {
    llm: Arc<LlmService>,
    store: Arc<StoreClient>,
    local: Arc<LocalStore>,
}

impl ContentService {
    pub fn new(llm: Arc<LlmService>, store: Arc<StoreClient>, local: Arc<LocalStore>) -> Self {
        Self { llm, store, local }
    }

    /// Resolve one lesson.
    ///
    /// Only AI generation can fail here; every lookup failure degrades to
    /// the next source and ultimately to a "coming soon" record.
    pub async fn resolve(&self, request: &LessonRequest) -> Result<LessonContent> {
        // 1. Admin database first.
        if let Some(mut content) = self.admin_content(request).await {
            // Admin records carry generic titles; show the chapter's.
            content.title = request.chapter.title.clone();
            info!("admin content hit for chapter {}", request.chapter.id);
            return Ok(content);
        }

        // 2. Link types are never faked.
        if request.content_type.is_link() {
            return Ok(LessonContent::coming_soon(
                request.chapter.title.clone(),
                request.content_type,
                request.subject,
            ));
        }

        // 3. Generation must be explicitly allowed.
        if !request.allow_ai_generation {
            return Ok(LessonContent::coming_soon(
                request.chapter.title.clone(),
                request.content_type,
                request.subject,
            ));
        }

        // 4. Generate.
        if request.content_type.is_mcq() {
            self.generate_mcq_test(request).await
        } else {
            self.generate_notes(request).await
        }
    }

    /// Admin lookup: remote store first, local cache on miss or error.
    async fn admin_content(&self, request: &LessonRequest) -> Option<LessonContent> {
        let key = keys::content_key(
            request.board,
            request.class_level,
            request.stream,
            request.subject,
            &request.chapter.id,
        );

        let value = match self.store.fetch_document(&key).await {
            Ok(Some(value)) => Some(value),
            Ok(None) => self.local.get(&key).await,
            Err(e) => {
                warn!("store lookup failed, trying local cache: {}", e);
                self.local.get(&key).await
            }
        }?;

        let document: AdminChapterDocument = match serde_json::from_value(value) {
            Ok(document) => document,
            Err(e) => {
                warn!("admin document {} is malformed: {}", key, e);
                return None;
            }
        };

        admin_lesson(&document, request.content_type, request.subject)
    }

    async fn generate_mcq_test(&self, request: &LessonRequest) -> Result<LessonContent> {
        let prompt = build_mcq_prompt(request, self.llm.custom_instruction().as_deref());

        let mcqs: Vec<McqItem> = self.llm.generate_json(&prompt, None).await?;
        info!(
            "generated {} questions for chapter {}",
            mcqs.len(),
            request.chapter.id
        );

        Ok(LessonContent::new(
            format!("MCQ Test: {}", request.chapter.title),
            format!("{} Questions", mcqs.len()),
            "",
            request.content_type,
            request.subject,
        )
        .with_mcqs(mcqs))
    }

    async fn generate_notes(&self, request: &LessonRequest) -> Result<LessonContent> {
        let detailed = request.content_type == ContentType::NotesPremium;
        let prompt = build_notes_prompt(request, self.llm.custom_instruction().as_deref(), detailed);

        let text = self.llm.generate_text(&prompt, None).await?;

        Ok(LessonContent::new(
            request.chapter.title.clone(),
            if detailed {
                "Premium Study Notes"
            } else {
                "Quick Revision Notes"
            },
            text,
            request.content_type,
            request.subject,
        ))
    }
}

/// Map an admin document onto the requested content type.
fn admin_lesson(
    document: &AdminChapterDocument,
    content_type: ContentType,
    subject: Subject,
) -> Option<LessonContent> {
    let link_content = |title: &str, subtitle: &str, link: &str, ct: ContentType| {
        LessonContent::new(title, subtitle, link, ct, subject)
    };

    match content_type {
        ContentType::PdfFree => {
            let link = non_empty(document.free_link.as_deref())?;
            Some(link_content("Free Study Material", "Provided by Admin", link, content_type))
        }
        ContentType::PdfPremium => {
            let link = non_empty(document.premium_link.as_deref())?;
            Some(link_content("Premium Notes", "High Quality Content", link, content_type))
        }
        ContentType::PdfUltra => {
            let link = non_empty(document.ultra_pdf_link.as_deref())?;
            Some(link_content("Ultra Premium Notes", "Exclusive Content", link, content_type))
        }
        ContentType::VideoLecture => {
            let link = non_empty(document.premium_video_link.as_deref())
                .or_else(|| non_empty(document.free_video_link.as_deref()))?;
            // The viewer screen carries the iframe logic for video too.
            Some(link_content("Video Lecture", "Watch Class", link, ContentType::PdfViewer))
        }
        ContentType::PdfViewer => {
            let link = non_empty(document.link.as_deref())?;
            Some(link_content("Class Notes", "Provided by Teacher", link, content_type))
        }
        ContentType::McqSimple | ContentType::McqAnalysis => {
            let mcqs = document.manual_mcq_data.as_ref().filter(|m| !m.is_empty())?;
            Some(
                LessonContent::new(
                    "Class Test (Admin)",
                    format!("{} Questions", mcqs.len()),
                    "",
                    content_type,
                    subject,
                )
                .with_mcqs(mcqs.clone()),
            )
        }
        ContentType::NotesQuick | ContentType::NotesPremium => None,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

// ========== Prompt builders ==========

fn build_mcq_prompt(request: &LessonRequest, custom_instruction: Option<&str>) -> String {
    let mut prompt = String::new();

    if let Some(instruction) = custom_instruction {
        prompt.push_str(instruction);
        prompt.push('\n');
    }
    if let Some(override_text) = request
        .admin_prompt_override
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        prompt.push_str(&format!("INSTRUCTION: {}\n", override_text));
    }

    prompt.push_str(&format!(
        r#"Create {count} MCQs for {board} {class} {subject}, Chapter: "{chapter}".
Language: {language}.
Return valid JSON array:
[
  {{
    "question": "Question text",
    "options": ["A", "B", "C", "D"],
    "correctAnswer": 0,
    "explanation": "Explanation here",
    "mnemonic": "Short memory trick",
    "concept": "Core concept"
  }}
]"#,
        count = request.target_questions,
        board = request.board.as_key(),
        class = request.class_level.prompt_label(),
        subject = request.subject.name(),
        chapter = request.chapter.title,
        language = request.language.name(),
    ));

    prompt
}

fn build_notes_prompt(
    request: &LessonRequest,
    custom_instruction: Option<&str>,
    detailed: bool,
) -> String {
    let mut prompt = String::new();

    if let Some(instruction) = custom_instruction {
        prompt.push_str(instruction);
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        r#"Write detailed study notes for {board} {class} {subject}, Chapter: "{chapter}".
Language: {language}.
Format: Markdown.
Structure:
1. Introduction
2. Key Concepts (Bullet points)
3. Detailed Explanations
4. Important Formulas/Dates
5. Summary
{depth}"#,
        board = request.board.as_key(),
        class = request.class_level.prompt_label(),
        subject = request.subject.name(),
        chapter = request.chapter.title,
        language = request.language.name(),
        depth = if detailed {
            "Include deep insights, memory tips, and exam strategies."
        } else {
            "Keep it concise and clear."
        },
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::settings::SystemSettings;
    use serde_json::json;

    fn request(content_type: ContentType, allow_ai: bool) -> LessonRequest {
        LessonRequest {
            board: Board::Cbse,
            class_level: ClassLevel::Class10,
            stream: None,
            subject: Subject::Science,
            chapter: Chapter {
                id: "static-9".to_string(),
                title: "Light - Reflection and Refraction".to_string(),
                description: "Chapter 9".to_string(),
            },
            language: Language::English,
            content_type,
            target_questions: 15,
            admin_prompt_override: None,
            allow_ai_generation: allow_ai,
        }
    }

    fn document(value: serde_json::Value) -> AdminChapterDocument {
        serde_json::from_value(value).unwrap()
    }

    fn offline_service(dir: &std::path::Path) -> ContentService {
        // Unreachable store and no API keys: only local/coming-soon paths work.
        let config = Config {
            store_base_url: "http://127.0.0.1:9".to_string(),
            store_timeout_secs: 1,
            ..Config::default()
        };
        ContentService::new(
            Arc::new(LlmService::new(&config, &SystemSettings::default())),
            Arc::new(StoreClient::new(&config)),
            Arc::new(LocalStore::new(dir)),
        )
    }

    #[test]
    fn admin_free_pdf_maps() {
        let doc = document(json!({"freeLink": "https://example.com/free.pdf"}));
        let content = admin_lesson(&doc, ContentType::PdfFree, Subject::Science).unwrap();
        assert_eq!(content.title, "Free Study Material");
        assert_eq!(content.content, "https://example.com/free.pdf");
        assert!(!content.is_coming_soon);
    }

    #[test]
    fn admin_video_uses_viewer_type_and_premium_first() {
        let doc = document(json!({
            "premiumVideoLink": "https://example.com/premium.mp4",
            "freeVideoLink": "https://example.com/free.mp4"
        }));
        let content = admin_lesson(&doc, ContentType::VideoLecture, Subject::Science).unwrap();
        assert_eq!(content.content_type, ContentType::PdfViewer);
        assert_eq!(content.content, "https://example.com/premium.mp4");

        let doc = document(json!({"freeVideoLink": "https://example.com/free.mp4"}));
        let content = admin_lesson(&doc, ContentType::VideoLecture, Subject::Science).unwrap();
        assert_eq!(content.content, "https://example.com/free.mp4");
    }

    #[test]
    fn admin_legacy_link_serves_viewer() {
        let doc = document(json!({"link": "https://example.com/old.pdf"}));
        let content = admin_lesson(&doc, ContentType::PdfViewer, Subject::Science).unwrap();
        assert_eq!(content.subtitle, "Provided by Teacher");
    }

    #[test]
    fn admin_manual_mcqs_map() {
        let doc = document(json!({
            "manualMcqData": [
                {"question": "Q1", "options": ["a", "b"], "correctAnswer": 0, "explanation": ""}
            ]
        }));
        let content = admin_lesson(&doc, ContentType::McqSimple, Subject::Science).unwrap();
        assert_eq!(content.title, "Class Test (Admin)");
        assert_eq!(content.subtitle, "1 Questions");
        assert_eq!(content.mcq_data.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn admin_empty_fields_do_not_match() {
        let doc = document(json!({"freeLink": "  ", "manualMcqData": []}));
        assert!(admin_lesson(&doc, ContentType::PdfFree, Subject::Science).is_none());
        assert!(admin_lesson(&doc, ContentType::McqSimple, Subject::Science).is_none());
        assert!(admin_lesson(&doc, ContentType::NotesQuick, Subject::Science).is_none());
    }

    #[test]
    fn mcq_prompt_carries_overrides() {
        let mut req = request(ContentType::McqAnalysis, true);
        req.admin_prompt_override = Some("Focus on ray diagrams.".to_string());
        req.target_questions = 20;

        let prompt = build_mcq_prompt(&req, Some("IMPORTANT INSTRUCTION: be brief"));
        assert!(prompt.starts_with("IMPORTANT INSTRUCTION: be brief"));
        assert!(prompt.contains("INSTRUCTION: Focus on ray diagrams."));
        assert!(prompt.contains("Create 20 MCQs"));
        assert!(prompt.contains("Light - Reflection and Refraction"));
        assert!(prompt.contains("correctAnswer"));
    }

    #[test]
    fn notes_prompt_depth_switch() {
        let req = request(ContentType::NotesPremium, true);
        let premium = build_notes_prompt(&req, None, true);
        assert!(premium.contains("exam strategies"));

        let quick = build_notes_prompt(&req, None, false);
        assert!(quick.contains("concise and clear"));
    }

    #[tokio::test]
    async fn pdf_without_admin_is_coming_soon() {
        let dir = tempfile::tempdir().unwrap();
        let service = offline_service(dir.path());

        let content = service
            .resolve(&request(ContentType::PdfPremium, true))
            .await
            .unwrap();
        assert!(content.is_coming_soon);
        assert_eq!(content.title, "Light - Reflection and Refraction");
    }

    #[tokio::test]
    async fn disallowed_generation_is_coming_soon() {
        let dir = tempfile::tempdir().unwrap();
        let service = offline_service(dir.path());

        let content = service
            .resolve(&request(ContentType::NotesQuick, false))
            .await
            .unwrap();
        assert!(content.is_coming_soon);
    }

    #[tokio::test]
    async fn local_cache_backs_up_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store
            .put(
                "nst_content_CBSE_10_Science_static-9",
                &json!({"premiumLink": "https://example.com/premium.pdf"}),
            )
            .await
            .unwrap();

        let service = offline_service(dir.path());
        let content = service
            .resolve(&request(ContentType::PdfPremium, false))
            .await
            .unwrap();

        assert!(!content.is_coming_soon);
        // Title is replaced with the chapter title on an admin hit.
        assert_eq!(content.title, "Light - Reflection and Refraction");
        assert_eq!(content.content, "https://example.com/premium.pdf");
    }
}

//! Chapter listing - capability layer
//!
//! Resolution order: curator override → in-memory cache → static syllabus →
//! AI generation → placeholder list. The cache is a plain map with no
//! eviction; chapter lists are tiny and the process is short-lived.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::models::catalog::{Board, ClassLevel, Language, Stream, Subject};
use crate::models::content::Chapter;
use crate::services::llm::LlmService;
use crate::storage::{keys, LocalStore};
use crate::syllabus;

/// What the chapter-list prompt asks the model to emit
#[derive(Debug, Deserialize)]
struct ChapterDraft {
    title: String,
    #[serde(default)]
    description: String,
}

/// Chapter list resolution
pub struct ChapterService {
    llm: Arc<LlmService>,
    local: Arc<LocalStore>,
    cache: Mutex<HashMap<String, Vec<Chapter>>>,
}

impl ChapterService {
    pub fn new(llm: Arc<LlmService>, local: Arc<LocalStore>) -> Self {
        Self {
            llm,
            local,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the chapter list for a subject.
    ///
    /// Never fails: when everything else is exhausted a placeholder list is
    /// returned (and cached) so the caller always has something to render.
    pub async fn fetch_chapters(
        &self,
        board: Board,
        class_level: ClassLevel,
        stream: Option<Stream>,
        subject: Subject,
        language: Language,
    ) -> Vec<Chapter> {
        let cache_key = keys::chapter_cache_key(board, class_level, stream, subject, language);

        // Curator overrides beat everything, including the cache.
        if let Some(custom) = self.local.custom_chapters(&cache_key).await {
            if !custom.is_empty() {
                info!("using {} curator chapters for {}", custom.len(), cache_key);
                return custom;
            }
        }

        if let Some(cached) = self.cache.lock().ok().and_then(|c| c.get(&cache_key).cloned()) {
            return cached;
        }

        if let Some(chapters) = syllabus::static_chapters(board, class_level, subject) {
            info!("static syllabus hit for {} ({} chapters)", cache_key, chapters.len());
            self.cache_put(&cache_key, &chapters);
            return chapters;
        }

        match self.generate_chapters(board, class_level, stream, subject).await {
            Ok(chapters) => {
                info!("AI produced {} chapters for {}", chapters.len(), cache_key);
                self.cache_put(&cache_key, &chapters);
                chapters
            }
            Err(e) => {
                warn!("chapter generation failed for {}: {}", cache_key, e);
                let placeholder = placeholder_chapters();
                self.cache_put(&cache_key, &placeholder);
                placeholder
            }
        }
    }

    async fn generate_chapters(
        &self,
        board: Board,
        class_level: ClassLevel,
        stream: Option<Stream>,
        subject: Subject,
    ) -> crate::error::Result<Vec<Chapter>> {
        let stream_label = stream
            .filter(|_| class_level.has_stream())
            .map(|s| format!("{} ", s.as_key()))
            .unwrap_or_default();

        let prompt = format!(
            "List 15 standard chapters for {} {}Subject: {} ({}). \
             Return JSON array: [{{\"title\": \"...\", \"description\": \"...\"}}].",
            class_level.prompt_label(),
            stream_label,
            subject.name(),
            board.as_key()
        );

        let drafts: Vec<ChapterDraft> = self.llm.generate_json(&prompt, None).await?;

        Ok(drafts
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| Chapter {
                id: format!("ch-{}", idx + 1),
                title: draft.title,
                description: draft.description,
            })
            .collect())
    }

    fn cache_put(&self, cache_key: &str, chapters: &[Chapter]) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(cache_key.to_string(), chapters.to_vec());
        }
    }
}

/// Last resort so the UI still has a list to show.
fn placeholder_chapters() -> Vec<Chapter> {
    vec![
        Chapter {
            id: "1".to_string(),
            title: "Chapter 1".to_string(),
            description: String::new(),
        },
        Chapter {
            id: "2".to_string(),
            title: "Chapter 2".to_string(),
            description: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::settings::SystemSettings;
    use serde_json::json;

    fn offline_service(dir: &std::path::Path) -> ChapterService {
        // No keys configured, so any AI path fails immediately.
        let llm = Arc::new(LlmService::new(&Config::default(), &SystemSettings::default()));
        ChapterService::new(llm, Arc::new(LocalStore::new(dir)))
    }

    #[tokio::test]
    async fn static_syllabus_is_used_and_cached() {
        let dir = tempfile::tempdir().unwrap();
        let service = offline_service(dir.path());

        let chapters = service
            .fetch_chapters(
                Board::Cbse,
                ClassLevel::Class10,
                None,
                Subject::Science,
                Language::English,
            )
            .await;
        assert_eq!(chapters.len(), 13);
        assert_eq!(chapters[0].id, "static-1");

        // Second call is served from the cache and must match.
        let again = service
            .fetch_chapters(
                Board::Cbse,
                ClassLevel::Class10,
                None,
                Subject::Science,
                Language::English,
            )
            .await;
        assert_eq!(again, chapters);
    }

    #[tokio::test]
    async fn curator_override_beats_static() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store
            .put(
                "nst_custom_chapters_CBSE-10-Science-English",
                &json!([{"id": "c-1", "title": "Only Chapter", "description": ""}]),
            )
            .await
            .unwrap();

        let service = offline_service(dir.path());
        let chapters = service
            .fetch_chapters(
                Board::Cbse,
                ClassLevel::Class10,
                None,
                Subject::Science,
                Language::English,
            )
            .await;
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Only Chapter");
    }

    #[tokio::test]
    async fn placeholder_when_every_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let service = offline_service(dir.path());

        // No static entry for this combination and no API keys.
        let chapters = service
            .fetch_chapters(
                Board::Icse,
                ClassLevel::Class7,
                None,
                Subject::Hindi,
                Language::Hindi,
            )
            .await;
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Chapter 1");
    }
}

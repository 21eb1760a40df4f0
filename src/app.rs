//! Application orchestrator
//!
//! Wires the clients, services and renderer together and drives one full
//! content run: chapter list → admin material check → bulk MCQ test →
//! bilingual notes → HTML report.

use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::StoreClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::content::{Chapter, ContentType, LessonContent};
use crate::models::settings::SystemSettings;
use crate::orchestrator::{BulkMcqRequest, McqBatchGenerator};
use crate::render::{self, ReportMeta};
use crate::services::{ChapterService, ContentService, LessonRequest, LlmService, NotesService};
use crate::storage::LocalStore;

/// Application instance
pub struct App {
    config: Config,
    chapters: ChapterService,
    content: ContentService,
    notes: NotesService,
    batch: McqBatchGenerator,
}

impl App {
    /// Load settings and wire up every layer.
    pub async fn initialize(config: Config) -> Result<Self> {
        info!("=========================================");
        info!("📚 Study content run starting");
        info!(
            "   {} {} {} | language: {}",
            config.board.as_key(),
            config.class_level.prompt_label(),
            config.subject.name(),
            config.language.name()
        );
        info!("=========================================");

        let settings = SystemSettings::load(&config.settings_file).await?;
        let llm = Arc::new(LlmService::new(&config, &settings));
        info!(
            "🔑 {} API key(s), model: {}",
            settings.available_keys().len(),
            llm.model_name()
        );

        let store = Arc::new(StoreClient::new(&config));
        let local = Arc::new(LocalStore::new(config.cache_dir.clone()));

        Ok(Self {
            chapters: ChapterService::new(llm.clone(), local.clone()),
            content: ContentService::new(llm.clone(), store, local),
            notes: NotesService::new(llm.clone()),
            batch: McqBatchGenerator::new(llm, &config),
            config,
        })
    }

    /// One full run for the configured chapter.
    pub async fn run(&self) -> Result<()> {
        let config = &self.config;

        let chapters = self
            .chapters
            .fetch_chapters(
                config.board,
                config.class_level,
                config.stream,
                config.subject,
                config.language,
            )
            .await;
        info!("📖 {} chapters available", chapters.len());

        let chapter = match chapters
            .get(config.chapter_index)
            .or_else(|| chapters.first())
        {
            Some(chapter) => chapter.clone(),
            None => {
                warn!("no chapters resolved, nothing to do");
                return Ok(());
            }
        };
        info!("➡️  chapter {}: {}", chapter.id, chapter.title);

        self.check_admin_material(&chapter).await?;

        let mut question_count = 0;
        if config.mcq_total > 0 {
            question_count = self.run_bulk_mcqs(&chapter).await?;
        }

        let report_path = self.run_notes_report(&chapter).await?;

        info!("=========================================");
        info!("✅ Run complete");
        info!("   chapter: {}", chapter.title);
        info!("   questions: {}", question_count);
        info!("   report: {}", report_path);
        info!("=========================================");
        Ok(())
    }

    /// Admin lookup only; generation stays off so this is a cheap probe.
    async fn check_admin_material(&self, chapter: &Chapter) -> Result<()> {
        let lesson = self.content.resolve(&self.lesson_request(chapter)).await?;

        if lesson.is_coming_soon {
            info!("ℹ️  no admin material for this chapter");
        } else {
            info!("📎 admin material: {} → {}", lesson.subtitle, lesson.content);
        }
        Ok(())
    }

    async fn run_bulk_mcqs(&self, chapter: &Chapter) -> Result<usize> {
        let config = &self.config;
        let request = BulkMcqRequest {
            board: config.board,
            class_level: config.class_level,
            subject: config.subject,
            chapter: chapter.clone(),
            language: config.language,
        };

        let questions = self
            .batch
            .generate(&request, config.mcq_total, |percent, count| {
                info!("⏳ {}% done, {} questions so far", percent, count);
            })
            .await?;

        let test = LessonContent::new(
            format!("MCQ Test: {}", chapter.title),
            format!("{} Questions", questions.len()),
            "",
            ContentType::McqSimple,
            config.subject,
        )
        .with_mcqs(questions);

        let path = self
            .output_path(&format!("mcq_{}.json", chapter.id))
            .await?;
        tokio::fs::write(&path, serde_json::to_string_pretty(&test)?).await?;
        info!("💾 MCQ test saved to {}", path);

        Ok(test.mcq_data.map(|m| m.len()).unwrap_or(0))
    }

    async fn run_notes_report(&self, chapter: &Chapter) -> Result<String> {
        let config = &self.config;
        let notes = self
            .notes
            .generate_bilingual_notes(config.board, config.class_level, config.subject, chapter)
            .await?;

        let html = render::render(
            &notes,
            &ReportMeta {
                board: config.board,
                class_level: config.class_level,
                stream: config.stream,
                subject: config.subject,
            },
        );

        let path = self
            .output_path(&format!("notes_{}.html", chapter.id))
            .await?;
        tokio::fs::write(&path, html).await?;
        info!("📝 report written to {}", path);
        Ok(path)
    }

    fn lesson_request(&self, chapter: &Chapter) -> LessonRequest {
        let config = &self.config;
        LessonRequest {
            board: config.board,
            class_level: config.class_level,
            stream: config.stream,
            subject: config.subject,
            chapter: chapter.clone(),
            language: config.language,
            content_type: ContentType::PdfPremium,
            target_questions: config.target_questions,
            admin_prompt_override: None,
            allow_ai_generation: false,
        }
    }

    async fn output_path(&self, file_name: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        Ok(format!("{}/{}", self.config.output_dir, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn initialize_without_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            settings_file: dir
                .path()
                .join("missing.toml")
                .to_string_lossy()
                .to_string(),
            cache_dir: dir.path().join("cache").to_string_lossy().to_string(),
            output_dir: dir.path().join("out").to_string_lossy().to_string(),
            ..Config::default()
        };

        // No settings file means defaults everywhere; wiring must not fail.
        let app = App::initialize(config).await.unwrap();
        assert_eq!(app.config.mcq_total, 30);
    }
}

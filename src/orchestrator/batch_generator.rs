//! Bulk MCQ generation - orchestration layer
//!
//! Splits a large question order into fixed-size batches and runs them in
//! waves of bounded concurrency. A failed batch is logged and dropped; the
//! run only errors when every batch came back empty.

use futures::future;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::catalog::{Board, ClassLevel, Language, Subject};
use crate::models::content::{Chapter, McqItem};
use crate::services::llm::LlmService;

/// One bulk MCQ order
#[derive(Debug, Clone)]
pub struct BulkMcqRequest {
    pub board: Board,
    pub class_level: ClassLevel,
    pub subject: Subject,
    pub chapter: Chapter,
    pub language: Language,
}

/// Wave-scheduled batch generator
pub struct McqBatchGenerator {
    llm: Arc<LlmService>,
    batch_size: usize,
    concurrency: usize,
}

impl McqBatchGenerator {
    pub fn new(llm: Arc<LlmService>, config: &Config) -> Self {
        Self {
            llm,
            batch_size: config.batch_size.max(1),
            concurrency: config.batch_concurrency.max(1),
        }
    }

    /// Generate `total` questions in concurrent batches.
    ///
    /// `on_progress` runs after each wave with the integer percent of
    /// batches finished and the questions collected so far. The result may
    /// hold fewer than `total` questions when batches fail; only a fully
    /// empty run is an error.
    pub async fn generate<F>(
        &self,
        request: &BulkMcqRequest,
        total: usize,
        mut on_progress: F,
    ) -> Result<Vec<McqItem>>
    where
        F: FnMut(u8, usize),
    {
        if total == 0 {
            return Ok(Vec::new());
        }

        let sizes = batch_sizes(total, self.batch_size);
        let total_batches = sizes.len();
        info!(
            "🚀 bulk MCQ run: {} questions in {} batches of up to {}",
            total, total_batches, self.batch_size
        );

        let mut questions: Vec<McqItem> = Vec::with_capacity(total);
        let mut last_error: Option<String> = None;
        let mut completed = 0usize;

        for (wave_index, wave) in sizes.chunks(self.concurrency).enumerate() {
            info!("📦 wave {}: {} batches in flight", wave_index + 1, wave.len());

            let batches = wave.iter().enumerate().map(|(offset, &count)| {
                self.generate_batch(request, count, completed + offset + 1, total_batches)
            });

            for result in future::join_all(batches).await {
                match result {
                    Ok(mut batch) => questions.append(&mut batch),
                    Err(e) => {
                        // One bad batch must not sink the whole order.
                        warn!("batch failed, continuing without it: {}", e);
                        last_error = Some(e.to_string());
                    }
                }
            }

            completed += wave.len();
            let percent = (completed * 100 / total_batches) as u8;
            on_progress(percent, questions.len());
        }

        if questions.is_empty() {
            return Err(AppError::AllBatchesFailed {
                last: last_error.unwrap_or_else(|| "no batches produced output".to_string()),
            });
        }

        info!("✅ bulk MCQ run done: {}/{} questions", questions.len(), total);
        Ok(questions)
    }

    async fn generate_batch(
        &self,
        request: &BulkMcqRequest,
        count: usize,
        batch_number: usize,
        total_batches: usize,
    ) -> Result<Vec<McqItem>> {
        let prompt = build_batch_prompt(request, count, batch_number, total_batches);
        self.llm.generate_json(&prompt, None).await
    }
}

/// Per-batch question counts: full batches plus a possibly smaller tail.
fn batch_sizes(total: usize, batch_size: usize) -> Vec<usize> {
    let full = total / batch_size;
    let tail = total % batch_size;

    let mut sizes = vec![batch_size; full];
    if tail > 0 {
        sizes.push(tail);
    }
    sizes
}

fn build_batch_prompt(
    request: &BulkMcqRequest,
    count: usize,
    batch_number: usize,
    total_batches: usize,
) -> String {
    format!(
        r#"Generate {count} unique MCQs for {board} {class} {subject}, Chapter: "{chapter}".
This is batch {batch} of {batches}; questions must not repeat across batches, so vary subtopics and difficulty.
Language: {language}.
Return valid JSON array:
[
  {{
    "question": "Question text",
    "options": ["A", "B", "C", "D"],
    "correctAnswer": 0,
    "explanation": "Explanation here"
  }}
]"#,
        count = count,
        board = request.board.as_key(),
        class = request.class_level.prompt_label(),
        subject = request.subject.name(),
        chapter = request.chapter.title,
        batch = batch_number,
        batches = total_batches,
        language = request.language.name(),
    )
}

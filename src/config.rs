use crate::models::catalog::{Board, ClassLevel, Language, Stream, Subject};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Board the app is serving
    pub board: Board,
    /// Class level
    pub class_level: ClassLevel,
    /// Stream, only meaningful for class 11/12
    pub stream: Option<Stream>,
    /// Subject
    pub subject: Subject,
    /// Content language
    pub language: Language,
    /// Which chapter of the fetched list the binary processes
    pub chapter_index: usize,
    /// Bulk MCQ target count (0 disables bulk generation)
    pub mcq_total: usize,
    /// Questions requested per AI call during bulk generation
    pub batch_size: usize,
    /// Batches in flight per wave
    pub batch_concurrency: usize,
    /// Question count for a single lesson-level MCQ test
    pub target_questions: usize,
    // --- LLM configuration ---
    pub ai_model: String,
    pub llm_api_base_url: String,
    // --- Remote document store ---
    pub store_base_url: String,
    pub store_timeout_secs: u64,
    // --- Local files ---
    pub settings_file: String,
    pub cache_dir: String,
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Board::Cbse,
            class_level: ClassLevel::Class10,
            stream: None,
            subject: Subject::Science,
            language: Language::English,
            chapter_index: 0,
            mcq_total: 30,
            batch_size: 10,
            batch_concurrency: 10,
            target_questions: 15,
            ai_model: "gemini-1.5-flash".to_string(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            store_base_url: "https://nst-study-app-default-rtdb.firebaseio.com/content".to_string(),
            store_timeout_secs: 10,
            settings_file: "settings.toml".to_string(),
            cache_dir: "content_cache".to_string(),
            output_dir: "reports".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            board: std::env::var("STUDY_BOARD").ok().and_then(|v| Board::find(&v)).unwrap_or(default.board),
            class_level: std::env::var("STUDY_CLASS").ok().and_then(|v| ClassLevel::find(&v)).unwrap_or(default.class_level),
            stream: std::env::var("STUDY_STREAM").ok().and_then(|v| Stream::find(&v)).or(default.stream),
            subject: std::env::var("STUDY_SUBJECT").ok().and_then(|v| Subject::find(&v)).unwrap_or(default.subject),
            language: std::env::var("STUDY_LANGUAGE").ok().and_then(|v| Language::find(&v)).unwrap_or(default.language),
            chapter_index: std::env::var("CHAPTER_INDEX").ok().and_then(|v| v.parse().ok()).unwrap_or(default.chapter_index),
            mcq_total: std::env::var("MCQ_TOTAL").ok().and_then(|v| v.parse().ok()).unwrap_or(default.mcq_total),
            batch_size: std::env::var("MCQ_BATCH_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.batch_size),
            batch_concurrency: std::env::var("MCQ_CONCURRENCY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.batch_concurrency),
            target_questions: std::env::var("TARGET_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.target_questions),
            ai_model: std::env::var("AI_MODEL").unwrap_or(default.ai_model),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            store_base_url: std::env::var("STORE_BASE_URL").unwrap_or(default.store_base_url),
            store_timeout_secs: std::env::var("STORE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.store_timeout_secs),
            settings_file: std::env::var("SETTINGS_FILE").unwrap_or(default.settings_file),
            cache_dir: std::env::var("CACHE_DIR").unwrap_or(default.cache_dir),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
        }
    }
}

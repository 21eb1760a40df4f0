//! Bilingual notes - capability layer
//!
//! One structured-JSON generation call producing section-by-section notes in
//! English and Hindi, ready for the report renderer.

use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::models::catalog::{Board, ClassLevel, Subject};
use crate::models::content::{BilingualNotes, Chapter};
use crate::services::llm::LlmService;

/// Bilingual study-note generation
pub struct NotesService {
    llm: Arc<LlmService>,
}

impl NotesService {
    pub fn new(llm: Arc<LlmService>) -> Self {
        Self { llm }
    }

    /// Generate section-by-section bilingual notes for one chapter.
    pub async fn generate_bilingual_notes(
        &self,
        board: Board,
        class_level: ClassLevel,
        subject: Subject,
        chapter: &Chapter,
    ) -> Result<BilingualNotes> {
        let prompt = build_notes_prompt(board, class_level, subject, &chapter.title);

        let notes: BilingualNotes = self.llm.generate_json(&prompt, None).await?;
        info!(
            "bilingual notes ready: {} sections for \"{}\"",
            notes.sections.len(),
            notes.title
        );

        Ok(notes)
    }
}

fn build_notes_prompt(
    board: Board,
    class_level: ClassLevel,
    subject: Subject,
    chapter_title: &str,
) -> String {
    format!(
        r#"Act as an expert teacher for {board} {class} {subject}.
Create detailed bilingual study notes for the chapter: "{chapter}".

Output STRICTLY VALID JSON with this structure:
{{
  "title": "Chapter Title",
  "sections": [
    {{
      "title": "Section Title (English)",
      "titleHi": "Section Title (Hindi)",
      "contentEn": "Explanation in simple English...",
      "contentHi": "Explanation in simple Hindi...",
      "type": "info" | "alert" | "success" | "normal"
    }}
  ]
}}

Rules:
1. contentEn and contentHi must carry the SAME level of detail.
2. Use "alert" for common mistakes, "success" for key formulas or results, "info" for definitions, "normal" otherwise.
3. Cover the full chapter in 6-8 sections.
4. Use **bold** for key terms and "- " bullets where helpful."#,
        board = board.as_key(),
        class = class_level.prompt_label(),
        subject = subject.name(),
        chapter = chapter_title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::SectionKind;

    #[test]
    fn prompt_names_the_chapter_and_schema() {
        let prompt = build_notes_prompt(
            Board::Cbse,
            ClassLevel::Class10,
            Subject::Science,
            "Light - Reflection and Refraction",
        );
        assert!(prompt.contains("CBSE Class 10 Science"));
        assert!(prompt.contains("\"Light - Reflection and Refraction\""));
        assert!(prompt.contains("contentHi"));
        assert!(prompt.contains("6-8 sections"));
    }

    #[test]
    fn model_output_shape_parses() {
        let json = r#"{
            "title": "Light",
            "sections": [
                {
                    "title": "Laws of Reflection",
                    "titleHi": "परावर्तन के नियम",
                    "contentEn": "**Angle of incidence** equals angle of reflection.",
                    "contentHi": "**आपतन कोण** परावर्तन कोण के बराबर होता है।",
                    "type": "success"
                },
                {
                    "title": "Introduction",
                    "contentEn": "Light travels in straight lines.",
                    "contentHi": "प्रकाश सीधी रेखा में चलता है।",
                    "type": "normal"
                }
            ]
        }"#;

        let notes: BilingualNotes = serde_json::from_str(json).unwrap();
        assert_eq!(notes.sections.len(), 2);
        assert_eq!(notes.sections[0].kind, SectionKind::Success);
        assert!(notes.sections[1].title_hi.is_none());
    }
}

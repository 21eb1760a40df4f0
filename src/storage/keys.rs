//! Key formats
//!
//! These strings are shared with the admin dashboard, which writes content
//! under the same keys. Do not restyle them.

use crate::models::catalog::{Board, ClassLevel, Language, Stream, Subject};

/// `-{stream}` for class 11/12 when a stream is chosen, otherwise empty.
fn stream_suffix(class_level: ClassLevel, stream: Option<Stream>) -> String {
    match stream {
        Some(stream) if class_level.has_stream() => format!("-{}", stream.as_key()),
        _ => String::new(),
    }
}

/// Admin content document key for one chapter and subject.
pub fn content_key(
    board: Board,
    class_level: ClassLevel,
    stream: Option<Stream>,
    subject: Subject,
    chapter_id: &str,
) -> String {
    format!(
        "nst_content_{}_{}{}_{}_{}",
        board.as_key(),
        class_level.as_key(),
        stream_suffix(class_level, stream),
        subject.name(),
        chapter_id
    )
}

/// In-memory chapter cache key; also addresses curator chapter overrides.
pub fn chapter_cache_key(
    board: Board,
    class_level: ClassLevel,
    stream: Option<Stream>,
    subject: Subject,
    language: Language,
) -> String {
    format!(
        "{}-{}{}-{}-{}",
        board.as_key(),
        class_level.as_key(),
        stream_suffix(class_level, stream),
        subject.name(),
        language.name()
    )
}

/// Local-store key for curator-provided chapter lists.
pub fn custom_chapters_key(cache_key: &str) -> String {
    format!("nst_custom_chapters_{}", cache_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_key_without_stream() {
        let key = content_key(
            Board::Cbse,
            ClassLevel::Class10,
            None,
            Subject::Science,
            "static-9",
        );
        assert_eq!(key, "nst_content_CBSE_10_Science_static-9");
    }

    #[test]
    fn content_key_with_stream_on_senior_class() {
        let key = content_key(
            Board::Cbse,
            ClassLevel::Class12,
            Some(Stream::Science),
            Subject::Physics,
            "ch-3",
        );
        assert_eq!(key, "nst_content_CBSE_12-Science_Physics_ch-3");
    }

    #[test]
    fn stream_is_ignored_below_class_11() {
        let key = content_key(
            Board::Cbse,
            ClassLevel::Class9,
            Some(Stream::Science),
            Subject::Science,
            "ch-1",
        );
        assert_eq!(key, "nst_content_CBSE_9_Science_ch-1");
    }

    #[test]
    fn cache_key_includes_language() {
        let key = chapter_cache_key(
            Board::Cbse,
            ClassLevel::Class10,
            None,
            Subject::Science,
            Language::Hindi,
        );
        assert_eq!(key, "CBSE-10-Science-Hindi");
        assert_eq!(
            custom_chapters_key(&key),
            "nst_custom_chapters_CBSE-10-Science-Hindi"
        );
    }
}

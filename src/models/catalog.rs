//! Catalog enums
//!
//! Board / class / stream / subject / language identify every piece of
//! content. Their `as_key()` forms feed the cache and store key formats, so
//! they must stay stable.

use serde::{Deserialize, Serialize};

/// Education board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    Cbse,
    Icse,
    /// State boards, treated as one catalog
    State,
}

impl Board {
    /// Stable key form used in store and cache keys
    pub fn as_key(self) -> &'static str {
        match self {
            Board::Cbse => "CBSE",
            Board::Icse => "ICSE",
            Board::State => "STATE",
        }
    }

    pub fn find(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CBSE" => Some(Board::Cbse),
            "ICSE" => Some(Board::Icse),
            "STATE" => Some(Board::State),
            _ => None,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Class level, classes 6-12 plus competitive-exam prep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLevel {
    Class6,
    Class7,
    Class8,
    Class9,
    Class10,
    Class11,
    Class12,
    Competition,
}

impl ClassLevel {
    pub fn as_key(self) -> &'static str {
        match self {
            ClassLevel::Class6 => "6",
            ClassLevel::Class7 => "7",
            ClassLevel::Class8 => "8",
            ClassLevel::Class9 => "9",
            ClassLevel::Class10 => "10",
            ClassLevel::Class11 => "11",
            ClassLevel::Class12 => "12",
            ClassLevel::Competition => "COMPETITION",
        }
    }

    /// Streams only exist for senior secondary classes
    pub fn has_stream(self) -> bool {
        matches!(self, ClassLevel::Class11 | ClassLevel::Class12)
    }

    /// Human form used inside prompts
    pub fn prompt_label(self) -> String {
        match self {
            ClassLevel::Competition => "Competitive Exam".to_string(),
            other => format!("Class {}", other.as_key()),
        }
    }

    pub fn find(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "6" => Some(ClassLevel::Class6),
            "7" => Some(ClassLevel::Class7),
            "8" => Some(ClassLevel::Class8),
            "9" => Some(ClassLevel::Class9),
            "10" => Some(ClassLevel::Class10),
            "11" => Some(ClassLevel::Class11),
            "12" => Some(ClassLevel::Class12),
            "COMPETITION" => Some(ClassLevel::Competition),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Senior secondary stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    pub fn as_key(self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }

    pub fn find(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "science" => Some(Stream::Science),
            "commerce" => Some(Stream::Commerce),
            "arts" | "humanities" => Some(Stream::Arts),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Content language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    /// Mixed Hindi written in Latin script
    Hinglish,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Hinglish => "Hinglish",
        }
    }

    pub fn find(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "hindi" | "hi" => Some(Language::Hindi),
            "hinglish" => Some(Language::Hinglish),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// School subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Science,
    Physics,
    Chemistry,
    Biology,
    SocialScience,
    History,
    Geography,
    Civics,
    Economics,
    English,
    Hindi,
}

impl Subject {
    /// Display name, also the form used inside keys and prompts
    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::SocialScience => "Social Science",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Civics => "Civics",
            Subject::Economics => "Economics",
            Subject::English => "English",
            Subject::Hindi => "Hindi",
        }
    }

    /// Exact match on the display name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Mathematics" => Some(Subject::Mathematics),
            "Science" => Some(Subject::Science),
            "Physics" => Some(Subject::Physics),
            "Chemistry" => Some(Subject::Chemistry),
            "Biology" => Some(Subject::Biology),
            "Social Science" => Some(Subject::SocialScience),
            "History" => Some(Subject::History),
            "Geography" => Some(Subject::Geography),
            "Civics" => Some(Subject::Civics),
            "Economics" => Some(Subject::Economics),
            "English" => Some(Subject::English),
            "Hindi" => Some(Subject::Hindi),
            _ => None,
        }
    }

    /// Forgiving lookup (case-insensitive, common short forms)
    pub fn find(s: &str) -> Option<Self> {
        if let Some(subject) = Self::from_name(s.trim()) {
            return Some(subject);
        }

        match s.trim().to_lowercase().as_str() {
            "maths" | "math" | "mathematics" => Some(Subject::Mathematics),
            "science" => Some(Subject::Science),
            "physics" => Some(Subject::Physics),
            "chemistry" => Some(Subject::Chemistry),
            "biology" | "bio" => Some(Subject::Biology),
            "social science" | "social_science" | "sst" => Some(Subject::SocialScience),
            "history" => Some(Subject::History),
            "geography" => Some(Subject::Geography),
            "civics" | "political science" => Some(Subject::Civics),
            "economics" | "eco" => Some(Subject::Economics),
            "english" => Some(Subject::English),
            "hindi" => Some(Subject::Hindi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

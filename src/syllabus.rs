//! Static syllabus
//!
//! Compile-time chapter lists for the combinations curators have signed off
//! on. A hit here skips the AI entirely. Keys are `{board}-{class}-{subject}`
//! with the subject display name.

use phf::phf_map;

use crate::models::catalog::{Board, ClassLevel, Subject};
use crate::models::content::Chapter;

static STATIC_SYLLABUS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "CBSE-10-Science" => &[
        "Chemical Reactions and Equations",
        "Acids, Bases and Salts",
        "Metals and Non-metals",
        "Carbon and its Compounds",
        "Life Processes",
        "Control and Coordination",
        "How do Organisms Reproduce?",
        "Heredity",
        "Light - Reflection and Refraction",
        "The Human Eye and the Colourful World",
        "Electricity",
        "Magnetic Effects of Electric Current",
        "Our Environment",
    ],
    "CBSE-10-Mathematics" => &[
        "Real Numbers",
        "Polynomials",
        "Pair of Linear Equations in Two Variables",
        "Quadratic Equations",
        "Arithmetic Progressions",
        "Triangles",
        "Coordinate Geometry",
        "Introduction to Trigonometry",
        "Some Applications of Trigonometry",
        "Circles",
        "Areas Related to Circles",
        "Surface Areas and Volumes",
        "Statistics",
        "Probability",
    ],
    "CBSE-9-Science" => &[
        "Matter in Our Surroundings",
        "Is Matter Around Us Pure",
        "Atoms and Molecules",
        "Structure of the Atom",
        "The Fundamental Unit of Life",
        "Tissues",
        "Motion",
        "Force and Laws of Motion",
        "Gravitation",
        "Work and Energy",
        "Sound",
        "Improvement in Food Resources",
    ],
    "CBSE-12-Physics" => &[
        "Electric Charges and Fields",
        "Electrostatic Potential and Capacitance",
        "Current Electricity",
        "Moving Charges and Magnetism",
        "Magnetism and Matter",
        "Electromagnetic Induction",
        "Alternating Current",
        "Electromagnetic Waves",
        "Ray Optics and Optical Instruments",
        "Wave Optics",
        "Dual Nature of Radiation and Matter",
        "Atoms",
        "Nuclei",
        "Semiconductor Electronics",
    ],
};

/// Chapters from the static table, ids `static-1..n`.
///
/// Note the key deliberately ignores stream and language: the static table
/// predates both and curators key it the old way.
pub fn static_chapters(
    board: Board,
    class_level: ClassLevel,
    subject: Subject,
) -> Option<Vec<Chapter>> {
    let key = format!("{}-{}-{}", board.as_key(), class_level.as_key(), subject.name());
    let titles = STATIC_SYLLABUS.get(key.as_str())?;

    Some(
        titles
            .iter()
            .enumerate()
            .map(|(idx, title)| Chapter {
                id: format!("static-{}", idx + 1),
                title: (*title).to_string(),
                description: format!("Chapter {}", idx + 1),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_combination_hits() {
        let chapters =
            static_chapters(Board::Cbse, ClassLevel::Class10, Subject::Science).unwrap();
        assert_eq!(chapters.len(), 13);
        assert_eq!(chapters[0].id, "static-1");
        assert_eq!(chapters[0].title, "Chemical Reactions and Equations");
        assert_eq!(chapters[12].description, "Chapter 13");
    }

    #[test]
    fn unknown_combination_misses() {
        assert!(static_chapters(Board::Icse, ClassLevel::Class7, Subject::Hindi).is_none());
    }
}

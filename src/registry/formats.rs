//! Built-in University Formats
//!
//! Thesis format requirements for the three institutions supported out of
//! the box. PUP doubles as the default format for unknown institutions.

use super::types::{
    ChapterRequirement, FormatRequirement, FormattingRequirements, Margins, PagePosition,
    PaginationRequirements, Spacing,
};

/// Slug of the format used when an institution is not in the registry
pub const DEFAULT_SLUG: &str = "pup";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn chapter(chapter_number: u32, title: &str, required: &[&str], optional: &[&str]) -> ChapterRequirement {
    ChapterRequirement {
        chapter_number,
        title: title.to_string(),
        required_sections: strings(required),
        optional_sections: strings(optional),
    }
}

// ============================================================================
// Shared chapter vocabulary
// ============================================================================

const PROBLEM_SECTIONS: &[&str] = &[
    "Introduction",
    "Background of the Study",
    "Theoretical/Conceptual Framework",
    "Statement of the Problem",
    "Hypothesis",
    "Scope and Delimitation",
    "Significance of the Study",
    "Definition of Terms",
];

const LITERATURE_SECTIONS: &[&str] = &[
    "Foreign Literature",
    "Local Literature",
    "Foreign Studies",
    "Local Studies",
    "Synthesis",
];

const METHODOLOGY_SECTIONS: &[&str] = &[
    "Research Design",
    "Population and Sample",
    "Research Instrument",
    "Data Gathering Procedure",
    "Statistical Treatment of Data",
];

const FINDINGS_SECTIONS: &[&str] = &[
    "Presentation of Findings",
    "Analysis of Data",
    "Discussion of Results",
];

const SUMMARY_SECTIONS: &[&str] = &["Summary", "Conclusions", "Recommendations"];

const SUMMARY_OPTIONAL_SECTIONS: &[&str] = &[
    "Implications",
    "Limitations of the Study",
    "Suggestions for Further Research",
];

const SUMMARY_TITLE: &str = "SUMMARY, CONCLUSIONS AND RECOMMENDATIONS";

/// Times New Roman 12pt, double spaced, roman then arabic numerals
fn standard_formatting(top_margin: f64) -> FormattingRequirements {
    FormattingRequirements {
        font: "Times New Roman".to_string(),
        font_size: 12,
        spacing: Spacing::Double,
        margins: Margins {
            left: 1.5,
            right: 1.0,
            top: top_margin,
            bottom: 1.0,
        },
        pagination: PaginationRequirements {
            preliminaries_position: PagePosition::CenterBottom,
            main_text_position: PagePosition::TopRight,
            use_roman_numerals: true,
            use_arabic_numerals: true,
        },
    }
}

// ============================================================================
// Institutions
// ============================================================================

/// Polytechnic University of the Philippines
pub fn pup() -> FormatRequirement {
    FormatRequirement {
        name: "Polytechnic University of the Philippines".to_string(),
        slug: "pup".to_string(),
        preliminaries: strings(&[
            "Title Page",
            "Approval Sheet",
            "Abstract",
            "Acknowledgement",
            "Dedication",
            "Table of Contents",
            "List of Tables",
            "List of Figures",
        ]),
        chapter_structure: vec![
            chapter(1, "THE PROBLEM AND ITS BACKGROUND", PROBLEM_SECTIONS, &[]),
            chapter(2, "REVIEW OF RELATED LITERATURE", LITERATURE_SECTIONS, &[]),
            chapter(3, "RESEARCH METHODOLOGY", METHODOLOGY_SECTIONS, &[]),
            chapter(
                4,
                "PRESENTATION, ANALYSIS AND INTERPRETATION OF DATA",
                &["Presentation of Data", "Analysis of Data", "Interpretation of Data"],
                &[],
            ),
            chapter(5, SUMMARY_TITLE, SUMMARY_SECTIONS, SUMMARY_OPTIONAL_SECTIONS),
        ],
        formatting: standard_formatting(1.0),
        end_matter: strings(&["References", "Appendices", "Curriculum Vitae"]),
    }
}

/// Visayas State University
///
/// Uses "Literature Cited" in place of "References".
pub fn vsu() -> FormatRequirement {
    FormatRequirement {
        name: "Visayas State University".to_string(),
        slug: "vsu".to_string(),
        preliminaries: strings(&[
            "Title Page",
            "Approval Sheet",
            "Biographical Sketch",
            "Acknowledgement",
            "Table of Contents",
            "Lists of Tables/Figures/Appendices",
            "Abstract",
        ]),
        chapter_structure: vec![
            chapter(1, "INTRODUCTION", PROBLEM_SECTIONS, &[]),
            chapter(2, "REVIEW OF RELATED LITERATURE AND STUDIES", LITERATURE_SECTIONS, &[]),
            chapter(3, "METHODOLOGY", METHODOLOGY_SECTIONS, &[]),
            chapter(4, "RESULTS AND DISCUSSION", FINDINGS_SECTIONS, &[]),
            chapter(5, SUMMARY_TITLE, SUMMARY_SECTIONS, SUMMARY_OPTIONAL_SECTIONS),
        ],
        formatting: standard_formatting(1.5),
        end_matter: strings(&["Literature Cited", "Appendices"]),
    }
}

/// Central Mindanao University
///
/// Six chapters; the framework gets its own chapter before methodology.
pub fn cmu() -> FormatRequirement {
    FormatRequirement {
        name: "Central Mindanao University".to_string(),
        slug: "cmu".to_string(),
        preliminaries: strings(&[
            "Title Page",
            "Approval Sheet",
            "Acknowledgement",
            "Dedication",
            "Table of Contents",
            "Lists of Tables/Figures/Appendices",
            "Abstract",
        ]),
        chapter_structure: vec![
            chapter(1, "THE PROBLEM AND ITS BACKGROUND", PROBLEM_SECTIONS, &[]),
            chapter(2, "REVIEW OF RELATED LITERATURE", LITERATURE_SECTIONS, &[]),
            chapter(
                3,
                "THEORETICAL AND CONCEPTUAL FRAMEWORK",
                &["Theoretical Framework", "Conceptual Framework", "Paradigm/Framework Diagram"],
                &[],
            ),
            chapter(4, "METHODOLOGY", METHODOLOGY_SECTIONS, &[]),
            chapter(5, "RESULTS AND DISCUSSION", FINDINGS_SECTIONS, &[]),
            chapter(6, SUMMARY_TITLE, SUMMARY_SECTIONS, SUMMARY_OPTIONAL_SECTIONS),
        ],
        formatting: standard_formatting(1.0),
        end_matter: strings(&["References", "Appendices", "Curriculum Vitae"]),
    }
}

/// All built-in formats in registry order
pub fn builtin_formats() -> Vec<FormatRequirement> {
    vec![pup(), vsu(), cmu()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_has_chapters_and_end_matter() {
        for format in builtin_formats() {
            assert!(!format.chapter_structure.is_empty(), "{} has no chapters", format.slug);
            assert!(!format.end_matter.is_empty(), "{} has no end matter", format.slug);
        }
    }

    #[test]
    fn test_chapters_are_numbered_consecutively() {
        for format in builtin_formats() {
            for (i, chapter) in format.chapter_structure.iter().enumerate() {
                assert_eq!(
                    chapter.chapter_number as usize,
                    i + 1,
                    "{} chapter {} out of order",
                    format.slug,
                    chapter.title
                );
            }
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let formats = builtin_formats();
        for (i, a) in formats.iter().enumerate() {
            for b in &formats[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_default_is_builtin() {
        assert!(builtin_formats().iter().any(|f| f.slug == DEFAULT_SLUG));
    }

    #[test]
    fn test_institution_specifics() {
        assert_eq!(pup().chapter_structure.len(), 5);
        assert_eq!(vsu().end_matter, vec!["Literature Cited", "Appendices"]);
        assert_eq!(cmu().chapter_structure.len(), 6);
        assert_eq!(cmu().chapter(3).unwrap().title, "THEORETICAL AND CONCEPTUAL FRAMEWORK");
        assert_eq!(pup().required_section_count(), 8 + 5 + 5 + 3 + 3);
    }
}

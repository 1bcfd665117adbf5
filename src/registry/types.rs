//! University Format Types
//!
//! Structural and typographic requirements one institution places on a
//! thesis. Field names serialize in camelCase so a format document can be
//! exchanged with the outline UI unchanged.

use serde::{Deserialize, Serialize};

/// Complete format requirement set for one institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRequirement {
    /// Display name (e.g., "Visayas State University")
    pub name: String,

    /// Registry key, unique within a registry (e.g., "vsu")
    pub slug: String,

    /// Sections expected before Chapter 1, in order
    pub preliminaries: Vec<String>,

    /// Chapters in order
    pub chapter_structure: Vec<ChapterRequirement>,

    /// Document-level typography and layout
    pub formatting: FormattingRequirements,

    /// Sections expected after the last chapter, in order
    pub end_matter: Vec<String>,
}

impl FormatRequirement {
    /// Total number of required sections across all chapters
    pub fn required_section_count(&self) -> usize {
        self.chapter_structure
            .iter()
            .map(|c| c.required_sections.len())
            .sum()
    }

    /// Find a chapter requirement by its number
    pub fn chapter(&self, chapter_number: u32) -> Option<&ChapterRequirement> {
        self.chapter_structure
            .iter()
            .find(|c| c.chapter_number == chapter_number)
    }
}

/// One chapter the institution expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRequirement {
    #[serde(alias = "chapter")]
    pub chapter_number: u32,
    pub title: String,
    pub required_sections: Vec<String>,
    #[serde(default)]
    pub optional_sections: Vec<String>,
}

impl ChapterRequirement {
    /// Marker searched for in outline text, e.g. "Chapter 3"
    pub fn marker(&self) -> String {
        format!("Chapter {}", self.chapter_number)
    }

    /// Marker plus title, e.g. "Chapter 3: RESEARCH METHODOLOGY"
    pub fn full_title(&self) -> String {
        format!("{}: {}", self.marker(), self.title)
    }
}

/// Line spacing of the main text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    Single,
    OneAndHalf,
    Double,
}

impl Spacing {
    pub fn display_text(&self) -> &'static str {
        match self {
            Spacing::Single => "Single",
            Spacing::OneAndHalf => "1.5",
            Spacing::Double => "Double",
        }
    }
}

/// Where page numbers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PagePosition {
    CenterBottom,
    TopRight,
    TopLeft,
}

impl PagePosition {
    pub fn display_text(&self) -> &'static str {
        match self {
            PagePosition::CenterBottom => "Center bottom",
            PagePosition::TopRight => "Top right",
            PagePosition::TopLeft => "Top left",
        }
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Page numbering rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequirements {
    #[serde(alias = "preliminaries")]
    pub preliminaries_position: PagePosition,
    #[serde(alias = "mainText")]
    pub main_text_position: PagePosition,
    #[serde(alias = "romanNumerals")]
    pub use_roman_numerals: bool,
    #[serde(alias = "arabicNumerals")]
    pub use_arabic_numerals: bool,
}

/// Typography and layout rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingRequirements {
    pub font: String,
    pub font_size: u32,
    pub spacing: Spacing,
    pub margins: Margins,
    pub pagination: PaginationRequirements,
}

/// Name and slug of a supported institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionSummary {
    pub name: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_marker_and_title() {
        let chapter = ChapterRequirement {
            chapter_number: 3,
            title: "METHODOLOGY".to_string(),
            required_sections: vec![],
            optional_sections: vec![],
        };
        assert_eq!(chapter.marker(), "Chapter 3");
        assert_eq!(chapter.full_title(), "Chapter 3: METHODOLOGY");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&Spacing::OneAndHalf).unwrap(), "\"one-and-half\"");
        assert_eq!(serde_json::to_string(&PagePosition::CenterBottom).unwrap(), "\"center-bottom\"");
        let spacing: Spacing = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(spacing, Spacing::Double);
    }

    #[test]
    fn test_pagination_accepts_short_field_names() {
        let json = r#"{
            "preliminaries": "center-bottom",
            "mainText": "top-right",
            "romanNumerals": true,
            "arabicNumerals": false
        }"#;
        let pagination: PaginationRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(pagination.preliminaries_position, PagePosition::CenterBottom);
        assert_eq!(pagination.main_text_position, PagePosition::TopRight);
        assert!(pagination.use_roman_numerals);
        assert!(!pagination.use_arabic_numerals);
    }
}

//! Methodology Section Generation
//!
//! One pipeline turns a methodology descriptor into guidance blocks.
//! `SectionOptions` picks whether a challenges block is emitted and whether
//! section lists are expanded into described prose or listed by name.
//!
//! Block order is fixed:
//! 1. Data Collection Guidance
//! 2. Analysis Guidance
//! 3. Research Question Templates
//! 4. Common Challenges and Mitigation Strategies (when enabled)
//! 5. Required Sections for This Methodology
//! 6. Optional Sections for This Methodology
//!
//! A block whose source data is absent or empty is omitted, never emitted empty.

use serde::{Deserialize, Serialize};

use super::descriptions::{optional_section_description, required_section_description};
use super::types::{ChapterTemplate, MethodologyType, ResearchMethodology};
use crate::outline::MethodologySection;

pub const DATA_COLLECTION_TITLE: &str = "Data Collection Guidance";
pub const ANALYSIS_TITLE: &str = "Analysis Guidance";
pub const QUESTION_TEMPLATES_TITLE: &str = "Research Question Templates";
pub const CHALLENGES_TITLE: &str = "Common Challenges and Mitigation Strategies";
pub const REQUIRED_SECTIONS_TITLE: &str = "Required Sections for This Methodology";
pub const OPTIONAL_SECTIONS_TITLE: &str = "Optional Sections for This Methodology";

/// How required/optional section lists are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionDetail {
    /// Numbered list with a description per section
    Described,
    /// Section names, one per line
    Listed,
}

/// Options for `build_methodology_sections`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOptions {
    pub include_common_challenges_section: bool,
    pub section_detail: SectionDetail,
}

impl SectionOptions {
    /// Blocks attached by the methodology adapter
    pub fn adapter() -> Self {
        Self {
            include_common_challenges_section: false,
            section_detail: SectionDetail::Described,
        }
    }

    /// Blocks attached by the content-only generation path
    pub fn content() -> Self {
        Self {
            include_common_challenges_section: true,
            section_detail: SectionDetail::Listed,
        }
    }
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self::adapter()
    }
}

/// Build the guidance blocks for a methodology
pub fn build_methodology_sections(
    methodology: &ResearchMethodology,
    options: &SectionOptions,
) -> Vec<MethodologySection> {
    let mut sections = Vec::new();

    if let Some(guidance) = methodology.data_collection_guidance() {
        sections.push(MethodologySection::new(
            DATA_COLLECTION_TITLE,
            guidance,
            "Provides detailed guidance on collecting data according to methodology requirements",
        ));
    }

    if let Some(guidance) = methodology.analysis_guidance() {
        sections.push(MethodologySection::new(
            ANALYSIS_TITLE,
            guidance,
            "Provides detailed guidance on analyzing data according to methodology requirements",
        ));
    }

    if !methodology.research_question_templates.is_empty() {
        sections.push(MethodologySection::new(
            QUESTION_TEMPLATES_TITLE,
            methodology.research_question_templates.join("\n"),
            "Provides templates for formulating research questions appropriate to the methodology",
        ));
    }

    if options.include_common_challenges_section && !methodology.common_challenges.is_empty() {
        sections.push(MethodologySection::new(
            CHALLENGES_TITLE,
            generate_methodology_challenges(methodology).join("\n"),
            "Identifies potential challenges and provides mitigation strategies for this methodology",
        ));
    }

    if !methodology.required_sections.is_empty() {
        let content = match options.section_detail {
            SectionDetail::Described => {
                describe_required_sections(&methodology.required_sections, &methodology.methodology_type)
            }
            SectionDetail::Listed => methodology.required_sections.join("\n"),
        };
        sections.push(MethodologySection::new(
            REQUIRED_SECTIONS_TITLE,
            content,
            "Lists sections that must be included when using this methodology",
        ));
    }

    if !methodology.optional_sections.is_empty() {
        let content = match options.section_detail {
            SectionDetail::Described => {
                describe_optional_sections(&methodology.optional_sections, &methodology.methodology_type)
            }
            SectionDetail::Listed => methodology.optional_sections.join("\n"),
        };
        sections.push(MethodologySection::new(
            OPTIONAL_SECTIONS_TITLE,
            content,
            "Lists sections that can be included to enhance the methodology application",
        ));
    }

    sections
}

/// Numbered, described list of required sections
pub fn describe_required_sections(sections: &[String], kind: &MethodologyType) -> String {
    let mut content = format!(
        "When using the {} methodology, your thesis must include these required sections:\n\n",
        kind
    );

    for (i, section) in sections.iter().enumerate() {
        let description = match required_section_description(kind, section) {
            Some(text) => text.to_string(),
            None => format!("Include a comprehensive {} section in your thesis.", section),
        };
        content.push_str(&format!("{}. **{}**: {}\n", i + 1, section, description));
    }

    content
}

/// Numbered, described list of optional sections
pub fn describe_optional_sections(sections: &[String], kind: &MethodologyType) -> String {
    let mut content = format!(
        "When using the {} methodology, you may also consider including these optional sections:\n\n",
        kind
    );

    for (i, section) in sections.iter().enumerate() {
        let description = match optional_section_description(kind, section) {
            Some(text) => text.to_string(),
            None => format!("Consider adding a {} section to enhance your thesis.", section),
        };
        content.push_str(&format!("{}. **{}**: {}\n", i + 1, section, description));
    }

    content
}

/// "<challenge>: <mitigation>" for each known challenge, in order
pub fn generate_methodology_challenges(methodology: &ResearchMethodology) -> Vec<String> {
    methodology
        .common_challenges
        .iter()
        .map(|c| c.describe())
        .collect()
}

/// The methodology's chapter override, or nothing
pub fn generate_chapter_structure(methodology: &ResearchMethodology) -> Vec<ChapterTemplate> {
    methodology.chapter_structure.clone().unwrap_or_default()
}

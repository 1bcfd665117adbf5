//! Research Methodology Types
//!
//! A methodology descriptor carries its own section vocabulary, guidance
//! text and known pitfalls. Every field except the type is optional in
//! serialized form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Research approach discriminator.
///
/// Serialized as its kebab-case name. Names outside the known set are kept
/// verbatim in `Other` and get generic text wherever a lookup table is keyed
/// by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MethodologyType {
    Quantitative,
    Qualitative,
    Mixed,
    Experimental,
    Survey,
    CaseStudy,
    Ethnographic,
    ActionResearch,
    Other(String),
}

impl MethodologyType {
    pub const KNOWN: [MethodologyType; 8] = [
        MethodologyType::Quantitative,
        MethodologyType::Qualitative,
        MethodologyType::Mixed,
        MethodologyType::Experimental,
        MethodologyType::Survey,
        MethodologyType::CaseStudy,
        MethodologyType::Ethnographic,
        MethodologyType::ActionResearch,
    ];

    /// Parse a type name; unknown names become `Other`
    pub fn parse(name: &str) -> Self {
        match name {
            "quantitative" => MethodologyType::Quantitative,
            "qualitative" => MethodologyType::Qualitative,
            "mixed" => MethodologyType::Mixed,
            "experimental" => MethodologyType::Experimental,
            "survey" => MethodologyType::Survey,
            "case-study" => MethodologyType::CaseStudy,
            "ethnographic" => MethodologyType::Ethnographic,
            "action-research" => MethodologyType::ActionResearch,
            other => MethodologyType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MethodologyType::Quantitative => "quantitative",
            MethodologyType::Qualitative => "qualitative",
            MethodologyType::Mixed => "mixed",
            MethodologyType::Experimental => "experimental",
            MethodologyType::Survey => "survey",
            MethodologyType::CaseStudy => "case-study",
            MethodologyType::Ethnographic => "ethnographic",
            MethodologyType::ActionResearch => "action-research",
            MethodologyType::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MethodologyType::Other(_))
    }
}

impl From<String> for MethodologyType {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<MethodologyType> for String {
    fn from(kind: MethodologyType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for MethodologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known pitfall of a methodology and how to handle it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub challenge: String,
    pub mitigation: String,
}

impl Challenge {
    pub fn new(challenge: &str, mitigation: &str) -> Self {
        Self {
            challenge: challenge.to_string(),
            mitigation: mitigation.to_string(),
        }
    }

    /// "<challenge>: <mitigation>"
    pub fn describe(&self) -> String {
        format!("{}: {}", self.challenge, self.mitigation)
    }
}

/// Per-chapter override emphasizing one methodology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterTemplate {
    #[serde(alias = "chapter")]
    pub chapter_number: u32,
    pub title: String,
    #[serde(default)]
    pub required_sections: Vec<String>,
    #[serde(default)]
    pub optional_sections: Vec<String>,
    #[serde(default)]
    pub methodology_emphasis: String,
}

/// Methodology descriptor selected for one generation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchMethodology {
    #[serde(rename = "type")]
    pub methodology_type: MethodologyType,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suitable_for: Vec<String>,
    #[serde(default)]
    pub data_collection: Vec<String>,
    #[serde(default)]
    pub analysis_approach: String,

    /// Chapter overrides for this methodology, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_structure: Option<Vec<ChapterTemplate>>,

    /// Sections this methodology requires (separate from institution chapters)
    #[serde(default)]
    pub required_sections: Vec<String>,
    #[serde(default)]
    pub optional_sections: Vec<String>,

    #[serde(default)]
    pub research_question_templates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_collection_guidance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_guidance: Option<String>,
    #[serde(default)]
    pub common_challenges: Vec<Challenge>,
}

impl ResearchMethodology {
    /// Descriptor with only a type; every optional part empty
    pub fn new(methodology_type: MethodologyType) -> Self {
        Self {
            methodology_type,
            description: String::new(),
            suitable_for: Vec::new(),
            data_collection: Vec::new(),
            analysis_approach: String::new(),
            chapter_structure: None,
            required_sections: Vec::new(),
            optional_sections: Vec::new(),
            research_question_templates: Vec::new(),
            data_collection_guidance: None,
            analysis_guidance: None,
            common_challenges: Vec::new(),
        }
    }

    /// Data-collection guidance, treating blank text as absent
    pub fn data_collection_guidance(&self) -> Option<&str> {
        non_blank(self.data_collection_guidance.as_deref())
    }

    /// Analysis guidance, treating blank text as absent
    pub fn analysis_guidance(&self) -> Option<&str> {
        non_blank(self.analysis_guidance.as_deref())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

//! Methodology Adapter
//!
//! Returns an adapted copy of an outline: methodology blocks and the
//! alignment narrative are replaced, generated challenges are merged into
//! `potential_challenges` according to a `ChallengePolicy`, and every other
//! field is carried over untouched.

use serde::{Deserialize, Serialize};

use super::descriptions::alignment_narrative;
use super::sections::{build_methodology_sections, generate_methodology_challenges, SectionOptions};
use super::types::ResearchMethodology;
use crate::outline::EnhancedOutline;

/// What to do with generated challenges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengePolicy {
    /// Append every generated challenge; re-running doubles the list
    #[default]
    Append,
    /// Append only challenges whose text is not already present
    AppendUnique,
    /// Leave `potential_challenges` as it was
    Keep,
}

/// Options for `adapt_outline_with`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptOptions {
    pub sections: SectionOptions,
    pub challenges: ChallengePolicy,
}

impl AdaptOptions {
    /// Described blocks, challenges appended
    pub fn adapter() -> Self {
        Self {
            sections: SectionOptions::adapter(),
            challenges: ChallengePolicy::Append,
        }
    }

    /// Listed blocks with a challenges block, challenge list untouched
    pub fn content() -> Self {
        Self {
            sections: SectionOptions::content(),
            challenges: ChallengePolicy::Keep,
        }
    }
}

/// Adapt with described blocks and appended challenges.
///
/// Idempotent on the blocks and the alignment narrative, not on
/// `potential_challenges`.
pub fn adapt_outline_for_methodology(
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
) -> EnhancedOutline {
    adapt_outline_with(outline, methodology, &AdaptOptions::adapter())
}

pub fn adapt_outline_with(
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
    options: &AdaptOptions,
) -> EnhancedOutline {
    let sections = build_methodology_sections(methodology, &options.sections);
    let generated = generate_methodology_challenges(methodology);

    let mut potential_challenges = outline.potential_challenges.clone();
    let before = potential_challenges.len();
    merge_challenges(&mut potential_challenges, generated, options.challenges);

    tracing::debug!(
        "Adapted outline for {} methodology: {} sections, {} challenges added",
        methodology.methodology_type,
        sections.len(),
        potential_challenges.len() - before
    );

    EnhancedOutline {
        methodology_alignment: alignment_narrative(&methodology.methodology_type),
        methodology_specific_sections: sections,
        potential_challenges,
        ..outline.clone()
    }
}

fn merge_challenges(existing: &mut Vec<String>, generated: Vec<String>, policy: ChallengePolicy) {
    match policy {
        ChallengePolicy::Append => existing.extend(generated),
        ChallengePolicy::AppendUnique => {
            for challenge in generated {
                if !existing.contains(&challenge) {
                    existing.push(challenge);
                }
            }
        }
        ChallengePolicy::Keep => {}
    }
}

/// Adapt using the catalog entry whose type name matches.
///
/// Returns an unchanged copy when no entry matches.
pub fn adapt_outline_for_selected_methodology(
    outline: &EnhancedOutline,
    methodology_type: &str,
    options: &[ResearchMethodology],
) -> EnhancedOutline {
    match options
        .iter()
        .find(|m| m.methodology_type.as_str() == methodology_type)
    {
        Some(methodology) => adapt_outline_for_methodology(outline, methodology),
        None => {
            tracing::debug!("No methodology '{}' in catalog; outline left as is", methodology_type);
            outline.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methodology::types::{Challenge, MethodologyType};

    fn survey() -> ResearchMethodology {
        let mut m = ResearchMethodology::new(MethodologyType::Survey);
        m.research_question_templates = vec!["What proportion of X report Y?".into()];
        m.required_sections = vec!["Sampling Procedure".into()];
        m.common_challenges = vec![
            Challenge::new("Low response rate", "Send reminders"),
            Challenge::new("Social desirability bias", "Use anonymous responses"),
        ];
        m
    }

    fn outline_with_history() -> EnhancedOutline {
        let mut outline = EnhancedOutline::from_content("Chapter 1: Introduction");
        outline.potential_challenges = vec!["Limited time: Plan early".into()];
        outline.timeline_estimate = "12 months".into();
        outline
    }

    #[test]
    fn test_adapt_appends_after_existing_challenges() {
        let adapted = adapt_outline_for_methodology(&outline_with_history(), &survey());
        assert_eq!(
            adapted.potential_challenges,
            vec![
                "Limited time: Plan early",
                "Low response rate: Send reminders",
                "Social desirability bias: Use anonymous responses",
            ]
        );
    }

    #[test]
    fn test_adapt_leaves_other_fields_untouched() {
        let outline = outline_with_history();
        let adapted = adapt_outline_for_methodology(&outline, &survey());
        assert_eq!(adapted.content, outline.content);
        assert_eq!(adapted.timeline_estimate, "12 months");
        assert_eq!(adapted.university_compliance, outline.university_compliance);
        assert!(adapted.methodology_alignment.contains("survey research methodology"));
        assert_eq!(adapted.methodology_specific_sections.len(), 2);
    }

    #[test]
    fn test_rerun_doubles_challenges_but_not_sections() {
        let once = adapt_outline_for_methodology(&outline_with_history(), &survey());
        let twice = adapt_outline_for_methodology(&once, &survey());

        assert_eq!(twice.methodology_specific_sections, once.methodology_specific_sections);
        assert_eq!(twice.methodology_alignment, once.methodology_alignment);
        assert_eq!(twice.potential_challenges.len(), 1 + 2 * 2);
    }

    #[test]
    fn test_append_unique_is_idempotent() {
        let options = AdaptOptions {
            challenges: ChallengePolicy::AppendUnique,
            ..AdaptOptions::adapter()
        };
        let once = adapt_outline_with(&outline_with_history(), &survey(), &options);
        let twice = adapt_outline_with(&once, &survey(), &options);
        assert_eq!(twice, once);
        assert_eq!(twice.potential_challenges.len(), 3);
    }

    #[test]
    fn test_keep_policy_ignores_generated_challenges() {
        let adapted = adapt_outline_with(&outline_with_history(), &survey(), &AdaptOptions::content());
        assert_eq!(adapted.potential_challenges, vec!["Limited time: Plan early"]);
        assert!(adapted
            .methodology_specific_sections
            .iter()
            .any(|s| s.title == "Common Challenges and Mitigation Strategies"));
    }

    #[test]
    fn test_caller_outline_is_not_mutated() {
        let outline = outline_with_history();
        let snapshot = outline.clone();
        let _ = adapt_outline_for_methodology(&outline, &survey());
        assert_eq!(outline, snapshot);
    }

    #[test]
    fn test_selected_methodology_lookup() {
        let catalog = vec![survey()];
        let outline = outline_with_history();

        let adapted = adapt_outline_for_selected_methodology(&outline, "survey", &catalog);
        assert_eq!(adapted.potential_challenges.len(), 3);

        let unchanged = adapt_outline_for_selected_methodology(&outline, "ethnographic", &catalog);
        assert_eq!(unchanged, outline);
    }
}

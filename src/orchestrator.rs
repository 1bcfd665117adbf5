//! Outline Orchestrator
//!
//! Adapts an outline to a methodology, then runs the methodology-aware
//! compliance check on the adapted outline and stores the report on it.
//! The check always sees the adapted outline.

use serde::{Deserialize, Serialize};

use crate::compliance::ComplianceChecker;
use crate::methodology::{adapt_outline_with, AdaptOptions, ResearchMethodology};
use crate::outline::EnhancedOutline;

/// Which section-generation path runs before the compliance check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdaptationStrategy {
    /// Described section blocks, methodology challenges appended
    #[default]
    FullAdapter,
    /// Listed section blocks with a challenges block, challenge list untouched
    ContentOnly,
}

impl AdaptationStrategy {
    pub fn adapt_options(&self) -> AdaptOptions {
        match self {
            AdaptationStrategy::FullAdapter => AdaptOptions::adapter(),
            AdaptationStrategy::ContentOnly => AdaptOptions::content(),
        }
    }
}

/// Adapt, check, and attach the report, using the given checker's registry
pub fn orchestrate_with(
    checker: &ComplianceChecker<'_>,
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
    institution: &str,
    strategy: AdaptationStrategy,
) -> EnhancedOutline {
    let mut adapted = adapt_outline_with(outline, methodology, &strategy.adapt_options());
    adapted.university_compliance = checker.check_with_methodology(&adapted, institution, methodology);
    adapted
}

/// Adapt, check, and attach the report against the built-in registry
pub fn orchestrate(
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
    institution: &str,
    strategy: AdaptationStrategy,
) -> EnhancedOutline {
    orchestrate_with(&ComplianceChecker::builtin(), outline, methodology, institution, strategy)
}

pub fn generate_enhanced_outline(
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
    institution: &str,
) -> EnhancedOutline {
    orchestrate(outline, methodology, institution, AdaptationStrategy::FullAdapter)
}

pub fn generate_dynamic_structure_adaptation(
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
    institution: &str,
) -> EnhancedOutline {
    orchestrate(outline, methodology, institution, AdaptationStrategy::ContentOnly)
}

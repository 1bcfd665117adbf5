//! Thesis Structure Adapter
//!
//! Checks thesis outlines against university format requirements and adapts
//! them to a chosen research methodology.
//!
//! - `registry/`: Per-institution format requirements (PUP, VSU, CMU)
//! - `compliance/`: Substring-based compliance checking and reports
//! - `methodology/`: Methodology descriptors, section generation, adaptation
//! - `outline`: The EnhancedOutline document
//! - `orchestrator`: Adapt-then-check composition
//!
//! Every checking and adaptation entry point is total: problems with an
//! outline are reported as violations, never as errors.

pub mod compliance;
pub mod error;
pub mod methodology;
pub mod orchestrator;
pub mod outline;
pub mod registry;
pub mod utils;

// Re-export commonly used types
pub use compliance::{
    check_compliance, check_methodology_university_compliance, ComplianceChecker, FormatViolation,
    UniversityComplianceReport,
};
pub use error::RegistryError;
pub use methodology::{
    adapt_outline_for_methodology, adapt_outline_for_selected_methodology, adapt_outline_with,
    build_methodology_sections, generate_chapter_structure, generate_methodology_challenges,
    methodology_options, AdaptOptions, ChallengePolicy, MethodologyType, ResearchMethodology,
    SectionDetail, SectionOptions,
};
pub use orchestrator::{
    generate_dynamic_structure_adaptation, generate_enhanced_outline, orchestrate, orchestrate_with,
    AdaptationStrategy,
};
pub use outline::{EnhancedOutline, MethodologySection};
pub use registry::{FormatRegistry, FormatRequirement, DEFAULT_SLUG};
pub use utils::normalize_slug;

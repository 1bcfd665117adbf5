//! Methodology Adapter
//!
//! Adapts an outline to a research methodology: attaches guidance blocks,
//! merges the methodology's known challenges and writes an alignment
//! narrative.
//!
//! ## Architecture
//! - `types.rs` - MethodologyType, ResearchMethodology, ChapterTemplate, Challenge
//! - `descriptions.rs` - Section description tables and alignment narratives
//! - `sections.rs` - The section pipeline (SectionOptions) and challenge lines
//! - `adapter.rs` - Outline adaptation with a ChallengePolicy
//! - `catalog.rs` - Built-in methodology descriptors

pub mod adapter;
pub mod catalog;
pub mod descriptions;
pub mod sections;
pub mod types;

pub use adapter::{
    adapt_outline_for_methodology, adapt_outline_for_selected_methodology, adapt_outline_with,
    AdaptOptions, ChallengePolicy,
};
pub use catalog::methodology_options;
pub use descriptions::alignment_narrative;
pub use sections::{
    build_methodology_sections, generate_chapter_structure, generate_methodology_challenges,
    SectionDetail, SectionOptions,
};
pub use types::{Challenge, ChapterTemplate, MethodologyType, ResearchMethodology};

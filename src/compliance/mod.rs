//! University Compliance Engine
//!
//! Scores an outline against an institution's format requirements and
//! produces a report of violations plus one suggestion per violation.
//!
//! ## Architecture
//! - `report.rs` - FormatViolation and UniversityComplianceReport
//! - `checker.rs` - Preliminaries, chapter, end-matter, formatting and
//!   methodology-section checks

pub mod checker;
pub mod report;

pub use checker::{
    check_compliance, check_methodology_university_compliance, ComplianceChecker,
    CHAPTER_PRESENCE_GUIDELINE, END_MATTER_SECTION, FORMATTING_SECTION, METHODOLOGY_SECTION,
    PRELIMINARIES_SECTION,
};
pub use report::{FormatViolation, UniversityComplianceReport};

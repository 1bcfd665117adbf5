//! Compliance Integration Tests
//!
//! Checks outlines against the built-in institutions through the public API
//! and verifies the report-level guarantees: fallback to the default
//! institution, one suggestion per violation, and the chapter and end-matter
//! rules.

use thesis_structure_adapter::compliance::{
    CHAPTER_PRESENCE_GUIDELINE, END_MATTER_SECTION, FORMATTING_SECTION, PRELIMINARIES_SECTION,
};
use thesis_structure_adapter::registry::formats::{cmu, pup, vsu};
use thesis_structure_adapter::{check_compliance, EnhancedOutline, FormatRequirement};

/// Outline text naming every section a format expects
fn complete_content(format: &FormatRequirement) -> String {
    let mut lines: Vec<String> = format.preliminaries.clone();
    for chapter in &format.chapter_structure {
        lines.push(chapter.full_title());
        lines.extend(chapter.required_sections.iter().cloned());
    }
    lines.extend(format.end_matter.iter().cloned());
    lines.join("\n")
}

#[test]
fn test_example_scenario_against_pup() {
    let outline = EnhancedOutline::from_content("Chapter 1: Introduction\nIntroduction\nBackground of the Study");
    let report = check_compliance(&outline, "pup");

    assert!(!report.compliant);

    let chapter_one: Vec<&str> = report
        .violations_in("Chapter 1")
        .map(|v| v.guideline.as_str())
        .collect();
    assert_eq!(
        chapter_one,
        vec![
            "Theoretical/Conceptual Framework",
            "Statement of the Problem",
            "Hypothesis",
            "Scope and Delimitation",
            "Significance of the Study",
            "Definition of Terms",
        ]
    );

    assert_eq!(report.violations_in(PRELIMINARIES_SECTION).count(), 6);
    for n in 2..=5 {
        let label = format!("Chapter {}", n);
        let chapter: Vec<_> = report.violations_in(&label).collect();
        assert_eq!(chapter.len(), 1, "{} should have a single presence violation", label);
        assert_eq!(chapter[0].guideline, CHAPTER_PRESENCE_GUIDELINE);
    }
    assert_eq!(report.violations_in(END_MATTER_SECTION).count(), 3);
    assert_eq!(report.violations_in(FORMATTING_SECTION).count(), 1);
    assert_eq!(report.violations.len(), 6 + 6 + 4 + 3 + 1);
}

#[test]
fn test_complete_outline_is_structurally_compliant_for_every_institution() {
    for format in [pup(), vsu(), cmu()] {
        let outline = EnhancedOutline::from_content(complete_content(&format));
        let report = check_compliance(&outline, &format.slug);

        assert!(
            report.is_structurally_compliant(),
            "{} reported {:?}",
            format.slug,
            report.structural_violations().collect::<Vec<_>>()
        );
        // The formatting advisory is the only thing left
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].is_advisory());
    }
}

#[test]
fn test_single_missing_section_yields_single_violation() {
    let content = complete_content(&pup()).replace("Research Instrument", "");
    let report = check_compliance(&EnhancedOutline::from_content(content), "pup");

    let structural: Vec<_> = report.structural_violations().collect();
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].section, "Chapter 3");
    assert_eq!(structural[0].guideline, "Research Instrument");
}

#[test]
fn test_missing_chapter_counts_once() {
    let format = pup();
    let chapter_four = format.chapter(4).unwrap();
    let content = complete_content(&format)
        .replace(&chapter_four.full_title(), "")
        .replace("Presentation of Data", "")
        .replace("Interpretation of Data", "");

    let report = check_compliance(&EnhancedOutline::from_content(content), "pup");
    let chapter: Vec<_> = report.violations_in("Chapter 4").collect();
    assert_eq!(chapter.len(), 1, "not 1 + {}", chapter_four.required_sections.len());
}

#[test]
fn test_suggestions_match_violations() {
    let outlines = [
        "",
        "Chapter 1: Introduction\nIntroduction",
        "Abstract\nChapter 2\nSynthesis\nReferences",
    ];
    for institution in ["pup", "vsu", "cmu", "somewhere-else"] {
        for content in outlines {
            let report = check_compliance(&EnhancedOutline::from_content(content), institution);
            assert_eq!(report.suggestions.len(), report.violations.len());
            for (suggestion, violation) in report.suggestions.iter().zip(&report.violations) {
                assert_eq!(
                    suggestion,
                    &format!(
                        "Address the {} requirement in the {} section.",
                        violation.guideline, violation.section
                    )
                );
            }
        }
    }
}

#[test]
fn test_unknown_institution_matches_default() {
    let outline = EnhancedOutline::from_content("Abstract\nChapter 1: Introduction\nHypothesis\nReferences");
    assert_eq!(
        check_compliance(&outline, "nonexistent-university"),
        check_compliance(&outline, "pup")
    );
}

#[test]
fn test_institution_identifier_is_normalized() {
    let outline = EnhancedOutline::from_content(complete_content(&vsu()));
    assert_eq!(check_compliance(&outline, "  VSU "), check_compliance(&outline, "vsu"));
}

#[test]
fn test_vsu_references_yields_one_end_matter_violation() {
    let content = complete_content(&vsu()).replace("Literature Cited", "References");
    let report = check_compliance(&EnhancedOutline::from_content(content), "vsu");

    let end_matter: Vec<_> = report.violations_in(END_MATTER_SECTION).collect();
    assert_eq!(end_matter.len(), 1);
    assert_eq!(end_matter[0].guideline, "Literature Cited");
    assert_eq!(
        end_matter[0].suggestion,
        "Replace 'References' section with 'Literature Cited' as required by Visayas State University"
    );
}

#[test]
fn test_empty_content_reports_every_expected_section() {
    let format = cmu();
    let report = check_compliance(&EnhancedOutline::default(), "cmu");

    let checked_preliminaries = format.preliminaries.len() - 2;
    let expected = checked_preliminaries
        + format.chapter_structure.len()
        + format.end_matter.len()
        + 1;
    assert_eq!(report.violations.len(), expected);
}

#[test]
fn test_passing_mention_satisfies_section_check() {
    // Substring matching: prose mentioning a section counts as the section
    let content = complete_content(&pup()).replace("\nHypothesis\n", "\nWe state a Hypothesis here.\n");
    let report = check_compliance(&EnhancedOutline::from_content(content), "pup");
    assert!(report.is_structurally_compliant());
}

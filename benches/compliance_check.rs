use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thesis_structure_adapter::methodology::catalog;
use thesis_structure_adapter::registry::formats::pup;
use thesis_structure_adapter::{check_compliance, generate_enhanced_outline, ComplianceChecker, EnhancedOutline};

/// Outline text naming every PUP section, padded with body prose
fn realistic_outline() -> EnhancedOutline {
    let format = pup();
    let mut lines: Vec<String> = format.preliminaries.clone();
    for chapter in &format.chapter_structure {
        lines.push(chapter.full_title());
        for section in &chapter.required_sections {
            lines.push(section.clone());
            lines.push(format!("Discussion of {} for the study of rural broadband adoption.", section.to_lowercase()));
        }
    }
    lines.extend(format.end_matter.iter().cloned());
    EnhancedOutline::from_content(lines.join("\n"))
}

fn bench_compliance(c: &mut Criterion) {
    let outline = realistic_outline();
    let methodology = catalog::quantitative();

    c.bench_function("compliance.check.pup", |b| {
        b.iter(|| check_compliance(black_box(&outline), black_box("pup")));
    });

    c.bench_function("orchestrator.full_adapter.pup", |b| {
        b.iter(|| generate_enhanced_outline(black_box(&outline), black_box(&methodology), "pup"));
    });

    let batch: Vec<EnhancedOutline> = (0..256).map(|_| outline.clone()).collect();
    c.bench_function("compliance.check_many.256", |b| {
        b.iter(|| ComplianceChecker::builtin().check_many(black_box(&batch), "vsu"));
    });
}

criterion_group!(benches, bench_compliance);
criterion_main!(benches);

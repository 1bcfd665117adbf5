// Sample report generator
//
// Purpose: Adapt a sample outline to a catalog methodology, check it against
// an institution's format and print the enhanced outline as JSON.
// Usage: INSTITUTION=vsu METHODOLOGY=survey cargo run --bin generate_sample_reports

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use thesis_structure_adapter::methodology::catalog;
use thesis_structure_adapter::{
    orchestrate_with, AdaptationStrategy, ComplianceChecker, EnhancedOutline, FormatRegistry,
    MethodologyType,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_OUTLINE: &str = "\
Abstract
Acknowledgement
Table of Contents
Chapter 1: THE PROBLEM AND ITS BACKGROUND
Introduction
Background of the Study
Statement of the Problem
Hypothesis
Scope and Delimitation
Significance of the Study
Definition of Terms
Chapter 2: REVIEW OF RELATED LITERATURE
Foreign Literature
Local Literature
Synthesis
Chapter 3: RESEARCH METHODOLOGY
Research Design
Population and Sample
Research Instrument
Data Gathering Procedure
Statistical Treatment of Data
References
Appendices";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thesis_structure_adapter=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let registry_path = std::env::var("FORMAT_REGISTRY_PATH").ok().map(PathBuf::from);
    let institution = std::env::var("INSTITUTION").unwrap_or_else(|_| "pup".to_string());
    let methodology_name =
        std::env::var("METHODOLOGY").unwrap_or_else(|_| "quantitative".to_string());

    tracing::info!("Configuration:");
    tracing::info!("  FORMAT_REGISTRY_PATH: {:?}", registry_path);
    tracing::info!("  INSTITUTION: {}", institution);
    tracing::info!("  METHODOLOGY: {}", methodology_name);

    let registry = match &registry_path {
        Some(path) => {
            let overrides = FormatRegistry::read_formats(path)?;
            FormatRegistry::builtin()
                .with_overrides(overrides)
                .with_context(|| format!("Overrides in {:?} violate registry rules", path))?
        }
        None => FormatRegistry::builtin().clone(),
    };

    if !registry.contains(&institution) {
        let supported: Vec<String> = registry.supported().into_iter().map(|s| s.slug).collect();
        tracing::warn!(
            "Institution '{}' is not supported ({}); checking against '{}'",
            institution,
            supported.join(", "),
            registry.default_format().slug
        );
    }

    let methodology = catalog::find(&MethodologyType::parse(&methodology_name))
        .ok_or_else(|| anyhow!("No methodology '{}' in the catalog", methodology_name))?;

    let checker = ComplianceChecker::new(&registry);
    let outline = EnhancedOutline::from_content(SAMPLE_OUTLINE);
    let enhanced = orchestrate_with(
        &checker,
        &outline,
        &methodology,
        &institution,
        AdaptationStrategy::FullAdapter,
    );

    let report = &enhanced.university_compliance;
    tracing::info!(
        "{} violations ({} structural)",
        report.violations.len(),
        report.structural_violations().count()
    );

    let json = serde_json::to_string_pretty(&enhanced).context("Failed to serialize outline")?;
    println!("{}", json);

    Ok(())
}

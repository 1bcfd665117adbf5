//! Methodology Lookup Tables
//!
//! Descriptive prose for methodology-specific sections and the alignment
//! narrative for each methodology type. Tables are keyed by type, then by
//! section name; a miss yields None and callers use their generic fallback.

use super::types::MethodologyType;

type SectionTable = &'static [(&'static str, &'static str)];

// ============================================================================
// Required section descriptions
// ============================================================================

static QUANTITATIVE_REQUIRED: SectionTable = &[
    ("Hypothesis Testing", "Clearly state your testable hypotheses with operational definitions. Identify independent and dependent variables. Justify directional or non-directional hypotheses based on literature."),
    ("Variable Identification", "Comprehensively identify all variables in your study. Distinguish between independent, dependent, moderating, and mediating variables. Define each variable with precision."),
    ("Statistical Tools", "Specify appropriate statistical tools for each research question. Justify parametric vs. non-parametric choices. Detail software packages to be used (e.g., SPSS, R, Python)."),
];

static QUALITATIVE_REQUIRED: SectionTable = &[
    ("Research Questions", "Formulate open-ended, exploratory research questions that guide qualitative inquiry. Ensure questions are flexible enough to evolve during data collection."),
    ("Data Collection Methods", "Detail participant recruitment strategies, data collection procedures, and ethical considerations. Specify interview protocols, observation techniques, or document analysis approaches."),
    ("Analysis Procedures", "Outline coding procedures, thematic analysis techniques, and data interpretation strategies. Describe how you'll ensure trustworthiness and credibility."),
];

static MIXED_REQUIRED: SectionTable = &[
    ("Integration Strategy", "Specify how quantitative and qualitative data will be integrated. Choose from merging, connecting, embedding, or transforming approaches. Justify your selection."),
    ("Data Collection Sequence", "Determine whether data collection will be sequential or concurrent. Explain timing and rationale for your chosen approach."),
    ("Analysis Integration", "Detail how findings from both methods will be combined and interpreted. Address issues of validity and reliability collaboratively."),
];

static EXPERIMENTAL_REQUIRED: SectionTable = &[
    ("Experimental Design", "Clearly define your experimental design (between-subjects, within-subjects, factorial). Justify choice based on research questions and available resources."),
    ("Control Conditions", "Specify control group procedures and manipulation checks. Detail how you'll minimize confounding variables and ensure internal validity."),
    ("Randomization", "Explain randomization procedures for participant assignment. Describe stratification or blocking techniques if applicable."),
    ("Statistical Tests", "Identify specific statistical tests for each hypothesis. Justify ANOVA, t-tests, or regression approaches based on design."),
];

static SURVEY_REQUIRED: SectionTable = &[
    ("Sampling Procedure", "Detail your sampling strategy (random, stratified, cluster). Justify sample size with power analysis. Address non-response handling procedures."),
    ("Instrument Description", "Completely describe your survey instrument. Include question types, scales used, and validation procedures. Attach instrument in appendices."),
    ("Response Rate", "Specify expected response rates and strategies to maximize participation. Detail follow-up procedures and incentive plans if applicable."),
    ("Data Analysis Plan", "Outline descriptive and inferential statistical approaches. Specify how you'll handle missing data and outliers. Detail software to be used."),
];

static CASE_STUDY_REQUIRED: SectionTable = &[
    ("Case Selection Criteria", "Justify your case selection with clear criteria. Explain whether using intrinsic, instrumental, or collective case study approaches."),
    ("Data Sources", "Completely enumerate all data sources (documents, interviews, observations). Detail how triangulation will strengthen findings."),
    ("Analytical Framework", "Specify your analytical approach (pattern matching, explanation building). Detail how you'll organize and code case data."),
    ("Validity Measures", "Describe strategies to ensure construct, internal, and external validity. Detail how member checking and peer review will enhance credibility."),
];

static ETHNOGRAPHIC_REQUIRED: SectionTable = &[
    ("Cultural Immersion", "Detail your prolonged engagement with the cultural group. Describe how you'll gain cultural competence and establish rapport."),
    ("Ethical Considerations", "Completely address informed consent, ongoing permission, and confidentiality. Respect cultural protocols and ethical guidelines."),
    ("Reflexivity", "Maintain detailed reflexive journal documenting personal reactions and biases. Seek peer debriefing and external auditing. Use member checking to validate interpretations."),
];

static ACTION_RESEARCH_REQUIRED: SectionTable = &[
    ("Collaborative Process", "Completely describe stakeholder involvement and decision-making procedures. Maintain transparent documentation of collaborative processes."),
    ("Action Cycles", "Specify iterative cycles of planning, acting, observing, and reflecting. Detail how each cycle informs the next."),
    ("Stakeholder Involvement", "Completely enumerate all stakeholders and their roles. Maintain transparency in research procedures and accountability."),
];

// ============================================================================
// Optional section descriptions
// ============================================================================

static QUANTITATIVE_OPTIONAL: SectionTable = &[
    ("Reliability Testing", "Conduct reliability analyses (Cronbach's alpha, test-retest) for all measurement instruments. Report coefficients and interpret their meaning in your context."),
    ("Validity Assessment", "Perform validity tests (construct, content, criterion) for your instruments. Detail how face validity was established through expert review."),
];

static QUALITATIVE_OPTIONAL: SectionTable = &[
    ("Reflexivity Statement", "Include a detailed reflexivity statement addressing your positionality, assumptions, and how they influenced data collection and interpretation."),
    ("Member Checking", "Describe member checking procedures with participants to validate interpretations. Detail how feedback was incorporated into final analysis."),
];

static MIXED_OPTIONAL: SectionTable = &[
    ("Paradigm Integration", "Explain how quantitative and qualitative paradigms inform each other in your study. Address philosophical tensions and resolutions."),
    ("Mixed Methods Design Type", "Specify your mixed methods design (convergent, explanatory, exploratory, embedded). Justify based on research priorities."),
];

static EXPERIMENTAL_OPTIONAL: SectionTable = &[
    ("Effect Sizes", "Report effect sizes (Cohen's d, eta squared) alongside significance tests. Interpret practical significance of your findings."),
    ("Power Analysis", "Conduct a priori power analysis to justify sample size. If increasing sample size is not feasible, consider alternative designs or analytical approaches."),
];

static SURVEY_OPTIONAL: SectionTable = &[
    ("Pilot Testing Results", "Include detailed results from pilot testing. Report any instrument modifications based on feedback."),
    ("Non-response Bias Analysis", "Analyze potential non-response bias through comparison of early vs. late responders. Consider statistical adjustments if necessary."),
];

static CASE_STUDY_OPTIONAL: SectionTable = &[
    ("Cross-case Comparison", "If using multiple cases, detail cross-case comparison procedures. Explain how patterns emerged across cases."),
    ("Theory Building", "If engaged in theory building, describe how your findings contribute to theoretical development in your field."),
];

static ETHNOGRAPHIC_OPTIONAL: SectionTable = &[
    ("Cultural Mapping", "Create visual maps of cultural relationships and patterns. Detail how spatial and social dynamics influence your findings."),
    ("Genealogical Analysis", "Trace historical development of key cultural concepts. Show how past events influence present phenomena."),
];

static ACTION_RESEARCH_OPTIONAL: SectionTable = &[
    ("Change Theory Application", "Apply change theory to explain transformation processes. Detail how theory informed intervention design."),
    ("Sustainability Planning", "Describe plans for sustaining changes beyond the research period. Detail institutionalization strategies."),
];

// ============================================================================
// Lookup functions
// ============================================================================

fn required_table(kind: &MethodologyType) -> SectionTable {
    match kind {
        MethodologyType::Quantitative => QUANTITATIVE_REQUIRED,
        MethodologyType::Qualitative => QUALITATIVE_REQUIRED,
        MethodologyType::Mixed => MIXED_REQUIRED,
        MethodologyType::Experimental => EXPERIMENTAL_REQUIRED,
        MethodologyType::Survey => SURVEY_REQUIRED,
        MethodologyType::CaseStudy => CASE_STUDY_REQUIRED,
        MethodologyType::Ethnographic => ETHNOGRAPHIC_REQUIRED,
        MethodologyType::ActionResearch => ACTION_RESEARCH_REQUIRED,
        MethodologyType::Other(_) => &[],
    }
}

fn optional_table(kind: &MethodologyType) -> SectionTable {
    match kind {
        MethodologyType::Quantitative => QUANTITATIVE_OPTIONAL,
        MethodologyType::Qualitative => QUALITATIVE_OPTIONAL,
        MethodologyType::Mixed => MIXED_OPTIONAL,
        MethodologyType::Experimental => EXPERIMENTAL_OPTIONAL,
        MethodologyType::Survey => SURVEY_OPTIONAL,
        MethodologyType::CaseStudy => CASE_STUDY_OPTIONAL,
        MethodologyType::Ethnographic => ETHNOGRAPHIC_OPTIONAL,
        MethodologyType::ActionResearch => ACTION_RESEARCH_OPTIONAL,
        MethodologyType::Other(_) => &[],
    }
}

fn find(table: SectionTable, section: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, description)| *description)
}

/// Description of a required section for a methodology, if one is on file
pub fn required_section_description(kind: &MethodologyType, section: &str) -> Option<&'static str> {
    find(required_table(kind), section)
}

/// Description of an optional section for a methodology, if one is on file
pub fn optional_section_description(kind: &MethodologyType, section: &str) -> Option<&'static str> {
    find(optional_table(kind), section)
}

/// Narrative explaining how an adapted outline fits the methodology
pub fn alignment_narrative(kind: &MethodologyType) -> String {
    let narrative = match kind {
        MethodologyType::Quantitative => "Your outline has been adapted to align with quantitative research methodology requirements. This includes emphasizing hypothesis testing, variable identification, and statistical analysis approaches. The structure focuses on numerical data collection and analysis to test specific predictions.",
        MethodologyType::Qualitative => "Your outline has been adapted to align with qualitative research methodology requirements. This includes emphasizing exploratory research questions, participant engagement, and thematic analysis approaches. The structure focuses on understanding meaning and experiences through words, images, and observations.",
        MethodologyType::Mixed => "Your outline has been adapted to align with mixed-methods research methodology requirements. This includes emphasizing integration strategies, sequential or concurrent data collection, and combined analysis approaches. The structure balances both quantitative and qualitative components to provide comprehensive insights.",
        MethodologyType::Experimental => "Your outline has been adapted to align with experimental research methodology requirements. This includes emphasizing hypothesis testing, control conditions, and statistical analysis approaches. The structure focuses on manipulating variables to establish cause-and-effect relationships under controlled conditions.",
        MethodologyType::Survey => "Your outline has been adapted to align with survey research methodology requirements. This includes emphasizing sampling procedures, instrument development, and statistical analysis approaches. The structure focuses on collecting standardized data from large samples to identify patterns and relationships.",
        MethodologyType::CaseStudy => "Your outline has been adapted to align with case study methodology requirements. This includes emphasizing case selection criteria, multiple data sources, and analytical frameworks. The structure focuses on providing in-depth analysis of specific situations or entities.",
        MethodologyType::Ethnographic => "Your outline has been adapted to align with ethnographic research methodology requirements. This includes emphasizing cultural immersion, participant observation, and reflexive analysis approaches. The structure focuses on understanding cultures and communities through prolonged engagement.",
        MethodologyType::ActionResearch => "Your outline has been adapted to align with action research methodology requirements. This includes emphasizing collaborative partnerships, iterative cycles, and practical outcomes. The structure focuses on solving real-world problems through collaborative inquiry.",
        MethodologyType::Other(name) => {
            return format!(
                "Your outline has been adapted to align with {} research methodology requirements.",
                name
            )
        }
    };
    narrative.to_string()
}

//! Built-in Methodology Catalog
//!
//! The six methodology descriptors offered when a user picks a research
//! approach. Each carries its chapter overrides, section vocabulary,
//! question templates, guidance text and two common challenges.

use super::types::{Challenge, ChapterTemplate, MethodologyType, ResearchMethodology};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn chapter(
    chapter_number: u32,
    title: &str,
    required: &[&str],
    optional: &[&str],
    emphasis: &str,
) -> ChapterTemplate {
    ChapterTemplate {
        chapter_number,
        title: title.to_string(),
        required_sections: strings(required),
        optional_sections: strings(optional),
        methodology_emphasis: emphasis.to_string(),
    }
}

const LITERATURE_TITLE: &str = "Review of Related Literature";
const METHODOLOGY_TITLE: &str = "Research Methodology";
const RESULTS_TITLE: &str = "Presentation, Analysis and Interpretation of Data";
const SUMMARY_TITLE: &str = "Summary, Conclusions and Recommendations";

const SUMMARY_SECTIONS: &[&str] = &["Summary", "Conclusions", "Recommendations"];
const SUMMARY_OPTIONAL: &[&str] = &["Implications", "Limitations of the Study", "Suggestions for Further Research"];
const FRAMEWORKS: &[&str] = &["Theoretical Framework", "Conceptual Framework"];

fn summary_chapter(emphasis: &str) -> ChapterTemplate {
    chapter(5, SUMMARY_TITLE, SUMMARY_SECTIONS, SUMMARY_OPTIONAL, emphasis)
}

/// All built-in descriptors, in menu order
pub fn methodology_options() -> Vec<ResearchMethodology> {
    vec![
        quantitative(),
        qualitative(),
        mixed(),
        experimental(),
        survey(),
        case_study(),
    ]
}

/// Built-in descriptor for a type, if the catalog has one
pub fn find(kind: &MethodologyType) -> Option<ResearchMethodology> {
    methodology_options()
        .into_iter()
        .find(|m| &m.methodology_type == kind)
}

pub fn quantitative() -> ResearchMethodology {
    ResearchMethodology {
        methodology_type: MethodologyType::Quantitative,
        description: "Uses numerical data and statistical analysis to test hypotheses".to_string(),
        suitable_for: strings(&["Surveys", "Experiments", "Correlational studies"]),
        data_collection: strings(&["Questionnaires", "Experiments", "Secondary data analysis"]),
        analysis_approach: "Statistical analysis (SPSS, R, Python)".to_string(),
        chapter_structure: Some(vec![
            chapter(
                1,
                "Introduction",
                &["Background of the Study", "Statement of the Problem", "Hypothesis", "Scope and Delimitation", "Significance of the Study", "Definition of Terms"],
                FRAMEWORKS,
                "Clearly state testable hypotheses and identify variables",
            ),
            chapter(
                2,
                LITERATURE_TITLE,
                &["Foreign Literature", "Local Literature", "Foreign Studies", "Local Studies", "Synthesis"],
                &["Theoretical Foundations", "Conceptual Literature"],
                "Focus on empirical studies with measurable variables",
            ),
            chapter(
                3,
                METHODOLOGY_TITLE,
                &["Research Design", "Population and Sample", "Research Instrument", "Data Gathering Procedure", "Statistical Treatment of Data"],
                &["Validity and Reliability of Instrument", "Ethical Considerations"],
                "Detail statistical tools and justify variable selection",
            ),
            chapter(
                4,
                RESULTS_TITLE,
                &["Presentation of Data", "Analysis of Data", "Interpretation of Data"],
                &["Statistical Tables", "Graphical Representations"],
                "Present numerical results with appropriate statistical tests",
            ),
            summary_chapter("Base conclusions on statistical findings and relate to hypotheses"),
        ]),
        required_sections: strings(&["Hypothesis Testing", "Variable Identification", "Statistical Tools"]),
        optional_sections: strings(&["Reliability Testing", "Validity Assessment"]),
        research_question_templates: strings(&[
            "What is the relationship between [variable A] and [variable B]?",
            "Is there a significant difference in [dependent variable] between [group 1] and [group 2]?",
            "To what extent does [independent variable] predict [dependent variable]?",
        ]),
        data_collection_guidance: Some(
            "Ensure large enough sample size for statistical significance. Use validated instruments with established reliability coefficients. Implement random sampling when possible.".to_string(),
        ),
        analysis_guidance: Some(
            "Apply appropriate parametric or non-parametric tests based on data distribution. Report effect sizes along with p-values. Use multiple regression for complex relationships.".to_string(),
        ),
        common_challenges: vec![
            Challenge::new(
                "Insufficient sample size for desired statistical power",
                "Conduct a power analysis before data collection to determine minimum sample size. If increasing sample size is not feasible, consider non-parametric alternatives.",
            ),
            Challenge::new(
                "Violations of statistical assumptions (normality, homoscedasticity)",
                "Test assumptions before analysis. Use transformations or non-parametric tests when assumptions are violated. Report which tests were used and why.",
            ),
        ],
    }
}

pub fn qualitative() -> ResearchMethodology {
    ResearchMethodology {
        methodology_type: MethodologyType::Qualitative,
        description: "Explores phenomena through words, images, and observations".to_string(),
        suitable_for: strings(&["Interviews", "Focus groups", "Ethnographies", "Case studies"]),
        data_collection: strings(&["Interviews", "Focus groups", "Observations", "Document analysis"]),
        analysis_approach: "Thematic analysis, grounded theory, narrative analysis".to_string(),
        chapter_structure: Some(vec![
            chapter(
                1,
                "Introduction",
                &["Background of the Study", "Statement of the Problem", "Scope and Delimitation", "Significance of the Study", "Definition of Terms"],
                &["Theoretical Framework", "Conceptual Framework", "Research Questions"],
                "Focus on exploratory research questions rather than testable hypotheses",
            ),
            chapter(
                2,
                LITERATURE_TITLE,
                &["Conceptual Literature", "Theoretical Foundations", "Synthesis"],
                &["Paradigm Context", "Cultural Perspectives"],
                "Emphasize conceptual and theoretical foundations over empirical studies",
            ),
            chapter(
                3,
                METHODOLOGY_TITLE,
                &["Research Design", "Participants/Subjects", "Data Collection Procedure", "Data Analysis Procedure"],
                &["Trustworthiness Measures", "Ethical Considerations", "Positionality Statement"],
                "Detail participant selection criteria and data collection methods",
            ),
            chapter(
                4,
                RESULTS_TITLE,
                &["Participant Profiles", "Thematic Analysis", "Interpretation of Themes"],
                &["Narrative Excerpts", "Visual Data Analysis"],
                "Present rich, detailed quotes and narratives with thematic organization",
            ),
            summary_chapter("Base conclusions on identified themes and their interpretations"),
        ]),
        required_sections: strings(&["Research Questions", "Data Collection Methods", "Analysis Procedures"]),
        optional_sections: strings(&["Reflexivity Statement", "Member Checking"]),
        research_question_templates: strings(&[
            "How do [participants] experience [phenomenon]?",
            "What are the underlying meanings of [experience] for [participants]?",
            "How is [process] understood and enacted within [context]?",
        ]),
        data_collection_guidance: Some(
            "Develop rapport with participants to encourage honest responses. Use multiple data sources (triangulation) when possible. Maintain detailed field notes and recording logs.".to_string(),
        ),
        analysis_guidance: Some(
            "Engage in iterative coding cycles. Move between data collection and analysis. Maintain an audit trail of analytical decisions. Ensure themes are supported by sufficient data excerpts.".to_string(),
        ),
        common_challenges: vec![
            Challenge::new(
                "Researcher bias influencing data interpretation",
                "Maintain reflexivity throughout the research process. Keep detailed analytical memos. Seek peer debriefing or member checking when possible.",
            ),
            Challenge::new(
                "Difficulty in achieving data saturation",
                "Continue data collection until no new themes emerge. Use purposive sampling to maximize variation. Document the sampling process and rationale for stopping.",
            ),
        ],
    }
}

pub fn mixed() -> ResearchMethodology {
    ResearchMethodology {
        methodology_type: MethodologyType::Mixed,
        description: "Combines quantitative and qualitative approaches".to_string(),
        suitable_for: strings(&["Complex research questions", "Triangulation studies", "Program evaluations"]),
        data_collection: strings(&["Surveys and interviews", "Experimental and observational data"]),
        analysis_approach: "Sequential or concurrent analysis of both data types".to_string(),
        chapter_structure: Some(vec![
            chapter(
                1,
                "Introduction",
                &["Background of the Study", "Statement of the Problem", "Research Questions/Hypotheses", "Scope and Delimitation", "Significance of the Study", "Definition of Terms"],
                FRAMEWORKS,
                "Clearly articulate both quantitative and qualitative components and their integration",
            ),
            chapter(
                2,
                LITERATURE_TITLE,
                &["Quantitative Literature", "Qualitative Literature", "Integration of Perspectives", "Synthesis"],
                &["Methodological Foundations", "Paradigm Integration"],
                "Show how quantitative and qualitative literatures inform each other",
            ),
            chapter(
                3,
                METHODOLOGY_TITLE,
                &["Research Design", "Quantitative Component", "Qualitative Component", "Integration Strategy", "Data Analysis Procedures"],
                &["Validity Measures", "Ethical Considerations"],
                "Detail both quantitative and qualitative methods with integration approach",
            ),
            chapter(
                4,
                RESULTS_TITLE,
                &["Quantitative Results", "Qualitative Results", "Integrated Findings"],
                &["Comparative Analysis", "Contradictory Findings"],
                "Present both data types and show their relationship or complementarity",
            ),
            summary_chapter("Integrate conclusions from both quantitative and qualitative findings"),
        ]),
        required_sections: strings(&["Integration Strategy", "Data Collection Sequence", "Analysis Integration"]),
        optional_sections: strings(&["Paradigm Integration", "Mixed Methods Design Type"]),
        research_question_templates: strings(&[
            "To what extent do quantitative findings align with qualitative insights regarding [phenomenon]?",
            "How do [quantitative measures] relate to [qualitative experiences] of [participants]?",
            "What does the integration of numerical data and participant narratives reveal about [research problem]?",
        ]),
        data_collection_guidance: Some(
            "Ensure both quantitative and qualitative components are given adequate attention. Consider sequential or concurrent data collection based on research design. Maintain consistency in sampling criteria across both methods.".to_string(),
        ),
        analysis_guidance: Some(
            "Choose appropriate integration approach (merging, connecting, embedding, transforming). Justify the chosen approach based on research questions. Clearly distinguish between quantitative and qualitative findings in presentation.".to_string(),
        ),
        common_challenges: vec![
            Challenge::new(
                "Inadequate integration of quantitative and qualitative findings",
                "Select an integration approach that aligns with research questions. Clearly articulate how findings from both methods inform each other. Use visual models to show integration strategy.",
            ),
            Challenge::new(
                "Unequal emphasis on quantitative and qualitative components",
                "Devote equal analytical rigor to both components. Allocate sufficient time and resources for both data collection and analysis phases. Justify the weighting of each component based on research priorities.",
            ),
        ],
    }
}

pub fn experimental() -> ResearchMethodology {
    ResearchMethodology {
        methodology_type: MethodologyType::Experimental,
        description: "Manipulates variables to establish cause-and-effect relationships".to_string(),
        suitable_for: strings(&["Laboratory studies", "Field experiments", "Quasi-experiments"]),
        data_collection: strings(&["Controlled conditions", "Random assignment", "Pre/post measurements"]),
        analysis_approach: "ANOVA, t-tests, regression analysis".to_string(),
        chapter_structure: Some(vec![
            chapter(
                1,
                "Introduction",
                &["Background of the Study", "Statement of the Problem", "Hypothesis", "Scope and Delimitation", "Significance of the Study", "Definition of Terms"],
                FRAMEWORKS,
                "Clearly define independent and dependent variables with operational definitions",
            ),
            chapter(
                2,
                LITERATURE_TITLE,
                &["Independent Variable Literature", "Dependent Variable Literature", "Experimental Designs", "Synthesis"],
                &["Control Variables", "Experimental Conditions"],
                "Focus on previous experimental studies and theoretical foundations",
            ),
            chapter(
                3,
                METHODOLOGY_TITLE,
                &["Experimental Design", "Participants", "Materials/Apparatus", "Procedure", "Statistical Treatment of Data"],
                &["Control Conditions", "Randomization Procedure", "Ethical Considerations"],
                "Detail experimental manipulation and control procedures",
            ),
            chapter(
                4,
                RESULTS_TITLE,
                &["Experimental Conditions Results", "Statistical Analysis", "Post-hoc Tests"],
                &["Effect Sizes", "Confidence Intervals"],
                "Present results by experimental condition with appropriate statistical tests",
            ),
            summary_chapter("Relate findings to experimental hypotheses and causal relationships"),
        ]),
        required_sections: strings(&["Experimental Design", "Control Conditions", "Randomization", "Statistical Tests"]),
        optional_sections: strings(&["Effect Sizes", "Power Analysis"]),
        research_question_templates: strings(&[
            "Does manipulating [independent variable] cause a significant change in [dependent variable]?",
            "What is the effect of [treatment] compared to [control] on [outcome measure]?",
            "How does [factor A] interact with [factor B] to influence [dependent variable]?",
        ]),
        data_collection_guidance: Some(
            "Ensure proper randomization and blinding procedures. Maintain strict control over extraneous variables. Collect pre-test and post-test measures when appropriate. Document any deviations from planned procedures.".to_string(),
        ),
        analysis_guidance: Some(
            "Select appropriate statistical tests based on experimental design. Report effect sizes in addition to significance tests. Conduct post-hoc tests when appropriate. Address multiple comparison issues if applicable.".to_string(),
        ),
        common_challenges: vec![
            Challenge::new(
                "Failure to adequately control extraneous variables",
                "Identify potential confounding variables during planning phase. Implement appropriate control procedures (randomization, matching, statistical control). Document all control measures taken.",
            ),
            Challenge::new(
                "Insufficient statistical power to detect meaningful effects",
                "Conduct power analysis during planning to determine appropriate sample size. If increasing sample size is not feasible, consider alternative designs or analytical approaches. Report achieved power in results.",
            ),
        ],
    }
}

pub fn survey() -> ResearchMethodology {
    ResearchMethodology {
        methodology_type: MethodologyType::Survey,
        description: "Collects data from large samples using standardized instruments".to_string(),
        suitable_for: strings(&["Attitude studies", "Behavioral research", "Market research"]),
        data_collection: strings(&["Online surveys", "Phone interviews", "Mail questionnaires"]),
        analysis_approach: "Descriptive statistics, cross-tabulations, factor analysis".to_string(),
        chapter_structure: Some(vec![
            chapter(
                1,
                "Introduction",
                &["Background of the Study", "Statement of the Problem", "Research Questions", "Scope and Delimitation", "Significance of the Study", "Definition of Terms"],
                FRAMEWORKS,
                "Clearly define survey objectives and target population",
            ),
            chapter(
                2,
                LITERATURE_TITLE,
                &["Survey Topic Literature", "Instrument Development", "Population Characteristics", "Synthesis"],
                &["Survey Methodology", "Response Rate Factors"],
                "Focus on previous survey studies and instrument validation",
            ),
            chapter(
                3,
                METHODOLOGY_TITLE,
                &["Survey Design", "Population and Sample", "Instrument", "Data Gathering Procedure", "Statistical Treatment of Data"],
                &["Pilot Testing", "Non-response Handling", "Ethical Considerations"],
                "Detail sampling procedure and instrument development/validation",
            ),
            chapter(
                4,
                RESULTS_TITLE,
                &["Response Rate and Sample Characteristics", "Survey Results", "Cross-tabulations", "Statistical Analysis"],
                &["Non-response Analysis", "Weighting Adjustments"],
                "Present results by demographic segments and key variables",
            ),
            summary_chapter("Base conclusions on survey findings and their implications"),
        ]),
        required_sections: strings(&["Sampling Procedure", "Instrument Description", "Response Rate", "Data Analysis Plan"]),
        optional_sections: strings(&["Pilot Testing Results", "Non-response Bias Analysis"]),
        research_question_templates: strings(&[
            "What are the attitudes and behaviors of [population] regarding [topic]?",
            "How prevalent is [behavior/attitude] among [target group]?",
            "What factors predict [outcome variable] among [population group]?",
        ]),
        data_collection_guidance: Some(
            "Ensure questionnaire items are clear and unbiased. Pilot test instruments with subset of target population. Implement strategies to maximize response rates. Protect respondent confidentiality and anonymity.".to_string(),
        ),
        analysis_guidance: Some(
            "Account for survey weights when appropriate. Handle missing data appropriately. Use cross-tabulations to examine subgroup differences. Report margins of error and confidence intervals.".to_string(),
        ),
        common_challenges: vec![
            Challenge::new(
                "Low response rates affecting representativeness",
                "Implement multiple contact attempts. Offer incentives when appropriate. Ensure survey length is reasonable. Send reminders to non-respondents. Consider non-response bias analysis.",
            ),
            Challenge::new(
                "Measurement error due to poorly worded items",
                "Follow established questionnaire design principles. Pretest instruments with representative sample. Use validated scales when available. Ensure items are unambiguous and culturally appropriate.",
            ),
        ],
    }
}

pub fn case_study() -> ResearchMethodology {
    ResearchMethodology {
        methodology_type: MethodologyType::CaseStudy,
        description: "Provides in-depth analysis of a specific situation or entity".to_string(),
        suitable_for: strings(&["Organizational studies", "Policy analysis", "Program evaluation"]),
        data_collection: strings(&["Document review", "Interviews", "Observations", "Archival data"]),
        analysis_approach: "Pattern matching, explanation building, cross-case analysis".to_string(),
        chapter_structure: Some(vec![
            chapter(
                1,
                "Introduction",
                &["Background of the Study", "Statement of the Problem", "Research Questions", "Scope and Delimitation", "Significance of the Study", "Definition of Terms"],
                &["Theoretical Framework", "Conceptual Framework", "Case Selection Rationale"],
                "Justify case selection and define case boundaries",
            ),
            chapter(
                2,
                LITERATURE_TITLE,
                &["Case Context Literature", "Theoretical Foundations", "Methodological Literature", "Synthesis"],
                &["Comparative Case Studies", "Case Study Typologies"],
                "Focus on both substantive area and case study methodology literature",
            ),
            chapter(
                3,
                METHODOLOGY_TITLE,
                &["Case Selection", "Data Sources", "Data Collection Procedure", "Data Analysis Procedure"],
                &["Triangulation Strategy", "Ethical Considerations", "Positionality Statement"],
                "Detail within-case and cross-case analysis procedures",
            ),
            chapter(
                4,
                RESULTS_TITLE,
                &["Case Description", "Within-case Analysis", "Cross-case Analysis", "Patterns and Themes"],
                &["Chronological Analysis", "Comparative Analysis"],
                "Present rich case details with analytical interpretations",
            ),
            summary_chapter("Relate findings to broader theoretical and practical implications"),
        ]),
        required_sections: strings(&["Case Selection Criteria", "Data Sources", "Analytical Framework", "Validity Measures"]),
        optional_sections: strings(&["Cross-case Comparison", "Theory Building"]),
        research_question_templates: strings(&[
            "How does [case] illustrate [phenomenon] in [context]?",
            "What are the key factors that explain [outcome] in [specific case]?",
            "How does [theoretical framework] help understand [case phenomenon]?",
        ]),
        data_collection_guidance: Some(
            "Develop detailed case profiles. Collect multiple data sources for each case. Maintain chain of evidence from raw data to conclusions. Document analytic decisions and rationale.".to_string(),
        ),
        analysis_guidance: Some(
            "Begin with detailed case descriptions before moving to cross-case analysis. Look for patterns within and across cases. Use tables and matrices to organize findings. Maintain connection between evidence and conclusions.".to_string(),
        ),
        common_challenges: vec![
            Challenge::new(
                "Difficulty in establishing generalizability of findings",
                "Clearly distinguish between analytical generalization (to theory) and naturalistic generalization (to similar cases). Use thick description to enable readers to judge applicability. Consider replication logic across cases.",
            ),
            Challenge::new(
                "Managing complexity of multiple data sources and cases",
                "Develop systematic data management procedures. Create detailed data matrices and coding schemes. Maintain clear audit trails of analytical decisions. Use visualization tools to track relationships.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methodology::descriptions::{optional_section_description, required_section_description};

    #[test]
    fn test_catalog_has_six_distinct_types() {
        let options = methodology_options();
        assert_eq!(options.len(), 6);

        let types: Vec<&str> = options.iter().map(|m| m.methodology_type.as_str()).collect();
        assert_eq!(
            types,
            vec!["quantitative", "qualitative", "mixed", "experimental", "survey", "case-study"]
        );
    }

    #[test]
    fn test_every_entry_is_complete() {
        for m in methodology_options() {
            let chapters = m.chapter_structure.as_ref().expect("catalog entries carry chapters");
            assert_eq!(chapters.len(), 5, "{} chapters", m.methodology_type);
            assert_eq!(m.common_challenges.len(), 2, "{} challenges", m.methodology_type);
            assert_eq!(m.research_question_templates.len(), 3);
            assert!(m.data_collection_guidance().is_some());
            assert!(m.analysis_guidance().is_some());
        }
    }

    #[test]
    fn test_catalog_sections_all_have_descriptions() {
        for m in methodology_options() {
            for section in &m.required_sections {
                assert!(
                    required_section_description(&m.methodology_type, section).is_some(),
                    "{} / {} has no description",
                    m.methodology_type,
                    section
                );
            }
            for section in &m.optional_sections {
                assert!(
                    optional_section_description(&m.methodology_type, section).is_some(),
                    "{} / {} has no description",
                    m.methodology_type,
                    section
                );
            }
        }
    }

    #[test]
    fn test_find_by_type() {
        assert_eq!(find(&MethodologyType::Survey), Some(survey()));
        assert!(find(&MethodologyType::Ethnographic).is_none());
    }
}

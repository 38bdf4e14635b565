//! Integration tests for the full consultation and dosimetry flows.
//!
//! Exercises the engine end to end the way the presentation layer does:
//! build the two code tables, search them, screen diversion eligibility
//! and run a complete dosimetry with narrative output.

use std::collections::HashMap;

use vademecum_engine::{
    eligibility, sentencing, AdjustmentCause, Assessment, CauseKind, Dataset, EligibilityFactors,
    FactorAssessment, LegalCodes, Lookup, SentencingRange, PASSAGE_SEPARATOR,
};

/// Helper to build a dataset from column/cell literals.
fn dataset(columns: &[&str], rows: &[&[(&str, &str)]]) -> Dataset {
    let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<String, String>>()
        })
        .collect();
    Dataset::new(columns, rows)
}

fn penal_code() -> Dataset {
    dataset(
        &["Artigo", "Texto", "Crime"],
        &[
            &[("Artigo", "121"), ("Texto", "Homicídio"), ("Crime", "Homicídio")],
            &[("Artigo", "155"), ("Texto", "Furto"), ("Crime", "Furto")],
            &[("Artigo", "157"), ("Texto", "Roubo"), ("Crime", "Roubo")],
        ],
    )
}

fn procedure_code() -> Dataset {
    dataset(
        &["Artigo", "Ementa"],
        &[
            &[("Artigo", "Art. 28-A"), ("Ementa", "Acordo de não persecução penal")],
            &[("Artigo", "Art. 312"), ("Ementa", "Prisão preventiva")],
        ],
    )
}

#[test]
fn test_lookup_scenario_from_plain_table() {
    // Lowercase column names, exact article numbers
    let code = dataset(
        &["artigo", "texto"],
        &[
            &[("artigo", "121"), ("texto", "Homicídio")],
            &[("artigo", "155"), ("texto", "Furto")],
        ],
    );
    let lookup = Lookup::new();

    assert_eq!(lookup.article(Some(&code), "121"), Some("Homicídio".to_string()));
    assert_eq!(lookup.article(Some(&code), "999"), None);
}

#[test]
fn test_both_codes_are_searched_independently() {
    let codes = LegalCodes::new(Some(penal_code()), Some(procedure_code()));

    // "28-A" only exists in the procedure code, as "Art. 28-A" (containment)
    let report = codes.search_article("28-A");
    assert_eq!(report.penal, None);
    assert_eq!(
        report.procedure.as_deref(),
        Some("Acordo de não persecução penal")
    );

    // The diversion screen pulls the same text through the convenience call
    assert_eq!(
        codes.diversion_article_text().as_deref(),
        Some("Acordo de não persecução penal")
    );
}

#[test]
fn test_offense_search_reports_each_source_separately() {
    let codes = LegalCodes::new(Some(penal_code()), Some(procedure_code()));

    let report = codes.search_offense("Roubo");
    let block = report.penal.expect("penal code should match the label");
    assert!(block.contains("Artigo: 157"));
    assert!(block.contains("Crime: Roubo"));
    // Procedure code has no mention of the label; its side stays absent
    assert_eq!(report.procedure, None);
}

#[test]
fn test_multiple_passages_keep_row_order() {
    let code = dataset(
        &["artigo", "texto"],
        &[
            &[("artigo", "155"), ("texto", "Furto")],
            &[("artigo", "155-A"), ("texto", "Furto qualificado mediante fraude")],
        ],
    );
    let lookup = Lookup::new();

    // Exact match wins outright
    assert_eq!(lookup.article(Some(&code), "155"), Some("Furto".to_string()));

    // A query matching several rows by containment joins them in order
    let joined = lookup.article(Some(&code), "155-").expect("containment match");
    assert_eq!(joined, "Furto qualificado mediante fraude");
    let joined = lookup.article(Some(&code), "15");
    assert_eq!(
        joined,
        Some(format!("Furto{PASSAGE_SEPARATOR}Furto qualificado mediante fraude"))
    );
}

#[test]
fn test_diversion_screening_end_to_end() {
    let eligible = EligibilityFactors {
        sem_violencia: true,
        pena_minima_inferior_4_anos: true,
        confissao: true,
        reincidente_doloso: false,
        crime_domestico: false,
        ja_teve_anpp: false,
    };
    let verdict = eligibility::evaluate(&eligible);
    assert!(verdict.eligible);
    assert!(eligibility::opinion(&verdict).contains("potencialmente elegível"));

    let ineligible = EligibilityFactors {
        sem_violencia: false,
        ..eligible
    };
    let verdict = eligibility::evaluate(&ineligible);
    assert!(!verdict.eligible);
    let parecer = eligibility::opinion(&verdict);
    assert!(parecer.contains("não elegível"));
    assert!(parecer.contains("violência ou grave ameaça"));
}

#[test]
fn test_dosimetry_end_to_end() {
    let range = SentencingRange::new(1.0, 5.0).expect("valid range");

    // Five unfavorable, three favorable: base = 1 + (5-3)*(4/8) = 2.0
    let factors = FactorAssessment {
        culpabilidade: Assessment::Desfavoravel,
        antecedentes: Assessment::Desfavoravel,
        conduta_social: Assessment::Desfavoravel,
        personalidade: Assessment::Desfavoravel,
        motivos: Assessment::Desfavoravel,
        circunstancias: Assessment::Favoravel,
        consequencias: Assessment::Favoravel,
        comportamento_vitima: Assessment::Favoravel,
    };
    let base = sentencing::base_penalty(&range, &factors);
    assert_eq!(base, 2.0);

    let causes = vec![AdjustmentCause::new(
        CauseKind::Aumento,
        0.5,
        "concurso formal",
    )];
    let final_penalty = sentencing::apply_causes(base, &causes);
    assert_eq!(final_penalty, 3.0);

    let formatted = sentencing::format_years(final_penalty);
    assert_eq!((formatted.years, formatted.months), (3, 0));

    let narrative = sentencing::explain(&range, &factors, base, &causes, final_penalty);
    assert!(narrative.contains("**1.00** e **5.00**"));
    assert!(narrative.contains("pena-base é fixada em **2.00 anos**"));
    assert!(narrative.contains("**aumento** de aproximadamente **50.0%**"));
    assert!(narrative.contains("**3.00 anos**"));
}

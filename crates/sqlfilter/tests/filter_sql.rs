//! Integration tests for the public checking and translation API.

use sqlfilter_rs::{
    check, translate_to_sql, validate, FieldCatalog, FieldType, FilterError, FilterTranslator,
    GrammarError, Operation,
};

#[test]
fn catalog_lists_the_fixed_fields() {
    let names: Vec<_> = FieldCatalog::fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["TITLE", "NAME", "WEIGHT", "POSTDATE"]);

    let postdate = FieldCatalog::lookup("postdate").unwrap();
    assert_eq!(postdate.field_type, FieldType::Timestamp);
    assert_eq!(postdate.sql_column, "ARTICLE_POST_DATE");
    assert!(!postdate.allows(Operation::Like));
}

#[test]
fn one_checked_filter_renders_with_several_translators() {
    let filter = validate(Some("NAME = 'bolt' AND WEIGHT <= 3")).unwrap();

    let default_sql = FilterTranslator::new().render(&filter).unwrap();
    assert_eq!(default_sql, "ARTICLE.NAME = 'bolt' AND ARTICLE.WEIGHT <= 3");

    let aliased = FilterTranslator::new()
        .with_column("NAME", "p.name")
        .unwrap()
        .render(&filter)
        .unwrap();
    assert_eq!(aliased, "p.name = 'bolt' AND ARTICLE.WEIGHT <= 3");
}

#[test]
fn grammar_errors_describe_the_problem() {
    let err = check(Some("WEIGHT2 > 10")).unwrap_err();
    assert_eq!(err.to_string(), "unknown field: WEIGHT2 (did you mean WEIGHT?)");

    let err = check(Some("WEIGHT LIKE 10")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "operation LIKE is not allowed for WEIGHT (integer)"
    );

    let err = check(Some("WEIGHT > 5)")).unwrap_err();
    assert_eq!(err, GrammarError::UnmatchedCloseBracket);
}

#[test]
fn translate_distinguishes_bad_input() {
    match translate_to_sql("POSTDATE = '32.01.2025 10:00'") {
        Err(FilterError::Grammar(GrammarError::InvalidValue { field, .. })) => {
            assert_eq!(field, "POSTDATE");
        }
        other => panic!("expected invalid value, got {other:?}"),
    }
}

#[test]
fn timestamps_with_spaces_survive_tokenizing_and_rendering() {
    let sql = translate_to_sql(
        "POSTDATE >= '01.01.2025 00:00' AND POSTDATE < '01.02.2025 00:00' AND TITLE LIKE 'Q1 report%'",
    )
    .unwrap();
    assert_eq!(
        sql,
        "ARTICLE_POST_DATE >= '2025-01-01 00:00:00' AND ARTICLE_POST_DATE < '2025-02-01 00:00:00' AND ARTICLE.TITLE LIKE 'Q1 report%'"
    );
}

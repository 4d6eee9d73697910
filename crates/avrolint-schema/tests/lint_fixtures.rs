//! Integration test: lint the `.avsc` fixtures end to end with the real
//! `apache-avro` parser, asserting the exact diagnostics streamed to the
//! reporter and the final aggregate error.

use avrolint_schema::{LintError, LintOptions, Linter};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn lint(input: Option<&str>, options: LintOptions) -> (Result<(), LintError>, Vec<String>) {
    let mut reported: Vec<String> = Vec::new();
    let result = Linter::new(options).lint(input, &mut reported);
    (result, reported)
}

fn missing_docs_message(path: &str) -> String {
    format!(
        "Invalid Schema at '{path}'! The following fields are not documented:
  com.samsung.ads.MyRecord.id
  com.samsung.ads.MyRecord.MyArrayOfNestedRecords
  com.samsung.ads.MyRecord.MyArrayOfNestedRecords.nestedId
  com.samsung.ads.MyRecord.MyMapOfNestedRecords
  com.samsung.ads.MyRecord.MyMapOfNestedRecords.nestedId
  com.samsung.ads.MyRecord.MyUnionNestedRecord
  com.samsung.ads.MyRecord.MyUnionNestedRecord.nestedId"
    )
}

fn complex_union_message(path: &str) -> String {
    format!(
        "Invalid Schema at '{path}'! The following fields are or contain complex unions:
  com.samsung.ads.MyRecord.MyComplexUnionA
  com.samsung.ads.MyRecord.MyComplexUnionB
  com.samsung.ads.MyRecord.MyArrayOfComplexUnions
  com.samsung.ads.MyRecord.MyMapOfComplexUnions"
    )
}

fn failed<S: AsRef<str>>(files: &[S]) -> LintError {
    LintError::ValidationFailed {
        files: files.iter().map(|f| f.as_ref().to_string()).collect(),
    }
}

#[test]
fn undefined_path() {
    let (result, reported) = lint(None, LintOptions::default());
    assert_eq!(
        result.unwrap_err().to_string(),
        "Validation failed for the following files:\n  undefined"
    );
    assert_eq!(reported, ["avscFilePath is invalid: 'undefined'"]);
}

#[test]
fn nonexistent_file() {
    let (result, reported) = lint(Some("foo.avsc"), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&["foo.avsc"]));
    assert_eq!(reported, ["avscFilePath is invalid: 'foo.avsc'"]);
}

#[test]
fn not_json() {
    let path = fixture("invalid-non-parseable-not-json.avsc");
    let (result, reported) = lint(Some(&path), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&path]));
    assert_eq!(reported.len(), 1);
    let prefix = format!("AVSC file specified is not valid/parseable JSON: {path}\n  ");
    assert!(reported[0].starts_with(&prefix), "got: {}", reported[0]);
    assert!(reported[0].len() > prefix.len());
}

#[test]
fn not_an_avro_schema() {
    let path = fixture("invalid-non-parseable-avsc.avsc");
    let (result, reported) = lint(Some(&path), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&path]));
    assert_eq!(reported.len(), 1);
    let prefix = format!("AVSC file specified is not valid/parseable: {path}\n  ");
    assert!(reported[0].starts_with(&prefix), "got: {}", reported[0]);
}

#[test]
fn missing_docs() {
    let path = fixture("invalid-missing-docs.avsc");
    let (result, reported) = lint(Some(&path), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&path]));
    assert_eq!(reported, [missing_docs_message(&path)]);
}

#[test]
fn same_file_twice_reports_twice_and_fails_once() {
    let path = fixture("invalid-missing-docs.avsc");
    let input = format!(r#"["{path}","{path}"]"#);
    let (result, reported) = lint(Some(&input), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&path]));
    assert_eq!(
        reported,
        [missing_docs_message(&path), missing_docs_message(&path)]
    );
}

#[test]
fn one_valid_one_invalid() {
    let valid = fixture("valid.avsc");
    let invalid = fixture("invalid-missing-docs.avsc");
    let input = format!(r#"["{valid}","{invalid}"]"#);
    let (result, reported) = lint(Some(&input), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&invalid]));
    assert_eq!(reported, [missing_docs_message(&invalid)]);
}

#[test]
fn complex_unions() {
    let path = fixture("invalid-complex-union.avsc");
    let (result, reported) = lint(Some(&path), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&path]));
    assert_eq!(reported, [complex_union_message(&path)]);
}

#[test]
fn multiple_invalid_files_in_input_order() {
    let docs = fixture("invalid-missing-docs.avsc");
    let unions = fixture("invalid-complex-union.avsc");
    let input = format!(r#"["{docs}","{unions}"]"#);
    let (result, reported) = lint(Some(&input), LintOptions::default());
    assert_eq!(
        result.unwrap_err().to_string(),
        format!("Validation failed for the following files:\n  {docs}\n  {unions}")
    );
    assert_eq!(
        reported,
        [missing_docs_message(&docs), complex_union_message(&unions)]
    );
}

#[test]
fn nested_complex_unions_are_found() {
    let path = fixture("nested-complex-union.avsc");
    let (result, reported) = lint(Some(&path), LintOptions::default());
    assert_eq!(result.unwrap_err(), failed(&[&path]));
    assert_eq!(
        reported,
        [format!(
            "Invalid Schema at '{path}'! The following fields are or contain complex unions:
  com.x.Outer.inner.choice
  com.x.Outer.items.single"
        )]
    );
}

#[test]
fn documentation_check_disabled() {
    let path = fixture("invalid-missing-docs.avsc");
    let options = LintOptions {
        undocumented_check: false,
        ..LintOptions::default()
    };
    let (result, reported) = lint(Some(&path), options);
    result.unwrap();
    assert!(reported.is_empty());
}

#[test]
fn complex_union_check_disabled() {
    let path = fixture("invalid-complex-union.avsc");
    let options = LintOptions {
        complex_union_check: false,
        ..LintOptions::default()
    };
    let (result, reported) = lint(Some(&path), options);
    result.unwrap();
    assert!(reported.is_empty());
}

#[test]
fn valid_file() {
    let (result, reported) = lint(Some(&fixture("valid.avsc")), LintOptions::default());
    result.unwrap();
    assert!(reported.is_empty());
}

#[test]
fn valid_file_twice() {
    let path = fixture("valid.avsc");
    let input = format!(r#"["{path}","{path}"]"#);
    let (result, reported) = lint(Some(&input), LintOptions::default());
    result.unwrap();
    assert!(reported.is_empty());
}

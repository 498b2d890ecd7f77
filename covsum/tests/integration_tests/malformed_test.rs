// tests/integration_tests/malformed_test.rs
use super::common::{setup_report, summarize_output};
use anyhow::Result;
use covsum::{ScanError, summarize};

#[test]
fn test_non_numeric_hit_count_fails() -> Result<()> {
    let (_dir, path) = setup_report(&["SF:a.c", "DA:1,1", "DA:2,lots", "DA:3,1"])?;

    match summarize(&path) {
        Err(ScanError::MalformedRecord { line, field, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(field, "lots");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_empty_hit_count_fails() -> Result<()> {
    let (_dir, path) = setup_report(&["DA:1,"])?;
    assert!(matches!(
        summarize(&path),
        Err(ScanError::MalformedRecord { line: 1, .. })
    ));
    Ok(())
}

#[test]
fn test_error_names_report() -> Result<()> {
    let (_dir, path) = setup_report(&["DA:1,2.5"])?;
    let err = summarize_output(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains(&path.display().to_string()));
    assert!(message.contains("line 1"));
    Ok(())
}

#[test]
fn test_negative_hit_count_is_uncovered() -> Result<()> {
    let (_dir, path) = setup_report(&["DA:1,-1", "DA:2,1"])?;
    assert_eq!(
        summarize_output(&path)?,
        "Total Lines: 2\nCovered Lines: 1\nCoverage: 50.00%\n"
    );
    Ok(())
}

#[test]
fn test_counter_beyond_i64_is_covered() -> Result<()> {
    let (_dir, path) = setup_report(&["DA:1,18446744073709551615"])?;
    assert_eq!(
        summarize_output(&path)?,
        "Total Lines: 1\nCovered Lines: 1\nCoverage: 100.00%\n"
    );
    Ok(())
}

#[test]
fn test_digit_separators_are_accepted() -> Result<()> {
    let (_dir, path) = setup_report(&["DA:1,1_000", "DA:2,0"])?;
    assert_eq!(
        summarize_output(&path)?,
        "Total Lines: 2\nCovered Lines: 1\nCoverage: 50.00%\n"
    );
    Ok(())
}

use deepcmp_core::{compare, from_json_str};

#[test]
fn deepcmp_core_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let expected = from_json_str(r#"{"name": "deepcmp", "version": 1}"#)?;
    let actual = from_json_str(r#"{"name": "deepcmp", "version": 2}"#)?;

    let report = compare(&expected, &actual)?;
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.render(),
        "Differences found: 1. The details are as follows:\n\
         Property 'version' mismatch: Expected '1', but was '2'.\n"
    );
    Ok(())
}

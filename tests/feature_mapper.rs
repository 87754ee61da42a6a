/// Tests for claim field encoding
///
/// Run with: cargo test --test feature_mapper -- --nocapture

use fraud_predictor::features::{INDICATOR_FIELDS, NUMERIC_FIELDS};
use fraud_predictor::{preprocess, FeatureError, FeatureValue, RawClaim, ReferenceTable};
use pretty_assertions::assert_eq;

fn table() -> ReferenceTable {
    [(10001, (40.75, -73.99)), (501, (40.81, -73.04))]
        .into_iter()
        .collect()
}

fn claim() -> RawClaim {
    [
        ("gender", "Male"),
        ("zip_code", "10001"),
        ("annual_income", "50000"),
        ("past_num_of_claims", "2"),
        ("safty_rating", "80"),
        ("age_of_driver", "30"),
        ("claim_est_payout", "5000"),
        ("liab_prct", "50"),
        ("age_of_vehicle", "5"),
        ("vehicle_price", "20000"),
        ("vehicle_weight", "3000"),
        ("marital_status", "Yes"),
        ("high_education_ind", "No"),
        ("address_change_ind", "No"),
        ("witness_present_ind", "No"),
        ("policy_report_filed_ind", "Yes"),
    ]
    .into_iter()
    .collect()
}

fn with(name: &str, value: &str) -> RawClaim {
    let mut c = claim();
    c.fields.insert(name.to_string(), value.to_string());
    c
}

#[test]
fn test_full_claim_encoding() {
    println!("\n=== Test: Full Claim Encoding ===");
    let row = preprocess(claim(), &table()).unwrap();

    assert_eq!(row["gender"], FeatureValue::Text("M".into()));
    assert_eq!(row["latitude"], FeatureValue::Float(40.75));
    assert_eq!(row["longitude"], FeatureValue::Float(-73.99));
    assert_eq!(row["annual_income"], FeatureValue::Int(50000));
    assert_eq!(row["past_num_of_claims"], FeatureValue::Int(2));
    assert_eq!(row["vehicle_weight"], FeatureValue::Int(3000));
    assert_eq!(row["marital_status"], FeatureValue::Int(1));
    assert_eq!(row["high_education_ind"], FeatureValue::Int(0));
    assert_eq!(row["policy_report_filed_ind"], FeatureValue::Int(1));
    assert!(!row.contains_key("zip_code"));

    // 16 inputs - zip_code + latitude + longitude
    assert_eq!(row.len(), 17);
    println!("✓ Encoded {} columns", row.len());
}

#[test]
fn test_gender_collapse() {
    for (input, expected) in [("Male", "M"), ("Female", "F"), ("male", "F"), ("", "F"), ("Other", "F")] {
        let row = preprocess(with("gender", input), &table()).unwrap();
        assert_eq!(row["gender"], FeatureValue::Text(expected.into()), "gender={input:?}");
    }
}

#[test]
fn test_indicator_only_exact_yes() {
    for name in INDICATOR_FIELDS {
        for (input, expected) in [("Yes", 1), ("No", 0), ("", 0), ("yes", 0), ("YES", 0), ("1", 0)] {
            let row = preprocess(with(name, input), &table()).unwrap();
            assert_eq!(row[name], FeatureValue::Int(expected), "{name}={input:?}");
        }
    }
}

#[test]
fn test_numeric_fields_parse_and_reject() {
    for name in NUMERIC_FIELDS {
        let row = preprocess(with(name, "123"), &table()).unwrap();
        assert_eq!(row[name], FeatureValue::Int(123));

        let row = preprocess(with(name, "-7"), &table()).unwrap();
        assert_eq!(row[name], FeatureValue::Int(-7));

        match preprocess(with(name, "abc"), &table()) {
            Err(FeatureError::Parse { field, value, .. }) => {
                assert_eq!(field, name);
                assert_eq!(value, "abc");
            }
            other => panic!("{name}: expected parse error, got {other:?}"),
        }

        assert!(
            matches!(preprocess(with(name, "12.5"), &table()), Err(FeatureError::Parse { .. })),
            "{name}: decimals are not integers"
        );
    }
}

#[test]
fn test_numeric_whitespace_tolerated() {
    let row = preprocess(with("age_of_driver", " 42 "), &table()).unwrap();
    assert_eq!(row["age_of_driver"], FeatureValue::Int(42));
}

#[test]
fn test_zip_lookup_and_leading_zeros() {
    let row = preprocess(with("zip_code", "00501"), &table()).unwrap();
    assert_eq!(row["latitude"], FeatureValue::Float(40.81));
    assert_eq!(row["longitude"], FeatureValue::Float(-73.04));
    assert!(!row.contains_key("zip_code"));
}

#[test]
fn test_unknown_zip_is_lookup_error() {
    let err = preprocess(with("zip_code", "99999"), &table()).unwrap_err();
    assert!(matches!(err, FeatureError::UnknownZip(99999)), "got {err:?}");
}

#[test]
fn test_non_numeric_zip_is_parse_error() {
    let err = preprocess(with("zip_code", "NY"), &table()).unwrap_err();
    assert!(
        matches!(err, FeatureError::Parse { field: "zip_code", .. }),
        "got {err:?}"
    );
}

#[test]
fn test_missing_field() {
    for name in ["gender", "zip_code", "liab_prct", "witness_present_ind"] {
        let mut c = claim();
        c.fields.remove(name);
        match preprocess(c, &table()) {
            Err(FeatureError::MissingField(f)) => assert_eq!(f, name),
            other => panic!("expected missing {name}, got {other:?}"),
        }
    }
}

#[test]
fn test_unlisted_fields_pass_through() {
    let row = preprocess(with("incident_cause", "Rear-end"), &table()).unwrap();
    assert_eq!(row["incident_cause"], FeatureValue::Text("Rear-end".into()));
}

#[test]
fn test_first_duplicate_wins() {
    let raw = RawClaim::from_pairs(vec![
        ("gender".to_string(), "Male".to_string()),
        ("gender".to_string(), "Female".to_string()),
    ]);
    assert_eq!(raw.get("gender"), Some("Male"));
}

#[test]
fn test_values_outside_i64_are_parse_errors() {
    for value in ["99999999999999999999", "1_000"] {
        assert!(
            matches!(
                preprocess(with("annual_income", value), &table()),
                Err(FeatureError::Parse { field: "annual_income", .. })
            ),
            "annual_income={value:?}"
        );
    }
}

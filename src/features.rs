//! Raw form fields -> classifier input row.

use std::collections::HashMap;

use crate::error::FeatureError;
use crate::reference::ReferenceTable;
use crate::types::{EncodedFeatures, FeatureValue, RawClaim};

pub const NUMERIC_FIELDS: [&str; 9] = [
    "annual_income",
    "past_num_of_claims",
    "safty_rating",
    "age_of_driver",
    "claim_est_payout",
    "liab_prct",
    "age_of_vehicle",
    "vehicle_price",
    "vehicle_weight",
];

pub const INDICATOR_FIELDS: [&str; 5] = [
    "marital_status",
    "high_education_ind",
    "address_change_ind",
    "witness_present_ind",
    "policy_report_filed_ind",
];

/// Encode one claim.
///
/// * `gender`: "Male" -> "M", anything else -> "F"
/// * `zip_code`: consumed; replaced by `latitude`/`longitude` from `table`
/// * numeric fields: parsed as integers
/// * indicator fields: "Yes" -> 1, anything else -> 0
///
/// Unlisted fields are copied through as text. The first failure is returned.
pub fn preprocess(raw: RawClaim, table: &ReferenceTable) -> Result<EncodedFeatures, FeatureError> {
    let mut fields = raw.fields;

    let gender = take(&mut fields, "gender")?;
    let gender = if gender == "Male" { "M" } else { "F" };

    let zip_raw = take(&mut fields, "zip_code")?;
    let zip = parse_int("zip_code", zip_raw)?;
    let (latitude, longitude) = table.lookup(zip).ok_or(FeatureError::UnknownZip(zip))?;

    let mut numeric = Vec::with_capacity(NUMERIC_FIELDS.len());
    for name in NUMERIC_FIELDS {
        let value = take(&mut fields, name)?;
        numeric.push((name, parse_int(name, value)?));
    }

    let mut indicators = Vec::with_capacity(INDICATOR_FIELDS.len());
    for name in INDICATOR_FIELDS {
        let value = take(&mut fields, name)?;
        indicators.push((name, i64::from(value == "Yes")));
    }

    // whatever is left passes through untouched
    let mut out: EncodedFeatures = fields
        .into_iter()
        .map(|(k, v)| (k, FeatureValue::Text(v)))
        .collect();
    out.insert("gender".into(), FeatureValue::Text(gender.into()));
    out.insert("latitude".into(), FeatureValue::Float(latitude));
    out.insert("longitude".into(), FeatureValue::Float(longitude));
    for (name, v) in numeric.into_iter().chain(indicators) {
        out.insert(name.into(), FeatureValue::Int(v));
    }
    Ok(out)
}

fn take(
    fields: &mut HashMap<String, String>,
    name: &'static str,
) -> Result<String, FeatureError> {
    fields.remove(name).ok_or(FeatureError::MissingField(name))
}

fn parse_int(field: &'static str, value: String) -> Result<i64, FeatureError> {
    match value.trim().parse::<i64>() {
        Ok(v) => Ok(v),
        Err(source) => Err(FeatureError::Parse {
            field,
            value,
            source,
        }),
    }
}

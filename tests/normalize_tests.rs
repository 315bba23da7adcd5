// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::aggregate::normalize_amount;
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn accepts_plain_numbers() {
    assert_eq!(normalize_amount(&json!(12.5)), "12.5".parse().ok());
    assert_eq!(normalize_amount(&json!(7)), Some(Decimal::from(7)));
}

#[test]
fn accepts_numeric_strings() {
    assert_eq!(normalize_amount(&json!("12.50")), "12.50".parse().ok());
    assert_eq!(normalize_amount(&json!("  3  ")), Some(Decimal::from(3)));
    // exponent notation goes through the float fallback
    assert_eq!(normalize_amount(&json!("1e2")), Some(Decimal::from(100)));
}

#[test]
fn takes_absolute_value_of_signed_amounts() {
    assert_eq!(normalize_amount(&json!(-5)), Some(Decimal::from(5)));
    assert_eq!(normalize_amount(&json!("-7.25")), "7.25".parse().ok());
}

#[test]
fn excludes_zero() {
    assert_eq!(normalize_amount(&json!(0)), None);
    assert_eq!(normalize_amount(&json!("0")), None);
    assert_eq!(normalize_amount(&json!("0.00")), None);
}

#[test]
fn excludes_unparseable_and_non_finite() {
    assert_eq!(normalize_amount(&json!("abc")), None);
    assert_eq!(normalize_amount(&json!("NaN")), None);
    assert_eq!(normalize_amount(&json!("inf")), None);
    assert_eq!(normalize_amount(&json!("")), None);
}

#[test]
fn excludes_non_numeric_json_shapes() {
    assert_eq!(normalize_amount(&json!(null)), None);
    assert_eq!(normalize_amount(&json!(true)), None);
    assert_eq!(normalize_amount(&json!([1, 2])), None);
    assert_eq!(normalize_amount(&json!({"v": 1})), None);
}

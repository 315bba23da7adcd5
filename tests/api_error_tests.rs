// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::api::{error_from_response, ApiError};

#[test]
fn maps_401_to_unauthorized() {
    let err = error_from_response(401, r#"{"detail":"Could not validate credentials"}"#);
    assert!(matches!(err, ApiError::Unauthorized));
}

#[test]
fn maps_rejections_to_validation_with_detail() {
    let err = error_from_response(400, r#"{"detail":"Email already registered"}"#);
    match err {
        ApiError::Validation(msg) => assert_eq!(msg, "Email already registered"),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn maps_422_detail_array_to_validation() {
    let body = r#"{"detail":[{"loc":["body","amount"],"msg":"value is not a valid float"}]}"#;
    let err = error_from_response(422, body);
    match err {
        ApiError::Validation(msg) => assert!(msg.contains("not a valid float")),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn validation_without_body_gets_placeholder() {
    let err = error_from_response(404, "");
    match err {
        ApiError::Validation(msg) => assert_eq!(msg, "request rejected"),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn maps_other_statuses_to_server() {
    let err = error_from_response(500, "boom");
    match err {
        ApiError::Server { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Server, got {:?}", other),
    }
}

#[test]
fn non_json_body_is_passed_through() {
    let err = error_from_response(400, "plain text rejection");
    match err {
        ApiError::Validation(msg) => assert_eq!(msg, "plain text rejection"),
        other => panic!("expected Validation, got {:?}", other),
    }
}

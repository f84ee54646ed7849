// Unit tests for the error type

use super::*;

#[test]
fn test_exit_codes() {
    assert_eq!(WorkerwatchError::MissingUrl.exit_code(), 22);
    assert_eq!(
        WorkerwatchError::RequestFailed("net::ERR_FAILED".to_string()).exit_code(),
        1
    );
    assert_eq!(
        WorkerwatchError::BadStatus {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }
        .exit_code(),
        1
    );
    assert_eq!(
        WorkerwatchError::SelectorMismatch {
            selector: ".inactive".to_string(),
            count: 0,
        }
        .exit_code(),
        1
    );
    assert_eq!(
        WorkerwatchError::CountNotNumeric {
            text: "abc".to_string(),
        }
        .exit_code(),
        1
    );
}

#[test]
fn test_selector_mismatch_message_has_hints() {
    let err = WorkerwatchError::SelectorMismatch {
        selector: ".stats .inactive".to_string(),
        count: 0,
    };
    let message = err.to_string();
    assert!(message.contains("element not found"));
    assert!(message.contains(".stats .inactive"));
    assert!(message.contains("--selector"));
}

#[test]
fn test_parse_error_message_has_hints() {
    let err = WorkerwatchError::CountNotNumeric {
        text: "n/a".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("could not parse a number"));
    assert!(message.contains("n/a"));
    assert!(message.contains("--selector"));
}

#[test]
fn test_bad_status_message() {
    let err = WorkerwatchError::BadStatus {
        status: 301,
        status_text: "Moved Permanently".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "request answered with status 301 Moved Permanently"
    );
}

use signup_probe::availability::extract_suggestions;
use signup_probe::{Availability, AvailabilityResult, FailureKind, ProbeError, classify};

#[test]
fn available_marker_wins_regardless_of_surroundings() {
    for body in [
        r#"{"isAvailable":true}"#,
        r#"{"apiCanary":"x","isAvailable":true,"suggestions":["a"]}"#,
        r#"garbage "isAvailable":true garbage "error""#,
        r#"{"isAvailable":false,"isAvailable":true}"#,
    ] {
        assert_eq!(classify(body).unwrap(), Availability::Available, "body {body}");
    }
}

#[test]
fn taken_with_suggestions_in_source_order() {
    let body = r#"{"isAvailable":false,"suggestions":["a","b"]}"#;
    assert_eq!(
        classify(body).unwrap(),
        Availability::Taken {
            suggestions: vec!["a".into(), "b".into()]
        }
    );
}

#[test]
fn taken_without_suggestions_is_not_an_error() {
    for body in [
        r#"{"isAvailable":false}"#,
        r#"{"isAvailable":false,"suggestions":[]}"#,
        r#"{"isAvailable":false,"suggestions":null}"#,
    ] {
        assert_eq!(
            classify(body).unwrap(),
            Availability::Taken {
                suggestions: vec![]
            },
            "body {body}"
        );
    }
}

#[test]
fn suggestions_tolerate_whitespace() {
    let body = r#"{"isAvailable":false, "suggestions" : [ "one@outlook.com", "two@outlook.com" ]}"#;
    assert_eq!(
        extract_suggestions(body),
        vec!["one@outlook.com".to_string(), "two@outlook.com".to_string()]
    );
}

#[test]
fn error_code_is_the_upstream_reason() {
    let err = classify(r#"{"error":{"code":"InvalidRequest"}}"#).unwrap_err();
    match &err {
        ProbeError::Upstream(code) => assert_eq!(code, "InvalidRequest"),
        other => panic!("expected Upstream error, got {other:?}"),
    }
    assert_eq!(err.reason(), "InvalidRequest");

    let result = AvailabilityResult::from(err);
    assert_eq!(
        result,
        AvailabilityResult::Failed {
            kind: FailureKind::Upstream,
            reason: "InvalidRequest".into()
        }
    );
}

#[test]
fn numeric_error_code_is_extracted() {
    let err = classify(r#"{"error":{"code":1058,"data":"x"}}"#).unwrap_err();
    assert_eq!(err.reason(), "1058");
}

#[test]
fn error_without_code_echoes_the_body() {
    let body = r#"{"error":{"message":"nope"}}"#;
    match classify(body).unwrap_err() {
        ProbeError::Upstream(raw) => assert_eq!(raw, body),
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[test]
fn anything_else_is_unexpected() {
    for body in ["", "<html>blocked</html>", r#"{"isAvailable": true}"#, r#"{"status":"ok"}"#] {
        let err = classify(body).unwrap_err();
        assert!(
            matches!(err, ProbeError::UnexpectedResponse(_)),
            "body {body}: got {err:?}"
        );
    }
}

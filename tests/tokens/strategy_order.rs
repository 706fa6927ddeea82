use signup_probe::tokens::extract::{CANARY_PATTERNS, CORRELATION_PATTERNS};
use signup_probe::{ProbeError, StrategyChain, TryExtract};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
struct Counting {
    value: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

impl TryExtract for Counting {
    fn name(&self) -> &str {
        "counting"
    }

    fn try_extract(&self, _text: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.value.map(str::to_string)
    }
}

#[test]
fn later_strategies_are_not_consulted_after_a_match() {
    let calls: Vec<Arc<AtomicUsize>> = (0..4).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let values = [None, Some("second"), Some("third"), None];

    let chain = values
        .iter()
        .zip(&calls)
        .fold(StrategyChain::default(), |chain, (v, c)| {
            chain.push(Arc::new(Counting {
                value: *v,
                calls: c.clone(),
            }))
        });

    assert_eq!(chain.first_match("anything"), Some((1, "second".to_string())));
    let counts: Vec<usize> = calls.iter().map(|c| c.load(Ordering::SeqCst)).collect();
    assert_eq!(counts, vec![1, 1, 0, 0]);
}

#[test]
fn each_canary_pattern_is_reachable_on_its_own() {
    let chain = StrategyChain::default_canary().unwrap();
    let blobs = [
        (r#"x = {"apiCanary":"first-value"}"#, 0, "first-value"),
        (r#"apiCanary : 'second-value'"#, 1, "second-value"),
        (r#"{canary: "third-value"}"#, 2, "third-value"),
    ];
    for (blob, idx, expected) in blobs {
        assert_eq!(
            chain.first_match(blob),
            Some((idx, expected.to_string())),
            "blob: {blob}"
        );
    }
    assert_eq!(CANARY_PATTERNS.len(), chain.len());
}

#[test]
fn fourth_canary_pattern_matches_when_it_is_first_to_apply() {
    // the third pattern also matches the literal form, so leave it out
    let chain = StrategyChain::from_patterns([CANARY_PATTERNS[0], CANARY_PATTERNS[3]]).unwrap();
    assert_eq!(
        chain.first_match(r#"{"canary":"fourth-value"}"#),
        Some((1, "fourth-value".to_string()))
    );
}

#[test]
fn correlation_patterns_in_order() {
    let chain = StrategyChain::default_correlation().unwrap();
    let blobs = [
        (r#"{"correlationId":"c-one"}"#, 0, "c-one"),
        (r#"correlationId: 'c-two'"#, 1, "c-two"),
        (r#"sUnauthSessionID:"c-three""#, 2, "c-three"),
        (r#"{"uaid":"c-four"}"#, 3, "c-four"),
    ];
    for (blob, idx, expected) in blobs {
        assert_eq!(chain.first_match(blob), Some((idx, expected.to_string())));
    }
    assert_eq!(CORRELATION_PATTERNS.len(), chain.len());
}

#[test]
fn earlier_strategy_wins_when_several_match() {
    let chain = StrategyChain::default_correlation().unwrap();
    let blob = r#"{"uaid":"late","correlationId":"early"}"#;
    assert_eq!(chain.first_match(blob), Some((0, "early".to_string())));
}

#[test]
fn no_match_returns_none() {
    let chain = StrategyChain::default_canary().unwrap();
    assert_eq!(chain.first_match("<html><body>nothing here</body></html>"), None);
}

#[test]
fn pattern_without_capture_group_is_rejected() {
    let err = StrategyChain::from_patterns([r#"apiCanary"#]).unwrap_err();
    assert!(matches!(err, ProbeError::Config(_)), "got {err:?}");

    let err = StrategyChain::from_patterns([r#"apiCanary("#]).unwrap_err();
    assert!(matches!(err, ProbeError::Pattern(_)), "got {err:?}");
}

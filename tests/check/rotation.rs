use crate::common::{API_PATH, BOOTSTRAP_PATH, api_url, bootstrap_url, fixture, setup_server};
use httpmock::Method::{GET, POST};
use signup_probe::{ProbeClient, ProbeError, UserAgentRotation};
use std::collections::HashMap;

#[test]
fn first_pick_is_index_one_and_wraps() {
    let rotation = UserAgentRotation::new(["a", "b", "c"]).unwrap();
    let picks: Vec<&str> = (0..4).map(|_| rotation.next()).collect();
    assert_eq!(picks, ["b", "c", "a", "b"]);
}

#[test]
fn empty_table_is_rejected() {
    let err = UserAgentRotation::new(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ProbeError::Config(_)), "got {err:?}");

    let err = ProbeClient::builder()
        .user_agents(Vec::<String>::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, ProbeError::Config(_)), "got {err:?}");
}

#[test]
fn concurrent_picks_stay_balanced() {
    let rotation = UserAgentRotation::new(["a", "b", "c", "d"]).unwrap();
    let threads = 8;
    let per_thread = 1000;

    let counts = std::thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    let mut seen: HashMap<String, usize> = HashMap::new();
                    for _ in 0..per_thread {
                        *seen.entry(rotation.next().to_string()).or_default() += 1;
                    }
                    seen
                })
            })
            .collect();

        let mut total: HashMap<String, usize> = HashMap::new();
        for h in handles {
            for (k, v) in h.join().unwrap() {
                *total.entry(k).or_default() += v;
            }
        }
        total
    });

    assert_eq!(counts.len(), 4);
    for agent in ["a", "b", "c", "d"] {
        assert_eq!(counts[agent], threads * per_thread / 4, "agent {agent}");
    }
}

#[tokio::test]
async fn consecutive_checks_use_consecutive_identities() {
    let server = setup_server();
    let boot_one = server.mock(|when, then| {
        when.method(GET).path(BOOTSTRAP_PATH).header("user-agent", "ua-1");
        then.status(200).body(fixture("bootstrap_signup.html"));
    });
    let boot_zero = server.mock(|when, then| {
        when.method(GET).path(BOOTSTRAP_PATH).header("user-agent", "ua-0");
        then.status(200).body(fixture("bootstrap_signup.html"));
    });
    let api_one = server.mock(|when, then| {
        when.method(POST).path(API_PATH).header("user-agent", "ua-1");
        then.status(200).body(r#"{"isAvailable":true}"#);
    });
    let api_zero = server.mock(|when, then| {
        when.method(POST).path(API_PATH).header("user-agent", "ua-0");
        then.status(200).body(r#"{"isAvailable":false}"#);
    });

    let client = ProbeClient::builder()
        .bootstrap_url(bootstrap_url(&server))
        .api_url(api_url(&server))
        .user_agents(["ua-0", "ua-1"])
        .build()
        .unwrap();

    let first = client.check("one@outlook.com").await;
    let second = client.clone().check("two@outlook.com").await;

    assert!(first.is_available(), "got {first:?}");
    assert!(second.exists(), "got {second:?}");
    boot_one.assert();
    boot_zero.assert();
    api_one.assert();
    api_zero.assert();
}

#[tokio::test]
async fn concurrent_checks_each_run_their_own_session() {
    let server = setup_server();
    let boot = server.mock(|when, then| {
        when.method(GET).path(BOOTSTRAP_PATH);
        then.status(200)
            .header("set-cookie", "amsc=per-session; Path=/")
            .body(fixture("bootstrap_signup.html"));
    });
    let api = server.mock(|when, then| {
        when.method(POST)
            .path(API_PATH)
            .header("cookie", "amsc=per-session");
        then.status(200).body(r#"{"isAvailable":true}"#);
    });

    let client = ProbeClient::builder()
        .bootstrap_url(bootstrap_url(&server))
        .api_url(api_url(&server))
        .user_agents(["ua-0", "ua-1", "ua-2"])
        .build()
        .unwrap();

    let checks = (0..6).map(|i| {
        let client = client.clone();
        async move { client.check(&format!("user{i}@outlook.com")).await }
    });
    let results = futures::future::join_all(checks).await;

    assert!(results.iter().all(|r| r.is_available()), "{results:?}");
    boot.assert_calls(6);
    api.assert_calls(6);
}

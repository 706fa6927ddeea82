use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue,
    ORIGIN, REFERER,
};

use super::wire::CheckRequest;
use crate::core::client::{
    ACCEPT_ENCODING as ADVERTISED_ENCODINGS, ACCEPT_LANGUAGE as LANGUAGES, PAGE_ID, SIGNUP_ORIGIN,
    Session,
};
use crate::core::{PageSnapshot, ProbeClient, ProbeError};
use crate::tokens::TokenSet;

/// POST the availability query and return the raw (gzip-decoded) response text.
///
/// The status code is not checked; error bodies are classified like any other.
pub(crate) async fn post_check(
    client: &ProbeClient,
    session: &Session,
    snapshot: &PageSnapshot,
    tokens: &TokenSet,
    identifier: &str,
) -> Result<String, ProbeError> {
    let body = serde_json::to_string(&CheckRequest::new(identifier, &tokens.correlation_id))?;
    let headers = api_headers(client, session, snapshot, tokens)?;

    if client.debug() {
        eprintln!(
            "SIGNUP_PROBE_DEBUG [post_check]: url={} correlation_id={} ua=`{}`",
            client.api_url(),
            tokens.correlation_id,
            session.user_agent()
        );
    }

    let resp = session
        .http()
        .post(client.api_url().clone())
        .headers(headers)
        .body(body)
        .send()
        .await?;

    crate::core::net::read_body(resp, client.debug()).await
}

fn api_headers(
    client: &ProbeClient,
    session: &Session,
    snapshot: &PageSnapshot,
    tokens: &TokenSet,
) -> Result<HeaderMap, ProbeError> {
    let mut h = HeaderMap::new();
    h.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(LANGUAGES));
    h.insert(ACCEPT_ENCODING, HeaderValue::from_static(ADVERTISED_ENCODINGS));
    h.insert(ORIGIN, HeaderValue::from_static(SIGNUP_ORIGIN));
    h.insert(REFERER, header_value(client.bootstrap_url().as_str())?);
    h.insert("canary", header_value(&tokens.canary)?);
    let correlation = header_value(&tokens.correlation_id)?;
    h.insert("client-request-id", correlation.clone());
    h.insert("correlationid", correlation);
    h.insert("hpgact", HeaderValue::from_static("0"));
    h.insert("hpgid", HeaderValue::from(PAGE_ID));
    if let Some(cookies) = session.cookie_header(client.api_url(), snapshot) {
        h.insert(COOKIE, header_value(&cookies)?);
    }
    Ok(h)
}

fn header_value(v: &str) -> Result<HeaderValue, ProbeError> {
    HeaderValue::from_str(v)
        .map_err(|e| ProbeError::Config(format!("value not valid in a header: {e}")))
}

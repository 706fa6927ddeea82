//! One check's HTTP session: cookie store, identity, and the bootstrap fetch.

use std::sync::Arc;

use reqwest::Client;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use url::Url;

use super::constants::{ACCEPT_DOCUMENT, ACCEPT_ENCODING as ADVERTISED_ENCODINGS, ACCEPT_LANGUAGE as LANGUAGES};
use crate::core::{ProbeClient, ProbeError};

/// A cookie as returned by the bootstrap response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name as set by the server.
    pub name: String,
    /// Raw cookie value, attributes stripped.
    pub value: String,
}

/// Decompressed bootstrap page plus the cookies that came with it.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// HTTP status of the bootstrap response.
    pub status: u16,
    /// Decoded page text.
    pub body: String,
    /// Cookies set by the response, in header order.
    pub cookies: Vec<SessionCookie>,
}

impl PageSnapshot {
    /// First cookie whose name is one of `names`, checked cookie by cookie.
    pub fn cookie_value(&self, names: &[&str]) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| names.contains(&c.name.as_str()))
            .map(|c| c.value.as_str())
    }
}

/// A fresh HTTP client bound to its own cookie store and identity.
///
/// Created once per check and dropped with it; nothing here is shared between checks.
#[derive(Debug)]
pub(crate) struct Session {
    http: Client,
    jar: Arc<Jar>,
    user_agent: String,
    debug: bool,
}

impl Session {
    pub(crate) fn open(client: &ProbeClient) -> Result<Self, ProbeError> {
        let user_agent = client.rotation().next().to_string();

        let jar = Arc::new(Jar::default());
        let mut httpb = reqwest::Client::builder()
            .user_agent(user_agent.as_str())
            .cookie_provider(jar.clone())
            .timeout(client.timeout());

        if let Some(ct) = client.connect_timeout() {
            httpb = httpb.connect_timeout(ct);
        }

        if client.debug() {
            eprintln!("SIGNUP_PROBE_DEBUG [session]: identity=`{user_agent}`");
        }

        Ok(Self {
            http: httpb.build()?,
            jar,
            user_agent,
            debug: client.debug(),
        })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `Cookie` header for a request to `url`.
    ///
    /// Everything the session's store holds for `url` (redirect hops included), then
    /// any bootstrap response cookie the store did not return, e.g. one scoped to a
    /// narrower path. A name already present is not repeated.
    pub(crate) fn cookie_header(&self, url: &Url, snapshot: &PageSnapshot) -> Option<String> {
        let mut pairs: Vec<String> = self
            .jar
            .cookies(url)
            .and_then(|v| v.to_str().ok().map(str::to_string))
            .map(|v| {
                v.split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        for c in &snapshot.cookies {
            let present = pairs
                .iter()
                .any(|p| p.split_once('=').map_or(p.as_str(), |(name, _)| name) == c.name);
            if !present {
                pairs.push(format!("{}={}", c.name, c.value));
            }
        }

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }

    /// GET the bootstrap page with browser navigation headers.
    ///
    /// Transport, read and gzip failures propagate unchanged; a non-2xx status does not
    /// fail here because the token extraction decides whether the page is usable.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, url), err, fields(url = %url)))]
    pub(crate) async fn bootstrap(&self, url: &Url) -> Result<PageSnapshot, ProbeError> {
        let resp = self
            .http
            .get(url.clone())
            .headers(navigation_headers())
            .send()
            .await?;

        let status = resp.status().as_u16();
        let cookies: Vec<SessionCookie> = resp
            .cookies()
            .map(|c| SessionCookie {
                name: c.name().to_string(),
                value: c.value().to_string(),
            })
            .collect();

        let body = crate::core::net::read_body(resp, self.debug).await?;

        if self.debug {
            eprintln!(
                "SIGNUP_PROBE_DEBUG [bootstrap]: status={status} body.len()={} cookies=[{}]",
                body.len(),
                cookies
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            );
        }

        Ok(PageSnapshot {
            status,
            body,
            cookies,
        })
    }
}

fn navigation_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static(ACCEPT_DOCUMENT));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(LANGUAGES));
    h.insert(ACCEPT_ENCODING, HeaderValue::from_static(ADVERTISED_ENCODINGS));
    h.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    h.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    h.insert("sec-fetch-site", HeaderValue::from_static("none"));
    h.insert("sec-fetch-user", HeaderValue::from_static("?1"));
    h.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));
    h
}

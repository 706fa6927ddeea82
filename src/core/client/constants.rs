//! Centralized constants for default endpoints, identities and protocol values.

/// Query string shared by the bootstrap page and the availability API.
macro_rules! signup_query {
    () => {
        concat!(
            "?sru=https%3a%2f%2flogin.live.com%2foauth20_authorize.srf",
            "%3flc%3d1033",
            "%26client_id%3d9199bf20-a13f-4107-85dc-02114787ef48",
            "%26cobrandid%3dab0455a0-8d03-46b9-b18b-df2f57b9e44c",
            "%26mkt%3dEN-US",
            "%26opid%3dA660A3067066272D",
            "%26opidt%3d1768375361",
            "%26uaid%3d677faeb59376291a72029b0008873e31",
            "%26contextid%3dD9E55480A7490DD6",
            "%26opignore%3d1",
            "&mkt=EN-US",
            "&uiflavor=web",
            "&fl=dob%2cflname%2cwld",
            "&cobrandid=ab0455a0-8d03-46b9-b18b-df2f57b9e44c",
            "&client_id=9199bf20-a13f-4107-85dc-02114787ef48",
            "&uaid=677faeb59376291a72029b0008873e31",
            "&suc=9199bf20-a13f-4107-85dc-02114787ef48",
            "&fluent=2",
            "&lic=1",
        )
    };
}

/// Signup page that sets the session cookies and embeds the canary token.
pub(crate) const DEFAULT_BOOTSTRAP_URL: &str =
    concat!("https://signup.live.com/signup", signup_query!());

/// Availability API; answers with `isAvailable` and optional suggestions.
pub(crate) const DEFAULT_API_URL: &str = concat!(
    "https://signup.live.com/API/CheckAvailableSigninNames",
    signup_query!()
);

/// Static correlation id baked into both URLs above. Never echoed back as a live id.
pub const PLACEHOLDER_CORRELATION_ID: &str = "677faeb59376291a72029b0008873e31";

/// Origin sent with the API call.
pub(crate) const SIGNUP_ORIGIN: &str = "https://signup.live.com";

/// Per transport call, not per check.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Body constants of the availability call.
pub(crate) const UI_FLAVOR: u32 = 1001;
pub(crate) const SCENARIO_ID: u32 = 100118;
pub(crate) const PAGE_ID: u32 = 200225;

/// Advertised on both calls. Only gzip is actually decoded.
pub(crate) const ACCEPT_ENCODING: &str = "gzip, deflate, br, zstd";
pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub(crate) const ACCEPT_DOCUMENT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Cookie names that may carry the canary when the page body does not.
pub(crate) const CANARY_COOKIE_NAMES: [&str; 2] = ["amcanary", "canary"];

/// Default desktop identities, rotated round-robin across checks.
pub(crate) const USER_AGENTS: [&str; 10] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/122.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];

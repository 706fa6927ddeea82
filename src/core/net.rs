use std::io::Read;

use flate2::read::GzDecoder;
use reqwest::header::CONTENT_ENCODING;

use crate::core::ProbeError;

/// Read the response body as text, inflating it when the server declared gzip.
///
/// Any other declared encoding (br, zstd, deflate) is passed through as-is even
/// though the request advertises support for it.
pub(crate) async fn read_body(resp: reqwest::Response, debug: bool) -> Result<String, ProbeError> {
    let encoding = resp
        .headers()
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_lowercase());

    let bytes = resp.bytes().await?;

    if debug {
        eprintln!(
            "SIGNUP_PROBE_DEBUG [read_body]: {} bytes, content-encoding={}",
            bytes.len(),
            encoding.as_deref().unwrap_or("<none>")
        );
    }

    match encoding.as_deref() {
        Some("gzip") => gunzip(&bytes),
        _ => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

pub(crate) fn gunzip(bytes: &[u8]) -> Result<String, ProbeError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() * 4);
    decoder.read_to_end(&mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

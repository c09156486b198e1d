use log::debug;
use url::Url;

/// Fetch the remote code fragment, returning the whole response body.
///
/// Non-success status codes are reported as errors. No timeout is
/// configured; an unresponsive server blocks until the connection
/// itself fails.
pub async fn fetch_code(url: &Url) -> Result<Vec<u8>, reqwest::Error> {
    debug!("GET {url}");
    let response = reqwest::get(url.clone()).await?.error_for_status()?;
    let body = response.bytes().await?;
    debug!("fetched {} bytes", body.len());
    Ok(body.to_vec())
}

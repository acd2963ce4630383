//! Blocking logo download and decode, run off the main thread.

use std::io::Read;
use std::time::Duration;

use super::error::LogoError;

/// HTTP timeout per request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// Larger responses are rejected.
const MAX_LOGO_BYTES: u64 = 10 * 1024 * 1024;
/// Decoded logos are downscaled to at most this width before upload.
const MAX_TEXTURE_WIDTH: u32 = 400;

/// A decoded logo, straight-alpha RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub fn fetch_logo_bytes(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>, LogoError> {
    let response = agent.get(url).call()?;
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_LOGO_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| LogoError::Network(format!("{url}: {e}")))?;
    Ok(bytes)
}

pub fn decode_logo(bytes: &[u8]) -> Result<LogoImage, LogoError> {
    let mut decoded = image::load_from_memory(bytes)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(LogoError::Unexpected("logo image is empty".to_string()));
    }
    if decoded.width() > MAX_TEXTURE_WIDTH {
        decoded = decoded.resize(
            MAX_TEXTURE_WIDTH,
            u32::MAX,
            image::imageops::FilterType::Triangle,
        );
    }

    let rgba = decoded.to_rgba8();
    Ok(LogoImage {
        size: [rgba.width() as usize, rgba.height() as usize],
        rgba: rgba.into_raw(),
    })
}

/// Fetch and decode every URL in order. The first failure aborts the row.
pub fn fetch_logos(urls: &[String]) -> Result<Vec<LogoImage>, LogoError> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    urls.iter()
        .map(|url| fetch_logo_bytes(&agent, url).and_then(|bytes| decode_logo(&bytes)))
        .collect()
}

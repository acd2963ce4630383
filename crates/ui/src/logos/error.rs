use std::fmt;

/// Why the logo row could not be shown. Never fatal.
#[derive(Debug)]
pub enum LogoError {
    /// Request failed, timed out, or returned a non-success status.
    Network(String),
    /// The response body was not a decodable image.
    Decode(image::ImageError),
    /// Anything else that went wrong while preparing the images.
    Unexpected(String),
}

impl LogoError {
    pub fn is_network(&self) -> bool {
        matches!(self, LogoError::Network(_))
    }
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::Network(msg) => write!(f, "{msg}"),
            LogoError::Decode(e) => write!(f, "could not decode image: {e}"),
            LogoError::Unexpected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LogoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogoError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for LogoError {
    fn from(e: image::ImageError) -> Self {
        LogoError::Decode(e)
    }
}

impl From<ureq::Error> for LogoError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, response) => LogoError::Network(format!(
                "{} returned HTTP {code}",
                response.get_url()
            )),
            ureq::Error::Transport(transport) => LogoError::Network(transport.to_string()),
        }
    }
}

use std::fmt;

/// Errors that can occur while turning a chart into a PNG file.
#[derive(Debug)]
pub enum ExportError {
    /// The generated SVG could not be parsed.
    Svg(resvg::usvg::Error),
    /// A raster target of this size could not be allocated.
    Pixmap { width: u32, height: u32 },
    /// PNG encoding failed.
    Encode(png::EncodingError),
    /// Writing the file failed.
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Svg(e) => write!(f, "Chart SVG error: {e}"),
            ExportError::Pixmap { width, height } => {
                write!(f, "Could not allocate a {width}x{height} image")
            }
            ExportError::Encode(e) => write!(f, "PNG encoding error: {e}"),
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Svg(e) => Some(e),
            ExportError::Encode(e) => Some(e),
            ExportError::Io(e) => Some(e),
            ExportError::Pixmap { .. } => None,
        }
    }
}

impl From<resvg::usvg::Error> for ExportError {
    fn from(e: resvg::usvg::Error) -> Self {
        ExportError::Svg(e)
    }
}

impl From<png::EncodingError> for ExportError {
    fn from(e: png::EncodingError) -> Self {
        ExportError::Encode(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

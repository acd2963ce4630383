// ---------------------------------------------------------------------------
// LabelsError: failures loading a label file
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading a [`super::DashboardLabels`] file.
#[derive(Debug)]
pub enum LabelsError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid label JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for LabelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelsError::Io(e) => write!(f, "I/O error: {e}"),
            LabelsError::Parse(e) => write!(f, "Invalid label file: {e}"),
        }
    }
}

impl std::error::Error for LabelsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabelsError::Io(e) => Some(e),
            LabelsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LabelsError {
    fn from(e: std::io::Error) -> Self {
        LabelsError::Io(e)
    }
}

impl From<serde_json::Error> for LabelsError {
    fn from(e: serde_json::Error) -> Self {
        LabelsError::Parse(e)
    }
}

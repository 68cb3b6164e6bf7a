//! Fetch failure taxonomy for catalog requests.

/// User-visible text shown for every fetch failure; transport and parse failures are not
/// distinguished on screen.
pub const GENERIC_FETCH_ERROR_MESSAGE: &str =
    "The catalog service did not respond as expected. Please try again.";

/// Typed error describing why a catalog request did not produce a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    Transport {
        /// Diagnostic detail from the transport.
        message: String,
    },
    /// Upstream answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not the expected JSON shape.
    Decode {
        /// Diagnostic detail from the decoder.
        message: String,
    },
    /// No HTTP transport exists on the active target.
    Unavailable,
}

impl FetchError {
    /// Returns the fixed message surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        GENERIC_FETCH_ERROR_MESSAGE.to_string()
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "catalog transport failed: {message}"),
            Self::Status { status } => write!(f, "catalog responded with status {status}"),
            Self::Decode { message } => write!(f, "catalog response decode failed: {message}"),
            Self::Unavailable => f.write_str("catalog transport unavailable on this target"),
        }
    }
}

impl std::error::Error for FetchError {}

// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Protocol(ProtocolError),
    Image(String),
    InvalidInput(String),
}

/// Failures while interpreting a line received from the host.
///
/// None of these abort the widget: the render path logs them and shows an
/// empty grid until the host sends a usable payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// The line is not a JSON object of the expected shape.
    MalformedMessage(String),

    /// A render message arrived without `args.images`.
    MissingImages,

    /// `args.images` is present but is not an array.
    ImagesNotSequence,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedMessage(msg) => write!(f, "Malformed host message: {}", msg),
            ProtocolError::MissingImages => write!(f, "Render arguments are missing `images`"),
            ProtocolError::ImagesNotSequence => {
                write!(f, "Render argument `images` is not a sequence")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Protocol(e) => write!(f, "Protocol Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::InvalidInput(e) => write!(f, "Invalid input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Error::Protocol(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol(ProtocolError::MalformedMessage(err.to_string()))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

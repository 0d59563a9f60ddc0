use std::fmt;

#[derive(Debug)]
pub enum SfxError {
    InvalidParameter(ParamError),
    Io(std::io::Error),
    Preset(serde_json::Error),
    UnknownPreset(String),
}

/// A sweep parameter that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    SampleRate { value: u32 },
    Duration { value: f64 },
    Frequency { field: &'static str, value: f64 },
    Gain { field: &'static str, value: f64, reason: &'static str },
}

impl ParamError {
    /// The JSON key of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ParamError::SampleRate { .. } => "sampleRate",
            ParamError::Duration { .. } => "duration",
            ParamError::Frequency { field, .. } | ParamError::Gain { field, .. } => field,
        }
    }
}

impl fmt::Display for SfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SfxError::InvalidParameter(e) => write!(f, "Invalid parameter: {e}"),
            SfxError::Io(e) => write!(f, "I/O error: {e}"),
            SfxError::Preset(e) => write!(f, "Preset error: {e}"),
            SfxError::UnknownPreset(name) => write!(f, "Unknown preset '{name}'"),
        }
    }
}

impl std::error::Error for SfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SfxError::InvalidParameter(e) => Some(e),
            SfxError::Io(e) => Some(e),
            SfxError::Preset(e) => Some(e),
            SfxError::UnknownPreset(_) => None,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::SampleRate { value } => write!(f, "sample rate must be > 0, got {value}"),
            ParamError::Duration { value } => {
                write!(f, "duration must be positive and fit in a 16-bit WAV file, got {value}")
            }
            ParamError::Frequency { field, value } => {
                write!(f, "{field} must be a positive frequency in Hz, got {value}")
            }
            ParamError::Gain { field, value, reason } => write!(f, "{field} {reason}, got {value}"),
        }
    }
}

impl std::error::Error for ParamError {}

impl From<ParamError> for SfxError {
    fn from(e: ParamError) -> Self {
        SfxError::InvalidParameter(e)
    }
}

impl From<std::io::Error> for SfxError {
    fn from(e: std::io::Error) -> Self {
        SfxError::Io(e)
    }
}

impl From<serde_json::Error> for SfxError {
    fn from(e: serde_json::Error) -> Self {
        SfxError::Preset(e)
    }
}

impl From<hound::Error> for SfxError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => SfxError::Io(io),
            other => SfxError::Io(std::io::Error::other(other)),
        }
    }
}

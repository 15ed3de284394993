use std::path::PathBuf;

use lustre_engine::paint::ParseColorError;

/// Why a custom gradient string could not be decoded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientFormatError {
    #[error("missing border style")]
    MissingBorder,
    #[error("unknown border style {0:?}")]
    UnknownBorder(String),
    #[error("{0:?} is not a number")]
    BadNumber(String),
    #[error("{0} numbers do not form (position, value) pairs")]
    UnpairedValue(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("gradient {slot}: {source}")]
    Gradient {
        slot: String,
        #[source]
        source: GradientFormatError,
    },
    #[error("{0:?} is not a custom gradient slot")]
    BadSlot(String),
    #[error("custom_shades needs 0 or 6 factors, found {0}")]
    CustomShadeCount(usize),
    #[error("palette: {0}")]
    BadColor(#[from] ParseColorError),
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;

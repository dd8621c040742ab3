//! Error types for dataset loading and grid configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RippleError {
    #[error("Malformed sensor data: {0}")]
    DataFormat(String),

    #[error("Sensor dataset contains no records")]
    EmptyDataset,

    #[error("Invalid grid resolution {0}: at least 2 points per side are required")]
    InvalidResolution(u32),

    #[error("Resolution {requested} outside the supported range {min}..={max}")]
    ResolutionOutOfRange { requested: u32, min: u32, max: u32 },
}

impl From<serde_json::Error> for RippleError {
    fn from(err: serde_json::Error) -> Self {
        RippleError::DataFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RippleError>;

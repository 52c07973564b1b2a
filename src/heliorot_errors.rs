use hifitime::HifitimeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliorotError {
    #[error("Invalid rotation profile: {0} (expected one of: howard, snodgrass, allen)")]
    InvalidRotationProfile(String),

    #[error("Invalid frame time: {0} (expected one of: sidereal, synodic)")]
    InvalidFrameTime(String),

    #[error("Input coordinates must have the same shape: x has {x} elements, y has {y}")]
    ShapeMismatch { x: usize, y: usize },

    #[error("A time window needs a start and an end, or a start and an interval")]
    InsufficientTimeSpecification,

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Time error: {0}")]
    Time(#[from] HifitimeError),
}

impl PartialEq for HeliorotError {
    fn eq(&self, other: &Self) -> bool {
        use HeliorotError::*;
        match (self, other) {
            (InvalidRotationProfile(a), InvalidRotationProfile(b)) => a == b,
            (InvalidFrameTime(a), InvalidFrameTime(b)) => a == b,
            (ShapeMismatch { x: ax, y: ay }, ShapeMismatch { x: bx, y: by }) => {
                ax == bx && ay == by
            }
            (InsufficientTimeSpecification, InsufficientTimeSpecification) => true,
            (UnsupportedMode(a), UnsupportedMode(b)) => a == b,

            // Not comparable: equal when the variant matches
            (Time(_), Time(_)) => true,

            _ => false,
        }
    }
}

use crate::core::photon::{Basis, PhotonState};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("stream length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiftError {
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("symbol {state} is not a member of basis {basis}")]
    ForeignSymbol { state: PhotonState, basis: Basis },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("sifted keys differ in length: {alice} vs {bob}")]
    KeyLengthMismatch { alice: usize, bob: usize },

    #[error("sample of {sample} bits does not fit a sifted key of {key} bits")]
    WindowOutOfRange { sample: usize, key: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("invalid probability: {0}. Must be between 0.0 and 1.0")]
    InvalidProbability(f64),

    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("sifting error: {0}")]
    Sift(#[from] SiftError),

    #[error("verification error: {0}")]
    Verify(#[from] VerifyError),
}

//! Classical symbol-level simulation of the BB84 quantum key distribution
//! protocol: photon preparation, measurement-induced collapse, the
//! intercept-resend attack, basis sifting, and statistical eavesdropper
//! detection. For protocol education and experimentation, not for securing
//! real communication.

mod core;
pub mod protocols;
pub mod report;

pub use crate::core::{
    Basis, Bit, PhotonState, encode_message, errors, measure, measure_message, random_bases,
    random_bits,
};
pub use crate::protocols::bb84::{Bb84Config, Bb84Run, EveRecord};
pub use crate::protocols::qkd::verification::{SampleSplit, Verdict, Verification};

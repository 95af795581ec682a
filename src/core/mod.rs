pub mod errors;
mod measurement;
mod photon;
mod streams;

pub use measurement::{measure, measure_message};
pub use photon::{Basis, Bit, PhotonState};
pub use streams::{encode_message, random_bases, random_bits};

use crate::core::errors::StreamError;
use crate::core::photon::{Basis, Bit, PhotonState};
use rand::Rng;

/// Generates a stream of `n` independent uniform bits.
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Bit> {
    (0..n).map(|_| Bit::random(rng)).collect()
}

/// Generates a stream of `n` independent uniform basis choices.
pub fn random_bases<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Basis> {
    (0..n).map(|_| Basis::random(rng)).collect()
}

/// Encodes a bit stream element-wise into photon symbols.
///
/// # Errors
///
/// Returns [`StreamError::LengthMismatch`] when `bits` and `bases` differ in
/// length.
pub fn encode_message(bits: &[Bit], bases: &[Basis]) -> Result<Vec<PhotonState>, StreamError> {
    if bits.len() != bases.len() {
        return Err(StreamError::LengthMismatch {
            expected: bits.len(),
            got: bases.len(),
        });
    }

    Ok(bits
        .iter()
        .zip(bases)
        .map(|(&bit, &basis)| PhotonState::encode(bit, basis))
        .collect())
}

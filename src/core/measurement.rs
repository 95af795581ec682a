use crate::core::errors::StreamError;
use crate::core::photon::{Basis, Bit, PhotonState};
use rand::Rng;

/// Measures a single photon symbol in `basis`.
///
/// Measuring in the basis the symbol was prepared in is non-disturbing and
/// fully informative: the outcome is the symbol itself. Measuring in the
/// other basis collapses the symbol to a fresh uniform draw between the two
/// symbols of `basis`, independent of the original bit. The collapse is
/// irreversible; no later step can recover the original value.
///
/// Every security property of the protocol derives from this rule.
pub fn measure<R: Rng + ?Sized>(state: PhotonState, basis: Basis, rng: &mut R) -> PhotonState {
    if state.basis() == basis {
        state
    } else {
        PhotonState::encode(Bit::random(rng), basis)
    }
}

/// Measures a full message element-wise against a basis stream.
///
/// # Errors
///
/// Returns [`StreamError::LengthMismatch`] when `message` and `bases` differ
/// in length.
pub fn measure_message<R: Rng + ?Sized>(
    message: &[PhotonState],
    bases: &[Basis],
    rng: &mut R,
) -> Result<Vec<PhotonState>, StreamError> {
    if message.len() != bases.len() {
        return Err(StreamError::LengthMismatch {
            expected: message.len(),
            got: bases.len(),
        });
    }

    Ok(message
        .iter()
        .zip(bases)
        .map(|(&state, &basis)| measure(state, basis, rng))
        .collect())
}

//! Key sifting: basis reconciliation after the quantum phase.
//!
//! Once Alice and Bob publicly reveal their basis streams, both discard every
//! position where the bases disagree. The surviving positions form the raw
//! shared key. Only the two legitimate parties' bases take part; an
//! eavesdropper's basis stream is never revealed.

use crate::core::errors::{SiftError, StreamError};
use crate::core::{Basis, Bit, PhotonState};

fn check_length(expected: usize, got: usize) -> Result<(), StreamError> {
    if expected != got {
        return Err(StreamError::LengthMismatch { expected, got });
    }
    Ok(())
}

/// Builds Alice's sifted key: her original bits at every basis agreement.
///
/// # Errors
///
/// Returns an error when the three inputs do not share one length.
pub fn sift_alice(
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    alice_bits: &[Bit],
) -> Result<Vec<Bit>, SiftError> {
    check_length(alice_bases.len(), bob_bases.len())?;
    check_length(alice_bases.len(), alice_bits.len())?;

    let key = alice_bases
        .iter()
        .zip(bob_bases)
        .zip(alice_bits)
        .filter(|((a, b), _)| a == b)
        .map(|(_, &bit)| bit)
        .collect();

    Ok(key)
}

/// Builds Bob's sifted key: his measured symbols at every basis agreement,
/// decoded in the agreed basis.
///
/// On an agreement position Bob measured in the same basis Alice prepared
/// in, so the decode is well defined. If an eavesdropper perturbed that
/// position the decoded bit may differ from Alice's — that discrepancy is
/// exactly the signal sample verification looks for.
///
/// # Errors
///
/// Returns an error when the three inputs do not share one length, or when a
/// measured symbol does not belong to the basis it was measured in (a
/// contract violation: measurement outcomes always lie in the measuring
/// family).
pub fn sift_bob(
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    bob_measured: &[PhotonState],
) -> Result<Vec<Bit>, SiftError> {
    check_length(alice_bases.len(), bob_bases.len())?;
    check_length(alice_bases.len(), bob_measured.len())?;

    let mut key = Vec::new();
    for ((&a, &b), &state) in alice_bases.iter().zip(bob_bases).zip(bob_measured) {
        if a == b {
            let bit = state
                .decode(b)
                .ok_or(SiftError::ForeignSymbol { state, basis: b })?;
            key.push(bit);
        }
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encode_message;

    use Basis::{Diagonal as D, Rectilinear as R};
    use Bit::{One, Zero};

    #[test]
    fn all_bases_agree_keeps_every_bit() {
        let bits = vec![Zero, One, One, Zero, One, Zero, Zero, One];
        let bases = vec![R, R, D, D, R, D, R, D];
        let encoded = encode_message(&bits, &bases).unwrap();

        assert_eq!(sift_alice(&bases, &bases, &bits).unwrap(), bits);
        assert_eq!(sift_bob(&bases, &bases, &encoded).unwrap(), bits);
    }

    #[test]
    fn no_agreements_yields_empty_keys() {
        let bits = vec![Zero, One, One, Zero];
        let alice_bases = vec![R, R, D, D];
        let bob_bases = vec![D, D, R, R];
        // Bob measured in his own bases, so his symbols lie in his families.
        let measured: Vec<PhotonState> = bob_bases
            .iter()
            .map(|&b| PhotonState::encode(Zero, b))
            .collect();

        assert!(sift_alice(&alice_bases, &bob_bases, &bits).unwrap().is_empty());
        assert!(sift_bob(&alice_bases, &bob_bases, &measured).unwrap().is_empty());
    }

    #[test]
    fn key_length_equals_the_number_of_agreements() {
        let bits = vec![Zero, One, One, Zero, One];
        let alice_bases = vec![R, R, D, D, R];
        let bob_bases = vec![R, D, D, R, R];
        // Agreements at indices 0, 2, 4.
        let key = sift_alice(&alice_bases, &bob_bases, &bits).unwrap();
        assert_eq!(key, vec![Zero, One, One]);
    }

    #[test]
    fn both_sides_produce_keys_of_identical_length() {
        let bits = vec![One, Zero, One, Zero, Zero, One];
        let alice_bases = vec![R, D, R, D, R, D];
        let bob_bases = vec![R, R, R, D, D, D];
        let encoded = encode_message(&bits, &alice_bases).unwrap();
        // A perfect channel: Bob's symbols equal Alice's on agreements. On
        // disagreements substitute a symbol from Bob's family, as a real
        // measurement would produce.
        let measured: Vec<PhotonState> = alice_bases
            .iter()
            .zip(&bob_bases)
            .zip(&encoded)
            .map(|((&a, &b), &s)| if a == b { s } else { PhotonState::encode(One, b) })
            .collect();

        let alice_key = sift_alice(&alice_bases, &bob_bases, &bits).unwrap();
        let bob_key = sift_bob(&alice_bases, &bob_bases, &measured).unwrap();
        assert_eq!(alice_key.len(), bob_key.len());
        assert_eq!(alice_key, bob_key);
    }

    #[test]
    fn mismatched_input_lengths_are_rejected() {
        let bits = vec![Zero; 3];
        let short = vec![R; 2];
        let full = vec![R; 3];
        assert!(matches!(
            sift_alice(&full, &short, &bits),
            Err(SiftError::Stream(StreamError::LengthMismatch { .. }))
        ));
        assert!(matches!(
            sift_bob(&short, &full, &[PhotonState::VerticalBar; 3]),
            Err(SiftError::Stream(StreamError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn foreign_symbol_on_an_agreement_is_a_contract_violation() {
        let alice_bases = vec![R];
        let bob_bases = vec![R];
        // A diagonal symbol claimed to be measured rectilinearly.
        let measured = vec![PhotonState::Slash];
        assert_eq!(
            sift_bob(&alice_bases, &bob_bases, &measured),
            Err(SiftError::ForeignSymbol {
                state: PhotonState::Slash,
                basis: R
            })
        );
    }
}

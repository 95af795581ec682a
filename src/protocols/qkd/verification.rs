//! Sample verification: the public comparison that exposes tampering.
//!
//! Alice and Bob sacrifice a slice of their sifted keys by comparing it in
//! the clear. Under full intercept-resend each sampled position mismatches
//! independently with probability 1/4, so a sample of K bits detects the
//! attack with probability 1 - (3/4)^K. The compared bits are consumed; the
//! rest of the key is retained as the secret.

use crate::core::Bit;
use crate::core::errors::VerifyError;

/// Which slice of the sifted key becomes the public sample.
///
/// The two deployments of this protocol historically disagreed on the
/// convention, so it is an explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleSplit {
    /// Compare the first `sample_size` bits, retain the tail as the key.
    Head,
    /// Compare everything after the first `sample_size` bits, retain the
    /// head as the key.
    #[default]
    Tail,
}

/// The two terminal outcomes of a protocol run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The public samples matched; the retained key is trusted.
    Accepted,
    /// The public samples differed; the channel was tampered with and the
    /// whole key is discarded.
    EavesdropperDetected,
}

/// Outcome of comparing the public samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub verdict: Verdict,
    /// The slice of Alice's key that was spent on the comparison.
    pub alice_sample: Vec<Bit>,
    /// The slice of Bob's key that was spent on the comparison.
    pub bob_sample: Vec<Bit>,
    /// The unspent part of Alice's key. Only trustworthy when the verdict is
    /// [`Verdict::Accepted`].
    pub retained_key: Vec<Bit>,
}

/// Compares the two parties' public samples and splits off the retained key.
///
/// # Errors
///
/// Returns an error when the keys differ in length (they are equal by
/// construction of sifting) or when `sample_size` exceeds the key length.
pub fn verify(
    alice_key: &[Bit],
    bob_key: &[Bit],
    split: SampleSplit,
    sample_size: usize,
) -> Result<Verification, VerifyError> {
    if alice_key.len() != bob_key.len() {
        return Err(VerifyError::KeyLengthMismatch {
            alice: alice_key.len(),
            bob: bob_key.len(),
        });
    }
    if sample_size > alice_key.len() {
        return Err(VerifyError::WindowOutOfRange {
            sample: sample_size,
            key: alice_key.len(),
        });
    }

    let (alice_sample, bob_sample, retained) = match split {
        SampleSplit::Head => (
            &alice_key[..sample_size],
            &bob_key[..sample_size],
            &alice_key[sample_size..],
        ),
        SampleSplit::Tail => (
            &alice_key[sample_size..],
            &bob_key[sample_size..],
            &alice_key[..sample_size],
        ),
    };

    let verdict = if alice_sample == bob_sample {
        Verdict::Accepted
    } else {
        Verdict::EavesdropperDetected
    };

    Ok(Verification {
        verdict,
        alice_sample: alice_sample.to_vec(),
        bob_sample: bob_sample.to_vec(),
        retained_key: retained.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn identical_samples_are_accepted() {
        let key = vec![Zero, One, One, Zero, One];
        let v = verify(&key, &key, SampleSplit::Head, 3).unwrap();
        assert_eq!(v.verdict, Verdict::Accepted);
        assert_eq!(v.alice_sample, vec![Zero, One, One]);
        assert_eq!(v.bob_sample, v.alice_sample);
        assert_eq!(v.retained_key, vec![Zero, One]);
    }

    #[test]
    fn one_differing_bit_in_the_window_is_detected() {
        let alice = vec![Zero, One, One, Zero, One];
        let mut bob = alice.clone();
        bob[1] = Zero;
        let v = verify(&alice, &bob, SampleSplit::Head, 3).unwrap();
        assert_eq!(v.verdict, Verdict::EavesdropperDetected);
    }

    #[test]
    fn a_difference_outside_the_window_goes_unnoticed() {
        let alice = vec![Zero, One, One, Zero, One];
        let mut bob = alice.clone();
        bob[4] = Zero;
        // Statistical test, not a proof: the sample misses this position.
        let v = verify(&alice, &bob, SampleSplit::Head, 3).unwrap();
        assert_eq!(v.verdict, Verdict::Accepted);
    }

    #[test]
    fn tail_split_compares_the_remainder_and_retains_the_head() {
        let alice = vec![Zero, One, One, Zero, One];
        let bob = vec![Zero, Zero, One, Zero, One];
        let v = verify(&alice, &bob, SampleSplit::Tail, 2).unwrap();
        assert_eq!(v.alice_sample, vec![One, Zero, One]);
        assert_eq!(v.bob_sample, vec![One, Zero, One]);
        assert_eq!(v.retained_key, vec![Zero, One]);
        // bob[1] differs but sits in the retained head, not the sample.
        assert_eq!(v.verdict, Verdict::Accepted);
    }

    #[test]
    fn oversized_sample_window_is_rejected() {
        let key = vec![Zero, One];
        assert_eq!(
            verify(&key, &key, SampleSplit::Head, 3),
            Err(VerifyError::WindowOutOfRange { sample: 3, key: 2 })
        );
    }

    #[test]
    fn key_length_mismatch_is_rejected() {
        let alice = vec![Zero, One, One];
        let bob = vec![Zero, One];
        assert_eq!(
            verify(&alice, &bob, SampleSplit::Tail, 1),
            Err(VerifyError::KeyLengthMismatch { alice: 3, bob: 2 })
        );
    }

    #[test]
    fn sample_size_equal_to_key_length_spends_the_whole_key() {
        let key = vec![Zero, One];
        let v = verify(&key, &key, SampleSplit::Head, 2).unwrap();
        assert_eq!(v.alice_sample, key);
        assert!(v.retained_key.is_empty());
        assert_eq!(v.verdict, Verdict::Accepted);
    }
}

//! BB84 Quantum Key Distribution, simulated at the symbol level.
//!
//! One run walks the full protocol: Alice draws random bits and bases and
//! encodes them as photon symbols, an eavesdropper may intercept-resend the
//! message in transit, Bob measures in his own random bases, both parties
//! sift on the publicly revealed bases, and a public sample comparison
//! delivers the verdict.

use crate::core::errors::{ProtocolError, StreamError};
use crate::core::{Basis, Bit, PhotonState};
use crate::core::{encode_message, measure_message, random_bases, random_bits};
use crate::protocols::qkd::sifting::{sift_alice, sift_bob};
use crate::protocols::qkd::verification::{SampleSplit, Verdict, Verification, verify};
use log::debug;
use rand::Rng;

/// Tunable parameters of a protocol run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bb84Config {
    /// Number of photons Alice transmits.
    pub length: usize,
    /// Number of sifted-key bits at the sample boundary.
    pub sample_size: usize,
    /// Which side of the boundary is publicly compared.
    pub sample_split: SampleSplit,
    /// Probability that an eavesdropper intercepts this run.
    pub eve_probability: f64,
}

impl Default for Bb84Config {
    fn default() -> Self {
        Self {
            length: 60,
            sample_size: 10,
            sample_split: SampleSplit::default(),
            eve_probability: 0.5,
        }
    }
}

/// What the eavesdropper did, kept for the transcript only.
///
/// Her basis stream is never revealed to the sifting stage; her effect
/// surfaces purely statistically in the sample comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EveRecord {
    /// The bases Eve guessed for her measurements.
    pub bases: Vec<Basis>,
    /// Her measurement result, forwarded wholesale as the new message.
    pub forwarded: Vec<PhotonState>,
}

/// Complete record of one protocol run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bb84Run {
    pub alice_bits: Vec<Bit>,
    pub alice_bases: Vec<Basis>,
    /// The message as Alice sent it.
    pub encoded: Vec<PhotonState>,
    /// Present when an eavesdropper intercepted this run.
    pub eve: Option<EveRecord>,
    pub bob_bases: Vec<Basis>,
    /// The message as Bob measured it.
    pub bob_measured: Vec<PhotonState>,
    pub alice_key: Vec<Bit>,
    pub bob_key: Vec<Bit>,
    pub verification: Verification,
}

impl Bb84Run {
    pub fn verdict(&self) -> Verdict {
        self.verification.verdict
    }
}

/// Executes one full BB84 run, drawing all randomness from `rng`.
///
/// The phases are strictly sequential and every stream is created fresh for
/// this run; a fixed rng seed reproduces the run bit for bit.
///
/// # Errors
///
/// Returns an error for an out-of-range `eve_probability` or when the sifted
/// key is shorter than `sample_size`. Internal stream lengths agree by
/// construction.
pub fn run<R: Rng + ?Sized>(config: &Bb84Config, rng: &mut R) -> Result<Bb84Run, ProtocolError> {
    validate_prob(config.eve_probability)?;

    let eve_present = rng.random_bool(config.eve_probability);

    // Alice chooses random bits and a random basis for each.
    let alice_bits = random_bits(rng, config.length);
    let alice_bases = random_bases(rng, config.length);
    let encoded = encode_message(&alice_bits, &alice_bases)?;
    debug!("encoded {} photons", encoded.len());

    // In transit the message may be intercepted and resent.
    let eve = if eve_present {
        debug!("eavesdropper intercepts the transmission");
        Some(intercept_resend(&encoded, rng)?)
    } else {
        None
    };
    let in_transit = eve.as_ref().map_or(&encoded, |e| &e.forwarded);

    // Bob measures in his own random bases.
    let bob_bases = random_bases(rng, config.length);
    let bob_measured = measure_message(in_transit, &bob_bases, rng)?;

    // Bases are revealed; both sides sift.
    let alice_key = sift_alice(&alice_bases, &bob_bases, &alice_bits)?;
    let bob_key = sift_bob(&alice_bases, &bob_bases, &bob_measured)?;
    debug!("sifted {} of {} positions", alice_key.len(), config.length);

    let verification = verify(&alice_key, &bob_key, config.sample_split, config.sample_size)?;
    debug!("verdict: {:?}", verification.verdict);

    Ok(Bb84Run {
        alice_bits,
        alice_bases,
        encoded,
        eve,
        bob_bases,
        bob_measured,
        alice_key,
        bob_key,
        verification,
    })
}

/// Full intercept-resend: Eve measures every symbol in a guessed basis and
/// forwards her own outcome to hide herself.
fn intercept_resend<R: Rng + ?Sized>(
    message: &[PhotonState],
    rng: &mut R,
) -> Result<EveRecord, StreamError> {
    let bases = random_bases(rng, message.len());
    let forwarded = measure_message(message, &bases, rng)?;
    Ok(EveRecord { bases, forwarded })
}

/// Validate probability parameter
fn validate_prob(p: f64) -> Result<(), ProtocolError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ProtocolError::InvalidProbability(p));
    }
    Ok(())
}

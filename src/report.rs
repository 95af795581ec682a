//! Human-readable transcript of a finished protocol run.
//!
//! Pure formatting over a [`Bb84Run`]; the transcript is the only external
//! surface of the simulator. One line per protocol phase, in the order the
//! phases happened.

use crate::protocols::bb84::Bb84Run;
use crate::protocols::qkd::verification::Verdict;
use std::fmt::Display;

fn spaced<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn contiguous<T: Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect()
}

/// Renders the full per-phase transcript of a run.
pub fn render(run: &Bb84Run) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Alice's stream of bits : \t{}\n",
        spaced(&run.alice_bits)
    ));
    out.push_str(&format!(
        "Alice's bases is : \t\t{}\n",
        spaced(&run.alice_bases)
    ));
    out.push('\n');

    out.push_str(&format!(
        "Encoded Message is : \t\t{}\n",
        spaced(&run.encoded)
    ));
    out.push('\n');

    if let Some(eve) = &run.eve {
        out.push_str("There is an eavesdropper.\n");
        out.push_str(&format!("Eve's bases is : \t\t{}\n", spaced(&eve.bases)));
        out.push_str(&format!(
            "Measure Message is : \t\t{}\n",
            spaced(&eve.forwarded)
        ));
        out.push('\n');
    }

    out.push_str(&format!("Bob's bases is : \t\t{}\n", spaced(&run.bob_bases)));
    out.push_str(&format!(
        "Measure Message is : \t\t{}\n",
        spaced(&run.bob_measured)
    ));
    out.push('\n');

    out.push_str("Alice shares the bases she used to Bob.\n");
    out.push_str("Bob shares the bases he used to Alice.\n");
    out.push('\n');

    out.push_str(&format!(
        "Alice's key is : \t\t{}\n",
        contiguous(&run.alice_key)
    ));
    out.push_str(&format!("Bob's key is : \t\t\t{}\n", contiguous(&run.bob_key)));
    out.push('\n');

    out.push_str(&format!(
        "Bob's sample : \t\t{}\n",
        contiguous(&run.verification.bob_sample)
    ));
    out.push_str(&format!(
        "Alice's sample : \t{}\n",
        contiguous(&run.verification.alice_sample)
    ));
    out.push('\n');

    match run.verdict() {
        Verdict::Accepted => out.push_str("Transmission successful\n"),
        Verdict::EavesdropperDetected => {
            out.push_str("There is an eavesdropper existed.\n");
            out.push_str("Transmission failed\n");
        }
    }

    out
}

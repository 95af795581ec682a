use rand::Rng;
use std::fmt;

/// A single classical key bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Draws a uniformly random bit from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Bit::from(rng.random_bool(0.5))
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> u8 {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Bit {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// One of the two conjugate polarization bases of BB84.
///
/// A state prepared in one basis yields a fully random outcome when measured
/// in the other; see [`measure`](crate::measure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// Z basis -> {"|", "-"}.
    Rectilinear,
    /// X basis -> {"/", "\\"}.
    Diagonal,
}

impl Basis {
    /// Draws a uniformly random basis from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Basis::Rectilinear
        } else {
            Basis::Diagonal
        }
    }
}

impl fmt::Display for Basis {
    /// Polarizer glyphs used in the transcript: `+` for rectilinear, `x` for diagonal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Basis::Rectilinear => '+',
            Basis::Diagonal => 'x',
        };
        write!(f, "{glyph}")
    }
}

/// The four polarization symbols a transmitted photon can carry.
///
/// Each symbol belongs to exactly one basis family, and within a family the
/// mapping to a bit is a bijection: rectilinear 0 and 1 are `|` and `-`,
/// diagonal 0 and 1 are `/` and `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotonState {
    /// `|` — rectilinear 0.
    VerticalBar,
    /// `-` — rectilinear 1.
    HorizontalBar,
    /// `/` — diagonal 0.
    Slash,
    /// `\` — diagonal 1.
    Backslash,
}

impl PhotonState {
    /// Prepares the photon symbol for `bit` in `basis`.
    ///
    /// Total and deterministic; this is the only way a symbol enters the
    /// system, so invalid symbol states cannot be constructed.
    pub fn encode(bit: Bit, basis: Basis) -> PhotonState {
        match (basis, bit) {
            (Basis::Rectilinear, Bit::Zero) => PhotonState::VerticalBar,
            (Basis::Rectilinear, Bit::One) => PhotonState::HorizontalBar,
            (Basis::Diagonal, Bit::Zero) => PhotonState::Slash,
            (Basis::Diagonal, Bit::One) => PhotonState::Backslash,
        }
    }

    /// The basis family this symbol belongs to.
    pub fn basis(self) -> Basis {
        match self {
            PhotonState::VerticalBar | PhotonState::HorizontalBar => Basis::Rectilinear,
            PhotonState::Slash | PhotonState::Backslash => Basis::Diagonal,
        }
    }

    /// Reads the symbol back as a bit in `basis`.
    ///
    /// Returns `None` when the symbol does not belong to `basis`: outside its
    /// own family a symbol has no well-defined bit value.
    pub fn decode(self, basis: Basis) -> Option<Bit> {
        match (basis, self) {
            (Basis::Rectilinear, PhotonState::VerticalBar) => Some(Bit::Zero),
            (Basis::Rectilinear, PhotonState::HorizontalBar) => Some(Bit::One),
            (Basis::Diagonal, PhotonState::Slash) => Some(Bit::Zero),
            (Basis::Diagonal, PhotonState::Backslash) => Some(Bit::One),
            _ => None,
        }
    }
}

impl fmt::Display for PhotonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            PhotonState::VerticalBar => '|',
            PhotonState::HorizontalBar => '-',
            PhotonState::Slash => '/',
            PhotonState::Backslash => '\\',
        };
        write!(f, "{glyph}")
    }
}

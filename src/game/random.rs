//! # Serve Directions
//!
//! Source of the coin flips that pick serve directions.

use rand::{Rng, RngCore};

/// Supplies the pseudo-random choices made when the ball is served.
///
/// Every `rand` generator is a source. Tests can use [`SequenceSource`]
/// to script the exact outcome of each flip.
pub trait DirectionSource {
    /// Returns `true` or `false` with equal odds.
    fn coin_flip(&mut self) -> bool;

    /// Returns `1.0` on a winning flip and `-1.0` otherwise.
    fn sign(&mut self) -> f32 {
        if self.coin_flip() {
            1.0
        } else {
            -1.0
        }
    }
}

impl<R: RngCore> DirectionSource for R {
    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Deterministic source that replays a fixed list of flips, cycling when exhausted.
///
/// An empty list always flips `true`.
///
/// # Examples
///
/// ```
/// use pong::{DirectionSource, SequenceSource};
///
/// let mut source = SequenceSource::new([true, false]);
/// assert_eq!(source.sign(), 1.0);
/// assert_eq!(source.sign(), -1.0);
/// assert_eq!(source.sign(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    flips: Vec<bool>,
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source replaying `flips` in order.
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of flips handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl DirectionSource for SequenceSource {
    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            self.cursor += 1;
            return true;
        }
        let flip = self.flips[self.cursor % self.flips.len()];
        self.cursor += 1;
        flip
    }
}

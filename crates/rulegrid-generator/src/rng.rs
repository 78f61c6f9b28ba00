use rulegrid_core::fingerprint::rolling_hash;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
/// 2^32, the modulus of the recurrence.
const MODULUS: f64 = 4_294_967_296.0;

/// Deterministic pseudo-random stream seeded from a string.
///
/// The state starts as the absolute value of the seed's rolling hash and
/// advances with `state = (state * 1664525 + 1013904223) mod 2^32`. Draws are
/// `state / 2^32`, so identical seeds yield identical sequences on every
/// platform. The stream is not cryptographically secure.
///
/// # Examples
///
/// ```
/// use rulegrid_generator::SeededRng;
///
/// let mut a = SeededRng::new("seed");
/// let mut b = SeededRng::new("seed");
/// assert_eq!(a.next_f64(), b.next_f64());
///
/// let x = a.next_f64();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Creates a stream from a string seed.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self {
            state: rolling_hash(seed).unsigned_abs(),
        }
    }

    /// Returns the next draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // u32 wraparound is the mod 2^32 of the recurrence.
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }

    /// Returns `floor(next_f64() * bound)`, an index in `0..bound`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let index = (self.next_f64() * bound as f64).floor() as usize;
        index
    }

    /// Shuffles `items` in place with a Fisher–Yates pass from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

//! Mulberry32 seeded pseudo-random generator
//!
//! A tiny 32-bit generator whose output depends only on the seed, so every
//! player derives the same puzzle without talking to a server. All
//! arithmetic wraps at 32 bits.

const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the normalisation divisor for [`Mulberry32::next_f64`]
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Deterministic number stream from a 32-bit seed
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a signed 32-bit seed
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self {
            state: seed as u32,
        }
    }

    /// Advance the state and return the next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    ///
    /// # Examples
    /// ```
    /// use piramit::engine::Mulberry32;
    ///
    /// let mut a = Mulberry32::new(7);
    /// let mut b = Mulberry32::new(7);
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Next index in `0..len`, computed as `floor(next_f64() * len)`
    ///
    /// # Panics
    /// Panics in debug mode if `len == 0`
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot draw an index from an empty range");
        // Both factors are < 2^53, so the product is exact before flooring
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

//! Decode-ways counting for digit strings under `a=1 .. z=26`.
//!
//! Layers are positions `1..n` of the string; the frontier is the pair
//! `(two_back, one_back)` of decoding counts for the prefixes ending two and
//! one positions back. Both start at 1 (empty prefix, first character).
//!
//! A leading `'0'` can never be consumed by a `1..=9` or `10..=26` token, so
//! such strings have no decodings. Non-digit characters contribute nothing;
//! [`DecodeWays::try_new`] rejects them instead.

use crate::engine::SweepEngine;
use crate::error::AlgoError;
use crate::traits::RollingDp;

/// Decode-ways instance over the bytes of a borrowed string.
#[derive(Clone, Copy, Debug)]
pub struct DecodeWays<'a> {
    digits: &'a [u8],
}

impl<'a> DecodeWays<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            digits: s.as_bytes(),
        }
    }

    /// Wrap `s` after checking that every character is a decimal digit.
    pub fn try_new(s: &'a str) -> Result<Self, AlgoError> {
        if let Some((index, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(AlgoError::InvalidDigit { index, found });
        }
        Ok(Self::new(s))
    }

    fn digit(&self, i: usize) -> Option<u8> {
        self.digits
            .get(i)
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
    }

    fn single(&self, i: usize) -> Option<u8> {
        self.digit(i).filter(|d| (1..=9).contains(d))
    }

    fn pair(&self, i: usize) -> Option<u8> {
        let hi = self.digit(i)?;
        let lo = self.digit(i + 1)?;
        Some(hi * 10 + lo).filter(|v| (10..=26).contains(v))
    }

    /// False for the empty string and strings not starting with `1..=9`.
    fn decodable_start(&self) -> bool {
        self.single(0).is_some()
    }

    /// Number of ways to decode the whole string.
    pub fn count(&self) -> u128 {
        if !self.decodable_start() {
            return 0;
        }
        SweepEngine::new(*self).run()
    }

    /// The full `dp[0..=n]` array, `dp[i]` counting decodings of the first
    /// `i` characters. Empty when the string has no decodable start.
    pub fn table(&self) -> Vec<u128> {
        if !self.decodable_start() {
            return Vec::new();
        }
        let (_, frontiers) = SweepEngine::new(*self).run_with_table();
        let mut dp = Vec::with_capacity(frontiers.len() + 1);
        dp.push(frontiers[0].0);
        dp.extend(frontiers.iter().map(|&(_, one_back)| one_back));
        dp
    }

    /// Every decoding as a lowercase string, one-digit tokens explored first.
    ///
    /// Exponential in the worst case; meant for short diagnostic inputs.
    pub fn all(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.decodable_start() {
            return out;
        }
        let mut current = String::with_capacity(self.digits.len());
        self.branch(0, &mut current, &mut out);
        out
    }

    fn branch(&self, index: usize, current: &mut String, out: &mut Vec<String>) {
        if index == self.digits.len() {
            out.push(current.clone());
            return;
        }
        if let Some(d) = self.single(index) {
            current.push(letter(d));
            self.branch(index + 1, current, out);
            current.pop();
        }
        if let Some(v) = self.pair(index) {
            current.push(letter(v));
            self.branch(index + 2, current, out);
            current.pop();
        }
    }
}

fn letter(value: u8) -> char {
    char::from(b'a' + value - 1)
}

impl RollingDp for DecodeWays<'_> {
    type Frontier = (u128, u128);
    type Output = u128;

    fn num_layers(&self) -> usize {
        self.digits.len().saturating_sub(1)
    }

    fn init_frontier(&self) -> Self::Frontier {
        (1, 1)
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier) {
        let i = layer + 1;
        let (two_back, one_back) = *prev;
        let mut current = 0u128;
        if self.single(i).is_some() {
            current = current.saturating_add(one_back);
        }
        if self.pair(i - 1).is_some() {
            current = current.saturating_add(two_back);
        }
        *next = (one_back, current);
    }

    fn extract(&self, frontier_t: &Self::Frontier) -> Self::Output {
        frontier_t.1
    }
}

/// Number of ways to decode `s` with `1 -> a, ..., 26 -> z`.
///
/// Returns 0 for the empty string and for any string starting with `'0'`.
/// O(n) time, O(1) space.
///
/// ```
/// use algo_drills::problems::decode_ways::num_decodings;
///
/// assert_eq!(num_decodings("226"), 3);
/// assert_eq!(num_decodings("06"), 0);
/// ```
pub fn num_decodings(s: &str) -> u128 {
    DecodeWays::new(s).count()
}

/// The `dp[0..=n]` prefix-count array behind [`num_decodings`].
pub fn decode_table(s: &str) -> Vec<u128> {
    DecodeWays::new(s).table()
}

/// Every decoding of `s`, in one-digit-first order.
pub fn all_decodings(s: &str) -> Vec<String> {
    DecodeWays::new(s).all()
}

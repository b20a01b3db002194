//! Prime enumeration: a bounded Sieve of Eratosthenes and an unbounded
//! prime stream.
//!
//! The sieve marks multiples of every surviving `i <= ⌊√n⌋`, starting at
//! `i²`, then collects what is left. O(n log log n) time, O(n) space.
//!
//! [`Primes`] needs no bound: it keeps the primes found so far and the next
//! candidate, and trial-divides each candidate by stored primes up to its
//! square root. Each call to `next` yields exactly one prime.

use crate::utils::isqrt;

/// All primes strictly below `n`, ascending. Empty for `n <= 2`.
///
/// ```
/// use algo_drills::problems::sieve::sieve;
///
/// assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(sieve(2).is_empty());
/// ```
pub fn sieve(n: usize) -> Vec<usize> {
    if n <= 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; n];
    is_prime[0] = false;
    is_prime[1] = false;

    let limit = isqrt(n as u64) as usize;
    for i in 2..=limit {
        if is_prime[i] {
            for j in (i * i..n).step_by(i) {
                is_prime[j] = false;
            }
        }
    }

    collect_marked(&is_prime)
}

fn collect_marked(is_prime: &[bool]) -> Vec<usize> {
    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| p.then_some(i))
        .collect()
}

/// One marking pass of the sieve: the multiples `prime` newly crossed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SieveStep {
    pub prime: usize,
    pub marked: Vec<usize>,
}

/// Result of [`sieve_with_steps`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SieveTrace {
    pub primes: Vec<usize>,
    pub steps: Vec<SieveStep>,
}

/// [`sieve`] that also records which composites each prime crossed out.
///
/// A composite is attributed to the first (smallest) prime that reaches it;
/// primes that cross out nothing new are omitted from `steps`.
pub fn sieve_with_steps(n: usize) -> SieveTrace {
    if n <= 2 {
        return SieveTrace {
            primes: Vec::new(),
            steps: Vec::new(),
        };
    }
    let mut is_prime = vec![true; n];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut steps = Vec::new();
    let limit = isqrt(n as u64) as usize;
    for i in 2..=limit {
        if !is_prime[i] {
            continue;
        }
        let mut marked = Vec::new();
        for j in (i * i..n).step_by(i) {
            if is_prime[j] {
                is_prime[j] = false;
                marked.push(j);
            }
        }
        if !marked.is_empty() {
            steps.push(SieveStep { prime: i, marked });
        }
    }

    SieveTrace {
        primes: collect_marked(&is_prime),
        steps,
    }
}

/// Unbounded, lazily evaluated stream of primes: 2, 3, 5, 7, ...
///
/// The stream is not restartable; create a new `Primes` to start over.
///
/// ```
/// use algo_drills::problems::sieve::Primes;
///
/// let first: Vec<u64> = Primes::new().take(5).collect();
/// assert_eq!(first, vec![2, 3, 5, 7, 11]);
/// ```
#[derive(Clone, Debug)]
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Self {
            found: Vec::new(),
            candidate: 2,
        }
    }

    /// Primes yielded so far, ascending.
    pub fn found(&self) -> &[u64] {
        &self.found
    }

    fn is_prime(&self, candidate: u64) -> bool {
        let limit = isqrt(candidate);
        self.found
            .iter()
            .take_while(|&&p| p <= limit)
            .all(|&p| candidate % p != 0)
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.candidate;
            self.candidate = candidate.checked_add(1)?;
            if self.is_prime(candidate) {
                self.found.push(candidate);
                return Some(candidate);
            }
        }
    }
}

/// The first `k` primes.
pub fn first_primes(k: usize) -> Vec<u64> {
    Primes::new().take(k).collect()
}

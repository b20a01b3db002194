//! Assorted utilities and helpers.

/// Integer floor square root: the largest `r` with `r * r <= n`.
///
/// Used by the sieve to bound the marking loop and by the prime stream to
/// stop trial division early. Corrects the `f64` estimate so the result is
/// exact for every `u64`.
#[inline]
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// Number of unordered pairs among `k` items, C(k, 2).
#[inline]
pub fn pairs(k: u64) -> u64 {
    k * k.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::{isqrt, pairs};

    #[test]
    fn small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
        assert_eq!(isqrt(101), 10);
    }

    #[test]
    fn exact_near_u64_max() {
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        let r = 3_037_000_499u64;
        assert_eq!(isqrt(r * r), r);
        assert_eq!(isqrt(r * r - 1), r - 1);
    }

    #[test]
    fn monotonic_non_decreasing() {
        let mut prev = 0;
        for n in 0..5_000 {
            let r = isqrt(n);
            assert!(r >= prev, "isqrt decreased at n={n}: {r} < {prev}");
            assert!(r * r <= n && (r + 1) * (r + 1) > n);
            prev = r;
        }
    }

    #[test]
    fn pair_counts() {
        assert_eq!(pairs(0), 0);
        assert_eq!(pairs(1), 0);
        assert_eq!(pairs(2), 1);
        assert_eq!(pairs(3), 3);
        assert_eq!(pairs(4), 6);
    }
}

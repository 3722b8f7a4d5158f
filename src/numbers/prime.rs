/// Reports whether `n` is prime, i.e. has exactly two positive divisors.
///
/// Anything below 2 (zero and all negatives included) is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // Remaining candidates are of the form 6k ± 1.
    let mut d: i64 = 5;
    while let Some(square) = d.checked_mul(d) {
        if square > n {
            break;
        }
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_two_is_never_prime() {
        for n in [i64::MIN, -19, -2, -1, 0, 1] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
    }

    #[test]
    fn test_small_primes() {
        for p in [2, 3, 5, 7, 11, 13, 17, 19] {
            assert!(is_prime(p), "{} should be prime", p);
        }
    }

    #[test]
    fn test_small_composites() {
        for c in [4, 6, 8, 9, 10, 15, 21, 25, 35, 49] {
            assert!(!is_prime(c), "{} should be composite", c);
        }
    }

    #[test]
    fn test_matches_naive_divisor_count() {
        let naive = |n: i64| n >= 2 && (2..n).all(|d| n % d != 0);
        for n in -5..500 {
            assert_eq!(is_prime(n), naive(n), "mismatch at {}", n);
        }
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(2_147_483_647 * 3));
        // Square of a prime: the loop must test d == sqrt(n).
        assert!(!is_prime(1_000_003 * 1_000_003));
    }

    #[test]
    fn test_i64_max() {
        // 2^63 - 1 = 7^2 * 73 * 127 * 337 * 92737 * 649657
        assert!(!is_prime(i64::MAX));
    }
}

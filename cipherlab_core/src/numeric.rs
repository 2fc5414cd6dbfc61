//! Shared integer kernel: modular arithmetic, the extended Euclidean
//! algorithm, and bounded random generation.
//!
//! Everything operates on `i64` with `i128` intermediates where products
//! could overflow, which is plenty for the textbook parameter sizes this
//! crate targets.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// True mathematical remainder, always in `[0, modulus)`.
///
/// Unlike the `%` operator this never returns a negative value for a
/// negative `value`.
pub fn modulo(value: i64, modulus: i64) -> i64 {
    let mut v = value % modulus;
    if v < 0 {
        v += modulus;
    }
    v
}

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// The exponent must be non-negative. The result is in `[0, modulus)`.
pub fn modular_exponentiation(base: i64, exponent: i64, modulus: i64) -> i64 {
    debug_assert!(exponent >= 0, "exponent must be non-negative");
    debug_assert!(modulus > 0, "modulus must be positive");
    let m = modulus as i128;
    let mut result: i128 = 1 % m;
    let mut factor = modulo(base, modulus) as i128;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * factor % m;
        }
        factor = factor * factor % m;
        remaining >>= 1;
    }
    result as i64
}

/// Extended Euclidean algorithm.
///
/// Returns `(gcd, x, y)` such that `a*x + b*y == gcd`.
pub fn extended_euclidean(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (gcd, x, y) = extended_euclidean(b, a % b);
        (gcd, y, x - (a / b) * y)
    }
}

/// Modular multiplicative inverse of `a` modulo `m`, in `[0, m)`.
///
/// The result satisfies `a * x ≡ 1 (mod m)` only when `gcd(a, m) == 1`;
/// for non-coprime inputs the returned value is meaningless. Callers own
/// that precondition.
pub fn modular_multiplicative_inverse(a: i64, m: i64) -> i64 {
    let (_, x, _) = extended_euclidean(a, m);
    modulo(x, m)
}

/// Draws `size` independent uniform integers from `[min, max)`.
///
/// No determinism guarantee; pass a seeded RNG for reproducible output.
/// Not suitable for production key generation.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, size: usize, min: i64, max: i64) -> Vec<i64> {
    let dist = Uniform::from(min..max);
    (0..size).map(|_| dist.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn modulo_handles_negative_dividends() {
        assert_eq!(modulo(-1, 26), 25);
        assert_eq!(modulo(-27, 26), 25);
        assert_eq!(modulo(-26, 26), 0);
        assert_eq!(modulo(40, 26), 14);
    }

    #[test]
    fn modular_exponentiation_known_values() {
        assert_eq!(modular_exponentiation(5, 6, 23), 8);
        assert_eq!(modular_exponentiation(5, 15, 23), 19);
        assert_eq!(modular_exponentiation(65, 17, 3233), 2790);
        assert_eq!(modular_exponentiation(7, 0, 13), 1);
        assert_eq!(modular_exponentiation(0, 5, 13), 0);
    }

    #[test]
    fn modular_exponentiation_reduces_negative_bases() {
        assert_eq!(
            modular_exponentiation(-2, 3, 7),
            modular_exponentiation(5, 3, 7)
        );
    }

    #[test]
    fn extended_euclidean_bezout_identity() {
        for &(a, b) in &[(240, 46), (17, 3120), (35, 64), (1, 1)] {
            let (gcd, x, y) = extended_euclidean(a, b);
            assert_eq!(a * x + b * y, gcd);
            assert_eq!(a % gcd, 0);
            assert_eq!(b % gcd, 0);
        }
    }

    #[test]
    fn inverse_round_trips_through_multiplication() {
        let inv = modular_multiplicative_inverse(17, 3120);
        assert_eq!(inv, 2753);
        assert_eq!(modulo(17 * inv, 3120), 1);

        let inv = modular_multiplicative_inverse(7, 20);
        assert_eq!(modulo(7 * inv, 20), 1);
    }

    #[test]
    fn random_in_range_respects_bounds() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let values = random_in_range(&mut rng, 256, 65, 91);
        assert_eq!(values.len(), 256);
        assert!(values.iter().all(|&v| (65..91).contains(&v)));
    }
}

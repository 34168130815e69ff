//! Random number generation service.
//!
//! Business logic for the `/random` endpoint, kept out of the HTTP
//! layer so it can be unit tested without a server.

use rand::Rng;

/// Generate a random number with no range limits.
///
/// Samples a base fraction in [0, 1), scales it by a random power of
/// ten and flips the sign half the time, so results span many orders
/// of magnitude in both directions. The result is always finite: the
/// magnitude is bounded by 10^10.
pub fn generate_random_number() -> f64 {
    let mut rng = rand::thread_rng();

    let base: f64 = rng.gen();
    let exponent = rng.gen_range(-10..=10);
    let scaled = base * 10f64.powi(exponent);

    if rng.gen_bool(0.5) {
        -scaled
    } else {
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_numbers_are_finite() {
        for _ in 0..1000 {
            let n = generate_random_number();
            assert!(n.is_finite(), "expected finite value, got {}", n);
            assert!(n.abs() < 1e11, "magnitude out of bounds: {}", n);
        }
    }

    #[test]
    fn generated_numbers_vary() {
        let first = generate_random_number();
        let varied = (0..100)
            .map(|_| generate_random_number())
            .any(|n| n != first);
        assert!(varied, "100 draws produced a constant value");
    }
}

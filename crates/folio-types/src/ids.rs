//! Thread and message id generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::SmallRng, Rng, SeedableRng};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generate a random id suitable for threads and messages.
///
/// Prefers OS randomness; when that is unavailable it degrades silently to
/// a v4-shaped id drawn from a time-seeded PRNG. This operation cannot fail.
pub fn generate() -> String {
    let mut bytes = [0u8; 16];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string();
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0);
    v4_shaped(&mut SmallRng::seed_from_u64(seed))
}

/// Fill the UUID v4 template with random hex digits.
///
/// The version digit is fixed to `4` and the variant digit is constrained
/// to `{8, 9, a, b}` per the v4 layout.
pub fn v4_shaped<R: Rng>(rng: &mut R) -> String {
    "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx"
        .chars()
        .map(|c| match c {
            'x' => HEX[rng.gen_range(0..16usize)] as char,
            'y' => HEX[rng.gen_range(8..12usize)] as char,
            other => other,
        })
        .collect()
}

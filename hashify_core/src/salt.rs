//! Random salt generation

use rand::Rng;

/// Number of random bytes in a generated salt
pub const SALT_BYTES: usize = 16;

/// Generate a random salt as 32 lowercase hex characters
pub fn generate_salt() -> String {
    generate_salt_with(&mut rand::rng())
}

/// Generate a salt from a caller-supplied RNG
pub fn generate_salt_with<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rng.fill(&mut bytes[..]);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_salt_shape() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_BYTES * 2);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_seeded_salt_is_reproducible() {
        let first = generate_salt_with(&mut StdRng::seed_from_u64(42));
        let second = generate_salt_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_salts_differ_between_calls() {
        assert_ne!(generate_salt(), generate_salt());
    }
}

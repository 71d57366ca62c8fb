//! Opaque entry identifiers
//!
//! Ids exist only to give entries a stable key for update/remove operations.
//! They are short random base-36 strings, not cryptographic and not
//! guaranteed globally unique; collision within one session is treated as
//! astronomically unlikely rather than impossible.

use rand::Rng;

const ID_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh entry id (`_` followed by 9 base-36 characters)
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::with_capacity(ID_LEN + 1);
    id.push('_');
    for _ in 0..ID_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        id.push(ALPHABET[idx] as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 10);
        assert!(id.starts_with('_'));
        assert!(id[1..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_ids_differ() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }
}

//! Const evaluation utilities

/// Number of hexadecimal digits in a key.
pub const KEY_DIGITS: usize = 16;

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Extract nibble N (0-15) from 64-bit FNV-1a hash
/// Used for token stream generation from operator text
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}

/// Hexadecimal digit `n` of `value`, most significant first.
///
/// `key_digit(v, 0)` is bits 60..64, `key_digit(v, 15)` is bits 0..4.
pub const fn key_digit(value: u64, n: usize) -> u8 {
    let shift = (KEY_DIGITS - 1 - n) * 4;
    ((value >> shift) & 0xF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_digit_order() {
        let v = 0x0123_4567_89ab_cdef;
        assert_eq!(key_digit(v, 0), 0x0);
        assert_eq!(key_digit(v, 1), 0x1);
        assert_eq!(key_digit(v, 10), 0xa);
        assert_eq!(key_digit(v, 15), 0xf);
    }

    #[test]
    fn test_key_digit_small() {
        // 48 = 0x30
        assert_eq!(key_digit(48, 14), 3);
        assert_eq!(key_digit(48, 15), 0);
        assert_eq!(key_digit(48, 0), 0);
    }

    #[test]
    fn test_fnv_distinguishes_operators() {
        assert_ne!(fnv1a_64_str("<="), fnv1a_64_str("<"));
        assert_ne!(fnv1a_64_str("=="), fnv1a_64_str("!="));
        assert_eq!(fnv1a_64_str(">="), fnv1a_64_str(">="));
    }

    #[test]
    fn test_hash_nibble_is_low_first() {
        let hash = fnv1a_64_str("<=");
        assert_eq!(hash_nibble("<=", 0) as u64, hash & 0xF);
        assert_eq!(hash_nibble("<=", 15) as u64, hash >> 60);
    }
}

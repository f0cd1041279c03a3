//! Non-cryptographic password checksum.
//!
//! This is NOT a security boundary: the value is a 32-bit string fold, trivial
//! to collide or brute force. It exists so the admin password is not stored as
//! plain text and so values written by earlier versions of the site still
//! verify. Swap in a salted KDF behind `CredentialStore` if that ever matters.

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Folds UTF-16 code units with `hash = hash * 31 + unit` in wrapping 32-bit
/// signed arithmetic and renders the result in base 36 (leading `-` when
/// negative).
pub fn simple_hash(input: &str) -> String {
    let hash = input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32));
    to_base36(hash)
}

fn to_base36(value: i32) -> String {
    // i64 so that i32::MIN has a representable magnitude
    let mut magnitude = (value as i64).unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(BASE36_DIGITS[(magnitude % 36) as usize]);
        magnitude /= 36;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_previously_stored_values() {
        assert_eq!(simple_hash(""), "0");
        assert_eq!(simple_hash("a"), "2p");
        assert_eq!(simple_hash("abcd"), "1s0ua");
        assert_eq!(simple_hash("password"), "k4k87v");
    }

    #[test]
    fn overflow_wraps_to_negative() {
        assert_eq!(simple_hash("nextlevel2024"), "-qw21an");
    }

    #[test]
    fn neighbouring_inputs_differ() {
        assert_ne!(simple_hash("abcd"), simple_hash("abce"));
    }

    #[test]
    fn base36_handles_extremes() {
        assert_eq!(to_base36(i32::MAX), "zik0zj");
        assert_eq!(to_base36(i32::MIN), "-zik0zk");
    }
}

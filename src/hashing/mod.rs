use blake3::Hasher;

/// Computes an order-independent 32-byte key for an unordered word pair.
///
/// The two words are sorted before hashing and separated by a length prefix,
/// so `hash_pair(a, b) == hash_pair(b, a)` while `("ab", "c")` and `("a", "bc")`
/// still produce different keys.
#[inline]
pub fn hash_pair(first: &str, second: &str) -> [u8; 32] {
    let (lo, hi) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };

    let mut hasher = Hasher::new();
    hasher.update(&(lo.len() as u64).to_le_bytes());
    hasher.update(lo.as_bytes());
    hasher.update(hi.as_bytes());
    *hasher.finalize().as_bytes()
}

/// Renders a key as lowercase hex, for logs.
pub fn key_hex(key: &[u8; 32]) -> String {
    blake3::Hash::from_bytes(*key).to_hex().to_string()
}

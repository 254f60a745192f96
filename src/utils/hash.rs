//! Content hashing using blake3.
//!
//! ```ignore
//! let h = hash::compute("some content"); // -> u64
//! ```

/// Compute a 64-bit hash from byte data (first 8 bytes of the blake3 digest).
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let hash = blake3::hash(data.as_ref());
    let bytes = hash.as_bytes();
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

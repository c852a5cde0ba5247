const FNV_32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_32_PRIME: u32 = 0x0100_0193;

const FNV_64_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1, 32-bit: multiply by the FNV prime, then xor in each byte.
///
/// Not interchangeable with [`fnv1a_32`] (which xors before multiplying).
/// Consumers rely on bit-exact values for cache keys and partitioning, so
/// the variant must never be swapped. Empty input returns the offset basis
/// unchanged.
#[must_use]
pub fn fnv1_32(data: &[u8]) -> u32 {
    let mut hash = FNV_32_OFFSET_BASIS;
    for &byte in data {
        hash = hash.wrapping_mul(FNV_32_PRIME);
        hash ^= u32::from(byte);
    }
    hash
}

/// FNV-1a, 32-bit: xor in each byte, then multiply by the FNV prime.
#[must_use]
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hash = FNV_32_OFFSET_BASIS;
    for &byte in data {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_32_PRIME);
    }
    hash
}

/// FNV-1, 64-bit.
#[must_use]
pub fn fnv1_64(data: &[u8]) -> u64 {
    let mut hash = FNV_64_OFFSET_BASIS;
    for &byte in data {
        hash = hash.wrapping_mul(FNV_64_PRIME);
        hash ^= u64::from(byte);
    }
    hash
}

/// FNV-1a, 64-bit.
#[must_use]
pub fn fnv1a_64(data: &[u8]) -> u64 {
    let mut hash = FNV_64_OFFSET_BASIS;
    for &byte in data {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_64_PRIME);
    }
    hash
}

//! Integer hash - folds a string seed into the PRNG's 32-bit state

/// 32-bit FNV offset basis
pub const OFFSET_BASIS: u32 = 0x811C_9DC5;

/// Hash `seed` one UTF-16 code unit at a time (FNV-1a, 32-bit).
///
/// The multiply by the FNV prime is spelled out as the shift-add chain
/// `n + (n<<1) + (n<<4) + (n<<7) + (n<<8) + (n<<24)`, wrapping at 32 bits.
pub fn seed_to_int(seed: &str) -> u32 {
    seed.encode_utf16().fold(OFFSET_BASIS, |n, unit| {
        let n = n ^ u32::from(unit);
        n.wrapping_add(n << 1)
            .wrapping_add(n << 4)
            .wrapping_add(n << 7)
            .wrapping_add(n << 8)
            .wrapping_add(n << 24)
    })
}

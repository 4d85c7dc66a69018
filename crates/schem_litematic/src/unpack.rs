//! Bit-packed block state arrays.
//!
//! Litematica stores one palette index per block in a `TAG_Long_Array`. Every
//! index uses the same number of bits and indices are packed back to back,
//! least significant bit first, so an index can start near the top of one
//! word and finish in the low bits of the next.

/// Number of bits used for every index of a palette with `palette_size` entries.
///
/// This is the bit length of the largest index, but never less than 2.
pub fn bits_per_block(palette_size: usize) -> u32 {
    let largest = palette_size.saturating_sub(1);
    (usize::BITS - largest.leading_zeros()).max(2)
}

fn low_mask(bits: u32) -> u64 {
    1u64.checked_shl(bits).map_or(u64::MAX, |v| v - 1)
}

/// Unpack `volume` palette indices from `words`.
///
/// Words are reinterpreted as `u64` before shifting so a set sign bit never
/// leaks into the result. Indices past the end of `words` come back as `0`;
/// the output always has exactly `volume` entries.
pub fn unpack(words: &[i64], palette_size: usize, volume: usize) -> Vec<u64> {
    let bits = bits_per_block(palette_size);
    let mask = low_mask(bits);

    (0..volume)
        .map(|i| {
            let bit_index = i as u64 * bits as u64;
            let long_index = (bit_index / 64) as usize;
            let bit_offset = (bit_index % 64) as u32;

            let Some(&word) = words.get(long_index) else {
                return 0;
            };

            let mut value = ((word as u64) >> bit_offset) & mask;

            if bit_offset + bits > 64 {
                if let Some(&next) = words.get(long_index + 1) {
                    let bits_in_next = bit_offset + bits - 64;
                    value |= ((next as u64) & low_mask(bits_in_next)) << (bits - bits_in_next);
                }
            }

            value & mask
        })
        .collect()
}

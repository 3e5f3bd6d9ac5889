//! Border extrapolation for neighbourhood operations.

/// Maps a possibly out-of-range coordinate back into `0..len` by mirroring
/// around the edge pixels without repeating them (`gfedcb|abcdefgh|gfedcba`).
pub fn reflect_101(index: i64, len: u32) -> u32 {
    let len = len as i64;
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let mut i = index.rem_euclid(period);
    if i >= len {
        i = period - i;
    }
    return i as u32;
}

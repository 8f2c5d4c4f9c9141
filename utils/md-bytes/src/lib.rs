#![no_std]

/// Write a u32 into a vector, which must be 4 bytes long. The value is
/// written in big-endian format.
pub fn write_u32_be(dst: &mut [u8], input: u32) {
    assert!(dst.len() == 4);
    dst.copy_from_slice(&input.to_be_bytes());
}

/// Write a u32 into a vector, which must be 4 bytes long. The value is
/// written in little-endian format.
pub fn write_u32_le(dst: &mut [u8], input: u32) {
    assert!(dst.len() == 4);
    dst.copy_from_slice(&input.to_le_bytes());
}

/// Write a vector of u32s into a vector of bytes. The values are written in
/// big-endian format.
pub fn write_u32v_be(dst: &mut [u8], input: &[u32]) {
    assert!(dst.len() == 4 * input.len());
    for (chunk, &v) in dst.chunks_exact_mut(4).zip(input) {
        chunk.copy_from_slice(&v.to_be_bytes());
    }
}

/// Write a vector of u32s into a vector of bytes. The values are written in
/// little-endian format.
pub fn write_u32v_le(dst: &mut [u8], input: &[u32]) {
    assert!(dst.len() == 4 * input.len());
    for (chunk, &v) in dst.chunks_exact_mut(4).zip(input) {
        chunk.copy_from_slice(&v.to_le_bytes());
    }
}

/// Read a vector of bytes into a vector of u32s. The values are read in
/// big-endian format.
pub fn read_u32v_be(dst: &mut [u32], input: &[u8]) {
    assert!(4 * dst.len() == input.len());
    for (v, chunk) in dst.iter_mut().zip(input.chunks_exact(4)) {
        *v = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Read a vector of bytes into a vector of u32s. The values are read in
/// little-endian format.
pub fn read_u32v_le(dst: &mut [u32], input: &[u8]) {
    assert!(4 * dst.len() == input.len());
    for (v, chunk) in dst.iter_mut().zip(input.chunks_exact(4)) {
        *v = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Copy bytes from src to dst. dst must be at least as long as src.
pub fn copy_memory(src: &[u8], dst: &mut [u8]) {
    assert!(dst.len() >= src.len());
    dst[..src.len()].copy_from_slice(src);
}

/// Zero all bytes in dst.
pub fn zero(dst: &mut [u8]) {
    for b in dst.iter_mut() {
        *b = 0;
    }
}

/// Add the given number of input bytes to a running bit count. Message
/// lengths are measured in bits modulo 2^64, so the count wraps on overflow.
pub fn add_bytes_to_bits(bits: u64, bytes: u64) -> u64 {
    bits.wrapping_add(bytes << 3)
}

#[cfg(test)]
mod tests;

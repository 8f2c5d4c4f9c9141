/// The length of a SHA-1 state array, in 32 bit words.
pub const STATE_LEN: usize = 5;

/// The length of a SHA-1 message block, in 32 bit words.
pub const BLOCK_LEN: usize = 16;

pub const K0: u32 = 0x5A827999;
pub const K1: u32 = 0x6ED9EBA1;
pub const K2: u32 = 0x8F1BBCDC;
pub const K3: u32 = 0xCA62C1D6;

/// The SHA-1 initial hash value.
pub const H: [u32; STATE_LEN] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

//! An implementation of the SHA-1 cryptographic hash algorithm.
//!
//! First create a `Sha1` object using the `Sha1` constructor, then feed it
//! input using the `input` method, which may be called any number of times.
//! Input bytes are buffered until a whole 64 byte block is available, so
//! splitting a message across calls never changes the digest.
//!
//! After the entire input has been fed to the hash, read the result using
//! the `result` method. `result` consumes the instance and scrubs the
//! intermediate state from memory once the digest has been extracted.

#![no_std]
extern crate generic_array;
extern crate zeroize;
extern crate md_bytes;
extern crate md_buffer;
extern crate md_digest;
#[cfg(test)]
#[macro_use]
extern crate md_tests;

use generic_array::GenericArray;
use generic_array::typenum::U20;
use zeroize::Zeroize;
use md_bytes::{add_bytes_to_bits, read_u32v_be, write_u32_be, write_u32v_be};
use md_buffer::{FixedBuffer, FixedBuffer64, StandardPadding};
use md_digest::Digest;

mod consts;
use consts::{H, K0, K1, K2, K3};
pub use consts::{STATE_LEN, BLOCK_LEN};

/// Process a block with the SHA-1 algorithm. `state` holds the five word
/// accumulator and `block` one 64 byte message block as sixteen big-endian
/// words.
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN],
                             block: &[u32; BLOCK_LEN]) {
    fn ch(x: u32, y: u32, z: u32) -> u32 { (x & (y ^ z)) ^ z }

    fn parity(x: u32, y: u32, z: u32) -> u32 { x ^ y ^ z }

    fn maj(x: u32, y: u32, z: u32) -> u32 { (x & (y | z)) | (y & z) }

    fn round(a: u32, e: u32, f: u32, k: u32, w: u32) -> u32 {
        a.rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w)
    }

    let mut w = [0u32; 80];
    w[..BLOCK_LEN].copy_from_slice(block);
    for t in BLOCK_LEN..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    // rounds 0 - 19
    for t in 0..20 {
        let tmp = round(a, e, ch(b, c, d), K0, w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    // rounds 20 - 39
    for t in 20..40 {
        let tmp = round(a, e, parity(b, c, d), K1, w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    // rounds 40 - 59
    for t in 40..60 {
        let tmp = round(a, e, maj(b, c, d), K2, w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    // rounds 60 - 79
    for t in 60..80 {
        let tmp = round(a, e, parity(b, c, d), K3, w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a block with the SHA-1 algorithm, reading the block from
/// big-endian bytes.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_LEN * 4);
    let mut block2 = [0u32; BLOCK_LEN];
    read_u32v_be(&mut block2[..], block);
    sha1_digest_block_u32(state, &block2);
}

/// A structure that represents the state of a digest computation for the
/// SHA-1 digest function
#[derive(Clone)]
struct Sha1State {
    h: [u32; STATE_LEN],
}

impl Sha1State {
    fn new() -> Sha1State { Sha1State { h: H } }

    fn process_block(&mut self, data: &[u8]) {
        sha1_digest_block(&mut self.h, data);
    }
}

/// The SHA-1 digest algorithm
#[derive(Clone)]
pub struct Sha1 {
    length_bits: u64,
    buffer: FixedBuffer64,
    state: Sha1State,
}

impl Sha1 {
    /// Construct a new instance of the SHA-1 digest.
    pub fn new() -> Sha1 {
        Sha1 {
            length_bits: 0,
            buffer: FixedBuffer64::new(),
            state: Sha1State::new(),
        }
    }

    fn finish(&mut self) {
        let self_state = &mut self.state;
        self.buffer.standard_padding(8, |d: &[u8]| {
            self_state.process_block(d);
        });
        write_u32_be(self.buffer.next(4), (self.length_bits >> 32) as u32);
        write_u32_be(self.buffer.next(4), self.length_bits as u32);
        self_state.process_block(self.buffer.full_buffer());
    }
}

impl Default for Sha1 {
    fn default() -> Self { Self::new() }
}

impl Zeroize for Sha1 {
    fn zeroize(&mut self) {
        self.length_bits.zeroize();
        self.buffer.zeroize();
        self.state.h.zeroize();
    }
}

impl Digest for Sha1 {
    type OutputSize = U20;

    fn input(&mut self, input: &[u8]) {
        // The message length is measured in bits modulo 2^64.
        self.length_bits = add_bytes_to_bits(self.length_bits,
                                             input.len() as u64);
        let self_state = &mut self.state;
        self.buffer.input(input, |d: &[u8]| {
            self_state.process_block(d);
        });
    }

    fn result(mut self) -> GenericArray<u8, U20> {
        self.finish();

        let mut out = GenericArray::default();
        write_u32v_be(&mut out, &self.state.h);
        self.zeroize();
        out
    }

    fn block_size(&self) -> usize { 64 }
}

#[cfg(test)]
mod tests;

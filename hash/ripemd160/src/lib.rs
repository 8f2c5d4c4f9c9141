//! An implementation of the RIPEMD-160 cryptographic hash.
//!
//! First create a `Ripemd160` object using the `Ripemd160` constructor,
//! then feed it input using the `input` method, which may be called any
//! number of times.
//!
//! After the entire input has been fed to the hash, read the result using
//! the `result` method. `result` consumes the object and scrubs the
//! intermediate state from memory.

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
use md_bytes::{write_u32_le, read_u32v_le, add_bytes_to_bits};
use md_buffer::{FixedBuffer, FixedBuffer64, StandardPadding};
use md_digest::Digest;

mod consts;
use consts::{H, KL, KR, RL, RR, SL, SR};

// Some unexported constants
const DIGEST_BUF_LEN: usize = 5;
const WORK_BUF_LEN: usize = 16;

fn process_msg_block(data: &[u8], h: &mut [u32; DIGEST_BUF_LEN]) {
    // The five selection functions, cycled through in order on the left
    // line and in reverse order on the right line.
    fn f(j: usize, x: u32, y: u32, z: u32) -> u32 {
        match j / 16 {
            0 => x ^ y ^ z,
            1 => (x & y) | (!x & z),
            2 => (x | !y) ^ z,
            3 => (x & z) | (y & !z),
            _ => x ^ (y | !z),
        }
    }

    let mut w = [0u32; WORK_BUF_LEN];
    read_u32v_le(&mut w[0..16], data);

    // Both lines start from the current chaining value
    let (mut a1, mut b1, mut c1, mut d1, mut e1) =
        (h[0], h[1], h[2], h[3], h[4]);
    let (mut a2, mut b2, mut c2, mut d2, mut e2) =
        (h[0], h[1], h[2], h[3], h[4]);

    for j in 0..80 {
        // left line
        let t = a1.wrapping_add(f(j, b1, c1, d1))
            .wrapping_add(w[RL[j]])
            .wrapping_add(KL[j / 16])
            .rotate_left(SL[j])
            .wrapping_add(e1);
        a1 = e1;
        e1 = d1;
        d1 = c1.rotate_left(10);
        c1 = b1;
        b1 = t;

        // right line
        let t = a2.wrapping_add(f(79 - j, b2, c2, d2))
            .wrapping_add(w[RR[j]])
            .wrapping_add(KR[j / 16])
            .rotate_left(SR[j])
            .wrapping_add(e2);
        a2 = e2;
        e2 = d2;
        d2 = c2.rotate_left(10);
        c2 = b2;
        b2 = t;
    }

    // Combine results
    let t = h[1].wrapping_add(c1).wrapping_add(d2);
    h[1] = h[2].wrapping_add(d1).wrapping_add(e2);
    h[2] = h[3].wrapping_add(e1).wrapping_add(a2);
    h[3] = h[4].wrapping_add(a1).wrapping_add(b2);
    h[4] = h[0].wrapping_add(b1).wrapping_add(c2);
    h[0] = t;
}

/// Structure representing the state of a Ripemd160 computation
#[derive(Clone)]
pub struct Ripemd160 {
    h: [u32; DIGEST_BUF_LEN],
    length_bits: u64,
    buffer: FixedBuffer64,
}

impl Ripemd160 {
    /// Construct a `Ripemd160` object
    pub fn new() -> Ripemd160 {
        Ripemd160 {
            h: H,
            length_bits: 0,
            buffer: FixedBuffer64::new(),
        }
    }

    fn finish(&mut self) {
        let st_h = &mut self.h;
        self.buffer.standard_padding(8, |d: &[u8]| {
            process_msg_block(d, &mut *st_h);
        });
        write_u32_le(self.buffer.next(4), self.length_bits as u32);
        write_u32_le(self.buffer.next(4), (self.length_bits >> 32) as u32);
        process_msg_block(self.buffer.full_buffer(), st_h);
    }
}

impl Default for Ripemd160 {
    fn default() -> Self { Self::new() }
}

impl Zeroize for Ripemd160 {
    fn zeroize(&mut self) {
        self.h.zeroize();
        self.length_bits.zeroize();
        self.buffer.zeroize();
    }
}

impl Digest for Ripemd160 {
    type OutputSize = U20;

    /// Adds the input `msg` to the hash. This method can be called
    /// repeatedly for use with streaming messages.
    fn input(&mut self, msg: &[u8]) {
        // The message length is measured in bits modulo 2^64.
        self.length_bits = add_bytes_to_bits(self.length_bits,
                                             msg.len() as u64);
        let st_h = &mut self.h;
        self.buffer.input(msg, |d: &[u8]| {
            process_msg_block(d, &mut *st_h);
        });
    }

    /// Returns the resulting digest of the entire message.
    fn result(mut self) -> GenericArray<u8, U20> {
        self.finish();

        let mut out = GenericArray::default();
        write_u32_le(&mut out[0..4], self.h[0]);
        write_u32_le(&mut out[4..8], self.h[1]);
        write_u32_le(&mut out[8..12], self.h[2]);
        write_u32_le(&mut out[12..16], self.h[3]);
        write_u32_le(&mut out[16..20], self.h[4]);
        self.zeroize();
        out
    }

    /// Returns the block size the hash operates on in bytes
    fn block_size(&self) -> usize { 64 }
}

#[cfg(test)]
mod tests;

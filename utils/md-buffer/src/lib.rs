#![no_std]
extern crate md_bytes;
extern crate zeroize;

use md_bytes::{copy_memory, zero};
use zeroize::Zeroize;

/// A `FixedBuffer` is a fixed size buffer that accumulates input until a
/// whole block is available. The input() method processes and then clears
/// the buffer automatically whenever it fills up. The other methods leave
/// processing to the caller. Any method that hands out bytes of the buffer
/// marks those bytes as used.
pub trait FixedBuffer {
    /// Input a vector of bytes. If the buffer becomes full, process it with
    /// the provided function and then clear the buffer.
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], func: F);

    /// Zero the buffer up until the specified index. The buffer position
    /// currently must not be greater than that index.
    fn zero_until(&mut self, idx: usize);

    /// Get a slice of the buffer of the specified size. There must be at
    /// least that many bytes remaining in the buffer.
    fn next(&mut self, len: usize) -> &mut [u8];

    /// Get the current buffer. The buffer must already be full. This clears
    /// the buffer as well.
    fn full_buffer(&mut self) -> &[u8];

    /// Get the current position of the buffer.
    fn position(&self) -> usize;

    /// Get the number of bytes remaining in the buffer until it is full.
    fn remaining(&self) -> usize;

    /// Get the size of the buffer
    fn size(&self) -> usize;
}

/// A fixed size buffer of 64 bytes useful for cryptographic operations.
#[derive(Clone)]
pub struct FixedBuffer64 {
    buffer: [u8; 64],
    buffer_idx: usize,
}

impl FixedBuffer64 {
    /// Create a new buffer
    pub fn new() -> FixedBuffer64 {
        FixedBuffer64 {
            buffer: [0u8; 64],
            buffer_idx: 0,
        }
    }
}

impl Default for FixedBuffer64 {
    fn default() -> Self { Self::new() }
}

impl Zeroize for FixedBuffer64 {
    fn zeroize(&mut self) {
        self.buffer.zeroize();
        self.buffer_idx.zeroize();
    }
}

impl FixedBuffer for FixedBuffer64 {
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], mut func: F) {
        let mut i = 0;
        let size = self.buffer.len();

        // If there is already data in the buffer, copy as much as we can
        // into it and process the data if the buffer becomes full.
        if self.buffer_idx != 0 {
            let buffer_remaining = size - self.buffer_idx;
            if input.len() >= buffer_remaining {
                copy_memory(&input[..buffer_remaining],
                            &mut self.buffer[self.buffer_idx..size]);
                self.buffer_idx = 0;
                func(&self.buffer);
                i += buffer_remaining;
            } else {
                copy_memory(input,
                            &mut self.buffer[self.buffer_idx..][..input.len()]);
                self.buffer_idx += input.len();
                return;
            }
        }

        // While at least a full block's worth of data remains, process it
        // directly without copying it into the buffer.
        while input.len() - i >= size {
            func(&input[i..i + size]);
            i += size;
        }

        // Stash whatever is left in the buffer. At this point the leftover
        // is shorter than a block and the buffer is empty.
        let input_remaining = input.len() - i;
        copy_memory(&input[i..], &mut self.buffer[0..input_remaining]);
        self.buffer_idx += input_remaining;
    }

    fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx);
        zero(&mut self.buffer[self.buffer_idx..idx]);
        self.buffer_idx = idx;
    }

    fn next(&mut self, len: usize) -> &mut [u8] {
        self.buffer_idx += len;
        &mut self.buffer[self.buffer_idx - len..self.buffer_idx]
    }

    fn full_buffer(&mut self) -> &[u8] {
        assert!(self.buffer_idx == self.buffer.len());
        self.buffer_idx = 0;
        &self.buffer[..]
    }

    fn position(&self) -> usize { self.buffer_idx }

    fn remaining(&self) -> usize { self.buffer.len() - self.buffer_idx }

    fn size(&self) -> usize { self.buffer.len() }
}

/// The `StandardPadding` trait adds a method useful for various hash
/// algorithms to a `FixedBuffer` struct.
pub trait StandardPadding {
    /// Add standard padding to the buffer. The buffer must not be full when
    /// this method is called and is guaranteed to have exactly rem remaining
    /// bytes when it returns. If there are not at least rem bytes available,
    /// the buffer will be zero padded, processed, cleared, and then filled
    /// with zeros again until only rem bytes are remaining.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F);
}

impl<T: FixedBuffer> StandardPadding for T {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        let size = self.size();

        self.next(1)[0] = 128;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
        }

        self.zero_until(size - rem);
    }
}

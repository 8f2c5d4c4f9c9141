use std::iter::repeat;
use md_digest::Digest;
use rand::Rng;

/// Feed 1,000,000 'a's into the digest with varying input sizes and check
/// that the result is correct.
pub fn one_million_random<D: Digest>(blocksize: usize, expected: &[u8]) {
    let total_size = 1000000;
    let buffer: Vec<u8> = repeat(b'a').take(blocksize * 2).collect();
    let mut rng = rand::thread_rng();
    let mut count = 0;

    let mut sh = D::new();

    while count < total_size {
        let next = rng.gen_range(0..=2 * blocksize);
        let remaining = total_size - count;
        let size = if next > remaining { remaining } else { next };
        sh.input(&buffer[..size]);
        count += size;
    }

    let out = sh.result();
    assert_eq!(out[..], expected[..]);
}

use super::Sha1;
use md_digest::Digest;
use md_tests::hash::{Test, main_test, one_million_a};

#[test]
fn sha1_main() {
    // Test messages from FIPS 180-1 and wikipedia
    let tests = new_tests!("test1", "test2", "test3", "test4", "test5");
    main_test::<Sha1>(&tests);
}

#[test]
fn sha1_boundary_lengths() {
    // Runs of 'a' whose lengths land on either side of the padding and
    // block boundaries
    let tests = new_tests!("boundary55", "boundary56", "boundary57",
                           "boundary63", "boundary64", "boundary65",
                           "boundary119", "boundary120", "boundary121");
    main_test::<Sha1>(&tests);
}

#[test]
fn sha1_1million_a() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_a::<Sha1>(output);
}

#[test]
fn sha1_1million_random() {
    let output = include_bytes!("data/one_million_a.output");
    md_tests::digest::one_million_random::<Sha1>(64, output);
}

#[test]
fn sha1_digest_block_processes_a_padded_block() {
    // "abc" padded by hand: 0x80 after the message, bit length 24 at the end
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[63] = 24;

    let mut state = super::consts::H;
    super::sha1_digest_block(&mut state, &block);
    assert_eq!(state,
               [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
}

#[test]
fn sha1_parameters() {
    let sh = Sha1::new();
    assert_eq!(sh.output_bytes(), 20);
    assert_eq!(sh.output_bits(), 160);
    assert_eq!(sh.block_size(), 64);
}

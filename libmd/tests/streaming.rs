#[macro_use]
extern crate proptest;
extern crate libmd;

use libmd::{Digest, Md5, Ripemd160, Sha1};
use proptest::prelude::*;

fn digest_whole<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut sh = D::new();
    sh.input(data);
    sh.result().to_vec()
}

fn digest_in_pieces<D: Digest>(data: &[u8], pieces: &[usize]) -> Vec<u8> {
    let mut sh = D::new();
    let mut rest = data;
    for &n in pieces {
        let take = n.min(rest.len());
        let (head, tail) = rest.split_at(take);
        sh.input(head);
        rest = tail;
    }
    sh.input(rest);
    sh.result().to_vec()
}

proptest! {
    #[test]
    fn sha1_chunking_never_changes_digest(
        data in prop::collection::vec(any::<u8>(), 0..600),
        pieces in prop::collection::vec(0usize..200, 0..25)
    ) {
        prop_assert_eq!(digest_in_pieces::<Sha1>(&data, &pieces),
                        digest_whole::<Sha1>(&data));
    }

    #[test]
    fn md5_chunking_never_changes_digest(
        data in prop::collection::vec(any::<u8>(), 0..600),
        pieces in prop::collection::vec(0usize..200, 0..25)
    ) {
        prop_assert_eq!(digest_in_pieces::<Md5>(&data, &pieces),
                        digest_whole::<Md5>(&data));
    }

    #[test]
    fn ripemd160_chunking_never_changes_digest(
        data in prop::collection::vec(any::<u8>(), 0..600),
        pieces in prop::collection::vec(0usize..200, 0..25)
    ) {
        prop_assert_eq!(digest_in_pieces::<Ripemd160>(&data, &pieces),
                        digest_whole::<Ripemd160>(&data));
    }
}

fn one_byte_at_a_time_matches<D: Digest>(data: &[u8]) {
    let mut whole = D::new();
    whole.input(data);

    let mut byte_wise = D::new();
    for b in data.chunks(1) {
        byte_wise.input(b);
    }
    assert_eq!(whole.result(), byte_wise.result());
}

#[test]
fn multi_megabyte_fed_one_byte_at_a_time() {
    let data: Vec<u8> = (0u32..2 * 1024 * 1024).map(|i| (i % 251) as u8)
        .collect();
    one_byte_at_a_time_matches::<Sha1>(&data);
    one_byte_at_a_time_matches::<Md5>(&data);
    one_byte_at_a_time_matches::<Ripemd160>(&data);
}

#[test]
fn repeated_runs_are_identical() {
    let data = [0x5au8; 1000];
    assert_eq!(digest_whole::<Sha1>(&data), digest_whole::<Sha1>(&data));
    assert_eq!(digest_whole::<Md5>(&data), digest_whole::<Md5>(&data));
    assert_eq!(digest_whole::<Ripemd160>(&data),
               digest_whole::<Ripemd160>(&data));
}

#[test]
fn cloned_digests_diverge_independently() {
    let mut base = Sha1::new();
    base.input(b"shared prefix");

    let mut fork = base.clone();
    base.input(b" one way");
    fork.input(b" another way");

    let one = base.result();
    let two = fork.result();
    assert_ne!(one, two);

    // Each fork matches the digest of the equivalent one-shot message
    let mut sh = Sha1::new();
    sh.input(b"shared prefix one way");
    assert_eq!(one, sh.result());

    let mut sh = Sha1::new();
    sh.input(b"shared prefix another way");
    assert_eq!(two, sh.result());
}

#[test]
fn digest_parameters_match_their_algorithms() {
    assert_eq!(Sha1::new().output_bits(), 160);
    assert_eq!(Md5::new().output_bits(), 128);
    assert_eq!(Ripemd160::new().output_bits(), 160);

    // All three operate on 64 byte blocks
    assert_eq!(Sha1::new().block_size(), 64);
    assert_eq!(Md5::new().block_size(), 64);
    assert_eq!(Ripemd160::new().block_size(), 64);
}

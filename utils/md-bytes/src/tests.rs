use super::*;

#[test]
fn test_write_read_be() {
    let words = [0x01020304u32, 0xf0e0d0c0];
    let mut bytes = [0u8; 8];
    write_u32v_be(&mut bytes, &words);
    assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04, 0xf0, 0xe0, 0xd0, 0xc0]);

    let mut back = [0u32; 2];
    read_u32v_be(&mut back, &bytes);
    assert_eq!(back, words);

    write_u32_be(&mut bytes[..4], 0xdeadbeef);
    assert_eq!(bytes[..4], [0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_write_read_le() {
    let words = [0x01020304u32, 0xf0e0d0c0];
    let mut bytes = [0u8; 8];
    write_u32v_le(&mut bytes, &words);
    assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01, 0xc0, 0xd0, 0xe0, 0xf0]);

    let mut back = [0u32; 2];
    read_u32v_le(&mut back, &bytes);
    assert_eq!(back, words);

    write_u32_le(&mut bytes[..4], 0xdeadbeef);
    assert_eq!(bytes[..4], [0xef, 0xbe, 0xad, 0xde]);
}

#[test]
fn test_copy_memory_and_zero() {
    let mut dst = [0xffu8; 8];
    copy_memory(&[1u8, 2, 3], &mut dst);
    assert_eq!(dst[..3], [1, 2, 3]);
    assert_eq!(dst[3..], [0xff; 5]);

    zero(&mut dst);
    assert_eq!(dst, [0u8; 8]);
}

#[test]
fn test_add_bytes_to_bits() {
    assert_eq!(add_bytes_to_bits(0, 10), 80);
    assert_eq!(add_bytes_to_bits(100, 10), 180);

    // The count wraps modulo 2^64
    assert_eq!(add_bytes_to_bits(u64::MAX - 7, 1), 0);
    assert_eq!(add_bytes_to_bits(u64::MAX - 7, 2), 8);
}

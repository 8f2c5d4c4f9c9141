use super::Md5;
use md_tests::hash::{Test, main_test, one_million_a};

#[test]
fn md5_main() {
    // Test messages from the RFC 1321 test suite
    let tests = new_tests!("test1", "test2", "test3", "test4", "test5",
                           "test6", "test7");
    main_test::<Md5>(&tests);
}

#[test]
fn md5_boundary_lengths() {
    // Runs of 'a' whose lengths land on either side of the padding and
    // block boundaries
    let tests = new_tests!("boundary55", "boundary56", "boundary57",
                           "boundary63", "boundary64", "boundary65",
                           "boundary119", "boundary120", "boundary121");
    main_test::<Md5>(&tests);
}

#[test]
fn md5_1million_a() {
    let output = include_bytes!("data/one_million_a.output");
    one_million_a::<Md5>(output);
}

#[test]
fn md5_1million_random() {
    let output = include_bytes!("data/one_million_a.output");
    md_tests::digest::one_million_random::<Md5>(64, output);
}

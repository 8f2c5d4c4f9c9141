//! The classic message digest algorithms behind one streaming interface.
//!
//! Each algorithm lives in its own crate; this crate re-exports all of them
//! together with the `Digest` trait they implement.

#![no_std]

pub extern crate md5;
pub extern crate ripemd160;
pub extern crate sha1;

pub extern crate md_digest;

pub use md_digest::Digest;
pub use md5::Md5;
pub use ripemd160::Ripemd160;
pub use sha1::Sha1;

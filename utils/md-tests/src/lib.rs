#![cfg_attr(not(feature="use-std"), no_std)]

extern crate md_digest;

#[cfg(feature = "use-std")]
extern crate rand;

pub mod hash;

#[cfg(feature = "use-std")]
pub mod digest;

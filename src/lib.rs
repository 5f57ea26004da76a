//! DJB's hash function for the constant database (cdb) file format.
//!
//! The bucket layout of a cdb file is derived directly from this 32-bit
//! value, so it must match bit-exactly across platforms and implementations.
//! This crate provides the whole-buffer function, a running accumulator for
//! incremental use, and a `std::hash::Hasher` adapter.

pub mod error;

mod hash;
mod hasher;

pub use hash::{CdbHash, DjbHasher, SEED, djb_hash, djb_hash_units};
pub use hasher::DjbBuildHasher;

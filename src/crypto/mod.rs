//! Cryptography module - SHA-256d hashing, scrypt proof-of-work, Merkle trees

mod hash;
mod merkle;

pub use hash::*;
pub use merkle::*;

//! Consensus hashing primitives
//!
//! Transactions and merkle nodes use double SHA-256; the block proof-of-work
//! hash is scrypt. Hex forms follow the explorer convention of reversing the
//! digest bytes.

use scrypt::Params as ScryptParams;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// scrypt cost parameters for the block proof-of-work hash (N=1024, r=1, p=1)
const POW_SCRYPT_LOG_N: u8 = 10;
const POW_SCRYPT_R: u32 = 1;
const POW_SCRYPT_P: u32 = 1;

/// 32-byte hash output, stored in internal (digest) byte order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for the genesis previous-block reference)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from internal-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a display-order hex string (as printed by explorers and RPC)
    /// into the internal byte order.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Hash(arr))
    }

    /// Render as a display-order hex string
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }

    /// Get as internal-order bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// Double SHA-256 of arbitrary bytes
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    Hash(out)
}

/// Hash two nodes together (for the transaction merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}

/// Block proof-of-work hash: scrypt over the serialized header, with the
/// header itself as the salt.
pub fn scrypt_pow_hash(data: &[u8]) -> Hash {
    let params = ScryptParams::new(POW_SCRYPT_LOG_N, POW_SCRYPT_R, POW_SCRYPT_P, 32)
        .expect("scrypt cost parameters are compile-time constants");
    let mut out = [0u8; 32];
    scrypt::scrypt(data, data, &params, &mut out)
        .expect("output length is a compile-time constant");
    Hash(out)
}

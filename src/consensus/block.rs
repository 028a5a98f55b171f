//! Block structure for the Umbra chain
//!
//! Defines the immutable block and block header structures. Header hashing
//! uses the scrypt proof-of-work hash; transaction ids use SHA-256d.

use crate::consensus::Transaction;
use crate::crypto::{compute_merkle_root, scrypt_pow_hash, Hash};
use serde::{Deserialize, Serialize};

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: i32,
    /// Hash of the previous block
    pub prev_block: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: i32,
        prev_block: Hash,
        merkle_root: Hash,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_block,
            merkle_root,
            time,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing (80 bytes, little-endian fields,
    /// hashes in internal byte order)
    pub fn to_bytes(&self) -> [u8; 80] {
        let mut bytes = [0u8; 80];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_block.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the proof-of-work hash of this header
    pub fn pow_hash(&self) -> Hash {
        scrypt_pow_hash(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Get the block hash (the header's proof-of-work hash)
    pub fn hash(&self) -> Hash {
        self.header.pow_hash()
    }

    /// Recompute the merkle root over this block's transactions
    pub fn compute_merkle_root(&self) -> Hash {
        let tx_hashes: Vec<Hash> = self.transactions.iter().map(|tx| tx.hash()).collect();
        compute_merkle_root(&tx_hashes)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_block == Hash::zero()
    }
}

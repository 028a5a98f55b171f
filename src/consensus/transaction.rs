//! Transaction structure and consensus serialization
//!
//! Timestamped transactions in the ppcoin lineage: every transaction carries
//! its own creation time ahead of the input list.

use crate::crypto::{sha256d, Hash};
use serde::{Deserialize, Serialize};

/// Sequence value marking an input as final
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Reference to a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction containing the output
    pub hash: Hash,
    /// Index of the output in that transaction
    pub index: u32,
}

impl OutPoint {
    /// The null reference used by coinbase inputs
    pub fn null() -> Self {
        Self {
            hash: Hash::zero(),
            index: 0xffff_ffff,
        }
    }

    /// Check whether this is the null coinbase reference
    pub fn is_null(&self) -> bool {
        self.hash == Hash::zero() && self.index == 0xffff_ffff
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Output being spent
    pub prev_out: OutPoint,
    /// Unlocking script
    pub script_sig: Vec<u8>,
    /// Input sequence number
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units (may be negative only in intermediate math,
    /// never in consensus data)
    pub value: i64,
    /// Locking script
    pub script_pubkey: Vec<u8>,
}

impl TxOutput {
    /// The empty output carried by the genesis coinbase
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Vec::new(),
        }
    }

    /// Check whether this output is empty (zero value, no script)
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Transaction timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prev_out.is_null()
    }

    /// Calculate the transaction hash (txid)
    pub fn hash(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// Consensus serialization: version, time, counted inputs, counted
    /// outputs, lock time; all integers little-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.time.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_out.hash.0);
            bytes.extend_from_slice(&input.prev_out.index.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(&input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(&output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }
}

/// Write a compact size prefix: one byte below 0xfd, otherwise a marker byte
/// followed by the little-endian value in the smallest width that fits.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

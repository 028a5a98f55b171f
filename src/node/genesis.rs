//! Genesis block reconstruction for the Umbra network
//!
//! Rebuilds the launch block from compiled-in constants and checks it
//! against the expected hash and merkle root. No mining search happens here;
//! the nonce was found offline when the chain launched.

use crate::consensus::{
    Block, BlockHeader, OutPoint, ScriptBuilder, Transaction, TxInput, TxOutput, SEQUENCE_FINAL,
};
use crate::constants::{
    EXPECTED_GENESIS_HASH, EXPECTED_GENESIS_MERKLE_ROOT, GENESIS_BLOCK_TIME, GENESIS_MESSAGE,
    GENESIS_NONCE,
};
use crate::crypto::{compute_merkle_root, Hash};

/// Genesis block version
const GENESIS_VERSION: i32 = 1;

/// Auxiliary marker pushed between the epoch slot and the launch message
const GENESIS_AUX_MARKER: i64 = 42;

/// Build the genesis block
///
/// This function produces a reproducible, byte-for-byte identical genesis
/// block. `bits` is the owning network's proof-of-work ceiling in compact
/// form; everything else is fixed consensus data.
pub fn build_genesis(bits: u32) -> Block {
    // Coinbase input: empty epoch slot, aux marker, launch message
    let script_sig = ScriptBuilder::new()
        .push_int(0)
        .push_int(GENESIS_AUX_MARKER)
        .push_data(GENESIS_MESSAGE.as_bytes())
        .into_bytes();

    let coinbase = Transaction {
        version: 1,
        time: GENESIS_BLOCK_TIME,
        inputs: vec![TxInput {
            prev_out: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOutput::empty()],
        lock_time: 0,
    };

    let transactions = vec![coinbase];

    // Calculate merkle root
    let tx_hashes: Vec<Hash> = transactions.iter().map(|tx| tx.hash()).collect();
    let merkle_root = compute_merkle_root(&tx_hashes);

    let header = BlockHeader::new(
        GENESIS_VERSION,
        Hash::zero(),
        merkle_root,
        GENESIS_BLOCK_TIME,
        bits,
        GENESIS_NONCE,
    );

    Block::new(header, transactions)
}

/// Verify a rebuilt genesis block against the compiled-in expected values
///
/// Panics on any mismatch. A silently wrong genesis would mean operating on
/// a wrong chain identity, so there is no recovery path.
pub fn verify_genesis(block: &Block, network_name: &str) {
    let expected_merkle = Hash::from_hex(EXPECTED_GENESIS_MERKLE_ROOT)
        .expect("compiled-in genesis merkle root is valid hex");
    let expected_hash =
        Hash::from_hex(EXPECTED_GENESIS_HASH).expect("compiled-in genesis hash is valid hex");

    assert_eq!(
        block.header.merkle_root, expected_merkle,
        "genesis merkle root mismatch on {} network",
        network_name
    );
    assert_eq!(
        block.compute_merkle_root(),
        block.header.merkle_root,
        "genesis merkle root does not cover its transactions on {} network",
        network_name
    );
    assert_eq!(
        block.hash(),
        expected_hash,
        "genesis hash mismatch on {} network",
        network_name
    );
}

/// Genesis block statistics
#[derive(Debug)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub message: &'static str,
}

impl GenesisInfo {
    /// Summarize an already-built genesis block
    pub fn from_block(block: &Block) -> Self {
        Self {
            hash: block.hash(),
            merkle_root: block.header.merkle_root,
            time: block.header.time,
            bits: block.header.bits,
            nonce: block.header.nonce,
            message: GENESIS_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact form of the launch proof-of-work ceiling
    const LAUNCH_BITS: u32 = 0x1e0fffff;

    #[test]
    fn test_genesis_matches_expected_hash() {
        let genesis = build_genesis(LAUNCH_BITS);
        assert_eq!(genesis.hash().to_hex(), EXPECTED_GENESIS_HASH);
    }

    #[test]
    fn test_genesis_matches_expected_merkle_root() {
        let genesis = build_genesis(LAUNCH_BITS);
        assert_eq!(
            genesis.header.merkle_root.to_hex(),
            EXPECTED_GENESIS_MERKLE_ROOT
        );
    }

    #[test]
    fn test_genesis_is_deterministic() {
        let genesis1 = build_genesis(LAUNCH_BITS);
        let genesis2 = build_genesis(LAUNCH_BITS);

        assert_eq!(genesis1, genesis2);
        assert_eq!(genesis1.hash(), genesis2.hash());
    }

    #[test]
    fn test_genesis_coinbase_shape() {
        let genesis = build_genesis(LAUNCH_BITS);

        assert_eq!(genesis.transactions.len(), 1);
        let coinbase = &genesis.transactions[0];
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.time, GENESIS_BLOCK_TIME);
        assert_eq!(coinbase.outputs.len(), 1);
        assert!(coinbase.outputs[0].is_empty());

        // Epoch slot, marker 42, then the 60-byte launch message
        let script = &coinbase.inputs[0].script_sig;
        assert_eq!(script.len(), 64);
        assert_eq!(&script[..4], &[0x00, 0x01, 0x2a, 0x3c]);
    }

    #[test]
    fn test_genesis_merkle_is_single_txid() {
        let genesis = build_genesis(LAUNCH_BITS);
        assert_eq!(genesis.header.merkle_root, genesis.transactions[0].hash());
    }

    #[test]
    fn test_genesis_is_genesis() {
        let genesis = build_genesis(LAUNCH_BITS);
        assert!(genesis.is_genesis());
    }

    #[test]
    fn test_verify_genesis_accepts_correct_block() {
        let genesis = build_genesis(LAUNCH_BITS);
        verify_genesis(&genesis, "main");
    }

    #[test]
    #[should_panic(expected = "genesis hash mismatch")]
    fn test_verify_genesis_rejects_tampered_nonce() {
        let mut genesis = build_genesis(LAUNCH_BITS);
        genesis.header.nonce += 1;
        verify_genesis(&genesis, "main");
    }

    #[test]
    #[should_panic(expected = "genesis merkle root mismatch")]
    fn test_verify_genesis_rejects_tampered_merkle() {
        let mut genesis = build_genesis(LAUNCH_BITS);
        genesis.header.merkle_root = Hash::zero();
        verify_genesis(&genesis, "test");
    }

    #[test]
    #[should_panic(expected = "does not cover its transactions")]
    fn test_verify_genesis_rejects_tampered_coinbase() {
        let mut genesis = build_genesis(LAUNCH_BITS);
        genesis.transactions[0].time += 1;
        verify_genesis(&genesis, "main");
    }

    #[test]
    fn test_genesis_info() {
        let genesis = build_genesis(LAUNCH_BITS);
        let info = GenesisInfo::from_block(&genesis);
        assert_eq!(info.time, GENESIS_BLOCK_TIME);
        assert_eq!(info.nonce, GENESIS_NONCE);
        assert_eq!(info.bits, LAUNCH_BITS);
        assert_eq!(info.message.len(), 60);
    }
}

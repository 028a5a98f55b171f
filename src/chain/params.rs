//! Chain parameters registry
//!
//! One immutable parameter set per supported network. Construction rebuilds
//! the genesis block and asserts its hash and merkle root, so a binary with
//! wrong compiled-in data refuses to start.

use crate::chain::Network;
use crate::consensus::{compact_to_target, proof_of_stake_reward, proof_of_work_reward, Block};
use crate::crypto::{sha256d, Hash};
use crate::node::{build_genesis, verify_genesis};
use crate::p2p::{
    expand_seeds, SeedAddress, MAINNET_SEEDS, MAINNET_SEEDS_V6, TESTNET_SEEDS, TESTNET_SEEDS_V6,
};
use lazy_static::lazy_static;

/// Address-encoding purposes. Closed set: every network registers a prefix
/// for every purpose at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressPurpose {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
    ExtKeyHash,
    ExtAccountHash,
    ExtPublicKeyBtc,
    ExtSecretKeyBtc,
}

impl AddressPurpose {
    /// All purposes in prefix-table order
    pub const ALL: [AddressPurpose; 10] = [
        AddressPurpose::PubkeyAddress,
        AddressPurpose::ScriptAddress,
        AddressPurpose::SecretKey,
        AddressPurpose::StealthAddress,
        AddressPurpose::ExtPublicKey,
        AddressPurpose::ExtSecretKey,
        AddressPurpose::ExtKeyHash,
        AddressPurpose::ExtAccountHash,
        AddressPurpose::ExtPublicKeyBtc,
        AddressPurpose::ExtSecretKeyBtc,
    ];
}

/// Per-network prefix table, indexed by purpose
type PrefixTable = [&'static [u8]; 10];

const MAINNET_PREFIXES: PrefixTable = [
    &[68],                       // PubkeyAddress, renders 'U...'
    &[125],                      // ScriptAddress
    &[191],                      // SecretKey
    &[40],                       // StealthAddress
    &[0xEE, 0x80, 0x28, 0x6A],   // ExtPublicKey
    &[0xEE, 0x80, 0x31, 0xE8],   // ExtSecretKey
    &[137],                      // ExtKeyHash
    &[83],                       // ExtAccountHash
    &[0x04, 0x88, 0xB2, 0x1E],   // ExtPublicKeyBtc, renders 'xpub...'
    &[0x04, 0x88, 0xAD, 0xE4],   // ExtSecretKeyBtc, renders 'xprv...'
];

const TESTNET_PREFIXES: PrefixTable = [
    &[127],                      // PubkeyAddress, renders 't...'
    &[196],                      // ScriptAddress
    &[255],                      // SecretKey
    &[40],                       // StealthAddress
    &[0x76, 0xC0, 0xFD, 0xFB],   // ExtPublicKey
    &[0x76, 0xC1, 0x07, 0x7A],   // ExtSecretKey
    &[75],                       // ExtKeyHash
    &[23],                       // ExtAccountHash
    &[0x04, 0x35, 0x87, 0xCF],   // ExtPublicKeyBtc, renders 'tpub...'
    &[0x04, 0x35, 0x83, 0x94],   // ExtSecretKeyBtc, renders 'tprv...'
];

/// Immutable consensus parameters for one network
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Which network these parameters describe
    pub network: Network,
    /// Wire message-start bytes. Main and test launched with identical
    /// magic; separation rests on the port split. Kept as launched.
    pub magic: [u8; 4],
    /// Default P2P listen port
    pub default_port: u16,
    /// Default RPC port
    pub rpc_port: u16,
    /// BIP44 coin type (hardened)
    pub bip44_id: u32,
    /// Hex-encoded alert-message public key
    pub alert_pubkey: &'static str,
    /// Proof-of-work difficulty ceiling (compact form)
    pub pow_limit_bits: u32,
    /// Proof-of-stake difficulty ceiling, first epoch (compact form)
    pub pos_limit_bits: u32,
    /// Proof-of-stake difficulty ceiling, second epoch (compact form)
    pub pos_limit_v2_bits: u32,
    /// Final proof-of-work height
    pub last_pow_block: i64,
    /// Final fair-launch height
    pub last_fair_launch_block: i64,
    /// First height of the v2 stake protocol
    pub first_posv2_block: i64,
    /// First height of the v3 stake protocol
    pub first_posv3_block: i64,
    /// Address-version prefixes, indexed by purpose
    base58_prefixes: PrefixTable,
    /// DNS seed hosts
    pub dns_seeds: &'static [&'static str],
    /// Expanded fixed bootstrap peers
    pub fixed_seeds: Vec<SeedAddress>,
    /// Data directory suffix ("" for the main network)
    pub data_dir: &'static str,
    /// The constructed genesis block
    pub genesis: Block,
    /// Proof-of-work hash of the genesis block
    pub genesis_hash: Hash,
}

lazy_static! {
    /// Main network parameters, built and verified once
    pub static ref MAINNET: ChainParams = ChainParams::mainnet();
    /// Test network parameters, built and verified once
    pub static ref TESTNET: ChainParams = ChainParams::testnet();
}

impl ChainParams {
    /// Build the main network parameter set
    pub fn mainnet() -> Self {
        let pow_limit_bits = 0x1e0fffff;
        let genesis = build_genesis(pow_limit_bits);
        verify_genesis(&genesis, "main");
        let genesis_hash = genesis.hash();

        let default_port = 51737;
        let params = Self {
            network: Network::Main,
            magic: [0xfa, 0xf2, 0xef, 0xb4],
            default_port,
            rpc_port: 51736,
            bip44_id: 0x8000_0023,
            alert_pubkey: "031d5def92b2d59943e57aaa8b1adbb110ff215fc4ebdc6fb5c9a797e2b1dea527",
            pow_limit_bits,
            pos_limit_bits: 0x1e0fffff,
            pos_limit_v2_bits: 0x1b00ffff,
            last_pow_block: 1000,
            last_fair_launch_block: 1,
            first_posv2_block: 25_000,
            first_posv3_block: 25_010,
            base58_prefixes: MAINNET_PREFIXES,
            dns_seeds: &["45.55.52.85"],
            fixed_seeds: expand_seeds(MAINNET_SEEDS, MAINNET_SEEDS_V6, default_port),
            data_dir: "",
            genesis,
            genesis_hash,
        };
        params.check_thresholds();
        params
    }

    /// Build the test network parameter set
    pub fn testnet() -> Self {
        let pow_limit_bits = 0x1e0fffff;
        let genesis = build_genesis(pow_limit_bits);
        verify_genesis(&genesis, "test");
        let genesis_hash = genesis.hash();

        let default_port = 51997;
        let params = Self {
            network: Network::Test,
            magic: [0xfa, 0xf2, 0xef, 0xb4],
            default_port,
            rpc_port: 51996,
            bip44_id: 0x8000_0001,
            alert_pubkey: "0373d8dce43eb98374bcfff2352cd559e6774fd6a87eef73b2fbdb39b2b0bc0082",
            pow_limit_bits,
            pos_limit_bits: 0x1e0fffff,
            pos_limit_v2_bits: 0x1f00ffff,
            last_pow_block: 1000,
            last_fair_launch_block: 1,
            first_posv2_block: 25_000,
            first_posv3_block: 25_010,
            base58_prefixes: TESTNET_PREFIXES,
            dns_seeds: &["45.55.52.85"],
            fixed_seeds: expand_seeds(TESTNET_SEEDS, TESTNET_SEEDS_V6, default_port),
            data_dir: "testnet",
            genesis,
            genesis_hash,
        };
        params.check_thresholds();
        params
    }

    /// Get the parameter set for a network
    ///
    /// Panics for the reserved regtest variant, whose constants were never
    /// defined upstream.
    pub fn for_network(network: Network) -> &'static ChainParams {
        match network {
            Network::Main => &*MAINNET,
            Network::Test => &*TESTNET,
            Network::Regtest => panic!("unimplemented network: {}", network),
        }
    }

    /// Causally related heights must be ordered
    fn check_thresholds(&self) {
        assert!(
            self.last_fair_launch_block <= self.last_pow_block,
            "fair launch must end within the proof-of-work window"
        );
        assert!(
            self.first_posv3_block >= self.first_posv2_block,
            "stake protocol versions must activate in order"
        );
    }

    /// Look up the address-version prefix for a purpose
    pub fn prefix(&self, purpose: AddressPurpose) -> &'static [u8] {
        self.base58_prefixes[purpose as usize]
    }

    /// Base58Check-encode a payload under this network's prefix for the
    /// given purpose
    pub fn encode_address(&self, purpose: AddressPurpose, payload: &[u8]) -> String {
        let prefix = self.prefix(purpose);
        let mut data = Vec::with_capacity(prefix.len() + payload.len() + 4);
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);
        let checksum = sha256d(&data);
        data.extend_from_slice(&checksum.0[..4]);
        bs58::encode(data).into_string()
    }

    /// Expanded proof-of-work difficulty ceiling
    pub fn pow_limit(&self) -> [u8; 32] {
        compact_to_target(self.pow_limit_bits)
    }

    /// Expanded first-epoch proof-of-stake ceiling
    pub fn pos_limit(&self) -> [u8; 32] {
        compact_to_target(self.pos_limit_bits)
    }

    /// Expanded second-epoch proof-of-stake ceiling
    pub fn pos_limit_v2(&self) -> [u8; 32] {
        compact_to_target(self.pos_limit_v2_bits)
    }

    /// Whether the v2 stake protocol is active at a height
    pub fn is_protocol_v2(&self, height: i64) -> bool {
        height >= self.first_posv2_block
    }

    /// Whether the v3 stake protocol is active at a height
    pub fn is_protocol_v3(&self, height: i64) -> bool {
        height >= self.first_posv3_block
    }

    /// Proof-of-work reward under this network's schedule
    pub fn proof_of_work_reward(&self, height: i64, fees: i64) -> i64 {
        proof_of_work_reward(height, fees, self.last_pow_block)
    }

    /// Proof-of-stake reward under this network's schedule
    pub fn proof_of_stake_reward(&self, prev_height: i64, coin_age: i64, fees: i64) -> i64 {
        proof_of_stake_reward(prev_height, coin_age, fees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COIN, EXPECTED_GENESIS_HASH};

    #[test]
    fn test_mainnet_identity_constants() {
        let params = &*MAINNET;
        assert_eq!(params.network, Network::Main);
        assert_eq!(params.magic, [0xfa, 0xf2, 0xef, 0xb4]);
        assert_eq!(params.default_port, 51737);
        assert_eq!(params.rpc_port, 51736);
        assert_eq!(params.bip44_id, 0x8000_0023);
        assert_eq!(params.data_dir, "");
    }

    #[test]
    fn test_testnet_identity_constants() {
        let params = &*TESTNET;
        assert_eq!(params.network, Network::Test);
        assert_eq!(params.default_port, 51997);
        assert_eq!(params.rpc_port, 51996);
        assert_eq!(params.bip44_id, 0x8000_0001);
        assert_eq!(params.data_dir, "testnet");
    }

    #[test]
    fn test_networks_share_magic_as_launched() {
        // Wire separation relies on the port split, not the magic
        assert_eq!(MAINNET.magic, TESTNET.magic);
        assert_ne!(MAINNET.default_port, TESTNET.default_port);
    }

    #[test]
    fn test_genesis_verified_on_both_networks() {
        assert_eq!(MAINNET.genesis_hash.to_hex(), EXPECTED_GENESIS_HASH);
        assert_eq!(TESTNET.genesis_hash.to_hex(), EXPECTED_GENESIS_HASH);
        assert_eq!(MAINNET.genesis_hash, TESTNET.genesis_hash);
    }

    #[test]
    fn test_construction_is_idempotent() {
        let a = ChainParams::mainnet();
        let b = ChainParams::mainnet();
        assert_eq!(a.genesis, b.genesis);
        assert_eq!(a.genesis_hash, b.genesis_hash);
    }

    #[test]
    fn test_prefix_lookup_is_total() {
        for params in [&*MAINNET, &*TESTNET] {
            for purpose in AddressPurpose::ALL {
                assert!(!params.prefix(purpose).is_empty());
            }
        }
    }

    #[test]
    fn test_key_prefixes_differ_between_networks() {
        for purpose in [
            AddressPurpose::PubkeyAddress,
            AddressPurpose::ScriptAddress,
            AddressPurpose::SecretKey,
        ] {
            assert_ne!(MAINNET.prefix(purpose), TESTNET.prefix(purpose));
        }
    }

    #[test]
    fn test_pubkey_prefix_bytes() {
        assert_eq!(MAINNET.prefix(AddressPurpose::PubkeyAddress), &[68]);
        assert_eq!(TESTNET.prefix(AddressPurpose::PubkeyAddress), &[127]);
    }

    #[test]
    fn test_encode_address_fixtures() {
        let payload: Vec<u8> = (0u8..20).collect();
        assert_eq!(
            MAINNET.encode_address(AddressPurpose::PubkeyAddress, &payload),
            "UMz3AQrDccZ3wSYSjDN6Zx9utzFfJbewo6"
        );
        assert_eq!(
            TESTNET.encode_address(AddressPurpose::PubkeyAddress, &payload),
            "t6vdFpSDWFtkC1mZAy1uBMDL2kTKDHcESw"
        );
    }

    #[test]
    fn test_btc_compatible_extended_key_rendering() {
        let payload = [0u8; 74];
        let xpub = MAINNET.encode_address(AddressPurpose::ExtPublicKeyBtc, &payload);
        let xprv = MAINNET.encode_address(AddressPurpose::ExtSecretKeyBtc, &payload);
        assert!(xpub.starts_with("xpub"));
        assert!(xprv.starts_with("xprv"));
    }

    #[test]
    fn test_pow_ceiling_expansion() {
        let target = MAINNET.pow_limit();
        assert_eq!(target[2], 0x0f);
        assert_eq!(target[3], 0xff);
    }

    #[test]
    fn test_stake_ceilings_differ_between_networks() {
        assert_eq!(MAINNET.pos_limit_v2_bits, 0x1b00ffff);
        assert_eq!(TESTNET.pos_limit_v2_bits, 0x1f00ffff);
        assert_eq!(MAINNET.pos_limit(), TESTNET.pos_limit());
    }

    #[test]
    fn test_protocol_epoch_predicates() {
        let params = &*MAINNET;
        assert!(!params.is_protocol_v2(24_999));
        assert!(params.is_protocol_v2(25_000));
        assert!(!params.is_protocol_v3(25_009));
        assert!(params.is_protocol_v3(25_010));
    }

    #[test]
    fn test_reward_wrappers_follow_schedule() {
        assert_eq!(MAINNET.proof_of_work_reward(500, 0), 4_500 * COIN);
        assert_eq!(MAINNET.proof_of_work_reward(1001, 10), 10);
        assert_eq!(
            MAINNET.proof_of_stake_reward(30_000, 0, 7),
            TESTNET.proof_of_stake_reward(30_000, 0, 7)
        );
    }

    #[test]
    fn test_fixed_seeds_expanded_with_network_port() {
        assert_eq!(MAINNET.fixed_seeds.len(), MAINNET_SEEDS.len());
        assert_eq!(MAINNET.fixed_seeds[0].addr.to_string(), "45.55.52.85:51737");
        assert_eq!(TESTNET.fixed_seeds[0].addr.to_string(), "45.55.52.85:51997");
    }

    #[test]
    fn test_dns_seeds_present() {
        assert_eq!(MAINNET.dns_seeds, &["45.55.52.85"]);
        assert_eq!(TESTNET.dns_seeds, &["45.55.52.85"]);
    }

    #[test]
    #[should_panic(expected = "unimplemented network")]
    fn test_for_network_rejects_regtest() {
        ChainParams::for_network(Network::Regtest);
    }
}

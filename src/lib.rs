//! Umbra (UMB) Chain Parameters Library
//!
//! Immutable consensus parameters for the Umbra network: genesis block,
//! address version bytes, bootstrap seeds, and the block reward schedule.
//!
//! UMB is the short form used in addresses, logos, and protocol identifiers.

pub mod chain;
pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base currency unit (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// One hundredth of a coin
    pub const CENT: i64 = 1_000_000;

    /// Nominal annual stake reward rate (10%, doubled by the stake formula).
    /// FROZEN: changing this changes every node's expected stake rewards.
    pub const COIN_YEAR_REWARD: i64 = 10 * CENT;

    /// One-time allocation minted at height 1
    pub const FAIR_LAUNCH_ALLOCATION: i64 = 36_015_156 * COIN;

    /// Fixed reward for proof-of-work blocks after the fair launch
    pub const POW_BLOCK_REWARD: i64 = 4_500 * COIN;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Chain name (short form for addresses/logos)
    pub const CHAIN_NAME: &str = "UMB";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "Umbra";

    /// Genesis timestamp (Unix timestamp, used by both the coinbase and the
    /// header)
    pub const GENESIS_BLOCK_TIME: u32 = 1_491_092_228; // 2017-04-02

    /// Genesis nonce, found offline when the chain was launched
    pub const GENESIS_NONCE: u32 = 816_452_253;

    /// Message embedded in the genesis coinbase input.
    /// FROZEN: byte-for-byte consensus data, misspelling included.
    pub const GENESIS_MESSAGE: &str =
        "Fight for segwit! BTU Bugs Unliimted - Ver has lost his mind";

    /// Expected genesis block hash (scrypt proof-of-work hash, display order).
    /// Main and test share one genesis; wire separation relies on ports.
    pub const EXPECTED_GENESIS_HASH: &str =
        "00000438d60fb1a01a92a141f86d367589fd6190727d246ad24ac4119d3e6691";

    /// Expected genesis merkle root (display order)
    pub const EXPECTED_GENESIS_MERKLE_ROOT: &str =
        "269277d971a47872328ec3c009ea778b72e9b5f00dd44af7ccd35b17d61c8d60";
}

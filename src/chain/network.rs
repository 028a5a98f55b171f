//! Network identity and process-wide selection
//!
//! A process serves exactly one network. The first call to [`select_network`]
//! latches the choice; a later call naming a different network is a startup
//! bug and aborts.

use crate::chain::ChainParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors from parsing chain-parameter inputs
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The network name is not one of the supported set
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}

/// The supported networks. Regtest is reserved and carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(ParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

/// The network this process serves, latched on first selection
static ACTIVE: OnceLock<Network> = OnceLock::new();

/// Select the network for this process and return its parameters
///
/// The first call wins. Re-selecting the same network is a no-op;
/// re-selecting a different one panics, since half-switched state would
/// mix addresses and peers across networks.
pub fn select_network(network: Network) -> &'static ChainParams {
    // Resolve first so the reserved variant is rejected before latching
    let params = ChainParams::for_network(network);
    let active = *ACTIVE.get_or_init(|| network);
    assert_eq!(
        active, network,
        "network already selected: {} is active, cannot switch to {}",
        active, network
    );
    log::info!("Serving {} network", network);
    params
}

/// Select main or test from a boolean flag
pub fn select_network_from_flag(testnet: bool) -> &'static ChainParams {
    let network = if testnet { Network::Test } else { Network::Main };
    select_network(network)
}

/// Parameters of the currently selected network
///
/// Falls back to the main network when nothing has been selected yet,
/// without latching the choice.
pub fn active_params() -> &'static ChainParams {
    let network = ACTIVE.get().copied().unwrap_or(Network::Main);
    ChainParams::for_network(network)
}

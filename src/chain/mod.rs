//! Chain module - Per-network parameters and network selection

mod network;
mod params;

pub use network::*;
pub use params::*;

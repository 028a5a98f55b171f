//! Seed Node Configuration
//!
//! Hardcoded bootstrap peers for initial peer discovery. New nodes connect
//! to these first to discover the rest of the network. Entries are stored in
//! compact packed form: IPv4 as a u32 in address byte order, IPv6 as raw
//! address bytes plus port.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// One week of seconds, the unit of last-seen jitter
const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Packed IPv4 seed entries for the main network (address byte order)
pub const MAINNET_SEEDS: &[u32] = &[
    0x2d373455, // 45.55.52.85
    0x68ec8631, // 104.236.134.49
    0x9fcb0e71, // 159.203.14.113
    0x8ac5445a, // 138.197.68.90
    0x2e6511d6, // 46.101.17.214
    0xb23ec407, // 178.62.196.7
];

/// Packed IPv4 seed entries for the test network
pub const TESTNET_SEEDS: &[u32] = &[
    0x2d373455, // 45.55.52.85
    0x68839044, // 104.131.144.68
];

/// IPv6 seed record: raw address bytes plus its own port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    /// Raw 16-byte address
    pub addr: [u8; 16],
    /// Port the seed listens on
    pub port: u16,
}

/// IPv6 seed entries for the main network (none shipped yet)
pub const MAINNET_SEEDS_V6: &[SeedSpec6] = &[];

/// IPv6 seed entries for the test network (none shipped yet)
pub const TESTNET_SEEDS_V6: &[SeedSpec6] = &[];

/// A bootstrap peer address with its synthetic last-seen time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    /// Socket address of the peer
    pub addr: SocketAddr,
    /// Last-seen timestamp (seconds since Unix epoch)
    pub last_seen: i64,
}

/// Expand packed seed tables into address records
///
/// IPv4 entries take the network's default port; IPv6 records carry their
/// own. Output order is the table order, IPv4 entries first. Every record
/// gets a last-seen time of one to two weeks ago, so the discovery layer
/// treats seeds as stale and prefers addresses gossiped by live peers.
pub fn expand_seeds(v4: &[u32], v6: &[SeedSpec6], default_port: u16) -> Vec<SeedAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let mut rng = rand::thread_rng();
    let mut seeds = Vec::with_capacity(v4.len() + v6.len());

    for &packed in v4 {
        // Packed entries are written in address byte order
        let ip = Ipv4Addr::from(packed.to_be_bytes());
        seeds.push(SeedAddress {
            addr: SocketAddr::new(IpAddr::V4(ip), default_port),
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        });
    }

    for spec in v6 {
        let ip = Ipv6Addr::from(spec.addr);
        seeds.push(SeedAddress {
            addr: SocketAddr::new(IpAddr::V6(ip), spec.port),
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        });
    }

    seeds
}

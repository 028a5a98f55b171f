//! Umbra (UMB) Chain Parameters
//!
//! Prints the compiled-in parameters of the selected network after
//! rebuilding and verifying the genesis block.
//! UMB is the short form used in addresses and logos.

use serde::Serialize;
use std::process;
use umbra_core::chain::{AddressPurpose, ChainParams, select_network_from_flag};
use umbra_core::constants::{CHAIN_NAME, COIN, FAIR_LAUNCH_ALLOCATION, POW_BLOCK_REWARD};
use umbra_core::node::GenesisInfo;

#[derive(Serialize)]
struct ParamsReport {
    network: String,
    magic: String,
    default_port: u16,
    rpc_port: u16,
    bip44_id: String,
    data_dir: String,
    genesis_hash: String,
    genesis_merkle_root: String,
    genesis_time: u32,
    genesis_bits: String,
    genesis_nonce: u32,
    pow_limit_bits: String,
    pos_limit_bits: String,
    pos_limit_v2_bits: String,
    last_pow_block: i64,
    last_fair_launch_block: i64,
    first_posv2_block: i64,
    first_posv3_block: i64,
    dns_seeds: Vec<String>,
    fixed_seed_count: usize,
}

impl ParamsReport {
    fn new(params: &ChainParams) -> Self {
        let info = GenesisInfo::from_block(&params.genesis);
        Self {
            network: params.network.to_string(),
            magic: hex::encode(params.magic),
            default_port: params.default_port,
            rpc_port: params.rpc_port,
            bip44_id: format!("0x{:08x}", params.bip44_id),
            data_dir: params.data_dir.to_string(),
            genesis_hash: info.hash.to_hex(),
            genesis_merkle_root: info.merkle_root.to_hex(),
            genesis_time: info.time,
            genesis_bits: format!("0x{:08x}", info.bits),
            genesis_nonce: info.nonce,
            pow_limit_bits: format!("0x{:08x}", params.pow_limit_bits),
            pos_limit_bits: format!("0x{:08x}", params.pos_limit_bits),
            pos_limit_v2_bits: format!("0x{:08x}", params.pos_limit_v2_bits),
            last_pow_block: params.last_pow_block,
            last_fair_launch_block: params.last_fair_launch_block,
            first_posv2_block: params.first_posv2_block,
            first_posv3_block: params.first_posv3_block,
            dns_seeds: params.dns_seeds.iter().map(|s| s.to_string()).collect(),
            fixed_seed_count: params.fixed_seeds.len(),
        }
    }
}

fn print_usage() {
    println!("Usage: umbra-params [--testnet] [--json]");
    println!();
    println!("  --testnet   show test network parameters");
    println!("  --json      machine-readable output");
}

fn print_report(params: &ChainParams) {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║               UMBRA (UMB) CHAIN PARAMETERS               ║");
    println!("║       Network identity · Genesis · Reward schedule       ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    println!("Network Identity:");
    println!("  Network:     {}", params.network);
    println!("  Magic:       {}", hex::encode(params.magic));
    println!("  P2P Port:    {}", params.default_port);
    println!("  RPC Port:    {}", params.rpc_port);
    println!("  BIP44 Coin:  0x{:08x}", params.bip44_id);
    println!("  Data Dir:    \"{}\"", params.data_dir);
    println!();

    let info = GenesisInfo::from_block(&params.genesis);
    println!("Genesis Block Information:");
    println!("  Hash:        {}", info.hash.to_hex());
    println!("  Merkle Root: {}", info.merkle_root.to_hex());
    println!("  Timestamp:   {}", info.time);
    println!("  Difficulty:  0x{:08x}", info.bits);
    println!("  Nonce:       {}", info.nonce);
    println!("  Message:     {}", info.message);
    println!();

    println!("Difficulty Ceilings:");
    println!("  PoW:         0x{:08x}", params.pow_limit_bits);
    println!("  PoS:         0x{:08x}", params.pos_limit_bits);
    println!("  PoS v2:      0x{:08x}", params.pos_limit_v2_bits);
    println!();

    println!("Reward Schedule:");
    println!(
        "  Fair Launch: {} {} at height {}",
        FAIR_LAUNCH_ALLOCATION / COIN,
        CHAIN_NAME,
        params.last_fair_launch_block
    );
    println!(
        "  PoW Reward:  {} {} through height {}",
        POW_BLOCK_REWARD / COIN,
        CHAIN_NAME,
        params.last_pow_block
    );
    println!("  Stake Yield: 20% per coin-year plus fees");
    println!();

    println!("Protocol Heights:");
    println!("  PoS v2 From: {}", params.first_posv2_block);
    println!("  PoS v3 From: {}", params.first_posv3_block);
    println!();

    println!("Address Versions:");
    println!("  Pubkey:      {}", params.prefix(AddressPurpose::PubkeyAddress)[0]);
    println!("  Script:      {}", params.prefix(AddressPurpose::ScriptAddress)[0]);
    println!("  Secret:      {}", params.prefix(AddressPurpose::SecretKey)[0]);
    println!();

    println!("Bootstrap:");
    println!("  DNS Seeds:   {}", params.dns_seeds.join(", "));
    println!("  Fixed Seeds: {} addresses", params.fixed_seeds.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut testnet = false;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--testnet" => testnet = true,
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("unknown option: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    let params = select_network_from_flag(testnet);

    if json {
        println!("{}", serde_json::to_string_pretty(&ParamsReport::new(params))?);
    } else {
        print_report(params);
    }
    Ok(())
}

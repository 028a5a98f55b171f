//! Block reward calculation
//!
//! Deterministic reward functions: a short proof-of-work launch window with a
//! one-time fair-launch allocation, then coin-age-proportional proof-of-stake
//! rewards. Every validating node recomputes these independently and must
//! agree bit-for-bit.

use crate::constants::{COIN_YEAR_REWARD, FAIR_LAUNCH_ALLOCATION, POW_BLOCK_REWARD};

/// Denominator of the stake-yield fixed-point approximation
/// (33 reward periods spanning 365*33+8 days)
const STAKE_YIELD_DENOMINATOR: i64 = 365 * 33 + 8;

/// Calculate the proof-of-work block reward
///
/// This is a pure, deterministic function. Heights at or below zero mint
/// nothing, height 1 mints the fair-launch allocation, and every height up
/// to the last proof-of-work block mints the fixed block reward. After the
/// cutover only fees remain.
///
/// # Arguments
/// * `height` - Height of the block being rewarded
/// * `fees` - Transaction fees collected in the block
/// * `last_pow_block` - Network's final proof-of-work height
///
/// # Returns
/// Subsidy plus fees, in base units
pub fn proof_of_work_reward(height: i64, fees: i64, last_pow_block: i64) -> i64 {
    let subsidy = if height <= 0 {
        0
    } else if height == 1 {
        FAIR_LAUNCH_ALLOCATION
    } else if height <= last_pow_block {
        POW_BLOCK_REWARD
    } else {
        0
    };

    log::debug!(
        "proof_of_work_reward: height={} subsidy={}",
        height,
        subsidy
    );

    subsidy + fees
}

/// Calculate the proof-of-stake reward from coin age spent (coin-days)
///
/// The protocol epoch of the previous block is accepted as a parameter, but
/// every epoch to date computes the same formula; the discriminant is kept
/// for the day the schedule diverges.
///
/// # Arguments
/// * `prev_height` - Height of the block preceding the stake
/// * `coin_age` - Coin-days consumed by the stake
/// * `fees` - Transaction fees collected in the block
///
/// # Returns
/// Subsidy plus fees, in base units
pub fn proof_of_stake_reward(prev_height: i64, coin_age: i64, fees: i64) -> i64 {
    let subsidy = coin_age * (COIN_YEAR_REWARD * 2) * 33 / STAKE_YIELD_DENOMINATOR;

    log::debug!(
        "proof_of_stake_reward: prev_height={} coin_age={} subsidy={}",
        prev_height,
        coin_age,
        subsidy
    );

    subsidy + fees
}

//! P2P networking module - Bootstrap seed expansion

mod seeds;

pub use seeds::*;

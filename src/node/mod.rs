//! Node module - Genesis reconstruction and verification

mod genesis;

pub use genesis::*;

//! Mocked Filecoin (Lotus) node records.
//!
//! Every record here replies in the exact shape a Lotus devnet node uses,
//! with the defaults a fresh devnet reports.

mod miner_info;
mod multiaddr;
mod seal_proof;

pub use miner_info::MinerInfo;
pub use multiaddr::Multiaddr;
pub use seal_proof::{RegisteredSealProof, UnknownSealProof};

//! Core types and the deadline computation pipeline
//!
//! This module contains the fundamental types used throughout the kernel
//! (AccountId, Nonce, GenerationSignature, BaseTarget, ScoopIndex) together
//! with nonce buffer generation and deadline computation.

mod account;
mod base_target;
mod deadline;
mod gen_sig;
mod lanes;
mod nonce;
mod noncegen;
mod scoop;

pub use account::AccountId;
pub use base_target::{BaseTarget, Deadline};
pub use deadline::{
    compute_deadline, compute_deadlines, compute_deadlines_batch4, compute_deadlines_batch8,
    select_scoop, BlockParams,
};
pub use gen_sig::GenerationSignature;
pub use lanes::ShabalLanes;
pub use nonce::Nonce;
pub use noncegen::NonceBuffer;
pub use scoop::{PlotLayout, Scoop, ScoopIndex};

/// Constants of the plot format and deadline protocol
pub mod constants {
    /// Size of a Shabal-256 digest in bytes
    pub const HASH_SIZE: usize = 32;

    /// Maximum number of buffer bytes fed into one chain-step hash
    pub const HASH_CAP: usize = 4096;

    /// Size of a scoop in bytes (two digests)
    pub const SCOOP_SIZE: usize = 64;

    /// Number of scoops per nonce
    pub const NUM_SCOOPS: usize = 4096;

    /// Size of the usable plot data of one nonce
    pub const PLOT_SIZE: usize = NUM_SCOOPS * SCOOP_SIZE;

    /// Size of the account id + nonce seed trailing the plot data
    pub const SEED_SIZE: usize = 16;

    /// Total size of the generation buffer (plot data + seed)
    pub const GEN_SIZE: usize = PLOT_SIZE + SEED_SIZE;

    /// Base target of the genesis block
    pub const GENESIS_BASE_TARGET: u64 = 18_325_193_796;

    /// Unix timestamp of the first block
    pub const BLOCKCHAIN_START_TS: i64 = 1_407_722_400;
}

#[cfg(test)]
mod tests {
    use super::constants::*;

    #[test]
    fn test_constants() {
        assert_eq!(HASH_SIZE, 32);
        assert_eq!(HASH_CAP, 4096);
        assert_eq!(SCOOP_SIZE, 64);
        assert_eq!(NUM_SCOOPS, 4096);
        assert_eq!(PLOT_SIZE, 262_144);
        assert_eq!(GEN_SIZE, 262_160);
    }
}

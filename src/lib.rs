//! # Burstmath
//!
//! Proof-of-Capacity deadline computation: the hash kernel a Burst-family
//! miner or pool uses to turn an `(account id, nonce)` pair into a mining
//! deadline for a given block.
//!
//! ## Features
//!
//! - **Scoop selection**: derive the scoop index a block designates from
//!   its height and generation signature
//! - **Deadline pipeline**: nonce buffer generation (reverse Shabal-256
//!   chain with XOR-fold whitening), scoop extraction for both plot layout
//!   generations, and digest-to-deadline reduction
//! - **Lane batching**: 4-wide and 8-wide evaluation that is bit-identical,
//!   lane by lane, to scalar calls
//! - **Request dispatcher**: worker threads that coalesce single requests
//!   into full lanes with a flush timeout
//!
//! ## Architecture
//!
//! Every evaluation is a pure function of its inputs: scratch buffers are
//! allocated on entry and released on return, so callers may invoke the
//! kernel from any number of threads without synchronization. All widths
//! (scalar, 4-lane, 8-lane) run one generic pipeline instantiated over the
//! lane count, which makes scalar/batch divergence impossible.
//!
//! ## Example
//!
//! ```
//! use burstmath::prelude::*;
//!
//! let gen_sig = GenerationSignature::from_hex(
//!     "2a0757c8af2aa43b29515c872385ede31d0742b1ea29b93a1a8c38a11b8a37a0",
//! )?;
//! let params = BlockParams::for_height(
//!     41189,
//!     gen_sig,
//!     BaseTarget::genesis(),
//!     PlotLayout::PoC2,
//! );
//!
//! let deadline = compute_deadline(&params, AccountId::new(10282355196851764065), Nonce::new(6729));
//! assert_eq!(deadline.value(), 0x37143a0a);
//! # Ok::<(), burstmath::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications,
    clippy::all
)]
#![forbid(unsafe_code)]

pub mod core;
pub mod dispatch;
pub mod error;
pub mod utils;

pub use crate::core::{
    compute_deadline, compute_deadlines, compute_deadlines_batch4, compute_deadlines_batch8,
    select_scoop, AccountId, BaseTarget, BlockParams, Deadline, GenerationSignature, Nonce,
    NonceBuffer, PlotLayout, Scoop, ScoopIndex, ShabalLanes,
};
pub use crate::dispatch::{BatchWidth, DeadlineDispatcher, DeadlineRequest, DispatcherConfig};
pub use crate::error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        core::{
            compute_deadline, compute_deadlines, compute_deadlines_batch4,
            compute_deadlines_batch8, select_scoop, AccountId, BaseTarget, BlockParams, Deadline,
            GenerationSignature, Nonce, NonceBuffer, PlotLayout, Scoop, ScoopIndex,
        },
        dispatch::{BatchWidth, DeadlineDispatcher, DeadlineRequest, DispatcherConfig},
        error::{Error, Result},
    };
}

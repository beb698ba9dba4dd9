//! Nonce buffer generation
//!
//! A nonce buffer is the 262,160-byte pseudorandom expansion of an
//! `(account id, nonce)` seed. The trailing 16 bytes hold the seed itself;
//! the leading 262,144 bytes are the usable plot data, back-filled by a
//! reverse Shabal-256 chain and then whitened by XOR-folding a final
//! whole-buffer digest across them.

use crate::core::constants::{GEN_SIZE, HASH_CAP, HASH_SIZE, PLOT_SIZE, SCOOP_SIZE};
use crate::core::lanes::ShabalLanes;
use crate::core::{AccountId, Nonce, PlotLayout, Scoop, ScoopIndex};
use crate::error::{Error, Result};
use std::fmt;

/// Offset of the account id within the seed region
const ACCOUNT_OFFSET: usize = PLOT_SIZE;
/// Offset of the nonce within the seed region
const NONCE_OFFSET: usize = PLOT_SIZE + 8;

/// A generated nonce buffer with its length invariant established at
/// construction
///
/// Scoops are addressed by [`ScoopIndex`], never by raw byte offsets, so
/// all extraction arithmetic lives in one place.
#[derive(Clone, PartialEq, Eq)]
pub struct NonceBuffer {
    bytes: Box<[u8]>,
}

impl NonceBuffer {
    fn zeroed() -> Self {
        Self {
            bytes: vec![0u8; GEN_SIZE].into_boxed_slice(),
        }
    }

    /// Wrap externally produced plot data
    ///
    /// Accepts either a full generation buffer (262,160 bytes, seed
    /// included) or bare plot data (262,144 bytes).
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != GEN_SIZE && bytes.len() != PLOT_SIZE {
            return Err(Error::invalid_buffer(format!(
                "Expected {} or {} bytes, got {}",
                GEN_SIZE,
                PLOT_SIZE,
                bytes.len()
            )));
        }
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Generate the buffer for a single `(account id, nonce)` pair
    pub fn generate(account: AccountId, nonce: Nonce) -> Self {
        let [buffer] = Self::generate_lanes(&[(account, nonce)]);
        buffer
    }

    /// Generate N buffers in lockstep, one per lane
    ///
    /// Lane results are identical to N separate [`NonceBuffer::generate`]
    /// calls; the lanes only share hashing schedule, never data.
    pub fn generate_lanes<const N: usize>(pairs: &[(AccountId, Nonce); N]) -> [Self; N] {
        let mut buffers: [Self; N] = std::array::from_fn(|_| Self::zeroed());

        for (buffer, &(account, nonce)) in buffers.iter_mut().zip(pairs) {
            encode_seed_field(&mut buffer.bytes, ACCOUNT_OFFSET, account.value());
            encode_seed_field(&mut buffer.bytes, NONCE_OFFSET, nonce.value());
        }

        // Reverse hash chain: each 32-byte step digests the buffer from its
        // own offset up to at most HASH_CAP bytes of already-filled data and
        // writes the digest immediately below itself.
        let mut offset = PLOT_SIZE;
        while offset > 0 {
            let len = (GEN_SIZE - offset).min(HASH_CAP);
            let mut lanes = ShabalLanes::<N>::new();
            lanes.update_each(std::array::from_fn(|i| {
                &buffers[i].bytes[offset..offset + len]
            }));
            let digests = lanes.finalize_each();
            for (buffer, digest) in buffers.iter_mut().zip(&digests) {
                buffer.bytes[offset - HASH_SIZE..offset].copy_from_slice(digest);
            }
            offset -= HASH_SIZE;
        }

        // Whiten with the digest of the complete buffer, tiled with period 32
        // over the plot data. The seed region stays unfolded.
        let mut lanes = ShabalLanes::<N>::new();
        lanes.update_each(std::array::from_fn(|i| &buffers[i].bytes[..]));
        let finals = lanes.finalize_each();
        for (buffer, final_digest) in buffers.iter_mut().zip(&finals) {
            for (position, byte) in buffer.bytes[..PLOT_SIZE].iter_mut().enumerate() {
                *byte ^= final_digest[position % HASH_SIZE];
            }
        }

        buffers
    }

    /// The usable plot data (scoop region) of this buffer
    pub fn plot_bytes(&self) -> &[u8] {
        &self.bytes[..PLOT_SIZE]
    }

    /// Extract the 64-byte scoop for `index` under the given layout
    pub fn scoop(&self, index: ScoopIndex, layout: PlotLayout) -> Scoop {
        let mut bytes = [0u8; SCOOP_SIZE];
        bytes[..HASH_SIZE].copy_from_slice(self.scoop_half(index, 0));
        let second = match layout {
            PlotLayout::PoC1 => self.scoop_half(index, 1),
            PlotLayout::PoC2 => self.scoop_half(index.mirror(), 1),
        };
        bytes[HASH_SIZE..].copy_from_slice(second);
        Scoop::from_bytes(bytes)
    }

    fn scoop_half(&self, index: ScoopIndex, half: usize) -> &[u8] {
        let start = index.value() as usize * SCOOP_SIZE + half * HASH_SIZE;
        &self.bytes[start..start + HASH_SIZE]
    }
}

impl fmt::Debug for NonceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonceBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Encode a 64-bit seed field most-significant-byte-first into the buffer
///
/// This byte order is consensus-critical: the account id and nonce are both
/// written this way, and any deviation changes every derived byte.
fn encode_seed_field(bytes: &mut [u8], offset: usize, value: u64) {
    bytes[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

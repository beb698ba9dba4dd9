//! Lane-batched Shabal-256 engine
//!
//! All hashing in the kernel goes through [`ShabalLanes`], which advances N
//! independent Shabal-256 states in lockstep. The scalar pipeline is the
//! N = 1 instantiation and the batch pipelines are N = 4 / N = 8, so every
//! width runs the exact same code and lane results are equal to N separate
//! scalar invocations by construction.

use crate::core::constants::HASH_SIZE;
use shabal::{Digest, Shabal256};

/// N independent Shabal-256 states advanced in lockstep
pub struct ShabalLanes<const N: usize> {
    lanes: [Shabal256; N],
}

impl<const N: usize> ShabalLanes<N> {
    /// Create a fresh engine with all lanes initialized
    pub fn new() -> Self {
        Self {
            lanes: std::array::from_fn(|_| Shabal256::new()),
        }
    }

    /// Feed the same bytes into every lane
    pub fn update_all(&mut self, input: &[u8]) {
        for lane in &mut self.lanes {
            Digest::update(lane, input);
        }
    }

    /// Feed per-lane bytes, one slice per lane
    pub fn update_each(&mut self, inputs: [&[u8]; N]) {
        for (lane, input) in self.lanes.iter_mut().zip(inputs) {
            Digest::update(lane, input);
        }
    }

    /// Finalize all lanes, returning one 32-byte digest per lane
    pub fn finalize_each(self) -> [[u8; HASH_SIZE]; N] {
        self.lanes.map(|lane| lane.finalize().into())
    }
}

impl<const N: usize> Default for ShabalLanes<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience one-shot Shabal-256 over a sequence of input parts
pub(crate) fn shabal256(parts: &[&[u8]]) -> [u8; HASH_SIZE] {
    let mut hasher = Shabal256::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_match_scalar() {
        let inputs: [&[u8]; 4] = [b"alpha", b"bravo", b"charlie", b"delta"];

        let mut lanes = ShabalLanes::<4>::new();
        lanes.update_each(inputs);
        let digests = lanes.finalize_each();

        for (&input, digest) in inputs.iter().zip(&digests) {
            assert_eq!(&shabal256(&[input]), digest);
        }
    }

    #[test]
    fn test_update_all_equals_update_each() {
        let mut shared = ShabalLanes::<8>::new();
        shared.update_all(b"same bytes everywhere");

        let mut each = ShabalLanes::<8>::new();
        each.update_each([b"same bytes everywhere".as_slice(); 8]);

        assert_eq!(shared.finalize_each(), each.finalize_each());
    }

    #[test]
    fn test_incremental_equals_one_shot() {
        let mut lanes = ShabalLanes::<1>::new();
        lanes.update_all(b"split ");
        lanes.update_all(b"input");
        let [digest] = lanes.finalize_each();

        assert_eq!(digest, shabal256(&[b"split input".as_slice()]));
        assert_eq!(
            digest,
            shabal256(&[b"split ".as_slice(), b"input".as_slice()])
        );
    }

    #[test]
    fn test_empty_input_digest_is_stable() {
        let [a] = ShabalLanes::<1>::new().finalize_each();
        let [b] = ShabalLanes::<1>::new().finalize_each();
        assert_eq!(a, b);
    }
}

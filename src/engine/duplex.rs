//! Generic sponge duplex over any [`Permutation`].

use crate::policy::PhasePolicy;
use crate::primitive::Permutation;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Whether the permutation runs after a block is mixed in, or before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermuteOrder {
    /// Mix the block into the state, then permute (GASCON, ACE).
    After,
    /// Permute, then mix the block into the state (Xoodyak).
    Before,
}

/// When a block's domain byte reaches the last state byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainInjection {
    /// Together with the block's data and padding.
    WithData,
    /// Just before the permutation that precedes the block.
    BeforePermute,
}

/// How one phase drives the duplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplexPhase {
    /// Framing, padding and domain constants.
    pub policy: PhasePolicy,
    /// Rounds per permutation call.
    pub rounds: usize,
    /// Permutation placement relative to each block.
    pub order: PermuteOrder,
    /// Domain byte placement.
    pub injection: DomainInjection,
    /// With [`PermuteOrder::After`], also permute after the final block.
    pub permute_last: bool,
}

impl DuplexPhase {
    /// Mix-then-permute phase that permutes after every block.
    pub const fn absorb_then_permute(policy: PhasePolicy, rounds: usize) -> Self {
        Self {
            policy,
            rounds,
            order: PermuteOrder::After,
            injection: DomainInjection::WithData,
            permute_last: true,
        }
    }

    /// Permute-then-mix phase.
    pub const fn permute_then_absorb(policy: PhasePolicy, rounds: usize) -> Self {
        Self {
            policy,
            rounds,
            order: PermuteOrder::Before,
            injection: DomainInjection::WithData,
            permute_last: true,
        }
    }

    /// Leave the final block unpermuted.
    pub const fn holding_last(mut self) -> Self {
        self.permute_last = false;
        self
    }

    /// Inject the domain byte before each permutation.
    pub const fn injecting_before_permute(mut self) -> Self {
        self.injection = DomainInjection::BeforePermute;
        self
    }
}

/// Data handed to one phase.
pub enum Data<'a> {
    /// XOR into the rate.
    Absorb(&'a [u8]),
    /// `c = s ^ m`, and the state takes `c`.
    Encrypt(&'a mut [u8]),
    /// `m = s ^ c`, and the state takes `c`.
    Decrypt(&'a mut [u8]),
}

impl Data<'_> {
    fn len(&self) -> usize {
        match self {
            Data::Absorb(data) => data.len(),
            Data::Encrypt(data) | Data::Decrypt(data) => data.len(),
        }
    }
}

/// A permutation state with a rate at its front and a domain byte at its very end.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Duplex<P: Permutation> {
    state: P,
}

impl<P: Permutation> Default for Duplex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Permutation> Duplex<P> {
    /// All-zero state.
    pub fn new() -> Self {
        Self { state: P::new() }
    }

    /// The raw state bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.state.as_bytes()
    }

    /// The raw state bytes, for key and nonce loading.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.state.as_bytes_mut()
    }

    /// The underlying permutation state.
    #[inline]
    pub fn state_mut(&mut self) -> &mut P {
        &mut self.state
    }

    /// XOR `bytes` into the state starting at `offset`.
    #[inline]
    pub fn xor_at(&mut self, offset: usize, bytes: &[u8]) {
        crate::endian::xor_into(&mut self.state.as_bytes_mut()[offset..], bytes);
    }

    /// XOR a domain byte into the last state byte.
    #[inline]
    pub fn mix_domain(&mut self, domain: u8) {
        if let Some(last) = self.state.as_bytes_mut().last_mut() {
            *last ^= domain;
        }
    }

    /// Run `rounds` rounds of the permutation.
    #[inline]
    pub fn permute(&mut self, rounds: usize) {
        self.state.permute_rounds(rounds);
    }

    /// Process one whole phase.
    pub fn run(&mut self, phase: &DuplexPhase, mut data: Data<'_>) {
        let policy = &phase.policy;

        for plan in policy.blocks(data.len()) {
            let domain = policy.domain.for_block(&plan);

            if phase.order == PermuteOrder::Before {
                if phase.injection == DomainInjection::BeforePermute {
                    self.mix_domain(domain);
                }
                self.permute(phase.rounds);
            }

            let rate = &mut self.state.as_bytes_mut()[..plan.len];
            match &mut data {
                Data::Absorb(input) => crate::endian::xor_into(rate, &input[plan.range()]),
                Data::Encrypt(buffer) => {
                    for (s, m) in rate.iter_mut().zip(&mut buffer[plan.range()]) {
                        *s ^= *m;
                        *m = *s;
                    }
                }
                Data::Decrypt(buffer) => {
                    for (s, c) in rate.iter_mut().zip(&mut buffer[plan.range()]) {
                        let ciphertext = *c;
                        *c ^= *s;
                        *s = ciphertext;
                    }
                }
            }

            if let Some(position) = policy.padding.position(&plan) {
                self.state.as_bytes_mut()[position] ^= policy.padding.marker;
            }
            if phase.injection == DomainInjection::WithData {
                self.mix_domain(domain);
            }

            if phase.order == PermuteOrder::After && (!plan.last || phase.permute_last) {
                self.permute(phase.rounds);
            }
        }

        self.mix_domain(policy.domain.after);
    }
}

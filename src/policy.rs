//! # Padding and domain-separation policy
//!
//! Each phase of a family (associated data, message, hash input) is described by a
//! [`PhasePolicy`]: a plain value saying how the input is cut into blocks, where the padding
//! marker goes and which domain constant is mixed in for each block. The modes never compute
//! block boundaries or domain bytes themselves; they walk the [`BlockPlan`]s produced by
//! [`PhasePolicy::blocks`]. Modes that split input between the state and the cipher tweak use
//! [`DoubleBlockPolicy`] instead.
//!
//! ```
//! use lwc_aead::policy::{Framing, Padding, PhasePolicy};
//!
//! // 8-byte rate, every input ends in a padded block (GASCON, ACE).
//! let policy = PhasePolicy::new(8, Framing::PadAlways).with_padding(Padding::last(0x80));
//!
//! let plans: Vec<_> = policy.blocks(16).collect();
//! assert_eq!(plans.len(), 3);
//! assert_eq!(plans[2].len, 0);
//! assert_eq!(policy.padding.position(&plans[2]), Some(0));
//! ```

use core::ops::Range;

/// How an input is split into rate-sized blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Full blocks followed by one final block of `0..rate` bytes that is always emitted.
    ///
    /// An input that ends exactly on a boundary gets a final block holding only padding.
    PadAlways,

    /// Full blocks followed by a final short block only when bytes remain.
    PadPartial,

    /// The final block carries `1..=rate` bytes (zero only for an empty input).
    LastMayBeFull,
}

/// Which blocks receive the padding marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadScope {
    /// No marker at all.
    None,
    /// Every block, right after its data.
    Every,
    /// The final block of the phase.
    Last,
    /// Blocks shorter than the rate.
    Partial,
}

/// Padding marker and where it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Byte XORed just past the data.
    pub marker: u8,
    /// Blocks that receive the marker.
    pub scope: PadScope,
}

impl Padding {
    /// No padding marker.
    pub const NONE: Self = Self {
        marker: 0,
        scope: PadScope::None,
    };

    /// Marker on every block.
    pub const fn every(marker: u8) -> Self {
        Self {
            marker,
            scope: PadScope::Every,
        }
    }

    /// Marker on the final block.
    pub const fn last(marker: u8) -> Self {
        Self {
            marker,
            scope: PadScope::Last,
        }
    }

    /// Marker on short blocks.
    pub const fn partial(marker: u8) -> Self {
        Self {
            marker,
            scope: PadScope::Partial,
        }
    }

    /// Offset within the block where the marker goes, if this block is padded.
    #[inline]
    pub const fn position(&self, plan: &BlockPlan) -> Option<usize> {
        let padded = match self.scope {
            PadScope::None => false,
            PadScope::Every => true,
            PadScope::Last => plan.last,
            PadScope::Partial => plan.partial,
        };
        if padded { Some(plan.len) } else { None }
    }
}

/// Domain constants mixed into the state or tweak for each block.
///
/// The value for a block is `entry` (first block only) XOR `every` XOR `last` (final block only)
/// XOR `partial` (short blocks only). `after` is mixed once when the phase ends, also when the
/// phase had no blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainRule {
    /// Mixed into the first block of the phase.
    pub entry: u8,
    /// Mixed into every block.
    pub every: u8,
    /// Mixed into short blocks.
    pub partial: u8,
    /// Mixed once after the last block.
    pub after: u8,
    /// Mixed into the final block.
    pub last: u8,
}

impl DomainRule {
    /// No domain separation.
    pub const NONE: Self = Self {
        entry: 0,
        every: 0,
        partial: 0,
        after: 0,
        last: 0,
    };

    /// Domain constant for one block.
    #[inline]
    pub const fn for_block(&self, plan: &BlockPlan) -> u8 {
        let mut value = self.every;
        if plan.first {
            value ^= self.entry;
        }
        if plan.last {
            value ^= self.last;
        }
        if plan.partial {
            value ^= self.partial;
        }
        value
    }
}

/// Block framing, padding and domain separation for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePolicy {
    /// Bytes consumed per block.
    pub rate: usize,
    /// How the input is cut into blocks.
    pub framing: Framing,
    /// Emit no block at all for an empty input.
    pub skip_empty: bool,
    /// Padding marker placement.
    pub padding: Padding,
    /// Domain constants.
    pub domain: DomainRule,
}

impl PhasePolicy {
    /// Policy with the given rate and framing, no padding and no domain separation.
    pub const fn new(rate: usize, framing: Framing) -> Self {
        Self {
            rate,
            framing,
            skip_empty: false,
            padding: Padding::NONE,
            domain: DomainRule::NONE,
        }
    }

    /// Replace the padding rule.
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the domain rule.
    pub const fn with_domain(mut self, domain: DomainRule) -> Self {
        self.domain = domain;
        self
    }

    /// Produce no blocks for an empty input.
    pub const fn skipping_empty(mut self) -> Self {
        self.skip_empty = true;
        self
    }

    /// Plan the blocks for an input of `len` bytes.
    pub const fn blocks(&self, len: usize) -> Blocks {
        Blocks {
            rate: self.rate,
            framing: self.framing,
            total: len,
            offset: 0,
            first: true,
            done: self.skip_empty && len == 0,
        }
    }
}

/// One block of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    /// Offset of the block's data in the phase input.
    pub offset: usize,
    /// Number of input bytes in the block.
    pub len: usize,
    /// First block of the phase.
    pub first: bool,
    /// Last block of the phase.
    pub last: bool,
    /// Shorter than the rate.
    pub partial: bool,
}

impl BlockPlan {
    /// Input range covered by this block.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Iterator over the [`BlockPlan`]s of one phase.
#[derive(Debug, Clone)]
pub struct Blocks {
    rate: usize,
    framing: Framing,
    total: usize,
    offset: usize,
    first: bool,
    done: bool,
}

impl Iterator for Blocks {
    type Item = BlockPlan;

    fn next(&mut self) -> Option<BlockPlan> {
        if self.done {
            return None;
        }

        let remaining = self.total - self.offset;
        let (len, last) = match self.framing {
            Framing::PadAlways if remaining >= self.rate => (self.rate, false),
            Framing::PadAlways => (remaining, true),
            Framing::PadPartial if remaining == 0 => {
                self.done = true;
                return None;
            }
            Framing::PadPartial if remaining >= self.rate => (self.rate, remaining == self.rate),
            Framing::PadPartial => (remaining, true),
            Framing::LastMayBeFull if remaining > self.rate => (self.rate, false),
            Framing::LastMayBeFull => (remaining, true),
        };

        let plan = BlockPlan {
            offset: self.offset,
            len,
            first: self.first,
            last,
            partial: len < self.rate,
        };

        self.offset += len;
        self.first = false;
        self.done = last;

        Some(plan)
    }
}

/// Framing for modes that alternate between a block absorbed into the state and a block loaded
/// into the cipher's tweak (Romulus-N associated data).
///
/// Each [`DoubleBlockPlan`] holds a state block of up to `state_rate` bytes followed, when input
/// remains, by a tweak block of up to `tweak_rate` bytes. An empty input yields one empty state
/// block. The input's final block, state or tweak, holds `1..=rate` bytes.
///
/// ```
/// use lwc_aead::policy::DoubleBlockPolicy;
///
/// let policy = DoubleBlockPolicy::new(16, 12);
/// let pairs: Vec<_> = policy.pairs(40).collect();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].tweak.map(|t| t.len), Some(12));
/// assert_eq!(pairs[1].state.len, 12);
/// assert!(pairs[1].tweak.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleBlockPolicy {
    /// Bytes absorbed into the state per pair.
    pub state_rate: usize,
    /// Bytes loaded into the tweak per pair.
    pub tweak_rate: usize,
    /// Domain constants; `every` applies to each pair, `after` and `partial` to the closing step.
    pub domain: DomainRule,
}

impl DoubleBlockPolicy {
    /// Policy with the given rates and no domain separation.
    pub const fn new(state_rate: usize, tweak_rate: usize) -> Self {
        Self {
            state_rate,
            tweak_rate,
            domain: DomainRule::NONE,
        }
    }

    /// Replace the domain rule.
    pub const fn with_domain(mut self, domain: DomainRule) -> Self {
        self.domain = domain;
        self
    }

    /// Domain constant of the step that closes the phase, given its final block.
    #[inline]
    pub const fn closing_domain(&self, last: &BlockPlan) -> u8 {
        if last.partial {
            self.domain.after ^ self.domain.partial
        } else {
            self.domain.after
        }
    }

    /// Plan the pairs for an input of `len` bytes.
    pub const fn pairs(&self, len: usize) -> DoubleBlocks {
        DoubleBlocks {
            state_rate: self.state_rate,
            tweak_rate: self.tweak_rate,
            total: len,
            offset: 0,
            first: true,
            done: false,
        }
    }
}

/// A state block and the tweak block that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleBlockPlan {
    /// Block absorbed into the state.
    pub state: BlockPlan,
    /// Block loaded into the tweak; `None` when the input ended with the state block.
    pub tweak: Option<BlockPlan>,
}

impl DoubleBlockPlan {
    /// The later of the two blocks.
    #[inline]
    pub const fn last_block(&self) -> &BlockPlan {
        match &self.tweak {
            Some(tweak) => tweak,
            None => &self.state,
        }
    }
}

/// Iterator over the [`DoubleBlockPlan`]s of one phase.
#[derive(Debug, Clone)]
pub struct DoubleBlocks {
    state_rate: usize,
    tweak_rate: usize,
    total: usize,
    offset: usize,
    first: bool,
    done: bool,
}

impl DoubleBlocks {
    fn cut(&mut self, rate: usize) -> BlockPlan {
        let remaining = self.total - self.offset;
        let len = if remaining < rate { remaining } else { rate };
        let plan = BlockPlan {
            offset: self.offset,
            len,
            first: self.first,
            last: remaining <= rate,
            partial: len < rate,
        };
        self.offset += len;
        self.first = false;
        self.done = plan.last;
        plan
    }
}

impl Iterator for DoubleBlocks {
    type Item = DoubleBlockPlan;

    fn next(&mut self) -> Option<DoubleBlockPlan> {
        if self.done {
            return None;
        }

        let state = self.cut(self.state_rate);
        let tweak = if state.last {
            None
        } else {
            Some(self.cut(self.tweak_rate))
        };

        Some(DoubleBlockPlan { state, tweak })
    }
}

#[cfg(test)]
mod tests;

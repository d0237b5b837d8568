extern crate std;
use super::*;
use std::vec::Vec;

fn lengths(policy: &PhasePolicy, len: usize) -> Vec<usize> {
    policy.blocks(len).map(|plan| plan.len).collect()
}

#[test]
fn pad_always_adds_padding_block_on_boundary() {
    let policy = PhasePolicy::new(8, Framing::PadAlways);
    assert_eq!(lengths(&policy, 0), [0]);
    assert_eq!(lengths(&policy, 7), [7]);
    assert_eq!(lengths(&policy, 8), [8, 0]);
    assert_eq!(lengths(&policy, 17), [8, 8, 1]);
}

#[test]
fn pad_partial_stops_on_boundary() {
    let policy = PhasePolicy::new(16, Framing::PadPartial);
    assert_eq!(lengths(&policy, 0), [0usize; 0]);
    assert_eq!(lengths(&policy, 16), [16]);
    assert_eq!(lengths(&policy, 20), [16, 4]);

    let plans: Vec<_> = policy.blocks(32).collect();
    assert!(!plans[0].last);
    assert!(plans[1].last);
    assert!(!plans[1].partial);
}

#[test]
fn last_may_be_full_keeps_final_full_block() {
    let policy = PhasePolicy::new(24, Framing::LastMayBeFull);
    assert_eq!(lengths(&policy, 0), [0]);
    assert_eq!(lengths(&policy, 24), [24]);
    assert_eq!(lengths(&policy, 25), [24, 1]);
    assert_eq!(lengths(&policy, 48), [24, 24]);
}

#[test]
fn skip_empty_produces_nothing() {
    let policy = PhasePolicy::new(8, Framing::PadAlways).skipping_empty();
    assert_eq!(policy.blocks(0).count(), 0);
    assert_eq!(lengths(&policy, 3), [3]);
}

#[test]
fn plans_cover_input_exactly_once() {
    for framing in [Framing::PadAlways, Framing::PadPartial, Framing::LastMayBeFull] {
        for rate in [8usize, 16, 24, 44] {
            for len in 0..(3 * rate + 2) {
                let policy = PhasePolicy::new(rate, framing);
                let plans: Vec<_> = policy.blocks(len).collect();

                let mut offset = 0;
                for plan in &plans {
                    assert_eq!(plan.offset, offset, "{framing:?} rate {rate} len {len}");
                    assert!(plan.len <= rate);
                    offset += plan.len;
                }
                assert_eq!(offset, len);

                if !plans.is_empty() {
                    assert!(plans[0].first);
                    assert_eq!(plans.iter().filter(|p| p.first).count(), 1);
                    assert_eq!(plans.iter().filter(|p| p.last).count(), 1);
                    assert!(plans[plans.len() - 1].last);
                }
            }
        }
    }
}

#[test]
fn padding_scopes() {
    let policy = PhasePolicy::new(8, Framing::PadAlways);
    let plans: Vec<_> = policy.blocks(8).collect();

    assert_eq!(Padding::last(0x80).position(&plans[0]), None);
    assert_eq!(Padding::last(0x80).position(&plans[1]), Some(0));
    assert_eq!(Padding::every(0x01).position(&plans[0]), Some(8));
    assert_eq!(Padding::partial(0x01).position(&plans[0]), None);
    assert_eq!(Padding::partial(0x01).position(&plans[1]), Some(0));
    assert_eq!(Padding::NONE.position(&plans[1]), None);
}

#[test]
fn domain_rule_combines_entry_every_and_partial() {
    let rule = DomainRule {
        entry: 0x08,
        every: 0x00,
        partial: 0x10,
        after: 0x00,
        last: 0x00,
    };
    let policy = PhasePolicy::new(16, Framing::PadPartial).with_domain(rule);

    let plans: Vec<_> = policy.blocks(20).collect();
    assert_eq!(rule.for_block(&plans[0]), 0x08);
    assert_eq!(rule.for_block(&plans[1]), 0x10);

    let single: Vec<_> = policy.blocks(5).collect();
    assert_eq!(rule.for_block(&single[0]), 0x18);
}

#[test]
fn block_kinds_get_distinct_domains() {
    // Tweak-style table: full, partial and the AD/message split must never collide.
    let ad = DomainRule {
        entry: 0,
        every: 0x02,
        partial: 0x01,
        after: 0,
        last: 0,
    };
    let message = DomainRule {
        entry: 0,
        every: 0x00,
        partial: 0x01,
        after: 0,
        last: 0,
    };
    let policy = PhasePolicy::new(16, Framing::PadPartial);
    let plans: Vec<_> = policy.blocks(17).collect();

    let mut seen = Vec::new();
    for rule in [ad, message] {
        for plan in &plans {
            seen.push(rule.for_block(plan));
        }
    }
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

#[test]
fn last_domain_marks_final_block() {
    let rule = DomainRule {
        every: 0x04,
        last: 0x10,
        partial: 0x01,
        ..DomainRule::NONE
    };
    let policy = PhasePolicy::new(16, Framing::LastMayBeFull).with_domain(rule);

    let full: Vec<_> = policy.blocks(32).map(|plan| rule.for_block(&plan)).collect();
    assert_eq!(full, [0x04, 0x14]);
    let short: Vec<_> = policy.blocks(20).map(|plan| rule.for_block(&plan)).collect();
    assert_eq!(short, [0x04, 0x15]);
    let empty: Vec<_> = policy.blocks(0).map(|plan| rule.for_block(&plan)).collect();
    assert_eq!(empty, [0x15]);
}

fn pair_lengths(policy: &DoubleBlockPolicy, len: usize) -> Vec<(usize, Option<usize>)> {
    policy
        .pairs(len)
        .map(|pair| (pair.state.len, pair.tweak.map(|tweak| tweak.len)))
        .collect()
}

#[test]
fn double_blocks_alternate_state_and_tweak() {
    let policy = DoubleBlockPolicy::new(16, 16);
    assert_eq!(pair_lengths(&policy, 0), [(0, None)]);
    assert_eq!(pair_lengths(&policy, 5), [(5, None)]);
    assert_eq!(pair_lengths(&policy, 16), [(16, None)]);
    assert_eq!(pair_lengths(&policy, 17), [(16, Some(1))]);
    assert_eq!(pair_lengths(&policy, 32), [(16, Some(16))]);
    assert_eq!(pair_lengths(&policy, 48), [(16, Some(16)), (16, None)]);
    assert_eq!(pair_lengths(&policy, 65), [(16, Some(16)), (16, Some(16)), (1, None)]);

    let narrow = DoubleBlockPolicy::new(16, 12);
    assert_eq!(pair_lengths(&narrow, 28), [(16, Some(12))]);
    assert_eq!(pair_lengths(&narrow, 29), [(16, Some(12)), (1, None)]);
    assert_eq!(pair_lengths(&narrow, 56), [(16, Some(12)), (16, Some(12))]);
}

#[test]
fn double_blocks_cover_input_once() {
    let policy = DoubleBlockPolicy::new(16, 12);
    for len in 0..100 {
        let mut next = 0;
        let pairs: Vec<_> = policy.pairs(len).collect();
        for (index, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.state.first, index == 0);
            assert_eq!(pair.state.offset, next);
            next = pair.state.range().end;
            if let Some(tweak) = pair.tweak {
                assert!(!pair.state.partial);
                assert_eq!(tweak.offset, next);
                next = tweak.range().end;
            }
        }
        assert_eq!(next, len);
        let last = pairs.last().map(|pair| *pair.last_block()).unwrap();
        assert!(last.last);
        assert!(last.len > 0 || len == 0);
    }
}

#[test]
fn closing_domain_flags_partial_endings() {
    let policy = DoubleBlockPolicy::new(16, 16).with_domain(DomainRule {
        every: 0x08,
        partial: 0x02,
        after: 0x18,
        ..DomainRule::NONE
    });
    let closing = |len: usize| {
        let last = policy.pairs(len).last().unwrap();
        policy.closing_domain(last.last_block())
    };
    assert_eq!(closing(0), 0x1a);
    assert_eq!(closing(15), 0x1a);
    assert_eq!(closing(16), 0x18);
    assert_eq!(closing(20), 0x1a);
    assert_eq!(closing(32), 0x18);
    assert_eq!(policy.domain.for_block(&policy.pairs(32).next().unwrap().state), 0x08);
}

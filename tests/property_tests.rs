use bootforge::keymap::{compile, Rule, RuleValue, TABLE_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

prop_compose! {
    fn arb_rule()(
        scancode in any::<u8>(),
        normal in any::<u8>(),
        shift in any::<u8>(),
        special in proptest::option::of(any::<u8>())
    ) -> Rule {
        Rule {
            scancode,
            normal: RuleValue::Byte(normal),
            shift: RuleValue::Byte(shift),
            special: special.map(RuleValue::Byte),
        }
    }
}

proptest! {
    #[test]
    fn table_is_always_768_bytes(rules in proptest::collection::vec(arb_rule(), 0..64)) {
        let table = compile(&rules).unwrap();
        prop_assert_eq!(table.as_bytes().len(), TABLE_SIZE);
    }

    #[test]
    fn unassigned_cells_stay_zero(rules in proptest::collection::vec(arb_rule(), 0..64)) {
        let table = compile(&rules).unwrap();
        let assigned: HashSet<u8> = rules.iter().map(|r| r.scancode).collect();
        for scancode in 0..=255u8 {
            if !assigned.contains(&scancode) {
                prop_assert_eq!(table.normal(scancode), 0);
                prop_assert_eq!(table.shift(scancode), 0);
                prop_assert_eq!(table.special(scancode), 0);
            }
        }
    }

    #[test]
    fn last_rule_wins_on_normal_and_shift(rules in proptest::collection::vec(arb_rule(), 1..64)) {
        let table = compile(&rules).unwrap();
        for scancode in 0..=255u8 {
            if let Some(last) = rules.iter().rev().find(|r| r.scancode == scancode) {
                prop_assert_eq!(table.normal(scancode), last.normal.resolve().unwrap());
                prop_assert_eq!(table.shift(scancode), last.shift.resolve().unwrap());
            }
        }
    }

    #[test]
    fn compilation_is_idempotent(rules in proptest::collection::vec(arb_rule(), 0..64)) {
        let a = compile(&rules).unwrap();
        let b = compile(&rules).unwrap();
        prop_assert_eq!(a, b);
    }
}

use muxgen_ir::{compare_names, NameKey};
use proptest::prelude::*;
use std::cmp::Ordering;

proptest! {
    #[test]
    fn test_fuzz_compare_is_reflexive(name in "[A-Z_]{0,6}[0-9]{0,4}[A-Za-z_0-9]{0,6}") {
        prop_assert_eq!(compare_names(&name, &name), Ordering::Equal);
    }

    #[test]
    fn test_fuzz_compare_is_antisymmetric(
        a in "[A-Z_]{0,4}[0-9]{0,3}[A-Z0-9]{0,4}",
        b in "[A-Z_]{0,4}[0-9]{0,3}[A-Z0-9]{0,4}",
    ) {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
    }

    #[test]
    fn test_fuzz_numbers_sort_descending(
        prefix in "[A-Z]{1,4}",
        x in 0u32..100_000,
        y in 0u32..100_000,
    ) {
        let a = format!("{}{}", prefix, x);
        let b = format!("{}{}", prefix, y);
        prop_assert_eq!(compare_names(&a, &b), y.cmp(&x));
    }

    #[test]
    fn test_fuzz_name_key_sort_is_stable_total_order(
        mut names in prop::collection::vec("PT[A-E][0-9]{1,2}", 1..20)
    ) {
        let mut keys: Vec<NameKey> = names.iter().map(|n| NameKey::new(n.as_str())).collect();
        keys.sort();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
            prop_assert_ne!(compare_names(pair[0].as_str(), pair[1].as_str()), Ordering::Greater);
        }
        names.sort();
        names.dedup();
        let mut distinct: Vec<&str> = keys.iter().map(NameKey::as_str).collect();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), names.len());
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(compare_names("PTA10", "PTA2"), Ordering::Less);
    assert_eq!(compare_names("ADC0_SE4", "ADC0_SE4a"), Ordering::Less);
}

use editable_areas_engine::{NamingStrategy, NestedNamingStrategy};
use proptest::prelude::*;

// Small alphabet heavy on separator characters to provoke collisions
fn component() -> impl Strategy<Value = String> {
    "[ab.:#\\\\]{0,4}"
}

fn descriptor() -> impl Strategy<Value = (String, String, Vec<String>, u32)> {
    (
        component(),
        component(),
        prop::collection::vec(component(), 0..3),
        0u32..3,
    )
}

proptest! {
    #[test]
    fn child_names_are_deterministic((name, kind, chain, index) in descriptor()) {
        let strategy = NestedNamingStrategy::new();
        prop_assert_eq!(
            strategy.build_child_element_name(&name, &kind, &chain, index),
            strategy.build_child_element_name(&name, &kind, &chain, index)
        );
    }

    #[test]
    fn distinct_descriptors_never_collide(a in descriptor(), b in descriptor()) {
        prop_assume!(a != b);
        let strategy = NestedNamingStrategy::new();
        let (name_a, kind_a, chain_a, index_a) = &a;
        let (name_b, kind_b, chain_b, index_b) = &b;

        prop_assert_ne!(
            strategy.build_child_element_name(name_a, kind_a, chain_a, *index_a),
            strategy.build_child_element_name(name_b, kind_b, chain_b, *index_b)
        );
    }
}

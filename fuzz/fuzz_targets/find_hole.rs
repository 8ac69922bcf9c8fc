#![no_main]

use libfuzzer_sys::fuzz_target;

use holes::{
    algo::{is_hole, Hole},
    storage::AdjList,
};

fuzz_target!(|graph: AdjList<(), ()>| {
    let detected = Hole::on(&graph).detect();
    let found = Hole::on(&graph).run();

    match (detected, found) {
        (Ok(detected), Ok(Some(hole))) => {
            assert!(detected, "hole {hole:?} found but not detected");
            assert!(is_hole(&graph, hole.vertices()), "{hole:?} is not a hole");
        }
        (Ok(detected), Ok(None)) => assert!(!detected, "hole detected but not found"),
        (Err(lhs), Err(rhs)) => assert_eq!(lhs, rhs),
        (lhs, rhs) => panic!("inconsistent results: {lhs:?} and {rhs:?}"),
    }
});

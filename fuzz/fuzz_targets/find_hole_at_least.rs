#![no_main]

use libfuzzer_sys::fuzz_target;

use holes::{
    algo::{is_hole, Hole},
    storage::AdjList,
};

fuzz_target!(|input: (AdjList<(), ()>, u8)| {
    let (graph, min_len) = input;
    let min_len = 4 + min_len as usize % 8;

    if let Ok(Some(hole)) = Hole::on(&graph).min_len(min_len).run() {
        assert!(hole.len() >= min_len, "{hole:?} is shorter than {min_len}");
        assert!(is_hole(&graph, hole.vertices()), "{hole:?} is not a hole");

        // A hole of the given length implies a hole.
        assert_eq!(Hole::on(&graph).detect(), Ok(true));
    }
});

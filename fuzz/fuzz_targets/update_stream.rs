#![no_main]

use bigsmall::model::{PatternModel, DEFAULT_WINDOW, PATTERN_CTX};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut model = PatternModel::<PATTERN_CTX>::new();

    for byte in data {
        let _ = model.update(*byte);
        let history = model.get_history();
        assert!(history.len() <= DEFAULT_WINDOW);
        assert!(history.iter().all(|digit| *digit <= 9));
    }
});

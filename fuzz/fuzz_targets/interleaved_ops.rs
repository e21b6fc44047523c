#![no_main]

use bigsmall::model::{PatternModel, PATTERN_CTX};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

fuzz_target!(|data: &[u8]| {
    let mut rng = StdRng::seed_from_u64(0);
    let mut model = PatternModel::<PATTERN_CTX>::with_window(4);

    for byte in data {
        match byte {
            0xff => model.reset(),
            0xfe => {
                let (_, confidence) = model.predict(&mut rng);
                assert!((0.5..=1.0).contains(&confidence));
            }
            _ => {
                let _ = model.update(*byte);
            }
        }
        assert!(model.get_history().len() <= 4);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use patternlock_harness::{Trace, replay};

fuzz_target!(|data: &[u8]| {
    // Malformed traces must surface as errors, never panics.
    let Ok(mut trace) = Trace::from_reader(data) else {
        return;
    };
    trace.events.truncate(512);
    // Grid dimensions are a caller precondition; keep them allocatable.
    match trace.effective_config() {
        Ok(config) if config.rows <= 64 && config.columns <= 64 => {}
        _ => return,
    }
    let _ = replay(&trace, None);
});

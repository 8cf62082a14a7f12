//! Checks that no probe call leaks its descriptor, by comparing
//! `/proc/self/fd` before and after.
//!
//! This lives in its own test binary so no sibling test opens files
//! concurrently while the descriptors are counted.

use std::fs;

fn open_fds() -> usize {
    fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn probes_close_their_descriptor() {
    // Warm up lazy initialization (logger, stdio) before the baseline.
    let mut scratch = [0; 16];
    evprobe::device_name("/dev/null", &mut scratch);
    evprobe::device_name("/dev/input/event-does-not-exist", &mut scratch);

    let before = open_fds();
    for _ in 0..64 {
        let mut id = [0; 4];
        evprobe::device_id("/dev/null", &mut id);
        evprobe::device_id("/dev/input/event-does-not-exist", &mut id);

        evprobe::driver_version("/dev/null");

        let mut name = [0; 32];
        evprobe::device_name("/dev/null", &mut name);

        let mut words = [0u64; 2];
        evprobe::event_type_bits("/dev/null", &mut words, 0, 16);

        let mut params = [0; 5];
        evprobe::abs_axis_info("/dev/null", &mut params, 0);

        let _ = evprobe::SupportedEvents::scan("/dev/null");
    }
    assert_eq!(open_fds(), before);
}

//! Smoke tests against whatever evdev nodes the local system has.
//!
//! On machines without readable input devices (most CI runners) the loops
//! here simply have nothing to iterate over.

use std::fs::{self, File};
use std::path::PathBuf;

use evprobe::{AxisParams, EventType, SupportedEvents};

fn readable_devices() -> Vec<PathBuf> {
    let Ok(dir) = fs::read_dir("/dev/input") else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = dir
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().as_encoded_bytes().starts_with(b"event"))
        .map(|entry| entry.path())
        .filter(|path| File::open(path).is_ok())
        .collect();
    paths.sort();
    paths
}

#[test]
fn probe_local_devices() {
    for path in readable_devices() {
        let mut id = [0; 4];
        assert!(evprobe::device_id(&path, &mut id), "{}", path.display());

        let version = evprobe::driver_version(&path);
        assert_ne!(version, 0, "no driver version for {}", path.display());

        let name = evprobe::device_name_lossy(&path);
        assert!(name.is_some(), "no name for {}", path.display());

        let caps = SupportedEvents::scan(&path)
            .unwrap_or_else(|| panic!("capability scan failed for {}", path.display()));
        for ty in caps.types() {
            assert!(ty.raw() <= EventType::MAX.raw());
        }
        for &axis in caps.codes(EventType::ABS) {
            let params = AxisParams::read_from(&path, axis);
            assert!(params.is_some(), "no parameters for axis {axis} of {}", path.display());
        }
    }
}

#[test]
fn probing_is_idempotent() {
    for path in readable_devices() {
        assert_eq!(evprobe::driver_version(&path), evprobe::driver_version(&path));

        let mut first = [0; 4];
        let mut second = [0; 4];
        evprobe::device_id(&path, &mut first);
        evprobe::device_id(&path, &mut second);
        assert_eq!(first, second);

        let mut name1 = [0; 128];
        let mut name2 = [0; 128];
        evprobe::device_name(&path, &mut name1);
        evprobe::device_name(&path, &mut name2);
        assert_eq!(name1, name2);
    }
}

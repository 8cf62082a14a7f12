//! Prints everything the probe calls can learn about input devices.
//!
//! Device paths can be passed as arguments; without arguments, all of
//! `/dev/input/event*` is probed.

use std::{env, error::Error, fs, io, path::PathBuf, process};

use evprobe::{Abs, AxisParams, DeviceId, DriverVersion, EventType, SupportedEvents};

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("\nerror: {e}");
            let mut error: &dyn Error = &e;
            while let Some(source) = error.source() {
                eprintln!("- caused by: {source}");
                error = source;
            }
            process::exit(1);
        }
    }
}

fn run() -> io::Result<()> {
    let mut paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        for entry in fs::read_dir("/dev/input")? {
            let entry = entry?;
            if entry.file_name().as_encoded_bytes().starts_with(b"event") {
                paths.push(entry.path());
            }
        }
        paths.sort();
    }

    for path in paths {
        println!("- {}", path.display());
        let Some(id) = DeviceId::read_from(&path) else {
            println!("  (unavailable)");
            continue;
        };
        println!("  id: {id:?}");
        println!("  driver version: {}", DriverVersion::read_from(&path));
        if let Some(name) = evprobe::device_name_lossy(&path) {
            println!("  name: {name:?}");
        }

        let Some(caps) = SupportedEvents::scan(&path) else {
            continue;
        };
        for ty in caps.types() {
            println!("  - {ty:?}: {} codes", caps.codes(ty).len());
        }
        for &axis in caps.codes(EventType::ABS) {
            match AxisParams::read_from(&path, axis) {
                Some(params) => println!("  - {:?}: {params:?}", Abs::from_raw(axis)),
                None => println!("  - {:?}: <unavailable>", Abs::from_raw(axis)),
            }
        }
    }

    Ok(())
}

//! One-shot metadata queries against evdev nodes.
//!
//! Every function here follows the same lifecycle: open the device path
//! read-only, perform a single ioctl, close the descriptor, report the
//! outcome. Nothing is cached and no handle outlives the call, so callers
//! can probe arbitrary paths without tracking device state.
//!
//! A device that cannot be opened reports `false` (or `0` for
//! [`driver_version`]) and leaves the caller's buffer untouched. Once the
//! open has succeeded, the buffer operations report `true` even when the
//! ioctl itself fails; such failures only show up in the [`log`] output.

use std::{
    ffi::{c_char, c_int},
    fs::File,
    path::Path,
};

use uoctl::Ioctl;

use crate::raw::{
    EVIOCGABS, EVIOCGBIT, EVIOCGID, EVIOCGNAME, EVIOCGVERSION, MAX_IOC_SIZE, input_absinfo,
    input_id,
};
use crate::{Abs, EventType};

/// Number of `i32`s [`abs_axis_info`] fills in: value, minimum, maximum,
/// fuzz, and flat.
pub const AXIS_FIELDS: usize = 5;

fn open_readonly(path: &Path) -> Option<File> {
    match File::open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("couldn't open '{}': {e}", path.display());
            None
        }
    }
}

/// Performs `ioctl` on `file`, folding failure into a log line.
///
/// # Safety
///
/// `arg` must be valid for the request, including the writable size the
/// request encodes.
unsafe fn query<T>(file: &File, path: &Path, name: &'static str, ioctl: Ioctl<T>, arg: T) -> bool {
    match unsafe { ioctl.ioctl(file, arg) } {
        Ok(_) => true,
        Err(e) => {
            log::debug!("{name} failed for '{}': {e}", path.display());
            false
        }
    }
}

/// Queries the identity of the device behind `path`.
///
/// On success `id` holds the bus type, vendor, product, and version fields
/// of the kernel's `input_id`, in that order. [`DeviceId`][crate::DeviceId]
/// is the field-named view of the same data.
///
/// Returns `false` when the device cannot be opened, leaving `id` untouched.
#[doc(alias = "EVIOCGID")]
pub fn device_id<P: AsRef<Path>>(path: P, id: &mut [i16; 4]) -> bool {
    device_id_impl(path.as_ref(), id)
}

fn device_id_impl(path: &Path, id: &mut [i16; 4]) -> bool {
    let Some(file) = open_readonly(path) else {
        return false;
    };

    // `[i16; 4]` and `input_id` share size and alignment.
    let ptr = id.as_mut_ptr().cast::<input_id>();
    unsafe {
        query(&file, path, "EVIOCGID", EVIOCGID, ptr);
    }
    true
}

/// Queries the evdev protocol version spoken by the driver.
///
/// Returns `0` when the device cannot be opened or the query fails, which
/// callers treat as "version unknown".
#[doc(alias = "EVIOCGVERSION")]
pub fn driver_version<P: AsRef<Path>>(path: P) -> i32 {
    driver_version_impl(path.as_ref())
}

fn driver_version_impl(path: &Path) -> i32 {
    let Some(file) = open_readonly(path) else {
        return 0;
    };

    let mut version: c_int = 0;
    if !unsafe { query(&file, path, "EVIOCGVERSION", EVIOCGVERSION, &mut version) } {
        return 0;
    }
    version
}

/// Reads the device name into `name`.
///
/// The kernel truncates the name to the buffer and NUL-terminates it. The
/// requested length is additionally capped at the 14-bit maximum an ioctl
/// request can encode.
///
/// Returns `false` when the device cannot be opened, leaving `name`
/// untouched.
#[doc(alias = "EVIOCGNAME")]
pub fn device_name<P: AsRef<Path>>(path: P, name: &mut [u8]) -> bool {
    device_name_impl(path.as_ref(), name)
}

fn device_name_impl(path: &Path, name: &mut [u8]) -> bool {
    let Some(file) = open_readonly(path) else {
        return false;
    };

    let len = name.len().min(MAX_IOC_SIZE);
    unsafe {
        query(
            &file,
            path,
            "EVIOCGNAME",
            EVIOCGNAME(len),
            name.as_mut_ptr() as *mut c_char,
        );
    }
    true
}

/// Reads the device name as a string.
///
/// Convenience over [`device_name`] with a 255-byte buffer. The result is
/// trimmed at the kernel's NUL terminator and decoded lossily.
///
/// Returns [`None`] when the device cannot be opened.
pub fn device_name_lossy<P: AsRef<Path>>(path: P) -> Option<String> {
    let mut buf = [0; 255];
    if !device_name(path, &mut buf) {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..end]).into_owned())
}

/// Fills `dest` with a supported-event bitmask of the device behind `path`.
///
/// `ty == 0` selects the mask of supported event *types*; any other value
/// selects the code mask of that event type (key codes for
/// [`EventType::KEY`], and so on). `len` is the byte count to request from
/// the kernel; it is clamped to what `dest` can hold and to the 14-bit
/// request maximum. The kernel stops at the actual mask length, shorter
/// requests simply truncate the mask.
///
/// Bit `N` of the result is set when code `N` is supported, in `u64` word
/// order (see [`bits`][crate::bits]).
///
/// Returns `false` without touching the filesystem when `ty` exceeds
/// [`EventType::MAX`]. Otherwise `false` means the device could not be
/// opened and `dest` is untouched.
#[doc(alias = "EVIOCGBIT")]
pub fn event_type_bits<P: AsRef<Path>>(path: P, dest: &mut [u64], ty: u16, len: usize) -> bool {
    event_type_bits_impl(path.as_ref(), dest, ty, len)
}

fn event_type_bits_impl(path: &Path, dest: &mut [u64], ty: u16, len: usize) -> bool {
    if ty > EventType::MAX.raw() {
        log::debug!("event type {ty:#x} is out of range, not probing '{}'", path.display());
        return false;
    }

    let Some(file) = open_readonly(path) else {
        return false;
    };

    let len = len.min(dest.len() * size_of::<u64>()).min(MAX_IOC_SIZE);
    unsafe {
        query(
            &file,
            path,
            "EVIOCGBIT",
            EVIOCGBIT(ty as u8, len),
            dest.as_mut_ptr().cast(),
        );
    }
    true
}

/// Reads the parameters of absolute axis `axis` into `dest`.
///
/// The first [`AXIS_FIELDS`] elements receive the current value, minimum,
/// maximum, fuzz, and flat, in that order. Extra elements stay untouched.
/// [`AxisParams`][crate::AxisParams] is the field-named view of the same
/// data.
///
/// Returns `false` without touching the filesystem when `dest` holds fewer
/// than [`AXIS_FIELDS`] elements or `axis` exceeds [`Abs::MAX`]. Otherwise
/// `false` means the device could not be opened and `dest` is untouched.
#[doc(alias = "EVIOCGABS")]
pub fn abs_axis_info<P: AsRef<Path>>(path: P, dest: &mut [i32], axis: u16) -> bool {
    abs_axis_info_impl(path.as_ref(), dest, axis)
}

fn abs_axis_info_impl(path: &Path, dest: &mut [i32], axis: u16) -> bool {
    if dest.len() < AXIS_FIELDS {
        log::debug!(
            "axis parameter buffer holds {} elements, need {AXIS_FIELDS}",
            dest.len()
        );
        return false;
    }
    if axis > Abs::MAX.raw() {
        log::debug!("absolute axis {axis:#x} is out of range, not probing '{}'", path.display());
        return false;
    }

    let Some(file) = open_readonly(path) else {
        return false;
    };

    // `input_absinfo` is 5 consecutive `i32`s, matching `dest[..5]`.
    let ptr = dest.as_mut_ptr().cast::<input_absinfo>();
    unsafe {
        query(&file, path, "EVIOCGABS", EVIOCGABS(axis as u8), ptr);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // `/dev/null` opens fine and rejects every evdev ioctl, so `false` from
    // these calls can only come from the pre-open validation.

    #[test]
    fn short_axis_buffer_is_rejected_before_open() {
        let mut long = [0; 5];
        assert!(abs_axis_info("/dev/null", &mut long, 0));

        let mut short = [0; 4];
        assert!(!abs_axis_info("/dev/null", &mut short, 0));
        assert_eq!(short, [0; 4]);
    }

    #[test]
    fn out_of_range_selectors_are_rejected_before_open() {
        let mut words = [0u64; 1];
        assert!(!event_type_bits("/dev/null", &mut words, 0x20, 8));
        assert!(event_type_bits("/dev/null", &mut words, 0x1f, 8));

        let mut params = [0; 5];
        assert!(!abs_axis_info("/dev/null", &mut params, 0x40));
        assert!(abs_axis_info("/dev/null", &mut params, 0x3f));
    }

    #[test]
    fn name_of_non_evdev_node_is_empty() {
        assert_eq!(device_name_lossy("/dev/null").as_deref(), Some(""));
        assert_eq!(device_name_lossy("/dev/input/event-none"), None);
    }

    #[test]
    fn oversized_requests_are_clamped() {
        // Lengths beyond the 14-bit ioctl size field must not panic.
        let mut name = vec![0u8; 20_000];
        assert!(device_name("/dev/null", &mut name));

        let mut words = [0u64; 2];
        assert!(event_type_bits("/dev/null", &mut words, 0, usize::MAX));
    }
}

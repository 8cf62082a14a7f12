//! The `linux/input.h` subset backing the probe calls.

#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_int, c_void};

use uoctl::{_IOC, _IOC_READ, _IOR, Ioctl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct input_id {
    pub bustype: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

/// The 5-field `input_absinfo` layout, predating the `resolution` field.
///
/// The request built from this encodes a 20-byte size. The kernel's
/// `EVIOCGABS` handler copies `min(_IOC_SIZE(cmd), sizeof(struct))` bytes,
/// so the short layout is accepted everywhere and matches the 5-element
/// parameter vector this crate exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct input_absinfo {
    pub value: i32,
    pub minimum: i32,
    pub maximum: i32,
    pub fuzz: i32,
    pub flat: i32,
}

/// Largest length encodable in the 14-bit size field of an ioctl request.
pub const MAX_IOC_SIZE: usize = (1 << 14) - 1;

pub const EVIOCGVERSION: Ioctl<*mut c_int> = _IOR(b'E', 0x01);
pub const EVIOCGID: Ioctl<*mut input_id> = _IOR(b'E', 0x02);

pub const fn EVIOCGNAME(len: usize) -> Ioctl<*mut c_char> {
    _IOC(_IOC_READ, b'E', 0x06, len)
}

/// `ev == 0` requests the event *type* mask, any other value the code mask
/// of that type.
pub const fn EVIOCGBIT(ev: u8, len: usize) -> Ioctl<*mut c_void> {
    _IOC(_IOC_READ, b'E', 0x20 + ev, len)
}

pub const fn EVIOCGABS(abs: u8) -> Ioctl<*mut input_absinfo> {
    _IOR(b'E', 0x40 + abs)
}

#[cfg(test)]
mod tests {
    use std::ffi::c_ulong;

    use super::*;

    #[test]
    fn struct_layout() {
        assert_eq!(size_of::<input_id>(), 8);
        assert_eq!(size_of::<input_absinfo>(), 20);
        // Capability masks are arrays of kernel `unsigned long`; the probe
        // API hands them out as `u64` words.
        assert_eq!(size_of::<c_ulong>(), size_of::<u64>());
    }

    #[test]
    fn request_codes() {
        assert_eq!(EVIOCGVERSION.request(), 0x8004_4501);
        assert_eq!(EVIOCGID.request(), 0x8008_4502);
        assert_eq!(EVIOCGNAME(255).request(), 0x80ff_4506);
        assert_eq!(EVIOCGBIT(0, 4).request(), 0x8004_4520);
        assert_eq!(EVIOCGBIT(3, 8).request(), 0x8008_4523);
        assert_eq!(EVIOCGABS(0).request(), 0x8014_4540);
        assert_eq!(EVIOCGABS(0x3f).request(), 0x8014_457f);
    }
}

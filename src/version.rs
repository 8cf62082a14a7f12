use std::{ffi::c_int, fmt, path::Path};

use crate::probe;

/// The evdev protocol version a driver speaks.
///
/// This describes the `evdev` input core, not a device-specific driver. The
/// zero value doubles as the "unknown" sentinel reported for devices that
/// cannot be opened or don't answer the version query.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DriverVersion(pub(crate) c_int);

impl DriverVersion {
    /// The sentinel reported when the version could not be determined.
    pub const UNKNOWN: Self = Self(0);

    /// Queries the version of the device behind `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Self {
        Self(probe::driver_version(path))
    }

    /// Returns `false` for the [`UNKNOWN`][Self::UNKNOWN] sentinel.
    #[inline]
    pub const fn is_known(&self) -> bool {
        self.0 != 0
    }

    /// Returns the raw version code (`0x010001` encodes version 1.0.1).
    #[inline]
    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Returns the major component of the version code.
    #[inline]
    pub const fn major(&self) -> i32 {
        (self.0 >> 16) & 0xff
    }

    /// Returns the minor component of the version code.
    #[inline]
    pub const fn minor(&self) -> i32 {
        (self.0 >> 8) & 0xff
    }

    /// Returns the patch component of the version code.
    #[inline]
    pub const fn patch(&self) -> i32 {
        self.0 & 0xff
    }
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
        } else {
            f.write_str("unknown")
        }
    }
}

impl fmt::Debug for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DriverVersion")
            .field(&format_args!("{:#x}", self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(DriverVersion(0x010001).to_string(), "1.0.1");
        assert_eq!(DriverVersion(0x020a00).to_string(), "2.10.0");
        assert_eq!(DriverVersion::UNKNOWN.to_string(), "unknown");
    }

    #[test]
    fn components() {
        let version = DriverVersion(0x010001);
        assert!(version.is_known());
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 0);
        assert_eq!(version.patch(), 1);
    }

    #[test]
    fn missing_device_is_unknown() {
        let version = DriverVersion::read_from("/dev/input/event-none");
        assert_eq!(version, DriverVersion::UNKNOWN);
        assert!(!version.is_known());
    }
}

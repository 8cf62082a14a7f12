use std::fmt;
use std::path::Path;

use crate::probe;
use crate::raw::input_id;

/// Identity of an input device.
///
/// `uinput` devices, devices exported by ALSA, and other virtual devices
/// often leave all four fields zero.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct DeviceId(pub(crate) input_id);

impl DeviceId {
    /// Queries the ID of the device behind `path`.
    ///
    /// Returns [`None`] when the device cannot be opened.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Option<Self> {
        let mut id = [0; 4];
        probe::device_id(path, &mut id).then(|| Self::from_raw(id))
    }

    /// Builds a [`DeviceId`] from the positional vector filled by
    /// [`device_id`][crate::device_id].
    ///
    /// The fields are reinterpreted as the unsigned 16-bit values the kernel
    /// reports them as.
    #[inline]
    pub const fn from_raw(id: [i16; 4]) -> Self {
        Self(input_id {
            bustype: id[0] as u16,
            vendor: id[1] as u16,
            product: id[2] as u16,
            version: id[3] as u16,
        })
    }

    /// Returns the bus type this device is attached to the system with.
    ///
    /// This is often left as `0` for virtual devices.
    #[inline]
    pub const fn bus(&self) -> Bus {
        Bus(self.0.bustype)
    }

    /// Returns the vendor ID.
    ///
    /// For USB and PCI devices, this is typically taken from the device
    /// descriptor and may be looked up in the corresponding registry.
    #[inline]
    pub const fn vendor(&self) -> u16 {
        self.0.vendor
    }

    /// Returns the product ID.
    #[inline]
    pub const fn product(&self) -> u16 {
        self.0.product
    }

    /// The device or transport version.
    ///
    /// For USB devices, this is typically an encoding of the implemented
    /// USB-HID version (`bcdHID`).
    #[inline]
    pub const fn version(&self) -> u16 {
        self.0.version
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceId")
            .field("bustype", &self.bus())
            .field("vendor", &format_args!("{:#06x}", self.vendor()))
            .field("product", &format_args!("{:#06x}", self.product()))
            .field("version", &format_args!("{:#06x}", self.version()))
            .finish()
    }
}

ffi_enum! {
    /// Bus types that devices can be attached to the system with.
    pub enum Bus: u16 {
        PCI         = 0x01,
        ISAPNP      = 0x02,
        USB         = 0x03,
        HIL         = 0x04,
        BLUETOOTH   = 0x05,
        VIRTUAL     = 0x06,
        ISA         = 0x10,
        I8042       = 0x11,
        XTKBD       = 0x12,
        RS232       = 0x13,
        GAMEPORT    = 0x14,
        PARPORT     = 0x15,
        AMIGA       = 0x16,
        ADB         = 0x17,
        I2C         = 0x18,
        HOST        = 0x19,
        GSC         = 0x1A,
        ATARI       = 0x1B,
        SPI         = 0x1C,
        RMI         = 0x1D,
        CEC         = 0x1E,
        INTEL_ISHTP = 0x1F,
        AMD_SFH     = 0x20,
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "BUS_{name}"),
            None => write!(f, "Bus({:#x})", self.0),
        }
    }
}

//! Event type and axis identifiers from `linux/input-event-codes.h`.

use std::fmt;

ffi_enum! {
    /// `EV_*`: The types of events an input device can emit.
    ///
    /// Bit `N` of the mask filled by [`event_type_bits`][crate::event_type_bits]
    /// (with `ty == 0`) is set when the device supports the type with value `N`.
    pub enum EventType: u16 {
        /// Synchronization markers. Every device emits these, and the kernel
        /// reports no per-code mask for them.
        SYN = 0x00,
        /// Key and button state changes.
        KEY = 0x01,
        /// Relative axis movement (mice, scroll wheels).
        REL = 0x02,
        /// Absolute axis changes (joysticks, touchscreens, tablets).
        ABS = 0x03,
        /// Miscellaneous events.
        MSC = 0x04,
        /// Binary switches (lid closed, headphone inserted).
        SW  = 0x05,
        /// LED state changes.
        LED = 0x11,
        /// Simple sounds (bell, click).
        SND = 0x12,
        /// Autorepeat settings.
        REP = 0x14,
        /// Force-feedback effect control.
        FF  = 0x15,
        /// Power-management events.
        PWR = 0x16,
        /// Force-feedback status reports.
        FF_STATUS = 0x17,
    }
}

impl EventType {
    /// The highest type value the kernel can report (`EV_MAX`).
    pub const MAX: Self = Self(0x1f);

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "EV_{name}"),
            None => write!(f, "EventType({:#x})", self.0),
        }
    }
}

ffi_enum! {
    /// `ABS_*`: An absolute axis identifier.
    ///
    /// These are the codes reported for [`EventType::ABS`] and the axis
    /// selector of [`abs_axis_info`][crate::abs_axis_info].
    pub enum Abs: u16 {
        X              = 0x00,
        Y              = 0x01,
        Z              = 0x02,
        RX             = 0x03,
        RY             = 0x04,
        RZ             = 0x05,
        THROTTLE       = 0x06,
        RUDDER         = 0x07,
        WHEEL          = 0x08,
        GAS            = 0x09,
        BRAKE          = 0x0a,
        HAT0X          = 0x10,
        HAT0Y          = 0x11,
        HAT1X          = 0x12,
        HAT1Y          = 0x13,
        HAT2X          = 0x14,
        HAT2Y          = 0x15,
        HAT3X          = 0x16,
        HAT3Y          = 0x17,
        PRESSURE       = 0x18,
        DISTANCE       = 0x19,
        TILT_X         = 0x1a,
        TILT_Y         = 0x1b,
        TOOL_WIDTH     = 0x1c,
        VOLUME         = 0x20,
        MISC           = 0x28,
        /// Major axis of the touching ellipse.
        MT_TOUCH_MAJOR = 0x30,
        /// Minor axis of the touching ellipse, omitted if circular.
        MT_TOUCH_MINOR = 0x31,
        MT_WIDTH_MAJOR = 0x32,
        MT_WIDTH_MINOR = 0x33,
        MT_ORIENTATION = 0x34,
        MT_POSITION_X  = 0x35,
        MT_POSITION_Y  = 0x36,
        MT_TOOL_TYPE   = 0x37,
        MT_BLOB_ID     = 0x38,
        /// Unique ID of an initiated contact.
        MT_TRACKING_ID = 0x39,
    }
}

impl Abs {
    /// The highest axis value the kernel can report (`ABS_MAX`).
    pub const MAX: Self = Self(0x3f);

    #[inline]
    pub const fn from_raw(code: u16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Abs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "ABS_{name}"),
            None => write!(f, "Abs({:#x})", self.0),
        }
    }
}

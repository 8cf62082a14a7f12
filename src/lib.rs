#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

mod absinfo;
pub mod bits;
mod caps;
mod events;
mod id;
mod probe;
mod raw;
mod version;

pub use absinfo::AxisParams;
pub use caps::SupportedEvents;
pub use events::{Abs, EventType};
pub use id::{Bus, DeviceId};
pub use probe::{
    AXIS_FIELDS, abs_axis_info, device_id, device_name, device_name_lossy, driver_version,
    event_type_bits,
};
pub use version::DriverVersion;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_sync() {
        fn assert<T: Send + Sync>() {}

        assert::<DeviceId>();
        assert::<AxisParams>();
        assert::<DriverVersion>();
        assert::<SupportedEvents>();
        assert::<bits::SetBits<'static>>();
    }
}

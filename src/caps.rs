//! Whole-device capability scan.

use std::{collections::BTreeMap, fmt, path::Path};

use crate::{EventType, bits, probe};

/// `KEY_MAX + 1`: the largest per-type code space the kernel reports.
const CODE_BITS: usize = 0x300;

/// The event types and codes a device advertises.
///
/// Built by [`SupportedEvents::scan`], which does what `evtest`-style tools
/// do: fetch the event-type mask, then the code mask of every advertised
/// type. Each mask is fetched with its own short-lived descriptor, so a
/// device that disappears mid-scan degrades to types without codes instead
/// of an error.
#[derive(Clone, PartialEq, Eq)]
pub struct SupportedEvents {
    map: BTreeMap<EventType, Vec<u16>>,
}

impl SupportedEvents {
    /// Scans the device behind `path`.
    ///
    /// Returns [`None`] when the device cannot be opened. A type whose code
    /// mask cannot be read is still listed, with no codes. [`EventType::SYN`]
    /// is never listed since the kernel reports no codes for it.
    pub fn scan<P: AsRef<Path>>(path: P) -> Option<Self> {
        Self::scan_impl(path.as_ref())
    }

    fn scan_impl(path: &Path) -> Option<Self> {
        let mut type_mask = [0u64; bits::words_for(EventType::MAX.0 as usize + 1)];
        let len = size_of_val(&type_mask);
        if !probe::event_type_bits(path, &mut type_mask, 0, len) {
            return None;
        }

        let mut map = BTreeMap::new();
        for ty in bits::set_bits(&type_mask) {
            if ty == EventType::SYN.0 as usize {
                continue;
            }

            let mut code_mask = [0u64; bits::words_for(CODE_BITS)];
            let len = size_of_val(&code_mask);
            probe::event_type_bits(path, &mut code_mask, ty as u16, len);
            let codes = bits::set_bits(&code_mask).map(|code| code as u16).collect();
            map.insert(EventType(ty as u16), codes);
        }
        Some(Self { map })
    }

    /// Returns whether the device advertises no event types besides
    /// [`EventType::SYN`].
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns whether event type `ty` is advertised.
    pub fn supports(&self, ty: EventType) -> bool {
        self.map.contains_key(&ty)
    }

    /// Returns the advertised codes of `ty`, in ascending order.
    ///
    /// Types the device does not advertise read back empty.
    pub fn codes(&self, ty: EventType) -> &[u16] {
        self.map.get(&ty).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns an iterator over the advertised event types, in ascending
    /// order.
    pub fn types(&self) -> impl Iterator<Item = EventType> + '_ {
        self.map.keys().copied()
    }
}

impl fmt::Debug for SupportedEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

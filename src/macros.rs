/// Declares a newtype over a kernel integer constant, with the known values
/// as associated constants.
///
/// Unlike a `#[repr(u16)]` enum, unknown values stay representable, which
/// matters when the running kernel is newer than this crate.
macro_rules! ffi_enum {
    (
        $( #[$attrs:meta] )*
        $v:vis enum $name:ident: $repr:ty {
            $(
                $( #[$variant_attrs:meta] )*
                $variant:ident = $discrim:expr
            ),+
            $(,)?
        }
    ) => {
        $( #[$attrs] )*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $v struct $name(pub(crate) $repr);

        impl $name {
            $(
                $( #[$variant_attrs] )*
                $v const $variant: Self = Self($discrim);
            )+

            /// Returns the name of the constant matching `self`, if there
            /// is one.
            #[allow(unreachable_patterns)]
            fn variant_name(self) -> Option<&'static str> {
                match self {
                    $(
                        Self::$variant => Some(stringify!($variant)),
                    )*
                    _ => None,
                }
            }
        }
    };
}

//! Strongly typed, zero-cost identifier wrappers.
//!
//! Hubs and links get dense ids in insertion order so that per-hub and
//! per-link tables can be plain `Vec`s indexed by `id.index()`.  Names are
//! resolved to ids once, at graph construction.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `<inner>::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a hub in the graph's hub table.
    pub struct HubId(u32);
}

typed_id! {
    /// Index of an undirected link in the graph's link table.
    pub struct LinkId(u32);
}

typed_id! {
    /// 1-based drone number.  Drones are scheduled in ascending `DroneId`
    /// order; `DroneId(1)` is planned first.
    pub struct DroneId(u32);
}

impl DroneId {
    /// Short label used in turn logs, e.g. `D3`.
    pub fn label(self) -> String {
        format!("D{}", self.0)
    }
}

//! Typed identifiers for ants and rooms.
//!
//! Both wrap a `u32` and are `Copy + Ord + Hash`.  They display as `#<n>`,
//! so error messages read "ant #3" or "room #12".

use std::fmt;

/// Generate a `u32` newtype with indexing and conversion helpers.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub u32);

        impl $name {
            /// Position in a `Vec` indexed by this id.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of one ant.  Ants are numbered `1..=N`; the number is what
    /// appears in the `L<ant>-<room>` output token.  There is no ant `0`.
    pub struct AntId;
}

typed_id! {
    /// Index of a room in a `Farm`, assigned sequentially in declaration order.
    pub struct RoomId;
}

impl AntId {
    /// The first ant of every run.
    pub const FIRST: AntId = AntId(1);

    /// Iterator over `AntId(1) ..= AntId(count)`.
    pub fn range(count: u32) -> impl Iterator<Item = AntId> {
        (1..=count).map(AntId)
    }
}

impl RoomId {
    /// Placeholder for "no room", e.g. an unset predecessor during search.
    pub const NONE: RoomId = RoomId(u32::MAX);
}

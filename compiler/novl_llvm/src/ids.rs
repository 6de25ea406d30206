//! Opaque ID handles into a [`Module`](crate::Module).
//!
//! Each ID is a `u32` index into the module's value, block or function
//! arena. A `NONE` sentinel (`u32::MAX`) marks an absent handle.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Sentinel for "no handle".
            pub const NONE: Self = Self(u32::MAX);

            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                Self(u32::try_from(index).unwrap_or(u32::MAX))
            }

            #[inline]
            pub fn is_none(self) -> bool {
                self.0 == u32::MAX
            }

            /// The raw index.
            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_none() {
                    write!(f, "{}(NONE)", stringify!($name))
                } else {
                    write!(f, "{}({})", stringify!($name), self.0)
                }
            }
        }
    };
}

define_id!(
    /// Handle to a value: constant, register, global or parameter.
    ValueId
);
define_id!(
    /// Handle to a basic block.
    BlockId
);
define_id!(
    /// Handle to a function definition or declaration.
    FunctionId
);

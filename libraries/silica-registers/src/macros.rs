// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Macros for cleanly defining peripheral registers.
//!
//! [`register_structs!`](crate::register_structs) lays out a register block
//! from datasheet byte offsets and emits compile-time assertions that the
//! resulting struct matches them; [`register_bitfields!`](crate::register_bitfields)
//! names the bit ranges of each register.

/// Computes the unshifted mask of a field from its bit width.
// Written as two halves so that a full-width field does not overflow the
// shift.
#[doc(hidden)]
#[macro_export]
macro_rules! bitmask {
    ($valtype:ident, $numbits:expr) => {
        ((1 as $valtype) << ($numbits - 1)) | (((1 as $valtype) << ($numbits - 1)) - 1)
    };
}

/// Define the bitfields of one or more registers.
///
/// For each register name this generates a module containing a `Register`
/// marker type, a [`Field`](crate::fields::Field) constant per named field,
/// and per field a module with `SET`/`CLEAR` shorthands, the declared value
/// constants, and a `Value` enum decodable with
/// [`TryFromValue`](crate::fields::TryFromValue).
///
/// ```rust
/// silica_registers::register_bitfields![u32,
///     Control [
///         ENABLE OFFSET(0) NUMBITS(1) [],
///         MODE   OFFSET(4) NUMBITS(3) [
///             Off = 0,
///             On = 1
///         ]
///     ]
/// ];
/// ```
#[macro_export]
macro_rules! register_bitfields {
    {
        $valtype:ident, $( $(#[$attr:meta])* $reg:ident $fields:tt ),+ $(,)?
    } => {
        $(
            $(#[$attr])*
            #[allow(non_snake_case)]
            pub mod $reg {
                /// Marker tying this bitfield namespace to its register.
                #[derive(Clone, Copy)]
                pub struct Register;
                impl $crate::RegisterLongName for Register {}

                $crate::register_bitmasks!($valtype, Register, $fields);
            }
        )+
    };
}

/// For internal use by `register_bitfields!`.
#[doc(hidden)]
#[macro_export]
macro_rules! register_bitmasks {
    // Every field carries a (possibly empty) bracketed value list; the
    // uniform shape keeps the field grammar unambiguous.
    ($valtype:ident, $reg_desc:ident, [
        $( $(#[$attr:meta])* $field:ident OFFSET($offset:expr) NUMBITS($numbits:expr) $values:tt ),+ $(,)?
    ]) => {
        $(
            $crate::register_bitmasks!(
                @field $valtype, $reg_desc, [ $(#[$attr])* ] $field, $offset, $numbits, $values
            );
        )+
    };

    // A single field and its enumerated values.
    (@field $valtype:ident, $reg_desc:ident, [ $(#[$attr:meta])* ]
        $field:ident, $offset:expr, $numbits:expr,
        [ $( $(#[$vattr:meta])* $valname:ident = $value:expr ),* $(,)? ]
    ) => {
        $(#[$attr])*
        #[allow(non_upper_case_globals)]
        #[allow(unused)]
        pub const $field: $crate::fields::Field<$valtype, $reg_desc> =
            $crate::fields::Field::<$valtype, $reg_desc>::new(
                $crate::bitmask!($valtype, $numbits),
                $offset,
            );

        #[allow(non_snake_case)]
        #[allow(unused)]
        pub mod $field {
            #[allow(unused_imports)]
            use super::$reg_desc;
            use $crate::fields::FieldValue;

            /// Every bit of the field set.
            #[allow(non_upper_case_globals)]
            pub const SET: FieldValue<$valtype, $reg_desc> =
                FieldValue::<$valtype, $reg_desc>::new(
                    $crate::bitmask!($valtype, $numbits),
                    $offset,
                    $crate::bitmask!($valtype, $numbits),
                );

            /// Every bit of the field clear.
            #[allow(non_upper_case_globals)]
            pub const CLEAR: FieldValue<$valtype, $reg_desc> =
                FieldValue::<$valtype, $reg_desc>::new(
                    $crate::bitmask!($valtype, $numbits),
                    $offset,
                    0,
                );

            $(
                $(#[$vattr])*
                #[allow(non_upper_case_globals)]
                pub const $valname: FieldValue<$valtype, $reg_desc> =
                    FieldValue::<$valtype, $reg_desc>::new(
                        $crate::bitmask!($valtype, $numbits),
                        $offset,
                        $value,
                    );
            )*

            /// Enumerated values of this field.
            #[derive(Copy, Clone, Debug, Eq, PartialEq)]
            #[allow(non_camel_case_types)]
            pub enum Value {
                $(
                    $(#[$vattr])*
                    $valname = $value,
                )*
            }

            impl $crate::fields::TryFromValue<$valtype> for Value {
                type EnumType = Value;

                fn try_from_value(v: $valtype) -> Option<Self::EnumType> {
                    #[allow(unreachable_patterns)]
                    match v {
                        $( x if x == Value::$valname as $valtype => Some(Value::$valname), )*
                        _ => None,
                    }
                }
            }
        }
    };
}

/// Define one or more `#[repr(C)]` register blocks from datasheet offsets.
///
/// Every entry gives the byte offset of a register (or register array, or a
/// reserved gap named `_reservedN` with no type) from the block's base; the
/// list ends with an `@END` marker carrying the block's total size. The
/// macro checks each declared offset and the total size against the laid
/// out struct at compile time, so a register map that disagrees with its
/// own offsets does not build.
///
/// ```rust
/// use silica_registers::{register_structs, ReadOnly, ReadWrite};
///
/// register_structs! {
///     pub TimerRegisters {
///         (0x00 => pub cr: ReadWrite<u32>),
///         (0x04 => _reserved0),
///         (0x10 => pub cnt: ReadOnly<u32>),
///         (0x14 => @END),
///     }
/// }
/// ```
#[macro_export]
macro_rules! register_structs {
    {
        $(
            $(#[$attr:meta])*
            $vis:vis $name:ident {
                $( $fields:tt )*
            }
        ),+ $(,)?
    } => {
        $( $crate::register_fields!(@root [ $(#[$attr])* ] $vis $name { $($fields)* }); )+
    };
}

/// For internal use by `register_structs!`.
#[doc(hidden)]
#[macro_export]
macro_rules! register_fields {
    // Terminating @END marker: emit the struct and its layout assertions.
    (@munch [ $(#[$attr:meta])* ] $vis:vis $name:ident
        (
            ($end:expr => @END) $(,)?
        )
        -> { $( [ $(#[$fattr:meta])* ] ($foff:expr => $fvis:vis $fname:ident: $fty:ty) )* }
    ) => {
        $(#[$attr])*
        #[repr(C)]
        $vis struct $name {
            $(
                $(#[$fattr])*
                $fvis $fname: $fty,
            )*
        }

        const _: () = {
            $( assert!(::core::mem::offset_of!($name, $fname) == $foff); )*
            assert!(::core::mem::size_of::<$name>() == $end);
        };
    };

    // A register or register-array entry.
    (@munch [ $(#[$attr:meta])* ] $vis:vis $name:ident
        (
            $(#[$fattr:meta])*
            ($foff:expr => $fvis:vis $fname:ident: $fty:ty),
            $($rest:tt)*
        )
        -> { $($out:tt)* }
    ) => {
        $crate::register_fields!(@munch [ $(#[$attr])* ] $vis $name
            ( $($rest)* )
            -> { $($out)* [ $(#[$fattr])* ] ($foff => $fvis $fname: $fty) }
        );
    };

    // A reserved gap; its size is the distance to the next entry's offset.
    (@munch [ $(#[$attr:meta])* ] $vis:vis $name:ident
        (
            $(#[$pattr:meta])*
            ($poff:expr => $pname:ident),
            $(#[$nattr:meta])*
            ($noff:expr => $($next:tt)*)
            $($rest:tt)*
        )
        -> { $($out:tt)* }
    ) => {
        $crate::register_fields!(@munch [ $(#[$attr])* ] $vis $name
            (
                $(#[$nattr])*
                ($noff => $($next)*)
                $($rest)*
            )
            -> { $($out)* [ $(#[$pattr])* ] ($poff => $pname: [u8; $noff - $poff]) }
        );
    };

    (@root [ $(#[$attr:meta])* ] $vis:vis $name:ident { $($fields:tt)* }) => {
        $crate::register_fields!(@munch [ $(#[$attr])* ] $vis $name ( $($fields)* ) -> {});
    };
}

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Silica Register Interface
//!
//! Provides efficient mechanisms to express and use type-checked
//! memory mapped registers and bitfields.
//!
//! ```rust
//! use silica_registers::registers::{ReadOnly, ReadWrite};
//! use silica_registers::{register_bitfields, register_structs};
//!
//! // Register maps are specified like this:
//! register_structs! {
//!     Registers {
//!         // Control register: read-write
//!         (0x00 => cr: ReadWrite<u32, Control::Register>),
//!         // Status register: read-only
//!         (0x04 => s: ReadOnly<u32, Status::Register>),
//!         (0x08 => @END),
//!     }
//! }
//!
//! // Register fields and definitions look like this:
//! register_bitfields![u32,
//!     Control [
//!         /// Stop the current transfer
//!         STOP OFFSET(8) NUMBITS(1) [],
//!         /// Software reset
//!         SWRST OFFSET(7) NUMBITS(1) []
//!     ],
//!     Status [
//!         TXCOMPLETE  OFFSET(0) NUMBITS(1) [],
//!         RXCOMPLETE  OFFSET(1) NUMBITS(1) [],
//!         MODE        OFFSET(4) NUMBITS(3) [
//!             FullDuplex = 0,
//!             HalfDuplex = 1,
//!             Loopback = 2,
//!             Disabled = 3
//!         ]
//!     ]
//! ];
//! ```
//!
//! Every register access compiles to a single volatile load or store; the
//! compiler may not cache, reorder or elide it. Registers whose contents
//! change under hardware control are therefore always re-read, and writes
//! with side effects always reach the bus.

#![no_std]

pub mod fields;
pub mod interfaces;
pub mod macros;
pub mod registers;

mod local_register;
pub use local_register::LocalRegisterCopy;

mod static_ref;
pub use static_ref::StaticRef;

pub use registers::{Aliased, InMemoryRegister, ReadOnly, ReadWrite, WriteOnly};

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not, Shl, Shr};

/// Trait representing the base type of registers.
///
/// `UIntLike` defines the properties a type needs so a register of that
/// width can be read, written and masked through the field arithmetic in
/// this crate. It is implemented for [`u8`], [`u16`] and [`u32`], the
/// register widths hardware register files actually use.
pub trait UIntLike:
    BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitOrAssign
    + Not<Output = Self>
    + Eq
    + Shr<usize, Output = Self>
    + Shl<usize, Output = Self>
    + Copy
    + Clone
    + Debug
{
    /// Return the representation of the value `0` in the implementing type.
    fn zero() -> Self;
}

macro_rules! UIntLike_impl_for {
    ($type:ty) => {
        impl UIntLike for $type {
            fn zero() -> Self {
                0
            }
        }
    };
}

UIntLike_impl_for!(u8);
UIntLike_impl_for!(u16);
UIntLike_impl_for!(u32);

/// Descriptive name for each register.
///
/// Implemented by the marker types that `register_bitfields!` generates;
/// ties a register cell to the bitfield namespace that may be used with it.
pub trait RegisterLongName {}

impl RegisterLongName for () {}

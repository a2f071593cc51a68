// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Register access traits.
//!
//! [`Readable`] and [`Writeable`] are implemented by the register cell
//! types according to the hardware's access rules for each register;
//! [`ReadWriteable`] is provided automatically where both apply.
//!
//! A caller modifying a register shared with an interrupt handler must be
//! aware that [`ReadWriteable::modify`] is a read-modify-write sequence and
//! is not interrupt-safe; only registers documented as single-store
//! set/clear style may be touched concurrently without masking.

use crate::fields::{Field, FieldValue, TryFromValue};
use crate::{LocalRegisterCopy, RegisterLongName, UIntLike};

/// Readable register.
///
/// Types implementing this trait guarantee that `get` performs exactly one
/// volatile load of the underlying cell.
pub trait Readable {
    type T: UIntLike;
    type R: RegisterLongName;

    /// Get the raw register value.
    fn get(&self) -> Self::T;

    /// Read the value of the given field.
    #[inline]
    fn read(&self, field: Field<Self::T, Self::R>) -> Self::T {
        field.read(self.get())
    }

    /// Read the value of the given field and decode it as an enumerated
    /// value, if the read bit pattern names one.
    #[inline]
    fn read_as_enum<E: TryFromValue<Self::T, EnumType = E>>(
        &self,
        field: Field<Self::T, Self::R>,
    ) -> Option<E> {
        field.read_as_enum(self.get())
    }

    /// Make a local copy of the register, for checking several fields
    /// against a single read.
    #[inline]
    fn extract(&self) -> LocalRegisterCopy<Self::T, Self::R> {
        LocalRegisterCopy::new(self.get())
    }

    /// True if any bit of `field` is set.
    #[inline]
    fn is_set(&self, field: Field<Self::T, Self::R>) -> bool {
        field.is_set(self.get())
    }

    /// True if any of the bits covered by `field` are set.
    #[inline]
    fn any_matching_bits_set(&self, field: FieldValue<Self::T, Self::R>) -> bool {
        self.get() & field.mask != Self::T::zero()
    }

    /// True if the register matches `field` in every masked bit.
    #[inline]
    fn matches_all(&self, field: FieldValue<Self::T, Self::R>) -> bool {
        field.matches_all(self.get())
    }
}

/// Writeable register.
///
/// Types implementing this trait guarantee that `set` performs exactly one
/// volatile store of the underlying cell. For write-only and
/// write-one-to-clear registers this is the only access the hardware
/// permits, and it is a single atomic store by construction.
pub trait Writeable {
    type T: UIntLike;
    type R: RegisterLongName;

    /// Set the raw register value.
    fn set(&self, value: Self::T);

    /// Write the value of one or more fields, zeroing every other bit of
    /// the register.
    #[inline]
    fn write(&self, field: FieldValue<Self::T, Self::R>) {
        self.set(field.value);
    }

    /// Write the value of one or more fields, maintaining the others from
    /// a previously captured copy rather than re-reading hardware.
    #[inline]
    fn modify_no_read(
        &self,
        original: LocalRegisterCopy<Self::T, Self::R>,
        field: FieldValue<Self::T, Self::R>,
    ) {
        self.set(field.modify(original.get()));
    }
}

/// [`Readable`] and [`Writeable`] registers additionally support in-place
/// field updates.
pub trait ReadWriteable {
    type T: UIntLike;
    type R: RegisterLongName;

    /// Read the register, update the given fields, write it back.
    ///
    /// This is a read-modify-write sequence, not an atomic operation.
    fn modify(&self, field: FieldValue<Self::T, Self::R>);
}

impl<T: UIntLike, R: RegisterLongName, S> ReadWriteable for S
where
    S: Readable<T = T, R = R> + Writeable<T = T, R = R>,
{
    type T = T;
    type R = R;

    #[inline]
    fn modify(&self, field: FieldValue<T, R>) {
        self.set(field.modify(self.get()));
    }
}

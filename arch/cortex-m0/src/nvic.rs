// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Cortex-M0 NVIC
//!
//! The ARMv6-M NVIC implements a single 32-interrupt bank: one set-enable,
//! clear-enable, set-pending and clear-pending register each, plus eight
//! word-wide priority registers of four 8-bit slots.
//!
//! The set/clear register pairs are the hardware's interrupt-safe update
//! mechanism: storing a mask to ISER/ICER/ISPR/ICPR affects exactly the
//! bits set in the mask, so no read-modify-write is ever needed and these
//! operations may be used from any context.

use silica_registers::interfaces::{ReadWriteable, Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// NVIC Registers.
    NvicRegisters {
        (0x000 => _reserved0),

        /// Interrupt Set-Enable Register
        (0x100 => iser: ReadWrite<u32, SetClear::Register>),

        (0x104 => _reserved1),

        /// Interrupt Clear-Enable Register
        (0x180 => icer: WriteOnly<u32, SetClear::Register>),

        (0x184 => _reserved2),

        /// Interrupt Set-Pending Register
        (0x200 => ispr: ReadWrite<u32, SetClear::Register>),

        (0x204 => _reserved3),

        /// Interrupt Clear-Pending Register
        (0x280 => icpr: WriteOnly<u32, SetClear::Register>),

        (0x284 => _reserved4),

        /// Interrupt Priority Registers
        (0x400 => ipr: [ReadWrite<u32, Priority::Register>; 8]),

        (0x420 => @END),
    }
}

register_bitfields![u32,
    SetClear [
        /// One bit per interrupt 0-31. Writing a 1 performs the register's
        /// operation for that interrupt; writing 0 is a no-op. Reading
        /// ISER/ISPR returns the enabled/pending state.
        BITS OFFSET(0) NUMBITS(32) []
    ],

    Priority [
        /// Priority of interrupt 4n+3. Only the top two bits of each slot
        /// are implemented on ARMv6-M.
        PRI_N3 OFFSET(24) NUMBITS(8) [],
        /// Priority of interrupt 4n+2.
        PRI_N2 OFFSET(16) NUMBITS(8) [],
        /// Priority of interrupt 4n+1.
        PRI_N1 OFFSET(8) NUMBITS(8) [],
        /// Priority of interrupt 4n.
        PRI_N0 OFFSET(0) NUMBITS(8) []
    ]
];

/// The NVIC peripheral in MMIO space.
const NVIC: StaticRef<NvicRegisters> =
    unsafe { StaticRef::new(0xe000e000 as *const NvicRegisters) };

/// Clear all pending interrupts.
pub unsafe fn clear_all_pending() {
    NVIC.icpr.set(!0);
}

/// Enable all interrupts.
pub unsafe fn enable_all() {
    NVIC.iser.set(!0);
}

/// Disable all interrupts.
pub unsafe fn disable_all() {
    NVIC.icer.set(!0);
}

/// Get the index (0-31) of the lowest-numbered pending interrupt, or
/// `None` if none are pending.
pub unsafe fn next_pending() -> Option<u32> {
    let ispr = NVIC.ispr.get();

    if ispr != 0 {
        // trailing_zeros == index of first high bit
        Some(ispr.trailing_zeros())
    } else {
        None
    }
}

/// An opaque wrapper for a single NVIC interrupt.
///
/// Hand these out to low-level code to let it control its own interrupt
/// but not others. Every operation is a single store of one bit, safe
/// against concurrent handlers by hardware construction.
pub struct Nvic(u32);

impl Nvic {
    /// Creates a new `Nvic`.
    ///
    /// Marked unsafe because only chip/platform configuration code should
    /// be able to create these, and the index must be a real interrupt
    /// number of the target chip.
    pub const unsafe fn new(idx: u32) -> Nvic {
        Nvic(idx)
    }

    /// Enable the interrupt.
    pub fn enable(&self) {
        NVIC.iser.set(1 << (self.0 & 31));
    }

    /// Disable the interrupt.
    pub fn disable(&self) {
        NVIC.icer.set(1 << (self.0 & 31));
    }

    /// Is the interrupt enabled?
    pub fn is_enabled(&self) -> bool {
        NVIC.iser.get() & (1 << (self.0 & 31)) != 0
    }

    /// Is the interrupt pending?
    pub fn is_pending(&self) -> bool {
        NVIC.ispr.get() & (1 << (self.0 & 31)) != 0
    }

    /// Clear the interrupt's pending state.
    pub fn clear_pending(&self) {
        NVIC.icpr.set(1 << (self.0 & 31));
    }

    /// Set the interrupt's priority; 0 is highest. Read-modify-write on
    /// an IPR word shared with three neighboring interrupts, so configure
    /// priorities before enabling interrupts.
    pub fn set_priority(&self, priority: u8) {
        let slot = match self.0 % 4 {
            0 => Priority::PRI_N0,
            1 => Priority::PRI_N1,
            2 => Priority::PRI_N2,
            _ => Priority::PRI_N3,
        };
        NVIC.ipr[(self.0 / 4) as usize].modify(slot.val(priority as u32));
    }
}

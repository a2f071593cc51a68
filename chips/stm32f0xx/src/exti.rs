// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Extended interrupts and events controller.
//!
//! Thirty-two lines; 0-15 come from the GPIO pins selected in
//! SYSCFG_EXTICR, the rest from fixed internal sources. The pending
//! register is write-one-to-clear: acknowledging a line is a single store
//! of that line's bit, so a handler can never accidentally clear a line
//! that pended between its read and its write. Masking and trigger
//! selection are read-modify-write and belong in configuration code.

use silica_registers::fields::Field;
use silica_registers::interfaces::{ReadWriteable, Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadWrite, StaticRef};

register_structs! {
    /// External interrupt/event controller
    pub ExtiRegisters {
        /// interrupt mask register
        (0x00 => pub imr: ReadWrite<u32, LINES::Register>),
        /// event mask register
        (0x04 => pub emr: ReadWrite<u32, LINES::Register>),
        /// rising trigger selection register
        (0x08 => pub rtsr: ReadWrite<u32, LINES::Register>),
        /// falling trigger selection register
        (0x0c => pub ftsr: ReadWrite<u32, LINES::Register>),
        /// software interrupt event register
        (0x10 => pub swier: ReadWrite<u32, LINES::Register>),
        /// pending register; write 1 to clear
        (0x14 => pub pr: ReadWrite<u32, LINES::Register>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    LINES [
        /// One bit per EXTI line
        LINE OFFSET(0) NUMBITS(32) []
    ]
];

impl ExtiRegisters {
    /// The single-bit field of `line` (0-31) in any EXTI register.
    pub fn line_field(line: usize) -> Field<u32, LINES::Register> {
        Field::<u32, LINES::Register>::new(1, line)
    }

    /// Unmask the interrupt of `line`. Read-modify-write.
    pub fn enable_interrupt(&self, line: usize) {
        self.imr.modify(Self::line_field(line).val(1));
    }

    /// Mask the interrupt of `line`. Read-modify-write.
    pub fn disable_interrupt(&self, line: usize) {
        self.imr.modify(Self::line_field(line).val(0));
    }

    /// Select whether `line` triggers on the rising edge.
    /// Read-modify-write.
    pub fn select_rising_trigger(&self, line: usize, enable: bool) {
        self.rtsr
            .modify(Self::line_field(line).val(enable as u32));
    }

    /// Select whether `line` triggers on the falling edge.
    /// Read-modify-write.
    pub fn select_falling_trigger(&self, line: usize, enable: bool) {
        self.ftsr
            .modify(Self::line_field(line).val(enable as u32));
    }

    /// Pend `line` from software. Setting an already-pending line is a
    /// no-op; single store.
    pub fn software_interrupt(&self, line: usize) {
        self.swier.set(1 << line);
    }

    /// True if `line` is pending.
    pub fn is_pending(&self, line: usize) -> bool {
        self.pr.get() & (1 << line) != 0
    }

    /// Acknowledge `line`. Single store of the line's bit; other pending
    /// lines are untouched.
    pub fn clear_pending(&self, line: usize) {
        self.pr.set(1 << line);
    }
}

pub const EXTI_BASE: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(0x40010400 as *const ExtiRegisters) };

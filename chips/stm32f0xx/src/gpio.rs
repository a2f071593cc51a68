// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! General-purpose I/O ports.
//!
//! Six identical ports (A-F), sixteen pins each. Configuration registers
//! (mode, type, speed, pull, alternate function) are read-modify-write and
//! therefore not interrupt-safe; the output set/reset registers BSRR and
//! BRR are single-store and safe from any context, which is why pin writes
//! should go through them and never through a read-modify-write of ODR.

use silica_registers::fields::Field;
use silica_registers::interfaces::{ReadWriteable, Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// General-purpose I/O port
    pub GpioRegisters {
        /// port mode register
        (0x00 => pub moder: ReadWrite<u32, MODER::Register>),
        /// port output type register
        (0x04 => pub otyper: ReadWrite<u32, OTYPER::Register>),
        /// port output speed register
        (0x08 => pub ospeedr: ReadWrite<u32, OSPEEDR::Register>),
        /// port pull-up/pull-down register
        (0x0c => pub pupdr: ReadWrite<u32, PUPDR::Register>),
        /// port input data register
        (0x10 => pub idr: ReadOnly<u32, IDR::Register>),
        /// port output data register
        (0x14 => pub odr: ReadWrite<u32, ODR::Register>),
        /// port bit set/reset register
        (0x18 => pub bsrr: WriteOnly<u32, BSRR::Register>),
        /// port configuration lock register
        (0x1c => pub lckr: ReadWrite<u32, LCKR::Register>),
        /// alternate function low/high registers, pins 0-7 and 8-15
        (0x20 => pub afr: [ReadWrite<u32, AFR::Register>; 2]),
        /// port bit reset register
        (0x28 => pub brr: WriteOnly<u32, BRR::Register>),
        (0x2c => @END),
    }
}

register_bitfields![u32,
    MODER [
        /// Port configuration bits, two per pin
        MODER0 OFFSET(0) NUMBITS(2) [],
        MODER1 OFFSET(2) NUMBITS(2) [],
        MODER2 OFFSET(4) NUMBITS(2) [],
        MODER3 OFFSET(6) NUMBITS(2) [],
        MODER4 OFFSET(8) NUMBITS(2) [],
        MODER5 OFFSET(10) NUMBITS(2) [],
        MODER6 OFFSET(12) NUMBITS(2) [],
        MODER7 OFFSET(14) NUMBITS(2) [],
        MODER8 OFFSET(16) NUMBITS(2) [],
        MODER9 OFFSET(18) NUMBITS(2) [],
        MODER10 OFFSET(20) NUMBITS(2) [],
        MODER11 OFFSET(22) NUMBITS(2) [],
        MODER12 OFFSET(24) NUMBITS(2) [],
        MODER13 OFFSET(26) NUMBITS(2) [],
        MODER14 OFFSET(28) NUMBITS(2) [],
        MODER15 OFFSET(30) NUMBITS(2) []
    ],
    OTYPER [
        /// Port output type bits, one per pin: 0 push-pull, 1 open-drain
        OT OFFSET(0) NUMBITS(16) []
    ],
    OSPEEDR [
        /// Port output speed bits, two per pin
        OSPEEDR0 OFFSET(0) NUMBITS(2) [],
        OSPEEDR1 OFFSET(2) NUMBITS(2) [],
        OSPEEDR2 OFFSET(4) NUMBITS(2) [],
        OSPEEDR3 OFFSET(6) NUMBITS(2) [],
        OSPEEDR4 OFFSET(8) NUMBITS(2) [],
        OSPEEDR5 OFFSET(10) NUMBITS(2) [],
        OSPEEDR6 OFFSET(12) NUMBITS(2) [],
        OSPEEDR7 OFFSET(14) NUMBITS(2) [],
        OSPEEDR8 OFFSET(16) NUMBITS(2) [],
        OSPEEDR9 OFFSET(18) NUMBITS(2) [],
        OSPEEDR10 OFFSET(20) NUMBITS(2) [],
        OSPEEDR11 OFFSET(22) NUMBITS(2) [],
        OSPEEDR12 OFFSET(24) NUMBITS(2) [],
        OSPEEDR13 OFFSET(26) NUMBITS(2) [],
        OSPEEDR14 OFFSET(28) NUMBITS(2) [],
        OSPEEDR15 OFFSET(30) NUMBITS(2) []
    ],
    PUPDR [
        /// Port pull-up/pull-down bits, two per pin
        PUPDR0 OFFSET(0) NUMBITS(2) [],
        PUPDR1 OFFSET(2) NUMBITS(2) [],
        PUPDR2 OFFSET(4) NUMBITS(2) [],
        PUPDR3 OFFSET(6) NUMBITS(2) [],
        PUPDR4 OFFSET(8) NUMBITS(2) [],
        PUPDR5 OFFSET(10) NUMBITS(2) [],
        PUPDR6 OFFSET(12) NUMBITS(2) [],
        PUPDR7 OFFSET(14) NUMBITS(2) [],
        PUPDR8 OFFSET(16) NUMBITS(2) [],
        PUPDR9 OFFSET(18) NUMBITS(2) [],
        PUPDR10 OFFSET(20) NUMBITS(2) [],
        PUPDR11 OFFSET(22) NUMBITS(2) [],
        PUPDR12 OFFSET(24) NUMBITS(2) [],
        PUPDR13 OFFSET(26) NUMBITS(2) [],
        PUPDR14 OFFSET(28) NUMBITS(2) [],
        PUPDR15 OFFSET(30) NUMBITS(2) []
    ],
    IDR [
        /// Port input data, one bit per pin
        IDR OFFSET(0) NUMBITS(16) []
    ],
    ODR [
        /// Port output data, one bit per pin
        ODR OFFSET(0) NUMBITS(16) []
    ],
    BSRR [
        /// Port set bits; writing 1 sets the pin, writing 0 is a no-op
        BS OFFSET(0) NUMBITS(16) [],
        /// Port reset bits; writing 1 clears the pin, writing 0 is a no-op
        BR OFFSET(16) NUMBITS(16) []
    ],
    LCKR [
        /// Port configuration lock bits, one per pin
        LCK OFFSET(0) NUMBITS(16) [],
        /// Lock key; the lock sequence is LCKK=1, 0, 1 with LCK unchanged
        LCKK OFFSET(16) NUMBITS(1) []
    ],
    AFR [
        /// Alternate function selection, four bits per pin, eight pins per
        /// register
        AFR0 OFFSET(0) NUMBITS(4) [],
        AFR1 OFFSET(4) NUMBITS(4) [],
        AFR2 OFFSET(8) NUMBITS(4) [],
        AFR3 OFFSET(12) NUMBITS(4) [],
        AFR4 OFFSET(16) NUMBITS(4) [],
        AFR5 OFFSET(20) NUMBITS(4) [],
        AFR6 OFFSET(24) NUMBITS(4) [],
        AFR7 OFFSET(28) NUMBITS(4) []
    ],
    BRR [
        /// Port reset bits; writing 1 clears the pin, writing 0 is a no-op
        BR OFFSET(0) NUMBITS(16) []
    ]
];

/// Pin mode values for the MODER fields.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Input = 0b00,
    Output = 0b01,
    AlternateFunction = 0b10,
    Analog = 0b11,
}

/// Output speed values for the OSPEEDR fields.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Speed {
    Low = 0b00,
    Medium = 0b01,
    Fast = 0b10,
    High = 0b11,
}

/// Pull resistor values for the PUPDR fields.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pull {
    Floating = 0b00,
    Up = 0b01,
    Down = 0b10,
}

impl GpioRegisters {
    /// The two-bit mode field of `pin`.
    ///
    /// Pin indices run 0-15; larger values address bits the register does
    /// not have and are the caller's error.
    pub fn moder_pin(pin: usize) -> Field<u32, MODER::Register> {
        Field::<u32, MODER::Register>::new(0b11, pin * 2)
    }

    /// The two-bit speed field of `pin` (0-15).
    pub fn ospeedr_pin(pin: usize) -> Field<u32, OSPEEDR::Register> {
        Field::<u32, OSPEEDR::Register>::new(0b11, pin * 2)
    }

    /// The two-bit pull field of `pin` (0-15).
    pub fn pupdr_pin(pin: usize) -> Field<u32, PUPDR::Register> {
        Field::<u32, PUPDR::Register>::new(0b11, pin * 2)
    }

    /// Configure the mode of one pin. Read-modify-write: not
    /// interrupt-safe against other configuration of the same port.
    pub fn set_pin_mode(&self, pin: usize, mode: Mode) {
        self.moder
            .modify(Self::moder_pin(pin).val(mode as u32));
    }

    /// The raw mode bits of one pin.
    pub fn pin_mode(&self, pin: usize) -> u32 {
        self.moder.read(Self::moder_pin(pin))
    }

    /// Select the alternate function of one pin. The AF registers hold
    /// four bits per pin, eight pins per register; the pin index picks
    /// both the register and the nibble. Read-modify-write.
    pub fn set_alternate_function(&self, pin: usize, af: u32) {
        let field: Field<u32, AFR::Register> = Field::<u32, AFR::Register>::new(0xf, (pin & 7) * 4);
        self.afr[pin >> 3].modify(field.val(af));
    }

    /// The alternate function currently selected for one pin.
    pub fn alternate_function(&self, pin: usize) -> u32 {
        let field: Field<u32, AFR::Register> = Field::<u32, AFR::Register>::new(0xf, (pin & 7) * 4);
        self.afr[pin >> 3].read(field)
    }

    /// Drive one pin high. Single store to BSRR: interrupt-safe, and
    /// never touches the other pins regardless of their current state.
    pub fn set_pin(&self, pin: usize) {
        self.bsrr.write(BSRR::BS.val(1 << pin));
    }

    /// Drive one pin low. Single store to BSRR: interrupt-safe.
    pub fn clear_pin(&self, pin: usize) {
        self.bsrr.write(BSRR::BR.val(1 << pin));
    }

    /// The input level of one pin.
    pub fn read_pin(&self, pin: usize) -> bool {
        self.idr.read(IDR::IDR) & (1 << pin) != 0
    }

    /// The last value written to one pin's output latch.
    pub fn output_pin(&self, pin: usize) -> bool {
        self.odr.read(ODR::ODR) & (1 << pin) != 0
    }
}

pub const GPIOA_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x48000000 as *const GpioRegisters) };
pub const GPIOB_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x48000400 as *const GpioRegisters) };
pub const GPIOC_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x48000800 as *const GpioRegisters) };
pub const GPIOD_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x48000C00 as *const GpioRegisters) };
pub const GPIOE_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x48001000 as *const GpioRegisters) };
pub const GPIOF_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x48001400 as *const GpioRegisters) };

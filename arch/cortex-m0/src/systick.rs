// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! ARM Cortex-M SysTick peripheral.
//!
//! Documented in the Cortex-M0 Devices Generic User Guide, Chapter 4.4.

use silica_registers::interfaces::{Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef};

register_structs! {
    SystickRegisters {
        /// SysTick Control and Status Register
        (0x00 => syst_csr: ReadWrite<u32, ControlAndStatus::Register>),

        /// SysTick Reload Value Register
        (0x04 => syst_rvr: ReadWrite<u32, ReloadValue::Register>),

        /// SysTick Current Value Register
        (0x08 => syst_cvr: ReadWrite<u32, CurrentValue::Register>),

        /// SysTick Calibration Value Register
        (0x0c => syst_calib: ReadOnly<u32, CalibrationValue::Register>),

        (0x10 => @END),
    }
}

register_bitfields![u32,
    ControlAndStatus [
        /// Returns 1 if timer counted to 0 since last time this was read.
        COUNTFLAG OFFSET(16) NUMBITS(1) [],

        /// Clock source is (0) external clock or (1) processor clock.
        CLKSOURCE OFFSET(2) NUMBITS(1) [],

        /// Set to 1 to enable SysTick exception request.
        TICKINT OFFSET(1) NUMBITS(1) [],

        /// Enable the counter (1 == enabled).
        ENABLE OFFSET(0) NUMBITS(1) []
    ],

    ReloadValue [
        /// Value loaded into `syst_cvr` when the counter reaches 0.
        RELOAD OFFSET(0) NUMBITS(24) []
    ],

    CurrentValue [
        /// Reads the current value. A write of any value clears to 0.
        CURRENT OFFSET(0) NUMBITS(24) []
    ],

    CalibrationValue [
        /// 0 if the device provides a reference clock to the processor.
        NOREF OFFSET(31) NUMBITS(1) [],

        /// 0 if the TENMS value is exact, 1 if inexact or not given.
        SKEW OFFSET(30) NUMBITS(1) [],

        /// Reload value for 10ms ticks, or 0 if no calibration.
        TENMS OFFSET(0) NUMBITS(24) []
    ]
];

const SYSTICK: StaticRef<SystickRegisters> =
    unsafe { StaticRef::new(0xe000e010 as *const SystickRegisters) };

/// Program the reload value and restart the count from it.
pub unsafe fn set_reload(value: u32) {
    // 4.4.5 'hints and tips' suggests setting reload before value.
    SYSTICK.syst_rvr.write(ReloadValue::RELOAD.val(value));
    SYSTICK.syst_cvr.set(0);
}

/// Start the counter, optionally with the SysTick exception enabled,
/// clocked from the processor clock.
pub unsafe fn enable(with_interrupt: bool) {
    let tickint = if with_interrupt {
        ControlAndStatus::TICKINT::SET
    } else {
        ControlAndStatus::TICKINT::CLEAR
    };
    SYSTICK
        .syst_csr
        .write(ControlAndStatus::CLKSOURCE::SET + tickint + ControlAndStatus::ENABLE::SET);
}

/// Stop the counter.
pub unsafe fn disable() {
    SYSTICK.syst_csr.set(0);
}

/// The current counter value.
pub fn value() -> u32 {
    SYSTICK.syst_cvr.read(CurrentValue::CURRENT)
}

/// True if the counter reached zero since the last call.
///
/// Reading COUNTFLAG clears it, so two contexts polling this function race
/// by hardware design; poll from one context only.
pub fn overflowed() -> bool {
    SYSTICK.syst_csr.is_set(ControlAndStatus::COUNTFLAG)
}

/// The hardware's 10ms calibration reload value, or `None` if the
/// implementation does not provide one.
pub fn tenms() -> Option<u32> {
    let tenms = SYSTICK.syst_calib.read(CalibrationValue::TENMS);
    if tenms == 0 {
        None
    } else {
        Some(tenms)
    }
}

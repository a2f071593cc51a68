// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! ARMv6-M System Control Block
//!
//! The Cortex-M0 implements the reduced SCB: no vector table offset
//! register, no configurable fault status registers, and only the second
//! and third system handler priority registers. The slots ARMv7-M uses for
//! those registers are reserved here.

use silica_registers::interfaces::{ReadWriteable, Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef};

register_structs! {
    /// System Control Block registers, at the fixed system address.
    ScbRegisters {
        /// CPUID Base Register
        (0x00 => cpuid: ReadOnly<u32, CpuId::Register>),

        /// Interrupt Control and State Register
        (0x04 => icsr: ReadWrite<u32, InterruptControlAndState::Register>),

        /// Reserved; ARMv6-M has no Vector Table Offset Register.
        (0x08 => _reserved0),

        /// Application Interrupt and Reset Control Register
        (0x0c => aircr: ReadWrite<u32, ApplicationInterruptAndReset::Register>),

        /// System Control Register
        (0x10 => scr: ReadWrite<u32, SystemControl::Register>),

        /// Configuration and Control Register; read-only on ARMv6-M.
        (0x14 => ccr: ReadOnly<u32, ConfigurationAndControl::Register>),

        /// Reserved; SHPR1 is not implemented on ARMv6-M.
        (0x18 => _reserved1),

        /// System Handler Priority Register 2
        (0x1c => shpr2: ReadWrite<u32, SystemHandlerPriority2::Register>),

        /// System Handler Priority Register 3
        (0x20 => shpr3: ReadWrite<u32, SystemHandlerPriority3::Register>),

        (0x24 => @END),
    }
}

register_bitfields![u32,
    CpuId [
        /// Implementer code assigned by ARM. ARM implementations are 0x41.
        IMPLEMENTER OFFSET(24) NUMBITS(8) [],
        /// Implementer-defined variant number.
        VARIANT OFFSET(20) NUMBITS(4) [],
        /// Reads as 0xC on ARMv6-M.
        ARCHITECTURE OFFSET(16) NUMBITS(4) [],
        /// Implementer-defined part number. 0xC20 is the Cortex-M0.
        PARTNO OFFSET(4) NUMBITS(12) [],
        /// Implementer-defined revision number.
        REVISION OFFSET(0) NUMBITS(4) []
    ],

    InterruptControlAndState [
        /// Write 1 to pend an NMI.
        NMIPENDSET OFFSET(31) NUMBITS(1) [],
        /// Write 1 to pend PendSV; read returns the pending state.
        PENDSVSET OFFSET(28) NUMBITS(1) [],
        /// Write 1 to clear PendSV. Write-only.
        PENDSVCLR OFFSET(27) NUMBITS(1) [],
        /// Write 1 to pend SysTick; read returns the pending state.
        PENDSTSET OFFSET(26) NUMBITS(1) [],
        /// Write 1 to clear the pending SysTick. Write-only.
        PENDSTCLR OFFSET(25) NUMBITS(1) [],
        /// Whether an external interrupt is pending. Read-only.
        ISRPENDING OFFSET(22) NUMBITS(1) [],
        /// Highest pending exception number, zero if none. Read-only.
        VECTPENDING OFFSET(12) NUMBITS(9) [],
        /// Currently active exception number, zero in thread mode.
        /// Read-only.
        VECTACTIVE OFFSET(0) NUMBITS(9) []
    ],

    ApplicationInterruptAndReset [
        /// Key field. Reads as 0xFA05; writes are ignored unless
        /// accompanied by the write key.
        VECTKEY OFFSET(16) NUMBITS(16) [
            /// The value the hardware requires on every write.
            Key = 0x05FA
        ],
        /// Data endianness, set from a configuration input at reset.
        ENDIANNESS OFFSET(15) NUMBITS(1) [],
        /// Writing 1 requests a system reset.
        SYSRESETREQ OFFSET(2) NUMBITS(1) [],
        /// Reserved for debug use; write as 0 from software.
        VECTCLRACTIVE OFFSET(1) NUMBITS(1) []
    ],

    SystemControl [
        /// Send Event on pending interrupt.
        SEVONPEND OFFSET(4) NUMBITS(1) [],
        /// Select deep sleep as the sleep state.
        SLEEPDEEP OFFSET(2) NUMBITS(1) [],
        /// Re-enter sleep on return from an interrupt handler.
        SLEEPONEXIT OFFSET(1) NUMBITS(1) []
    ],

    ConfigurationAndControl [
        /// Always 1: exception entry aligns the stack to 8 bytes.
        STKALIGN OFFSET(9) NUMBITS(1) [],
        /// Always 1: unaligned accesses trap.
        UNALIGN_TRP OFFSET(3) NUMBITS(1) []
    ],

    SystemHandlerPriority2 [
        /// Priority of the SVCall handler.
        PRI_11 OFFSET(24) NUMBITS(8) []
    ],

    SystemHandlerPriority3 [
        /// Priority of the SysTick handler.
        PRI_15 OFFSET(24) NUMBITS(8) [],
        /// Priority of the PendSV handler.
        PRI_14 OFFSET(16) NUMBITS(8) []
    ]
];

const SCB: StaticRef<ScbRegisters> =
    unsafe { StaticRef::new(0xe000ed00 as *const ScbRegisters) };

/// Request a system-wide reset and wait for it to take effect.
pub unsafe fn reset() {
    SCB.aircr.write(
        ApplicationInterruptAndReset::VECTKEY::Key
            + ApplicationInterruptAndReset::SYSRESETREQ::SET,
    );
}

/// Select deep sleep for the next `wfi`.
pub unsafe fn set_sleepdeep() {
    SCB.scr.modify(SystemControl::SLEEPDEEP::SET);
}

/// Select normal sleep for the next `wfi`.
pub unsafe fn unset_sleepdeep() {
    SCB.scr.modify(SystemControl::SLEEPDEEP::CLEAR);
}

/// Pend the PendSV exception.
pub unsafe fn set_pendsv() {
    SCB.icsr.write(InterruptControlAndState::PENDSVSET::SET);
}

/// The implementer-defined part number from CPUID; 0xC20 on a Cortex-M0.
pub fn part_number() -> u32 {
    SCB.cpuid.read(CpuId::PARTNO)
}

/// Whether unaligned accesses trap. Reads as true on ARMv6-M.
pub fn unaligned_trap_enabled() -> bool {
    SCB.ccr.is_set(ConfigurationAndControl::UNALIGN_TRP)
}

/// Set the SVCall handler priority; 0 is highest.
pub unsafe fn set_svcall_priority(priority: u8) {
    SCB.shpr2
        .modify(SystemHandlerPriority2::PRI_11.val(priority as u32));
}

/// Set the SysTick handler priority; 0 is highest.
pub unsafe fn set_systick_priority(priority: u8) {
    SCB.shpr3
        .modify(SystemHandlerPriority3::PRI_15.val(priority as u32));
}

/// Set the PendSV handler priority; 0 is highest.
pub unsafe fn set_pendsv_priority(priority: u8) {
    SCB.shpr3
        .modify(SystemHandlerPriority3::PRI_14.val(priority as u32));
}

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Power control.

use silica_registers::{register_bitfields, register_structs, ReadWrite, StaticRef};

register_structs! {
    /// Power control
    pub PwrRegisters {
        /// power control register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// power control/status register
        (0x04 => pub csr: ReadWrite<u32, CSR::Register>),
        (0x08 => @END),
    }
}

register_bitfields![u32,
    CR [
        /// Disable RTC domain write protection
        DBP OFFSET(8) NUMBITS(1) [],
        /// PVD level selection; thresholds 2.2 V through 2.9 V
        PLS OFFSET(5) NUMBITS(3) [
            V2_2 = 0,
            V2_3 = 1,
            V2_4 = 2,
            V2_5 = 3,
            V2_6 = 4,
            V2_7 = 5,
            V2_8 = 6,
            V2_9 = 7
        ],
        /// Power voltage detector enable
        PVDE OFFSET(4) NUMBITS(1) [],
        /// Clear standby flag; write 1 to clear CSR.SBF
        CSBF OFFSET(3) NUMBITS(1) [],
        /// Clear wakeup flag; write 1 to clear CSR.WUF
        CWUF OFFSET(2) NUMBITS(1) [],
        /// Power down deep sleep: Standby instead of Stop
        PDDS OFFSET(1) NUMBITS(1) [],
        /// Low-power deep sleep: regulator low-power in Stop
        LPDS OFFSET(0) NUMBITS(1) []
    ],
    CSR [
        /// Enable the WKUP8 pin
        EWUP8 OFFSET(15) NUMBITS(1) [],
        EWUP7 OFFSET(14) NUMBITS(1) [],
        EWUP6 OFFSET(13) NUMBITS(1) [],
        EWUP5 OFFSET(12) NUMBITS(1) [],
        EWUP4 OFFSET(11) NUMBITS(1) [],
        EWUP3 OFFSET(10) NUMBITS(1) [],
        EWUP2 OFFSET(9) NUMBITS(1) [],
        /// Enable the WKUP1 pin
        EWUP1 OFFSET(8) NUMBITS(1) [],
        /// VREFINT reference voltage ready. Read-only.
        VREFINTRDY OFFSET(3) NUMBITS(1) [],
        /// PVD output. Read-only.
        PVDO OFFSET(2) NUMBITS(1) [],
        /// Standby flag; cleared through CR.CSBF. Read-only.
        SBF OFFSET(1) NUMBITS(1) [],
        /// Wakeup flag; cleared through CR.CWUF. Read-only.
        WUF OFFSET(0) NUMBITS(1) []
    ]
];

pub const PWR_BASE: StaticRef<PwrRegisters> =
    unsafe { StaticRef::new(0x40007000 as *const PwrRegisters) };

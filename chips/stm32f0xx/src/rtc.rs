// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Real-time clock.
//!
//! Calendar, two alarms, wakeup timer, timestamp and tamper detection,
//! plus five battery-backed backup registers. Time and date fields are
//! BCD. Most registers are write-protected: a key sequence through WPR
//! (0xCA then 0x53) unlocks them, any other value locks again. The two
//! alarm registers share one field layout.

use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// Real-time clock
    pub RtcRegisters {
        /// time register
        (0x00 => pub tr: ReadWrite<u32, TR::Register>),
        /// date register
        (0x04 => pub dr: ReadWrite<u32, DR::Register>),
        /// control register
        (0x08 => pub cr: ReadWrite<u32, CR::Register>),
        /// initialization and status register
        (0x0c => pub isr: ReadWrite<u32, ISR::Register>),
        /// prescaler register
        (0x10 => pub prer: ReadWrite<u32, PRER::Register>),
        /// wakeup timer register
        (0x14 => pub wutr: ReadWrite<u32, WUTR::Register>),
        (0x18 => _reserved0),
        /// alarm A register
        (0x1c => pub alrmar: ReadWrite<u32, ALRMR::Register>),
        /// alarm B register
        (0x20 => pub alrmbr: ReadWrite<u32, ALRMR::Register>),
        /// write protection register
        (0x24 => pub wpr: WriteOnly<u32, WPR::Register>),
        /// sub second register
        (0x28 => pub ssr: ReadOnly<u32, SSR::Register>),
        /// shift control register
        (0x2c => pub shiftr: WriteOnly<u32, SHIFTR::Register>),
        /// timestamp time register
        (0x30 => pub tstr: ReadOnly<u32, TR::Register>),
        /// timestamp date register
        (0x34 => pub tsdr: ReadOnly<u32, TSDR::Register>),
        /// timestamp sub second register
        (0x38 => pub tsssr: ReadOnly<u32, SSR::Register>),
        /// calibration register
        (0x3c => pub calr: ReadWrite<u32, CALR::Register>),
        /// tamper and alternate function configuration register
        (0x40 => pub tafcr: ReadWrite<u32, TAFCR::Register>),
        /// alarm A sub second register
        (0x44 => pub alrmassr: ReadWrite<u32, ALRMSSR::Register>),
        /// alarm B sub second register
        (0x48 => pub alrmbssr: ReadWrite<u32, ALRMSSR::Register>),
        (0x4c => _reserved1),
        /// backup registers, preserved across standby and VBAT operation
        (0x50 => pub bkpr: [ReadWrite<u32>; 5]),
        (0x64 => @END),
    }
}

register_bitfields![u32,
    TR [
        /// AM/PM notation
        PM OFFSET(22) NUMBITS(1) [],
        /// Hour tens in BCD
        HT OFFSET(20) NUMBITS(2) [],
        /// Hour units in BCD
        HU OFFSET(16) NUMBITS(4) [],
        /// Minute tens in BCD
        MNT OFFSET(12) NUMBITS(3) [],
        /// Minute units in BCD
        MNU OFFSET(8) NUMBITS(4) [],
        /// Second tens in BCD
        ST OFFSET(4) NUMBITS(3) [],
        /// Second units in BCD
        SU OFFSET(0) NUMBITS(4) []
    ],
    DR [
        /// Year tens in BCD
        YT OFFSET(20) NUMBITS(4) [],
        /// Year units in BCD
        YU OFFSET(16) NUMBITS(4) [],
        /// Week day units; 1 Monday through 7 Sunday
        WDU OFFSET(13) NUMBITS(3) [],
        /// Month tens in BCD
        MT OFFSET(12) NUMBITS(1) [],
        /// Month units in BCD
        MU OFFSET(8) NUMBITS(4) [],
        /// Date tens in BCD
        DT OFFSET(4) NUMBITS(2) [],
        /// Date units in BCD
        DU OFFSET(0) NUMBITS(4) []
    ],
    CR [
        /// Calibration output enable
        COE OFFSET(23) NUMBITS(1) [],
        /// Output selection
        OSEL OFFSET(21) NUMBITS(2) [
            Disabled = 0,
            AlarmA = 1,
            AlarmB = 2,
            Wakeup = 3
        ],
        /// Output polarity
        POL OFFSET(20) NUMBITS(1) [],
        /// Calibration output selection: 0 is 512 Hz, 1 is 1 Hz
        COSEL OFFSET(19) NUMBITS(1) [],
        /// Backup; saves whether daylight saving was applied
        BKP OFFSET(18) NUMBITS(1) [],
        /// Subtract one hour
        SUB1H OFFSET(17) NUMBITS(1) [],
        /// Add one hour
        ADD1H OFFSET(16) NUMBITS(1) [],
        /// Timestamp interrupt enable
        TSIE OFFSET(15) NUMBITS(1) [],
        /// Wakeup timer interrupt enable
        WUTIE OFFSET(14) NUMBITS(1) [],
        /// Alarm B interrupt enable
        ALRBIE OFFSET(13) NUMBITS(1) [],
        /// Alarm A interrupt enable
        ALRAIE OFFSET(12) NUMBITS(1) [],
        /// Timestamp enable
        TSE OFFSET(11) NUMBITS(1) [],
        /// Wakeup timer enable
        WUTE OFFSET(10) NUMBITS(1) [],
        /// Alarm B enable
        ALRBE OFFSET(9) NUMBITS(1) [],
        /// Alarm A enable
        ALRAE OFFSET(8) NUMBITS(1) [],
        /// Hour format: 0 is 24-hour, 1 is AM/PM
        FMT OFFSET(6) NUMBITS(1) [],
        /// Bypass the shadow registers
        BYPSHAD OFFSET(5) NUMBITS(1) [],
        /// RTC_REFIN reference clock detection enable
        REFCKON OFFSET(4) NUMBITS(1) [],
        /// Timestamp event active edge
        TSEDGE OFFSET(3) NUMBITS(1) [],
        /// Wakeup clock selection
        WUCKSEL OFFSET(0) NUMBITS(3) [
            RtcDiv16 = 0,
            RtcDiv8 = 1,
            RtcDiv4 = 2,
            RtcDiv2 = 3,
            CkSpre = 4,
            CkSpreWutPlus2_16 = 6
        ]
    ],
    ISR [
        /// Recalibration pending flag. Read-only.
        RECALPF OFFSET(16) NUMBITS(1) [],
        /// Tamper 3 detection flag; write 0 to clear
        TAMP3F OFFSET(15) NUMBITS(1) [],
        /// Tamper 2 detection flag; write 0 to clear
        TAMP2F OFFSET(14) NUMBITS(1) [],
        /// Tamper 1 detection flag; write 0 to clear
        TAMP1F OFFSET(13) NUMBITS(1) [],
        /// Timestamp overflow flag; write 0 to clear
        TSOVF OFFSET(12) NUMBITS(1) [],
        /// Timestamp flag; write 0 to clear
        TSF OFFSET(11) NUMBITS(1) [],
        /// Wakeup timer flag; write 0 to clear
        WUTF OFFSET(10) NUMBITS(1) [],
        /// Alarm B flag; write 0 to clear
        ALRBF OFFSET(9) NUMBITS(1) [],
        /// Alarm A flag; write 0 to clear
        ALRAF OFFSET(8) NUMBITS(1) [],
        /// Initialization mode
        INIT OFFSET(7) NUMBITS(1) [],
        /// Initialization flag. Read-only.
        INITF OFFSET(6) NUMBITS(1) [],
        /// Registers synchronization flag; write 0 to clear
        RSF OFFSET(5) NUMBITS(1) [],
        /// Initialization status flag. Read-only.
        INITS OFFSET(4) NUMBITS(1) [],
        /// Shift operation pending. Read-only.
        SHPF OFFSET(3) NUMBITS(1) [],
        /// Wakeup timer write flag. Read-only.
        WUTWF OFFSET(2) NUMBITS(1) [],
        /// Alarm A write flag. Read-only.
        ALRAWF OFFSET(0) NUMBITS(1) []
    ],
    PRER [
        /// Asynchronous prescaler factor; division by PREDIV_A + 1
        PREDIV_A OFFSET(16) NUMBITS(7) [],
        /// Synchronous prescaler factor; division by PREDIV_S + 1
        PREDIV_S OFFSET(0) NUMBITS(15) []
    ],
    WUTR [
        /// Wakeup auto-reload value
        WUT OFFSET(0) NUMBITS(16) []
    ],
    ALRMR [
        /// Date/week-day mask: 1 means don't care
        MSK4 OFFSET(31) NUMBITS(1) [],
        /// Week day instead of date units
        WDSEL OFFSET(30) NUMBITS(1) [],
        /// Date tens in BCD
        DT OFFSET(28) NUMBITS(2) [],
        /// Date units in BCD
        DU OFFSET(24) NUMBITS(4) [],
        /// Hours mask: 1 means don't care
        MSK3 OFFSET(23) NUMBITS(1) [],
        /// AM/PM notation
        PM OFFSET(22) NUMBITS(1) [],
        /// Hour tens in BCD
        HT OFFSET(20) NUMBITS(2) [],
        /// Hour units in BCD
        HU OFFSET(16) NUMBITS(4) [],
        /// Minutes mask: 1 means don't care
        MSK2 OFFSET(15) NUMBITS(1) [],
        /// Minute tens in BCD
        MNT OFFSET(12) NUMBITS(3) [],
        /// Minute units in BCD
        MNU OFFSET(8) NUMBITS(4) [],
        /// Seconds mask: 1 means don't care
        MSK1 OFFSET(7) NUMBITS(1) [],
        /// Second tens in BCD
        ST OFFSET(4) NUMBITS(3) [],
        /// Second units in BCD
        SU OFFSET(0) NUMBITS(4) []
    ],
    WPR [
        /// Write protection key; 0xCA then 0x53 unlocks
        KEY OFFSET(0) NUMBITS(8) []
    ],
    SSR [
        /// Sub second value, counting down at the synchronous rate
        SS OFFSET(0) NUMBITS(16) []
    ],
    SHIFTR [
        /// Add one second to the clock
        ADD1S OFFSET(31) NUMBITS(1) [],
        /// Subtract a fraction of a second
        SUBFS OFFSET(0) NUMBITS(15) []
    ],
    TSDR [
        /// Week day units
        WDU OFFSET(13) NUMBITS(3) [],
        /// Month tens in BCD
        MT OFFSET(12) NUMBITS(1) [],
        /// Month units in BCD
        MU OFFSET(8) NUMBITS(4) [],
        /// Date tens in BCD
        DT OFFSET(4) NUMBITS(2) [],
        /// Date units in BCD
        DU OFFSET(0) NUMBITS(4) []
    ],
    CALR [
        /// Increase frequency by 488.5 ppm
        CALP OFFSET(15) NUMBITS(1) [],
        /// Use an 8-second calibration cycle
        CALW8 OFFSET(14) NUMBITS(1) [],
        /// Use a 16-second calibration cycle
        CALW16 OFFSET(13) NUMBITS(1) [],
        /// Calibration minus: pulses masked per cycle
        CALM OFFSET(0) NUMBITS(9) []
    ],
    TAFCR [
        /// PC15 mode
        PC15MODE OFFSET(23) NUMBITS(1) [],
        /// PC15 value
        PC15VALUE OFFSET(22) NUMBITS(1) [],
        PC14MODE OFFSET(21) NUMBITS(1) [],
        PC14VALUE OFFSET(20) NUMBITS(1) [],
        /// RTC_ALARM output type/PC13 mode
        PC13MODE OFFSET(19) NUMBITS(1) [],
        PC13VALUE OFFSET(18) NUMBITS(1) [],
        /// Tamper pull-up disable
        TAMPPUDIS OFFSET(15) NUMBITS(1) [],
        /// Tamper precharge duration
        TAMPPRCH OFFSET(13) NUMBITS(2) [],
        /// Tamper filter count
        TAMPFLT OFFSET(11) NUMBITS(2) [],
        /// Tamper sampling frequency
        TAMPFREQ OFFSET(8) NUMBITS(3) [],
        /// Activate timestamp on tamper detection
        TAMPTS OFFSET(7) NUMBITS(1) [],
        /// Active level for tamper 3
        TAMP3TRG OFFSET(6) NUMBITS(1) [],
        /// Tamper 3 detection enable
        TAMP3E OFFSET(5) NUMBITS(1) [],
        /// Active level for tamper 2
        TAMP2TRG OFFSET(4) NUMBITS(1) [],
        /// Tamper 2 detection enable
        TAMP2E OFFSET(3) NUMBITS(1) [],
        /// Tamper interrupt enable
        TAMPIE OFFSET(2) NUMBITS(1) [],
        /// Active level for tamper 1
        TAMP1TRG OFFSET(1) NUMBITS(1) [],
        /// Tamper 1 detection enable
        TAMP1E OFFSET(0) NUMBITS(1) []
    ],
    ALRMSSR [
        /// Compare the sub second value down to this bit
        MASKSS OFFSET(24) NUMBITS(4) [],
        /// Sub second alarm value
        SS OFFSET(0) NUMBITS(15) []
    ]
];

/// First write of the WPR unlock sequence.
pub const WPR_KEY1: u32 = 0xCA;
/// Second write of the WPR unlock sequence.
pub const WPR_KEY2: u32 = 0x53;

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(0x40002800 as *const RtcRegisters) };

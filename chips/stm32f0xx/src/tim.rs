// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! General-purpose timers.
//!
//! The full TIM register block with four capture/compare units; TIM2 and
//! TIM3 implement all of it, the smaller timers a subset at the same
//! offsets. The capture/compare mode registers are interpreted as output
//! compare or input capture depending on the CCxS selection, so both
//! views' fields are defined over the same registers.
//!
//! Status flags in SR are cleared by writing 0 to the flag bit (and 1 to
//! every other); hardware never interprets a software write of 1, so the
//! idiomatic acknowledge is a plain store of `!flag`, not a
//! read-modify-write.

use silica_registers::fields::FieldValue;
use silica_registers::interfaces::Writeable;
use silica_registers::{register_bitfields, register_structs, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// General purpose timer
    pub TimRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// slave mode control register
        (0x08 => pub smcr: ReadWrite<u32, SMCR::Register>),
        /// DMA/interrupt enable register
        (0x0c => pub dier: ReadWrite<u32, DIER::Register>),
        /// status register
        (0x10 => pub sr: ReadWrite<u32, SR::Register>),
        /// event generation register
        (0x14 => pub egr: WriteOnly<u32, EGR::Register>),
        /// capture/compare mode register 1, units 1 and 2
        (0x18 => pub ccmr1: ReadWrite<u32, CCMR1::Register>),
        /// capture/compare mode register 2, units 3 and 4
        (0x1c => pub ccmr2: ReadWrite<u32, CCMR2::Register>),
        /// capture/compare enable register
        (0x20 => pub ccer: ReadWrite<u32, CCER::Register>),
        /// counter
        (0x24 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// prescaler
        (0x28 => pub psc: ReadWrite<u32, PSC::Register>),
        /// auto-reload register
        (0x2c => pub arr: ReadWrite<u32, ARR::Register>),
        /// repetition counter register
        (0x30 => pub rcr: ReadWrite<u32, RCR::Register>),
        /// capture/compare registers, units 1-4
        (0x34 => pub ccr: [ReadWrite<u32, CCRx::Register>; 4]),
        /// break and dead-time register
        (0x44 => pub bdtr: ReadWrite<u32, BDTR::Register>),
        /// DMA control register
        (0x48 => pub dcr: ReadWrite<u32, DCR::Register>),
        /// DMA address for full transfer
        (0x4c => pub dmar: ReadWrite<u32>),
        (0x50 => @END),
    }
}

register_bitfields![u32,
    CR1 [
        /// Clock division
        CKD OFFSET(8) NUMBITS(2) [],
        /// Auto-reload preload enable
        ARPE OFFSET(7) NUMBITS(1) [],
        /// Center-aligned mode selection
        CMS OFFSET(5) NUMBITS(2) [],
        /// Direction: 0 up, 1 down
        DIR OFFSET(4) NUMBITS(1) [],
        /// One pulse mode
        OPM OFFSET(3) NUMBITS(1) [],
        /// Update request source
        URS OFFSET(2) NUMBITS(1) [],
        /// Update disable
        UDIS OFFSET(1) NUMBITS(1) [],
        /// Counter enable
        CEN OFFSET(0) NUMBITS(1) []
    ],
    CR2 [
        /// Output idle state 4 (OC4 output)
        OIS4 OFFSET(14) NUMBITS(1) [],
        /// Output idle state 3 (OC3N output)
        OIS3N OFFSET(13) NUMBITS(1) [],
        /// Output idle state 3 (OC3 output)
        OIS3 OFFSET(12) NUMBITS(1) [],
        /// Output idle state 2 (OC2N output)
        OIS2N OFFSET(11) NUMBITS(1) [],
        /// Output idle state 2 (OC2 output)
        OIS2 OFFSET(10) NUMBITS(1) [],
        /// Output idle state 1 (OC1N output)
        OIS1N OFFSET(9) NUMBITS(1) [],
        /// Output idle state 1 (OC1 output)
        OIS1 OFFSET(8) NUMBITS(1) [],
        /// TI1 selection
        TI1S OFFSET(7) NUMBITS(1) [],
        /// Master mode selection
        MMS OFFSET(4) NUMBITS(3) [],
        /// Capture/compare DMA selection
        CCDS OFFSET(3) NUMBITS(1) [],
        /// Capture/compare control update selection
        CCUS OFFSET(2) NUMBITS(1) [],
        /// Capture/compare preloaded control
        CCPC OFFSET(0) NUMBITS(1) []
    ],
    SMCR [
        /// External trigger polarity
        ETP OFFSET(15) NUMBITS(1) [],
        /// External clock enable
        ECE OFFSET(14) NUMBITS(1) [],
        /// External trigger prescaler
        ETPS OFFSET(12) NUMBITS(2) [],
        /// External trigger filter
        ETF OFFSET(8) NUMBITS(4) [],
        /// Master/slave mode
        MSM OFFSET(7) NUMBITS(1) [],
        /// Trigger selection
        TS OFFSET(4) NUMBITS(3) [],
        /// OCREF clear selection
        OCCS OFFSET(3) NUMBITS(1) [],
        /// Slave mode selection
        SMS OFFSET(0) NUMBITS(3) []
    ],
    DIER [
        /// Trigger DMA request enable
        TDE OFFSET(14) NUMBITS(1) [],
        /// COM DMA request enable
        COMDE OFFSET(13) NUMBITS(1) [],
        /// Capture/compare 4 DMA request enable
        CC4DE OFFSET(12) NUMBITS(1) [],
        CC3DE OFFSET(11) NUMBITS(1) [],
        CC2DE OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 1 DMA request enable
        CC1DE OFFSET(9) NUMBITS(1) [],
        /// Update DMA request enable
        UDE OFFSET(8) NUMBITS(1) [],
        /// Break interrupt enable
        BIE OFFSET(7) NUMBITS(1) [],
        /// Trigger interrupt enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// COM interrupt enable
        COMIE OFFSET(5) NUMBITS(1) [],
        /// Capture/compare 4 interrupt enable
        CC4IE OFFSET(4) NUMBITS(1) [],
        CC3IE OFFSET(3) NUMBITS(1) [],
        CC2IE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 interrupt enable
        CC1IE OFFSET(1) NUMBITS(1) [],
        /// Update interrupt enable
        UIE OFFSET(0) NUMBITS(1) []
    ],
    SR [
        /// Capture/compare 4 overcapture flag
        CC4OF OFFSET(12) NUMBITS(1) [],
        CC3OF OFFSET(11) NUMBITS(1) [],
        CC2OF OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 1 overcapture flag
        CC1OF OFFSET(9) NUMBITS(1) [],
        /// Break interrupt flag
        BIF OFFSET(7) NUMBITS(1) [],
        /// Trigger interrupt flag
        TIF OFFSET(6) NUMBITS(1) [],
        /// COM interrupt flag
        COMIF OFFSET(5) NUMBITS(1) [],
        /// Capture/compare 4 interrupt flag
        CC4IF OFFSET(4) NUMBITS(1) [],
        CC3IF OFFSET(3) NUMBITS(1) [],
        CC2IF OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 interrupt flag
        CC1IF OFFSET(1) NUMBITS(1) [],
        /// Update interrupt flag
        UIF OFFSET(0) NUMBITS(1) []
    ],
    EGR [
        /// Break generation
        BG OFFSET(7) NUMBITS(1) [],
        /// Trigger generation
        TG OFFSET(6) NUMBITS(1) [],
        /// Capture/compare control update generation
        COMG OFFSET(5) NUMBITS(1) [],
        /// Capture/compare 4 generation
        CC4G OFFSET(4) NUMBITS(1) [],
        CC3G OFFSET(3) NUMBITS(1) [],
        CC2G OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 generation
        CC1G OFFSET(1) NUMBITS(1) [],
        /// Update generation
        UG OFFSET(0) NUMBITS(1) []
    ],
    CCMR1 [
        /// Output compare 2 clear enable
        OC2CE OFFSET(15) NUMBITS(1) [],
        /// Output compare 2 mode
        OC2M OFFSET(12) NUMBITS(3) [],
        /// Output compare 2 preload enable
        OC2PE OFFSET(11) NUMBITS(1) [],
        /// Output compare 2 fast enable
        OC2FE OFFSET(10) NUMBITS(1) [],
        /// Input capture 2 filter (input capture view)
        IC2F OFFSET(12) NUMBITS(4) [],
        /// Input capture 2 prescaler (input capture view)
        IC2PSC OFFSET(10) NUMBITS(2) [],
        /// Capture/compare 2 selection
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0,
            InputTi2 = 1,
            InputTi1 = 2,
            InputTrc = 3
        ],
        /// Output compare 1 clear enable
        OC1CE OFFSET(7) NUMBITS(1) [],
        /// Output compare 1 mode
        OC1M OFFSET(4) NUMBITS(3) [],
        /// Output compare 1 preload enable
        OC1PE OFFSET(3) NUMBITS(1) [],
        /// Output compare 1 fast enable
        OC1FE OFFSET(2) NUMBITS(1) [],
        /// Input capture 1 filter (input capture view)
        IC1F OFFSET(4) NUMBITS(4) [],
        /// Input capture 1 prescaler (input capture view)
        IC1PSC OFFSET(2) NUMBITS(2) [],
        /// Capture/compare 1 selection
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0,
            InputTi1 = 1,
            InputTi2 = 2,
            InputTrc = 3
        ]
    ],
    CCMR2 [
        /// Output compare 4 clear enable
        OC4CE OFFSET(15) NUMBITS(1) [],
        /// Output compare 4 mode
        OC4M OFFSET(12) NUMBITS(3) [],
        /// Output compare 4 preload enable
        OC4PE OFFSET(11) NUMBITS(1) [],
        /// Output compare 4 fast enable
        OC4FE OFFSET(10) NUMBITS(1) [],
        /// Input capture 4 filter (input capture view)
        IC4F OFFSET(12) NUMBITS(4) [],
        /// Input capture 4 prescaler (input capture view)
        IC4PSC OFFSET(10) NUMBITS(2) [],
        /// Capture/compare 4 selection
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0,
            InputTi4 = 1,
            InputTi3 = 2,
            InputTrc = 3
        ],
        /// Output compare 3 clear enable
        OC3CE OFFSET(7) NUMBITS(1) [],
        /// Output compare 3 mode
        OC3M OFFSET(4) NUMBITS(3) [],
        /// Output compare 3 preload enable
        OC3PE OFFSET(3) NUMBITS(1) [],
        /// Output compare 3 fast enable
        OC3FE OFFSET(2) NUMBITS(1) [],
        /// Input capture 3 filter (input capture view)
        IC3F OFFSET(4) NUMBITS(4) [],
        /// Input capture 3 prescaler (input capture view)
        IC3PSC OFFSET(2) NUMBITS(2) [],
        /// Capture/compare 3 selection
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0,
            InputTi3 = 1,
            InputTi4 = 2,
            InputTrc = 3
        ]
    ],
    CCER [
        /// Capture/compare 4 output polarity
        CC4P OFFSET(13) NUMBITS(1) [],
        /// Capture/compare 4 output enable
        CC4E OFFSET(12) NUMBITS(1) [],
        /// Capture/compare 3 complementary output polarity
        CC3NP OFFSET(11) NUMBITS(1) [],
        /// Capture/compare 3 complementary output enable
        CC3NE OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 3 output polarity
        CC3P OFFSET(9) NUMBITS(1) [],
        /// Capture/compare 3 output enable
        CC3E OFFSET(8) NUMBITS(1) [],
        CC2NP OFFSET(7) NUMBITS(1) [],
        CC2NE OFFSET(6) NUMBITS(1) [],
        CC2P OFFSET(5) NUMBITS(1) [],
        CC2E OFFSET(4) NUMBITS(1) [],
        /// Capture/compare 1 complementary output polarity
        CC1NP OFFSET(3) NUMBITS(1) [],
        /// Capture/compare 1 complementary output enable
        CC1NE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 output polarity
        CC1P OFFSET(1) NUMBITS(1) [],
        /// Capture/compare 1 output enable
        CC1E OFFSET(0) NUMBITS(1) []
    ],
    CNT [
        /// Counter value; TIM2 extends to 32 bits
        CNT OFFSET(0) NUMBITS(32) []
    ],
    PSC [
        /// Prescaler value; the counter clock is divided by PSC + 1
        PSC OFFSET(0) NUMBITS(16) []
    ],
    ARR [
        /// Auto-reload value; TIM2 extends to 32 bits
        ARR OFFSET(0) NUMBITS(32) []
    ],
    RCR [
        /// Repetition counter value (advanced timers)
        REP OFFSET(0) NUMBITS(8) []
    ],
    CCRx [
        /// Capture/compare value; TIM2 extends to 32 bits
        CCR OFFSET(0) NUMBITS(32) []
    ],
    BDTR [
        /// Main output enable
        MOE OFFSET(15) NUMBITS(1) [],
        /// Automatic output enable
        AOE OFFSET(14) NUMBITS(1) [],
        /// Break polarity
        BKP OFFSET(13) NUMBITS(1) [],
        /// Break enable
        BKE OFFSET(12) NUMBITS(1) [],
        /// Off-state selection for run mode
        OSSR OFFSET(11) NUMBITS(1) [],
        /// Off-state selection for idle mode
        OSSI OFFSET(10) NUMBITS(1) [],
        /// Lock configuration
        LOCK OFFSET(8) NUMBITS(2) [],
        /// Dead-time generator setup
        DTG OFFSET(0) NUMBITS(8) []
    ],
    DCR [
        /// DMA burst length
        DBL OFFSET(8) NUMBITS(5) [],
        /// DMA base address
        DBA OFFSET(0) NUMBITS(5) []
    ]
];

impl TimRegisters {
    /// Acknowledge one or more SR flags: a single store of the inverted
    /// mask. Writing 1 to a flag is ignored by hardware, so flags outside
    /// `flags` are untouched even if they set after the last read.
    pub fn clear_flags(&self, flags: FieldValue<u32, SR::Register>) {
        self.sr.set(!flags.mask());
    }
}

pub const TIM1_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40012C00 as *const TimRegisters) };
pub const TIM2_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40000000 as *const TimRegisters) };
pub const TIM3_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40000400 as *const TimRegisters) };
pub const TIM14_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40002000 as *const TimRegisters) };
pub const TIM15_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40014000 as *const TimRegisters) };
pub const TIM16_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40014400 as *const TimRegisters) };
pub const TIM17_BASE: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(0x40014800 as *const TimRegisters) };

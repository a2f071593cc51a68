// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Analog-to-digital converter.
//!
//! One 12-bit converter with nineteen multiplexed channels. The ISR flags
//! are write-one-to-clear in place; the control register's command bits
//! (ADEN, ADDIS, ADSTART, ADSTP, ADCAL) are set by software and cleared
//! by hardware when the command completes.

use silica_registers::fields::Field;
use silica_registers::interfaces::{ReadWriteable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef};

register_structs! {
    /// Analog-to-digital converter
    pub AdcRegisters {
        /// interrupt and status register; write 1 to clear
        (0x000 => pub isr: ReadWrite<u32, ISR::Register>),
        /// interrupt enable register
        (0x004 => pub ier: ReadWrite<u32, IER::Register>),
        /// control register
        (0x008 => pub cr: ReadWrite<u32, CR::Register>),
        /// configuration register 1
        (0x00c => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        /// configuration register 2
        (0x010 => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        /// sampling time register
        (0x014 => pub smpr: ReadWrite<u32, SMPR::Register>),
        (0x018 => _reserved0),
        /// watchdog threshold register
        (0x020 => pub tr: ReadWrite<u32, TR::Register>),
        (0x024 => _reserved1),
        /// channel selection register
        (0x028 => pub chselr: ReadWrite<u32, CHSELR::Register>),
        (0x02c => _reserved2),
        /// data register
        (0x040 => pub dr: ReadOnly<u32, DR::Register>),
        (0x044 => _reserved3),
        /// common configuration register
        (0x308 => pub ccr: ReadWrite<u32, CCR::Register>),
        (0x30c => @END),
    }
}

register_bitfields![u32,
    ISR [
        /// Analog watchdog flag
        AWD OFFSET(7) NUMBITS(1) [],
        /// ADC overrun
        OVR OFFSET(4) NUMBITS(1) [],
        /// End of sequence flag
        EOSEQ OFFSET(3) NUMBITS(1) [],
        /// End of conversion flag
        EOC OFFSET(2) NUMBITS(1) [],
        /// End of sampling flag
        EOSMP OFFSET(1) NUMBITS(1) [],
        /// ADC ready
        ADRDY OFFSET(0) NUMBITS(1) []
    ],
    IER [
        /// Analog watchdog interrupt enable
        AWDIE OFFSET(7) NUMBITS(1) [],
        /// Overrun interrupt enable
        OVRIE OFFSET(4) NUMBITS(1) [],
        /// End of sequence interrupt enable
        EOSEQIE OFFSET(3) NUMBITS(1) [],
        /// End of conversion interrupt enable
        EOCIE OFFSET(2) NUMBITS(1) [],
        /// End of sampling interrupt enable
        EOSMPIE OFFSET(1) NUMBITS(1) [],
        /// ADC ready interrupt enable
        ADRDYIE OFFSET(0) NUMBITS(1) []
    ],
    CR [
        /// ADC calibration command
        ADCAL OFFSET(31) NUMBITS(1) [],
        /// ADC stop conversion command
        ADSTP OFFSET(4) NUMBITS(1) [],
        /// ADC start conversion command
        ADSTART OFFSET(2) NUMBITS(1) [],
        /// ADC disable command
        ADDIS OFFSET(1) NUMBITS(1) [],
        /// ADC enable command
        ADEN OFFSET(0) NUMBITS(1) []
    ],
    CFGR1 [
        /// Analog watchdog channel selection
        AWDCH OFFSET(26) NUMBITS(5) [],
        /// Analog watchdog enable
        AWDEN OFFSET(23) NUMBITS(1) [],
        /// Watchdog on a single channel rather than all
        AWDSGL OFFSET(22) NUMBITS(1) [],
        /// Discontinuous mode
        DISCEN OFFSET(16) NUMBITS(1) [],
        /// Auto-off mode
        AUTOFF OFFSET(15) NUMBITS(1) [],
        /// Wait conversion mode
        WAIT OFFSET(14) NUMBITS(1) [],
        /// Single / continuous conversion mode
        CONT OFFSET(13) NUMBITS(1) [],
        /// Overrun management mode
        OVRMOD OFFSET(12) NUMBITS(1) [],
        /// External trigger enable and polarity
        EXTEN OFFSET(10) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            BothEdges = 3
        ],
        /// External trigger selection
        EXTSEL OFFSET(6) NUMBITS(3) [],
        /// Data alignment: 0 right, 1 left
        ALIGN OFFSET(5) NUMBITS(1) [],
        /// Data resolution
        RES OFFSET(3) NUMBITS(2) [
            Bits12 = 0,
            Bits10 = 1,
            Bits8 = 2,
            Bits6 = 3
        ],
        /// Scan sequence direction
        SCANDIR OFFSET(2) NUMBITS(1) [],
        /// DMA configuration: 0 one-shot, 1 circular
        DMACFG OFFSET(1) NUMBITS(1) [],
        /// DMA enable
        DMAEN OFFSET(0) NUMBITS(1) []
    ],
    CFGR2 [
        /// ADC clock mode
        CKMODE OFFSET(30) NUMBITS(2) [
            Adcclk = 0,
            PclkDiv2 = 1,
            PclkDiv4 = 2
        ]
    ],
    SMPR [
        /// Sampling time selection, in ADC clock cycles
        SMP OFFSET(0) NUMBITS(3) [
            Cycles1_5 = 0,
            Cycles7_5 = 1,
            Cycles13_5 = 2,
            Cycles28_5 = 3,
            Cycles41_5 = 4,
            Cycles55_5 = 5,
            Cycles71_5 = 6,
            Cycles239_5 = 7
        ]
    ],
    TR [
        /// Analog watchdog higher threshold
        HT OFFSET(16) NUMBITS(12) [],
        /// Analog watchdog lower threshold
        LT OFFSET(0) NUMBITS(12) []
    ],
    CHSELR [
        /// Channel selection bits, one per channel 0-18
        CHSEL OFFSET(0) NUMBITS(19) []
    ],
    DR [
        /// Converted data
        DATA OFFSET(0) NUMBITS(16) []
    ],
    CCR [
        /// VBAT channel enable
        VBATEN OFFSET(24) NUMBITS(1) [],
        /// Temperature sensor enable
        TSEN OFFSET(23) NUMBITS(1) [],
        /// VREFINT enable
        VREFEN OFFSET(22) NUMBITS(1) []
    ]
];

impl AdcRegisters {
    /// The selection bit of `channel` (0-18) in CHSELR.
    pub fn channel_field(channel: usize) -> Field<u32, CHSELR::Register> {
        Field::<u32, CHSELR::Register>::new(1, channel)
    }

    /// Add `channel` (0-18) to the conversion sequence.
    /// Read-modify-write.
    pub fn select_channel(&self, channel: usize) {
        self.chselr.modify(Self::channel_field(channel).val(1));
    }

    /// Remove `channel` (0-18) from the conversion sequence.
    /// Read-modify-write.
    pub fn deselect_channel(&self, channel: usize) {
        self.chselr.modify(Self::channel_field(channel).val(0));
    }

    /// Acknowledge the end-of-conversion flag. Single store; other
    /// status flags keep their state.
    pub fn clear_end_of_conversion(&self) {
        self.isr.write(ISR::EOC::SET);
    }
}

pub const ADC_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(0x40012400 as *const AdcRegisters) };

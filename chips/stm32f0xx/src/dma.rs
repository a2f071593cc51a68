// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Direct memory access controller.
//!
//! Seven channels with an identical register block each. The interrupt
//! status register is read-only; flags are cleared exclusively through the
//! write-only IFCR, one store per clear, so acknowledging one channel's
//! interrupt can never lose a flag another channel set concurrently.

use silica_registers::fields::Field;
use silica_registers::interfaces::{Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// DMA controller
    pub DmaRegisters {
        /// interrupt status register
        (0x00 => pub isr: ReadOnly<u32, ISR::Register>),
        /// interrupt flag clear register
        (0x04 => pub ifcr: WriteOnly<u32, IFCR::Register>),
        /// channel registers, channel 1 first
        (0x08 => pub channel: [DmaChannelRegisters; 7]),
        (0x94 => @END),
    },
    /// Registers of one DMA channel
    pub DmaChannelRegisters {
        /// channel configuration register
        (0x00 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// number of data register
        (0x04 => pub cndtr: ReadWrite<u32, CNDTR::Register>),
        /// peripheral address register
        (0x08 => pub cpar: ReadWrite<u32>),
        /// memory address register
        (0x0c => pub cmar: ReadWrite<u32>),
        (0x10 => _reserved0),
        (0x14 => @END),
    }
}

register_bitfields![u32,
    ISR [
        /// Transfer error interrupt flag, channels 1-7
        TEIF7 OFFSET(27) NUMBITS(1) [],
        /// Half transfer interrupt flag, channels 1-7
        HTIF7 OFFSET(26) NUMBITS(1) [],
        /// Transfer complete interrupt flag, channels 1-7
        TCIF7 OFFSET(25) NUMBITS(1) [],
        /// Global interrupt flag, channels 1-7
        GIF7 OFFSET(24) NUMBITS(1) [],
        TEIF6 OFFSET(23) NUMBITS(1) [],
        HTIF6 OFFSET(22) NUMBITS(1) [],
        TCIF6 OFFSET(21) NUMBITS(1) [],
        GIF6 OFFSET(20) NUMBITS(1) [],
        TEIF5 OFFSET(19) NUMBITS(1) [],
        HTIF5 OFFSET(18) NUMBITS(1) [],
        TCIF5 OFFSET(17) NUMBITS(1) [],
        GIF5 OFFSET(16) NUMBITS(1) [],
        TEIF4 OFFSET(15) NUMBITS(1) [],
        HTIF4 OFFSET(14) NUMBITS(1) [],
        TCIF4 OFFSET(13) NUMBITS(1) [],
        GIF4 OFFSET(12) NUMBITS(1) [],
        TEIF3 OFFSET(11) NUMBITS(1) [],
        HTIF3 OFFSET(10) NUMBITS(1) [],
        TCIF3 OFFSET(9) NUMBITS(1) [],
        GIF3 OFFSET(8) NUMBITS(1) [],
        TEIF2 OFFSET(7) NUMBITS(1) [],
        HTIF2 OFFSET(6) NUMBITS(1) [],
        TCIF2 OFFSET(5) NUMBITS(1) [],
        GIF2 OFFSET(4) NUMBITS(1) [],
        TEIF1 OFFSET(3) NUMBITS(1) [],
        HTIF1 OFFSET(2) NUMBITS(1) [],
        TCIF1 OFFSET(1) NUMBITS(1) [],
        GIF1 OFFSET(0) NUMBITS(1) []
    ],
    IFCR [
        /// Clear transfer error flag, channels 1-7
        CTEIF7 OFFSET(27) NUMBITS(1) [],
        /// Clear half transfer flag, channels 1-7
        CHTIF7 OFFSET(26) NUMBITS(1) [],
        /// Clear transfer complete flag, channels 1-7
        CTCIF7 OFFSET(25) NUMBITS(1) [],
        /// Clear global interrupt flag, channels 1-7
        CGIF7 OFFSET(24) NUMBITS(1) [],
        CTEIF6 OFFSET(23) NUMBITS(1) [],
        CHTIF6 OFFSET(22) NUMBITS(1) [],
        CTCIF6 OFFSET(21) NUMBITS(1) [],
        CGIF6 OFFSET(20) NUMBITS(1) [],
        CTEIF5 OFFSET(19) NUMBITS(1) [],
        CHTIF5 OFFSET(18) NUMBITS(1) [],
        CTCIF5 OFFSET(17) NUMBITS(1) [],
        CGIF5 OFFSET(16) NUMBITS(1) [],
        CTEIF4 OFFSET(15) NUMBITS(1) [],
        CHTIF4 OFFSET(14) NUMBITS(1) [],
        CTCIF4 OFFSET(13) NUMBITS(1) [],
        CGIF4 OFFSET(12) NUMBITS(1) [],
        CTEIF3 OFFSET(11) NUMBITS(1) [],
        CHTIF3 OFFSET(10) NUMBITS(1) [],
        CTCIF3 OFFSET(9) NUMBITS(1) [],
        CGIF3 OFFSET(8) NUMBITS(1) [],
        CTEIF2 OFFSET(7) NUMBITS(1) [],
        CHTIF2 OFFSET(6) NUMBITS(1) [],
        CTCIF2 OFFSET(5) NUMBITS(1) [],
        CGIF2 OFFSET(4) NUMBITS(1) [],
        CTEIF1 OFFSET(3) NUMBITS(1) [],
        CHTIF1 OFFSET(2) NUMBITS(1) [],
        CTCIF1 OFFSET(1) NUMBITS(1) [],
        CGIF1 OFFSET(0) NUMBITS(1) []
    ],
    CCR [
        /// Memory to memory mode enable
        MEM2MEM OFFSET(14) NUMBITS(1) [],
        /// Channel priority
        PL OFFSET(12) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        /// Memory transfer size
        MSIZE OFFSET(10) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        /// Peripheral transfer size
        PSIZE OFFSET(8) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        /// Memory increment mode enable
        MINC OFFSET(7) NUMBITS(1) [],
        /// Peripheral increment mode enable
        PINC OFFSET(6) NUMBITS(1) [],
        /// Circular mode enable
        CIRC OFFSET(5) NUMBITS(1) [],
        /// Direction: 0 from peripheral, 1 from memory
        DIR OFFSET(4) NUMBITS(1) [],
        /// Transfer error interrupt enable
        TEIE OFFSET(3) NUMBITS(1) [],
        /// Half transfer interrupt enable
        HTIE OFFSET(2) NUMBITS(1) [],
        /// Transfer complete interrupt enable
        TCIE OFFSET(1) NUMBITS(1) [],
        /// Channel enable
        EN OFFSET(0) NUMBITS(1) []
    ],
    CNDTR [
        /// Number of data to transfer, decremented by hardware
        NDT OFFSET(0) NUMBITS(16) []
    ]
];

// Per-channel flag masks inside ISR/IFCR: four bits per channel.
const GIF: u32 = 0b0001;
const TCIF: u32 = 0b0010;
const HTIF: u32 = 0b0100;
const TEIF: u32 = 0b1000;

impl DmaRegisters {
    /// The four interrupt flags of `channel` (0-6) as a field of ISR.
    pub fn channel_flags(channel: usize) -> Field<u32, ISR::Register> {
        Field::<u32, ISR::Register>::new(0b1111, channel * 4)
    }

    /// True if the transfer complete flag of `channel` (0-6) is set.
    pub fn transfer_complete(&self, channel: usize) -> bool {
        self.isr.get() & (TCIF << (channel * 4)) != 0
    }

    /// True if the transfer error flag of `channel` (0-6) is set.
    pub fn transfer_error(&self, channel: usize) -> bool {
        self.isr.get() & (TEIF << (channel * 4)) != 0
    }

    /// True if the half transfer flag of `channel` (0-6) is set.
    pub fn half_transfer(&self, channel: usize) -> bool {
        self.isr.get() & (HTIF << (channel * 4)) != 0
    }

    /// Clear every interrupt flag of `channel` (0-6). One store to IFCR;
    /// flags of other channels are unaffected whatever their state.
    pub fn clear_interrupt_flags(&self, channel: usize) {
        self.ifcr.set((GIF | TCIF | HTIF | TEIF) << (channel * 4));
    }

    /// Clear only the transfer complete flag of `channel` (0-6).
    pub fn clear_transfer_complete(&self, channel: usize) {
        self.ifcr.set(TCIF << (channel * 4));
    }

    /// Clear only the transfer error flag of `channel` (0-6).
    pub fn clear_transfer_error(&self, channel: usize) {
        self.ifcr.set(TEIF << (channel * 4));
    }
}

pub const DMA1_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(0x40020000 as *const DmaRegisters) };
pub const DMA2_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(0x40020400 as *const DmaRegisters) };

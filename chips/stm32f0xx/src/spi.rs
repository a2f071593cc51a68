// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Serial peripheral interface / inter-IC sound.

use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef};

register_structs! {
    /// Serial peripheral interface
    pub SpiRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// status register
        (0x08 => pub sr: ReadWrite<u32, SR::Register>),
        /// data register; a load pops the RX FIFO, a store pushes TX
        (0x0c => pub dr: ReadWrite<u32, DR::Register>),
        /// CRC polynomial register
        (0x10 => pub crcpr: ReadWrite<u32>),
        /// RX CRC register
        (0x14 => pub rxcrcr: ReadOnly<u32>),
        /// TX CRC register
        (0x18 => pub txcrcr: ReadOnly<u32>),
        /// I2S configuration register
        (0x1c => pub i2scfgr: ReadWrite<u32, I2SCFGR::Register>),
        /// I2S prescaler register
        (0x20 => pub i2spr: ReadWrite<u32, I2SPR::Register>),
        (0x24 => @END),
    }
}

register_bitfields![u32,
    CR1 [
        /// Bidirectional data mode enable
        BIDIMODE OFFSET(15) NUMBITS(1) [],
        /// Output enable in bidirectional mode
        BIDIOE OFFSET(14) NUMBITS(1) [],
        /// Hardware CRC calculation enable
        CRCEN OFFSET(13) NUMBITS(1) [],
        /// CRC transfer next
        CRCNEXT OFFSET(12) NUMBITS(1) [],
        /// CRC length
        CRCL OFFSET(11) NUMBITS(1) [],
        /// Receive only
        RXONLY OFFSET(10) NUMBITS(1) [],
        /// Software slave management
        SSM OFFSET(9) NUMBITS(1) [],
        /// Internal slave select
        SSI OFFSET(8) NUMBITS(1) [],
        /// Frame format
        LSBFIRST OFFSET(7) NUMBITS(1) [],
        /// SPI enable
        SPE OFFSET(6) NUMBITS(1) [],
        /// Baud rate control: PCLK divided by 2 through 256
        BR OFFSET(3) NUMBITS(3) [
            DIV2 = 0,
            DIV4 = 1,
            DIV8 = 2,
            DIV16 = 3,
            DIV32 = 4,
            DIV64 = 5,
            DIV128 = 6,
            DIV256 = 7
        ],
        /// Master selection
        MSTR OFFSET(2) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(1) NUMBITS(1) [],
        /// Clock phase
        CPHA OFFSET(0) NUMBITS(1) []
    ],
    CR2 [
        /// Last DMA transfer for transmission
        LDMA_TX OFFSET(14) NUMBITS(1) [],
        /// Last DMA transfer for reception
        LDMA_RX OFFSET(13) NUMBITS(1) [],
        /// FIFO reception threshold
        FRXTH OFFSET(12) NUMBITS(1) [],
        /// Data size, 4 to 16 bit frames; DS_N selects N-bit
        DS OFFSET(8) NUMBITS(4) [
            DS4 = 3,
            DS5 = 4,
            DS6 = 5,
            DS7 = 6,
            DS8 = 7,
            DS9 = 8,
            DS10 = 9,
            DS11 = 10,
            DS12 = 11,
            DS13 = 12,
            DS14 = 13,
            DS15 = 14,
            DS16 = 15
        ],
        /// TX buffer empty interrupt enable
        TXEIE OFFSET(7) NUMBITS(1) [],
        /// RX buffer not empty interrupt enable
        RXNEIE OFFSET(6) NUMBITS(1) [],
        /// Error interrupt enable
        ERRIE OFFSET(5) NUMBITS(1) [],
        /// Frame format: 0 Motorola, 1 TI
        FRF OFFSET(4) NUMBITS(1) [],
        /// NSS pulse management enable
        NSSP OFFSET(3) NUMBITS(1) [],
        /// SS output enable
        SSOE OFFSET(2) NUMBITS(1) [],
        /// TX buffer DMA enable
        TXDMAEN OFFSET(1) NUMBITS(1) [],
        /// RX buffer DMA enable
        RXDMAEN OFFSET(0) NUMBITS(1) []
    ],
    SR [
        /// FIFO transmission level. Read-only.
        FTLVL OFFSET(11) NUMBITS(2) [
            Empty = 0,
            Quarter = 1,
            Half = 2,
            Full = 3
        ],
        /// FIFO reception level. Read-only.
        FRLVL OFFSET(9) NUMBITS(2) [
            Empty = 0,
            Quarter = 1,
            Half = 2,
            Full = 3
        ],
        /// Frame format error. Read-only.
        FRE OFFSET(8) NUMBITS(1) [],
        /// Busy flag. Read-only.
        BSY OFFSET(7) NUMBITS(1) [],
        /// Overrun flag. Read-only; cleared by a read sequence.
        OVR OFFSET(6) NUMBITS(1) [],
        /// Mode fault. Read-only.
        MODF OFFSET(5) NUMBITS(1) [],
        /// CRC error flag; write 0 to clear
        CRCERR OFFSET(4) NUMBITS(1) [],
        /// I2S underrun flag. Read-only.
        UDR OFFSET(3) NUMBITS(1) [],
        /// I2S channel side. Read-only.
        CHSIDE OFFSET(2) NUMBITS(1) [],
        /// Transmit buffer empty. Read-only.
        TXE OFFSET(1) NUMBITS(1) [],
        /// Receive buffer not empty. Read-only.
        RXNE OFFSET(0) NUMBITS(1) []
    ],
    DR [
        /// Data register; frames narrower than 16 bits are right-aligned
        DR OFFSET(0) NUMBITS(16) []
    ],
    I2SCFGR [
        /// I2S mode selection
        I2SMOD OFFSET(11) NUMBITS(1) [],
        /// I2S enable
        I2SE OFFSET(10) NUMBITS(1) [],
        /// I2S configuration mode
        I2SCFG OFFSET(8) NUMBITS(2) [
            SlaveTransmit = 0,
            SlaveReceive = 1,
            MasterTransmit = 2,
            MasterReceive = 3
        ],
        /// PCM frame synchronization
        PCMSYNC OFFSET(7) NUMBITS(1) [],
        /// I2S standard selection
        I2SSTD OFFSET(4) NUMBITS(2) [
            Philips = 0,
            MsbJustified = 1,
            LsbJustified = 2,
            Pcm = 3
        ],
        /// Steady state clock polarity
        CKPOL OFFSET(3) NUMBITS(1) [],
        /// Data length
        DATLEN OFFSET(1) NUMBITS(2) [
            Bits16 = 0,
            Bits24 = 1,
            Bits32 = 2
        ],
        /// Channel length: 0 is 16-bit, 1 is 32-bit
        CHLEN OFFSET(0) NUMBITS(1) []
    ],
    I2SPR [
        /// Master clock output enable
        MCKOE OFFSET(9) NUMBITS(1) [],
        /// Odd factor for the prescaler
        ODD OFFSET(8) NUMBITS(1) [],
        /// I2S linear prescaler
        I2SDIV OFFSET(0) NUMBITS(8) []
    ]
];

pub const SPI1_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x40013000 as *const SpiRegisters) };
pub const SPI2_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x40003800 as *const SpiRegisters) };

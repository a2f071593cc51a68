// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Inter-integrated circuit interface.

use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// Inter-integrated circuit interface
    pub I2cRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// own address 1 register
        (0x08 => pub oar1: ReadWrite<u32, OAR1::Register>),
        /// own address 2 register
        (0x0c => pub oar2: ReadWrite<u32, OAR2::Register>),
        /// timing register
        (0x10 => pub timingr: ReadWrite<u32, TIMINGR::Register>),
        /// timeout register
        (0x14 => pub timeoutr: ReadWrite<u32, TIMEOUTR::Register>),
        /// interrupt and status register
        (0x18 => pub isr: ReadWrite<u32, ISR::Register>),
        /// interrupt clear register
        (0x1c => pub icr: WriteOnly<u32, ICR::Register>),
        /// packet error checking register
        (0x20 => pub pecr: ReadOnly<u32, PECR::Register>),
        /// receive data register
        (0x24 => pub rxdr: ReadOnly<u32, RXDR::Register>),
        /// transmit data register
        (0x28 => pub txdr: ReadWrite<u32, TXDR::Register>),
        (0x2c => @END),
    }
}

register_bitfields![u32,
    CR1 [
        /// PEC enable
        PECEN OFFSET(23) NUMBITS(1) [],
        /// SMBus alert enable
        ALERTEN OFFSET(22) NUMBITS(1) [],
        /// SMBus device default address enable
        SMBDEN OFFSET(21) NUMBITS(1) [],
        /// SMBus host address enable
        SMBHEN OFFSET(20) NUMBITS(1) [],
        /// General call enable
        GCEN OFFSET(19) NUMBITS(1) [],
        /// Wakeup from Stop mode enable
        WUPEN OFFSET(18) NUMBITS(1) [],
        /// Clock stretching disable (slave mode)
        NOSTRETCH OFFSET(17) NUMBITS(1) [],
        /// Slave byte control
        SBC OFFSET(16) NUMBITS(1) [],
        /// DMA reception requests enable
        RXDMAEN OFFSET(15) NUMBITS(1) [],
        /// DMA transmission requests enable
        TXDMAEN OFFSET(14) NUMBITS(1) [],
        /// Analog noise filter OFF
        ANFOFF OFFSET(12) NUMBITS(1) [],
        /// Digital noise filter, in I2CCLK periods
        DNF OFFSET(8) NUMBITS(4) [],
        /// Error interrupts enable
        ERRIE OFFSET(7) NUMBITS(1) [],
        /// Transfer complete interrupt enable
        TCIE OFFSET(6) NUMBITS(1) [],
        /// STOP detection interrupt enable
        STOPIE OFFSET(5) NUMBITS(1) [],
        /// Not-acknowledge received interrupt enable
        NACKIE OFFSET(4) NUMBITS(1) [],
        /// Address match interrupt enable (slave only)
        ADDRIE OFFSET(3) NUMBITS(1) [],
        /// RX interrupt enable
        RXIE OFFSET(2) NUMBITS(1) [],
        /// TX interrupt enable
        TXIE OFFSET(1) NUMBITS(1) [],
        /// Peripheral enable
        PE OFFSET(0) NUMBITS(1) []
    ],
    CR2 [
        /// Packet error checking byte
        PECBYTE OFFSET(26) NUMBITS(1) [],
        /// Automatic end mode (master mode)
        AUTOEND OFFSET(25) NUMBITS(1) [],
        /// NBYTES reload mode
        RELOAD OFFSET(24) NUMBITS(1) [],
        /// Number of bytes
        NBYTES OFFSET(16) NUMBITS(8) [],
        /// NACK generation (slave mode)
        NACK OFFSET(15) NUMBITS(1) [],
        /// Stop generation (master mode)
        STOP OFFSET(14) NUMBITS(1) [],
        /// Start generation
        START OFFSET(13) NUMBITS(1) [],
        /// 10-bit address header only read direction (master receiver)
        HEAD10R OFFSET(12) NUMBITS(1) [],
        /// 10-bit addressing mode (master mode)
        ADD10 OFFSET(11) NUMBITS(1) [],
        /// Transfer direction (master mode): 0 write, 1 read
        RD_WRN OFFSET(10) NUMBITS(1) [],
        /// Slave address
        SADD OFFSET(0) NUMBITS(10) []
    ],
    OAR1 [
        /// Own address 1 enable
        OA1EN OFFSET(15) NUMBITS(1) [],
        /// Own address 1 10-bit mode
        OA1MODE OFFSET(10) NUMBITS(1) [],
        /// Interface address
        OA1 OFFSET(0) NUMBITS(10) []
    ],
    OAR2 [
        /// Own address 2 enable
        OA2EN OFFSET(15) NUMBITS(1) [],
        /// Own address 2 masks
        OA2MSK OFFSET(8) NUMBITS(3) [],
        /// Interface address
        OA2 OFFSET(1) NUMBITS(7) []
    ],
    TIMINGR [
        /// Timing prescaler
        PRESC OFFSET(28) NUMBITS(4) [],
        /// Data setup time
        SCLDEL OFFSET(20) NUMBITS(4) [],
        /// Data hold time
        SDADEL OFFSET(16) NUMBITS(4) [],
        /// SCL high period (master mode)
        SCLH OFFSET(8) NUMBITS(8) [],
        /// SCL low period (master mode)
        SCLL OFFSET(0) NUMBITS(8) []
    ],
    TIMEOUTR [
        /// Extended clock timeout enable
        TEXTEN OFFSET(31) NUMBITS(1) [],
        /// Bus timeout B
        TIMEOUTB OFFSET(16) NUMBITS(12) [],
        /// Clock timeout enable
        TIMOUTEN OFFSET(15) NUMBITS(1) [],
        /// Idle clock timeout detection
        TIDLE OFFSET(12) NUMBITS(1) [],
        /// Bus timeout A
        TIMEOUTA OFFSET(0) NUMBITS(12) []
    ],
    ISR [
        /// Address match code (slave mode). Read-only.
        ADDCODE OFFSET(17) NUMBITS(7) [],
        /// Transfer direction (slave mode). Read-only.
        DIR OFFSET(16) NUMBITS(1) [],
        /// Bus busy. Read-only.
        BUSY OFFSET(15) NUMBITS(1) [],
        /// SMBus alert. Read-only; cleared through ICR.
        ALERT OFFSET(13) NUMBITS(1) [],
        /// Timeout or tLOW detection flag. Read-only; cleared through ICR.
        TIMEOUT OFFSET(12) NUMBITS(1) [],
        /// PEC error in reception. Read-only; cleared through ICR.
        PECERR OFFSET(11) NUMBITS(1) [],
        /// Overrun/underrun (slave mode). Read-only; cleared through ICR.
        OVR OFFSET(10) NUMBITS(1) [],
        /// Arbitration lost. Read-only; cleared through ICR.
        ARLO OFFSET(9) NUMBITS(1) [],
        /// Bus error. Read-only; cleared through ICR.
        BERR OFFSET(8) NUMBITS(1) [],
        /// Transfer complete reload. Read-only.
        TCR OFFSET(7) NUMBITS(1) [],
        /// Transfer complete (master mode). Read-only.
        TC OFFSET(6) NUMBITS(1) [],
        /// Stop detection flag. Read-only; cleared through ICR.
        STOPF OFFSET(5) NUMBITS(1) [],
        /// Not-acknowledge received flag. Read-only; cleared through ICR.
        NACKF OFFSET(4) NUMBITS(1) [],
        /// Address matched (slave mode). Read-only; cleared through ICR.
        ADDR OFFSET(3) NUMBITS(1) [],
        /// Receive data register not empty. Read-only.
        RXNE OFFSET(2) NUMBITS(1) [],
        /// Transmit interrupt status; writable to generate an interrupt
        TXIS OFFSET(1) NUMBITS(1) [],
        /// Transmit data register empty; writable to flush
        TXE OFFSET(0) NUMBITS(1) []
    ],
    ICR [
        /// Alert flag clear
        ALERTCF OFFSET(13) NUMBITS(1) [],
        /// Timeout detection flag clear
        TIMOUTCF OFFSET(12) NUMBITS(1) [],
        /// PEC error flag clear
        PECCF OFFSET(11) NUMBITS(1) [],
        /// Overrun/underrun flag clear
        OVRCF OFFSET(10) NUMBITS(1) [],
        /// Arbitration lost flag clear
        ARLOCF OFFSET(9) NUMBITS(1) [],
        /// Bus error flag clear
        BERRCF OFFSET(8) NUMBITS(1) [],
        /// Stop detection flag clear
        STOPCF OFFSET(5) NUMBITS(1) [],
        /// Not-acknowledge flag clear
        NACKCF OFFSET(4) NUMBITS(1) [],
        /// Address matched flag clear
        ADDRCF OFFSET(3) NUMBITS(1) []
    ],
    PECR [
        /// Packet error checking value
        PEC OFFSET(0) NUMBITS(8) []
    ],
    RXDR [
        /// 8-bit receive data
        RXDATA OFFSET(0) NUMBITS(8) []
    ],
    TXDR [
        /// 8-bit transmit data
        TXDATA OFFSET(0) NUMBITS(8) []
    ]
];

pub const I2C1_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(0x40005400 as *const I2cRegisters) };
pub const I2C2_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(0x40005800 as *const I2cRegisters) };

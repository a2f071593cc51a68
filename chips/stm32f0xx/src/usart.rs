// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Universal synchronous asynchronous receiver transmitter.
//!
//! Status lives in the read-only ISR; every acknowledgeable flag has a
//! dedicated bit in the write-only ICR, and the receive and transmit data
//! registers are separate. None of the flag handling ever needs a
//! read-modify-write.

use silica_registers::{register_bitfields, register_structs, ReadOnly, ReadWrite, StaticRef, WriteOnly};

register_structs! {
    /// Universal synchronous asynchronous receiver transmitter
    pub UsartRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// control register 3
        (0x08 => pub cr3: ReadWrite<u32, CR3::Register>),
        /// baud rate register
        (0x0c => pub brr: ReadWrite<u32, BRR::Register>),
        /// guard time and prescaler register
        (0x10 => pub gtpr: ReadWrite<u32, GTPR::Register>),
        /// receiver timeout register
        (0x14 => pub rtor: ReadWrite<u32, RTOR::Register>),
        /// request register
        (0x18 => pub rqr: WriteOnly<u32, RQR::Register>),
        /// interrupt and status register
        (0x1c => pub isr: ReadOnly<u32, ISR::Register>),
        /// interrupt flag clear register
        (0x20 => pub icr: WriteOnly<u32, ICR::Register>),
        /// receive data register
        (0x24 => pub rdr: ReadOnly<u32, RDR::Register>),
        /// transmit data register
        (0x28 => pub tdr: ReadWrite<u32, TDR::Register>),
        (0x2c => @END),
    }
}

register_bitfields![u32,
    CR1 [
        /// Word length bit 1; with M0 selects 7, 8 or 9 data bits
        M1 OFFSET(28) NUMBITS(1) [],
        /// End of block interrupt enable
        EOBIE OFFSET(27) NUMBITS(1) [],
        /// Receiver timeout interrupt enable
        RTOIE OFFSET(26) NUMBITS(1) [],
        /// Driver enable assertion time
        DEAT OFFSET(21) NUMBITS(5) [],
        /// Driver enable de-assertion time
        DEDT OFFSET(16) NUMBITS(5) [],
        /// Oversampling mode: 0 by 16, 1 by 8
        OVER8 OFFSET(15) NUMBITS(1) [],
        /// Character match interrupt enable
        CMIE OFFSET(14) NUMBITS(1) [],
        /// Mute mode enable
        MME OFFSET(13) NUMBITS(1) [],
        /// Word length bit 0
        M0 OFFSET(12) NUMBITS(1) [],
        /// Receiver wakeup method
        WAKE OFFSET(11) NUMBITS(1) [],
        /// Parity control enable
        PCE OFFSET(10) NUMBITS(1) [],
        /// Parity selection: 0 even, 1 odd
        PS OFFSET(9) NUMBITS(1) [],
        /// PE interrupt enable
        PEIE OFFSET(8) NUMBITS(1) [],
        /// TXE interrupt enable
        TXEIE OFFSET(7) NUMBITS(1) [],
        /// Transmission complete interrupt enable
        TCIE OFFSET(6) NUMBITS(1) [],
        /// RXNE interrupt enable
        RXNEIE OFFSET(5) NUMBITS(1) [],
        /// IDLE interrupt enable
        IDLEIE OFFSET(4) NUMBITS(1) [],
        /// Transmitter enable
        TE OFFSET(3) NUMBITS(1) [],
        /// Receiver enable
        RE OFFSET(2) NUMBITS(1) [],
        /// USART enable in Stop mode
        UESM OFFSET(1) NUMBITS(1) [],
        /// USART enable
        UE OFFSET(0) NUMBITS(1) []
    ],
    CR2 [
        /// Address of the USART node, for mute-mode wakeup
        ADD OFFSET(24) NUMBITS(8) [],
        /// Receiver timeout enable
        RTOEN OFFSET(23) NUMBITS(1) [],
        /// Auto baud rate mode
        ABRMOD OFFSET(21) NUMBITS(2) [],
        /// Auto baud rate enable
        ABREN OFFSET(20) NUMBITS(1) [],
        /// Most significant bit first
        MSBFIRST OFFSET(19) NUMBITS(1) [],
        /// Binary data inversion
        DATAINV OFFSET(18) NUMBITS(1) [],
        /// TX pin active level inversion
        TXINV OFFSET(17) NUMBITS(1) [],
        /// RX pin active level inversion
        RXINV OFFSET(16) NUMBITS(1) [],
        /// Swap TX/RX pins
        SWAP OFFSET(15) NUMBITS(1) [],
        /// LIN mode enable
        LINEN OFFSET(14) NUMBITS(1) [],
        /// STOP bits
        STOP OFFSET(12) NUMBITS(2) [
            Stop1 = 0,
            Stop0_5 = 1,
            Stop2 = 2,
            Stop1_5 = 3
        ],
        /// Clock enable (synchronous mode)
        CLKEN OFFSET(11) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(10) NUMBITS(1) [],
        /// Clock phase
        CPHA OFFSET(9) NUMBITS(1) [],
        /// Last bit clock pulse
        LBCL OFFSET(8) NUMBITS(1) [],
        /// LIN break detection interrupt enable
        LBDIE OFFSET(6) NUMBITS(1) [],
        /// LIN break detection length
        LBDL OFFSET(5) NUMBITS(1) [],
        /// 7-bit address detection instead of 4-bit
        ADDM7 OFFSET(4) NUMBITS(1) []
    ],
    CR3 [
        /// Transmission complete before guard time interrupt enable
        TCBGTIE OFFSET(24) NUMBITS(1) [],
        /// USART clock enable in Stop mode
        UCESM OFFSET(23) NUMBITS(1) [],
        /// Wakeup from Stop mode interrupt enable
        WUFIE OFFSET(22) NUMBITS(1) [],
        /// Wakeup from Stop mode interrupt flag selection
        WUS OFFSET(20) NUMBITS(2) [],
        /// Smartcard auto-retry count
        SCARCNT OFFSET(17) NUMBITS(3) [],
        /// Driver enable polarity selection
        DEP OFFSET(15) NUMBITS(1) [],
        /// Driver enable mode
        DEM OFFSET(14) NUMBITS(1) [],
        /// DMA disable on reception error
        DDRE OFFSET(13) NUMBITS(1) [],
        /// Overrun disable
        OVRDIS OFFSET(12) NUMBITS(1) [],
        /// One sample bit method enable
        ONEBIT OFFSET(11) NUMBITS(1) [],
        /// CTS interrupt enable
        CTSIE OFFSET(10) NUMBITS(1) [],
        /// CTS enable
        CTSE OFFSET(9) NUMBITS(1) [],
        /// RTS enable
        RTSE OFFSET(8) NUMBITS(1) [],
        /// DMA enable transmitter
        DMAT OFFSET(7) NUMBITS(1) [],
        /// DMA enable receiver
        DMAR OFFSET(6) NUMBITS(1) [],
        /// Smartcard mode enable
        SCEN OFFSET(5) NUMBITS(1) [],
        /// Smartcard NACK enable
        NACK OFFSET(4) NUMBITS(1) [],
        /// Half-duplex selection
        HDSEL OFFSET(3) NUMBITS(1) [],
        /// IrDA low-power
        IRLP OFFSET(2) NUMBITS(1) [],
        /// IrDA mode enable
        IREN OFFSET(1) NUMBITS(1) [],
        /// Error interrupt enable
        EIE OFFSET(0) NUMBITS(1) []
    ],
    BRR [
        /// Baud rate divider mantissa
        DIV_MANTISSA OFFSET(4) NUMBITS(12) [],
        /// Baud rate divider fraction
        DIV_FRACTION OFFSET(0) NUMBITS(4) []
    ],
    GTPR [
        /// Guard time value (smartcard mode)
        GT OFFSET(8) NUMBITS(8) [],
        /// Prescaler value
        PSC OFFSET(0) NUMBITS(8) []
    ],
    RTOR [
        /// Block length (smartcard mode)
        BLEN OFFSET(24) NUMBITS(8) [],
        /// Receiver timeout value, in bit periods
        RTO OFFSET(0) NUMBITS(24) []
    ],
    RQR [
        /// Transmit data flush request
        TXFRQ OFFSET(4) NUMBITS(1) [],
        /// Receive data flush request
        RXFRQ OFFSET(3) NUMBITS(1) [],
        /// Mute mode request
        MMRQ OFFSET(2) NUMBITS(1) [],
        /// Send break request
        SBKRQ OFFSET(1) NUMBITS(1) [],
        /// Auto baud rate request
        ABRRQ OFFSET(0) NUMBITS(1) []
    ],
    ISR [
        /// Receive enable acknowledge flag
        REACK OFFSET(22) NUMBITS(1) [],
        /// Transmit enable acknowledge flag
        TEACK OFFSET(21) NUMBITS(1) [],
        /// Wakeup from Stop mode flag
        WUF OFFSET(20) NUMBITS(1) [],
        /// Receiver wakeup from mute mode
        RWU OFFSET(19) NUMBITS(1) [],
        /// Send break flag
        SBKF OFFSET(18) NUMBITS(1) [],
        /// Character match flag
        CMF OFFSET(17) NUMBITS(1) [],
        /// Busy flag
        BUSY OFFSET(16) NUMBITS(1) [],
        /// Auto baud rate flag
        ABRF OFFSET(15) NUMBITS(1) [],
        /// Auto baud rate error
        ABRE OFFSET(14) NUMBITS(1) [],
        /// End of block flag
        EOBF OFFSET(12) NUMBITS(1) [],
        /// Receiver timeout
        RTOF OFFSET(11) NUMBITS(1) [],
        /// CTS flag
        CTS OFFSET(10) NUMBITS(1) [],
        /// CTS interrupt flag
        CTSIF OFFSET(9) NUMBITS(1) [],
        /// LIN break detection flag
        LBDF OFFSET(8) NUMBITS(1) [],
        /// Transmit data register empty
        TXE OFFSET(7) NUMBITS(1) [],
        /// Transmission complete
        TC OFFSET(6) NUMBITS(1) [],
        /// Read data register not empty
        RXNE OFFSET(5) NUMBITS(1) [],
        /// Idle line detected
        IDLE OFFSET(4) NUMBITS(1) [],
        /// Overrun error
        ORE OFFSET(3) NUMBITS(1) [],
        /// Start bit noise detection flag
        NF OFFSET(2) NUMBITS(1) [],
        /// Framing error
        FE OFFSET(1) NUMBITS(1) [],
        /// Parity error
        PE OFFSET(0) NUMBITS(1) []
    ],
    ICR [
        /// Wakeup from Stop mode clear flag
        WUCF OFFSET(20) NUMBITS(1) [],
        /// Character match clear flag
        CMCF OFFSET(17) NUMBITS(1) [],
        /// End of block clear flag
        EOBCF OFFSET(12) NUMBITS(1) [],
        /// Receiver timeout clear flag
        RTOCF OFFSET(11) NUMBITS(1) [],
        /// CTS clear flag
        CTSCF OFFSET(9) NUMBITS(1) [],
        /// LIN break detection clear flag
        LBDCF OFFSET(8) NUMBITS(1) [],
        /// Transmission complete clear flag
        TCCF OFFSET(6) NUMBITS(1) [],
        /// Idle line detected clear flag
        IDLECF OFFSET(4) NUMBITS(1) [],
        /// Overrun error clear flag
        ORECF OFFSET(3) NUMBITS(1) [],
        /// Noise detected clear flag
        NCF OFFSET(2) NUMBITS(1) [],
        /// Framing error clear flag
        FECF OFFSET(1) NUMBITS(1) [],
        /// Parity error clear flag
        PECF OFFSET(0) NUMBITS(1) []
    ],
    RDR [
        /// Received data
        RDR OFFSET(0) NUMBITS(9) []
    ],
    TDR [
        /// Transmit data
        TDR OFFSET(0) NUMBITS(9) []
    ]
];

pub const USART1_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40013800 as *const UsartRegisters) };
pub const USART2_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40004400 as *const UsartRegisters) };
pub const USART3_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40004800 as *const UsartRegisters) };
pub const USART4_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40004C00 as *const UsartRegisters) };
pub const USART5_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40005000 as *const UsartRegisters) };
pub const USART6_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40011400 as *const UsartRegisters) };
pub const USART7_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40011800 as *const UsartRegisters) };
pub const USART8_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x40011C00 as *const UsartRegisters) };

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! System configuration controller.
//!
//! Owns memory remapping, DMA request remapping, and the EXTI line to
//! GPIO port routing. The four EXTICR registers hold four 4-bit source
//! selections each; the helpers compute register index and nibble from
//! the line number.

use silica_registers::fields::Field;
use silica_registers::interfaces::{ReadWriteable, Readable};
use silica_registers::{register_bitfields, register_structs, ReadWrite, StaticRef};

register_structs! {
    /// System configuration controller
    pub SyscfgRegisters {
        /// configuration register 1
        (0x00 => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        (0x04 => _reserved0),
        /// external interrupt configuration registers
        (0x08 => pub exticr: [ReadWrite<u32, EXTICR::Register>; 4]),
        /// configuration register 2
        (0x18 => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        (0x1c => @END),
    }
}

register_bitfields![u32,
    CFGR1 [
        /// Remap TIM3 DMA requests
        TIM3_DMA_RMP OFFSET(30) NUMBITS(1) [],
        /// Remap TIM2 DMA requests
        TIM2_DMA_RMP OFFSET(29) NUMBITS(1) [],
        /// Remap TIM1 DMA requests
        TIM1_DMA_RMP OFFSET(28) NUMBITS(1) [],
        /// Remap I2C1 DMA requests
        I2C1_DMA_RMP OFFSET(27) NUMBITS(1) [],
        /// Remap USART3 DMA requests
        USART3_DMA_RMP OFFSET(26) NUMBITS(1) [],
        /// Remap USART2 DMA requests
        USART2_DMA_RMP OFFSET(25) NUMBITS(1) [],
        /// Remap SPI2 DMA requests
        SPI2_DMA_RMP OFFSET(24) NUMBITS(1) [],
        /// Fast mode plus on PA10
        I2C_PA10_FMP OFFSET(23) NUMBITS(1) [],
        /// Fast mode plus on PA9
        I2C_PA9_FMP OFFSET(22) NUMBITS(1) [],
        /// Fast mode plus on I2C2
        I2C2_FMP OFFSET(21) NUMBITS(1) [],
        /// Fast mode plus on I2C1
        I2C1_FMP OFFSET(20) NUMBITS(1) [],
        /// Fast mode plus on PB9
        I2C_PB9_FMP OFFSET(19) NUMBITS(1) [],
        /// Fast mode plus on PB8
        I2C_PB8_FMP OFFSET(18) NUMBITS(1) [],
        /// Fast mode plus on PB7
        I2C_PB7_FMP OFFSET(17) NUMBITS(1) [],
        /// Fast mode plus on PB6
        I2C_PB6_FMP OFFSET(16) NUMBITS(1) [],
        /// Alternate TIM17 DMA request remap
        TIM17_DMA_RMP2 OFFSET(14) NUMBITS(1) [],
        /// Alternate TIM16 DMA request remap
        TIM16_DMA_RMP2 OFFSET(13) NUMBITS(1) [],
        /// Remap TIM17 DMA requests
        TIM17_DMA_RMP OFFSET(12) NUMBITS(1) [],
        /// Remap TIM16 DMA requests
        TIM16_DMA_RMP OFFSET(11) NUMBITS(1) [],
        /// Remap USART1 RX DMA requests
        USART1_RX_DMA_RMP OFFSET(10) NUMBITS(1) [],
        /// Remap USART1 TX DMA requests
        USART1_TX_DMA_RMP OFFSET(9) NUMBITS(1) [],
        /// Remap ADC DMA requests
        ADC_DMA_RMP OFFSET(8) NUMBITS(1) [],
        /// Remap PA11/PA12 over PA9/PA10
        PA11_PA12_RMP OFFSET(4) NUMBITS(1) [],
        /// Memory mapping selection at address zero
        MEM_MODE OFFSET(0) NUMBITS(2) [
            Flash = 0,
            System = 1,
            Sram = 3
        ]
    ],
    EXTICR [
        /// EXTI line source selections, four bits per line, four lines
        /// per register
        EXTI3 OFFSET(12) NUMBITS(4) [],
        EXTI2 OFFSET(8) NUMBITS(4) [],
        EXTI1 OFFSET(4) NUMBITS(4) [],
        EXTI0 OFFSET(0) NUMBITS(4) [
            GPIOA = 0,
            GPIOB = 1,
            GPIOC = 2,
            GPIOD = 3,
            GPIOE = 4,
            GPIOF = 5
        ]
    ],
    CFGR2 [
        /// SRAM parity error flag; write 1 to clear
        SRAM_PEF OFFSET(8) NUMBITS(1) [],
        /// PVD lock enable
        PVD_LOCK OFFSET(2) NUMBITS(1) [],
        /// SRAM parity lock
        SRAM_PARITY_LOCK OFFSET(1) NUMBITS(1) [],
        /// Cortex-M0 LOCKUP output enable
        LOCKUP_LOCK OFFSET(0) NUMBITS(1) []
    ]
];

impl SyscfgRegisters {
    /// The 4-bit source-selection field of EXTI `line` (0-15) within its
    /// EXTICR register.
    pub fn exticr_field(line: usize) -> Field<u32, EXTICR::Register> {
        Field::<u32, EXTICR::Register>::new(0xf, (line & 3) * 4)
    }

    /// Route EXTI `line` (0-15) to GPIO port `port` (0 = A .. 5 = F).
    /// Read-modify-write.
    pub fn set_exti_source(&self, line: usize, port: u32) {
        self.exticr[line >> 2].modify(Self::exticr_field(line).val(port));
    }

    /// The GPIO port EXTI `line` (0-15) is currently routed to.
    pub fn exti_source(&self, line: usize) -> u32 {
        self.exticr[line >> 2].read(Self::exticr_field(line))
    }
}

pub const SYSCFG_BASE: StaticRef<SyscfgRegisters> =
    unsafe { StaticRef::new(0x40010000 as *const SyscfgRegisters) };

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Reset and clock control.
//!
//! The AHB/APB1/APB2 bit assignments are shared between the clock-enable
//! and the peripheral-reset registers, so one bitfield namespace serves
//! each bus's pair. Ready flags (HSIRDY, HSERDY, PLLRDY, LSERDY, LSIRDY)
//! are set and cleared by hardware and read-only to software.

use silica_registers::interfaces::{ReadWriteable, Readable};
use silica_registers::{register_bitfields, register_structs, ReadWrite, StaticRef};

register_structs! {
    /// Reset and clock control
    pub RccRegisters {
        /// clock control register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// clock configuration register
        (0x04 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// clock interrupt register
        (0x08 => pub cir: ReadWrite<u32, CIR::Register>),
        /// APB2 peripheral reset register
        (0x0c => pub apb2rstr: ReadWrite<u32, APB2::Register>),
        /// APB1 peripheral reset register
        (0x10 => pub apb1rstr: ReadWrite<u32, APB1::Register>),
        /// AHB peripheral clock enable register
        (0x14 => pub ahbenr: ReadWrite<u32, AHB::Register>),
        /// APB2 peripheral clock enable register
        (0x18 => pub apb2enr: ReadWrite<u32, APB2::Register>),
        /// APB1 peripheral clock enable register
        (0x1c => pub apb1enr: ReadWrite<u32, APB1::Register>),
        /// RTC domain control register
        (0x20 => pub bdcr: ReadWrite<u32, BDCR::Register>),
        /// control/status register
        (0x24 => pub csr: ReadWrite<u32, CSR::Register>),
        /// AHB peripheral reset register
        (0x28 => pub ahbrstr: ReadWrite<u32, AHB::Register>),
        /// clock configuration register 2
        (0x2c => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        /// clock configuration register 3
        (0x30 => pub cfgr3: ReadWrite<u32, CFGR3::Register>),
        /// clock control register 2
        (0x34 => pub cr2: ReadWrite<u32, CR2::Register>),
        (0x38 => @END),
    }
}

register_bitfields![u32,
    CR [
        /// PLL clock ready flag
        PLLRDY OFFSET(25) NUMBITS(1) [],
        /// PLL enable
        PLLON OFFSET(24) NUMBITS(1) [],
        /// Clock security system enable
        CSSON OFFSET(19) NUMBITS(1) [],
        /// HSE crystal oscillator bypass
        HSEBYP OFFSET(18) NUMBITS(1) [],
        /// HSE clock ready flag
        HSERDY OFFSET(17) NUMBITS(1) [],
        /// HSE clock enable
        HSEON OFFSET(16) NUMBITS(1) [],
        /// HSI clock calibration
        HSICAL OFFSET(8) NUMBITS(8) [],
        /// HSI clock trimming
        HSITRIM OFFSET(3) NUMBITS(5) [],
        /// HSI clock ready flag
        HSIRDY OFFSET(1) NUMBITS(1) [],
        /// HSI clock enable
        HSION OFFSET(0) NUMBITS(1) []
    ],
    CFGR [
        /// PLL clock not divided for MCO
        PLLNODIV OFFSET(31) NUMBITS(1) [],
        /// Microcontroller clock output prescaler
        MCOPRE OFFSET(28) NUMBITS(3) [
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
            DIV8 = 3,
            DIV16 = 4,
            DIV32 = 5,
            DIV64 = 6,
            DIV128 = 7
        ],
        /// Microcontroller clock output
        MCO OFFSET(24) NUMBITS(4) [
            NoClock = 0,
            HSI14 = 1,
            LSI = 2,
            LSE = 3,
            SYSCLK = 4,
            HSI = 5,
            HSE = 6,
            PLL = 7,
            HSI48 = 8
        ],
        /// PLL multiplication factor: MUL2 through MUL16
        PLLMUL OFFSET(18) NUMBITS(4) [],
        /// HSE divider for PLL input clock
        PLLXTPRE OFFSET(17) NUMBITS(1) [],
        /// PLL input clock source
        PLLSRC OFFSET(15) NUMBITS(2) [
            HSIDiv2 = 0,
            HSIPrediv = 1,
            HSEPrediv = 2,
            HSI48Prediv = 3
        ],
        /// ADC prescaler
        ADCPRE OFFSET(14) NUMBITS(1) [],
        /// PCLK prescaler
        PPRE OFFSET(8) NUMBITS(3) [
            DIV1 = 0,
            DIV2 = 4,
            DIV4 = 5,
            DIV8 = 6,
            DIV16 = 7
        ],
        /// HCLK prescaler
        HPRE OFFSET(4) NUMBITS(4) [
            DIV1 = 0,
            DIV2 = 8,
            DIV4 = 9,
            DIV8 = 10,
            DIV16 = 11,
            DIV64 = 12,
            DIV128 = 13,
            DIV256 = 14,
            DIV512 = 15
        ],
        /// System clock switch status
        SWS OFFSET(2) NUMBITS(2) [
            HSI = 0,
            HSE = 1,
            PLL = 2,
            HSI48 = 3
        ],
        /// System clock switch
        SW OFFSET(0) NUMBITS(2) [
            HSI = 0,
            HSE = 1,
            PLL = 2,
            HSI48 = 3
        ]
    ],
    CIR [
        /// Clock security system interrupt clear
        CSSC OFFSET(23) NUMBITS(1) [],
        /// HSI48 ready interrupt clear
        HSI48RDYC OFFSET(22) NUMBITS(1) [],
        /// HSI14 ready interrupt clear
        HSI14RDYC OFFSET(21) NUMBITS(1) [],
        /// PLL ready interrupt clear
        PLLRDYC OFFSET(20) NUMBITS(1) [],
        /// HSE ready interrupt clear
        HSERDYC OFFSET(19) NUMBITS(1) [],
        /// HSI ready interrupt clear
        HSIRDYC OFFSET(18) NUMBITS(1) [],
        /// LSE ready interrupt clear
        LSERDYC OFFSET(17) NUMBITS(1) [],
        /// LSI ready interrupt clear
        LSIRDYC OFFSET(16) NUMBITS(1) [],
        /// HSI48 ready interrupt enable
        HSI48RDYIE OFFSET(14) NUMBITS(1) [],
        /// HSI14 ready interrupt enable
        HSI14RDYIE OFFSET(13) NUMBITS(1) [],
        /// PLL ready interrupt enable
        PLLRDYIE OFFSET(12) NUMBITS(1) [],
        /// HSE ready interrupt enable
        HSERDYIE OFFSET(11) NUMBITS(1) [],
        /// HSI ready interrupt enable
        HSIRDYIE OFFSET(10) NUMBITS(1) [],
        /// LSE ready interrupt enable
        LSERDYIE OFFSET(9) NUMBITS(1) [],
        /// LSI ready interrupt enable
        LSIRDYIE OFFSET(8) NUMBITS(1) [],
        /// Clock security system interrupt flag
        CSSF OFFSET(7) NUMBITS(1) [],
        /// HSI48 ready interrupt flag
        HSI48RDYF OFFSET(6) NUMBITS(1) [],
        /// HSI14 ready interrupt flag
        HSI14RDYF OFFSET(5) NUMBITS(1) [],
        /// PLL ready interrupt flag
        PLLRDYF OFFSET(4) NUMBITS(1) [],
        /// HSE ready interrupt flag
        HSERDYF OFFSET(3) NUMBITS(1) [],
        /// HSI ready interrupt flag
        HSIRDYF OFFSET(2) NUMBITS(1) [],
        /// LSE ready interrupt flag
        LSERDYF OFFSET(1) NUMBITS(1) [],
        /// LSI ready interrupt flag
        LSIRDYF OFFSET(0) NUMBITS(1) []
    ],
    AHB [
        /// Touch sensing controller clock enable/reset
        TSC OFFSET(24) NUMBITS(1) [],
        /// I/O port F clock enable/reset
        GPIOF OFFSET(22) NUMBITS(1) [],
        /// I/O port E clock enable/reset
        GPIOE OFFSET(21) NUMBITS(1) [],
        /// I/O port D clock enable/reset
        GPIOD OFFSET(20) NUMBITS(1) [],
        /// I/O port C clock enable/reset
        GPIOC OFFSET(19) NUMBITS(1) [],
        /// I/O port B clock enable/reset
        GPIOB OFFSET(18) NUMBITS(1) [],
        /// I/O port A clock enable/reset
        GPIOA OFFSET(17) NUMBITS(1) [],
        /// CRC clock enable
        CRC OFFSET(6) NUMBITS(1) [],
        /// FLITF clock enable
        FLITF OFFSET(4) NUMBITS(1) [],
        /// SRAM clock enable
        SRAM OFFSET(2) NUMBITS(1) [],
        /// DMA2 clock enable
        DMA2 OFFSET(1) NUMBITS(1) [],
        /// DMA1 clock enable
        DMA1 OFFSET(0) NUMBITS(1) []
    ],
    APB2 [
        /// Debug MCU clock enable/reset
        DBGMCU OFFSET(22) NUMBITS(1) [],
        /// TIM17 clock enable/reset
        TIM17 OFFSET(18) NUMBITS(1) [],
        /// TIM16 clock enable/reset
        TIM16 OFFSET(17) NUMBITS(1) [],
        /// TIM15 clock enable/reset
        TIM15 OFFSET(16) NUMBITS(1) [],
        /// USART1 clock enable/reset
        USART1 OFFSET(14) NUMBITS(1) [],
        /// SPI1 clock enable/reset
        SPI1 OFFSET(12) NUMBITS(1) [],
        /// TIM1 clock enable/reset
        TIM1 OFFSET(11) NUMBITS(1) [],
        /// ADC clock enable/reset
        ADC OFFSET(9) NUMBITS(1) [],
        /// USART8 clock enable/reset
        USART8 OFFSET(7) NUMBITS(1) [],
        /// USART7 clock enable/reset
        USART7 OFFSET(6) NUMBITS(1) [],
        /// USART6 clock enable/reset
        USART6 OFFSET(5) NUMBITS(1) [],
        /// SYSCFG/COMP clock enable/reset
        SYSCFGCOMP OFFSET(0) NUMBITS(1) []
    ],
    APB1 [
        /// HDMI CEC clock enable/reset
        CEC OFFSET(30) NUMBITS(1) [],
        /// DAC clock enable/reset
        DAC OFFSET(29) NUMBITS(1) [],
        /// PWR clock enable/reset
        PWR OFFSET(28) NUMBITS(1) [],
        /// CRS clock enable/reset
        CRS OFFSET(27) NUMBITS(1) [],
        /// CAN clock enable/reset
        CAN OFFSET(25) NUMBITS(1) [],
        /// USB clock enable/reset
        USB OFFSET(23) NUMBITS(1) [],
        /// I2C2 clock enable/reset
        I2C2 OFFSET(22) NUMBITS(1) [],
        /// I2C1 clock enable/reset
        I2C1 OFFSET(21) NUMBITS(1) [],
        /// USART5 clock enable/reset
        USART5 OFFSET(20) NUMBITS(1) [],
        /// USART4 clock enable/reset
        USART4 OFFSET(19) NUMBITS(1) [],
        /// USART3 clock enable/reset
        USART3 OFFSET(18) NUMBITS(1) [],
        /// USART2 clock enable/reset
        USART2 OFFSET(17) NUMBITS(1) [],
        /// SPI2 clock enable/reset
        SPI2 OFFSET(14) NUMBITS(1) [],
        /// Window watchdog clock enable/reset
        WWDG OFFSET(11) NUMBITS(1) [],
        /// TIM14 clock enable/reset
        TIM14 OFFSET(8) NUMBITS(1) [],
        /// TIM7 clock enable/reset
        TIM7 OFFSET(5) NUMBITS(1) [],
        /// TIM6 clock enable/reset
        TIM6 OFFSET(4) NUMBITS(1) [],
        /// TIM3 clock enable/reset
        TIM3 OFFSET(1) NUMBITS(1) [],
        /// TIM2 clock enable/reset
        TIM2 OFFSET(0) NUMBITS(1) []
    ],
    BDCR [
        /// RTC domain software reset
        BDRST OFFSET(16) NUMBITS(1) [],
        /// RTC clock enable
        RTCEN OFFSET(15) NUMBITS(1) [],
        /// RTC clock source selection; write-once until domain reset
        RTCSEL OFFSET(8) NUMBITS(2) [
            NoClock = 0,
            LSE = 1,
            LSI = 2,
            HSE = 3
        ],
        /// LSE oscillator drive capability
        LSEDRV OFFSET(3) NUMBITS(2) [],
        /// LSE oscillator bypass
        LSEBYP OFFSET(2) NUMBITS(1) [],
        /// LSE oscillator ready
        LSERDY OFFSET(1) NUMBITS(1) [],
        /// LSE oscillator enable
        LSEON OFFSET(0) NUMBITS(1) []
    ],
    CSR [
        /// Low-power reset flag
        LPWRRSTF OFFSET(31) NUMBITS(1) [],
        /// Window watchdog reset flag
        WWDGRSTF OFFSET(30) NUMBITS(1) [],
        /// Independent watchdog reset flag
        IWDGRSTF OFFSET(29) NUMBITS(1) [],
        /// Software reset flag
        SFTRSTF OFFSET(28) NUMBITS(1) [],
        /// POR/PDR reset flag
        PORRSTF OFFSET(27) NUMBITS(1) [],
        /// PIN reset flag
        PINRSTF OFFSET(26) NUMBITS(1) [],
        /// Option byte loader reset flag
        OBLRSTF OFFSET(25) NUMBITS(1) [],
        /// Remove reset flag; write 1 to clear the reset flags above
        RMVF OFFSET(24) NUMBITS(1) [],
        /// Reset flag of the 1.8 V domain
        V18PWRRSTF OFFSET(23) NUMBITS(1) [],
        /// LSI oscillator ready
        LSIRDY OFFSET(1) NUMBITS(1) [],
        /// LSI oscillator enable
        LSION OFFSET(0) NUMBITS(1) []
    ],
    CFGR2 [
        /// PREDIV division factor: the divisor is PREDIV + 1
        PREDIV OFFSET(0) NUMBITS(4) []
    ],
    CFGR3 [
        /// USART3 clock source selection
        USART3SW OFFSET(18) NUMBITS(2) [],
        /// USART2 clock source selection
        USART2SW OFFSET(16) NUMBITS(2) [],
        /// ADC clock source selection
        ADCSW OFFSET(8) NUMBITS(1) [],
        /// USB clock source selection
        USBSW OFFSET(7) NUMBITS(1) [],
        /// HDMI CEC clock source selection
        CECSW OFFSET(6) NUMBITS(1) [],
        /// I2C1 clock source selection
        I2C1SW OFFSET(4) NUMBITS(1) [],
        /// USART1 clock source selection
        USART1SW OFFSET(0) NUMBITS(2) [
            PCLK = 0,
            SYSCLK = 1,
            LSE = 2,
            HSI = 3
        ]
    ],
    CR2 [
        /// HSI48 factory clock calibration
        HSI48CAL OFFSET(24) NUMBITS(8) [],
        /// HSI48 clock ready flag
        HSI48RDY OFFSET(17) NUMBITS(1) [],
        /// HSI48 clock enable
        HSI48ON OFFSET(16) NUMBITS(1) [],
        /// HSI14 clock calibration
        HSI14CAL OFFSET(8) NUMBITS(8) [],
        /// HSI14 clock trimming
        HSI14TRIM OFFSET(3) NUMBITS(5) [],
        /// HSI14 clock request from ADC disable
        HSI14DIS OFFSET(2) NUMBITS(1) [],
        /// HSI14 clock ready flag
        HSI14RDY OFFSET(1) NUMBITS(1) [],
        /// HSI14 clock enable
        HSI14ON OFFSET(0) NUMBITS(1) []
    ]
];

const RCC_BASE: StaticRef<RccRegisters> =
    unsafe { StaticRef::new(0x40021000 as *const RccRegisters) };

/// Handle to the clock controller.
///
/// Clock enable and reset updates are read-modify-write sequences on
/// shared registers; configure clocks before enabling interrupts, or
/// bracket these calls with `cortexm0::support::atomic`.
pub struct Rcc {
    registers: StaticRef<RccRegisters>,
}

impl Rcc {
    pub const fn new() -> Rcc {
        Rcc {
            registers: RCC_BASE,
        }
    }

    /// Enable the bus clock of GPIO port `port` (0 = A .. 5 = F).
    pub fn enable_gpio_clock(&self, port: usize) {
        let gpio_bit = silica_registers::fields::Field::<u32, AHB::Register>::new(1, 17 + port);
        self.registers.ahbenr.modify(gpio_bit.val(1));
    }

    pub fn enable_dma1_clock(&self) {
        self.registers.ahbenr.modify(AHB::DMA1::SET);
    }

    pub fn enable_syscfg_clock(&self) {
        self.registers.apb2enr.modify(APB2::SYSCFGCOMP::SET);
    }

    pub fn enable_pwr_clock(&self) {
        self.registers.apb1enr.modify(APB1::PWR::SET);
    }

    pub fn is_hsi_ready(&self) -> bool {
        self.registers.cr.is_set(CR::HSIRDY)
    }

    pub fn is_pll_ready(&self) -> bool {
        self.registers.cr.is_set(CR::PLLRDY)
    }

    /// The clock the CPU is currently running from.
    pub fn system_clock_source(&self) -> Option<CFGR::SWS::Value> {
        self.registers.cfgr.read_as_enum(CFGR::SWS)
    }
}

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Interrupt numbers of the STM32F0xx.
//!
//! The numbering is fixed by the silicon and indexes both the NVIC
//! enable/pending banks and the external interrupt vector table. Several
//! vectors are shared by multiple sources, as the names spell out.

pub const WWDG: u32 = 0;
pub const PVD: u32 = 1;
pub const RTC: u32 = 2;
pub const FLASH: u32 = 3;
pub const RCC_CRS: u32 = 4;
pub const EXTI0_1: u32 = 5;
pub const EXTI2_3: u32 = 6;
pub const EXTI4_15: u32 = 7;
pub const TSC: u32 = 8;
pub const DMA1_CH1: u32 = 9;
pub const DMA1_CH2_3_DMA2_CH1_2: u32 = 10;
pub const DMA1_CH4_7_DMA2_CH3_5: u32 = 11;
pub const ADC_COMP: u32 = 12;
pub const TIM1_BRK_UP_TRG_COM: u32 = 13;
pub const TIM1_CC: u32 = 14;
pub const TIM2: u32 = 15;
pub const TIM3: u32 = 16;
pub const TIM6_DAC: u32 = 17;
pub const TIM7: u32 = 18;
pub const TIM14: u32 = 19;
pub const TIM15: u32 = 20;
pub const TIM16: u32 = 21;
pub const TIM17: u32 = 22;
pub const I2C1: u32 = 23;
pub const I2C2: u32 = 24;
pub const SPI1: u32 = 25;
pub const SPI2: u32 = 26;
pub const USART1: u32 = 27;
pub const USART2: u32 = 28;
pub const USART3_4_5_6_7_8: u32 = 29;
pub const CEC_CAN: u32 = 30;
pub const USB: u32 = 31;

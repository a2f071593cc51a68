// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Peripheral register definitions for the STM32F0xx MCU family.
//!
//! Every peripheral is a fixed-layout register block overlaid onto its
//! datasheet base address through a `StaticRef` constant; nothing here
//! allocates, and every address is a compile-time constant. The crate
//! also owns the chip's vector tables: the 16-entry Cortex-M exception
//! table and the 32-entry external interrupt table, all slots bound
//! before the program starts.
//!
//! Firmware claims interrupts by building its own IRQ table with
//! [`irq_vectors!`] (and disabling the `default-vectors` feature); any
//! slot it does not name keeps the fail-stop default handler.

#![no_std]

pub mod nvic;

// Peripherals
pub mod adc;
pub mod dma;
pub mod exti;
pub mod gpio;
pub mod i2c;
pub mod pwr;
pub mod rcc;
pub mod rtc;
pub mod spi;
pub mod syscfg;
pub mod tim;
pub mod usart;

pub use cortexm0::{hard_fault_handler, unhandled_interrupt};

/// Number of external interrupt vectors on this family.
pub const NUM_IRQS: usize = 32;

#[cfg(all(target_arch = "arm", target_os = "none"))]
extern "C" {
    // _estack is not really a function, but it makes the types work.
    // You should never actually invoke it!!
    fn _estack();

    // Defined in the architecture crate.
    fn reset_handler();
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
unsafe extern "C" fn _estack() {
    unimplemented!()
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
unsafe extern "C" fn reset_handler() {
    unimplemented!()
}

/// The Cortex-M0 exception table: initial stack pointer, reset vector and
/// the fourteen system exception slots. Every slot holds a real function
/// address at all times; unused ones fail-stop.
#[cfg_attr(all(target_arch = "arm", target_os = "none"), link_section = ".vectors")]
// used ensures that the symbol is kept until the final binary
#[cfg_attr(all(target_arch = "arm", target_os = "none"), used)]
pub static BASE_VECTORS: [unsafe extern "C" fn(); 16] = [
    _estack,             // Initial stack pointer
    reset_handler,       // Reset
    unhandled_interrupt, // NMI
    hard_fault_handler,  // Hard Fault
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // SVCall
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // Reserved
    unhandled_interrupt, // PendSV
    unhandled_interrupt, // SysTick
];

/// Builds the external interrupt vector table at compile time.
///
/// Takes `index => handler` pairs; every slot not named falls back to the
/// fail-stop [`unhandled_interrupt`]. The table is a static in the
/// `.irqs` link section, so the binding is fixed before the program
/// starts and cannot change at runtime. Invoke at most once, in the
/// firmware crate, with the `default-vectors` feature of this crate
/// disabled:
///
/// ```ignore
/// stm32f0xx::irq_vectors! {
///     stm32f0xx::nvic::TIM3 => tim3_handler,
///     stm32f0xx::nvic::USART1 => usart1_handler,
/// }
/// ```
#[macro_export]
macro_rules! irq_vectors {
    ( $( $idx:expr => $handler:path ),* $(,)? ) => {
        #[cfg_attr(all(target_arch = "arm", target_os = "none"), link_section = ".irqs")]
        #[cfg_attr(all(target_arch = "arm", target_os = "none"), used)]
        pub static IRQS: [unsafe extern "C" fn(); $crate::NUM_IRQS] = {
            let mut table: [unsafe extern "C" fn(); $crate::NUM_IRQS] =
                [$crate::unhandled_interrupt; $crate::NUM_IRQS];
            $( table[$idx as usize] = $handler; )*
            table
        };
    };
}

/// The default external interrupt table: every slot fail-stops.
#[cfg(feature = "default-vectors")]
#[cfg_attr(all(target_arch = "arm", target_os = "none"), link_section = ".irqs")]
// used ensures that the symbol is kept until the final binary
#[cfg_attr(all(target_arch = "arm", target_os = "none"), used)]
pub static IRQS: [unsafe extern "C" fn(); NUM_IRQS] = [unhandled_interrupt; NUM_IRQS];

/// Chip-level initialization: mask and clear every external interrupt so
/// firmware starts from a clean slate and enables exactly the set it
/// handles.
pub unsafe fn init() {
    cortexm0::nvic::disable_all();
    cortexm0::nvic::clear_all_pending();
}

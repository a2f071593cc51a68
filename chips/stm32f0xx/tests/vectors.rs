// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Vector table construction.
//!
//! The default tables and the `irq_vectors!` override mechanism. Handler
//! bindings are function addresses fixed at compile time, so the checks
//! compare pointers.

use stm32f0xx::{nvic, unhandled_interrupt, BASE_VECTORS, NUM_IRQS};

extern "C" fn tim3_stub() {}

extern "C" fn usart1_stub() {}

// Firmware-style table with two claimed slots.
stm32f0xx::irq_vectors! {
    nvic::TIM3 => tim3_stub,
    nvic::USART1 => usart1_stub,
}

#[test]
fn overridden_slots_hold_the_firmware_handlers() {
    assert_eq!(IRQS.len(), NUM_IRQS);
    assert!(core::ptr::fn_addr_eq(
        IRQS[nvic::TIM3 as usize],
        tim3_stub as unsafe extern "C" fn()
    ));
    assert!(core::ptr::fn_addr_eq(
        IRQS[nvic::USART1 as usize],
        usart1_stub as unsafe extern "C" fn()
    ));
}

#[test]
fn unclaimed_slots_keep_the_fail_stop_default() {
    for (i, handler) in IRQS.iter().enumerate() {
        if i == nvic::TIM3 as usize || i == nvic::USART1 as usize {
            continue;
        }
        assert!(core::ptr::fn_addr_eq(
            *handler,
            unhandled_interrupt as unsafe extern "C" fn()
        ));
    }
}

#[test]
fn default_table_is_fully_populated() {
    // The feature-gated default table: every slot fail-stops, no slot is
    // ever without a handler.
    assert_eq!(stm32f0xx::IRQS.len(), NUM_IRQS);
    for handler in stm32f0xx::IRQS.iter() {
        assert!(core::ptr::fn_addr_eq(
            *handler,
            unhandled_interrupt as unsafe extern "C" fn()
        ));
    }
}

#[test]
fn exception_table_shape() {
    // Sixteen slots: stack pointer, reset, and fourteen exception
    // entries, each bound to a real function.
    assert_eq!(BASE_VECTORS.len(), 16);
}

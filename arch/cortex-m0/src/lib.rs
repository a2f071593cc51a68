// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Generic support for the ARMv6-M Cortex-M0.
//!
//! This crate owns everything between the reset vector and the
//! application's entry point: the [`reset_handler`] that brings static
//! memory to life in a fixed order, the fail-stop default handlers that
//! back every otherwise-unclaimed vector slot, and the register maps of
//! the core peripherals (NVIC, SCB, SysTick).

#![no_std]

pub mod nvic;
pub mod scb;
pub mod support;
pub mod systick;

// Memory region and constructor-table bounds defined in the linker script.
// They are consumed as opaque addresses; a region whose symbols are wrong
// is a link-configuration defect that cannot be detected here.
#[cfg(all(target_arch = "arm", target_os = "none"))]
extern "C" {
    // End of .text; the initialized-data image is loaded here in flash.
    static mut _etext: u32;
    // Runtime bounds of .data in RAM.
    static mut _srelocate: u32;
    static mut _erelocate: u32;
    // Bounds of .bss in RAM.
    static mut _szero: u32;
    static mut _ezero: u32;
    // Bottom of the heap region.
    static mut _sheap: u32;
    // Static constructor and destructor tables.
    static __init_array_start: extern "C" fn();
    static __init_array_end: extern "C" fn();
    static __fini_array_start: extern "C" fn();
    static __fini_array_end: extern "C" fn();

    /// Application entry point. Invoked exactly once, with statics live
    /// and interrupts still masked; not expected to return.
    fn main();
}

/// First code to run out of reset.
///
/// The steps are strictly ordered and each completes before the next
/// begins; the whole sequence runs once, on one core, before any
/// interrupt can fire:
///
/// 1. copy the initialized-data image from flash into RAM,
/// 2. zero the uninitialized-data region,
/// 3. optionally paint the heap (feature `paint-heap`),
/// 4. run the static constructor table in ascending order,
/// 5. hand control to `main`,
/// 6. if `main` ever returns, run the destructor table and park the core.
#[cfg(all(target_arch = "arm", target_os = "none"))]
#[no_mangle]
pub unsafe extern "C" fn reset_handler() -> ! {
    silica_rt0::init_data(
        core::ptr::addr_of!(_etext),
        core::ptr::addr_of_mut!(_srelocate),
        core::ptr::addr_of_mut!(_erelocate),
    );
    silica_rt0::zero_bss(core::ptr::addr_of_mut!(_szero), core::ptr::addr_of_mut!(_ezero));

    #[cfg(feature = "paint-heap")]
    {
        // The heap runs from its linker-provided bottom up to the current
        // main stack pointer.
        let msp: *mut u32;
        core::arch::asm!("mrs {}, msp", out(reg) msp, options(nomem, nostack, preserves_flags));
        silica_rt0::fill_heap(
            core::ptr::addr_of_mut!(_sheap),
            msp,
            silica_rt0::HEAP_FILL_PATTERN,
        );
    }

    silica_rt0::run_init_array(
        core::ptr::addr_of!(__init_array_start),
        core::ptr::addr_of!(__init_array_end),
    );

    main();

    silica_rt0::run_fini_array(
        core::ptr::addr_of!(__fini_array_start),
        core::ptr::addr_of!(__fini_array_end),
    );

    // Nothing to return to.
    loop {
        support::nop();
    }
}

/// Default handler for any vector the firmware has not claimed.
///
/// An unexpected interrupt has no safe continuation: the source is active,
/// nothing will acknowledge it, and there is no logging or fault
/// infrastructure at this layer. The handler captures the active vector
/// number from IPSR where an attached debugger can inspect it, then parks
/// the core.
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub unsafe extern "C" fn unhandled_interrupt() {
    let ipsr: u32;
    core::arch::asm!("mrs {}, ipsr", out(reg) ipsr, options(nomem, nostack, preserves_flags));
    // IPSR[8:0] holds the currently active vector number.
    let _vector = ipsr & 0x1ff;

    loop {
        support::nop();
    }
}

/// Default handler for any vector the firmware has not claimed (mock).
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn unhandled_interrupt() {
    unimplemented!()
}

/// HardFault handler: fail-stop, like [`unhandled_interrupt`], under a
/// distinct symbol so a debugger backtrace names the fault class.
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub unsafe extern "C" fn hard_fault_handler() {
    loop {
        support::nop();
    }
}

/// HardFault handler (mock).
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn hard_fault_handler() {
    unimplemented!()
}

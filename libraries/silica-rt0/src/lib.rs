// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Generic initial runtime (`rt0`) helper functions.
//!
//! These are the loops a reset handler runs, in order, before the
//! application entry point: copy the initialized-data image from flash to
//! RAM, zero the uninitialized-data region, optionally paint the heap with
//! a recognizable pattern, and walk the static constructor table. After the
//! application returns (if it ever does), the destructor table is walked
//! the same way.
//!
//! Every function operates on a half-open pointer range supplied by the
//! caller from linker-script symbols. The ranges are trusted as-is: this
//! code runs before any fault-handling infrastructure exists, so a
//! malformed range is a link-configuration defect, not a reportable error.
//! An empty range (`start == end`) is a no-op for every function.

#![no_std]

/// Word pattern [`fill_heap`] paints by default: alternating bits, easy to
/// spot in a memory dump and an unlikely legitimate pointer or length.
pub const HEAP_FILL_PATTERN: u32 = 0x5555_5555;

/// Initializes the static data, by copying it into memory (RAM) from
/// non-volatile memory (Flash).
///
/// - `start_data_flash`: The address of the start of the data section
///   stored in non-volatile flash memory.
/// - `start_data_ram`:   The address in RAM where the data section starts
///   and should be copied to.
/// - `end_data_ram`:     The first address after the end of the data
///   section in RAM.
///
/// Must complete before any code reads a static with a non-zero
/// initializer.
///
/// # Safety
///
/// Both regions must be valid for `end_data_ram - start_data_ram` bytes,
/// word-aligned, and non-overlapping.
pub unsafe fn init_data(
    mut start_data_flash: *const u32,
    mut start_data_ram: *mut u32,
    end_data_ram: *mut u32,
) {
    while start_data_ram < end_data_ram {
        start_data_ram.write(start_data_flash.read());
        start_data_ram = start_data_ram.offset(1);
        start_data_flash = start_data_flash.offset(1);
    }
}

/// Sets non-initialized data in RAM to 0. This is used to clear the BSS
/// section on initial boot, and must complete before any code reads a
/// zero-initialized static.
///
/// # Safety
///
/// The region must be valid for `bss_end - bss` bytes and word-aligned.
pub unsafe fn zero_bss(mut bss: *mut u32, bss_end: *mut u32) {
    while bss < bss_end {
        // `volatile` to make sure it doesn't get optimized out
        bss.write_volatile(0);
        bss = bss.offset(1);
    }
}

/// Fills the heap region with `pattern`, typically
/// [`HEAP_FILL_PATTERN`].
///
/// Diagnostic only: a painted heap makes stack-overflow-into-heap and
/// reads of never-written heap memory visible in a debugger. Production
/// builds may skip this step without affecting correctness.
///
/// # Safety
///
/// The region must be valid for `heap_end - heap` bytes and word-aligned.
/// On a live target `heap_end` is the current stack pointer, so the region
/// must not include any memory in use by the running stack.
pub unsafe fn fill_heap(mut heap: *mut u32, heap_end: *mut u32, pattern: u32) {
    while heap < heap_end {
        heap.write_volatile(pattern);
        heap = heap.offset(1);
    }
}

/// Calls every function in the static constructor table, in table order.
///
/// Runs after [`init_data`] and [`zero_bss`] and before the application
/// entry point, so that statically-constructed state is valid when
/// application code first executes. Return values are not inspected; the
/// entries take no arguments.
///
/// # Safety
///
/// The table must contain `table_end - table` valid function pointers.
pub unsafe fn run_init_array(
    mut table: *const extern "C" fn(),
    table_end: *const extern "C" fn(),
) {
    while table < table_end {
        (table.read())();
        table = table.offset(1);
    }
}

/// Calls every function in the static destructor table, in table order.
///
/// The mirror of [`run_init_array`], run only if the application entry
/// point returns.
///
/// # Safety
///
/// The table must contain `table_end - table` valid function pointers.
pub unsafe fn run_fini_array(
    mut table: *const extern "C" fn(),
    table_end: *const extern "C" fn(),
) {
    while table < table_end {
        (table.read())();
        table = table.offset(1);
    }
}

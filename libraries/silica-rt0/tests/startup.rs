// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Startup memory loops and constructor/destructor table execution.

use std::sync::Mutex;

use silica_rt0::{fill_heap, init_data, run_fini_array, run_init_array, zero_bss, HEAP_FILL_PATTERN};

#[test]
fn init_data_copies_every_word() {
    let flash: [u32; 6] = [0xDEAD_BEEF, 1, 2, 3, 0xFFFF_FFFF, 0x55AA_55AA];
    let mut ram: [u32; 6] = [0; 6];

    let start = ram.as_mut_ptr();
    unsafe { init_data(flash.as_ptr(), start, start.add(ram.len())) };

    assert_eq!(ram, flash);
}

#[test]
fn init_data_empty_region_is_a_noop() {
    let flash: [u32; 1] = [0xAAAA_AAAA];
    let mut ram: [u32; 1] = [0x1111_1111];

    let start = ram.as_mut_ptr();
    unsafe { init_data(flash.as_ptr(), start, start) };

    assert_eq!(ram[0], 0x1111_1111);
}

#[test]
fn zero_bss_clears_every_word() {
    let mut bss: [u32; 5] = [0xFFFF_FFFF; 5];

    let start = bss.as_mut_ptr();
    unsafe { zero_bss(start, start.add(bss.len())) };

    assert_eq!(bss, [0; 5]);
}

#[test]
fn zero_bss_empty_region_is_a_noop() {
    let mut bss: [u32; 1] = [0xFFFF_FFFF];

    let start = bss.as_mut_ptr();
    unsafe { zero_bss(start, start) };

    assert_eq!(bss[0], 0xFFFF_FFFF);
}

#[test]
fn zero_bss_does_not_touch_neighbors() {
    let mut region: [u32; 6] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];

    // Clear only the middle four words.
    let start = region.as_mut_ptr();
    unsafe { zero_bss(start.add(1), start.add(5)) };

    assert_eq!(region, [0x11, 0, 0, 0, 0, 0x66]);
}

#[test]
fn fill_heap_paints_the_pattern() {
    let mut heap: [u32; 4] = [0; 4];

    let start = heap.as_mut_ptr();
    unsafe { fill_heap(start, start.add(heap.len()), HEAP_FILL_PATTERN) };

    assert_eq!(heap, [HEAP_FILL_PATTERN; 4]);
}

// The constructor/destructor runners take plain `extern "C"` function
// pointers, so the call log is kept in a global.
static CALLS: Mutex<Vec<u32>> = Mutex::new(Vec::new());

extern "C" fn ctor_one() {
    CALLS.lock().unwrap().push(1);
}

extern "C" fn ctor_two() {
    CALLS.lock().unwrap().push(2);
}

extern "C" fn ctor_three() {
    CALLS.lock().unwrap().push(3);
}

// A single test owns the log: the test harness runs tests concurrently and
// the table entries are plain function pointers with global effects.
#[test]
fn ctor_and_dtor_tables_run_each_entry_once_in_order() {
    let table: [extern "C" fn(); 3] = [ctor_one, ctor_two, ctor_three];

    // Empty table: nothing runs.
    unsafe {
        run_init_array(table.as_ptr(), table.as_ptr());
        run_fini_array(table.as_ptr(), table.as_ptr());
    }
    assert!(CALLS.lock().unwrap().is_empty());

    // Full table: each entry exactly once, ascending table order.
    unsafe { run_init_array(table.as_ptr(), table.as_ptr().add(table.len())) };
    assert_eq!(*CALLS.lock().unwrap(), vec![1, 2, 3]);

    // Destructor tables are laid out and walked identically.
    let dtors: [extern "C" fn(); 2] = [ctor_three, ctor_one];
    CALLS.lock().unwrap().clear();
    unsafe { run_fini_array(dtors.as_ptr(), dtors.as_ptr().add(dtors.len())) };
    assert_eq!(*CALLS.lock().unwrap(), vec![3, 1]);
}

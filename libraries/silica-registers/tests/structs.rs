// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Register block layout and overlay behavior.
//!
//! The layout of every `register_structs!` block is already checked at
//! compile time; these tests additionally overlay a block onto plain
//! memory and confirm that accesses through the typed view are bit-exact
//! against the backing words.

use core::mem::{align_of, size_of};
use core::ptr::{read_volatile, write_volatile};

use silica_registers::interfaces::{ReadWriteable, Readable, Writeable};
use silica_registers::{register_bitfields, register_structs, Aliased, ReadOnly, ReadWrite, WriteOnly};

register_bitfields![u32,
    Ctrl [
        RUN OFFSET(0) NUMBITS(1) [],
        DIV OFFSET(8) NUMBITS(4) []
    ],
    Flags [
        DONE OFFSET(0) NUMBITS(1) [],
        ERROR OFFSET(1) NUMBITS(1) []
    ],
    FlagClear [
        CDONE OFFSET(0) NUMBITS(1) [],
        CERROR OFFSET(1) NUMBITS(1) []
    ],
    RxData [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    TxData [
        DATA OFFSET(0) NUMBITS(8) []
    ]
];

register_structs! {
    pub DemoRegisters {
        (0x00 => pub cr: ReadWrite<u32, Ctrl::Register>),
        (0x04 => pub sr: ReadOnly<u32, Flags::Register>),
        (0x08 => pub icr: WriteOnly<u32, FlagClear::Register>),
        /// One address, two meanings: reads pop RX, writes push TX.
        (0x0c => pub fifo: Aliased<u32, RxData::Register, TxData::Register>),
        (0x10 => pub data: [ReadWrite<u32>; 4]),
        (0x20 => @END),
    },
    pub NestedBlock {
        (0x00 => pub head: ReadWrite<u32>),
        (0x04 => pub lanes: [LaneRegisters; 2]),
        (0x14 => @END),
    },
    pub LaneRegisters {
        (0x00 => pub cfg: ReadWrite<u32, Ctrl::Register>),
        (0x04 => pub count: ReadOnly<u32>),
        (0x08 => @END),
    }
}

#[test]
fn block_size_and_alignment() {
    assert_eq!(size_of::<DemoRegisters>(), 0x20);
    assert_eq!(align_of::<DemoRegisters>(), 4);
    assert_eq!(size_of::<LaneRegisters>(), 0x08);
    assert_eq!(size_of::<NestedBlock>(), 0x14);
}

#[test]
fn overlay_reads_the_backing_memory() {
    let backing: [u32; 8] = [0x0000_0101, 0x3, 0, 0, 0x11, 0x22, 0x33, 0x44];
    let regs = unsafe { &*(backing.as_ptr() as *const DemoRegisters) };

    assert_eq!(regs.cr.get(), 0x0000_0101);
    assert_eq!(regs.cr.read(Ctrl::DIV), 1);
    assert!(regs.sr.is_set(Flags::DONE));
    assert!(regs.sr.is_set(Flags::ERROR));
    assert_eq!(regs.data[0].get(), 0x11);
    assert_eq!(regs.data[3].get(), 0x44);
}

#[test]
fn overlay_writes_are_bit_exact_in_memory() {
    let mut backing: [u32; 8] = [0; 8];
    let base = backing.as_mut_ptr();
    let regs = unsafe { &*(base as *const DemoRegisters) };

    regs.cr.write(Ctrl::DIV.val(0xA) + Ctrl::RUN::SET);
    regs.data[2].set(0xCAFE_F00D);

    // No byte swapping, no displacement: the raw words hold exactly what
    // was written, where it was written.
    unsafe {
        assert_eq!(read_volatile(base), (0xA << 8) | 1);
        assert_eq!(read_volatile(base.add(6)), 0xCAFE_F00D);
    }
}

#[test]
fn write_only_clear_is_a_single_store_of_the_mask() {
    let mut backing: [u32; 8] = [0; 8];
    let base = backing.as_mut_ptr();
    let regs = unsafe { &*(base as *const DemoRegisters) };

    // Pre-set an unrelated bit in the backing word; a write-only clear
    // register must overwrite the whole word with the requested mask only,
    // never read-modify-write it.
    unsafe { write_volatile(base.add(2), 0xFFFF_0000) };
    regs.icr.write(FlagClear::CDONE::SET);

    unsafe { assert_eq!(read_volatile(base.add(2)), 1) };
}

#[test]
fn aliased_register_reads_and_writes_through_one_address() {
    let mut backing: [u32; 8] = [0; 8];
    let base = backing.as_mut_ptr();
    let regs = unsafe { &*(base as *const DemoRegisters) };

    // The write goes to the shared word under the TX bitfield namespace...
    regs.fifo.write(TxData::DATA.val(0x5A));
    assert_eq!(unsafe { read_volatile(base.add(3)) }, 0x5A);

    // ...and a read decodes whatever the hardware left there under RX.
    unsafe { write_volatile(base.add(3), 0xA5) };
    assert_eq!(regs.fifo.read(RxData::DATA), 0xA5);
}

#[test]
fn nested_blocks_index_by_lane() {
    let backing: [u32; 5] = [0xAA, 0x1, 0x100, 0x2, 0x200];
    let regs = unsafe { &*(backing.as_ptr() as *const NestedBlock) };

    assert_eq!(regs.head.get(), 0xAA);
    assert_eq!(regs.lanes[0].cfg.get(), 0x1);
    assert_eq!(regs.lanes[0].count.get(), 0x100);
    assert_eq!(regs.lanes[1].cfg.get(), 0x2);
    assert_eq!(regs.lanes[1].count.get(), 0x200);
}

#[test]
fn modify_touches_only_the_named_field() {
    let mut backing: [u32; 8] = [0xFFFF_FFFF, 0, 0, 0, 0, 0, 0, 0];
    let base = backing.as_mut_ptr();
    let regs = unsafe { &*(base as *const DemoRegisters) };

    regs.cr.modify(Ctrl::DIV.val(0));
    unsafe { assert_eq!(read_volatile(base), 0xFFFF_F0FF) };
}

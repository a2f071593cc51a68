// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Field read/write semantics, exercised against in-memory registers.

use silica_registers::fields::TryFromValue;
use silica_registers::interfaces::{ReadWriteable, Readable, Writeable};
use silica_registers::registers::InMemoryRegister;
use silica_registers::{register_bitfields, LocalRegisterCopy};

register_bitfields![u32,
    Control [
        ENABLE OFFSET(0) NUMBITS(1) [],
        PRESCALER OFFSET(4) NUMBITS(3) [],
        MODE OFFSET(8) NUMBITS(2) [
            Input = 0,
            Output = 1,
            Alternate = 2,
            Analog = 3
        ],
        COUNT OFFSET(16) NUMBITS(16) []
    ],
    Wide [
        ALL OFFSET(0) NUMBITS(32) []
    ]
];

register_bitfields![u8,
    Narrow [
        LOW OFFSET(0) NUMBITS(4) [],
        HIGH OFFSET(4) NUMBITS(4) []
    ]
];

#[test]
fn field_write_then_read_returns_written_value() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);

    for v in 0..8 {
        reg.modify(Control::PRESCALER.val(v));
        assert_eq!(reg.read(Control::PRESCALER), v);
    }
}

#[test]
fn field_write_does_not_perturb_siblings() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);

    reg.write(Control::COUNT.val(0xABCD) + Control::MODE::Alternate + Control::ENABLE::SET);
    reg.modify(Control::PRESCALER.val(5));

    assert_eq!(reg.read(Control::PRESCALER), 5);
    assert_eq!(reg.read(Control::COUNT), 0xABCD);
    assert_eq!(reg.read(Control::MODE), 2);
    assert!(reg.is_set(Control::ENABLE));
}

#[test]
fn raw_value_round_trips() {
    let raw = 0xABCD_0125;
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(raw);
    assert_eq!(reg.get(), raw);

    let copy: LocalRegisterCopy<u32, Control::Register> = LocalRegisterCopy::new(raw);
    assert_eq!(copy.get(), raw);
    assert_eq!(u32::from(copy), raw);

    let full: InMemoryRegister<u32, Wide::Register> = InMemoryRegister::new(0);
    full.write(Wide::ALL.val(raw));
    assert_eq!(full.get(), raw);
    assert_eq!(full.read(Wide::ALL), raw);
}

#[test]
fn value_is_masked_to_field_width() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);

    // A value wider than the field must not spill into neighboring bits.
    reg.write(Control::PRESCALER.val(0xFF));
    assert_eq!(reg.get(), 0b111 << 4);
}

#[test]
fn set_and_clear_shorthands() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);

    reg.modify(Control::ENABLE::SET);
    assert_eq!(reg.get(), 1);
    reg.modify(Control::COUNT::SET);
    assert_eq!(reg.get(), 0xFFFF_0001);
    reg.modify(Control::ENABLE::CLEAR);
    assert_eq!(reg.get(), 0xFFFF_0000);
}

#[test]
fn combined_field_values_apply_with_one_store() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0xFFFF_FFFF);

    reg.write(Control::MODE::Output + Control::PRESCALER.val(3));
    assert_eq!(reg.get(), (1 << 8) | (3 << 4));
}

#[test]
fn read_as_enum_decodes_defined_values() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);

    reg.modify(Control::MODE::Analog);
    assert_eq!(
        reg.read_as_enum(Control::MODE),
        Some(Control::MODE::Value::Analog)
    );

    assert_eq!(Control::MODE::Value::try_from_value(4_u32), None);
}

#[test]
fn extract_checks_several_fields_of_one_read() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);
    reg.write(Control::ENABLE::SET + Control::MODE::Output);

    let snapshot = reg.extract();
    // Hardware may change after the snapshot; the copy must not.
    reg.set(0);

    assert!(snapshot.is_set(Control::ENABLE));
    assert_eq!(snapshot.read(Control::MODE), 1);
    assert!(snapshot.matches_all(Control::ENABLE::SET + Control::MODE::Output));
    assert!(!snapshot.any_matching_bits_set(Control::PRESCALER::SET));
}

#[test]
fn modify_no_read_uses_the_captured_copy() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);
    reg.write(Control::COUNT.val(7));

    let original = reg.extract();
    reg.set(0xDEAD_BEEF);

    reg.modify_no_read(original, Control::ENABLE::SET);
    assert_eq!(reg.get(), 7 << 16 | 1);
}

#[test]
fn narrow_register_widths() {
    let reg: InMemoryRegister<u8, Narrow::Register> = InMemoryRegister::new(0);

    reg.modify(Narrow::HIGH.val(0xA));
    reg.modify(Narrow::LOW.val(0x5));
    assert_eq!(reg.get(), 0xA5);
    assert_eq!(reg.read(Narrow::HIGH), 0xA);
}

#[test]
fn matches_helpers() {
    let reg: InMemoryRegister<u32, Control::Register> = InMemoryRegister::new(0);
    reg.write(Control::PRESCALER.val(6));

    assert!(reg.matches_all(Control::PRESCALER.val(6)));
    assert!(!reg.matches_all(Control::PRESCALER.val(2)));
    assert!(reg.any_matching_bits_set(Control::PRESCALER.val(4)));
    assert!(!reg.any_matching_bits_set(Control::ENABLE::SET));
}

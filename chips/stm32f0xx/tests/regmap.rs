// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Silica Contributors 2026.

//! Register map sizes and the index-parameterized accessors, exercised
//! against in-memory overlays of the register blocks.

use core::mem::size_of;
use core::ptr::{read_volatile, write_volatile};

use silica_registers::interfaces::Writeable;

use stm32f0xx::adc::AdcRegisters;
use stm32f0xx::dma::{DmaChannelRegisters, DmaRegisters};
use stm32f0xx::exti::ExtiRegisters;
use stm32f0xx::gpio::{GpioRegisters, Mode};
use stm32f0xx::i2c::I2cRegisters;
use stm32f0xx::pwr::PwrRegisters;
use stm32f0xx::rcc::RccRegisters;
use stm32f0xx::rtc::RtcRegisters;
use stm32f0xx::spi::SpiRegisters;
use stm32f0xx::syscfg::SyscfgRegisters;
use stm32f0xx::tim::{TimRegisters, SR};
use stm32f0xx::usart::UsartRegisters;

// Block sizes per the reference manual register maps. Offsets within
// each block are already compile-time-checked by the layout assertions.
#[test]
fn register_block_sizes() {
    assert_eq!(size_of::<GpioRegisters>(), 0x2c);
    assert_eq!(size_of::<RccRegisters>(), 0x38);
    assert_eq!(size_of::<DmaRegisters>(), 0x94);
    assert_eq!(size_of::<DmaChannelRegisters>(), 0x14);
    assert_eq!(size_of::<ExtiRegisters>(), 0x18);
    assert_eq!(size_of::<SyscfgRegisters>(), 0x1c);
    assert_eq!(size_of::<PwrRegisters>(), 0x08);
    assert_eq!(size_of::<SpiRegisters>(), 0x24);
    assert_eq!(size_of::<I2cRegisters>(), 0x2c);
    assert_eq!(size_of::<UsartRegisters>(), 0x2c);
    assert_eq!(size_of::<TimRegisters>(), 0x50);
    assert_eq!(size_of::<AdcRegisters>(), 0x30c);
    assert_eq!(size_of::<RtcRegisters>(), 0x64);
}

#[test]
fn gpio_pin_mode_leaves_other_pins_untouched() {
    let mut backing: [u32; 11] = [0; 11];
    let base = backing.as_mut_ptr();
    let gpio = unsafe { &*(base as *const GpioRegisters) };

    // Every pin in analog mode, then switch pin 5 to output.
    unsafe { write_volatile(base, 0xFFFF_FFFF) };
    gpio.set_pin_mode(5, Mode::Output);

    assert_eq!(gpio.pin_mode(5), Mode::Output as u32);
    let moder = unsafe { read_volatile(base) };
    assert_eq!(moder, 0xFFFF_FFFF & !(0b11 << 10) | (0b01 << 10));

    // Pins 0-4 and 6-15 still read analog.
    for pin in (0..16).filter(|p| *p != 5) {
        assert_eq!(gpio.pin_mode(pin), Mode::Analog as u32);
    }
}

#[test]
fn gpio_set_and_clear_are_single_stores_to_bsrr() {
    let mut backing: [u32; 11] = [0; 11];
    let base = backing.as_mut_ptr();
    let gpio = unsafe { &*(base as *const GpioRegisters) };

    // BSRR is at word offset 6. Writing the set half must not require a
    // read: pre-load the backing word with garbage and check that the
    // store replaced all of it with exactly the set mask.
    unsafe { write_volatile(base.add(6), 0xAAAA_5555) };
    gpio.set_pin(3);
    assert_eq!(unsafe { read_volatile(base.add(6)) }, 1 << 3);

    gpio.clear_pin(12);
    assert_eq!(unsafe { read_volatile(base.add(6)) }, 1 << (16 + 12));
}

#[test]
fn gpio_alternate_function_picks_register_and_nibble() {
    let mut backing: [u32; 11] = [0; 11];
    let base = backing.as_mut_ptr();
    let gpio = unsafe { &*(base as *const GpioRegisters) };

    gpio.set_alternate_function(2, 0x7); // AFRL, nibble 2
    gpio.set_alternate_function(10, 0x3); // AFRH, nibble 2

    assert_eq!(unsafe { read_volatile(base.add(8)) }, 0x7 << 8);
    assert_eq!(unsafe { read_volatile(base.add(9)) }, 0x3 << 8);
    assert_eq!(gpio.alternate_function(2), 0x7);
    assert_eq!(gpio.alternate_function(10), 0x3);
}

#[test]
fn dma_channel_flags_and_acknowledge() {
    let mut backing: [u32; 37] = [0; 37];
    let base = backing.as_mut_ptr();
    let dma = unsafe { &*(base as *const DmaRegisters) };

    // Transfer-complete on channel 2 (bit 1 of its flag nibble).
    unsafe { write_volatile(base, 0b0010 << 8) };
    assert!(dma.transfer_complete(2));
    assert!(!dma.transfer_error(2));
    assert!(!dma.transfer_complete(1));

    // Acknowledging channel 2 stores only that channel's clear mask.
    dma.clear_interrupt_flags(2);
    assert_eq!(unsafe { read_volatile(base.add(1)) }, 0b1111 << 8);

    dma.clear_transfer_complete(6);
    assert_eq!(unsafe { read_volatile(base.add(1)) }, 0b0010 << 24);
}

#[test]
fn dma_channels_overlay_at_twenty_byte_stride() {
    let mut backing: [u32; 37] = [0; 37];
    let base = backing.as_mut_ptr();
    let dma = unsafe { &*(base as *const DmaRegisters) };

    dma.channel[0].cmar.set(0x2000_0000);
    dma.channel[3].cndtr.set(42);

    // Channel 0 starts at byte 0x08; channel 3 at 0x08 + 3*0x14 = 0x44.
    assert_eq!(unsafe { read_volatile(base.add((0x08 + 0x0c) / 4)) }, 0x2000_0000);
    assert_eq!(unsafe { read_volatile(base.add((0x44 + 0x04) / 4)) }, 42);
}

#[test]
fn exti_pending_clear_is_a_single_store() {
    let mut backing: [u32; 6] = [0; 6];
    let base = backing.as_mut_ptr();
    let exti = unsafe { &*(base as *const ExtiRegisters) };

    // Lines 4 and 9 pending; acknowledging line 4 stores only bit 4.
    unsafe { write_volatile(base.add(5), (1 << 4) | (1 << 9)) };
    assert!(exti.is_pending(4));
    assert!(exti.is_pending(9));

    exti.clear_pending(4);
    assert_eq!(unsafe { read_volatile(base.add(5)) }, 1 << 4);
}

#[test]
fn syscfg_exti_routing_picks_register_and_nibble() {
    let mut backing: [u32; 7] = [0; 7];
    let base = backing.as_mut_ptr();
    let syscfg = unsafe { &*(base as *const SyscfgRegisters) };

    syscfg.set_exti_source(13, 2); // EXTICR4, nibble 1, port C
    assert_eq!(unsafe { read_volatile(base.add(2 + 3)) }, 2 << 4);
    assert_eq!(syscfg.exti_source(13), 2);

    syscfg.set_exti_source(0, 5); // EXTICR1, nibble 0, port F
    assert_eq!(unsafe { read_volatile(base.add(2)) }, 5);
}

#[test]
fn tim_flag_acknowledge_writes_inverted_mask() {
    let mut backing: [u32; 20] = [0; 20];
    let base = backing.as_mut_ptr();
    let tim = unsafe { &*(base as *const TimRegisters) };

    tim.clear_flags(SR::UIF::SET + SR::CC1IF::SET);
    // SR is at word offset 4; every bit except the acknowledged flags
    // must be written as 1, which hardware ignores.
    assert_eq!(unsafe { read_volatile(base.add(4)) }, !0b11);

    // The capture/compare registers index by unit.
    tim.ccr[2].write(stm32f0xx::tim::CCRx::CCR.val(1234));
    assert_eq!(unsafe { read_volatile(base.add(0x3c / 4)) }, 1234);
}

#[test]
fn adc_channel_selection_is_per_bit() {
    let mut backing: [u32; 195] = [0; 195];
    let base = backing.as_mut_ptr();
    let adc = unsafe { &*(base as *const AdcRegisters) };

    adc.select_channel(0);
    adc.select_channel(17);
    assert_eq!(unsafe { read_volatile(base.add(0x28 / 4)) }, (1 << 17) | 1);

    adc.deselect_channel(0);
    assert_eq!(unsafe { read_volatile(base.add(0x28 / 4)) }, 1 << 17);
}

#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use console_fmt::{format, Arg};
use console_hal::char_port::log::LOGGER;
use console_hal::char_port::CharPort;
use log::{info, LevelFilter};

#[cfg(not(test))]
use riscv_rt::entry;

/// Write-only console port of the simulator.
const CONSOLE_ADDR: *const () = 0x1000_0000 as *const ();

#[allow(static_mut_refs)]
#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let mut console = unsafe { CharPort::new(CONSOLE_ADDR) };

    unsafe {
        LOGGER.set_logger(console.clone());
        LOGGER.display_source = LevelFilter::Error;
        log::set_logger_racy(&LOGGER).ok();
        log::set_max_level_racy(LevelFilter::Info);
    }

    info!("console up at {:#x}", CONSOLE_ADDR as usize);

    format(
        &mut console,
        "%s, %s!\n",
        &[Arg::Str("Hello"), Arg::Str("World")],
    );

    let a = 1;
    let b = 2;
    let c = a + b;
    format(
        &mut console,
        "%d + %d = %d\n",
        &[Arg::Int(a), Arg::Int(b), Arg::Int(c)],
    );

    format(
        &mut console,
        "&a: %p, &b: %p, &c: %p",
        &[Arg::ptr(&a), Arg::ptr(&b), Arg::ptr(&c)],
    );

    loop {
        continue;
    }
}

#[panic_handler]
fn panic_handler(_info: &core::panic::PanicInfo) -> ! {
    loop {
        continue;
    }
}

#![no_std]
#![no_main]

//! # Kindling - kernel image binary
//!
//! The boot loader jumps to `_start` (see [`entry`]), which claims the
//! boot stack and calls [`kernel_main`] below. This stage has nothing
//! to manage yet - no paging, no interrupts, no scheduler - so
//! `kernel_main` announces itself on COM1, proves it is running on the
//! boot stack, and parks the core.

mod entry;

use kindling::{arch, boot::stack, drivers::serial};

// Pull in serial_print!/serial_println!.
#[macro_use]
extern crate kindling;

/// First Rust code to run, on the freshly claimed boot stack.
///
/// Called by the trampoline with zero arguments under the SysV AMD64
/// convention. Never returns; if it somehow did, the trampoline's
/// `park` loop would contain the fall-through.
#[no_mangle]
pub extern "C" fn kernel_main() -> ! {
    serial::init();

    serial_println!("kindling: first light");
    serial_println!(
        "boot stack: {:#x}..{:#x} ({} KiB, {}-byte aligned)",
        stack::bottom(),
        stack::top(),
        stack::size() / 1024,
        stack::STACK_ALIGN,
    );

    // The one runtime check worth making this early: are we actually
    // executing on the stack the trampoline was supposed to give us?
    let rsp = arch::stack_pointer() as usize;
    if stack::contains(rsp) {
        serial_println!("stack switch verified: rsp = {:#x}", rsp);
    } else {
        serial_println!(
            "WARNING: rsp = {:#x} is outside the boot stack - the hand-off is broken",
            rsp
        );
    }

    serial_println!("nothing more to do this early; parking the core");
    arch::halt_loop();
}

// Panic handler is defined in lib.rs

//! # Kindling - The Kernel's First Breath
//!
//! Kindling is the earliest-executing stage of the kernel image: the
//! hand-off point between the boot loader's world and our own. It owns
//! exactly two things:
//!
//! - The boot stack (see [`boot::stack`]) - the first memory the kernel
//!   can truly call its own.
//! - The entry trampoline (`src/entry.rs` in the kernel binary) - the
//!   few instructions that point the stack pointer at that memory, call
//!   `kernel_main`, and park the processor forever if `kernel_main`
//!   ever returns.
//!
//! Everything else - paging, interrupts, drivers beyond a serial port -
//! belongs to the kernel proper and happens after the hand-off.
//!
//! This library builds for the host under `cargo test` so that the
//! statically checkable boot invariants (stack geometry, alignment,
//! headroom) can be exercised without an emulator.

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod boot;
pub mod drivers;

/// Panic handler for freestanding builds.
///
/// There is no unwinding and nowhere to report to but the serial port.
/// Say what happened, then park the processor for good.
#[cfg(not(test))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    crate::serial_println!("\nKERNEL PANIC: {}", info);
    arch::halt_loop();
}

//! Thin x86-64 wrappers
//!
//! The handful of processor-level operations the boot stage needs,
//! kept in one place so the rest of the crate stays free of inline
//! assembly.

/// Read the current stack pointer.
///
/// Used by the bring-up sanity checks to confirm execution really is
/// running on the boot stack, and by nothing else.
#[inline(always)]
pub fn stack_pointer() -> u64 {
    let rsp: u64;
    unsafe {
        core::arch::asm!("mov {}, rsp", out(reg) rsp, options(nomem, nostack, preserves_flags));
    }
    rsp
}

/// Halt the processor until the next external event.
#[inline]
pub fn halt() {
    x86_64::instructions::hlt();
}

/// Park the processor permanently.
///
/// This is the Rust-side mirror of the trampoline's `park` sequence:
/// halt, and if anything (an NMI, a stray interrupt) wakes the core,
/// halt again. There is no way out short of an external reset.
pub fn halt_loop() -> ! {
    loop {
        halt();
    }
}

//! # The Boot Stack
//!
//! The first memory the kernel owns. The boot loader hands us the
//! processor with no stack we are entitled to keep, so before a single
//! `call` can happen the trampoline must point `rsp` somewhere that is
//! unarguably ours.
//!
//! That somewhere is [`BOOT_STACK`]: a fixed 1 MiB region reserved at
//! link time inside the kernel image's own `.bss`, a section the boot
//! loader never uses for its own purposes. Its contents mean nothing
//! until the kernel starts pushing frames onto it; all that matters is
//! its size, its alignment, and its top address.
//!
//! Ownership is absolute and one-way: the instant the trampoline loads
//! [`BOOT_STACK_TOP`] into `rsp`, the region stops being "reserved bytes
//! in the image" and becomes the kernel's live call stack, for the rest
//! of the machine's uptime. It is never shared and never released.

use core::ptr::addr_of;

/// Size of the boot stack in bytes: 1 MiB.
///
/// The single tunable of this module. Generous for bring-up - at a
/// typical few hundred bytes per frame it absorbs thousands of nested
/// calls - while costing nothing in the image file, since `.bss` is not
/// stored, only reserved.
///
/// Must remain a positive multiple of [`STACK_ALIGN`] so the top stays
/// aligned (checked in the tests below).
pub const STACK_SIZE: usize = 1024 * 1024;

/// Stack alignment demanded by the SysV AMD64 calling convention.
///
/// `kernel_main` is entitled to a 16-byte-aligned stack. We align the
/// region itself rather than trusting whatever alignment the section
/// happens to get from the linker.
pub const STACK_ALIGN: usize = 16;

/// The boot stack's backing storage.
///
/// A plain byte array with the calling convention's alignment baked
/// into the type, so every instance - there is exactly one - satisfies
/// the ABI by construction.
#[repr(C, align(16))]
pub struct StackRegion([u8; STACK_SIZE]);

impl StackRegion {
    pub const fn new() -> Self {
        Self([0; STACK_SIZE])
    }
}

/// The one and only boot stack.
///
/// `static mut` keeps it out of read-only data: the all-zero initializer
/// lands it in `.bss`, reserved in memory but absent from the image
/// file. No Rust code ever forms a reference into it - it is touched
/// only through `rsp` once the trampoline has claimed it.
#[no_mangle]
pub static mut BOOT_STACK: StackRegion = StackRegion::new();

/// Top of the boot stack (exclusive): base + [`STACK_SIZE`].
///
/// Stacks grow downward on x86-64, so this highest address is the
/// initial stack pointer. It is precomputed into a symbol so the
/// trampoline can fetch it with a single RIP-relative load while it
/// still has no stack to work with.
///
/// 16-byte aligned, because the base is 16-byte aligned and
/// [`STACK_SIZE`] is a multiple of 16. Loading it into `rsp` and then
/// executing `call` leaves `kernel_main` with `rsp % 16 == 8`, exactly
/// the entry state the SysV AMD64 ABI prescribes.
#[no_mangle]
#[used]
pub static mut BOOT_STACK_TOP: *const u8 =
    unsafe { addr_of!(BOOT_STACK).cast::<u8>().add(STACK_SIZE) };

/// Lowest address of the boot stack.
pub fn bottom() -> usize {
    unsafe { addr_of!(BOOT_STACK) as usize }
}

/// One past the highest address of the boot stack (the initial `rsp`).
pub fn top() -> usize {
    bottom() + STACK_SIZE
}

/// Size of the boot stack in bytes.
///
/// Always [`STACK_SIZE`]; offered alongside the other accessors so
/// callers describing the region never have to mix constants and
/// addresses.
pub fn size() -> usize {
    STACK_SIZE
}

/// Does `addr` fall within the boot stack?
///
/// The top is exclusive: `rsp` starts *at* the top, but the first push
/// moves it inside, and every live byte of stack data sits below it.
pub fn contains(addr: usize) -> bool {
    addr >= bottom() && addr < top()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_positive_multiple_of_alignment() {
        assert!(STACK_SIZE > 0);
        assert_eq!(STACK_SIZE % STACK_ALIGN, 0);
        // The documented figure: exactly 1 MiB.
        assert_eq!(STACK_SIZE, 1_048_576);
    }

    #[test]
    fn base_is_aligned() {
        assert_eq!(bottom() % STACK_ALIGN, 0, "repr(align) must hold at runtime");
    }

    #[test]
    fn top_is_base_plus_size_and_aligned() {
        assert_eq!(top(), bottom() + STACK_SIZE);
        assert_eq!(top() % STACK_ALIGN, 0);
    }

    #[test]
    fn exported_top_symbol_matches_accessor() {
        // The trampoline consumes BOOT_STACK_TOP, the kernel consumes
        // top(); they must be the same address or the sanity checks in
        // kernel_main are checking the wrong region.
        let exported = unsafe { BOOT_STACK_TOP } as usize;
        assert_eq!(exported, top());
    }

    #[test]
    fn size_spans_the_region() {
        assert_eq!(size(), STACK_SIZE);
        assert_eq!(size(), top() - bottom());
    }

    #[test]
    fn contains_tracks_the_bounds() {
        assert!(contains(bottom()));
        assert!(contains(top() - 8)); // rsp right after the call
        assert!(!contains(top())); // top itself is exclusive
        assert!(!contains(bottom() - 1));
    }

    #[test]
    fn headroom_for_thousands_of_nested_calls() {
        // Sizing sanity check: with a typical frame of a few hundred
        // bytes, 1 MiB must absorb thousands of nested calls.
        const TYPICAL_FRAME: usize = 256;
        assert!(STACK_SIZE / TYPICAL_FRAME >= 4096);
    }
}

//! # The Entry Trampoline
//!
//! `_start` is where the boot loader's final jump lands: 64-bit long
//! mode, no valid stack, no defined register arguments. Three steps,
//! in an order that can never be rearranged:
//!
//! 1. Load `BOOT_STACK_TOP` (exported by `kindling::boot::stack`) into
//!    `rsp`. This must be the very first instruction to touch the stack
//!    pointer - until it executes there is no stack, so nothing before
//!    it may push, pop, or call. (A RIP-relative data load is fine; a
//!    stack access is not.)
//! 2. `call kernel_main`. The call itself is the first use of the new
//!    stack: it pushes the return address and hands control to Rust
//!    under the SysV AMD64 convention, with zero arguments.
//! 3. `park`. `kernel_main` never returns in a correct kernel, but if
//!    it ever does, execution must not fall through into whatever
//!    bytes follow. Halt; and should an NMI or stray interrupt wake
//!    the core, jump straight back to the halt. Terminal, forever.
//!
//! No Rust code references `_start`; the boot loader's initial jump is
//! the only way in, so it runs exactly once.

use core::arch::global_asm;

global_asm!(
    r#"
    .section .text
    .code64
    .globl _start
    .extern kernel_main

    _start:
        # Claim the boot stack. First touch of rsp since the hand-off,
        # and nothing above this line may rely on a stack existing.
        mov rsp, [rip + BOOT_STACK_TOP]

        # Hand control to Rust. Pushing the return address is the
        # first write the kernel makes to its new stack; kernel_main
        # starts with rsp % 16 == 8, as the SysV AMD64 ABI requires.
        call kernel_main

        # kernel_main returned - it never should. Do not fall through
        # into undefined memory: park the core until an external reset.
    park:
        hlt
        jmp park
    "#
);

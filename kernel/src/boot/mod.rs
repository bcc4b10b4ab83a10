//! # The Hand-Off
//!
//! The boot loader leaves the processor in 64-bit long mode and jumps to
//! `_start` with no valid stack and no defined register arguments. From
//! that moment the bootstrap lifecycle is a straight line:
//!
//! ```text
//! Uninitialized --(rsp = BOOT_STACK_TOP)--> StackSwitched
//! StackSwitched --(call kernel_main)------> Running
//! Running ------(kernel_main returns?)----> Halted   (never, in a correct kernel)
//! Halted --------(any wake-up event)------> Halted   (self-loop, forever)
//! ```
//!
//! Nothing ever transitions backwards, and nothing returns to the boot
//! loader. `_start` runs exactly once: no Rust code references it, so the
//! only path into it is the boot loader's initial jump.
//!
//! Correctness here is by construction, not by checking. Until the stack
//! switch there is no stack to push an error onto and no device set up to
//! report one; a mistake in these few instructions is simply undefined
//! behavior in everything that follows.
//!
//! The trampoline itself lives in the kernel binary (`src/entry.rs`),
//! next to `kernel_main`; this module owns the memory it claims.

pub mod stack;

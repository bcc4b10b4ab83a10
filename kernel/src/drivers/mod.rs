//! Hardware device drivers
//!
//! The boot stage drives exactly one device: the COM1 serial port,
//! which exists so the code running after the stack switch has
//! somewhere to say what it is doing.

pub mod serial;

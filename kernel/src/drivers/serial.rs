//! Serial Port Driver (UART 16550)
//!
//! Minimal, polling-only output on COM1. This is the boot stage's sole
//! diagnostic channel: it comes up the moment `kernel_main` asks for it
//! and needs no interrupts, no allocator, nothing but port I/O.

use core::fmt;
use spin::Mutex;
use x86_64::instructions::port::Port;

/// COM1 base port.
const COM1: u16 = 0x3F8;

/// The UART's reference clock divided by 16: divisor 1 == 115200 baud.
const UART_CLOCK_BAUD: u32 = 115_200;

/// Baud rate used for bring-up output.
const BAUD_RATE: u32 = 115_200;

bitflags::bitflags! {
    /// Line status register (base + 5) bits we care about.
    struct LineStatus: u8 {
        const DATA_READY     = 1 << 0;
        const TRANSMIT_EMPTY = 1 << 5;
    }
}

/// Divisor latch value for a requested baud rate.
const fn divisor_for(baud: u32) -> u16 {
    (UART_CLOCK_BAUD / baud) as u16
}

/// A 16550 UART at a fixed base port.
pub struct SerialPort {
    data: Port<u8>,
    int_enable: Port<u8>,
    fifo_ctrl: Port<u8>,
    line_ctrl: Port<u8>,
    modem_ctrl: Port<u8>,
    line_status: Port<u8>,
}

impl SerialPort {
    /// Describe a port without touching the hardware.
    const fn new(base: u16) -> Self {
        Self {
            data: Port::new(base),
            int_enable: Port::new(base + 1),
            fifo_ctrl: Port::new(base + 2),
            line_ctrl: Port::new(base + 3),
            modem_ctrl: Port::new(base + 4),
            line_status: Port::new(base + 5),
        }
    }

    /// Bring the UART up: 8N1, FIFOs on, interrupts off.
    ///
    /// # Safety
    /// Performs raw port I/O; the caller must ensure a 16550-compatible
    /// UART actually sits at this base port.
    pub unsafe fn init(&mut self) {
        // No interrupts - this driver only ever polls.
        self.int_enable.write(0x00);

        // DLAB on, program the divisor, DLAB back off with 8N1 line
        // settings (8 data bits, no parity, 1 stop bit).
        self.line_ctrl.write(0x80);
        let divisor = divisor_for(BAUD_RATE);
        self.data.write(divisor as u8);
        self.int_enable.write((divisor >> 8) as u8);
        self.line_ctrl.write(0x03);

        // FIFOs enabled and cleared, 14-byte trigger level.
        self.fifo_ctrl.write(0xC7);

        // DTR + RTS + OUT2.
        self.modem_ctrl.write(0x0B);
    }

    /// Transmit one byte, waiting for the holding register to drain.
    ///
    /// # Safety
    /// Raw port I/O; see [`SerialPort::init`].
    pub unsafe fn write_byte(&mut self, byte: u8) {
        while !LineStatus::from_bits_truncate(self.line_status.read())
            .contains(LineStatus::TRANSMIT_EMPTY)
        {}
        self.data.write(byte);
    }
}

impl fmt::Write for SerialPort {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            unsafe {
                self.write_byte(byte);
            }
        }
        Ok(())
    }
}

/// The global COM1 instance, guarded so concurrent callers cannot
/// interleave bytes. (The boot stage is single-threaded, but the lock
/// costs nothing and the invariant outlives this stage.)
static SERIAL1: Mutex<SerialPort> = Mutex::new(SerialPort::new(COM1));

/// Initialize COM1. Call once, early in `kernel_main`.
pub fn init() {
    unsafe {
        SERIAL1.lock().init();
    }
}

/// Macro for serial output (like print!)
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::drivers::serial::_print(format_args!($($arg)*))
    };
}

/// Macro for serial output with newline (like println!)
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)));
}

/// Internal print function for the macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    // Writing to the UART cannot fail; the Err arm is unreachable.
    SERIAL1.lock().write_fmt(args).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_math() {
        assert_eq!(divisor_for(115_200), 1);
        assert_eq!(divisor_for(38_400), 3);
        assert_eq!(divisor_for(9_600), 12);
    }

    #[test]
    fn transmit_empty_is_bit_five() {
        let lsr = LineStatus::from_bits_truncate(0x20);
        assert!(lsr.contains(LineStatus::TRANSMIT_EMPTY));
        assert!(!lsr.contains(LineStatus::DATA_READY));
    }
}

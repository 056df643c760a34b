// uart_16650 is a really basic serial port model that everything else is back-compat with.
// the mode changes here blank the text screen, so logs go out over com1 instead.
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;
use uart_16550::SerialPort;

/// first serial port.
pub const COM1: u16 = 0x3F8;

lazy_static! {
    pub static ref SERIAL1: Mutex<SerialPort> = {
        let mut serial_port = unsafe { SerialPort::new(COM1) };
        serial_port.init();
        Mutex::new(serial_port)
    };
}

#[doc(hidden)]
pub fn _print(args: ::core::fmt::Arguments) {
    use core::fmt::Write;
    use x86_64::instructions::interrupts;
    // a log line from inside an interrupt would deadlock on the port lock.
    interrupts::without_interrupts(|| {
        SERIAL1.lock().write_fmt(args).expect("failed write to serial");
    });
}

#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => (
        $crate::serial::_print(format_args!($($arg)*))
    );
}

#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => (
        $crate::serial_print!(concat!($fmt, "\n"));
    );
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(
        concat!($fmt, "\n"), $($arg)*
    ));
}

/// `log` sink writing `[LEVEL] target message` lines to com1.
pub struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = if !record.target().is_empty() {
            record.target()
        } else {
            record.module_path().unwrap_or_default()
        };
        crate::serial_println!("[{}] {} {}", record.level(), target, record.args());
    }

    fn flush(&self) {}
}

/// route `log` records at or above `level` to com1. only the first call wins.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
use crate::char_port;

// The logger utilizes core::fmt to format the log messages because ufmt
// formatting is not compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

/// A global logger instance to be used with the `log` crate.
///
/// Use `set_logger` to set the `CharPort` instance to be used for logging.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `PortLogger` is `Send` and `Sync`, the underlying `CharPort`
/// is not `Send` or `Sync`.
pub static mut LOGGER: PortLogger = PortLogger {
    port: None,
    display_level: LevelFilter::Trace,
    display_source: LevelFilter::Trace,
};

/// Wrapper for `CharPort` to be used as a logger with the `log` crate.
/// Instead of making a new logger, use the `set_logger` method of the
/// `LOGGER` instance.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `PortLogger` is `Send` and `Sync`, the underlying `CharPort`
/// is not `Send` or `Sync`.
pub struct PortLogger {
    port: Option<char_port::CharPort>,
    pub display_level: LevelFilter,
    pub display_source: LevelFilter,
}

impl PortLogger {
    /// Set the logger to use the given character port.
    /// # Safety
    /// Using this function and logger is only safe if there is only one
    /// thread of execution. This function assigns the `CharPort` instance to
    /// a global (`static mut`), but `CharPort` is not `Send` or `Sync`.
    pub unsafe fn set_logger(&mut self, port: char_port::CharPort) {
        self.port = Some(port);
    }
}

impl log::Log for PortLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Level::Info <= metadata.level()
    }

    #[allow(static_mut_refs)]
    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            unsafe {
                match &mut LOGGER.port {
                    Some(p) => {
                        if record.level() <= self.display_level {
                            write!(p, "{} | ", record.level()).unwrap()
                        }
                        if record.level() <= self.display_source {
                            write!(
                                p,
                                "{}:{} - ",
                                record.file().unwrap(),
                                record.line().unwrap()
                            )
                            .unwrap();
                        }
                        writeln!(p, "{}", record.args()).unwrap();
                    }
                    None => panic!("Logger not set"),
                }
            }
        }
    }

    fn flush(&self) {}
}

unsafe impl core::marker::Send for PortLogger {}
unsafe impl core::marker::Sync for PortLogger {}

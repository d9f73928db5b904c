// libnfcemu/src/dispatch/console.rs

use std::fmt;

use crate::dispatch::traits::Console;

/// Console backed by the `log` facade: errors go to `error!`, output to
/// `info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl Console for LogConsole {
    fn log_err(&mut self, msg: &str) {
        log::error!("{}", msg.trim_end());
    }

    fn log_msg(&mut self, msg: &str) {
        log::info!("{}", msg.trim_end());
    }
}

/// `fmt::Write` adapter that forwards every fragment to `Console::log_msg`.
pub struct ConsoleWriter<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> ConsoleWriter<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        Self { console }
    }
}

impl<C: Console + ?Sized> fmt::Write for ConsoleWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.log_msg(s);
        Ok(())
    }
}

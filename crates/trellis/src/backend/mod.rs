//! Terminal backends.

pub mod crossterm;

use std::process;

use crate::Result;

/// A handle for controlling a rendering back-end: claiming the terminal on
/// start, releasing it on stop.
pub trait BackendControl {
    /// Start the backend, taking control of the terminal.
    fn start(&mut self) -> Result<()>;

    /// Stop the backend, releasing control of the terminal.
    fn stop(&mut self) -> Result<()>;

    /// Stop the backend and exit the process.
    fn exit(&mut self, code: i32) -> ! {
        let _ = self.stop();
        process::exit(code)
    }
}

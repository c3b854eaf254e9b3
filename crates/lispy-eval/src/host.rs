//! Host capabilities reached by builtins.

use std::fs;
use std::io;

/// The interpreter's window on the outside world: where `print` writes and
/// where `load` reads scripts from.
pub trait Host {
    /// Write one line of program output.
    fn print(&self, line: &str);

    /// Read the full text of the script at `path`.
    fn read_source(&self, path: &str) -> io::Result<String>;
}

/// Host backed by stdout and the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdHost;

impl Host for StdHost {
    fn print(&self, line: &str) {
        println!("{}", line);
    }

    fn read_source(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

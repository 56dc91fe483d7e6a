//! Input sources that feed the engine.
//!
//! The engine consumes [`PointerEvent`]s and nothing else; a driver is
//! whatever turns a platform's input stream into them. The crate ships a
//! terminal-backed driver in [`console`]; tests feed events directly.

pub mod console;

use std::io;
use std::time::Duration;

use crate::pointer::PointerEvent;

pub trait PointerDriver {
    /// Wait up to `timeout` for input. Returns true when `read` won't block.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read the next platform event. Input that has no pointer translation
    /// (keys, focus changes) returns `None`; drivers may stash such events
    /// for host-specific access.
    fn read(&mut self) -> io::Result<Option<PointerEvent>>;
}

impl<T: PointerDriver + ?Sized> PointerDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Option<PointerEvent>> {
        (**self).read()
    }
}

use std::io;
use std::time::Duration;

use crate::drivers::PointerDriver;
use crate::pointer::PointerEvent;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// A centralized poll/dispatch loop for hosts that own their thread.
///
/// The loop is the only place that calls `driver.poll()` or `driver.read()`.
/// The handler is called with `Some(event)` for each translated pointer
/// event and with `None` whenever the poll interval elapses quietly, which
/// is where hosts drive [`crate::engine::GestureEngine::tick`] so long-press
/// deadlines fire without input.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: PointerDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<PointerEvent>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain the queue before rendering again so a burst of drag
                // reports doesn't fall behind the input stream.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, event)? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

//! Carrying out a planned fault.

use std::io::{self, Write};

use crate::{FaultPlan, Termination};

/// Address written to by [`terminate_abruptly`]. The zero page is never mapped.
pub const INVALID_ADDRESS: usize = 7;

impl FaultPlan {
    /// Writes the payload followed by a newline and returns the exit code.
    ///
    /// A [`Termination::Crash`] plan never returns: the process is killed
    /// before anything else happens.
    pub fn execute<W: Write>(self, out: &mut W) -> io::Result<u8> {
        tracing::debug!(fault = %self.fault, "injecting fault");
        if let Some(payload) = &self.stdout {
            writeln!(out, "{payload}")?;
            out.flush()?;
        }
        match self.termination {
            Termination::Exit(code) => Ok(code),
            Termination::Crash => terminate_abruptly(),
        }
    }
}

/// Kills the process with a segmentation fault.
#[allow(unsafe_code)]
pub fn terminate_abruptly() -> ! {
    let address = INVALID_ADDRESS as *mut u8;
    // SAFETY: none. The write is meant to fault; the kernel delivers SIGSEGV
    // and the default action terminates the process.
    unsafe { std::ptr::write_volatile(address, 20) };
    std::process::abort()
}

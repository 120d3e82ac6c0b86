//! SIGINT/SIGTERM handling for the forward loop.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

static REQUESTED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_signal(_: libc::c_int) {
    REQUESTED.store(true, Ordering::SeqCst);
}

/// Read side of the shutdown request.
#[derive(Debug, Clone, Copy)]
pub struct ShutdownFlag {
    flag: &'static AtomicBool,
}

impl ShutdownFlag {
    pub fn new(flag: &'static AtomicBool) -> Self {
        Self { flag }
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

/// Route SIGINT and SIGTERM to the process-wide shutdown flag.
pub fn install() -> io::Result<ShutdownFlag> {
    let handler = on_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
    for signal in [libc::SIGINT, libc::SIGTERM] {
        // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
        if unsafe { libc::signal(signal, handler) } == libc::SIG_ERR {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(ShutdownFlag::new(&REQUESTED))
}

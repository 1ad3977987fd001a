//! Stopwatch core: the timer state machine, its display format, and the
//! clock and periodic-source abstractions it runs on.

pub mod clock;
pub mod controller;
pub mod format;
pub mod scheduler;
pub mod session;

/// Milliseconds, either elapsed or since a clock's epoch.
pub type Millis = u64;

pub use controller::TimerState;
pub use format::format_elapsed;
pub use session::Stopwatch;

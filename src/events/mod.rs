//! Match events.
//!
//! The engine performs no I/O. Instead every observable transition is
//! queued as a `GameEvent` and mirrored to the `log` facade; the
//! presentation layer drains the queue with `Match::drain_events`.

mod event;

pub use event::GameEvent;

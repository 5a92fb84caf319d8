//! Game events and observers.
//!
//! The battle engine reports what happens through a `GameObserver`. The
//! console front-end is one observer; tests use `EventLog`.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, NullObserver};

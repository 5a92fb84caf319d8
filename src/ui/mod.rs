//! Text front-end for the `war` binary.

pub mod console;

pub use console::ConsoleObserver;

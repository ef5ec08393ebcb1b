// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, viewport drawing) remain in the binary crate.

pub mod harness;
pub mod state;

#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{create_command, stored_booking, update_command_for};
pub use harness::create_harness;

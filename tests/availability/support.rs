#[path = "support/fixtures.rs"]
mod fixtures;

pub use fixtures::{check_command, confirmed_booking, lesson_command};
pub use harness::create_harness;

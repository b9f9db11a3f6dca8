pub mod controller;
pub mod messages;
pub mod questions;

pub use controller::{should_discard_entry, DiaryFlowController};

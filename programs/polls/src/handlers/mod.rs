pub mod initialize;
pub use initialize::*;

pub mod create_poll;
pub use create_poll::*;

pub mod vote;
pub use vote::*;

pub mod end_poll;
pub use end_poll::*;

pub mod read_poll;
pub use read_poll::*;

pub mod get_all_polls;
pub use get_all_polls::*;

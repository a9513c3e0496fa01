pub mod events;
pub mod poll;
pub mod registry;
pub mod voter_record;

pub use events::*;
pub use poll::*;
pub use registry::*;
pub use voter_record::*;

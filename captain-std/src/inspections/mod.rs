//! Standard inspection implementations.

pub mod conditional;
pub mod logging;
pub mod map;

pub use conditional::ConditionalInspection;
pub use logging::LoggingInspection;
pub use map::MapInspection;

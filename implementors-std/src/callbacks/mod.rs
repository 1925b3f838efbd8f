//! Standard [`RegistrationCallback`](implementors_core::RegistrationCallback)
//! wrappers.

mod fanout;
mod logging;

pub use fanout::FanoutCallback;
pub use logging::LoggingCallback;

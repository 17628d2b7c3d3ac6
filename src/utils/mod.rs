mod logging;
mod paths;

pub use logging::*;
pub use paths::*;

#[cfg(test)]
pub(crate) use logging::capture_logs;

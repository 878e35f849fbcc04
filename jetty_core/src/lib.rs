//!
//! Core Jetty plumbing
//!
//! Provides the pieces every Jetty connector shares: logging, connector
//! configuration and credentials, the connector and SQL executor traits, and
//! the set-diff helpers used on the write path.
#![deny(missing_docs)]

pub use connectors::{Connector, SqlExecutor};
pub use jetty::fetch_credentials;

pub mod connectors;
pub mod jetty;
pub mod logging;
pub mod write;

#[macro_export]
/// Time the code inside the macro. Write the elapsed time to debug logs.
/// Derived from https://notes.iveselov.info/programming/time_it-a-case-study-in-rust-macros
macro_rules! log_runtime {
    ($context:literal, $($tt:tt)+) => {
        {
            $crate::logging::debug!("{}: starting", $context);
            let timer = std::time::Instant::now();
            let x =
            $(
                $tt
            )+;
            $crate::logging::debug!("{}: {:?}", $context, timer.elapsed());
            x
        }
    }
}

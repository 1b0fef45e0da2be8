//! Library surface of the `patedu` binary.
//!
//! Only the logging setup is exposed here so integration tests can
//! install a subscriber with a capturing writer.

#![deny(unsafe_code)]

pub mod logging;

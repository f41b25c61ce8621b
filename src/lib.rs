//! Minimal console logging: `[INFO][tag] message` to stdout and
//! `[ERROR][tag] message` to stderr.

pub mod console;

pub use console::{error, error_tagged, info, info_tagged, Level, DEFAULT_TAG, OK};

//! Command handlers. Each takes the project root explicitly so it can run
//! against any directory, not only the current one.

pub mod add;
pub mod init;
pub mod list;

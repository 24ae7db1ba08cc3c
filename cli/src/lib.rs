//! Terminal front end for backer order tracking.
//!
//! [`app::run`] performs the whole lookup and is shared by the
//! `backer-track` binary and the integration tests.

pub mod app;
pub mod cli;
pub mod output;
pub mod rows;
pub mod table;
pub mod timing;

#![allow(dead_code)]
pub mod test_app;
pub mod test_db;

pub use test_app::*;
pub use test_db::*;

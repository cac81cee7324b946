pub mod common;
pub mod employee;

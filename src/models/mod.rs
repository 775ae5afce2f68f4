// src/models/mod.rs

pub mod question;
pub mod report;
pub mod test_definition;
pub mod test_result;
pub mod user;

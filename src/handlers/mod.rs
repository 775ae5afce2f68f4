// src/handlers/mod.rs

pub mod reports;

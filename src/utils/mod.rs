// src/utils/mod.rs

pub mod de;
pub mod jwt;

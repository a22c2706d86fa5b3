// src/lib.rs

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod gateway;
pub mod models;
pub mod services;

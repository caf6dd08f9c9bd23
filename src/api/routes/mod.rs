//! API route handlers, one module per concern

pub mod dataset;
pub mod filter;
pub mod health;
pub mod page;

//! Integration tests spanning `portname-core` and `portname-common`.

pub mod fixtures;

mod rows;

// crates/caesar-cli/src/cmd/mod.rs

pub mod crack;
pub mod histogram;
pub mod menu;
pub mod shift;

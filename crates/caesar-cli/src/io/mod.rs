// crates/caesar-cli/src/io/mod.rs

pub mod reference;
pub mod text;

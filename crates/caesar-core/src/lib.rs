// crates/caesar-core/src/lib.rs

pub mod error;
pub mod validate;

pub mod alphabet;
pub mod cipher;
pub mod crack;
pub mod dist;
pub mod metric;
pub mod rank;

pub use crate::cipher::{decrypt, encrypt, shift_text, Direction};
pub use crate::crack::{crack, Decryption};
pub use crate::dist::histogram::build_histogram;
pub use crate::dist::LetterDist;
pub use crate::error::{CaesarError, Result};
pub use crate::metric::Metric;
pub use crate::rank::{rank_shifts, Candidate, TopN, TOP_N};

// Immutable character-sequence library
// A compact string supplement: one immutable wrapper type plus a
// skip-table substring search engine

#[cfg(test)]
mod test;

pub mod char_seq;
pub mod error;
pub mod search;
pub mod seq;

#[cfg(feature = "serde")]
pub mod serde;

pub use char_seq::CharSeq;
pub use error::{SeqError, SeqResult};
pub use search::{find_first, find_last};
pub use seq::Seq;

pub mod test_seq;
#[cfg(feature = "serde")]
pub mod test_serde;

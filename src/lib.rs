pub mod logger;
pub mod stages;

pub use stages::{STAGES, decode_stage, encode_stage, encoded_stages, write_encoded_stages};

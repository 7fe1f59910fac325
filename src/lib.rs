#![doc = include_str!("../README.md")]

mod byte_stream;
mod error;
mod integer_compression;

pub use byte_stream::{ByteStreamCompressor, Lz4Compressor};
pub use error::{DeltaPackError, DeltaPackResult};
pub use integer_compression::compression::IntegerCompression;
pub use integer_compression::delta_mode::{decode_integers, encode_integers, encoded_buffer_size};
pub use integer_compression::word::Word32;

use thiserror::Error;

/// Alias for the result type of deltapack operations.
pub type DeltaPackResult<T> = Result<T, DeltaPackError>;

/// Errors that can occur when coding or compressing integer lists.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DeltaPackError {
    /// Not enough data in the input buffer
    #[error("Not enough data in the input buffer")]
    NotEnoughData,

    /// Output buffer too small
    #[error("Output buffer too small")]
    OutputBufferTooSmall,

    /// Caller-provided decompression working space below the required size
    #[error("Working space buffer too small")]
    WorkingSpaceTooSmall,

    /// The byte-stream compressor rejected the encoded buffer
    #[error("Byte-stream compression failed: {0}")]
    Compress(#[from] lz4_flex::block::CompressError),

    /// The byte-stream decompressor could not reconstruct the encoded buffer
    #[error("Byte-stream decompression failed: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),
}

use crate::error::DeltaPackResult;

/// General-purpose byte-stream compressor run over the delta-coded buffer.
///
/// The intermediate layout leans on this stage for its final size: the
/// runs of identical code bytes left by most-common-delta classification
/// are exactly what an LZ4-family matcher folds away. Any compressor with
/// a worst-case output bound can stand in; the choice does not affect the
/// intermediate format.
pub trait ByteStreamCompressor {
    /// Upper bound on compressed size for `src_size` input bytes.
    fn bound_for(&self, src_size: usize) -> usize;

    /// Compresses `src` into `dst`, returning the compressed size.
    ///
    /// `dst` must hold at least [`bound_for`](Self::bound_for) bytes for
    /// the source size.
    fn compress_to_buffer(&self, src: &[u8], dst: &mut [u8]) -> DeltaPackResult<usize>;

    /// Decompresses `src` into `dst`, returning the decompressed size.
    ///
    /// Fails when the stream is corrupt, truncated, or larger than `dst`.
    fn decompress_from_buffer(&self, src: &[u8], dst: &mut [u8]) -> DeltaPackResult<usize>;
}

/// LZ4 block codec backed by [`lz4_flex`].
///
/// Raw blocks, no frame header and no embedded size; the caller tracks
/// lengths, matching the rest of the codec's not-self-describing stance.
#[derive(Debug)]
pub struct Lz4Compressor;

// Implemented for consistency with other compressors
impl Lz4Compressor {
    /// Creates a new instance
    #[must_use]
    pub fn new() -> Lz4Compressor {
        Lz4Compressor
    }
}

// Implemented for consistency with other compressors
impl Default for Lz4Compressor {
    fn default() -> Self {
        Lz4Compressor::new()
    }
}

impl ByteStreamCompressor for Lz4Compressor {
    fn bound_for(&self, src_size: usize) -> usize {
        lz4_flex::block::get_maximum_output_size(src_size)
    }

    fn compress_to_buffer(&self, src: &[u8], dst: &mut [u8]) -> DeltaPackResult<usize> {
        Ok(lz4_flex::block::compress_into(src, dst)?)
    }

    fn decompress_from_buffer(&self, src: &[u8], dst: &mut [u8]) -> DeltaPackResult<usize> {
        Ok(lz4_flex::block::decompress_into(src, dst)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lz4_roundtrip() {
        let compressor = Lz4Compressor::new();
        let original = b"aaaaaaaaaaaaaaaaaaaaaaaabbbbbbbbbbbbbbbbbbbbbbbb";
        let mut compressed = vec![0u8; compressor.bound_for(original.len())];
        let compressed_size = compressor
            .compress_to_buffer(original, &mut compressed)
            .expect("Failed to compress");
        assert!(compressed_size <= compressed.len());

        let mut decompressed = vec![0u8; original.len()];
        let decompressed_size = compressor
            .decompress_from_buffer(&compressed[..compressed_size], &mut decompressed)
            .expect("Failed to decompress");
        assert_eq!(original.len(), decompressed_size);
        assert_eq!(original[..], decompressed[..]);
    }

    #[test]
    fn test_corrupt_stream_is_an_error() {
        let compressor = Lz4Compressor::new();
        let garbage = [0xFFu8; 16];
        let mut out = vec![0u8; 64];
        assert!(compressor
            .decompress_from_buffer(&garbage, &mut out)
            .is_err());
    }
}

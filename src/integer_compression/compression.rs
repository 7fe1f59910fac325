use crate::byte_stream::{ByteStreamCompressor, Lz4Compressor};
use crate::error::{DeltaPackError, DeltaPackResult};
use crate::integer_compression::delta_mode;
use crate::integer_compression::word::Word32;

/// Two-stage compressor for 32-bit index lists.
///
/// Stage 1 delta-codes the integers into a compact intermediate buffer
/// ([`encode_integers`](delta_mode::encode_integers)); stage 2 runs a
/// byte-stream compressor over that buffer. Decompression reverses the
/// pipeline through a working buffer sized by
/// [`decompression_working_space_size`](Self::decompression_working_space_size).
///
/// The element count is never embedded in the stream: callers persist it
/// out of band and present it again as the output slice length when
/// decompressing. All calls are pure and keep no state, so one instance
/// may serve many threads as long as concurrent calls use disjoint
/// buffers.
#[derive(Debug)]
pub struct IntegerCompression<C = Lz4Compressor> {
    compressor: C,
}

impl IntegerCompression<Lz4Compressor> {
    /// Creates a codec backed by the default LZ4 block compressor.
    #[must_use]
    pub fn new() -> Self {
        IntegerCompression::with_compressor(Lz4Compressor::new())
    }
}

impl Default for IntegerCompression<Lz4Compressor> {
    fn default() -> Self {
        IntegerCompression::new()
    }
}

impl<C: ByteStreamCompressor> IntegerCompression<C> {
    /// Creates a codec over a caller-chosen byte-stream compressor.
    ///
    /// The stage-2 choice does not affect the intermediate format.
    pub fn with_compressor(compressor: C) -> Self {
        IntegerCompression { compressor }
    }

    /// Worst-case compressed size for a list of `num_ints` integers.
    ///
    /// Safe to use for allocating the output of
    /// [`compress_to_buffer`](Self::compress_to_buffer).
    #[must_use]
    pub fn compressed_buffer_size(&self, num_ints: usize) -> usize {
        self.compressor
            .bound_for(delta_mode::encoded_buffer_size(num_ints))
    }

    /// Scratch size needed to decompress a list of `num_ints` integers.
    #[must_use]
    pub fn decompression_working_space_size(&self, num_ints: usize) -> usize {
        delta_mode::encoded_buffer_size(num_ints)
    }

    /// Delta-codes `ints` into an internal scratch buffer, compresses the
    /// result into `compressed`, and returns the compressed size.
    ///
    /// `compressed` must hold at least
    /// [`compressed_buffer_size`](Self::compressed_buffer_size) bytes for
    /// the input length. An empty input compresses to zero bytes.
    pub fn compress_to_buffer<W: Word32>(
        &self,
        ints: &[W],
        compressed: &mut [u8],
    ) -> DeltaPackResult<usize> {
        if ints.is_empty() {
            return Ok(0);
        }
        let mut scratch = vec![0u8; delta_mode::encoded_buffer_size(ints.len())];
        let encoded_size = delta_mode::encode_integers(ints, &mut scratch)?;
        self.compressor
            .compress_to_buffer(&scratch[..encoded_size], compressed)
    }

    /// Decompresses `ints.len()` integers out of `compressed`, returning
    /// the element count on success.
    ///
    /// `working_space` may borrow a caller-owned scratch buffer of at
    /// least [`decompression_working_space_size`](Self::decompression_working_space_size)
    /// bytes; otherwise a temporary is allocated for the call. Two
    /// concurrent calls must not share one working buffer.
    pub fn decompress_from_buffer<W: Word32>(
        &self,
        compressed: &[u8],
        ints: &mut [W],
        working_space: Option<&mut [u8]>,
    ) -> DeltaPackResult<usize> {
        if ints.is_empty() {
            return Ok(0);
        }
        let needed = self.decompression_working_space_size(ints.len());
        let mut owned;
        let scratch: &mut [u8] = match working_space {
            Some(space) => {
                if space.len() < needed {
                    return Err(DeltaPackError::WorkingSpaceTooSmall);
                }
                &mut space[..needed]
            }
            None => {
                owned = vec![0u8; needed];
                &mut owned
            }
        };
        let encoded_size = self
            .compressor
            .decompress_from_buffer(compressed, scratch)?;
        delta_mode::decode_integers(&scratch[..encoded_size], ints)
    }

    /// Compresses into a freshly allocated buffer sized to the actual
    /// output.
    pub fn compress<W: Word32>(&self, ints: &[W]) -> DeltaPackResult<Vec<u8>> {
        let mut compressed = vec![0u8; self.compressed_buffer_size(ints.len())];
        let size = self.compress_to_buffer(ints, &mut compressed)?;
        compressed.truncate(size);
        Ok(compressed)
    }

    /// Decompresses `num_ints` integers into a freshly allocated vector.
    pub fn decompress<W: Word32>(
        &self,
        compressed: &[u8],
        num_ints: usize,
    ) -> DeltaPackResult<Vec<W>> {
        let mut ints = vec![W::from_signed(0); num_ints];
        self.decompress_from_buffer(compressed, &mut ints, None)?;
        Ok(ints)
    }
}

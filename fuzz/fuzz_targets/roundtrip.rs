#![no_main]

use deltapack::IntegerCompression;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|(as_signed, input_data): (bool, Vec<u32>)| {
    // Limit input size to avoid timeouts
    let input_data: Vec<u32> = input_data.into_iter().take(100_000).collect();

    let codec = IntegerCompression::new();
    let mut compressed = vec![0u8; codec.compressed_buffer_size(input_data.len())];

    if as_signed {
        let input: Vec<i32> = input_data.iter().map(|&v| v as i32).collect();
        let compressed_size = codec
            .compress_to_buffer(&input, &mut compressed)
            .expect("Buffer sized by the contract, so compression must succeed");

        let mut decoded = vec![0i32; input.len()];
        let count = codec
            .decompress_from_buffer(&compressed[..compressed_size], &mut decoded, None)
            .expect("If we can compress it, we can decompress it");

        assert_eq!(input.len(), count, "Decompressed length mismatch");
        assert_eq!(input, decoded, "Decompressed data mismatch");
    } else {
        let compressed_size = codec
            .compress_to_buffer(&input_data, &mut compressed)
            .expect("Buffer sized by the contract, so compression must succeed");

        let mut decoded = vec![0u32; input_data.len()];
        let count = codec
            .decompress_from_buffer(&compressed[..compressed_size], &mut decoded, None)
            .expect("If we can compress it, we can decompress it");

        assert_eq!(input_data.len(), count, "Decompressed length mismatch");
        assert_eq!(input_data, decoded, "Decompressed data mismatch");
    }
});

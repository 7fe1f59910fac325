#![no_main]

use deltapack::{decode_integers, IntegerCompression};
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes presented as a compressed stream, and separately as an
// intermediate buffer, with an unrelated element count. Both layers must
// fail cleanly or produce garbage; neither may panic.
fuzz_target!(|(num_ints, data): (u16, Vec<u8>)| {
    let num_ints = num_ints as usize;
    let codec = IntegerCompression::new();

    let mut decoded = vec![0u32; num_ints];
    let _ = codec.decompress_from_buffer(&data, &mut decoded, None);

    let mut decoded = vec![0i32; num_ints];
    let _ = decode_integers(&data, &mut decoded);
});

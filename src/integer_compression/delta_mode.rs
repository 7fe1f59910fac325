//! Delta + variable-width coding for 32-bit integer lists.
//!
//! The input is transformed into consecutive differences (the first element
//! differenced against zero), computed in signed space with wrapping
//! arithmetic. The encoded buffer then holds:
//!
//! ```text
//! [ most common delta : i32, little-endian ]
//! [ 2-bit mode codes  : one per element, packed 4 per byte, LSB first ]
//! [ payload           : non-common deltas at 1, 2, or 4 bytes each ]
//! ```
//!
//! A delta equal to the most common one costs nothing beyond its 2-bit
//! code, so index lists dominated by a single step size shrink to a
//! quarter byte per element before the byte-stream stage even runs. The
//! element count is never written; callers carry it out of band.

use std::cmp::Reverse;
use std::collections::HashMap;

use bytes::{Buf as _, BufMut as _};

use crate::error::{DeltaPackError, DeltaPackResult};
use crate::integer_compression::word::Word32;

/// Bytes taken by the common-delta header.
const COMMON_VALUE_BYTES: usize = 4;

/// Two-bit classification of a single delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Delta equals the most common delta; no payload.
    Common = 0,
    /// Delta fits a signed 8-bit payload byte.
    One = 1,
    /// Delta fits a signed 16-bit payload, little-endian.
    Two = 2,
    /// Delta needs the full signed 32-bit payload, little-endian.
    Four = 3,
}

impl Mode {
    /// Picks the tightest mode for `delta`. A delta equal to the common
    /// value always classifies as `Common`, even when a narrower width
    /// would hold it; the decoder depends on that priority.
    fn classify(delta: i32, common_value: i32) -> Mode {
        if delta == common_value {
            Mode::Common
        } else if i8::try_from(delta).is_ok() {
            Mode::One
        } else if i16::try_from(delta).is_ok() {
            Mode::Two
        } else {
            Mode::Four
        }
    }

    fn from_bits(bits: u8) -> Mode {
        match bits & 0b11 {
            0 => Mode::Common,
            1 => Mode::One,
            2 => Mode::Two,
            _ => Mode::Four,
        }
    }

    fn payload_bytes(self) -> usize {
        match self {
            Mode::Common => 0,
            Mode::One => 1,
            Mode::Two => 2,
            Mode::Four => 4,
        }
    }
}

/// Number of code bytes for `num_ints` elements (2 bits each, packed).
const fn code_bytes(num_ints: usize) -> usize {
    num_ints.div_ceil(4)
}

/// Worst-case encoded size for a list of `num_ints` integers.
///
/// This is the buffer size [`encode_integers`] requires: header plus code
/// bytes plus four payload bytes per element. The actual encoded size is
/// usually far smaller.
#[must_use]
pub const fn encoded_buffer_size(num_ints: usize) -> usize {
    if num_ints == 0 {
        0
    } else {
        COMMON_VALUE_BYTES + code_bytes(num_ints) + num_ints * 4
    }
}

/// Most frequent delta of the sequence. Ties resolve to the smallest
/// delta so the encoder output is stable across runs.
fn most_common_delta<W: Word32>(input: &[W]) -> i32 {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    let mut prev_val = 0i32;
    for &word in input {
        let delta = word.to_signed().wrapping_sub(prev_val);
        *counts.entry(delta).or_insert(0) += 1;
        prev_val = word.to_signed();
    }
    counts
        .into_iter()
        .max_by_key(|&(delta, count)| (count, Reverse(delta)))
        .map_or(0, |(delta, _)| delta)
}

/// Delta-codes `input` into `output`, returning the number of bytes
/// written.
///
/// `output` must hold at least [`encoded_buffer_size`] bytes for the
/// input length. An empty input writes nothing and returns 0.
pub fn encode_integers<W: Word32>(input: &[W], output: &mut [u8]) -> DeltaPackResult<usize> {
    if input.is_empty() {
        return Ok(0);
    }
    if output.len() < encoded_buffer_size(input.len()) {
        return Err(DeltaPackError::OutputBufferTooSmall);
    }

    let common_value = most_common_delta(input);

    let (header, rest) = output.split_at_mut(COMMON_VALUE_BYTES);
    header.copy_from_slice(&common_value.to_le_bytes());
    let (codes, payload) = rest.split_at_mut(code_bytes(input.len()));

    let payload_capacity = payload.len();
    let mut payload: &mut [u8] = payload;
    let mut prev_val = 0i32;
    // One code byte per block of up to four elements; `chunks` leaves the
    // 1-3 element tail as a final partial block.
    for (code_byte, block) in codes.iter_mut().zip(input.chunks(4)) {
        let mut packed = 0u8;
        for (slot, &word) in block.iter().enumerate() {
            let delta = word.to_signed().wrapping_sub(prev_val);
            prev_val = word.to_signed();
            let mode = Mode::classify(delta, common_value);
            packed |= (mode as u8) << (2 * slot);
            match mode {
                Mode::Common => {}
                Mode::One => payload.put_i8(delta as i8),
                Mode::Two => payload.put_i16_le(delta as i16),
                Mode::Four => payload.put_i32_le(delta),
            }
        }
        *code_byte = packed;
    }

    let payload_len = payload_capacity - payload.len();
    Ok(COMMON_VALUE_BYTES + code_bytes(input.len()) + payload_len)
}

/// Reconstructs `output.len()` integers from a buffer produced by
/// [`encode_integers`], returning the element count on success.
///
/// The element count bounds every read: trailing bytes beyond the
/// payload, and unused high bits in the final code byte, are ignored.
/// Corruption is not detected here beyond the buffer running short;
/// integrity belongs to the enclosing container.
pub fn decode_integers<W: Word32>(data: &[u8], output: &mut [W]) -> DeltaPackResult<usize> {
    let num_ints = output.len();
    if num_ints == 0 {
        return Ok(0);
    }
    if data.len() < COMMON_VALUE_BYTES + code_bytes(num_ints) {
        return Err(DeltaPackError::NotEnoughData);
    }

    let mut reader: &[u8] = data;
    let common_value = reader.get_i32_le();
    let (codes, mut payload) = reader.split_at(code_bytes(num_ints));

    let mut prev_val = 0i32;
    for (block, &code_byte) in output.chunks_mut(4).zip(codes) {
        for (slot, word) in block.iter_mut().enumerate() {
            let mode = Mode::from_bits(code_byte >> (2 * slot));
            if payload.remaining() < mode.payload_bytes() {
                return Err(DeltaPackError::NotEnoughData);
            }
            let delta = match mode {
                Mode::Common => common_value,
                Mode::One => i32::from(payload.get_i8()),
                Mode::Two => i32::from(payload.get_i16_le()),
                Mode::Four => payload.get_i32_le(),
            };
            prev_val = prev_val.wrapping_add(delta);
            *word = W::from_signed(prev_val);
        }
    }

    Ok(num_ints)
}

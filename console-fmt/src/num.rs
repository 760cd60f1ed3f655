// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::sink::{emit_bytes, Sink};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Widest conversion handled here: a 64 bit magnitude is 16 hex digits, and
/// a 32 bit decimal magnitude is at most 10 digits.
const BUF_LEN: usize = 16;

/// Format `v` as signed decimal and write it to the sink.
///
/// Returns the number of bytes written.
pub fn emit_int<S: Sink>(sink: &mut S, v: i32) -> usize {
    if v == 0 {
        sink.put(b'0');
        return 1;
    }

    let mut count = 0;
    if v < 0 {
        sink.put(b'-');
        count += 1;
    }

    // unsigned_abs keeps i32::MIN in range instead of overflowing on
    // negation
    let mut m = v.unsigned_abs();
    let mut buf = [0u8; BUF_LEN];
    let mut pos = buf.len();
    while m != 0 {
        pos -= 1;
        buf[pos] = b'0' + (m % 10) as u8;
        m /= 10;
    }

    count + emit_bytes(sink, &buf[pos..])
}

/// Format `v` as lowercase hexadecimal and write it to the sink.
///
/// Negative values print as a sign followed by the hex digits of the
/// magnitude, not as a two's-complement bit pattern. `width` is clamped to
/// `[0, 16]` and zero-pads the magnitude digits only, after any sign.
///
/// Returns the number of bytes written.
pub fn emit_hex<S: Sink>(sink: &mut S, v: i64, width: usize) -> usize {
    let mut count = 0;
    if v < 0 {
        sink.put(b'-');
        count += 1;
    }
    count + emit_hex_magnitude(sink, v.unsigned_abs(), width)
}

/// Hex digits of an unsigned magnitude, zero padded to `width`.
pub(crate) fn emit_hex_magnitude<S: Sink>(sink: &mut S, m: u64, width: usize) -> usize {
    let width = width.min(BUF_LEN);

    let mut buf = [0u8; BUF_LEN];
    let mut pos = buf.len();
    let mut m = m;
    while m != 0 {
        pos -= 1;
        buf[pos] = HEX_DIGITS[(m & 0xf) as usize];
        m >>= 4;
    }
    // zero has no natural digits; the pad loop also covers the unpadded "0"
    while buf.len() - pos < width.max(1) {
        pos -= 1;
        buf[pos] = b'0';
    }

    emit_bytes(sink, &buf[pos..])
}

// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use console_hal::char_port::CharPort;

/// Destination for individual output bytes.
///
/// The formatter is written against this trait rather than against the
/// memory mapped console directly, so any byte consumer can stand in for the
/// device.
pub trait Sink {
    /// Write a single byte to the destination.
    fn put(&mut self, byte: u8);
}

impl Sink for CharPort {
    fn put(&mut self, byte: u8) {
        self.send(byte);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put(&mut self, byte: u8) {
        (**self).put(byte);
    }
}

/// Capture sink. Bytes past the capacity are dropped.
impl<const N: usize> Sink for heapless::Vec<u8, N> {
    fn put(&mut self, byte: u8) {
        let _ = self.push(byte);
    }
}

/// Write every byte of `s` to the sink, in order.
///
/// Returns the number of bytes written.
pub fn emit_str<S: Sink>(sink: &mut S, s: &str) -> usize {
    emit_bytes(sink, s.as_bytes())
}

pub(crate) fn emit_bytes<S: Sink>(sink: &mut S, bytes: &[u8]) -> usize {
    for &b in bytes {
        sink.put(b);
    }
    bytes.len()
}

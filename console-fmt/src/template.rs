// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::num::{emit_hex, emit_hex_magnitude, emit_int};
use crate::sink::{emit_str, Sink};

/// One formatter argument.
///
/// Each specifier names the variant it expects; on a mismatch the specifier
/// is echoed literally instead of reinterpreting the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Consumed by `%d` and `%x`.
    Int(i32),
    /// Consumed by `%s`.
    Str(&'a str),
    /// Consumed by `%p`.
    Ptr(usize),
}

impl Arg<'_> {
    /// Wrap a raw pointer's address for `%p`.
    pub fn ptr<T>(p: *const T) -> Arg<'static> {
        Arg::Ptr(p as usize)
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Int(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

/// Interpret `template`, writing literal text and converted arguments to the
/// sink.
///
/// Specifiers are `%d` (signed decimal), `%x` (lowercase hex, unpadded),
/// `%p` (`0x` plus 16 zero padded hex digits) and `%s` (string). A trailing
/// lone `%` prints as `%`; any other `%` pair prints as itself and consumes
/// no argument. Arguments are consumed left to right, one per recognized
/// specifier; a missing or mismatched argument degrades to the literal
/// specifier text.
///
/// Returns the number of bytes written, which equals the number of bytes
/// handed to the sink for every input.
pub fn format<S: Sink>(sink: &mut S, template: &str, args: &[Arg]) -> usize {
    let bytes = template.as_bytes();
    let mut args = args.iter();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            sink.put(b);
            count += 1;
            i += 1;
            continue;
        }

        let Some(&spec) = bytes.get(i + 1) else {
            // template ends on a lone `%`
            sink.put(b'%');
            count += 1;
            break;
        };

        count += match spec {
            b'd' | b'x' | b'p' | b's' => match (spec, args.next()) {
                (b'd', Some(&Arg::Int(v))) => emit_int(sink, v),
                (b'x', Some(&Arg::Int(v))) => emit_hex(sink, v as i64, 0),
                (b'p', Some(&Arg::Ptr(p))) => {
                    emit_str(sink, "0x") + emit_hex_magnitude(sink, p as u64, 16)
                }
                (b's', Some(&Arg::Str(s))) => emit_str(sink, s),
                // missing argument, or one of the wrong type
                _ => {
                    sink.put(b'%');
                    sink.put(spec);
                    2
                }
            },
            _ => {
                sink.put(b'%');
                sink.put(spec);
                2
            }
        };
        i += 2;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(template: &str, args: &[Arg]) -> (heapless::Vec<u8, 64>, usize) {
        let mut out = heapless::Vec::new();
        let n = format(&mut out, template, args);
        (out, n)
    }

    #[test]
    fn literal_text_passes_through() {
        let (out, n) = run("Hello, World!\n", &[]);
        assert_eq!(&out[..], b"Hello, World!\n");
        assert_eq!(n, 14);
    }

    #[test]
    fn decimal_specifiers() {
        let (out, n) = run("%d + %d = %d", &[Arg::Int(1), Arg::Int(2), Arg::Int(3)]);
        assert_eq!(&out[..], b"1 + 2 = 3");
        assert_eq!(n, 9);
    }

    #[test]
    fn string_specifiers() {
        let (out, n) = run("%s, %s!", &[Arg::Str("Hello"), Arg::Str("World")]);
        assert_eq!(&out[..], b"Hello, World!");
        assert_eq!(n, 13);
    }

    #[test]
    fn hex_specifier_is_unpadded() {
        let (out, n) = run("%x", &[Arg::Int(255)]);
        assert_eq!(&out[..], b"ff");
        assert_eq!(n, 2);
    }

    #[test]
    fn hex_specifier_negative() {
        let (out, n) = run("%x", &[Arg::Int(-255)]);
        assert_eq!(&out[..], b"-ff");
        assert_eq!(n, 3);
    }

    #[test]
    fn pointer_specifier_pads_to_full_width() {
        let (out, n) = run("%p", &[Arg::Ptr(0xdead_beef)]);
        assert_eq!(&out[..], b"0x00000000deadbeef");
        assert_eq!(n, 18);
    }

    #[test]
    fn null_pointer_pads_to_full_width() {
        let (out, n) = run("%p", &[Arg::Ptr(0)]);
        assert_eq!(&out[..], b"0x0000000000000000");
        assert_eq!(n, 18);
    }

    #[test]
    fn trailing_lone_percent() {
        let (out, n) = run("100%", &[]);
        assert_eq!(&out[..], b"100%");
        assert_eq!(n, 4);
    }

    #[test]
    fn unknown_specifier_echoes_literally() {
        let (out, n) = run("%z", &[]);
        assert_eq!(&out[..], b"%z");
        assert_eq!(n, 2);
    }

    #[test]
    fn unknown_specifier_consumes_no_argument() {
        let (out, n) = run("%z%d", &[Arg::Int(7)]);
        assert_eq!(&out[..], b"%z7");
        assert_eq!(n, 3);
    }

    #[test]
    fn mismatched_argument_echoes_and_advances() {
        // the first %d consumes the string argument, leaving %s without one
        let (out, n) = run("%d%s", &[Arg::Str("a")]);
        assert_eq!(&out[..], b"%d%s");
        assert_eq!(n, 4);
    }

    #[test]
    fn missing_argument_echoes_literally() {
        let (out, n) = run("%d", &[]);
        assert_eq!(&out[..], b"%d");
        assert_eq!(n, 2);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let args = [Arg::Int(42), Arg::Str("x")];
        let (first, n1) = run("%d-%s-%p", &args);
        let (second, n2) = run("%d-%s-%p", &args);
        assert_eq!(first, second);
        assert_eq!(n1, n2);
    }

    #[test]
    fn conversions_from_native_types() {
        assert_eq!(Arg::from(3), Arg::Int(3));
        assert_eq!(Arg::from("s"), Arg::Str("s"));
        let x = 0u8;
        assert_eq!(Arg::ptr(&x), Arg::Ptr(&x as *const u8 as usize));
    }
}

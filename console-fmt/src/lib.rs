// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/*! A printf-style formatter for memory mapped console ports.

The format template mini-language supports `%d` (signed decimal), `%x`
(lowercase hexadecimal), `%p` (pointer, `0x` plus 16 zero padded hex digits)
and `%s` (string). Anything else passes through literally. All output goes
through the [`Sink`] trait, so the formatter runs against the real device and
against in-memory buffers alike.

 - [`Sink`] is the destination for individual output bytes.
 - [`emit_str`], [`emit_int`] and [`emit_hex`] are the individual converters.
 - [`format`] interprets a template against a typed [`Arg`] list.
*/

#![no_std]

pub mod num;
pub mod sink;
pub mod template;

pub use num::{emit_hex, emit_int};
pub use sink::{emit_str, Sink};
pub use template::{format, Arg};

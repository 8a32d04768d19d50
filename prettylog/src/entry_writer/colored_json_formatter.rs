// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BasicColor, SgrCode, sizing::InlineVecSgrCodes};
use serde_json::ser::{Formatter, PrettyFormatter};
use smallvec::smallvec;
use std::io::{self, Write};

/// Colors used by [`ColoredJsonFormatter`]. Empty lists leave that kind of token
/// unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStyle {
    pub key: InlineVecSgrCodes,
    pub string: InlineVecSgrCodes,
    pub number: InlineVecSgrCodes,
    pub boolean: InlineVecSgrCodes,
    pub null: InlineVecSgrCodes,
}

impl JsonStyle {
    /// Bright blue bold keys, green strings, yellow numbers, cyan booleans, dim null.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            key: smallvec![SgrCode::Bold, SgrCode::ForegroundBright(BasicColor::Blue)],
            string: smallvec![SgrCode::Foreground(BasicColor::Green)],
            number: smallvec![SgrCode::Foreground(BasicColor::Yellow)],
            boolean: smallvec![SgrCode::Foreground(BasicColor::Cyan)],
            null: smallvec![SgrCode::Dim],
        }
    }
}

impl Default for JsonStyle {
    fn default() -> Self { Self::terminal() }
}

/// A [`PrettyFormatter`] that wraps scalar tokens in ANSI escape sequences. Structure
/// (braces, commas, indentation) is left to the inner formatter and stays unstyled.
pub struct ColoredJsonFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    style: &'a JsonStyle,
    in_key: bool,
}

impl std::fmt::Debug for ColoredJsonFormatter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColoredJsonFormatter")
            .field("style", &self.style)
            .field("in_key", &self.in_key)
            .finish_non_exhaustive()
    }
}

impl<'a> ColoredJsonFormatter<'a> {
    #[must_use]
    pub fn new(indent: &'a [u8], style: &'a JsonStyle) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(indent),
            style,
            in_key: false,
        }
    }
}

fn start_style<W: ?Sized + Write>(writer: &mut W, codes: &[SgrCode]) -> io::Result<()> {
    for code in codes {
        write!(writer, "{code}")?;
    }
    Ok(())
}

fn end_style<W: ?Sized + Write>(writer: &mut W, codes: &[SgrCode]) -> io::Result<()> {
    if codes.is_empty() {
        return Ok(());
    }
    write!(writer, "{}", SgrCode::Reset)
}

macro_rules! styled_number {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<W: ?Sized + Write>(&mut self, writer: &mut W, value: $ty) -> io::Result<()> {
                start_style(writer, &self.style.number)?;
                self.pretty.$method(writer, value)?;
                end_style(writer, &self.style.number)
            }
        )*
    };
}

impl Formatter for ColoredJsonFormatter<'_> {
    fn write_null<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        start_style(writer, &self.style.null)?;
        self.pretty.write_null(writer)?;
        end_style(writer, &self.style.null)
    }

    fn write_bool<W: ?Sized + Write>(&mut self, writer: &mut W, value: bool) -> io::Result<()> {
        start_style(writer, &self.style.boolean)?;
        self.pretty.write_bool(writer, value)?;
        end_style(writer, &self.style.boolean)
    }

    styled_number! {
        write_i8: i8, write_i16: i16, write_i32: i32, write_i64: i64, write_i128: i128,
        write_u8: u8, write_u16: u16, write_u32: u32, write_u64: u64, write_u128: u128,
        write_f32: f32, write_f64: f64, write_number_str: &str,
    }

    fn begin_string<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        let codes = if self.in_key { &self.style.key } else { &self.style.string };
        start_style(writer, codes)?;
        self.pretty.begin_string(writer)
    }

    fn end_string<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_string(writer)?;
        let codes = if self.in_key { &self.style.key } else { &self.style.string };
        end_style(writer, codes)
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.in_key = true;
        self.pretty.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.in_key = false;
        self.pretty.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

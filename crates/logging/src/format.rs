//! crates/logging/src/format.rs
//! Operand rendering for the plain and line formatting strategies.

use std::fmt::{self, Write as _};

use crate::line_mode::LineMode;

/// A single operand passed to the plain or line logging entry points.
///
/// Strings are distinguished from every other kind of operand because the
/// plain strategy only separates two neighbours with a space when neither of
/// them is a string. Values are usually built through `From`, most
/// conveniently with the [`args!`](crate::args) macro.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// Borrowed string operand.
    Str(&'a str),
    /// Signed integer operand.
    Int(i64),
    /// Unsigned integer operand.
    Uint(u64),
    /// Floating point operand.
    Float(f64),
    /// Boolean operand.
    Bool(bool),
    /// Character operand.
    Char(char),
    /// Any other displayable value.
    Display(&'a dyn fmt::Display),
}

impl Arg<'_> {
    /// Returns `true` for string operands.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Uint(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::Display(v) => v.fmt(f),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

arg_from!(Int as i64: i8, i16, i32, i64);
arg_from!(Uint as u64: u8, u16, u32, u64);
arg_from!(Float as f64: f32, f64);
arg_from!(Bool as bool: bool);
arg_from!(Char as char: char);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

/// Renders `args` into a message body using the given [`LineMode`].
///
/// - [`LineMode::WithoutNewline`] concatenates the operands, inserting a space
///   only between neighbours that are both non-strings.
/// - [`LineMode::WithNewline`] separates every operand with a space and ends
///   the body with a newline.
///
/// ```
/// use bitlog::{LineMode, args, render_args};
///
/// assert_eq!(render_args(args!["a", 1, 2, "b"], LineMode::WithoutNewline), "a1 2b");
/// assert_eq!(render_args(args!["a", 1, 2, "b"], LineMode::WithNewline), "a 1 2 b\n");
/// ```
#[must_use]
pub fn render_args(args: &[Arg<'_>], line_mode: LineMode) -> String {
    let mut body = String::new();
    let mut previous: Option<&Arg<'_>> = None;
    for arg in args {
        if let Some(previous) = previous {
            let spaced = line_mode.append_newline() || !(previous.is_string() || arg.is_string());
            if spaced {
                body.push(' ');
            }
        }
        // Writing into a String cannot fail.
        let _ = write!(body, "{arg}");
        previous = Some(arg);
    }
    if line_mode.append_newline() {
        body.push('\n');
    }
    body
}

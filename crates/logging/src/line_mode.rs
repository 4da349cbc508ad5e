/// Selects between the plain and line formatting strategies for operand lists.
///
/// Both strategies render a list of [`Arg`](crate::Arg) operands into a
/// message body; the logger always terminates the written line with its own
/// newline afterwards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineMode {
    /// Line strategy: every operand is space separated and the body ends with
    /// a newline. Because the logger appends its own terminator, lines written
    /// this way are followed by a blank line.
    WithNewline,
    /// Plain strategy: operands are concatenated, with a space only between
    /// two neighbouring non-string operands.
    #[default]
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the body rendered in this mode ends with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitlog::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`], `false` selects
    /// [`LineMode::WithoutNewline`].
    ///
    /// ```
    /// use bitlog::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;

use super::LineMode;
use crate::{Arg, render_args};

#[test]
fn plain_strategy_is_the_default() {
    assert_eq!(LineMode::default(), LineMode::WithoutNewline);
    assert!(!bool::from(LineMode::default()));
}

#[test]
fn bool_selects_the_strategy() {
    for append in [true, false] {
        let mode = LineMode::from(append);
        assert_eq!(mode.append_newline(), append);
        assert_eq!(bool::from(mode), append);
    }
}

#[test]
fn mode_decides_the_body_terminator() {
    let args = [Arg::from("x")];
    assert!(render_args(&args, LineMode::WithNewline).ends_with('\n'));
    assert!(!render_args(&args, LineMode::WithoutNewline).ends_with('\n'));
}

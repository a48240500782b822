//! Utilities for printing and everything related to "UI".

use term_painter::{Color, Style, ToStyle};


/// The kinds of messages the tool prints. Mostly relevant for styling.
pub enum MsgKind {
    Info,
    Error,
}

impl MsgKind {
    pub fn icon_style(&self) -> Style {
        match self {
            MsgKind::Info => Color::Blue.bold(),
            MsgKind::Error => Color::Red.bold(),
        }
    }
}

/// Prints a message with a `[i]` icon to stdout.
macro_rules! info {
    () => { println!() };
    ($($args:tt)+) => {{
        use term_painter::ToStyle;

        crate::ui::MsgKind::Info.icon_style().with(|| print!("[i] "));
        println!($($args)+);
    }};
}

/// Prints a message with a `[!]` icon to stderr. Errors always go to the
/// error stream so they survive piping stdout away.
macro_rules! error {
    () => { eprintln!() };
    ($($args:tt)+) => {{
        use term_painter::ToStyle;

        crate::ui::MsgKind::Error.icon_style().with(|| eprint!("[!] "));
        eprintln!($($args)+);
    }};
}

//! # Legacy Slash Syntax
//!
//! Earlier releases of the tool took DOS-style switches (`/S`, `/T`, `/V`,
//! `/?`, `/I FILE`, `/O FILE`, `/Q`). [`normalize_args`] rewrites them into
//! the clap surface before parsing, so old scripts keep working:
//!
//! ```text
//! dgst /S /I data.bin /Q    ==>    dgst hash --input data.bin --quiet
//! ```
//!
//! Switches match case-insensitively. Anything else passes through as-is,
//! which keeps absolute paths such as `/tmp/x` intact.

use std::ffi::OsString;

/// A recognized legacy switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
    Command(&'static str),
    Flag(&'static str),
    /// Option that consumes the following argument.
    Valued(&'static str),
}

fn classify(arg: &str) -> Option<Switch> {
    let switch = match arg.to_ascii_lowercase().as_str() {
        "/s" => Switch::Command("hash"),
        "/t" => Switch::Command("test"),
        "/v" => Switch::Command("version"),
        "/?" => Switch::Command("help"),
        "/q" => Switch::Flag("--quiet"),
        "/i" => Switch::Valued("--input"),
        "/o" => Switch::Valued("--output"),
        _ => return None,
    };
    Some(switch)
}

fn is_switch(arg: &OsString) -> bool {
    arg.to_str().and_then(classify).is_some()
}

/// Result of [`normalize_args`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    /// Argument vector ready for clap.
    pub args: Vec<OsString>,
    /// Modern names of legacy options dropped for lack of a value, in order.
    pub ignored: Vec<&'static str>,
}

/// Translate legacy switches in a full argv (program name first).
///
/// `/I` and `/O` take the next argument as their value unless it is itself
/// a legacy switch or missing, in which case the option is dropped, recorded
/// in [`NormalizedArgs::ignored`], and the default stream is used. Nothing is
/// logged here since this runs before the subscriber is installed.
pub fn normalize_args<I, S>(args: I) -> NormalizedArgs
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut out = NormalizedArgs::default();

    if let Some(program) = args.next() {
        out.args.push(program);
    }

    while let Some(arg) = args.next() {
        match arg.to_str().and_then(classify) {
            Some(Switch::Command(name)) | Some(Switch::Flag(name)) => out.args.push(name.into()),
            Some(Switch::Valued(name)) => match args.peek() {
                Some(value) if !is_switch(value) => {
                    out.args.push(name.into());
                    if let Some(value) = args.next() {
                        out.args.push(value);
                    }
                }
                _ => out.ignored.push(name),
            },
            None => out.args.push(arg),
        }
    }

    out
}

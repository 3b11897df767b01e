use crate::error::ArgError;
use std::borrow::Cow;
use std::ffi::OsString;

/// Runtime settings for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Seconds to sleep after printing. Zero or negative means no sleep.
    pub sleep_seconds: i32,
    /// Exit status. Zero means normal termination.
    pub exit_code: i32,
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// `-h` or `-?` was seen; nothing else takes effect.
    Help,
    /// Normal run, along with any malformed arguments that were skipped.
    Run {
        options: Options,
        diagnostics: Vec<ArgError>,
    },
}

/// Parses the command-line arguments (without the program name) the way
/// getopt does with the option string `s:x:h?`:
///
/// - Flags may be clustered (`-hs3`). A flag that takes a value consumes the
///   rest of its cluster (`-s3`) or, failing that, the next argument verbatim.
/// - `--` ends option parsing. Operands are skipped and scanning continues.
/// - Unknown flags are ignored.
///
/// Arguments need not be valid UTF-8; invalid bytes are replaced before
/// matching, so such operands and flags are skipped like any other.
///
/// Malformed `-s`/`-x` values are collected as diagnostics and leave the
/// previous value in place. Help returns immediately, dropping diagnostics.
pub fn parse_args(args: &[OsString]) -> Invocation {
    let mut options = Options::default();
    let mut diagnostics = Vec::new();
    let mut iter = args.iter().map(|arg| arg.to_string_lossy());

    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }
        let cluster = match arg.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => continue,
        };

        for (i, flag) in cluster.char_indices() {
            match flag {
                'h' | '?' => return Invocation::Help,
                's' | 'x' => {
                    let attached = &cluster[i + flag.len_utf8()..];
                    let value = if attached.is_empty() {
                        iter.next()
                    } else {
                        Some(Cow::Borrowed(attached))
                    };
                    match value.as_deref().map(|text| parse_int(flag, text)) {
                        Some(Ok(n)) if flag == 's' => options.sleep_seconds = n,
                        Some(Ok(n)) => options.exit_code = n,
                        Some(Err(err)) => diagnostics.push(err),
                        None => diagnostics.push(ArgError::MissingValue { flag }),
                    }
                    // The value ends the cluster.
                    break;
                }
                _ => {}
            }
        }
    }

    Invocation::Run {
        options,
        diagnostics,
    }
}

/// Parses a leading decimal integer the way C's `stoi` does: leading ASCII
/// whitespace and a single sign are accepted, trailing characters after the
/// digits are ignored.
pub fn parse_int(flag: char, text: &str) -> Result<i32, ArgError> {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    if digits == 0 {
        return Err(ArgError::InvalidInteger {
            flag,
            value: text.to_string(),
        });
    }

    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits]
        .parse::<i32>()
        .map_err(|_| ArgError::OutOfRange {
            flag,
            value: text.to_string(),
        })
}

//! Positional message formatting
//!
//! Messages passed to `OperationScope::log_information` with arguments are
//! composite templates: `{0}` is replaced by the first argument, `{1}` by the
//! second, and so on.
//!
//! Supported placeholder forms:
//! - `{N}` - Display of argument N
//! - `{N,W}` / `{N,-W}` - right / left aligned to width W
//! - `{N:fmt}` - the format suffix is accepted and ignored
//! - `{{` and `}}` - literal braces
//!
//! Anything malformed, including widths above 65535, and indices past the
//! end of `args`, are copied to the output verbatim. Formatting never fails.

use std::fmt::{self, Write};

/// Substitute positional arguments into `template`
///
/// # Example
///
/// ```
/// use opscope::format::format_positional;
///
/// assert_eq!(format_positional("{0}-{1}", &[&"a", &"b"]), "a-b");
/// assert_eq!(format_positional("[{0,4}]", &[&7]), "[   7]");
/// assert_eq!(format_positional("{{literal}}", &[]), "{literal}");
/// ```
pub fn format_positional(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        // tail starts with a single '{'
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let body = &tail[1..close];
        match Placeholder::parse(body).and_then(|p| args.get(p.index).map(|arg| (p, arg))) {
            Some((placeholder, arg)) => placeholder.write(&mut out, *arg),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, PartialEq, Eq)]
struct Placeholder {
    index: usize,
    align: Option<isize>,
}

impl Placeholder {
    fn parse(body: &str) -> Option<Self> {
        let body = match body.split_once(':') {
            Some((head, _format)) => head,
            None => body,
        };
        let (index, align) = match body.split_once(',') {
            Some((index, align)) => (index, Some(align.trim().parse::<isize>().ok()?)),
            None => (body, None),
        };
        // std formatting panics on widths past u16::MAX
        if align.is_some_and(|w| w.unsigned_abs() > MAX_WIDTH) {
            return None;
        }
        let index = index.trim();
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            index: index.parse().ok()?,
            align,
        })
    }

    fn write(&self, out: &mut String, arg: &dyn fmt::Display) {
        // Writing into a String cannot fail
        let _ = match self.align {
            Some(width) if width < 0 => write!(out, "{:<w$}", DisplayStr(arg), w = width.unsigned_abs()),
            Some(width) => write!(out, "{:>w$}", DisplayStr(arg), w = width.unsigned_abs()),
            None => write!(out, "{}", arg),
        };
    }
}

/// Renders through `Display` first so padding applies to the whole value
/// even when the argument's own impl ignores width flags.
struct DisplayStr<'a>(&'a dyn fmt::Display);

impl fmt::Display for DisplayStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_in_order() {
        assert_eq!(format_positional("{0}-{1}", &[&"a", &"b"]), "a-b");
        assert_eq!(format_positional("{1}{0}", &[&1, &2]), "21");
    }

    #[test]
    fn test_repeated_index() {
        assert_eq!(format_positional("{0}/{0}", &[&"x"]), "x/x");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(format_positional("[{0,5}]", &[&"ab"]), "[   ab]");
        assert_eq!(format_positional("[{0,-5}]", &[&"ab"]), "[ab   ]");
    }

    #[test]
    fn test_format_suffix_is_ignored() {
        assert_eq!(format_positional("{0:N2}", &[&3]), "3");
        assert_eq!(format_positional("[{0,3:x}]", &[&3]), "[  3]");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(format_positional("{{{0}}}", &[&"v"]), "{v}");
    }

    #[test]
    fn test_out_of_range_left_verbatim() {
        assert_eq!(format_positional("{0} {3}", &[&"a"]), "a {3}");
    }

    #[test]
    fn test_malformed_left_verbatim() {
        assert_eq!(format_positional("{name} {0", &[&"a"]), "{name} {0");
        assert_eq!(format_positional("{-1}", &[&"a"]), "{-1}");
        assert_eq!(format_positional("{0,x}", &[&"a"]), "{0,x}");
        assert_eq!(format_positional("{}", &[&"a"]), "{}");
    }

    #[test]
    fn test_oversized_width_left_verbatim() {
        assert_eq!(format_positional("[{0,70000}]", &[&"a"]), "[{0,70000}]");
        assert_eq!(
            format_positional("[{0,-9223372036854775808}]", &[&"a"]),
            "[{0,-9223372036854775808}]"
        );
        assert_eq!(format_positional("{0,65536}", &[&"a"]), "{0,65536}");
    }

    #[test]
    fn test_max_width_is_padded() {
        let out = format_positional("{0,-65535}", &[&"a"]);
        assert_eq!(out.len(), 65535);
        assert!(out.starts_with('a'));
    }

    #[test]
    fn test_stray_closing_brace() {
        assert_eq!(format_positional("a } b", &[]), "a } b");
    }

    #[test]
    fn test_placeholder_parse() {
        assert_eq!(
            Placeholder::parse("2,-3:D"),
            Some(Placeholder {
                index: 2,
                align: Some(-3)
            })
        );
        assert_eq!(Placeholder::parse("abc"), None);
    }
}

//! Shell escaping and quoting utilities.

/// Escape a value for use inside single quotes.
/// Replaces `'` with `'\''` (end quote, escaped quote, start quote).
pub fn escape_single_quote_content(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// Quote a single argument for shell execution.
/// - Empty strings become `''`
/// - Strings with shell metacharacters are wrapped in single quotes
/// - Embedded single quotes are escaped
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    const SHELL_META: &[char] = &[
        ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}',
        '<', '>', '|', '&', ';', '#', '~',
    ];

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", escape_single_quote_content(arg))
}

/// Quote a single argument for `cmd /C`.
/// - Empty strings become `""`
/// - Strings with whitespace or cmd metacharacters are wrapped in double quotes
/// - Embedded double quotes are backslash-escaped
pub fn quote_arg_cmd(arg: &str) -> String {
    if arg.is_empty() {
        return "\"\"".to_string();
    }

    const CMD_META: &[char] = &[' ', '\t', '"', '&', '|', '<', '>', '^', '(', ')', '%', '!'];

    if !arg.contains(CMD_META) {
        return arg.to_string();
    }

    format!("\"{}\"", arg.replace('"', "\\\""))
}

/// Build a command line from a program and its arguments, quoting for the
/// shell `ShellRunner` hands it to (`sh -c`, or `cmd /C` on Windows).
pub fn command_line(program: &str, args: &[&str]) -> String {
    let quote: fn(&str) -> String = if cfg!(windows) { quote_arg_cmd } else { quote_arg };

    std::iter::once(program)
        .chain(args.iter().copied())
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

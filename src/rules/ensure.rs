// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Small predicates shared by rules.

/// Check that every line of `text` is at most `max` UTF-16 code units long.
///
/// Lines end at `\n` or `\r\n`; the line terminator is not counted.
pub fn max_line_length(text: &str, max: usize) -> bool {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .all(|line| line.encode_utf16().count() <= max)
}

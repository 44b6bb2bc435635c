//! Presentation helpers for ciphertext blocks. Not part of the analysis itself.

pub const DEFAULT_GROUP_WIDTH: usize = 5;
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Greedy word wrap. Words longer than `width` are broken across lines, the
/// first piece filling whatever room is left on the current line.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut rest: Vec<char> = word.chars().collect();

        while !rest.is_empty() {
            let used = current.chars().count();
            let sep = usize::from(used > 0);

            if used + sep + rest.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(rest.drain(..));
            } else if rest.len() > width && used + sep < width {
                if sep == 1 {
                    current.push(' ');
                }
                let room = width - used - sep;
                current.extend(rest.drain(..room));
                lines.push(std::mem::take(&mut current));
            } else {
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits `text` into blocks of `group_width` characters separated by spaces,
/// then wraps the result at `line_width`.
pub fn add_spaces(text: &str, group_width: usize, line_width: usize) -> String {
    let grouped = wrap_lines(text, group_width).join(" ");
    wrap_lines(&grouped, line_width).join("\n")
}

//! Markdown building blocks

use regex::Regex;
use std::sync::OnceLock;

fn route_param_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{[^\}]+\}").expect("literal pattern compiles"))
}

/// Render `rows` as a padded Markdown table; the first row is the header
pub fn write_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let write_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (index, &width) in widths.iter().enumerate() {
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {cell:<width$} |"));
        }
        line
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (index, row) in rows.iter().enumerate() {
        lines.push(write_row(row));
        if index == 0 {
            let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
            lines.push(write_row(&separator));
        }
    }
    lines.join("\n")
}

/// Wrap `{param}` segments of a route in highlighting spans
pub fn highlight_params(path: &str) -> String {
    route_param_pattern()
        .replace_all(path, |captures: &regex::Captures<'_>| {
            format!(r#"<span class="route-param">{}</span>"#, escape_html(&captures[0]))
        })
        .into_owned()
}

/// Anchor generated for a heading
pub fn anchor(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' | '_' => Some('-'),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Make a value safe inside a table cell
pub fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Indent every non-empty line of `text` by `width` spaces
pub fn indent(text: &str, width: usize) -> String {
    let padding = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{padding}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn test_write_table() {
        let table = write_table(&[row(&["Name", "Type"]), row(&["id", "string(uuid)"])]);
        assert_eq!(
            table,
            "| Name | Type         |\n| ---- | ------------ |\n| id   | string(uuid) |"
        );
    }

    #[test]
    fn test_write_table_empty() {
        assert_eq!(write_table(&[]), "");
    }

    #[test]
    fn test_highlight_params() {
        assert_eq!(
            highlight_params("/users/{id}/roles/{role}"),
            r#"/users/<span class="route-param">{id}</span>/roles/<span class="route-param">{role}</span>"#
        );
        assert_eq!(highlight_params("/health"), "/health");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("UserInformation"), "userinformation");
        assert_eq!(anchor("Input parameters"), "input-parameters");
        assert_eq!(anchor("GET /users/{id}"), "get-usersid");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", 4), "    a\n\n    b");
    }
}

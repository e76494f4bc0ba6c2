//! Text rendering of truth tables.
//!
//! Every header name and every value is centered in its column and followed
//! by one space; the formula column comes after a separator:
//!
//! ```text
//!   q     p  	(p ^ ¬q)
//! False True 	True
//! True  True 	False
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::table::TruthTable;

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Minimum column width; columns widen to fit longer names or labels (default: 5)
    pub column_width: usize,
    /// Label for true values (default: "True")
    pub true_label: String,
    /// Label for false values (default: "False")
    pub false_label: String,
    /// Written between the proposition columns and the formula column (default: tab)
    pub separator: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            column_width: 5,
            true_label: "True".to_string(),
            false_label: "False".to_string(),
            separator: "\t".to_string(),
        }
    }
}

impl Style {
    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
        self.true_label = true_label.into();
        self.false_label = false_label.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn label(&self, value: bool) -> &str {
        if value {
            &self.true_label
        } else {
            &self.false_label
        }
    }
}

/// A table paired with a [`Style`], ready to be formatted.
pub struct Styled<'a> {
    table: &'a TruthTable,
    style: &'a Style,
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.write_to(f, self.style)
    }
}

impl TruthTable {
    pub fn styled<'a>(&'a self, style: &'a Style) -> Styled<'a> {
        Styled { table: self, style }
    }

    /// Renders the table as text, one line per row after the header line.
    pub fn render(&self, style: &Style) -> String {
        self.styled(style).to_string()
    }

    fn write_to<W: FmtWrite>(&self, out: &mut W, style: &Style) -> fmt::Result {
        let labels = style.true_label.chars().count().max(style.false_label.chars().count());
        let widths: Vec<usize> = self
            .header()
            .map(|name| style.column_width.max(name.chars().count()).max(labels))
            .collect();

        for (name, &width) in self.header().zip(&widths) {
            write!(out, "{:^width$} ", name, width = width)?;
        }
        writeln!(out, "{}{}", style.separator, self.formula())?;

        for row in self.rows() {
            for (name, &width) in self.header().zip(&widths) {
                let label = row.get(name).map(|v| style.label(v)).unwrap_or("");
                write!(out, "{:^width$} ", label, width = width)?;
            }
            writeln!(out, "{}{}", style.separator, style.label(row.value()))?;
        }
        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, &Style::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::eval::Assignment;
    use crate::parser::parse;
    use crate::table::generate_table;

    fn table(text: &str, fixed: &[(&str, bool)]) -> TruthTable {
        let fixed: Assignment = fixed.iter().map(|&(n, v)| (n.to_string(), v)).collect();
        generate_table(&parse(text).unwrap(), &fixed).unwrap()
    }

    #[test]
    fn test_render_default() {
        let t = table("¬p", &[]);
        assert_eq!(t.to_string(), "  p   \t¬p\nFalse \tTrue\nTrue  \tFalse\n");
    }

    #[test]
    fn test_render_fixed_column_last() {
        let t = table("(p ^ ¬q)", &[("p", true)]);
        let expected = concat!(
            "  q     p   \t(p ^ ¬q)\n",
            "False True  \tTrue\n",
            "True  True  \tFalse\n",
        );
        assert_eq!(t.render(&Style::default()), expected);
    }

    #[test]
    fn test_render_wide_names() {
        let t = table("(raining -> wet)", &[]);
        let first = t.to_string().lines().next().unwrap().to_string();
        assert_eq!(first, "raining  wet  \t(raining -> wet)");
    }

    #[test]
    fn test_render_custom_style() {
        let style = Style::default()
            .with_column_width(1)
            .with_labels("1", "0")
            .with_separator(" | ");
        let t = table("(p v q)", &[]);
        let expected = "p q  | (p v q)\n0 0  | 0\n0 1  | 1\n1 0  | 1\n1 1  | 1\n";
        assert_eq!(t.render(&style), expected);
    }
}

//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.text(), kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a borderless table.
///
/// Pretty mode: dim header row, padded columns
/// Plain mode: space-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for (i, col) in columns.iter().enumerate() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
                if col.align_right {
                    column.set_cell_alignment(CellAlignment::Right);
                }
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_plain() {
        let ctx = UiContext::plain();
        assert_eq!(kv(&ctx, "Total Expenses", "$1.00"), "total_expenses=$1.00");
    }

    #[test]
    fn test_kv_pretty() {
        let ctx = UiContext::pretty();
        assert_eq!(kv(&ctx, "User", "alice"), "User: alice");
    }

    #[test]
    fn test_receipt_plain() {
        let ctx = UiContext::plain();
        let out = receipt(&ctx, "Saved", &[("Category", "Food"), ("Amount", "1.00")]);
        assert_eq!(out, "status=ok\ncategory=Food\namount=1.00");
    }

    #[test]
    fn test_receipt_pretty_has_badge() {
        let ctx = UiContext::pretty();
        let out = receipt(&ctx, "Saved", &[("Amount", "1.00")]);
        assert!(out.starts_with("[OK] Saved"));
        assert!(out.contains("  Amount: 1.00"));
    }

    #[test]
    fn test_simple_table_plain() {
        let ctx = UiContext::plain();
        let rows = vec![
            vec!["2024-01-01".to_string(), "Food".to_string(), "1.00".to_string()],
            vec!["2024-01-02".to_string(), "Bills".to_string(), "2.00".to_string()],
        ];
        let out = simple_table(&ctx, &[Column::new("Date")], &rows);
        assert_eq!(out, "2024-01-01 Food 1.00\n2024-01-02 Bills 2.00");
    }

    #[test]
    fn test_simple_table_pretty_has_header() {
        let ctx = UiContext::pretty();
        let rows = vec![vec!["2024-01-01".to_string(), "12.50".to_string()]];
        let out = simple_table(&ctx, &[Column::new("Date"), Column::right("Amount")], &rows);
        assert!(out.contains("Date"));
        assert!(out.contains("Amount"));
        assert!(out.contains("12.50"));
    }
}

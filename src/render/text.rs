//! Terminal rendering
//!
//! Balance cards drawn as boxes side by side, followed by the transaction
//! table. Price cells are coloured by type when colour is enabled.

use nu_ansi_term::Color;

use super::{Card, TABLE_HEADERS};
use crate::dashboard::{Dashboard, TransactionView};
use crate::models::TransactionType;

const MIN_CARD_WIDTH: usize = 18;
const COLUMN_GAP: &str = "   ";

/// Text output options
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Emit ANSI colour codes
    pub color: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Render the whole dashboard
pub fn render(dashboard: &Dashboard, options: &TextOptions) -> String {
    let mut out = render_cards(dashboard);
    out.push('\n');
    out.push_str(&render_table(dashboard.transactions(), options));
    out
}

/// Display width in characters
fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    let fill = to.saturating_sub(width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// The three balance cards as boxes on one line
pub fn render_cards(dashboard: &Dashboard) -> String {
    let balance = dashboard.balance();
    let inner = Card::ALL
        .iter()
        .map(|card| width(card.label()).max(width(card.value(balance))))
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_WIDTH);

    let edge = "─".repeat(inner + 2);
    let mut top = Vec::new();
    let mut label = Vec::new();
    let mut value = Vec::new();
    let mut bottom = Vec::new();

    for card in Card::ALL {
        let (tl, tr, bl, br) = if card.is_highlighted() {
            ('╔', '╗', '╚', '╝')
        } else {
            ('┌', '┐', '└', '┘')
        };
        let side = if card.is_highlighted() { '║' } else { '│' };
        let line = if card.is_highlighted() {
            "═".repeat(inner + 2)
        } else {
            edge.clone()
        };

        top.push(format!("{}{}{}", tl, line, tr));
        label.push(format!("{} {} {}", side, pad(card.label(), inner), side));
        value.push(format!("{} {} {}", side, pad(card.value(balance), inner), side));
        bottom.push(format!("{}{}{}", bl, line, br));
    }

    [top, label, value, bottom]
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// The transaction table; an empty list yields only the heading row
pub fn render_table(transactions: &[TransactionView], options: &TextOptions) -> String {
    let rows: Vec<[&str; 4]> = transactions
        .iter()
        .map(|tx| {
            [
                tx.title.as_str(),
                tx.formatted_value.as_str(),
                tx.category.title.as_str(),
                tx.formatted_date.as_str(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(width(cell));
        }
    }

    let mut out = String::new();
    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&rule.join(COLUMN_GAP));
    out.push('\n');

    for (tx, row) in transactions.iter().zip(rows.iter()) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = pad(cell, *w);
                if i == 1 && options.color {
                    paint_price(&padded, tx.kind)
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out
}

fn paint_price(text: &str, kind: TransactionType) -> String {
    let color = match kind {
        TransactionType::Income => Color::Green,
        TransactionType::Outcome => Color::Red,
    };
    color.paint(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_value;
    use crate::models::{Balance, Transaction, TransactionType, TransactionsResponse};

    const PLAIN: TextOptions = TextOptions { color: false };

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.apply_response(TransactionsResponse {
            transactions: vec![
                Transaction::new("1", "Salary", 100.0, TransactionType::Income, "Work"),
                Transaction::new("2", "Groceries", 50.0, TransactionType::Outcome, "Food"),
            ],
            balance: Balance::new(1000.0, 500.0, 500.0),
        });
        dashboard
    }

    #[test]
    fn test_cards_show_balance() {
        let text = render_cards(&loaded());
        assert!(text.contains("Entradas"));
        assert!(text.contains("Saídas"));
        assert!(text.contains(&format_value(1000.0)));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_table_rows_in_order() {
        let dashboard = loaded();
        let text = render_table(dashboard.transactions(), &PLAIN);
        let lines: Vec<_> = text.lines().collect();

        // heading, rule, two rows
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Título"));
        assert!(lines[2].starts_with("Salary"));
        assert!(lines[2].contains(&format_value(100.0)));
        assert!(lines[3].starts_with("Groceries"));
        assert!(lines[3].contains(&format!("- {}", format_value(50.0))));
    }

    #[test]
    fn test_empty_table() {
        let text = render_table(&[], &PLAIN);
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_color_only_on_price_cell() {
        let dashboard = loaded();
        let plain = render_table(dashboard.transactions(), &PLAIN);
        let colored = render_table(dashboard.transactions(), &TextOptions { color: true });

        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains('\u{1b}'));
        assert!(colored.lines().next().is_some_and(|h| !h.contains('\u{1b}')));
    }

    #[test]
    fn test_columns_align() {
        let dashboard = loaded();
        let text = render_table(dashboard.transactions(), &PLAIN);
        let lines: Vec<_> = text.lines().collect();

        let category_col = |line: &str| {
            let chars: Vec<char> = line.chars().collect();
            let needle: Vec<char> = "Food".chars().collect();
            chars.windows(needle.len()).position(|w| w == needle.as_slice())
        };
        let header_col = lines[0]
            .find("Categoria")
            .map(|b| lines[0][..b].chars().count());
        assert_eq!(category_col(lines[3]), header_col);
    }
}

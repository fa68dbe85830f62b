//! Static HTML rendering
//!
//! Produces a self-contained page equivalent to the browser dashboard:
//! header, three cards whose value elements carry `data-testid`, and the
//! transaction table with `income` / `outcome` price cells.

use std::fmt::Write;

use super::{Card, TABLE_HEADERS};
use crate::dashboard::{Dashboard, TransactionView};

const STYLE: &str = r#"
body { margin: 0; font-family: Poppins, sans-serif; background: #f0f2f5; color: #363f5f; }
header.brand { background: #5636d3; color: #fff; padding: 30px 0 150px; }
header.brand .inner { width: 1120px; margin: 0 auto; display: flex; justify-content: space-between; }
header.brand nav span { margin-left: 32px; }
.container { width: 100%; max-width: 1120px; margin: 0 auto; padding: 40px 20px; }
.cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; margin-top: -150px; }
.card { background: #fff; padding: 22px 32px; border-radius: 5px; }
.card.total { background: #ff872c; color: #fff; }
.card h1 { margin-top: 14px; font-size: 36px; font-weight: normal; line-height: 54px; }
.table { margin-top: 64px; }
table { width: 100%; border-spacing: 0 8px; }
th { color: #969cb3; font-weight: normal; padding: 20px 32px; text-align: left; }
td { padding: 20px 32px; border: 0; background: #fff; color: #969cb3; }
td.title { color: #363f5f; }
td.income { color: #12a454; }
td.outcome { color: #e83f5b; }
"#;

/// Escape text for element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full HTML document for the dashboard
pub fn render_page(dashboard: &Dashboard) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>Finboard</title>\n");
    let _ = writeln!(page, "<style>{}</style>", STYLE);
    page.push_str("</head>\n<body>\n");
    page.push_str(&render_header());
    page.push_str("<main class=\"container\">\n");
    page.push_str(&render_cards(dashboard));
    page.push_str(&render_table(dashboard.transactions()));
    page.push_str("</main>\n</body>\n</html>\n");

    page
}

/// Static brand header
pub fn render_header() -> String {
    concat!(
        "<header class=\"brand\"><div class=\"inner\">",
        "<strong>Finboard</strong>",
        "<nav><span>Listagem</span><span>Importar</span></nav>",
        "</div></header>\n"
    )
    .to_string()
}

/// The three balance cards
pub fn render_cards(dashboard: &Dashboard) -> String {
    let mut out = String::from("<section class=\"cards\">\n");

    for card in Card::ALL {
        let class = if card.is_highlighted() { "card total" } else { "card" };
        let _ = writeln!(
            out,
            "<div class=\"{}\"><header><p>{}</p><span role=\"img\" aria-label=\"{}\"></span></header><h1 data-testid=\"{}\">{}</h1></div>",
            class,
            escape(card.label()),
            card.icon_alt(),
            card.test_id(),
            escape(card.value(dashboard.balance())),
        );
    }

    out.push_str("</section>\n");
    out
}

/// Transaction table in the order given
pub fn render_table(transactions: &[TransactionView]) -> String {
    let mut out = String::from("<section class=\"table\">\n<table>\n<thead>\n<tr>");

    for heading in TABLE_HEADERS {
        let _ = write!(out, "<th>{}</th>", escape(heading));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for tx in transactions {
        out.push_str(&render_row(tx));
    }

    out.push_str("</tbody>\n</table>\n</section>\n");
    out
}

fn render_row(tx: &TransactionView) -> String {
    format!(
        "<tr data-id=\"{}\"><td class=\"title\">{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td></tr>\n",
        escape(&tx.id),
        escape(&tx.title),
        tx.price_class(),
        escape(&tx.formatted_value),
        escape(&tx.category.title),
        escape(&tx.formatted_date),
    )
}

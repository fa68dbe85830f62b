//! Renderers
//!
//! Turn a [`Dashboard`](crate::dashboard::Dashboard) into three balance
//! cards and a transaction table.
//!
//! - [`html`]: static page with the `data-testid` hooks
//! - `text`: terminal output (native builds)
//! - `csv`: transaction export (native builds)

#[cfg(feature = "native")]
pub mod csv;
pub mod html;
#[cfg(feature = "native")]
pub mod text;

use crate::dashboard::BalanceView;

/// Column headings of the transaction table
pub const TABLE_HEADERS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

/// The three summary cards, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Income,
    Outcome,
    Total,
}

impl Card {
    pub const ALL: [Card; 3] = [Card::Income, Card::Outcome, Card::Total];

    /// Heading shown on the card
    pub fn label(&self) -> &'static str {
        match self {
            Card::Income => "Entradas",
            Card::Outcome => "Saídas",
            Card::Total => "Total",
        }
    }

    /// Alt text of the card icon
    pub fn icon_alt(&self) -> &'static str {
        match self {
            Card::Income => "Income",
            Card::Outcome => "Outcome",
            Card::Total => "Total",
        }
    }

    /// Stable test identifier of the value element
    pub fn test_id(&self) -> &'static str {
        match self {
            Card::Income => "balance-income",
            Card::Outcome => "balance-outcome",
            Card::Total => "balance-total",
        }
    }

    /// Formatted value for this card
    pub fn value<'a>(&self, balance: &'a BalanceView) -> &'a str {
        match self {
            Card::Income => &balance.income,
            Card::Outcome => &balance.outcome,
            Card::Total => &balance.total,
        }
    }

    /// The total card is highlighted
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Card::Total)
    }
}

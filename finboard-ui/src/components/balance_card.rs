//! Balance Card Component
//!
//! One of the three summary cards. The value element carries the card's
//! `data-testid`.

use finboard::render::Card;
use leptos::*;

/// Balance card component
#[component]
pub fn BalanceCard(
    /// Which summary this card shows
    card: Card,
    /// Formatted value; blank until the first fetch completes
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=card_class(card)>
            <header>
                <p>{card.label()}</p>
                <span role="img" aria-label=card.icon_alt() />
            </header>
            <h1 data-testid=card.test_id()>{move || value.get()}</h1>
        </div>
    }
}

fn card_class(card: Card) -> &'static str {
    if card.is_highlighted() {
        "card total"
    } else {
        "card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_total_is_highlighted() {
        let classes: Vec<_> = Card::ALL.iter().map(|c| card_class(*c)).collect();
        assert_eq!(classes, vec!["card", "card", "card total"]);
    }
}

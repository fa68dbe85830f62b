//! Transaction Table Component

use finboard::render::TABLE_HEADERS;
use finboard::TransactionView;
use leptos::*;

/// Row key: position plus id, so repeated ids still get their own row
type RowKey = (usize, String);

/// Transaction table, one row per transaction in response order
#[component]
pub fn TransactionTable(
    #[prop(into)] transactions: Signal<Vec<TransactionView>>,
) -> impl IntoView {
    view! {
        <section class="table">
            <table>
                <thead>
                    <tr>
                        {TABLE_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || keyed_rows(transactions.get())
                        key=|(key, _): &(RowKey, TransactionView)| key.clone()
                        children=|(_, tx)| view! { <TransactionRow tx=tx /> }
                    />
                </tbody>
            </table>
        </section>
    }
}

fn keyed_rows(transactions: Vec<TransactionView>) -> Vec<(RowKey, TransactionView)> {
    transactions
        .into_iter()
        .enumerate()
        .map(|(i, tx)| ((i, tx.id.clone()), tx))
        .collect()
}

#[component]
fn TransactionRow(tx: TransactionView) -> impl IntoView {
    view! {
        <tr data-id=tx.id.clone()>
            <td class="title">{tx.title.clone()}</td>
            <td class=tx.price_class()>{tx.formatted_value.clone()}</td>
            <td>{tx.category.title.clone()}</td>
            <td>{tx.formatted_date.clone()}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard::{Transaction, TransactionType};
    use std::collections::HashSet;

    fn view(id: &str, title: &str) -> TransactionView {
        TransactionView::from_wire(Transaction::new(
            id,
            title,
            10.0,
            TransactionType::Income,
            "Work",
        ))
    }

    #[test]
    fn test_repeated_ids_keep_every_row() {
        let rows = keyed_rows(vec![view("1", "First"), view("1", "Second"), view("2", "Third")]);

        let keys: HashSet<_> = rows.iter().map(|(key, _)| key.clone()).collect();
        assert_eq!(keys.len(), 3);

        let titles: Vec<_> = rows.iter().map(|(_, tx)| tx.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }
}

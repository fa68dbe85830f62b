//! Dashboard Page
//!
//! Balance cards and the transaction table. Data is fetched once when the
//! page mounts; a failed fetch is logged to the console and the page keeps
//! its empty state.

use finboard::render::Card;
use finboard::Dashboard as DashboardState;
use leptos::*;

use crate::api;
use crate::components::{BalanceCard, TransactionTable};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardState::new());

    // Single fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(response) => state.update(|dashboard| dashboard.apply_response(response)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch transactions: {}", e).into(),
                    );
                }
            }
        });
    });

    let transactions = Signal::derive(move || state.with(|d| d.transactions().to_vec()));

    view! {
        <section class="cards">
            {Card::ALL
                .into_iter()
                .map(|card| {
                    let value = Signal::derive(move || {
                        state.with(|d| card.value(d.balance()).to_string())
                    });
                    view! { <BalanceCard card=card value=value /> }
                })
                .collect_view()}
        </section>

        <TransactionTable transactions=transactions />
    }
}

//! Header Component
//!
//! Brand bar with the navigation entries.

use leptos::*;
use leptos_router::*;

/// Navigation entries; `None` renders as plain text
const NAV_ITEMS: [(&str, Option<&str>); 2] = [("Listagem", Some("/")), ("Importar", None)];

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="brand">
            <div class="inner">
                <A href="/" class="logo">
                    <strong>"Finboard"</strong>
                </A>

                <nav>
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| match href {
                            Some(href) => view! {
                                <A href=*href active_class="active" exact=true>{*label}</A>
                            }
                            .into_view(),
                            None => view! { <span>{*label}</span> }.into_view(),
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

//! App Root Component

use leptos::*;
use leptos_router::*;

use crate::components::Header;
use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header />

            <main class="container">
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Página não encontrada"</h1>
            <A href="/">"Voltar para a listagem"</A>
        </div>
    }
}

use leptos::prelude::*;

pub mod api;
mod components;
pub mod form;

use components::TransactionForm;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <h1>"New transaction"</h1>
            <TransactionForm/>
        </main>
    }
}

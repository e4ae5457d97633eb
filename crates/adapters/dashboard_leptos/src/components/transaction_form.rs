//! Transaction form with a service selector and a variable price section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use printbill_app::services::service_detail_resolver::{SelectionOutcome, ServiceDetailResolver};

use crate::api::{self, GlooServiceMetadataSource};
use crate::form::{SignalPriceInput, SignalSection};

/// Form for recording a transaction.
///
/// Choosing a service asks the backend whether its price is variable; the
/// price section and its bounds follow the answer. A failed lookup is
/// reported on the browser console and leaves the form unchanged.
#[component]
pub fn TransactionForm() -> impl IntoView {
    let services = LocalResource::new(api::fetch_services);
    let section = SignalSection::new();
    let price_input = SignalPriceInput::new();

    let on_service_change = move |ev: leptos::ev::Event| {
        let selection = event_target_value(&ev);
        spawn_local(async move {
            // Every change gets its own resolver and nothing is cancelled,
            // so the last response to arrive wins.
            let resolver =
                ServiceDetailResolver::new(GlooServiceMetadataSource, section, price_input);
            if let SelectionOutcome::Failed(err) = resolver
                .on_service_selection_changed(Some(selection.as_str()))
                .await
            {
                leptos::logging::error!("Error fetching service details: {err}");
            }
        });
    };

    let service_options = move || {
        services.read().as_ref().map(|result| match result {
            Ok(list) => list
                .iter()
                .map(|service| {
                    view! { <option value=service.id.to_string()>{service.name.clone()}</option> }
                })
                .collect_view()
                .into_any(),
            Err(err) => {
                leptos::logging::error!("Error loading services: {err}");
                ().into_any()
            }
        })
    };

    view! {
        <form class="transaction-form">
            <label for="service">"Service"</label>
            <select id="service" name="service" on:change=on_service_change>
                <option value="">"Select a service…"</option>
                {service_options}
            </select>

            <div id="variablePriceSection" style:display=move || section.display()>
                <label for="variable_price">"Price"</label>
                <input
                    type="number"
                    id="variable_price"
                    name="variable_price"
                    step="0.01"
                    min=move || price_input.min.get().map(|min| min.to_string())
                    max=move || price_input.max.get().map(|max| max.to_string())
                />
            </div>
        </form>
    }
}

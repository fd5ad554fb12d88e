use catalog_core::{Catalog, FilterState};
use leptos::*;

mod api;
mod panel;
mod table;

use panel::FilterPanel;
use table::ProductTable;

fn main() {
    console_error_panic_hook::set_once();
    logging::log!("starting catalog gui");

    mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let users = api::users();
    let categories = api::categories();
    let products = api::products();

    // A dangling reference in the hard-coded data is a defect in this crate,
    // not a runtime condition the view handles.
    let catalog = Catalog::build(&users, &categories, &products)
        .expect("hard-coded catalog data must be internally consistent");

    let users = store_value(users);
    let categories = store_value(categories);
    let catalog = store_value(catalog);
    let filters = create_rw_signal(FilterState::new());

    let visible_entries = move || {
        logging::log!("recomputing visible products");
        filters.with(|filters| {
            catalog.with_value(|catalog| {
                filters
                    .visible_entries(catalog)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                <div class="block">
                    <FilterPanel filters users categories/>
                </div>

                <div class="box table-container">
                    <ProductTable entries=Signal::derive(visible_entries)/>
                </div>
            </div>
        </div>
    }
}

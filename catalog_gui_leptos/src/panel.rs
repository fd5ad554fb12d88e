use catalog_core::data::{Category, User};
use catalog_core::FilterState;
use leptos::*;

/// The filter controls: user tabs, product-name search, category chips and
/// the reset control. All selection state lives in the shared `filters`
/// signal; every handler mutates it and nothing else.
#[component]
pub fn FilterPanel(
    filters: RwSignal<FilterState>,
    users: StoredValue<Vec<User>>,
    categories: StoredValue<Vec<Category>>,
) -> impl IntoView {
    view! {
        <nav class="panel">
            <p class="panel-heading">"Filters"</p>

            <p class="panel-tabs has-text-weight-bold">
                <a
                    data-cy="FilterAllUsers"
                    href="#/"
                    class:is-active=move || filters.with(|f| f.selected_user_name.is_empty())
                    on:click=move |_| filters.update(|f| f.select_all_users())
                >
                    "All"
                </a>
                <For
                    each=move || users.get_value()
                    key=|user| user.id
                    let:user
                >
                    <UserTab filters user/>
                </For>
            </p>

            <div class="panel-block">
                <SearchControl filters/>
            </div>

            <div class="panel-block is-flex-wrap-wrap">
                // Wired to no handler, same as the header sort icons.
                <a
                    data-cy="AllCategories"
                    href="#/"
                    class="button is-success mr-6 is-outlined"
                >
                    "All"
                </a>
                <For
                    each=move || categories.get_value()
                    key=|category| category.id
                    let:category
                >
                    <CategoryChip filters category/>
                </For>
            </div>

            <div class="panel-block">
                <a
                    data-cy="ResetAllButton"
                    href="#/"
                    class="button is-link is-outlined is-fullwidth"
                    on:click=move |_| filters.update(|f| f.reset())
                >
                    "Reset all filters"
                </a>
            </div>
        </nav>
    }
}

#[component]
fn UserTab(filters: RwSignal<FilterState>, user: User) -> impl IntoView {
    let active_name = user.name.clone();
    let selected_name = user.name.clone();

    view! {
        <a
            data-cy="FilterUser"
            href="#/"
            class:is-active=move || filters.with(|f| f.selected_user_name == active_name)
            on:click=move |_| filters.update(|f| f.select_user(&selected_name))
        >
            {user.name}
        </a>
    }
}

/// Search input bound to the raw (untrimmed) search text, with a clear
/// button that only exists while there is something to clear.
#[component]
fn SearchControl(filters: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder="Search"
                prop:value=move || filters.with(|f| f.search_text.clone())
                on:input=move |ev| filters.update(|f| f.set_search(event_target_value(&ev)))
            />
            <span class="icon is-left">
                <i class="fas fa-search" aria-hidden="true"></i>
            </span>
            <span class="icon is-right">
                <Show when=move || filters.with(|f| !f.search_text.is_empty())>
                    <button
                        data-cy="ClearButton"
                        type="button"
                        class="delete"
                        on:click=move |_| filters.update(|f| f.clear_search())
                    ></button>
                </Show>
            </span>
        </p>
    }
}

/// One clickable category chip. Clicking accumulates the title in the
/// selection (repeat clicks append duplicates); highlighting reflects
/// membership. The selection never reaches the visibility predicate.
#[component]
fn CategoryChip(filters: RwSignal<FilterState>, category: Category) -> impl IntoView {
    let highlight_title = category.title.clone();
    let clicked_title = category.title.clone();

    view! {
        <a
            data-cy="Category"
            href="#/"
            class="button mr-2 my-1"
            class:is-info=move || filters.with(|f| f.selected_categories.contains(&highlight_title))
            on:click=move |_| filters.update(|f| f.add_category(&clicked_title))
        >
            {category.title}
        </a>
    }
}

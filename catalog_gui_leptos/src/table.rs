use catalog_core::data::Sex;
use catalog_core::CatalogEntry;
use leptos::*;

/// The result area: a fixed message when nothing matches, otherwise one row
/// per visible catalog entry, in catalog order. The header sort icons are
/// decorative; no comparator is attached anywhere.
#[component]
pub fn ProductTable(entries: Signal<Vec<CatalogEntry>>) -> impl IntoView {
    view! {
        <Show
            when=move || entries.with(|entries| !entries.is_empty())
            fallback=|| view! {
                <p data-cy="NoMatchingMessage">
                    "No products matching selected criteria"
                </p>
            }
        >
            <table data-cy="ProductTable" class="table is-striped is-narrow is-fullwidth">
                <thead>
                    <tr>
                        <ColumnHeading label="ID" sort_icon="fa-sort"/>
                        <ColumnHeading label="Product" sort_icon="fa-sort-down"/>
                        <ColumnHeading label="Category" sort_icon="fa-sort-up"/>
                        <ColumnHeading label="User" sort_icon="fa-sort"/>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || entries.get()
                        key=|entry| entry.product.id
                        let:entry
                    >
                        <ProductRow entry/>
                    </For>
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn ColumnHeading(label: &'static str, sort_icon: &'static str) -> impl IntoView {
    view! {
        <th>
            <span class="is-flex is-flex-wrap-nowrap">
                {label}
                <a href="#/">
                    <span class="icon">
                        <i data-cy="SortIcon" class=format!("fas {sort_icon}")></i>
                    </span>
                </a>
            </span>
        </th>
    }
}

#[component]
fn ProductRow(entry: CatalogEntry) -> impl IntoView {
    let owner_class = match entry.user.sex {
        Sex::Male => "has-text-link",
        Sex::Female => "has-text-danger",
    };
    let category_label = format!("{} - {}", entry.category.icon, entry.category.title);

    view! {
        <tr data-cy="Product">
            <td data-cy="ProductId" class="has-text-weight-bold">
                {entry.product.id.0}
            </td>
            <td>{entry.product.name}</td>
            <td data-cy="ProductCategory">{category_label}</td>
            <td data-cy="ProductUser" class=owner_class>
                {entry.user.name}
            </td>
        </tr>
    }
}

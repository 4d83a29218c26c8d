use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::ProductGrid;
use crate::state::ListingQuery;
use crate::store::use_catalog;

/// `/products`, optionally filtered by `?q=`.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let query = use_query_map();
    let search = move || query.get().get("q");

    view! { {move || view! { <ProductListing query=ListingQuery::search(search())/> }} }
}

/// `/category/:slug`.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! { {move || view! { <ProductListing query=ListingQuery::category(slug())/> }} }
}

#[component]
fn ProductListing(query: ListingQuery) -> impl IntoView {
    let (title, products) = use_catalog().with_value(|c| (query.title(c), query.run(c)));
    let count = format!("{} sản phẩm", products.len());

    view! {
        <Title text=title.clone()/>
        <div class="listing__header">
            <h1>{title}</h1>
            <span class="listing__count">{count}</span>
        </div>
        <ProductGrid products=products empty_message="Không tìm thấy sản phẩm phù hợp."/>
    }
}

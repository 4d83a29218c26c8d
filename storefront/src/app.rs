//! Application shell and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Header};
use crate::config::StorefrontConfig;
use crate::pages::{CartPage, CategoryPage, HomePage, NotFound, ProductPage, ProductsPage};
use crate::store::provide_storefront;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StorefrontConfig::bundled();
    let title = config.default_title.clone();
    let css_path = config.css_path.clone();
    tracing::info!(name = %config.name, currency = %config.currency, "storefront starting");
    provide_storefront(config);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        {css_path.map(|href| view! { <Stylesheet id="farme" href=href/> })}
        <Meta name="description" content="Farme - Nông sản sạch từ trang trại đến bàn ăn"/>
        <Title text=title/>

        <Router>
            <Header/>
            <main class="container">
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/category/:slug") view=CategoryPage/>
                    <Route path=path!("/cart") view=CartPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

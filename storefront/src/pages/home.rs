use leptos::prelude::*;

use crate::components::ui::{button_class, ButtonSize, ButtonVariant};
use crate::components::ProductGrid;
use crate::state::listing::featured;
use crate::store::use_catalog;

#[component]
pub fn HomePage() -> impl IntoView {
    let (categories, featured) =
        use_catalog().with_value(|c| (c.categories().to_vec(), featured(c)));

    view! {
        <section class="hero">
            <h1>"Nông sản sạch từ trang trại đến bàn ăn"</h1>
            <p>"Mua trực tiếp từ nông dân và hợp tác xã trên khắp Việt Nam"</p>
            <a href="/products" class=button_class(ButtonVariant::Primary, ButtonSize::Lg)>
                "Mua sắm ngay"
            </a>
        </section>

        <section class="categories">
            <h2>"Danh mục"</h2>
            <div class="categories__list">
                {categories
                    .into_iter()
                    .map(|c| {
                        let href = c.href();
                        view! { <a href=href class="categories__item">{c.name}</a> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section>
            <h2>"Sản phẩm khuyến mãi"</h2>
            <ProductGrid products=featured/>
        </section>
    }
}

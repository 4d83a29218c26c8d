use farme_commerce::catalog::Product;
use leptos::prelude::*;

use crate::components::ui::{Badge, BadgeVariant, RatingStars};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product.href();
    let price = product.price.display();
    let original = product.original_price.map(|p| p.display());
    let badge = product.discount_badge();
    let stars = product.filled_stars();
    let reviews = format!("({})", product.rating_count);
    let Product {
        name,
        image,
        seller,
        ..
    } = product;
    let alt = name.clone();

    view! {
        <div class="product-card">
            <a href=href.clone() class="product-card__image">
                <img src=image alt=alt loading="lazy"/>
                {badge.map(|b| view! {
                    <Badge variant=BadgeVariant::Sale class="product-card__badge">{b}</Badge>
                })}
            </a>
            <div class="product-card__info">
                <a href=href class="product-card__name">{name}</a>
                <p class="product-card__seller">{seller.name}</p>
                <div class="product-card__rating">
                    <RatingStars filled=stars/>
                    <span>{reviews}</span>
                </div>
                <p class="price">
                    <span class="price__current">{price}</span>
                    {original.map(|o| view! { <span class="price__original">{o}</span> })}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn ProductGrid(
    products: Vec<Product>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    if products.is_empty() {
        let message = empty_message.unwrap_or_else(|| "Không có sản phẩm nào.".to_string());
        return view! { <p class="empty">{message}</p> }.into_any();
    }

    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|p| view! { <ProductCard product=p/> })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

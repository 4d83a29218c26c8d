use farme_commerce::cart::{Cart, CartLine};
use farme_store::Action;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::ui::{button_class, ButtonSize, ButtonVariant};
use crate::store::use_store;

/// Total shown under the cart, or a notice when it cannot be computed.
pub fn cart_total_label(cart: &Cart) -> String {
    match cart.total() {
        Ok(total) => total.display(),
        Err(e) => {
            tracing::warn!(error = %e, "cart total unavailable");
            "—".to_string()
        }
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_store();

    view! {
        <Title text="Giỏ hàng"/>
        <h1>"Giỏ hàng"</h1>
        {move || {
            let cart = store.cart();
            if cart.is_empty() {
                return view! {
                    <p class="empty">"Giỏ hàng của bạn đang trống."</p>
                    <a href="/products">"Tiếp tục mua sắm"</a>
                }
                .into_any();
            }

            let total = cart_total_label(&cart);
            let item_count = format!("{} sản phẩm", cart.total_items());

            view! {
                <div class="cart">
                    <p class="cart__count">{item_count}</p>
                    {cart.lines.into_iter().map(|line| view! { <CartRow line=line/> }).collect::<Vec<_>>()}
                    <div class="cart__summary">
                        <span>"Tổng cộng:"</span>
                        <strong class="price">{total}</strong>
                    </div>
                    <div class="cart__actions">
                        <button
                            type="button"
                            class=button_class(ButtonVariant::Ghost, ButtonSize::Default)
                            on:click=move |_| {
                                if let Err(e) = store.dispatch(Action::ClearCart) {
                                    tracing::warn!(error = %e, "could not clear cart");
                                }
                            }
                        >
                            "Xóa giỏ hàng"
                        </button>
                        <button type="button" class=button_class(ButtonVariant::Primary, ButtonSize::Lg)>
                            "Thanh toán"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let store = use_store();
    let subtotal = line
        .subtotal()
        .map(|m| m.display())
        .unwrap_or_else(|_| "—".to_string());
    let unit = format!("{} x {}", line.price.display(), line.quantity);
    let href = format!("/product/{}", line.product_id);
    let CartLine {
        product_id,
        name,
        image,
        seller_name,
        ..
    } = line;
    let alt = name.clone();

    view! {
        <div class="cart__line">
            <img class="cart__image" src=image alt=alt/>
            <div class="cart__details">
                <a href=href>{name}</a>
                <p class="cart__seller">{seller_name}</p>
                <p class="cart__unit">{unit}</p>
            </div>
            <strong class="cart__subtotal">{subtotal}</strong>
            <button
                type="button"
                class=button_class(ButtonVariant::Ghost, ButtonSize::Icon)
                aria-label="Xóa"
                on:click=move |_| {
                    if let Err(e) = store.dispatch(Action::RemoveLine(product_id.clone())) {
                        tracing::warn!(product_id = %product_id, error = %e, "could not remove cart line");
                    }
                }
            >
                "✕"
            </button>
        </div>
    }
}

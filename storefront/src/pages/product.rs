//! Product detail page.

use farme_store::Action;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::ui::{
    button_class, Badge, BadgeVariant, ButtonSize, ButtonVariant, RatingStars, Tabs, TabsContent,
    TabsList, TabsTrigger,
};
use crate::components::ProductGrid;
use crate::state::product_detail::{
    image_at, AddToCartFeedback, ProductDetail, ProductDetailState, HIGHLIGHTS, SERVICE_HIGHLIGHTS,
    SPECIFICATIONS, STORAGE_GUIDANCE, TAB_DETAILS, TAB_REVIEWS, TAB_SPECIFICATIONS,
};
use crate::store::{use_catalog, use_config, use_store};

/// Route component for `/product/:id`.
///
/// The body is rebuilt whenever the id changes, which resets the quantity,
/// gallery and wishlist state.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    view! { {move || view! { <ProductDetailView id=id()/> }} }
}

#[component]
fn ProductDetailView(id: String) -> impl IntoView {
    let catalog = use_catalog();
    let config = use_config();

    let resolved = catalog.with_value(|catalog| {
        config.with_value(|config| ProductDetail::resolve(catalog, &id, config))
    });

    match resolved {
        Ok(detail) => view! { <ProductDetailBody detail=detail/> }.into_any(),
        Err(e) => {
            tracing::info!(product_id = %id, error = %e, "product page has nothing to show");
            view! {
                <div class="not-found">
                    <h1>"Không tìm thấy sản phẩm"</h1>
                    <p>{e.to_string()}</p>
                    <a href="/products" class=button_class(ButtonVariant::Primary, ButtonSize::Default)>
                        "Xem tất cả sản phẩm"
                    </a>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ProductDetailBody(detail: ProductDetail) -> impl IntoView {
    let store = use_store();
    let (stock, sold, placeholder) = use_config().with_value(|c| {
        (c.stock_display, c.sold_display.clone(), c.placeholder_image.clone())
    });

    let state = RwSignal::new(ProductDetailState::new(detail.gallery.len()));
    let feedback = RwSignal::new(None::<AddToCartFeedback>);
    let product = StoredValue::new(detail.product.clone());
    let gallery = StoredValue::new(detail.gallery.clone());

    let add_to_cart = move |_| {
        let quantity = state.with_untracked(|s| s.quantity());
        let line = product.with_value(|p| state.with_untracked(|s| s.cart_line(p)));
        let result = store.dispatch(Action::AddToCart(line));
        feedback.set(Some(AddToCartFeedback::from_result(quantity, result)));
    };

    let main_image = move || {
        gallery.with_value(|g| state.with(|s| image_at(g, s.active_image(), &placeholder)))
    };

    let rating_label = detail.rating_label();
    let reviews_label = detail.reviews_tab_label();
    let ProductDetail {
        product: p,
        category_name,
        gallery: images,
        related,
        short_description,
        long_description: [details_intro, details_origin],
    } = detail;

    let thumbnails = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            let alt = format!("{} - Hình {}", p.name, index + 1);
            view! {
                <button
                    type="button"
                    class="gallery__thumb"
                    class:gallery__thumb--active=move || state.with(|s| s.active_image() == index)
                    on:click=move |_| state.update(|s| {
                        s.select_image(index);
                    })
                >
                    <img src=src alt=alt/>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let seller_href = p.seller.href();
    let seller_avatar = p.seller.avatar_url();
    let wishlist_class = button_class(ButtonVariant::Outline, ButtonSize::Lg);
    let icon_class = button_class(ButtonVariant::Outline, ButtonSize::Icon);

    view! {
        <Title text=p.name.clone()/>

        <nav class="breadcrumb" aria-label="breadcrumb">
            <a href="/">"Trang chủ"</a>
            <span class="breadcrumb__sep">"›"</span>
            <a href=p.category_href()>{category_name}</a>
            <span class="breadcrumb__sep">"›"</span>
            <span class="breadcrumb__current">{p.name.clone()}</span>
        </nav>

        <div class="product-detail">
            <div class="gallery">
                <div class="gallery__main">
                    <img src=main_image alt=p.name.clone()/>
                    {p.discount_badge().map(|b| view! {
                        <Badge variant=BadgeVariant::Sale class="gallery__badge">{b}</Badge>
                    })}
                </div>
                <div class="gallery__thumbs">{thumbnails}</div>
            </div>

            <div class="product-detail__info">
                <h1>{p.name.clone()}</h1>

                <div class="product-detail__rating">
                    <RatingStars filled=p.filled_stars()/>
                    <span>{rating_label}</span>
                    <span class="product-detail__sold">{format!("Đã bán {sold}")}</span>
                </div>

                <p class="price price--lg">
                    <span class="price__current">{p.price.display()}</span>
                    {p.original_price.map(|o| view! {
                        <span class="price__original">{o.display()}</span>
                    })}
                    {p.discount_badge().map(|b| view! {
                        <Badge variant=BadgeVariant::Sale>{b}</Badge>
                    })}
                </p>

                <div class="product-detail__section">
                    <h3 class="product-detail__label">"Mô tả:"</h3>
                    <p class="product-detail__description">{short_description}</p>
                </div>

                <div class="product-detail__section">
                    <h3 class="product-detail__label">"Đại lý:"</h3>
                    <a href=seller_href class="seller">
                        <img class="seller__avatar" src=seller_avatar alt=p.seller.name.clone()/>
                        <div>
                            <div class="seller__name">{p.seller.name.clone()}</div>
                            <div class="seller__hint">"Xem cửa hàng"</div>
                        </div>
                    </a>
                </div>

                <div class="stepper">
                    <span class="stepper__label">"Số lượng:"</span>
                    <button
                        type="button"
                        class=icon_class
                        aria-label="Giảm"
                        disabled=move || !state.with(|s| s.can_decrement())
                        on:click=move |_| state.update(|s| s.decrement_quantity())
                    >
                        "−"
                    </button>
                    <span class="stepper__value">{move || state.with(|s| s.quantity()).to_string()}</span>
                    <button
                        type="button"
                        class=icon_class
                        aria-label="Tăng"
                        on:click=move |_| state.update(|s| s.increment_quantity())
                    >
                        "+"
                    </button>
                    <span class="stepper__stock">{format!("Còn {stock} sản phẩm")}</span>
                </div>

                <div class="product-detail__actions">
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Primary, ButtonSize::Lg)
                        on:click=add_to_cart
                    >
                        "Thêm vào giỏ hàng"
                    </button>
                    <button
                        type="button"
                        class=wishlist_class
                        class:btn--wishlisted=move || state.with(|s| s.is_wishlisted())
                        aria-pressed=move || state.with(|s| s.is_wishlisted()).to_string()
                        on:click=move |_| state.update(|s| s.toggle_wishlist())
                    >
                        "♡ Yêu thích"
                    </button>
                    <button type="button" class=icon_class aria-label="Chia sẻ">
                        "⤴"
                    </button>
                </div>

                {move || feedback.get().map(|f| view! { <p class=f.class()>{f.message()}</p> })}

                <ul class="services">
                    {SERVICE_HIGHLIGHTS
                        .into_iter()
                        .map(|(icon, label)| view! {
                            <li class="services__item">
                                <span class="services__icon" aria-hidden="true">{icon}</span>
                                {label}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>

        <Tabs default_value=TAB_DETAILS>
            <TabsList>
                <TabsTrigger value=TAB_DETAILS>"Chi tiết sản phẩm"</TabsTrigger>
                <TabsTrigger value=TAB_SPECIFICATIONS>"Thông số kỹ thuật"</TabsTrigger>
                <TabsTrigger value=TAB_REVIEWS>{reviews_label}</TabsTrigger>
            </TabsList>

            <TabsContent value=TAB_DETAILS>
                <h3>"Mô tả chi tiết sản phẩm"</h3>
                <p>{details_intro.clone()}</p>
                <p>{details_origin.clone()}</p>
                <h3>"Đặc điểm nổi bật"</h3>
                <ul class="highlights">
                    {HIGHLIGHTS.into_iter().map(|h| view! { <li>{h}</li> }).collect::<Vec<_>>()}
                </ul>
                <h3>"Hướng dẫn bảo quản"</h3>
                <p>{STORAGE_GUIDANCE}</p>
            </TabsContent>

            <TabsContent value=TAB_SPECIFICATIONS>
                <table class="specs">
                    <tbody>
                        {SPECIFICATIONS
                            .into_iter()
                            .map(|(name, value)| view! {
                                <tr>
                                    <th>{name}</th>
                                    <td>{value}</td>
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </TabsContent>

            <TabsContent value=TAB_REVIEWS>
                <p class="empty">"Chưa có đánh giá nào được hiển thị."</p>
            </TabsContent>
        </Tabs>

        {(!related.is_empty()).then(|| view! {
            <section class="related">
                <h2>"Sản phẩm liên quan"</h2>
                <ProductGrid products=related/>
            </section>
        })}
    }
}

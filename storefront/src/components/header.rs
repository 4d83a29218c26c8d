//! Site header and footer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::ui::{button_class, Badge, BadgeVariant, ButtonSize, ButtonVariant};
use crate::state::header::{
    cart_badge, search_href, AccountLink, HeaderState, NavKind, CART_HREF, NAV_ITEMS,
    SEARCH_PLACEHOLDER, WISHLIST_HREF,
};
use crate::store::{use_catalog, use_config, use_store};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let brand = use_config().with_value(|c| c.name.clone());
    let categories = use_catalog().with_value(|c| c.categories().to_vec());

    let header = RwSignal::new(HeaderState::default());
    let query = RwSignal::new(String::new());
    let dropdown_ref = NodeRef::<leptos::html::Li>::new();

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            let inside = match (dropdown_ref.get_untracked(), ev.target()) {
                (Some(dropdown), Some(target)) => target
                    .dyn_ref::<web_sys::Node>()
                    .is_some_and(|node| dropdown.contains(Some(node))),
                _ => false,
            };
            header.maybe_update(|h| h.pointer_down(inside));
        });
        on_cleanup(move || handle.remove());
    }

    let navigate = use_navigate();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = search_href(&query.get_untracked());
        tracing::debug!(href = %href, "search submitted");
        navigate(&href, Default::default());
    };

    let nav = NAV_ITEMS
        .into_iter()
        .map(|item| match item.kind {
            NavKind::Link => view! {
                <li class="nav__item">
                    <a href=item.href class="nav__link">{item.label}</a>
                </li>
            }
            .into_any(),
            NavKind::CategoryDropdown => {
                let categories = categories.clone();
                view! {
                    <li class="nav__item nav__item--dropdown" node_ref=dropdown_ref>
                        <button
                            type="button"
                            class="nav__link"
                            aria-haspopup="true"
                            aria-expanded=move || header.with(|h| h.is_dropdown_open()).to_string()
                            on:click=move |_| header.update(|h| h.toggle_dropdown())
                        >
                            {item.label}
                            <span class="nav__chevron" aria-hidden="true">"▾"</span>
                        </button>
                        <Show when=move || header.with(|h| h.is_dropdown_open())>
                            <div class="dropdown">
                                {categories
                                    .iter()
                                    .map(|c| view! {
                                        <a
                                            href=c.href()
                                            class="dropdown__item"
                                            on:click=move |_| header.update(|h| h.close_dropdown())
                                        >
                                            {c.name.clone()}
                                        </a>
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Show>
                    </li>
                }
                .into_any()
            }
        })
        .collect::<Vec<_>>();

    let icon_button = button_class(ButtonVariant::Ghost, ButtonSize::Icon);

    view! {
        <header class="header">
            <div class="header__inner container">
                <a href="/" class="header__brand">{brand}</a>

                <nav class="nav">
                    <ul class="nav__list">{nav}</ul>
                </nav>

                <div class="header__actions">
                    <form class="search" role="search" on:submit=on_search>
                        <input
                            type="search"
                            class="search__input"
                            placeholder=SEARCH_PLACEHOLDER
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <button type="submit" class="search__button" aria-label="Tìm kiếm">
                            "⌕"
                        </button>
                    </form>

                    <a href=WISHLIST_HREF class=icon_button aria-label="Yêu thích">
                        "♡"
                    </a>

                    <a href=CART_HREF class=format!("{icon_button} header__cart") aria-label="Giỏ hàng">
                        "🛒"
                        {move || cart_badge(store.total_items()).map(|count| view! {
                            <Badge variant=BadgeVariant::Count class="header__cart-badge">
                                {count}
                            </Badge>
                        })}
                    </a>

                    {move || {
                        let link = AccountLink::for_user(store.is_authenticated());
                        view! {
                            <a
                                href=link.href()
                                class=button_class(ButtonVariant::Outline, ButtonSize::Default)
                            >
                                {link.label()}
                            </a>
                        }
                    }}
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_config().with_value(|c| c.name.clone());

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer__brand">{brand}</p>
                <p>"Kết nối nông dân và người tiêu dùng trên khắp Việt Nam"</p>
            </div>
        </footer>
    }
}

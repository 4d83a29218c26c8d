//! Tabs sharing the active key through context.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct TabsContext {
    active: RwSignal<String>,
}

#[component]
pub fn Tabs(#[prop(into)] default_value: String, children: Children) -> impl IntoView {
    provide_context(TabsContext {
        active: RwSignal::new(default_value),
    });

    view! { <div class="tabs">{children()}</div> }
}

#[component]
pub fn TabsList(children: Children) -> impl IntoView {
    view! { <div class="tabs__list" role="tablist">{children()}</div> }
}

#[component]
pub fn TabsTrigger(#[prop(into)] value: String, children: Children) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();
    let key = value.clone();
    let active = Memo::new(move |_| tabs.active.with(|a| *a == key));

    view! {
        <button
            type="button"
            role="tab"
            class="tabs__trigger"
            class:tabs__trigger--active=move || active.get()
            aria-selected=move || active.get().to_string()
            on:click=move |_| tabs.active.set(value.clone())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn TabsContent(#[prop(into)] value: String, children: ChildrenFn) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();
    let active = Memo::new(move |_| tabs.active.with(|a| *a == value));

    view! {
        <Show when=move || active.get()>
            <div class="tabs__content" role="tabpanel">{children()}</div>
        </Show>
    }
}

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Không tìm thấy trang"</p>
            <a href="/">"Về trang chủ"</a>
        </div>
    }
}

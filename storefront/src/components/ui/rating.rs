use farme_commerce::catalog::MAX_RATING;
use leptos::prelude::*;

/// Classes for each of the five stars, `filled` of them lit.
pub fn star_classes(filled: usize) -> Vec<&'static str> {
    (0..MAX_RATING)
        .map(|i| if i < filled { "star star--filled" } else { "star" })
        .collect()
}

#[component]
pub fn RatingStars(filled: usize) -> impl IntoView {
    view! {
        <span class="rating" aria-label=format!("{filled}/{MAX_RATING}")>
            {star_classes(filled)
                .into_iter()
                .map(|class| view! { <span class=class aria-hidden="true">"★"</span> })
                .collect::<Vec<_>>()}
        </span>
    }
}

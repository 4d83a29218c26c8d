use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    /// Red discount badge.
    Sale,
    /// Round counter over an icon.
    Count,
}

impl BadgeVariant {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Sale => "sale",
            BadgeVariant::Count => "count",
        }
    }

    pub fn class(&self, extra: &str) -> String {
        let base = format!("badge badge--{}", self.as_str());
        if extra.is_empty() {
            base
        } else {
            format!("{base} {extra}")
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=variant.class(&class)>{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(BadgeVariant::default().class(""), "badge badge--default");
        assert_eq!(
            BadgeVariant::Sale.class("gallery__badge"),
            "badge badge--sale gallery__badge"
        );
    }
}

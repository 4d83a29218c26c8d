//! Button styling shared by `<button>` and `<a>` elements.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
    Icon,
}

/// CSS classes for a button of the given variant and size.
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> &'static str {
    use ButtonSize::*;
    use ButtonVariant::*;

    match (variant, size) {
        (Primary, Default) => "btn btn--primary",
        (Primary, Lg) => "btn btn--primary btn--lg",
        (Primary, Icon) => "btn btn--primary btn--icon",
        (Outline, Default) => "btn btn--outline",
        (Outline, Lg) => "btn btn--outline btn--lg",
        (Outline, Icon) => "btn btn--outline btn--icon",
        (Ghost, Default) => "btn btn--ghost",
        (Ghost, Lg) => "btn btn--ghost btn--lg",
        (Ghost, Icon) => "btn btn--ghost btn--icon",
    }
}

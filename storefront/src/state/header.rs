//! Header state: navigation, category dropdown, cart badge, account link.

/// How a navigation entry behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Link,
    /// Opens the category dropdown instead of navigating.
    CategoryDropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: NavKind,
}

/// Primary navigation, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Trang chủ", href: "/", kind: NavKind::Link },
    NavItem { label: "Sản phẩm", href: "/products", kind: NavKind::Link },
    NavItem { label: "Danh mục", href: "#", kind: NavKind::CategoryDropdown },
    NavItem { label: "Đại lý", href: "/sellers", kind: NavKind::Link },
    NavItem { label: "Khuyến mãi", href: "/promotions", kind: NavKind::Link },
];

pub const SEARCH_PLACEHOLDER: &str = "Tìm kiếm sản phẩm nông nghiệp...";
pub const WISHLIST_HREF: &str = "/wishlist";
pub const CART_HREF: &str = "/cart";

/// Open/closed state of the category dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    dropdown_open: bool,
}

impl HeaderState {
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// A pointer press anywhere on the page. Presses outside the dropdown
    /// close it. Returns whether the state changed.
    pub fn pointer_down(&mut self, inside_dropdown: bool) -> bool {
        if self.dropdown_open && !inside_dropdown {
            self.dropdown_open = false;
            return true;
        }
        false
    }
}

/// Badge text for the cart icon, hidden when the cart is empty.
pub fn cart_badge(total_items: i64) -> Option<String> {
    (total_items > 0).then(|| total_items.to_string())
}

/// Listing URL for a search query. Blank queries go to the full listing.
pub fn search_href(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return "/products".to_string();
    }
    format!("/products?q={}", encode_query(query))
}

fn encode_query(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Account entry on the right of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountLink {
    Profile,
    Login,
}

impl AccountLink {
    pub fn for_user(authenticated: bool) -> Self {
        if authenticated {
            Self::Profile
        } else {
            Self::Login
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Tài khoản",
            Self::Login => "Đăng nhập",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Self::Profile => "/profile",
            Self::Login => "/login",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            ["Trang chủ", "Sản phẩm", "Danh mục", "Đại lý", "Khuyến mãi"]
        );
        assert_eq!(
            NAV_ITEMS.iter().filter(|i| i.kind == NavKind::CategoryDropdown).count(),
            1
        );
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut header = HeaderState::default();
        assert!(!header.is_dropdown_open());
        header.toggle_dropdown();
        assert!(header.is_dropdown_open());
        header.toggle_dropdown();
        assert!(!header.is_dropdown_open());
    }

    #[test]
    fn test_outside_press_closes_dropdown() {
        let mut header = HeaderState::default();
        header.toggle_dropdown();

        assert!(!header.pointer_down(true));
        assert!(header.is_dropdown_open());

        assert!(header.pointer_down(false));
        assert!(!header.is_dropdown_open());

        // Already closed.
        assert!(!header.pointer_down(false));
    }

    #[test]
    fn test_cart_badge_hidden_when_empty() {
        assert_eq!(cart_badge(0), None);
        assert_eq!(cart_badge(3), Some("3".to_string()));
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href("   "), "/products");
        assert_eq!(search_href("ca chua"), "/products?q=ca+chua");
        assert_eq!(search_href("bưởi"), "/products?q=b%C6%B0%E1%BB%9Fi");
    }

    #[test]
    fn test_account_link() {
        assert_eq!(AccountLink::for_user(true).href(), "/profile");
        assert_eq!(AccountLink::for_user(false).label(), "Đăng nhập");
    }
}

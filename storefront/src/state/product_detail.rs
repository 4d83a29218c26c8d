//! Product detail page state.

use farme_commerce::cart::CartLine;
use farme_commerce::catalog::{Catalog, Product};
use farme_commerce::error::CommerceError;
use farme_store::StoreError;

use crate::config::StorefrontConfig;

/// Highlights listed under the product description.
pub const HIGHLIGHTS: [&str; 5] = [
    "Sản phẩm tươi ngon, chất lượng cao",
    "Được trồng và thu hoạch theo tiêu chuẩn VietGAP",
    "Không sử dụng hóa chất độc hại",
    "Giàu dinh dưỡng, tốt cho sức khỏe",
    "Đóng gói cẩn thận, bảo quản tốt",
];

/// Storage guidance shown below the highlights.
pub const STORAGE_GUIDANCE: &str = "Để đảm bảo sản phẩm luôn tươi ngon, bạn nên bảo quản \
trong tủ lạnh ở nhiệt độ 2-5°C. Nên sử dụng trong vòng 5-7 ngày sau khi mua để đảm bảo \
chất lượng tốt nhất.";

/// Second paragraph of the long description, shared by every product.
const ORIGIN_PARAGRAPH: &str = "Được trồng tại các vùng nông nghiệp sạch, sản phẩm của \
chúng tôi luôn đảm bảo chất lượng và hương vị tự nhiên. Chúng tôi cam kết mang đến cho \
khách hàng những sản phẩm tươi ngon nhất, góp phần vào việc bảo vệ sức khỏe của gia đình bạn.";

/// Rows of the specifications tab.
pub const SPECIFICATIONS: [(&str, &str); 5] = [
    ("Xuất xứ", "Việt Nam"),
    ("Vùng trồng", "Đà Lạt, Lâm Đồng"),
    ("Tiêu chuẩn", "VietGAP"),
    ("Quy cách đóng gói", "500g/gói"),
    ("Hạn sử dụng", "7 ngày kể từ ngày thu hoạch"),
];

/// Service guarantees shown under the buy buttons.
pub const SERVICE_HIGHLIGHTS: [(&str, &str); 4] = [
    ("🚚", "Giao hàng toàn quốc"),
    ("🛡", "Đảm bảo chất lượng"),
    ("↺", "Đổi trả trong 7 ngày"),
    ("☎", "Hỗ trợ 24/7"),
];

/// Tab keys on the detail page.
pub const TAB_DETAILS: &str = "details";
pub const TAB_SPECIFICATIONS: &str = "specifications";
pub const TAB_REVIEWS: &str = "reviews";

/// Everything a detail page renders for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub category_name: String,
    pub gallery: Vec<String>,
    pub related: Vec<Product>,
    /// Shown under "Mô tả:" next to the price.
    pub short_description: String,
    /// Paragraphs of the details tab.
    pub long_description: [String; 2],
}

impl ProductDetail {
    /// Resolve `id` against the catalog and derive gallery and related products.
    pub fn resolve(
        catalog: &Catalog,
        id: &str,
        config: &StorefrontConfig,
    ) -> Result<Self, CommerceError> {
        let product = catalog.resolve(id, config.unknown_product)?;
        let related = catalog
            .related(product, config.related_limit)
            .into_iter()
            .cloned()
            .collect();

        Ok(Self {
            category_name: catalog.category_name(&product.category).to_string(),
            gallery: gallery_images(product, config),
            short_description: short_description(product),
            long_description: long_description(product),
            product: product.clone(),
            related,
        })
    }

    /// Review count label on the reviews tab.
    pub fn reviews_tab_label(&self) -> String {
        format!("Đánh giá ({})", self.product.rating_count)
    }

    /// Rating text next to the stars.
    pub fn rating_label(&self) -> String {
        format!("{} ({} đánh giá)", self.product.rating, self.product.rating_count)
    }
}

pub fn short_description(product: &Product) -> String {
    format!(
        "{} được trồng và thu hoạch theo tiêu chuẩn VietGAP, đảm bảo an toàn vệ sinh thực phẩm. \
Sản phẩm tươi ngon, không sử dụng hóa chất độc hại, phù hợp cho mọi gia đình.",
        product.name
    )
}

pub fn long_description(product: &Product) -> [String; 2] {
    [
        format!(
            "{} là sản phẩm nông nghiệp chất lượng cao, được trồng và thu hoạch theo tiêu chuẩn \
VietGAP, đảm bảo an toàn vệ sinh thực phẩm. Sản phẩm tươi ngon, không sử dụng hóa chất độc hại, \
phù hợp cho mọi gia đình.",
            product.name
        ),
        ORIGIN_PARAGRAPH.to_string(),
    ]
}

/// Gallery paths: the product image first, then the configured detail shots.
///
/// Blank entries are replaced by the placeholder.
pub fn gallery_images(product: &Product, config: &StorefrontConfig) -> Vec<String> {
    std::iter::once(&product.image)
        .chain(config.gallery_extra_images.iter())
        .map(|src| or_placeholder(src, &config.placeholder_image))
        .collect()
}

/// The gallery image at `index`, or the placeholder when there is none.
pub fn image_at(gallery: &[String], index: usize, placeholder: &str) -> String {
    gallery
        .get(index)
        .map(|src| or_placeholder(src, placeholder))
        .unwrap_or_else(|| placeholder.to_string())
}

fn or_placeholder(src: &str, placeholder: &str) -> String {
    if src.trim().is_empty() {
        placeholder.to_string()
    } else {
        src.to_string()
    }
}

/// Page-local state, reset whenever a different product is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailState {
    quantity: u32,
    active_image: usize,
    image_count: usize,
    wishlisted: bool,
}

impl ProductDetailState {
    pub fn new(image_count: usize) -> Self {
        Self {
            quantity: 1,
            active_image: 0,
            image_count,
            wishlisted: false,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Lower the quantity, never below one.
    pub fn decrement_quantity(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn active_image(&self) -> usize {
        self.active_image
    }

    /// Show the image at `index`. Out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index < self.image_count {
            self.active_image = index;
            true
        } else {
            false
        }
    }

    pub fn is_wishlisted(&self) -> bool {
        self.wishlisted
    }

    pub fn toggle_wishlist(&mut self) {
        self.wishlisted = !self.wishlisted;
    }

    /// The cart line "add to cart" dispatches for the current quantity.
    pub fn cart_line(&self, product: &Product) -> CartLine {
        CartLine::from_product(product, i64::from(self.quantity))
    }
}

/// Outcome shown after pressing "add to cart".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartFeedback {
    Added { quantity: u32 },
    Rejected(String),
}

impl AddToCartFeedback {
    pub fn from_result(quantity: u32, result: Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => Self::Added { quantity },
            Err(e) => Self::Rejected(e.to_string()),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Added { quantity } => format!("Đã thêm {quantity} sản phẩm vào giỏ hàng"),
            Self::Rejected(reason) => format!("Không thể thêm vào giỏ hàng: {reason}"),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Added { .. } => "feedback feedback--ok",
            Self::Rejected(_) => "feedback feedback--error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farme_commerce::catalog::UnknownProductPolicy;
    use farme_commerce::money::Money;

    fn bundled() -> StorefrontConfig {
        StorefrontConfig::bundled()
    }

    #[test]
    fn test_resolve_known_product() {
        let catalog = Catalog::builtin();
        let detail = ProductDetail::resolve(&catalog, "7", &bundled()).unwrap();

        assert_eq!(detail.product.id.as_str(), "7");
        assert_eq!(detail.category_name, "Trái cây");
        assert!(detail.related.iter().all(|p| p.category == detail.product.category));
        assert!(detail.related.iter().all(|p| p.id != detail.product.id));
    }

    #[test]
    fn test_resolve_caps_related() {
        let catalog = Catalog::builtin();
        let detail = ProductDetail::resolve(&catalog, "1", &bundled()).unwrap();
        assert_eq!(detail.related.len(), 4);

        let narrow = bundled().with_related_limit(2);
        let detail = ProductDetail::resolve(&catalog, "1", &narrow).unwrap();
        assert_eq!(detail.related.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_follows_policy() {
        let catalog = Catalog::builtin();
        let detail = ProductDetail::resolve(&catalog, "missing", &bundled()).unwrap();
        assert_eq!(detail.product.id.as_str(), "1");

        let strict = bundled().with_unknown_product(UnknownProductPolicy::NotFound);
        let err = ProductDetail::resolve(&catalog, "missing", &strict).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("missing".to_string()));
    }

    #[test]
    fn test_gallery_starts_with_product_image() {
        let catalog = Catalog::builtin();
        let product = catalog.get("4").unwrap();
        let gallery = gallery_images(product, &bundled());

        assert_eq!(gallery.len(), 4);
        assert_eq!(gallery[0], product.image);
        assert_eq!(gallery[1], "/images/products/product-detail-2.jpg");
    }

    #[test]
    fn test_gallery_uses_placeholder_for_missing_image() {
        let catalog = Catalog::builtin();
        let mut product = catalog.get("4").unwrap().clone();
        product.image = String::new();

        let gallery = gallery_images(&product, &StorefrontConfig::default());
        assert_eq!(gallery, vec!["/placeholder.svg".to_string()]);
    }

    #[test]
    fn test_gallery_replaces_blank_extras() {
        let catalog = Catalog::builtin();
        let product = catalog.get("4").unwrap();
        let mut config = StorefrontConfig::default();
        config.gallery_extra_images = vec![
            "/images/products/product-detail-2.jpg".to_string(),
            "  ".to_string(),
        ];

        let gallery = gallery_images(product, &config);
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery[1], "/images/products/product-detail-2.jpg");
        assert_eq!(gallery[2], "/placeholder.svg");
    }

    #[test]
    fn test_image_at_falls_back_to_placeholder() {
        let gallery = vec!["/a.jpg".to_string(), String::new()];
        assert_eq!(image_at(&gallery, 0, "/placeholder.svg"), "/a.jpg");
        assert_eq!(image_at(&gallery, 1, "/placeholder.svg"), "/placeholder.svg");
        assert_eq!(image_at(&gallery, 7, "/placeholder.svg"), "/placeholder.svg");
    }

    #[test]
    fn test_descriptions_name_the_product() {
        let catalog = Catalog::builtin();
        let detail = ProductDetail::resolve(&catalog, "7", &bundled()).unwrap();

        assert!(detail
            .short_description
            .starts_with("Bưởi da xanh Bến Tre được trồng và thu hoạch theo tiêu chuẩn VietGAP"));
        assert!(detail.short_description.ends_with("phù hợp cho mọi gia đình."));
        assert!(detail.long_description[0].starts_with("Bưởi da xanh Bến Tre là sản phẩm nông nghiệp"));
        assert!(detail.long_description[1].starts_with("Được trồng tại các vùng nông nghiệp sạch"));
        assert_eq!(HIGHLIGHTS[0], "Sản phẩm tươi ngon, chất lượng cao");
    }

    #[test]
    fn test_quantity_never_below_one() {
        let mut state = ProductDetailState::new(4);
        assert_eq!(state.quantity(), 1);
        assert!(!state.can_decrement());

        state.decrement_quantity();
        assert_eq!(state.quantity(), 1);

        state.increment_quantity();
        state.increment_quantity();
        assert_eq!(state.quantity(), 3);
        assert!(state.can_decrement());

        state.decrement_quantity();
        assert_eq!(state.quantity(), 2);
    }

    #[test]
    fn test_increment_then_decrement_restores_quantity() {
        let mut state = ProductDetailState::new(4);
        state.increment_quantity();
        let before = state.quantity();

        for _ in 0..5 {
            state.increment_quantity();
        }
        for _ in 0..5 {
            state.decrement_quantity();
        }
        assert_eq!(state.quantity(), before);
    }

    #[test]
    fn test_select_image_ignores_out_of_range() {
        let mut state = ProductDetailState::new(4);
        assert!(state.select_image(2));
        assert_eq!(state.active_image(), 2);

        assert!(!state.select_image(4));
        assert_eq!(state.active_image(), 2);
    }

    #[test]
    fn test_wishlist_toggle() {
        let mut state = ProductDetailState::new(1);
        state.toggle_wishlist();
        assert!(state.is_wishlisted());
        state.toggle_wishlist();
        assert!(!state.is_wishlisted());
    }

    #[test]
    fn test_cart_line_uses_quantity() {
        let catalog = Catalog::builtin();
        let product = catalog.get("7").unwrap();
        let mut state = ProductDetailState::new(4);
        state.increment_quantity();

        let line = state.cart_line(product);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, Money::vnd(65000));
        assert_eq!(line.product_id, product.id);
    }

    #[test]
    fn test_labels() {
        let catalog = Catalog::builtin();
        let detail = ProductDetail::resolve(&catalog, "1", &bundled()).unwrap();
        let count = detail.product.rating_count;

        assert_eq!(detail.reviews_tab_label(), format!("Đánh giá ({count})"));
        assert!(detail.rating_label().ends_with(&format!("({count} đánh giá)")));
    }

    #[test]
    fn test_feedback_messages() {
        let ok = AddToCartFeedback::from_result(3, Ok(()));
        assert_eq!(ok, AddToCartFeedback::Added { quantity: 3 });
        assert!(ok.message().contains('3'));

        let rejected = AddToCartFeedback::from_result(
            1,
            Err(StoreError::Commerce(CommerceError::InvalidQuantity(0))),
        );
        assert_eq!(rejected.class(), "feedback feedback--error");
    }
}

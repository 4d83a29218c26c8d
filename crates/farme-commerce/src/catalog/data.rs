//! Built-in catalog data.

use crate::catalog::{Category, Product, Seller};
use crate::money::Money;

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new("1", "Rau củ", "rau-cu"),
        Category::new("2", "Trái cây", "trai-cay"),
        Category::new("3", "Gạo & Ngũ cốc", "gao-ngu-coc"),
        Category::new("4", "Hạt giống", "hat-giong"),
        Category::new("5", "Phân bón", "phan-bon"),
        Category::new("6", "Đặc sản vùng miền", "dac-san"),
    ]
}

fn dalat_xanh() -> Seller {
    Seller::new("dalat-xanh", "Nông trại Đà Lạt Xanh")
}

fn cu_chi() -> Seller {
    Seller::new("cu-chi", "HTX Rau sạch Củ Chi")
}

fn cai_mon() -> Seller {
    Seller::new("cai-mon", "Vườn trái cây Cái Mơn")
}

fn soc_trang() -> Seller {
    Seller::new("soc-trang", "Gạo sạch Sóc Trăng")
}

fn phu_nong() -> Seller {
    Seller::new("phu-nong", "Vật tư Nông nghiệp Phú Nông")
}

fn image(file: &str) -> String {
    format!("/images/products/{file}.jpg")
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Cà chua bi Đà Lạt", Money::vnd(35000), "rau-cu", image("ca-chua-bi"), dalat_xanh())
            .with_discount(Money::vnd(42000), 17)
            .with_rating(4.8, 126),
        Product::new("2", "Xà lách thủy canh", Money::vnd(25000), "rau-cu", image("xa-lach"), dalat_xanh())
            .with_rating(4.5, 88),
        Product::new("3", "Cải bó xôi hữu cơ", Money::vnd(28000), "rau-cu", image("cai-bo-xoi"), cu_chi())
            .with_discount(Money::vnd(32000), 12)
            .with_rating(4.6, 58),
        Product::new("4", "Cà rốt Đà Lạt", Money::vnd(22000), "rau-cu", image("ca-rot"), dalat_xanh())
            .with_rating(4.3, 47),
        Product::new("5", "Bí đỏ hồ lô", Money::vnd(30000), "rau-cu", image("bi-do"), cu_chi())
            .with_rating(4.1, 32),
        Product::new("6", "Rau muống sạch", Money::vnd(15000), "rau-cu", image("rau-muong"), cu_chi())
            .with_rating(4.4, 203),
        Product::new("7", "Bưởi da xanh Bến Tre", Money::vnd(65000), "trai-cay", image("buoi-da-xanh"), cai_mon())
            .with_discount(Money::vnd(80000), 19)
            .with_rating(4.9, 311),
        Product::new("8", "Sầu riêng Ri6", Money::vnd(120000), "trai-cay", image("sau-rieng"), cai_mon())
            .with_rating(4.7, 154),
        Product::new("9", "Chôm chôm Java", Money::vnd(40000), "trai-cay", image("chom-chom"), cai_mon())
            .with_rating(4.2, 76),
        Product::new("10", "Gạo ST25 túi 5kg", Money::vnd(185000), "gao-ngu-coc", image("gao-st25"), soc_trang())
            .with_discount(Money::vnd(210000), 12)
            .with_rating(4.9, 542),
        Product::new("11", "Gạo lứt đỏ túi 2kg", Money::vnd(76000), "gao-ngu-coc", image("gao-lut"), soc_trang())
            .with_rating(4.5, 97),
        Product::new("12", "Hạt giống rau cải ngọt", Money::vnd(12000), "hat-giong", image("hat-giong-cai"), phu_nong())
            .with_rating(4.0, 41),
        Product::new("13", "Phân bón hữu cơ vi sinh 5kg", Money::vnd(95000), "phan-bon", image("phan-huu-co"), phu_nong())
            .with_discount(Money::vnd(110000), 14)
            .with_rating(4.4, 63),
        Product::new("14", "Mật ong hoa cà phê", Money::vnd(150000), "dac-san", image("mat-ong"), dalat_xanh())
            .with_rating(4.8, 189),
    ]
}

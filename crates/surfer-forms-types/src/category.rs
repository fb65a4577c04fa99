//! The best-seller category catalog.
//!
//! The category multi-select is populated from this static table; the form
//! posts the numeric ids back as strings.

use serde::Serialize;

/// One top-level best-seller category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u8,
    pub name: &'static str,
    pub link: &'static str,
}

impl Category {
    /// Looks a category up by its form id.
    pub fn by_id(id: u8) -> Option<Category> {
        CATEGORIES.iter().find(|c| c.id == id).copied()
    }

    /// The full catalog, in id order.
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }
}

const fn cat(id: u8, name: &'static str, link: &'static str) -> Category {
    Category { id, name, link }
}

#[rustfmt::skip]
static CATEGORIES: [Category; 36] = [
    cat(1, "Appliances", "https://www.amazon.com/Best-Sellers-Appliances/zgbs/appliances"),
    cat(2, "Apps & Games", "https://www.amazon.com/Best-Sellers-Appstore-Android/zgbs/mobile-apps"),
    cat(3, "Arts, Crafts & Sewing", "https://www.amazon.com/Best-Sellers-Arts-Crafts-Sewing/zgbs/arts-crafts"),
    cat(4, "Automotive", "https://www.amazon.com/Best-Sellers-Automotive/zgbs/automotive"),
    cat(5, "Baby", "https://www.amazon.com/Best-Sellers-Baby/zgbs/baby-products"),
    cat(6, "Beauty & Personal Care", "https://www.amazon.com/Best-Sellers-Beauty/zgbs/beauty"),
    cat(7, "Books", "https://www.amazon.com/best-sellers-books-Amazon/zgbs/books"),
    cat(8, "CDs & Vinyl", "https://www.amazon.com/best-sellers-music-albums/zgbs/music"),
    cat(9, "Camera & Photo", "https://www.amazon.com/best-sellers-camera-photo/zgbs/photo"),
    cat(10, "Cell Phones & Accessories", "https://www.amazon.com/Best-Sellers-Cell-Phones-Accessories/zgbs/wireless"),
    cat(11, "Clothing, Shoes & Jewelry", "https://www.amazon.com/Best-Sellers/zgbs/fashion"),
    cat(12, "Collectible Coins", "https://www.amazon.com/Best-Sellers-Collectible-Coins/zgbs/coins"),
    cat(13, "Computers & Accessories", "https://www.amazon.com/Best-Sellers-Computers-Accessories/zgbs/pc"),
    cat(14, "Digital Music", "https://www.amazon.com/Best-Sellers-MP3-Downloads/zgbs/dmusic"),
    cat(15, "Electronics", "https://www.amazon.com/Best-Sellers-Electronics/zgbs/electronics"),
    cat(16, "Entertainment Collectibles", "https://www.amazon.com/Best-Sellers-Entertainment-Collectibles/zgbs/entertainment-collectibles"),
    cat(17, "Gift Cards", "https://www.amazon.com/Best-Sellers-Gift-Cards/zgbs/gift-cards"),
    cat(18, "Grocery & Gourmet Food", "https://www.amazon.com/Best-Sellers-Grocery-Gourmet-Food/zgbs/grocery"),
    cat(19, "Health & Household", "https://www.amazon.com/Best-Sellers-Health-Personal-Care/zgbs/hpc"),
    cat(20, "Home & Kitchen", "https://www.amazon.com/Best-Sellers-Home-Kitchen/zgbs/home-garden"),
    cat(21, "Industrial & Scientific", "https://www.amazon.com/Best-Sellers-Industrial-Scientific/zgbs/industrial"),
    cat(22, "Kindle Store", "https://www.amazon.com/Best-Sellers-Kindle-Store/zgbs/digital-text"),
    cat(23, "Kitchen & Dining", "https://www.amazon.com/Best-Sellers-Kitchen-Dining/zgbs/kitchen"),
    cat(24, "Magazine Subscriptions", "https://www.amazon.com/Best-Sellers-Magazines/zgbs/magazines"),
    cat(25, "Movies & TV", "https://www.amazon.com/best-sellers-movies-TV-DVD-Blu-ray/zgbs/movies-tv"),
    cat(26, "Musical Instruments", "https://www.amazon.com/Best-Sellers-Musical-Instruments/zgbs/musical-instruments"),
    cat(27, "Office Products", "https://www.amazon.com/Best-Sellers-Office-Products/zgbs/office-products"),
    cat(28, "Patio, Lawn & Garden", "https://www.amazon.com/Best-Sellers-Patio-Lawn-Garden/zgbs/lawn-garden"),
    cat(29, "Pet Supplies", "https://www.amazon.com/Best-Sellers-Pet-Supplies/zgbs/pet-supplies"),
    cat(30, "Prime Pantry", "https://www.amazon.com/Best-Sellers-Prime-Pantry/zgbs/pantry"),
    cat(31, "Software", "https://www.amazon.com/best-sellers-software/zgbs/software"),
    cat(32, "Sports & Outdoors", "https://www.amazon.com/Best-Sellers-Sports-Outdoors/zgbs/sporting-goods"),
    cat(33, "Sports Collectibles", "https://www.amazon.com/Best-Sellers-Sports-Collectibles/zgbs/sports-collectibles"),
    cat(34, "Tools & Home Improvement", "https://www.amazon.com/Best-Sellers-Home-Improvement/zgbs/hi"),
    cat(35, "Toys & Games", "https://www.amazon.com/Best-Sellers-Toys-Games/zgbs/toys-and-games"),
    cat(36, "Video Games", "https://www.amazon.com/best-sellers-video-games/zgbs/videogames"),
];

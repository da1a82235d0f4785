use crate::game_engine::{
    geometry::{PlayArea, Point, Rect},
    helpers::reusable,
    models::{Item, Zone, ZoneRole},
};

/// Side of the square hit box around each reuse station icon.
pub const STATION_SIZE: f32 = 80.0;

pub fn items() -> Vec<Item> {
    vec![
        reusable(1, "Cardboard Box", "shippingbox", true, &["Play House", "Storage Bin", "Art Canvas"]),
        reusable(2, "Glass Jar", "jar", true, &["Pencil Holder", "Vase", "Terrarium"]),
        reusable(3, "Old T-Shirt", "tshirt", true, &["Rags", "Tote Bag", "Quilt"]),
        reusable(4, "Egg Carton", "cube.box.fill", true, &["Seed Starter", "Paint Palette", "Organizer"]),
        reusable(5, "Plastic Bottle", "drop.fill", true, &["Bird Feeder", "Watering Can", "Piggy Bank"]),
        reusable(6, "Newspaper", "newspaper.fill", true, &["Gift Wrap", "Paper Mache", "Compost"]),
        reusable(7, "Tin Can", "music.note", true, &["Wind Chime", "Pencil Holder", "Plant Pot"]),
        reusable(8, "Wine Cork", "pin.fill", true, &["Bulletin Board", "Craft Stamps", "Mini Figures"]),
        reusable(9, "Banana Peel", "leaf.fill", false, &[]),
        reusable(10, "Broken Glass", "flame.fill", false, &[]),
    ]
}

/// Trash (left half of the strip), home (right half), then the craft and
/// garden stations in the top corners.
pub fn zones(area: &PlayArea) -> Vec<Zone> {
    let half = area.width / 2.0;
    let top = area.zone_top();
    let height = area.zone_height();
    let m = area.margin;
    vec![
        Zone::new("trash", ZoneRole::Disposal, Rect::new(0.0, top, half, height)),
        Zone::new("home", ZoneRole::ReuseCapable, Rect::new(half, top, half, height)),
        Zone::new("craft", ZoneRole::ReuseCapable, Rect::centered(Point::new(m, m), STATION_SIZE)),
        Zone::new("garden", ZoneRole::ReuseCapable,
            Rect::centered(Point::new(area.width - m, m), STATION_SIZE)),
    ]
}

use crate::game_engine::{
    geometry::{PlayArea, Rect},
    helpers::recyclable,
    models::{Category, Item, Zone, ZoneRole},
};

pub fn items() -> Vec<Item> {
    vec![
        recyclable(1, "Cardboard Box", "shippingbox", Category::Paper,
            &["Make sure the box is clean"]),
        recyclable(2, "Used Paper", "document.on.document", Category::Paper,
            &["Make sure the paper is clean"]),
        recyclable(3, "Glass Bottle", "wineglass", Category::Glass,
            &["Clean the bottle thoroughly", "Dry it completely"]),
        recyclable(4, "Plastic Bottle", "waterbottle", Category::Plastic,
            &["Clean the bottle thoroughly", "Dry it completely"]),
        recyclable(5, "Aluminium Can", "cylinder", Category::Metal,
            &["Clean the can thoroughly", "Dry it completely"]),
    ]
}

/// One bin per category, equal widths, in `Category::ALL` order.
pub fn zones(area: &PlayArea) -> Vec<Zone> {
    let width = area.width / Category::ALL.len() as f32;
    let top = area.zone_top();
    let height = area.zone_height();
    Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &cat)| {
            Zone::new(cat.to_string(), ZoneRole::Bin(cat), Rect::new(i as f32 * width, top, width, height))
        })
        .collect()
}

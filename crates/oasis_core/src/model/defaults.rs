//! Shipped default dataset.
//!
//! Seeds the gallery on first run and supplies structure (ids, names,
//! sub-record shape) when reconciling stored edits.

use crate::model::record::{ContentRecord, SubRecord};
use once_cell::sync::Lazy;

static DEFAULT_RECORDS: Lazy<Vec<ContentRecord>> = Lazy::new(build_default_records);

/// Returns the immutable default dataset in display order.
pub fn default_records() -> &'static [ContentRecord] {
    DEFAULT_RECORDS.as_slice()
}

fn placeholder_image(seed: u32) -> String {
    format!("https://picsum.photos/800/600?random={seed}")
}

fn build_default_records() -> Vec<ContentRecord> {
    vec![
        ContentRecord::new(
            "1",
            "Welcoming Archway",
            "A grand entrance featuring custom sustainable wood structures, draped with linen and adorned with native desert flora to set the tone for the oasis.",
            placeholder_image(1),
        ),
        ContentRecord::new(
            "2",
            "Boho Tents",
            "Five luxurious relaxation units equipped with plush cushions, low tables, and ambient lighting, providing a serene escape for guests.",
            placeholder_image(2),
        ),
        ContentRecord::new(
            "3",
            "Site Decorations",
            "Curated ambiance elements including woven lanterns, macramé art pieces, and warm string lighting to create a cohesive magical atmosphere.",
            placeholder_image(3),
        ),
        ContentRecord::new(
            "4",
            "Premium Harvest Feast",
            "A culinary journey featuring live BBQ stations, fresh organic salads, and artisanal breads, celebrating the bounty of the season.",
            placeholder_image(4),
        ),
        ContentRecord::new(
            "5",
            "Ice Cream Cart",
            "A charming vintage trike serving artisanal gelato and sorbets in custom branded cups, perfect for a refreshing treat.",
            placeholder_image(5),
        ),
        ContentRecord::new(
            "6",
            "Oasis Legacy Gift Bags",
            "Premium tote bags containing a portable charger, cooling mist spray, scented soy candle, and a keepsake event guide.",
            placeholder_image(6),
        ),
        ContentRecord::new(
            "7",
            "Selfie Setup Area",
            "A dedicated photogenic zone with a floral backdrop, ring lights, and fun thematic props to capture memories.",
            placeholder_image(7),
        ),
        ContentRecord::new(
            "8",
            "Games Area",
            "Interactive entertainment zone featuring high-quality activities for everyone to enjoy. A variety of games are available to ensure guests of all ages are entertained throughout the event.",
            placeholder_image(8),
        )
        .with_sub_items(vec![
            SubRecord::new("8-1", "Table Football", placeholder_image(81)),
            SubRecord::new("8-2", "Table Tennis", placeholder_image(82)),
            SubRecord::new("8-3", "Giant Soccer", placeholder_image(83)),
            SubRecord::new("8-4", "Carrom Board", placeholder_image(84)),
        ]),
        ContentRecord::new(
            "9",
            "Fragrance Mixing Activity",
            "An interactive station where guests can create their own signature scent using essential oils and botanical extracts.",
            placeholder_image(9),
        ),
        ContentRecord::new(
            "10",
            "Plant a Seed Station",
            "A symbolic activity allowing guests to pot their own succulent or herb to take home, representing growth and the future.",
            placeholder_image(10),
        ),
    ]
}

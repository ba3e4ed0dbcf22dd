//! Item categories published by the game data

/// A browsable item category.
///
/// The set of categories is fixed and mirrors the feed files published
/// under `data/conf/items/`. Each category carries the sprite name of a
/// representative item, used by pickers and listings.
///
/// # Example
///
/// ```
/// use itemdex_lib::model::Category;
///
/// let armors = Category::find("armors").unwrap();
/// assert_eq!(armors.singular(), "armor");
/// assert_eq!(armors.icon(), Some("plate_armor"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    name: &'static str,
    icon: &'static str,
}

/// All categories in display order. An empty icon marks a category
/// without a usable representative sprite.
static CATEGORIES: [Category; 33] = [
    Category { name: "armors", icon: "plate_armor" },
    Category { name: "arrows", icon: "wooden_arrow" },
    Category { name: "axes", icon: "battle_axe" },
    Category { name: "books", icon: "book_blue" },
    Category { name: "boots", icon: "mainio_boots" },
    Category { name: "boxes", icon: "stocking" },
    Category { name: "capturetheflag", icon: "" },
    Category { name: "cloaks", icon: "black_dragon_cloak" },
    Category { name: "clubs", icon: "grand_warhammer" },
    Category { name: "containers", icon: "bottle_eared" },
    Category { name: "crystals", icon: "crystal_pink" },
    Category { name: "documents", icon: "paper" },
    Category { name: "drinks", icon: "wine" },
    Category { name: "flowers", icon: "rose" },
    Category { name: "food", icon: "carrot" },
    Category { name: "helmets", icon: "red_helmet" },
    Category { name: "herbs", icon: "arandula" },
    Category { name: "jewellery", icon: "diamond" },
    Category { name: "keys", icon: "purple" },
    Category { name: "legs", icon: "golden_legs" },
    Category { name: "miscs", icon: "dice" },
    Category { name: "missiles", icon: "wooden_spear" },
    Category { name: "money", icon: "gold" },
    Category { name: "ranged", icon: "longbow" },
    Category { name: "relics", icon: "amulet" },
    Category { name: "resources", icon: "wood" },
    Category { name: "rings", icon: "engagement_ring" },
    Category { name: "scrolls", icon: "fado" },
    Category { name: "shields", icon: "enhanced_lion_shield" },
    Category { name: "special", icon: "mythical_egg" },
    Category { name: "swords", icon: "scimitar" },
    Category { name: "tokens", icon: "darkyellow_round_token" },
    Category { name: "tools", icon: "pick" },
];

impl Category {
    /// All known categories in display order.
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// Looks up a category by its feed name.
    pub fn find(name: &str) -> Option<Category> {
        CATEGORIES.iter().copied().find(|category| category.name == name)
    }

    /// The feed name, as it appears in the feed URL.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Sprite name of the representative item, if the category has one.
    pub fn icon(&self) -> Option<&'static str> {
        (!self.icon.is_empty()).then_some(self.icon)
    }

    /// Position in the fixed display order.
    pub fn position(&self) -> usize {
        CATEGORIES.iter().position(|category| category == self).unwrap_or(0)
    }

    /// Singular form of the category name. Sprite directories and item
    /// home pages are keyed by this form.
    pub fn singular(&self) -> String {
        singularize(self.name)
    }
}

/// Category names that map to a different singular entirely.
const ALTERNATE_NAMES: [(&str, &str); 1] = [("arrows", "ammunition")];

/// Plural-looking names that are already in their final form.
const KEEP_PLURAL: [&str; 3] = ["boots", "documents", "legs"];

/// Names whose trailing `es` belongs to the stem.
const ENDS_IN_E: [&str; 3] = ["axes", "missiles", "resources"];

/// Derives the singular form of a category name.
///
/// `armors` becomes `armor`, `boxes` becomes `box`, while exception
/// names pass through the alternate and keep-plural tables first. The
/// transform is idempotent, so an already-singular name is returned
/// unchanged.
pub fn singularize(category: &str) -> String {
    let renamed = ALTERNATE_NAMES
        .iter()
        .find(|(plural, _)| *plural == category)
        .map_or(category, |(_, singular)| *singular);
    if KEEP_PLURAL.contains(&renamed) {
        return renamed.to_string();
    }

    let mut name = renamed.to_string();
    while ends_with_ci(&name, "es") {
        if ENDS_IN_E.contains(&name.as_str()) {
            break;
        }
        name.truncate(name.len() - 2);
    }
    while ends_with_ci(&name, "s") {
        name.truncate(name.len() - 1);
    }
    name
}

/// ASCII case-insensitive suffix check that respects char boundaries.
fn ends_with_ci(text: &str, suffix: &str) -> bool {
    let Some(split) = text.len().checked_sub(suffix.len()) else {
        return false;
    };
    text.is_char_boundary(split) && text[split..].eq_ignore_ascii_case(suffix)
}

// ============================================================================
// Tests
// ============================================================================

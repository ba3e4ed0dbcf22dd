//! URL construction for the published game data

/// Raw-content root holding the game's data files.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/arianne/stendhal/";

/// Public website root serving item home pages.
pub const DEFAULT_SITE_URL: &str = "https://stendhalgame.org/";

/// Build properties on the master branch, used for release discovery.
pub fn version_properties_url(base_url: &str) -> String {
    format!("{}/master/build.ant.properties", base_url.trim_end_matches('/'))
}

/// Category feed under a release tag.
pub fn feed_url(base_url: &str, release_tag: &str, category: &str) -> String {
    format!(
        "{}/{}/data/conf/items/{}.xml",
        base_url.trim_end_matches('/'),
        release_tag,
        urlencoding::encode(category)
    )
}

/// Sprite image for an item class and sprite name.
///
/// Sprite files use underscores where display names carry spaces.
pub fn sprite_url(base_url: &str, release_tag: &str, class: &str, sprite: &str) -> String {
    format!(
        "{}/{}/data/sprites/items/{}/{}.png",
        base_url.trim_end_matches('/'),
        release_tag,
        urlencoding::encode(class),
        urlencoding::encode(&underscored(sprite))
    )
}

/// Item home page on the public website.
pub fn home_url(site_url: &str, class: &str, item_name: &str) -> String {
    format!(
        "{}/item/{}/{}.html",
        site_url.trim_end_matches('/'),
        urlencoding::encode(class),
        urlencoding::encode(&underscored(item_name))
    )
}

fn underscored(name: &str) -> String {
    name.replace(' ', "_")
}

// ============================================================================
// Tests
// ============================================================================

//! Recipe summary cards.

use recipes_catalog::Recipe;

/// Image shown when a recipe has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
/// Tags shown on a card before collapsing the rest into `+N`.
pub const MAX_CARD_TAGS: usize = 3;

/// Route of the detail view for a recipe.
pub fn recipe_link(id: u64) -> String {
    format!("/recipe/{id}")
}

pub fn image_source(recipe: &Recipe) -> &str {
    if recipe.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        &recipe.image
    }
}

/// Rating with one decimal, e.g. `4.6`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Difficulty label followed by its badge class, e.g. `Easy [difficulty-badge difficulty-easy]`.
pub fn difficulty_badge(recipe: &Recipe) -> String {
    format!(
        "{} [{}]",
        recipe.difficulty,
        recipe.difficulty_level().badge_class()
    )
}

pub fn render_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> String {
    tags.into_iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Card tags: the first [`MAX_CARD_TAGS`], then a `+N` overflow tag.
pub fn card_tags(tags: &[String]) -> Vec<String> {
    let mut shown = tags
        .iter()
        .take(MAX_CARD_TAGS)
        .cloned()
        .collect::<Vec<_>>();

    if tags.len() > MAX_CARD_TAGS {
        shown.push(format!("+{}", tags.len() - MAX_CARD_TAGS));
    }

    shown
}

pub fn render_card(recipe: &Recipe) -> String {
    let tags = card_tags(&recipe.tags);
    let mut lines = vec![
        format!("{}  -> {}", recipe.name, recipe_link(recipe.id)),
        format!(
            "  {}  ⭐ {}",
            difficulty_badge(recipe),
            format_rating(recipe.rating)
        ),
    ];

    if !tags.is_empty() {
        lines.push(format!("  {}", render_tags(tags.iter().map(String::as_str))));
    }

    lines.push(format!("  image: {}", image_source(recipe)));
    lines.join("\n")
}

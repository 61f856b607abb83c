use tracing::{info, warn};

use crate::CommandMeta;
use recipes_catalog::{CatalogError, Recipe};
use recipes_core::Context;
use recipes_utils::parse::parse_recipe_id;

use super::BACK_HINT;
use super::card::{difficulty_badge, format_rating, image_source, render_tags};

pub const META: CommandMeta = CommandMeta {
    name: "show",
    desc: "Show the full recipe with ingredients and instructions.",
    category: "recipes",
    usage: "show <id>",
};

pub const NOT_FOUND_TITLE: &str = "Recipe not found";

/// Show one recipe.
///
/// Inputs:
/// - required recipe id: `show <id>`, `show #<id>` or `show /recipe/<id>`.
///
/// Error behavior:
/// - missing or malformed id returns this command's usage.
/// - catalog failures render the not-found view with the failure text.
pub async fn run(ctx: &Context, arg1: Option<&str>) -> anyhow::Result<String> {
    let Some(id) = arg1.and_then(parse_recipe_id) else {
        return Ok(format!("Usage: `{}`", META.usage));
    };

    match ctx.catalog.fetch_recipe(id).await {
        Ok(recipe) => {
            info!(id, name = %recipe.name, "loaded recipe");
            Ok(render_detail(&recipe))
        }
        Err(source) => {
            warn!(?source, id, "failed to fetch recipe");
            Ok(render_not_found(&failure_message(&source)))
        }
    }
}

pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch recipe";

/// User-facing text for a failed detail fetch.
pub fn failure_message(error: &CatalogError) -> String {
    let message = error.to_string();
    if message.is_empty() {
        FETCH_FAILED_FALLBACK.to_owned()
    } else {
        message
    }
}

pub fn render_not_found(message: &str) -> String {
    format!("{BACK_HINT}\n\n{NOT_FOUND_TITLE}\n{message}")
}

pub fn render_detail(recipe: &Recipe) -> String {
    let mut sections = vec![BACK_HINT.to_owned()];

    sections.push(
        [
            recipe.name.clone(),
            format!(
                "{}  ★ {} ({} reviews)",
                difficulty_badge(recipe),
                format_rating(recipe.rating),
                recipe.review_count
            ),
            format!("image: {}", image_source(recipe)),
        ]
        .join("\n"),
    );

    let mut stats = vec![format!(
        "Total Time: {} min | Servings: {} | Calories: {} kcal | Cuisine: {}",
        recipe.total_time_minutes(),
        recipe.servings,
        recipe.calories_per_serving,
        recipe.cuisine
    )];
    if !recipe.tags.is_empty() {
        stats.push(render_tags(recipe.tags.iter().map(String::as_str)));
    }
    sections.push(stats.join("\n"));

    let mut ingredients = vec!["Ingredients".to_owned()];
    ingredients.extend(
        recipe
            .ingredients
            .iter()
            .map(|ingredient| format!("  • {ingredient}")),
    );
    sections.push(ingredients.join("\n"));

    let mut instructions = vec!["Instructions".to_owned()];
    instructions.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {step}", index + 1)),
    );
    sections.push(instructions.join("\n"));

    sections.push(
        [
            "Recipe Information".to_owned(),
            format!("  Meal Type: {}", recipe.meal_type.join(", ")),
            format!("  Cuisine: {}", recipe.cuisine),
            format!("  Prep Time: {} minutes", recipe.prep_time_minutes),
            format!("  Cook Time: {} minutes", recipe.cook_time_minutes),
        ]
        .join("\n"),
    );

    sections.join("\n\n")
}

/// Recipe summary cards used by the list view.
pub mod card;
/// Single-recipe detail view.
pub mod detail;
/// Paginated recipe listing.
pub mod list;

/// Hint printed at the top of views that can return to the listing.
pub const BACK_HINT: &str = "← Back to Recipes (type `list`)";

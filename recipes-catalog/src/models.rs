use serde::Deserialize;

/// A single recipe as returned by the catalog.
///
/// Fields missing from a response fall back to their defaults; the remote
/// shape is otherwise trusted as-is.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: u32,
    pub tags: Vec<String>,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub meal_type: Vec<String>,
}

impl Recipe {
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::parse(&self.difficulty)
    }
}

/// One page of the recipe listing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RecipesPage {
    pub recipes: Vec<Recipe>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl Difficulty {
    /// Case-insensitive parse; unknown labels map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Other,
        }
    }

    /// Badge class names used when rendering the difficulty.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Easy => "difficulty-badge difficulty-easy",
            Self::Medium => "difficulty-badge difficulty-medium",
            Self::Hard => "difficulty-badge difficulty-hard",
            Self::Other => "difficulty-badge",
        }
    }
}

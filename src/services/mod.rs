pub mod dataset;
pub mod defaults;
pub mod matcher;
pub mod providers;
pub mod recommendations;
pub mod search;

pub use dataset::LocalDataset;
pub use providers::{RecipeLookup, RecipeProvider, SpoonacularProvider};
pub use search::{search_recipes, SearchOutcome};

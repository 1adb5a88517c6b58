use std::collections::HashMap;

use crate::model::{Category, Recipe, RecipeId};

/// In-memory catalog state: category buckets plus the cached popular picks.
/// Every known category is always present as a key, possibly empty.
#[derive(Default)]
pub(crate) struct CatalogState {
    buckets: HashMap<Category, Vec<Recipe>>,
    popular: Vec<RecipeId>,
}

impl CatalogState {
    pub(crate) fn empty() -> Self {
        let mut buckets = HashMap::new();
        for category in Category::ALL {
            buckets.insert(category, Vec::new());
        }
        Self {
            buckets,
            popular: Vec::new(),
        }
    }

    /// Partition by category, preserving source order within each bucket.
    pub(crate) fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut state = Self::empty();
        for recipe in recipes {
            state
                .buckets
                .entry(recipe.category)
                .or_default()
                .push(recipe);
        }
        state
    }

    pub(crate) fn bucket(&self, category: Category) -> &[Recipe] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Category order, then source order within each category.
    pub(crate) fn flatten(&self) -> Vec<Recipe> {
        Category::ALL
            .iter()
            .flat_map(|category| self.bucket(*category).iter().cloned())
            .collect()
    }

    pub(crate) fn find(&self, id: RecipeId) -> Option<&Recipe> {
        Category::ALL
            .iter()
            .flat_map(|category| self.bucket(*category).iter())
            .find(|recipe| recipe.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.buckets
            .values_mut()
            .flat_map(|bucket| bucket.iter_mut())
            .find(|recipe| recipe.id == id)
    }

    /// The full id -> flag map, rewritten to the prefs store on every toggle.
    pub(crate) fn favorites_map(&self) -> HashMap<u32, bool> {
        self.buckets
            .values()
            .flatten()
            .map(|recipe| (recipe.id.0, recipe.favorites))
            .collect()
    }

    pub(crate) fn set_popular(&mut self, ids: Vec<RecipeId>) {
        self.popular = ids;
    }

    pub(crate) fn popular(&self) -> &[RecipeId] {
        &self.popular
    }
}

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CatalogErrorKind, CatalogResult};
use crate::model::{Category, Recipe, RecipeId};

const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// Where the recipe dataset comes from. Read exactly once per load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DatasetSource {
    /// The dataset compiled into the crate, mirroring the app bundle.
    Bundled,
    File(PathBuf),
    /// Raw JSON, mostly for tests.
    Inline(String),
}

impl DatasetSource {
    pub(crate) fn read(&self) -> CatalogResult<String> {
        match self {
            Self::Bundled => Ok(BUNDLED_RECIPES.to_string()),
            Self::File(path) => fs::read_to_string(path).map_err(|err| {
                let detail = if err.kind() == ErrorKind::NotFound {
                    path.display().to_string()
                } else {
                    err.to_string()
                };
                CatalogErrorKind::DatasetUnavailable(detail).into()
            }),
            Self::Inline(raw) => Ok(raw.clone()),
        }
    }
}

/// One record of the dataset document. `category` stays a raw string so a
/// single unknown name cannot fail the whole parse.
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub category: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub favorites: bool,
    #[serde(rename = "imageName")]
    pub image_name: String,
}

impl RecipeRecord {
    /// Records outside the known category set are dropped here.
    pub(crate) fn into_recipe(self) -> Option<Recipe> {
        let Some(category) = Category::from_name(&self.category) else {
            warn!(
                id = self.id.0,
                category = %self.category,
                "dropping recipe with unknown category"
            );
            return None;
        };
        Some(Recipe {
            id: self.id,
            category,
            name: self.name,
            ingredients: self.ingredients,
            steps: self.steps,
            favorites: self.favorites,
            image_name: self.image_name,
        })
    }
}

pub(crate) fn parse(raw: &str) -> CatalogResult<Vec<RecipeRecord>> {
    serde_json::from_str(raw).map_err(|err| CatalogErrorKind::DatasetCorrupt(err.to_string()).into())
}

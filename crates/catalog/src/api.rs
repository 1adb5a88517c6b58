use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use tastebook_prefs_store::PrefsStore;

use crate::dataset;
use crate::errors::{CatalogError, CatalogErrorKind, CatalogResult};
use crate::model::{Category, Recipe, RecipeId};
use crate::policy::CatalogPolicyView;
use crate::sampling;
use crate::store::CatalogState;

/// Outcome of a `load`, for logging by the caller. Dataset failures degrade
/// to an empty catalog and are reported here instead of propagating.
#[derive(Clone, Debug, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub dropped: usize,
    pub favorites_restored: usize,
    pub degraded: Option<CatalogError>,
}

/// Single owner of the recipe data and the derived selections. Explicitly
/// constructed and injected; callers read snapshots and all mutation goes
/// through this one object.
pub struct CatalogService {
    policy: CatalogPolicyView,
    prefs: Arc<dyn PrefsStore>,
    state: RwLock<CatalogState>,
}

impl CatalogService {
    pub fn new(policy: CatalogPolicyView, prefs: Arc<dyn PrefsStore>) -> Self {
        Self {
            policy,
            prefs,
            state: RwLock::new(CatalogState::empty()),
        }
    }

    /// Parse the dataset, overlay persisted favorites, partition by category,
    /// and cache the popular selection. Any dataset failure leaves an empty
    /// but fully usable catalog behind.
    pub fn load(&self) -> LoadSummary {
        let raw = self
            .policy
            .io
            .dataset
            .read()
            .and_then(|raw| dataset::parse(&raw));
        let records = match raw {
            Ok(records) => records,
            Err(err) => {
                warn!("dataset load failed, serving empty catalog: {err}");
                *self.state.write() = CatalogState::empty();
                return LoadSummary {
                    degraded: Some(err),
                    ..LoadSummary::default()
                };
            }
        };

        let overlay = self.read_favorites_overlay();
        let total = records.len();
        let mut favorites_restored = 0;
        let mut recipes = Vec::with_capacity(total);
        for record in records {
            let Some(mut recipe) = record.into_recipe() else {
                continue;
            };
            if let Some(flag) = overlay.get(&recipe.id.0) {
                recipe.favorites = *flag;
                favorites_restored += 1;
            }
            recipes.push(recipe);
        }
        let loaded = recipes.len();
        let dropped = total - loaded;

        let mut state = CatalogState::from_recipes(recipes);
        let mut rng = match self.policy.sampling.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let picks = sampling::popular_selection(&state, self.policy.sampling.passes, &mut rng);
        state.set_popular(picks);
        *self.state.write() = state;

        debug!(loaded, dropped, favorites_restored, "catalog loaded");
        LoadSummary {
            loaded,
            dropped,
            favorites_restored,
            degraded: None,
        }
    }

    /// Drop all loaded data; the catalog goes back to its pre-load state.
    pub fn reset(&self) {
        *self.state.write() = CatalogState::empty();
    }

    /// Read-only snapshot of the category mapping; iteration follows the
    /// fixed category order.
    pub fn catalog(&self) -> BTreeMap<Category, Vec<Recipe>> {
        let state = self.state.read();
        Category::ALL
            .iter()
            .map(|&category| (category, state.bucket(category).to_vec()))
            .collect()
    }

    /// The session-stable popular sample. Cached as ids at load time and
    /// resolved against the live catalog here, so favorite flags never go
    /// stale between this view and the category views.
    pub fn popular_selection(&self) -> Vec<Recipe> {
        let state = self.state.read();
        state
            .popular()
            .iter()
            .filter_map(|id| state.find(*id).cloned())
            .collect()
    }

    pub fn recipe_of_the_day(&self) -> CatalogResult<Recipe> {
        self.recipe_for_date(Local::now().date_naive())
    }

    /// Deterministic pick for a calendar day: `day_of_year mod count` over
    /// the flattened catalog. Same day and same catalog, same recipe.
    pub fn recipe_for_date(&self, date: NaiveDate) -> CatalogResult<Recipe> {
        let state = self.state.read();
        let all = state.flatten();
        if all.is_empty() {
            return Err(CatalogErrorKind::NoRecipesAvailable.into());
        }
        let index = date.ordinal() as usize % all.len();
        Ok(all[index].clone())
    }

    /// Flip the flag in place, then rewrite the whole favorites map. A failed
    /// write is logged and the in-memory flag stays toggled.
    pub fn toggle_favorite(&self, id: RecipeId) -> CatalogResult<bool> {
        let (flag, map) = {
            let mut state = self.state.write();
            let recipe = state
                .find_mut(id)
                .ok_or(CatalogErrorKind::RecipeNotFound(id))?;
            recipe.favorites = !recipe.favorites;
            (recipe.favorites, state.favorites_map())
        };
        match serde_json::to_vec(&map) {
            Ok(raw) => {
                if let Err(err) = self.prefs.set(&self.policy.io.favorites_key, &raw) {
                    warn!(id = id.0, "favorites write failed, keeping in-memory flag: {err}");
                }
            }
            Err(err) => warn!("favorites map serialization failed: {err}"),
        }
        Ok(flag)
    }

    /// Recomputed on every call so it always reflects the latest toggle.
    pub fn favorites_view(&self) -> Vec<Recipe> {
        self.state
            .read()
            .flatten()
            .into_iter()
            .filter(|recipe| recipe.favorites)
            .collect()
    }

    /// Case-insensitive substring match on the name. An empty query returns
    /// the full flatten in the same order; no ranking, no tokenization.
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        let all = self.state.read().flatten();
        if query.is_empty() {
            return all;
        }
        let needle = query.to_lowercase();
        all.into_iter()
            .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn read_favorites_overlay(&self) -> HashMap<u32, bool> {
        let raw = match self.prefs.get(&self.policy.io.favorites_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HashMap::new(),
            Err(err) => {
                warn!("favorites read failed, restoring none: {err}");
                return HashMap::new();
            }
        };
        match serde_json::from_slice(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!("favorites overlay unparseable, restoring none: {err}");
                HashMap::new()
            }
        }
    }
}

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::model::{Category, RecipeId};
use crate::store::CatalogState;

/// Category-fair sampling for the "popular" surface. Each pass walks the
/// fixed category order, shuffles the bucket, and keeps the first recipe not
/// yet chosen; empty or exhausted categories are skipped. Result order is all
/// pass-1 picks in category order, then all pass-2 picks.
pub(crate) fn popular_selection(
    state: &CatalogState,
    passes: usize,
    rng: &mut StdRng,
) -> Vec<RecipeId> {
    let mut chosen: HashSet<RecipeId> = HashSet::new();
    let mut picks = Vec::new();
    for _ in 0..passes {
        for category in Category::ALL {
            let mut ids: Vec<RecipeId> = state.bucket(category).iter().map(|r| r.id).collect();
            ids.shuffle(rng);
            if let Some(id) = ids.into_iter().find(|id| !chosen.contains(id)) {
                chosen.insert(id);
                picks.push(id);
            }
        }
    }
    picks
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::model::Recipe;

    fn recipe(id: u32, category: Category) -> Recipe {
        Recipe {
            id: RecipeId(id),
            category,
            name: format!("recipe-{id}"),
            ingredients: Vec::new(),
            steps: Vec::new(),
            favorites: false,
            image_name: "img".into(),
        }
    }

    fn state_with(counts: &[(Category, u32)]) -> CatalogState {
        let mut recipes = Vec::new();
        let mut next = 1;
        for (category, count) in counts {
            for _ in 0..*count {
                recipes.push(recipe(next, *category));
                next += 1;
            }
        }
        CatalogState::from_recipes(recipes)
    }

    #[test]
    fn no_duplicates_and_at_most_two_per_category() {
        let state = state_with(&[
            (Category::Breakfast, 4),
            (Category::Drinks, 4),
            (Category::MainCourses, 4),
            (Category::Salads, 4),
            (Category::Baking, 4),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let picks = popular_selection(&state, 2, &mut rng);

        assert_eq!(picks.len(), 10);
        let unique: HashSet<_> = picks.iter().collect();
        assert_eq!(unique.len(), picks.len());
        for category in Category::ALL {
            let in_bucket: HashSet<RecipeId> =
                state.bucket(category).iter().map(|r| r.id).collect();
            let count = picks.iter().filter(|id| in_bucket.contains(id)).count();
            assert!(count <= 2);
        }
    }

    #[test]
    fn single_recipe_category_contributes_once() {
        let state = state_with(&[(Category::Breakfast, 2), (Category::Drinks, 1)]);
        let mut rng = StdRng::seed_from_u64(1);
        let picks = popular_selection(&state, 2, &mut rng);

        assert!(picks.len() <= 3);
        let drinks_id = state.bucket(Category::Drinks)[0].id;
        assert_eq!(picks.iter().filter(|id| **id == drinks_id).count(), 1);
    }

    #[test]
    fn empty_catalog_yields_no_picks() {
        let state = CatalogState::empty();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(popular_selection(&state, 2, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_reproduces_the_selection() {
        let state = state_with(&[
            (Category::Breakfast, 3),
            (Category::Salads, 3),
            (Category::Baking, 3),
        ]);
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(
            popular_selection(&state, 2, &mut a),
            popular_selection(&state, 2, &mut b)
        );
    }
}

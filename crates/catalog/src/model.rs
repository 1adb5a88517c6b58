use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the dataset, never generated at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed category set. Declaration order is the section order for every
/// grouped view and the walk order for popular sampling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Drinks,
    #[serde(rename = "Main Courses")]
    MainCourses,
    Salads,
    Baking,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Drinks,
        Category::MainCourses,
        Category::Salads,
        Category::Baking,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Breakfast" => Some(Self::Breakfast),
            "Drinks" => Some(Self::Drinks),
            "Main Courses" => Some(Self::MainCourses),
            "Salads" => Some(Self::Salads),
            "Baking" => Some(Self::Baking),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Drinks => "Drinks",
            Self::MainCourses => "Main Courses",
            Self::Salads => "Salads",
            Self::Baking => "Baking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A loaded recipe. `favorites` is the only field that changes after load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub category: Category,
    pub name: String,
    /// Preparation order is meaningful for both lists.
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub favorites: bool,
    /// Key into the bundled image asset set; existence is not validated here.
    #[serde(rename = "imageName")]
    pub image_name: String,
}

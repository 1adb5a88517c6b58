pub mod account;
pub mod api;
pub mod dataset;
pub mod errors;
pub mod facts;
pub mod model;
pub mod policy;

mod sampling;
mod store;

pub use account::{AccountGate, RegisterRequest};
pub use api::{CatalogService, LoadSummary};
pub use dataset::DatasetSource;
pub use errors::{CatalogError, CatalogErrorKind, CatalogResult};
pub use model::{Category, Recipe, RecipeId};
pub use policy::CatalogPolicyView;

use thiserror::Error;

use tastebook_prefs_store::PrefsError;

use crate::model::RecipeId;

#[derive(Clone, Debug, Error)]
pub enum CatalogErrorKind {
    #[error("recipe dataset unavailable: {0}")]
    DatasetUnavailable(String),
    #[error("recipe dataset corrupt: {0}")]
    DatasetCorrupt(String),
    #[error("recipe {0} not found")]
    RecipeNotFound(RecipeId),
    #[error("no recipes available")]
    NoRecipesAvailable,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("preference store failure: {0}")]
    Prefs(String),
}

#[derive(Clone, Debug, Error)]
#[error(transparent)]
pub struct CatalogError(pub CatalogErrorKind);

impl CatalogError {
    pub fn new(kind: CatalogErrorKind) -> Self {
        Self(kind)
    }

    pub fn kind(&self) -> &CatalogErrorKind {
        &self.0
    }
}

impl From<CatalogErrorKind> for CatalogError {
    fn from(kind: CatalogErrorKind) -> Self {
        CatalogError(kind)
    }
}

impl From<PrefsError> for CatalogError {
    fn from(value: PrefsError) -> Self {
        CatalogError(CatalogErrorKind::Prefs(value.to_string()))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSource;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogPolicyView {
    pub io: IoCfg,
    pub sampling: SamplingCfg,
}

impl Default for CatalogPolicyView {
    fn default() -> Self {
        Self {
            io: IoCfg::default(),
            sampling: SamplingCfg::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IoCfg {
    pub dataset: DatasetSource,
    pub favorites_key: String,
    pub username_key: String,
}

impl Default for IoCfg {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::Bundled,
            favorites_key: "favorites".into(),
            username_key: "username".into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SamplingCfg {
    /// Category-fair passes over the catalog; each pass picks at most one
    /// recipe per category.
    pub passes: usize,
    /// Fixed seed for reproducible sampling. Entropy-seeded when absent;
    /// either way the generator is seeded once per load, not per query.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SamplingCfg {
    fn default() -> Self {
        Self {
            passes: 2,
            seed: None,
        }
    }
}

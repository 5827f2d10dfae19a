use std::io::Read;

use serde::{
    de::DeserializeOwned,
    Deserialize
};
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::derivative::differentiator::Differentiator;
use crate::math::integral::integrator::Integrator;
use crate::math::optimization::goldensectionsearch::GoldenSectionSearch;
use crate::math::scalar::Scalar;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    integral: Vec<serde_json::Value>,
    #[serde(default)]
    derivative: Vec<serde_json::Value>,
    #[serde(default)]
    optimization: Vec<serde_json::Value>
}

/// Named numerical methods loaded from a JSON document of the form
///
/// ```json
/// {
///     "integral":     [{"name": "simpson", "rule": "simpsons_rule", "step": 0.001}],
///     "derivative":   [{"name": "central", "scheme": "symmetric_first", "step": 1e-5}],
///     "optimization": [{"name": "golden", "tolerance": 1e-8}]
/// }
/// ```
///
/// Every section is optional. Loading more documents adds to (or replaces
/// entries of) the registries already populated. A document with any bad
/// entry is rejected as a whole and leaves the registries unchanged.
pub struct Configuration<T> {
    integrator_manager: Manager<Integrator<T>>,
    differentiator_manager: Manager<Differentiator<T>>,
    minimizer_manager: Manager<GoldenSectionSearch<T>>
}


impl<T> Configuration<T>
    where T: Scalar + DeserializeOwned {
    pub fn new() -> Configuration<T> {
        Configuration {
            integrator_manager: Manager::new(Integrator::from_json),
            differentiator_manager: Manager::new(Differentiator::from_json),
            minimizer_manager: Manager::new(GoldenSectionSearch::from_json)
        }
    }

    pub fn integrator_manager(&self) -> &Manager<Integrator<T>> {
        &self.integrator_manager
    }

    pub fn differentiator_manager(&self) -> &Manager<Differentiator<T>> {
        &self.differentiator_manager
    }

    pub fn minimizer_manager(&self) -> &Manager<GoldenSectionSearch<T>> {
        &self.minimizer_manager
    }

    pub fn integrator(&self, name: &str) -> Result<Integrator<T>, ManagerError> {
        self.integrator_manager.get(name)
    }

    pub fn differentiator(&self, name: &str) -> Result<Differentiator<T>, ManagerError> {
        self.differentiator_manager.get(name)
    }

    pub fn minimizer(&self, name: &str) -> Result<GoldenSectionSearch<T>, ManagerError> {
        self.minimizer_manager.get(name)
    }

    pub fn from_reader<R>(&self, mut reader: R) -> Result<(), ManagerError>
        where R: Read {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        self.from_json_str(&json)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    // 先解析全部區段，全部成功才寫入
    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let integrators = self.integrator_manager.parse_obj_from_json_vec(&json_prop.integral)?;
        let differentiators = self.differentiator_manager.parse_obj_from_json_vec(&json_prop.derivative)?;
        let minimizers = self.minimizer_manager.parse_obj_from_json_vec(&json_prop.optimization)?;
        self.integrator_manager.insert_parsed(integrators);
        self.differentiator_manager.insert_parsed(differentiators);
        self.minimizer_manager.insert_parsed(minimizers);
        info!(
            integral = self.integrator_manager.len(),
            derivative = self.differentiator_manager.len(),
            optimization = self.minimizer_manager.len(),
            "configuration loaded"
        );
        Ok(())
    }
}

impl<T> Default for Configuration<T>
    where T: Scalar + DeserializeOwned {
    fn default() -> Self {
        Self::new()
    }
}

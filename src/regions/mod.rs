mod data;

use serde::Serialize;
use std::collections::HashMap;

use crate::error::AppError;
use crate::pricing::DeliveryZone;

/// Zone used for any destination the registry cannot place
pub const FALLBACK_ZONE: DeliveryZone = DeliveryZone::Far;

/// A state or union territory the storefront ships to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub name: String,
    pub code: String,
    pub zone: DeliveryZone,
}

/// Outcome of resolving a region name to a delivery zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneResolution<'a> {
    pub zone: DeliveryZone,
    /// `None` when the name was not recognised and the fallback zone applies
    pub state: Option<&'a State>,
}

impl ZoneResolution<'_> {
    pub fn is_fallback(&self) -> bool {
        self.state.is_none()
    }
}

/// Static lookup from region names and codes to delivery zones and cities
#[derive(Debug, Clone)]
pub struct RegionRegistry {
    states: Vec<State>,
    by_code: HashMap<String, usize>,
    cities: HashMap<String, Vec<String>>,
}

impl RegionRegistry {
    /// Registry of Indian states and union territories
    pub fn builtin() -> Self {
        let states: Vec<State> = data::STATES
            .iter()
            .map(|(name, code, zone)| State {
                name: name.to_string(),
                code: code.to_string(),
                zone: *zone,
            })
            .collect();

        let by_code = states
            .iter()
            .enumerate()
            .map(|(idx, state)| (state.code.clone(), idx))
            .collect();

        let cities = data::CITIES
            .iter()
            .map(|(code, names)| {
                (
                    code.to_string(),
                    names.iter().map(|name| name.to_string()).collect(),
                )
            })
            .collect();

        Self {
            states,
            by_code,
            cities,
        }
    }

    /// Reclassify states, keyed by state code
    pub fn with_overrides(mut self, overrides: &HashMap<String, DeliveryZone>) -> Result<Self, AppError> {
        for (code, zone) in overrides {
            let idx = *self
                .by_code
                .get(&code.trim().to_uppercase())
                .ok_or_else(|| {
                    AppError::ConfigError(format!("Zone override for unknown state code '{}'", code))
                })?;
            self.states[idx].zone = *zone;
        }
        Ok(self)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look a state up by display name, exact match first, then ignoring case
    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        if let Some(state) = self.states.iter().find(|s| s.name == name) {
            return Some(state);
        }

        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.states.iter().find(|s| s.name.to_lowercase() == wanted)
    }

    pub fn state_by_code(&self, code: &str) -> Option<&State> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .map(|&idx| &self.states[idx])
    }

    pub fn zone_for_code(&self, code: &str) -> DeliveryZone {
        self.state_by_code(code)
            .map(|state| state.zone)
            .unwrap_or(FALLBACK_ZONE)
    }

    /// Resolve a region name; unknown names fall back to [`FALLBACK_ZONE`]
    pub fn resolve(&self, name: &str) -> ZoneResolution<'_> {
        match self.state_by_name(name) {
            Some(state) => ZoneResolution {
                zone: state.zone,
                state: Some(state),
            },
            None => ZoneResolution {
                zone: FALLBACK_ZONE,
                state: None,
            },
        }
    }

    pub fn cities_for(&self, code: &str) -> &[String] {
        self.cities
            .get(&code.trim().to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn states_in_zone(&self, zone: DeliveryZone) -> impl Iterator<Item = &State> {
        self.states.iter().filter(move |s| s.zone == zone)
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_states_and_territories() {
        let registry = RegionRegistry::builtin();
        assert_eq!(registry.states().len(), 36);
        for state in registry.states() {
            assert!(
                !registry.cities_for(&state.code).is_empty(),
                "{} has no cities",
                state.code
            );
        }
    }

    #[test]
    fn test_resolve_known_regions() {
        let registry = RegionRegistry::builtin();
        assert_eq!(registry.resolve("Rajasthan").zone, DeliveryZone::Local);
        assert_eq!(registry.resolve("Delhi").zone, DeliveryZone::Nearby);
        assert_eq!(registry.resolve("Maharashtra").zone, DeliveryZone::Medium);
        assert_eq!(registry.resolve("Tamil Nadu").zone, DeliveryZone::Far);
        assert!(!registry.resolve("Rajasthan").is_fallback());
    }

    #[test]
    fn test_resolve_ignores_case_and_padding() {
        let registry = RegionRegistry::builtin();
        let resolution = registry.resolve("  west bengal ");
        assert_eq!(resolution.zone, DeliveryZone::Medium);
        assert_eq!(resolution.state.unwrap().code, "WB");
    }

    #[test]
    fn test_unknown_region_falls_back_to_far() {
        let registry = RegionRegistry::builtin();
        let resolution = registry.resolve("Atlantis");
        assert_eq!(resolution.zone, DeliveryZone::Far);
        assert!(resolution.is_fallback());
        assert!(registry.resolve("").is_fallback());
    }

    #[test]
    fn test_zone_for_code() {
        let registry = RegionRegistry::builtin();
        assert_eq!(registry.zone_for_code("rj"), DeliveryZone::Local);
        assert_eq!(registry.zone_for_code("XX"), DeliveryZone::Far);
    }

    #[test]
    fn test_cities_for_unknown_code_is_empty() {
        let registry = RegionRegistry::builtin();
        assert!(registry.cities_for("XX").is_empty());
        assert!(registry.cities_for("RJ").contains(&"Kota".to_string()));
    }

    #[test]
    fn test_overrides_reclassify_state() {
        let mut overrides = HashMap::new();
        overrides.insert("ga".to_string(), DeliveryZone::Medium);

        let registry = RegionRegistry::builtin().with_overrides(&overrides).unwrap();
        assert_eq!(registry.resolve("Goa").zone, DeliveryZone::Medium);
    }

    #[test]
    fn test_override_with_unknown_code_is_rejected() {
        let mut overrides = HashMap::new();
        overrides.insert("ZZ".to_string(), DeliveryZone::Local);

        let result = RegionRegistry::builtin().with_overrides(&overrides);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_states_in_zone() {
        let registry = RegionRegistry::builtin();
        let local: Vec<&str> = registry
            .states_in_zone(DeliveryZone::Local)
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(local, vec!["RJ"]);
    }
}

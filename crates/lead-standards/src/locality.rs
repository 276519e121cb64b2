//! The IBGE municipality reference and the locality lookup index.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use lead_model::comparison_key;

use crate::error::ReferenceError;

/// Fixed IBGE localities endpoint. Returns a JSON array of municipalities,
/// each with a city name and a nested state descriptor.
pub const IBGE_MUNICIPALITIES_URL: &str =
    "https://servicodados.ibge.gov.br/api/v1/localidades/municipios";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One municipality entry from the IBGE payload.
///
/// The state descriptor is nested three levels deep; entries missing any
/// level still contribute their city name to the index.
#[derive(Debug, Clone, Deserialize)]
pub struct Municipality {
    pub nome: String,
    #[serde(default)]
    pub microrregiao: Option<Microregion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Microregion {
    #[serde(default)]
    pub mesorregiao: Option<Mesoregion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mesoregion {
    #[serde(rename = "UF", default)]
    pub uf: Option<FederativeUnit>,
}

/// State descriptor: two-letter abbreviation plus full name.
#[derive(Debug, Clone, Deserialize)]
pub struct FederativeUnit {
    pub sigla: String,
    pub nome: String,
}

impl Municipality {
    fn federative_unit(&self) -> Option<&FederativeUnit> {
        self.microrregiao
            .as_ref()
            .and_then(|micro| micro.mesorregiao.as_ref())
            .and_then(|meso| meso.uf.as_ref())
    }
}

/// Immutable lookup maps from normalized locality keys to canonical names.
#[derive(Debug, Clone, Default)]
pub struct LocalityIndex {
    cities: BTreeMap<String, String>,
    states: BTreeMap<String, String>,
}

impl LocalityIndex {
    /// Builds the index from municipality entries.
    ///
    /// City keys are [`comparison_key`] forms of the city name; state keys
    /// are both the lower-cased abbreviation and the normalized full name.
    /// Last write wins on duplicate keys, which is fine because duplicate
    /// keys always carry identical canonical names in the source data.
    pub fn from_municipalities(entries: &[Municipality]) -> Self {
        let mut cities = BTreeMap::new();
        let mut states = BTreeMap::new();
        for entry in entries {
            let city_key = comparison_key(&entry.nome);
            if !city_key.is_empty() {
                cities.insert(city_key, entry.nome.clone());
            }
            if let Some(uf) = entry.federative_unit() {
                states.insert(uf.sigla.to_lowercase(), uf.nome.clone());
                states.insert(comparison_key(&uf.nome), uf.nome.clone());
            }
        }
        LocalityIndex { cities, states }
    }

    /// Canonical city name for a normalized key.
    pub fn city(&self, key: &str) -> Option<&str> {
        self.cities.get(key).map(String::as_str)
    }

    /// Canonical state name for a normalized key or lower-cased abbreviation.
    pub fn state(&self, key: &str) -> Option<&str> {
        self.states.get(key).map(String::as_str)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// True when no reference data is available (degraded mode).
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.states.is_empty()
    }
}

/// Source of municipality entries. The seam exists so the cached service
/// can be exercised without network access.
pub trait LocalityFetcher {
    fn fetch(&self) -> Result<Vec<Municipality>, ReferenceError>;
}

/// Blocking HTTP fetcher against the IBGE localities API.
#[derive(Debug, Clone)]
pub struct IbgeFetcher {
    endpoint: String,
}

impl IbgeFetcher {
    pub fn new() -> Self {
        IbgeFetcher {
            endpoint: IBGE_MUNICIPALITIES_URL.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        IbgeFetcher {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for IbgeFetcher {
    fn default() -> Self {
        IbgeFetcher::new()
    }
}

impl LocalityFetcher for IbgeFetcher {
    fn fetch(&self) -> Result<Vec<Municipality>, ReferenceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let entries = client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json::<Vec<Municipality>>()?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn municipality(name: &str, sigla: &str, state: &str) -> Municipality {
        Municipality {
            nome: name.to_string(),
            microrregiao: Some(Microregion {
                mesorregiao: Some(Mesoregion {
                    uf: Some(FederativeUnit {
                        sigla: sigla.to_string(),
                        nome: state.to_string(),
                    }),
                }),
            }),
        }
    }

    #[test]
    fn builds_city_and_state_maps() {
        let index = LocalityIndex::from_municipalities(&[
            municipality("São Paulo", "SP", "São Paulo"),
            municipality("Campinas", "SP", "São Paulo"),
        ]);
        assert_eq!(index.city("sao paulo"), Some("São Paulo"));
        assert_eq!(index.city("campinas"), Some("Campinas"));
        assert_eq!(index.state("sp"), Some("São Paulo"));
        assert_eq!(index.state("sao paulo"), Some("São Paulo"));
        assert_eq!(index.city_count(), 2);
        assert!(!index.is_empty());
    }

    #[test]
    fn entries_without_state_descriptor_still_index_the_city() {
        let entries = vec![Municipality {
            nome: "Brasília".to_string(),
            microrregiao: None,
        }];
        let index = LocalityIndex::from_municipalities(&entries);
        assert_eq!(index.city("brasilia"), Some("Brasília"));
        assert_eq!(index.state_count(), 0);
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let index = LocalityIndex::from_municipalities(&[
            municipality("Boa Vista", "RR", "Roraima"),
            municipality("Boa Vista", "PB", "Paraíba"),
        ]);
        assert_eq!(index.city("boa vista"), Some("Boa Vista"));
        assert_eq!(index.state("rr"), Some("Roraima"));
        assert_eq!(index.state("pb"), Some("Paraíba"));
    }

    #[test]
    fn payload_deserializes_with_nested_uf() {
        let json = r#"[{
            "id": 3550308,
            "nome": "São Paulo",
            "microrregiao": {
                "id": 35061,
                "nome": "São Paulo",
                "mesorregiao": {
                    "id": 3515,
                    "nome": "Metropolitana de São Paulo",
                    "UF": {"id": 35, "sigla": "SP", "nome": "São Paulo"}
                }
            }
        }]"#;
        let entries: Vec<Municipality> = serde_json::from_str(json).expect("decode");
        let index = LocalityIndex::from_municipalities(&entries);
        assert_eq!(index.city("sao paulo"), Some("São Paulo"));
        assert_eq!(index.state("sp"), Some("São Paulo"));
    }

    #[test]
    fn empty_index_lookups_miss() {
        let index = LocalityIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.city("sao paulo"), None);
        assert_eq!(index.state("sp"), None);
    }
}

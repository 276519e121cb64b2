//! Industry segment translation dictionary.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

/// Normalizes a raw segment label into a dictionary key: trim, lower-case,
/// spell out the ampersand.
pub fn segment_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace('&', "and")
}

/// Static mapping from normalized segment strings to canonical labels.
///
/// Loaded once at startup; a missing or unreadable file yields an empty
/// dictionary and every segment falls back to generic title-casing.
#[derive(Debug, Clone, Default)]
pub struct SegmentDictionary {
    entries: BTreeMap<String, String>,
}

impl SegmentDictionary {
    /// Loads the dictionary from a JSON object file, normalizing keys on
    /// the way in. Absence or a decode failure is non-fatal.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(path = %path.display(), %error, "segment dictionary unavailable");
                return SegmentDictionary::default();
            }
        };
        match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
            Ok(entries) => SegmentDictionary::from_entries(entries),
            Err(error) => {
                warn!(path = %path.display(), %error, "segment dictionary malformed");
                SegmentDictionary::default()
            }
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, label)| (segment_key(&key), label))
            .collect();
        SegmentDictionary { entries }
    }

    /// The built-in translations for the segments that show up most often
    /// in prospecting exports.
    pub fn builtin() -> Self {
        SegmentDictionary::from_entries(
            [
                ("information technology & services", "Tecnologia da Informação"),
                ("computer software", "Software"),
                ("financial services", "Serviços Financeiros"),
                ("banking", "Bancos"),
                ("insurance", "Seguros"),
                ("hospital & health care", "Saúde"),
                ("pharmaceuticals", "Farmacêutico"),
                ("retail", "Varejo"),
                ("wholesale", "Atacado"),
                ("construction", "Construção Civil"),
                ("real estate", "Imobiliário"),
                ("education management", "Educação"),
                ("higher education", "Ensino Superior"),
                ("logistics & supply chain", "Logística"),
                ("transportation", "Transportes"),
                ("food & beverages", "Alimentos e Bebidas"),
                ("agriculture", "Agronegócio"),
                ("telecommunications", "Telecomunicações"),
                ("marketing & advertising", "Marketing e Publicidade"),
                ("legal services", "Serviços Jurídicos"),
                ("accounting", "Contabilidade"),
                ("human resources", "Recursos Humanos"),
                ("automotive", "Automotivo"),
                ("machinery", "Máquinas e Equipamentos"),
                ("oil & energy", "Energia"),
            ]
            .into_iter()
            .map(|(key, label)| (key.to_string(), label.to_string())),
        )
    }

    /// Looks up a canonical label by pre-normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

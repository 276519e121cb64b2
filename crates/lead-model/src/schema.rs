//! The canonical output schema and source-column alias matching.
//!
//! Lead exports arrive with wildly inconsistent headers ("First Name",
//! "Nome_Lead", "# Employees", "Company Linkedin Url", ...). Each canonical
//! field carries an ordered list of alias patterns; headers are normalized
//! and matched by exact equality first, then by word-boundary prefix. Bare
//! substring matching is deliberately avoided so that e.g. a "Company City"
//! column can never be captured by the "company" alias of [`CanonicalField::Empresa`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::comparison_key;

/// The fixed set of canonical output fields, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalField {
    NomeContato,
    Cargo,
    Email,
    Telefone,
    Empresa,
    Site,
    Segmento,
    NumeroFuncionarios,
    CidadeContato,
    EstadoContato,
    PaisContato,
    CidadeEmpresa,
    EstadoEmpresa,
    PaisEmpresa,
    LinkedinContato,
    LinkedinEmpresa,
    DataCriacao,
}

impl CanonicalField {
    /// All canonical fields in their fixed output order.
    pub const ALL: [CanonicalField; 17] = [
        CanonicalField::NomeContato,
        CanonicalField::Cargo,
        CanonicalField::Email,
        CanonicalField::Telefone,
        CanonicalField::Empresa,
        CanonicalField::Site,
        CanonicalField::Segmento,
        CanonicalField::NumeroFuncionarios,
        CanonicalField::CidadeContato,
        CanonicalField::EstadoContato,
        CanonicalField::PaisContato,
        CanonicalField::CidadeEmpresa,
        CanonicalField::EstadoEmpresa,
        CanonicalField::PaisEmpresa,
        CanonicalField::LinkedinContato,
        CanonicalField::LinkedinEmpresa,
        CanonicalField::DataCriacao,
    ];

    /// The canonical column name as written to the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::NomeContato => "Nome_Contato",
            CanonicalField::Cargo => "Cargo",
            CanonicalField::Email => "Email",
            CanonicalField::Telefone => "Telefone",
            CanonicalField::Empresa => "Empresa",
            CanonicalField::Site => "Site",
            CanonicalField::Segmento => "Segmento",
            CanonicalField::NumeroFuncionarios => "Numero_Funcionarios",
            CanonicalField::CidadeContato => "Cidade_Contato",
            CanonicalField::EstadoContato => "Estado_Contato",
            CanonicalField::PaisContato => "Pais_Contato",
            CanonicalField::CidadeEmpresa => "Cidade_Empresa",
            CanonicalField::EstadoEmpresa => "Estado_Empresa",
            CanonicalField::PaisEmpresa => "Pais_Empresa",
            CanonicalField::LinkedinContato => "LinkedIn_Contato",
            CanonicalField::LinkedinEmpresa => "LinkedIn_Empresa",
            CanonicalField::DataCriacao => "Data_Criacao",
        }
    }

    /// Ordered alias patterns for this field, in normalized-header form.
    ///
    /// The canonical name itself is always the first pattern so that a
    /// re-run over already-cleaned output maps every column back onto
    /// itself.
    pub fn alias_patterns(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::NomeContato => &["nome contato", "full name"],
            CanonicalField::Cargo => &["cargo", "title", "job title"],
            CanonicalField::Email => &["email", "e mail"],
            CanonicalField::Telefone => &[
                "telefone",
                "phone",
                "first phone",
                "work direct phone",
                "mobile phone",
                "corporate phone",
            ],
            CanonicalField::Empresa => &[
                "empresa",
                "company",
                "company name",
                "company name for emails",
            ],
            CanonicalField::Site => &["site", "website", "web site", "company website"],
            CanonicalField::Segmento => &["segmento", "industry", "segment"],
            CanonicalField::NumeroFuncionarios => &[
                "numero funcionarios",
                "# employees",
                "num employees",
                "number of employees",
                "employees",
            ],
            CanonicalField::CidadeContato => &["cidade contato", "city", "cidade"],
            CanonicalField::EstadoContato => &["estado contato", "state", "estado"],
            CanonicalField::PaisContato => &["pais contato", "country", "pais"],
            CanonicalField::CidadeEmpresa => &["cidade empresa", "company city"],
            CanonicalField::EstadoEmpresa => &["estado empresa", "company state"],
            CanonicalField::PaisEmpresa => &["pais empresa", "company country"],
            CanonicalField::LinkedinContato => &[
                "linkedin contato",
                "person linkedin url",
                "linkedin url",
            ],
            CanonicalField::LinkedinEmpresa => &["linkedin empresa", "company linkedin url"],
            CanonicalField::DataCriacao => &["data criacao", "created date", "create date"],
        }
    }

    /// Resolves a canonical column name (as produced by [`Self::as_str`])
    /// back to its field. Matching is exact on the normalized form.
    pub fn from_name(name: &str) -> Option<CanonicalField> {
        let normalized = normalize_header(name);
        CanonicalField::ALL
            .into_iter()
            .find(|field| normalize_header(field.as_str()) == normalized)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alias patterns for the first-name source column, consumed into
/// `Nome_Contato` during mapping.
pub const FIRST_NAME_PATTERNS: &[&str] = &["first name", "nome lead", "primeiro nome"];

/// Alias patterns for the last-name source column, consumed into
/// `Nome_Contato` during mapping.
pub const LAST_NAME_PATTERNS: &[&str] = &["last name", "sobrenome lead", "sobrenome"];

/// Normalizes a raw header for alias comparison: strips a BOM, replaces
/// separator characters with spaces, collapses whitespace, then applies
/// [`comparison_key`].
pub fn normalize_header(raw: &str) -> String {
    let cleaned = raw
        .trim()
        .trim_matches('\u{feff}')
        .replace(['_', '-', '.', '/', '\\'], " ");
    comparison_key(&cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn pattern_matches(header: &str, pattern: &str) -> bool {
    if header == pattern {
        return true;
    }
    // Word-boundary prefix: "person linkedin url" matches the header
    // "person linkedin url 1", but "company" never matches "company city"
    // because the exact pass over all fields runs first.
    header
        .strip_prefix(pattern)
        .is_some_and(|rest| rest.starts_with(' '))
}

/// Returns true when the normalized header matches any of the patterns,
/// by exact equality or word-boundary prefix.
pub fn matches_patterns(normalized_header: &str, patterns: &[&str]) -> bool {
    patterns
        .iter()
        .any(|pattern| pattern_matches(normalized_header, pattern))
}

/// Maps a raw header onto a canonical field.
///
/// Exact alias matches across every field are considered before prefix
/// matches, so more specific aliases ("company city") always win over
/// shorter ones ("company").
pub fn match_header(raw_header: &str) -> Option<CanonicalField> {
    let normalized = normalize_header(raw_header);
    if normalized.is_empty() {
        return None;
    }
    for field in CanonicalField::ALL {
        if field
            .alias_patterns()
            .iter()
            .any(|pattern| normalized == *pattern)
        {
            return Some(field);
        }
    }
    for field in CanonicalField::ALL {
        if matches_patterns(&normalized, field.alias_patterns()) {
            return Some(field);
        }
    }
    None
}

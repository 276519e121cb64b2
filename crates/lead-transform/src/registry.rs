//! Canonical field → standardizer registry.

use lead_model::CanonicalField;
use lead_standards::{LocalityIndex, SegmentDictionary};

use crate::standardize::{
    LocalityKind, company, employee_count, locality, phone, segment, website,
};

/// The standardization rule applied to a canonical column, when any.
///
/// Fields without a rule (emails, LinkedIn URLs, job titles, dates) pass
/// through untouched apart from the final null sweep. `Nome_Contato` has no
/// entry either: it is derived during schema mapping, not per-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Company,
    Phone,
    Website,
    Segment,
    EmployeeCount,
    City,
    State,
    Country,
}

/// Looks up the rule registered for a canonical field.
pub fn rule_for(field: CanonicalField) -> Option<FieldRule> {
    match field {
        CanonicalField::Empresa => Some(FieldRule::Company),
        CanonicalField::Telefone => Some(FieldRule::Phone),
        CanonicalField::Site => Some(FieldRule::Website),
        CanonicalField::Segmento => Some(FieldRule::Segment),
        CanonicalField::NumeroFuncionarios => Some(FieldRule::EmployeeCount),
        CanonicalField::CidadeContato | CanonicalField::CidadeEmpresa => Some(FieldRule::City),
        CanonicalField::EstadoContato | CanonicalField::EstadoEmpresa => Some(FieldRule::State),
        CanonicalField::PaisContato | CanonicalField::PaisEmpresa => Some(FieldRule::Country),
        CanonicalField::NomeContato
        | CanonicalField::Cargo
        | CanonicalField::Email
        | CanonicalField::LinkedinContato
        | CanonicalField::LinkedinEmpresa
        | CanonicalField::DataCriacao => None,
    }
}

/// Applies a rule to one raw cell value.
pub fn apply_rule(
    rule: FieldRule,
    raw: &str,
    index: &LocalityIndex,
    segments: &SegmentDictionary,
) -> String {
    match rule {
        FieldRule::Company => company(raw),
        FieldRule::Phone => phone(raw),
        FieldRule::Website => website(raw),
        FieldRule::Segment => segment(raw, segments),
        FieldRule::EmployeeCount => employee_count(raw),
        FieldRule::City => locality(raw, LocalityKind::City, index),
        FieldRule::State => locality(raw, LocalityKind::State, index),
        FieldRule::Country => locality(raw, LocalityKind::Country, index),
    }
}

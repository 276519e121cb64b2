//! End-to-end pipeline tests over realistic lead exports.

use std::io::Write;

use lead_core::{clean, clean_file, clean_slice};
use lead_model::{CanonicalField, Table};
use lead_standards::error::ReferenceError;
use lead_standards::locality::{FederativeUnit, Mesoregion, Microregion, Municipality};
use lead_standards::{LocalityFetcher, LocalityService, SegmentDictionary};

struct StubFetcher(Vec<Municipality>);

impl LocalityFetcher for StubFetcher {
    fn fetch(&self) -> Result<Vec<Municipality>, ReferenceError> {
        Ok(self.0.clone())
    }
}

struct FailingFetcher;

impl LocalityFetcher for FailingFetcher {
    fn fetch(&self) -> Result<Vec<Municipality>, ReferenceError> {
        Err(ReferenceError::Decode(
            serde_json::from_str::<()>("broken").unwrap_err(),
        ))
    }
}

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

fn reference_service() -> LocalityService<StubFetcher> {
    LocalityService::with_fetcher(StubFetcher(vec![
        municipality("São Paulo", "SP", "São Paulo"),
        municipality("Campinas", "SP", "São Paulo"),
    ]))
}

const EXPORT: &str = "\
First Name,Last Name,Title,Email,Company,Website,Industry,# Employees,City,State,Country,Corporate Phone,Lead Score\n\
ana carolina,de souza santos,CTO,ana@acme.com.br,Acme Industria LTDA,https://acme.com.br/,Information Technology & Services,150.0,SAO PAULO,State of São Paulo,BR,+55 11 98765-4321,82\n\
bruno,silva,Analista,bruno@beta.com,Beta Consultoria ME,beta.com,Retail,nan,Campinas,sp,brazil,0800123456,nan\n";

#[test]
fn cleans_a_full_export() {
    let service = reference_service();
    let segments = SegmentDictionary::builtin();
    let outcome = clean_slice(EXPORT.as_bytes(), &service, &segments).expect("clean");
    let table = &outcome.table;

    // 17 canonical columns plus the passthrough "Lead Score".
    assert_eq!(table.headers.len(), 18);
    assert_eq!(outcome.report.passthrough_columns, vec!["Lead Score"]);
    assert!(!outcome.report.locality_degraded);
    assert_eq!(outcome.report.rows_in, 2);
    assert_eq!(outcome.report.rows_out, 2);

    let col = |field: CanonicalField| table.column_index(field.as_str()).unwrap();
    assert_eq!(table.cell(0, col(CanonicalField::NomeContato)), "Ana Santos");
    assert_eq!(table.cell(0, col(CanonicalField::Empresa)), "Acme Industria");
    assert_eq!(table.cell(0, col(CanonicalField::Site)), "www.acme.com.br");
    assert_eq!(table.cell(0, col(CanonicalField::Segmento)), "Tecnologia da Informação");
    assert_eq!(table.cell(0, col(CanonicalField::NumeroFuncionarios)), "150");
    assert_eq!(table.cell(0, col(CanonicalField::CidadeContato)), "São Paulo");
    assert_eq!(table.cell(0, col(CanonicalField::EstadoContato)), "São Paulo");
    assert_eq!(table.cell(0, col(CanonicalField::PaisContato)), "Brasil");
    assert_eq!(table.cell(0, col(CanonicalField::Telefone)), "(11) 98765-4321");

    assert_eq!(table.cell(1, col(CanonicalField::NomeContato)), "Bruno Silva");
    assert_eq!(table.cell(1, col(CanonicalField::Empresa)), "Beta Consultoria");
    assert_eq!(table.cell(1, col(CanonicalField::Segmento)), "Varejo");
    // Toll-free number rejected; "nan" employee count swept.
    assert_eq!(table.cell(1, col(CanonicalField::Telefone)), "");
    assert_eq!(table.cell(1, col(CanonicalField::NumeroFuncionarios)), "");
}

#[test]
fn no_cell_is_a_null_token() {
    let service = reference_service();
    let segments = SegmentDictionary::builtin();
    let outcome = clean_slice(EXPORT.as_bytes(), &service, &segments).expect("clean");
    for row in &outcome.table.rows {
        for cell in row {
            assert!(!cell.trim().eq_ignore_ascii_case("nan"), "nan leaked: {row:?}");
        }
    }
}

#[test]
fn reference_failure_degrades_but_cleans() {
    let service = LocalityService::with_fetcher(FailingFetcher);
    let segments = SegmentDictionary::default();
    let outcome = clean_slice(EXPORT.as_bytes(), &service, &segments).expect("clean");
    assert!(outcome.report.locality_degraded);

    let table = &outcome.table;
    let col = |field: CanonicalField| table.column_index(field.as_str()).unwrap();
    // Locality fields fall back to title-casing instead of emptying out.
    assert_eq!(table.cell(0, col(CanonicalField::CidadeContato)), "Sao Paulo");
    assert_eq!(table.cell(0, col(CanonicalField::PaisContato)), "Brasil");
    assert!(!table.cell(0, col(CanonicalField::EstadoContato)).is_empty());
}

#[test]
fn pipeline_is_idempotent_on_its_own_output() {
    let service = reference_service();
    let segments = SegmentDictionary::builtin();
    let first = clean_slice(EXPORT.as_bytes(), &service, &segments).expect("clean");

    let index = service.index();
    let second = clean(&first.table, &index, &segments);
    let col = |table: &Table, field: CanonicalField| table.column_index(field.as_str()).unwrap();
    for field in [
        CanonicalField::NomeContato,
        CanonicalField::Telefone,
        CanonicalField::Empresa,
        CanonicalField::Site,
        CanonicalField::NumeroFuncionarios,
        CanonicalField::CidadeContato,
        CanonicalField::EstadoContato,
        CanonicalField::PaisContato,
    ] {
        for row in 0..first.table.row_count() {
            assert_eq!(
                second.cell(row, col(&second, field)),
                first.table.cell(row, col(&first.table, field)),
                "{field} changed on re-run"
            );
        }
    }
}

#[test]
fn clean_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{EXPORT}").expect("write fixture");
    let service = reference_service();
    let segments = SegmentDictionary::builtin();
    let outcome = clean_file(file.path(), &service, &segments).expect("clean");
    assert_eq!(outcome.report.rows_out, 2);
}

#[test]
fn unreadable_input_aborts() {
    let service = reference_service();
    let segments = SegmentDictionary::default();
    assert!(clean_slice(b"", &service, &segments).is_err());
    assert!(
        clean_file(
            std::path::Path::new("/nonexistent/leads.csv"),
            &service,
            &segments
        )
        .is_err()
    );
}

#[test]
fn semicolon_export_cleans_identically() {
    let semicolon = EXPORT.replace(',', ";");
    let service = reference_service();
    let segments = SegmentDictionary::builtin();
    let from_comma = clean_slice(EXPORT.as_bytes(), &service, &segments).expect("comma");
    let from_semicolon = clean_slice(semicolon.as_bytes(), &service, &segments).expect("semicolon");
    assert_eq!(from_comma.table, from_semicolon.table);
}

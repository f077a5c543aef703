//! Tests for schema_split
//!
//! This file contains unit and integration tests for the emitter, the
//! built-in catalog, and the configuration layer.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::tempdir;
use walkdir::WalkDir;

use crate::catalog::tables;
use crate::catalog::types::{Catalog, TableSpec};
use crate::config::{Config, OutputConfig};
use crate::emitter::generator;
use crate::emitter::writer::{EmitReport, SchemaEmitter, TABLES_DIR};
use crate::error::Error;
use crate::utils::naming;

/// Run the emitter over the built-in catalog into the given root
fn emit_into(root: &Path) -> EmitReport {
    let config = OutputConfig {
        root: root.to_path_buf(),
        dry_run: false,
    };

    SchemaEmitter::new(&config)
        .emit_all(tables::builtin())
        .expect("emit failed")
}

fn builtin_table(name: &str) -> &'static TableSpec {
    tables::builtin()
        .tables
        .get(name)
        .unwrap_or_else(|| panic!("table '{}' not in built-in catalog", name))
}

#[test]
fn builtin_catalog_is_valid_and_ordered() {
    let catalog = tables::builtin();

    catalog.validate().expect("built-in catalog must validate");

    let names: Vec<&str> = catalog.tables.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "clients",
            "medications",
            "medication_history",
            "dosage_info",
            "audit_log",
            "api_audit_log",
        ]
    );
}

#[test]
fn clients_table_sql_shape() {
    let sql = generator::table_sql(builtin_table("clients"));

    assert!(sql.starts_with("-- Clients Table\n"));
    assert!(sql.contains("-- Patient/client records with full medical information\n"));
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS clients ("));
    assert!(sql.contains("updated_at TIMESTAMPTZ DEFAULT NOW()"));
    assert!(sql.ends_with(
        "COMMENT ON TABLE clients IS 'Patient/client records with full medical information';"
    ));
}

#[test]
fn table_sql_escapes_single_quotes_in_comment() {
    let table = TableSpec::new("notes", "  id UUID PRIMARY KEY", "The user's notes");
    let sql = generator::table_sql(&table);

    assert!(sql.contains("COMMENT ON TABLE notes IS 'The user''s notes';"));
}

#[test]
fn index_sql_matches_expected() {
    let table = builtin_table("clients");
    let index = &table.indexes[0];

    assert_eq!(
        generator::index_sql(table, index),
        "-- Index on organization_id\n\
         CREATE INDEX IF NOT EXISTS idx_clients_organization ON clients(organization_id);"
    );
}

#[test]
fn index_sql_keeps_multi_column_expressions() {
    let table = builtin_table("audit_log");
    let resource = table
        .indexes
        .iter()
        .find(|idx| idx.name == "idx_audit_log_resource")
        .unwrap();

    assert_eq!(
        generator::index_sql(table, resource),
        "-- Index on resource_type, resource_id\n\
         CREATE INDEX IF NOT EXISTS idx_audit_log_resource ON audit_log(resource_type, resource_id);"
    );
}

#[rstest]
#[case("clients", true)]
#[case("medications", true)]
#[case("medication_history", true)]
#[case("dosage_info", true)]
#[case("audit_log", false)]
#[case("api_audit_log", false)]
fn trigger_emitted_only_for_updated_at_tables(#[case] name: &str, #[case] expected: bool) {
    let table = builtin_table(name);

    assert_eq!(table.has_updated_at(), expected);
    assert_eq!(generator::trigger_sql(table).is_some(), expected);
}

#[test]
fn trigger_sql_wires_shared_function() {
    let sql = generator::trigger_sql(builtin_table("clients")).unwrap();

    assert!(sql.contains("CREATE TRIGGER update_clients_updated_at"));
    assert!(sql.contains("BEFORE UPDATE ON clients"));
    assert!(sql.contains("FOR EACH ROW"));
    assert!(sql.ends_with("EXECUTE FUNCTION update_updated_at_column();"));
}

#[test]
fn emitter_writes_expected_clients_layout() {
    let dir = tempdir().unwrap();
    emit_into(dir.path());

    let clients_dir = dir.path().join(TABLES_DIR).join("clients");

    let table_sql = fs::read_to_string(clients_dir.join("table.sql")).unwrap();
    assert!(table_sql.contains("CREATE TABLE IF NOT EXISTS clients ("));

    let mut index_files: Vec<String> = fs::read_dir(clients_dir.join("indexes"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    index_files.sort();

    assert_eq!(
        index_files,
        vec![
            "idx_clients_dob.sql",
            "idx_clients_name.sql",
            "idx_clients_organization.sql",
            "idx_clients_status.sql",
        ]
    );

    assert!(clients_dir.join("triggers/update_updated_at.sql").is_file());
}

#[test]
fn emitter_writes_no_trigger_for_audit_log() {
    let dir = tempdir().unwrap();
    emit_into(dir.path());

    let audit_dir = dir.path().join(TABLES_DIR).join("audit_log");

    assert!(audit_dir.join("table.sql").is_file());
    assert_eq!(fs::read_dir(audit_dir.join("indexes")).unwrap().count(), 6);
    assert!(!audit_dir.join("triggers").exists());
}

#[test]
fn full_run_writes_forty_five_files() {
    let dir = tempdir().unwrap();
    let report = emit_into(dir.path());

    // 6 table files + 35 index files + 4 trigger files
    assert_eq!(report.files_written(), 45);

    let on_disk = WalkDir::new(dir.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count();
    assert_eq!(on_disk, 45);

    assert!(report.contains("sql/02-tables/clients/table.sql"));
    assert!(report.contains("sql/02-tables/api_audit_log/indexes/idx_api_audit_log_client_ip.sql"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempdir().unwrap();

    let first = emit_into(dir.path());
    let clients_before = fs::read(dir.path().join(TABLES_DIR).join("clients/table.sql")).unwrap();

    let second = emit_into(dir.path());
    let clients_after = fs::read(dir.path().join(TABLES_DIR).join("clients/table.sql")).unwrap();

    assert_eq!(clients_before, clients_after);

    let first_digests: Vec<&str> = first.entries.iter().map(|e| e.digest.as_str()).collect();
    let second_digests: Vec<&str> = second.entries.iter().map(|e| e.digest.as_str()).collect();
    assert_eq!(first_digests, second_digests);
}

#[test]
fn dry_run_touches_nothing() {
    let dir = tempdir().unwrap();
    let config = OutputConfig {
        root: dir.path().to_path_buf(),
        dry_run: true,
    };

    let report = SchemaEmitter::new(&config)
        .emit_all(tables::builtin())
        .unwrap();

    assert_eq!(report.files_written(), 45);
    assert!(!dir.path().join("sql").exists());
}

#[test]
fn duplicate_table_names_are_rejected() {
    let mut catalog = Catalog::new();

    catalog
        .add_table(TableSpec::new("users", "  id UUID PRIMARY KEY", "Users"))
        .unwrap();

    let err = catalog
        .add_table(TableSpec::new("users", "  id UUID PRIMARY KEY", "Again"))
        .unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
}

#[test]
fn validation_rejects_bad_identifiers_and_empty_columns() {
    let mut catalog = Catalog::new();
    catalog
        .add_table(TableSpec::new("1bad", "  id UUID", "Bad name"))
        .unwrap();
    assert!(catalog.validate().is_err());

    let mut catalog = Catalog::new();
    catalog
        .add_table(TableSpec::new("empty_columns", "   ", "No columns"))
        .unwrap();
    assert!(catalog.validate().is_err());

    assert!(Catalog::new().validate().is_err());
}

#[rstest]
#[case("clients", "Clients")]
#[case("medication_history", "Medication History")]
#[case("api_audit_log", "Api Audit Log")]
fn table_titles(#[case] name: &str, #[case] title: &str) {
    assert_eq!(naming::table_title(name), title);
}

#[test]
fn naming_helpers() {
    assert_eq!(
        naming::trigger_name("dosage_info"),
        "update_dosage_info_updated_at"
    );

    assert!(naming::is_valid_identifier("audit_log"));
    assert!(naming::is_valid_identifier("_private"));
    assert!(!naming::is_valid_identifier("2fast"));
    assert!(!naming::is_valid_identifier("bad-name"));
    assert!(!naming::is_valid_identifier(""));
}

#[test]
fn config_defaults_match_plain_run() {
    let config = Config::default();

    assert_eq!(config.output.root, Path::new("."));
    assert!(!config.output.dry_run);
    assert!(config.logging.is_none());
}

#[test]
fn config_parses_from_toml() {
    let config_str = r#"
        [output]
        root = "out"
        dry_run = true

        [logging]
        level = "debug"
        format = "json"
    "#;

    let config: Config = toml::from_str(config_str).expect("Failed to parse test config");

    assert_eq!(config.output.root, Path::new("out"));
    assert!(config.output.dry_run);
    assert_eq!(config.logging.as_ref().unwrap().level, "debug");
    assert_eq!(config.logging.as_ref().unwrap().format, "json");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: Config = toml::from_str("[output]\ndry_run = true\n").unwrap();

    assert_eq!(config.output.root, Path::new("."));
    assert!(config.output.dry_run);
    assert!(config.logging.is_none());
}

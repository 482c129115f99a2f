use std::path::{Path, PathBuf};

use pc_core::{FormatError, SymbolTable};
use pc_emit::{
    DECLARE_MACRO, EmitError, ErrorPolicy, GenerateRequest, POSTAMBLE, PREAMBLE, declare_all,
    generate, render_table,
};
use pc_table::{ConstantRecord, ConstantTable, load_table};
use proptest::prelude::*;

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/codata_sample.yaml")
}

fn declaration_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with(DECLARE_MACRO)).collect()
}

fn line_for<'a>(text: &'a str, name: &str) -> &'a str {
    let prefix = format!("{DECLARE_MACRO}{{{name}}}");
    declaration_lines(text)
        .into_iter()
        .find(|l| l.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no declaration for {name}"))
}

#[test]
fn sample_table_generates_every_constant() {
    let output = std::env::temp_dir().join("pc_emit_sample.tex");
    let request = GenerateRequest {
        table_path: &sample_path(),
        units_path: None,
        output_path: &output,
        policy: ErrorPolicy::Abort,
    };

    let report = generate(&request).unwrap();
    let table = load_table(&sample_path()).unwrap();
    assert_eq!(report.declared, table.constants.len());
    assert!(report.skipped.is_empty());

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with(PREAMBLE));
    assert!(text.ends_with(POSTAMBLE));

    let lines = declaration_lines(&text);
    assert_eq!(lines.len(), table.constants.len());
    for (line, record) in lines.iter().zip(&table.constants) {
        assert!(line.starts_with(&format!("{DECLARE_MACRO}{{{}}}", record.name)));
    }
}

#[test]
fn sample_table_formatting() {
    let table = load_table(&sample_path()).unwrap();
    let (text, _) = render_table(&table, &SymbolTable::default(), ErrorPolicy::Abort).unwrap();

    let cases = [
        (
            "Newtonian constant of gravitation",
            r"{6.6743e-11}{\cube\metre\per\kilogram\per\square\second}{1.5e-15}{6.6743(2)e-11}",
        ),
        (
            "Rydberg constant",
            r"{10973731.56816}{\per\metre}{2.1e-05}{10973731.56816(3)}",
        ),
        (
            "Stefan-Boltzmann constant",
            r"{5.670374419e-08}{\watt\per\square\metre\per\raiseto{4}\kelvin}{0.0}{5.670374419(0)e-08}",
        ),
        (
            "natural unit of momentum in MeV/c",
            r"{0.51099895}{\mega\electronvolt\clight}{1.5e-10}{0.51099895(1)}",
        ),
        (
            "Thomson cross section",
            r"{6.6524587321e-29}{\square\metre}{6e-38}{6.6524587321(60)e-29}",
        ),
        (
            "atomic mass unit-electron volt relationship",
            r"{931494102.42}{\electronvolt}{0.28}{931494102.42(028)}",
        ),
        (
            "fine-structure constant",
            r"{0.0072973525693}{}{1.1e-12}{0.0072973525693(11)}",
        ),
    ];

    for (name, rest) in cases {
        assert_eq!(
            line_for(&text, name),
            format!("{DECLARE_MACRO}{{{name}}}{rest}"),
            "constant {name}"
        );
    }
}

fn write_table(file: &str, table: &ConstantTable) -> PathBuf {
    let path = std::env::temp_dir().join(file);
    pc_table::save_yaml(&path, table).unwrap();
    path
}

fn table_with_bad_unit() -> ConstantTable {
    let mut table = ConstantTable::new("bad");
    table.constants = vec![
        ConstantRecord::new("standard atmosphere", "101325.0", "Pa", "0.0"),
        ConstantRecord::new("standard pressure", "1", "bar", "0"),
    ];
    table
}

#[test]
fn abort_writes_nothing() {
    let table_path = write_table("pc_emit_abort.yaml", &table_with_bad_unit());
    let output = std::env::temp_dir().join("pc_emit_abort.tex");
    let _ = std::fs::remove_file(&output);

    let err = generate(&GenerateRequest {
        table_path: &table_path,
        units_path: None,
        output_path: &output,
        policy: ErrorPolicy::Abort,
    })
    .unwrap_err();

    match err {
        EmitError::Record { name, source } => {
            assert_eq!(name, "standard pressure");
            assert_eq!(
                source,
                FormatError::UnknownUnit {
                    symbol: "bar".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[test]
fn skip_reports_and_continues() {
    let table_path = write_table("pc_emit_skip.yaml", &table_with_bad_unit());
    let output = std::env::temp_dir().join("pc_emit_skip.tex");

    let report = generate(&GenerateRequest {
        table_path: &table_path,
        units_path: None,
        output_path: &output,
        policy: ErrorPolicy::Skip,
    })
    .unwrap();

    assert_eq!(report.declared, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].name, "standard pressure");

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(declaration_lines(&text).len(), 1);
}

#[test]
fn units_file_supplies_missing_symbol() {
    let table_path = write_table("pc_emit_units.yaml", &table_with_bad_unit());
    let units_path = std::env::temp_dir().join("pc_emit_units_override.yaml");
    std::fs::write(&units_path, "bar: \\bar\n").unwrap();
    let output = std::env::temp_dir().join("pc_emit_units.tex");

    let report = generate(&GenerateRequest {
        table_path: &table_path,
        units_path: Some(&units_path),
        output_path: &output,
        policy: ErrorPolicy::Abort,
    })
    .unwrap();
    assert_eq!(report.declared, 2);

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        line_for(&text, "standard pressure"),
        format!(r"{DECLARE_MACRO}{{standard pressure}}{{1}}{{\bar}}{{0}}{{1(0)}}")
    );
}

#[test]
fn table_units_are_honoured() {
    let mut table = table_with_bad_unit();
    table.units.insert("bar".to_string(), r"\bar".to_string());

    let symbols = pc_emit::resolve_symbols(&table, None).unwrap();
    let (text, report) = render_table(&table, &symbols, ErrorPolicy::Abort).unwrap();
    assert_eq!(report.declared, 2);
    assert!(line_for(&text, "standard pressure").contains(r"{\bar}"));
}

#[test]
fn missing_table_file_is_a_table_error() {
    let output = std::env::temp_dir().join("pc_emit_missing.tex");
    let err = generate(&GenerateRequest {
        table_path: Path::new("/nonexistent/constants.yaml"),
        units_path: None,
        output_path: &output,
        policy: ErrorPolicy::Abort,
    })
    .unwrap_err();
    assert!(matches!(err, EmitError::Table(_)));
}

proptest! {
    #[test]
    fn output_follows_table_order(
        records in Just(load_table(&sample_path()).unwrap().constants).prop_shuffle()
    ) {
        let (decls, skipped) = declare_all(&records, &SymbolTable::default(), ErrorPolicy::Abort).unwrap();
        prop_assert!(skipped.is_empty());
        let got: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        let want: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        prop_assert_eq!(got, want);
    }
}

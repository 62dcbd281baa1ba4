#![cfg(test)]
use portname_common::error::TableError;
use portname_common::table::PortTable;
use portname_core::{rows, table};

use crate::fixtures::Fixture;

const TABLE: &str = "21,ftp\n22,ssh\n80,http\n443,https\n3306,mysql\n";

fn rewrite(table: &PortTable, fixture: &Fixture, input: &str) -> String {
    let source = fixture.file("rows.csv", input).unwrap();
    let mut out: Vec<u8> = Vec::new();

    rows::transform_file(table, &source, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Every port in the table comes back as its name, every other port as itself.
#[test]
fn loaded_table_translates_every_port() {
    let fixture = Fixture::new().unwrap();
    let path = fixture.file("port-process.csv", TABLE).unwrap();
    let table = table::load_table(&path).unwrap();

    for (port, name) in [(21, "ftp"), (22, "ssh"), (80, "http"), (443, "https"), (3306, "mysql")] {
        assert_eq!(table.translate(port), name);
    }

    for port in [0u64, 23, 81, 8080, 65535, 70000] {
        assert_eq!(table.translate(port), port.to_string());
    }
}

#[test]
fn example_row_is_named() {
    let fixture = Fixture::new().unwrap();
    let table = PortTable::from_iter([(80, "http"), (443, "https")]);

    let output = rewrite(&table, &fixture, "\"10.0.0.1,80,443,22\"\n");
    assert_eq!(output, "10.0.0.1,http,https,22\n");
}

#[test]
fn rows_without_known_ports_are_unchanged() {
    let fixture = Fixture::new().unwrap();
    let path = fixture.file("port-process.csv", TABLE).unwrap();
    let table = table::load_table(&path).unwrap();

    let input = "\"192.168.0.10\",\"8080\",\"open\"\n192.168.0.11,5432,filtered\n";
    let output = rewrite(&table, &fixture, input);

    assert_eq!(output, input.replace('"', ""));
}

#[test]
fn rewriting_twice_gives_same_output() {
    let fixture = Fixture::new().unwrap();
    let path = fixture.file("port-process.csv", TABLE).unwrap();
    let table = table::load_table(&path).unwrap();
    let input = "db,3306,tcp\nweb,80,443\n\nftp,21\n";

    let first = rewrite(&table, &fixture, input);
    let second = rewrite(&table, &fixture, input);

    assert_eq!(first, second);
    assert_eq!(first, "db,mysql,tcp\nweb,http,https\n\nftp,ftp\n");
}

#[test]
fn broken_table_yields_no_partial_result() {
    let fixture = Fixture::new().unwrap();
    let path = fixture.file("port-process.csv", "22,ssh\n80,http\n443\n").unwrap();

    let err = table::load_table(&path).unwrap_err();
    assert!(matches!(err, TableError::Format { line: 3, fields: 1 }));
}

#[test]
fn missing_source_reports_its_path() {
    let fixture = Fixture::new().unwrap();
    let table = PortTable::new();
    let missing = fixture.path("nope.csv");

    let err = rows::transform_file(&table, &missing, &mut Vec::<u8>::new()).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}

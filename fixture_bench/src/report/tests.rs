//!
//! The benchmark report tests.
//!

use std::path::PathBuf;

use crate::complexity::Complexity;
use crate::fixture::family::Family;
use crate::model::benchmark::metadata::Metadata;
use crate::model::benchmark::result::BenchmarkResult;
use crate::model::benchmark::trial::Status;
use crate::model::benchmark::trial::Trial;
use crate::model::benchmark::Benchmark;

use super::backend::memory::MemoryBackend;
use super::backend::xlsx::XlsxBackend;
use super::backend::Cell;
use super::backend::DocumentBackend;
use super::schema::ColumnKind;
use super::Report;
use super::Settings;

const MEAN: u16 = 6;
const UNCERTAINTY: u16 = 7;
const COMPLEXITY: u16 = 8;

fn benchmark(trials: usize, results: &[(&str, [u64; 2], &[f64])]) -> Benchmark {
    let complexity = Complexity::new(&[2.0, 1.0], &[], Family::Edges).expect("Always valid");
    let metadata = Metadata::new(
        PathBuf::from("main"),
        trials,
        Family::Edges,
        complexity.clone(),
        1,
    );
    let mut benchmark = Benchmark::new(metadata);
    for (fixture, dimensions, seconds) in results {
        let trials = seconds
            .iter()
            .enumerate()
            .map(|(index, seconds)| Trial {
                index,
                seconds: *seconds,
                status: Status::Success,
            })
            .collect();
        benchmark.insert(BenchmarkResult::new(
            (*fixture).to_owned(),
            dimensions.to_vec(),
            trials,
            complexity.evaluate(dimensions),
        ));
    }
    benchmark
}

fn render(benchmark: &Benchmark, settings: Settings, formulas: bool) -> MemoryBackend {
    let mut backend = MemoryBackend::new(formulas);
    Report::new(benchmark, settings)
        .write(&mut backend)
        .expect("Rendering");
    backend
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("Numeric cell");
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn rows_follow_identifier_order() {
    let benchmark = benchmark(
        1,
        &[
            ("test10.in", [1, 1], &[0.1]),
            ("test02.in", [1, 1], &[0.1]),
            ("test01.in", [1, 1], &[0.1]),
        ],
    );

    let backend = render(&benchmark, Settings::default(), true);

    let fixtures = (1..=3)
        .map(|row| backend.cell(row, 0).cloned())
        .collect::<Vec<Option<Cell>>>();
    assert_eq!(
        fixtures,
        vec![
            Some(Cell::Text("test01.in".to_owned())),
            Some(Cell::Text("test02.in".to_owned())),
            Some(Cell::Text("test10.in".to_owned())),
        ]
    );
}

#[test]
fn complexity_formula_matches_eager_value() {
    let benchmark = benchmark(3, &[("test01.in", [4, 5], &[1.0, 2.0, 3.0])]);

    let with_formulas = render(&benchmark, Settings::default(), true);
    let with_values = render(&benchmark, Settings::default(), false);

    assert_eq!(
        with_formulas.cell(1, COMPLEXITY),
        Some(&Cell::Formula("B2^2*C2^1".to_owned()))
    );
    assert_close(with_formulas.value(1, COMPLEXITY), 80.0);
    assert_eq!(with_values.cell(1, COMPLEXITY), Some(&Cell::Number(80.0)));
}

#[test]
fn statistics_formulas_match_eager_values() {
    let benchmark = benchmark(3, &[("test01.in", [4, 5], &[1.0, 2.0, 3.0])]);

    let with_formulas = render(&benchmark, Settings::default(), true);
    let precomputed = Settings {
        precomputed: true,
        ..Settings::default()
    };
    let with_values = render(&benchmark, precomputed, true);

    assert_eq!(
        with_formulas.cell(1, MEAN),
        Some(&Cell::Formula("AVERAGE(D2:F2)".to_owned()))
    );
    assert_eq!(
        with_formulas.cell(1, UNCERTAINTY),
        Some(&Cell::Formula("STDEV(D2:F2)".to_owned()))
    );
    for backend in [&with_formulas, &with_values] {
        assert_close(backend.value(1, MEAN), 2.0);
        assert_close(backend.value(1, UNCERTAINTY), 1.0);
    }
    assert_eq!(with_values.cell(1, MEAN), Some(&Cell::Number(2.0)));
}

#[test]
fn single_trial_uncertainty_is_undefined() {
    let benchmark = benchmark(1, &[("test01.in", [4, 5], &[0.5])]);

    for formulas in [true, false] {
        let backend = render(&benchmark, Settings::default(), formulas);

        let uncertainty = Report::new(&benchmark, Settings::default())
            .schema
            .position(ColumnKind::Uncertainty)
            .expect("Always present");
        assert_eq!(
            backend.cell(1, uncertainty),
            Some(&Cell::Text(Report::UNDEFINED.to_owned()))
        );
        assert_close(backend.value(1, uncertainty - 1), 0.5);
    }
}

#[test]
fn failed_trials_are_annotated() {
    let mut benchmark = benchmark(3, &[]);
    let trials = vec![
        Trial {
            index: 0,
            seconds: 0.1,
            status: Status::Success,
        },
        Trial {
            index: 1,
            seconds: 0.2,
            status: Status::Failure { code: Some(3) },
        },
        Trial {
            index: 2,
            seconds: 0.3,
            status: Status::Failure { code: None },
        },
    ];
    benchmark.insert(BenchmarkResult::new("test01.in".to_owned(), vec![1, 1], trials, 1.0));

    let backend = render(&benchmark, Settings::default(), true);

    assert_eq!(backend.notes.len(), 2);
    assert_eq!(
        backend.notes.get(&(1, 4)).map(String::as_str),
        Some("Trial 2 failed: exit status 3")
    );
    assert_eq!(
        backend.notes.get(&(1, 5)).map(String::as_str),
        Some("Trial 3 failed: terminated by a signal")
    );
    assert_close(backend.value(1, 4), 0.2);
}

#[test]
fn chart_below_the_table() {
    let benchmark = benchmark(
        1,
        &[("test01.in", [1, 1], &[0.1]), ("test02.in", [2, 2], &[0.2])],
    );

    let backend = render(&benchmark, Settings::default(), true);

    assert_eq!(backend.charts.len(), 1);
    let chart = &backend.charts[0];
    assert_eq!((chart.first_row, chart.last_row), (1, 2));
    assert_eq!((chart.anchor_row, chart.anchor_column), (4, 0));
    assert_eq!((chart.x_column, chart.y_column), (COMPLEXITY - 2, MEAN - 2));
    assert!(chart.trendline);
    assert!(!chart.legend);
}

#[test]
fn chart_can_be_disabled() {
    let populated = benchmark(1, &[("test01.in", [1, 1], &[0.1])]);
    let settings = Settings {
        chart: false,
        ..Settings::default()
    };
    assert!(render(&populated, settings, true).charts.is_empty());

    let empty = benchmark(1, &[]);
    let backend = render(&empty, Settings::default(), true);
    assert!(backend.charts.is_empty());
    assert!(backend.rows.is_empty());
}

#[test]
fn headers_are_wrapped() {
    let benchmark = benchmark(2, &[]);
    let settings = Settings {
        header_width: 8,
        ..Settings::default()
    };

    let backend = render(&benchmark, settings, true);

    assert_eq!(
        backend.headers(),
        vec![
            "Test\nFile",
            "Nodes",
            "Edges",
            "Time 1",
            "Time 2",
            "Average\nTime",
            "Uncertainty",
            "Complexity",
        ]
    );
    let table = backend.table.as_ref().expect("Opened");
    assert_eq!(table.name, Report::TABLE_NAME);
    assert_eq!(table.sheet, Report::SHEET_NAME);
    assert_eq!(table.columns[3].number_format.as_deref(), Some("0.00"));
    assert_eq!(table.columns[6].number_format.as_deref(), Some("0.0"));
    assert_eq!(table.columns[7].number_format.as_deref(), Some("0.00E+00"));
}

#[test]
fn rows_require_an_open_table() {
    let mut backend = MemoryBackend::new(true);

    assert!(backend.append_row(vec![Cell::Empty]).is_err());
    assert!(backend.set_cell(1, 0, Cell::Empty).is_err());
}

#[test]
fn xlsx_document() {
    let benchmark = benchmark(
        2,
        &[("test01.in", [4, 5], &[1.0, 2.0]), ("test02.in", [2, 2], &[0.5, 0.5])],
    );
    let directory = tempfile::tempdir().expect("Temporary directory creation");
    let path = directory.path().join("report.xlsx");

    let mut backend = XlsxBackend::new();
    Report::new(&benchmark, Settings::default())
        .write(&mut backend)
        .expect("Rendering");
    backend.save(path.as_path()).expect("Saving");

    let content = std::fs::read(path.as_path()).expect("Reading");
    assert!(content.starts_with(b"PK"));
}

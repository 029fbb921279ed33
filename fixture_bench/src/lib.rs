//!
//! The fixture benchmark library.
//!

pub mod complexity;
pub mod fixture;
pub mod model;
pub mod output;
pub mod report;
pub mod runner;
pub mod session;
pub mod statistics;

pub use crate::complexity::error::Error as ComplexityError;
pub use crate::complexity::Complexity;
pub use crate::fixture::error::Error as FixtureError;
pub use crate::fixture::family::Family;
pub use crate::fixture::record::Record;
pub use crate::fixture::Fixture;
pub use crate::model::benchmark::metadata::Metadata as BenchmarkMetadata;
pub use crate::model::benchmark::result::BenchmarkResult;
pub use crate::model::benchmark::trial::Status as TrialStatus;
pub use crate::model::benchmark::trial::Trial;
pub use crate::model::benchmark::Benchmark;
pub use crate::output::error::Error as OutputError;
pub use crate::output::format::Format as OutputFormat;
pub use crate::report::backend::memory::MemoryBackend;
pub use crate::report::backend::xlsx::XlsxBackend;
pub use crate::report::backend::DocumentBackend;
pub use crate::report::schema::Precision;
pub use crate::report::wrap::WrapOverflow;
pub use crate::report::Report;
pub use crate::report::Settings as ReportSettings;
pub use crate::runner::error::Error as RunnerError;
pub use crate::runner::process::ProcessRunner;
pub use crate::runner::process::SubprocessRunner;
pub use crate::runner::Runner;
pub use crate::session::Session;
pub use crate::statistics::Summary;

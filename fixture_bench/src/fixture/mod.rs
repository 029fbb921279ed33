//!
//! The benchmark fixture.
//!

pub mod error;
pub mod family;
pub mod record;

use std::path::Path;
use std::path::PathBuf;

use self::error::Error;
use self::family::Family;
use self::record::Record;

///
/// The benchmark fixture.
///
/// The first line of a fixture file declares the size dimensions, every further
/// non-empty line is a relational record of the family's arity.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// The fixture identifier, which is the source file name.
    pub identifier: String,
    /// The fixture family.
    pub family: Family,
    /// The size dimensions, in header order.
    pub dimensions: Vec<u64>,
    /// The relational records, in file order.
    pub records: Vec<Record>,
}

impl Fixture {
    /// The fixture file extension.
    pub const EXTENSION: &'static str = "in";

    ///
    /// Parses the fixture text read from `path`.
    ///
    pub fn parse(path: &Path, text: &str, family: Family) -> Result<Self, Error> {
        let mut lines = text.lines().enumerate();

        let header = match lines.next() {
            Some((_, header)) if !header.trim().is_empty() => header,
            _ => {
                return Err(Error::malformed(
                    path.to_path_buf(),
                    1,
                    "the size dimensions header is missing",
                ))
            }
        };
        let tokens: Vec<&str> = header.split_whitespace().collect();
        if tokens.len() < family.dimension_count() {
            return Err(Error::malformed(
                path.to_path_buf(),
                1,
                format!(
                    "expected {} size dimensions for the `{family}` family, found {}",
                    family.dimension_count(),
                    tokens.len()
                ),
            ));
        }
        let dimensions = tokens[..family.dimension_count()]
            .iter()
            .map(|token| Self::parse_integer(path, 1, token))
            .collect::<Result<Vec<u64>, Error>>()?;

        let mut records = Vec::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != family.record_arity() {
                return Err(Error::malformed(
                    path.to_path_buf(),
                    index + 1,
                    format!(
                        "expected {} integers per record, found {}",
                        family.record_arity(),
                        tokens.len()
                    ),
                ));
            }
            let values = tokens
                .into_iter()
                .map(|token| Self::parse_integer(path, index + 1, token))
                .collect::<Result<Vec<u64>, Error>>()?;
            records.push(Record::new(values));
        }

        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Ok(Self {
            identifier,
            family,
            dimensions,
            records,
        })
    }

    ///
    /// Returns the fixture files of `directory`, sorted by path.
    ///
    pub fn discover(directory: &Path) -> Result<Vec<PathBuf>, Error> {
        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(directory.to_string_lossy().as_ref()),
            Self::EXTENSION
        );
        let paths = glob::glob(pattern.as_str()).map_err(|error| Error::Pattern {
            error,
            pattern: pattern.clone(),
        })?;

        let mut fixtures = Vec::new();
        for path in paths {
            let path = path.map_err(|error| {
                let path = error.path().to_path_buf();
                Error::Reading {
                    error: error.into_error(),
                    path,
                }
            })?;
            if path.is_file() {
                fixtures.push(path);
            }
        }
        fixtures.sort();
        Ok(fixtures)
    }

    ///
    /// Returns the size dimension with the given 0-based index.
    ///
    pub fn dimension(&self, index: usize) -> Option<u64> {
        self.dimensions.get(index).copied()
    }

    ///
    /// Parses a single non-negative integer token.
    ///
    fn parse_integer(path: &Path, line: usize, token: &str) -> Result<u64, Error> {
        token.parse::<u64>().map_err(|_| {
            Error::malformed(
                path.to_path_buf(),
                line,
                format!("`{token}` is not a non-negative integer"),
            )
        })
    }
}

impl TryFrom<(&Path, Family)> for Fixture {
    type Error = Error;

    fn try_from((path, family): (&Path, Family)) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::parse(path, text.as_str(), family)
    }
}

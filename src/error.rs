// We define a single public Error type that wraps an internal ErrorKind enum
// (with a dedicated payload struct per kind). Keeping ErrorKind private gives
// us room to reorganize the variants without breaking the public API.
//
// The jiff crate has a whole discussion about error types. It merits further
// review!

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The underlying internal error type
#[non_exhaustive]
#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs when the requested worker count can't be used
    /// with the catalog (detected before any worker is spawned)
    InvalidConfiguration(InvalidConfigurationError),
    /// An unrecoverable condition inside a worker thread. This is fatal for
    /// the whole run: no partial statistics are ever reported
    EngineFailure(EngineFailureError),
    /// An error that occurs when a catalog line can't be parsed
    CatalogParse(CatalogParseError),
}

// define constructor methods for Error
impl Error {
    /// produce an error indicating that the worker count is unusable for a
    /// catalog of the given size
    pub(crate) fn invalid_configuration(n_workers: usize, n_objects: usize) -> Self {
        Error {
            kind: ErrorKind::InvalidConfiguration(InvalidConfigurationError {
                n_workers,
                n_objects,
            }),
        }
    }

    /// produce an error indicating that a worker thread died mid-sweep
    pub(crate) fn engine_failure(worker_id: usize) -> Self {
        Error {
            kind: ErrorKind::EngineFailure(EngineFailureError { worker_id }),
        }
    }

    /// produce an error indicating that a catalog line couldn't be parsed
    ///
    /// `line` is 1-based (to match what an editor would display)
    pub(crate) fn catalog_parse(line: usize, what: String) -> Self {
        Error {
            kind: ErrorKind::CatalogParse(CatalogParseError { line, what }),
        }
    }

    /// `true` when the error was raised while validating the worker count
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidConfiguration(_))
    }

    /// `true` when the error was raised because a worker thread died
    pub fn is_engine_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::EngineFailure(_))
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ErrorKind {}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::InvalidConfiguration(ref err) => err.fmt(f),
            ErrorKind::EngineFailure(ref err) => err.fmt(f),
            ErrorKind::CatalogParse(ref err) => err.fmt(f),
        }
    }
}

/// An error that occurs when the requested worker count is zero or exceeds
/// the number of catalog rows (a worker with zero assigned rows is
/// degenerate, so we reject rather than clamp)
#[derive(Clone, Debug)]
struct InvalidConfigurationError {
    n_workers: usize,
    n_objects: usize,
}

impl std::error::Error for InvalidConfigurationError {}

impl core::fmt::Display for InvalidConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "can't split {} catalog rows among {} workers. The worker count \
             must be at least 1 and must not exceed the row count",
            self.n_objects, self.n_workers
        )
    }
}

/// An error that occurs when a worker thread terminates abnormally
#[derive(Clone, Debug)]
struct EngineFailureError {
    worker_id: usize,
}

impl std::error::Error for EngineFailureError {}

impl core::fmt::Display for EngineFailureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "worker {} terminated abnormally; discarding all statistics \
             (partial pair coverage would silently skew the mean)",
            self.worker_id
        )
    }
}

/// An error that occurs when a catalog line has the wrong column count or a
/// field that can't be parsed as a number
#[derive(Clone, Debug)]
struct CatalogParseError {
    line: usize,
    what: String,
}

impl std::error::Error for CatalogParseError {}

impl core::fmt::Display for CatalogParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "problem with catalog line {}: {}", self.line, self.what)
    }
}

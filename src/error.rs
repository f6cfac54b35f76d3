/// Errors that can end a materialize run.
///
/// Database failures are carried through untouched so the caller sees
/// exactly what the server or driver reported.
#[derive(Debug)]
pub enum Error {
    /// An action name outside `create | refresh | revert`.
    UnknownAction(String),
    /// A schema or table name that was empty.
    EmptyIdentifier(&'static str),
    /// Connection or statement failure from the driver.
    Postgres(tokio_postgres::Error),
    /// Failure writing a statement to the verbose echo.
    Echo(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(s) => write!(f, "unknown action: {}", s),
            Self::EmptyIdentifier(s) => write!(f, "empty {} name", s),
            Self::Postgres(e) => write!(f, "{}", e),
            Self::Echo(e) => write!(f, "statement echo failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Postgres(e) => Some(e),
            Self::Echo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tokio_postgres::Error> for Error {
    fn from(e: tokio_postgres::Error) -> Self {
        Self::Postgres(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Echo(e)
    }
}

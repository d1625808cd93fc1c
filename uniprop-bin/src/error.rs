use std::error;
use std::fmt;
use std::io;
use std::result;

/// A type alias for handling errors throughout this tool.
pub type Result<T> = result::Result<T, Error>;

/// An error that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// An I/O error, typically while writing to stdout.
    Io(io::Error),
    /// An unrecognized script name given on the command line.
    Script(uniprop::ScriptNameError),
    /// Any other kind of error, described by a message.
    Other(String),
}

impl Error {
    /// Returns true if and only if this is a broken pipe error.
    ///
    /// Broken pipes are reported by commands whose output got cut off,
    /// e.g., by piping into `head`, and should exit quietly.
    pub fn is_broken_pipe(&self) -> bool {
        match *self {
            Error::Io(ref err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Script(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Script(ref err) => err.fmt(f),
            Error::Other(ref msg) => write!(f, "{}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<uniprop::ScriptNameError> for Error {
    fn from(err: uniprop::ScriptNameError) -> Error {
        Error::Script(err)
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Error {
        Error::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let err = Error::Other("unrecognized command: foo".to_string());
        assert_eq!(err.to_string(), "unrecognized command: foo");

        let err = Error::from("Wxyz".parse::<uniprop::Script>().unwrap_err());
        assert_eq!(err.to_string(), "unrecognized script name: \"Wxyz\"");
        assert!(!err.is_broken_pipe());
    }
}

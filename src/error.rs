use std::error;
use std::fmt;

/// An error that occurs when a script name does not correspond to any
/// known script.
///
/// This is returned by the `FromStr` implementation on `Script`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScriptNameError {
    pub(crate) name: String,
}

impl ScriptNameError {
    /// Return the name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl error::Error for ScriptNameError {}

impl fmt::Display for ScriptNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized script name: {:?}", self.name)
    }
}

use uniprop::Script;

use crate::error::Result;

/// A light wrapper around clap's ArgMatches that provides typed access to
/// the arguments of each command.
#[derive(Clone, Debug)]
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ArgMatches<'a> {
    /// Create a new wrapper for the given matches.
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    /// Returns true if and only if the given flag is present.
    pub fn is_present(&self, name: &str) -> bool {
        self.0.is_present(name)
    }

    /// Return the script arguments, parsed as ISO 15924 codes, in the
    /// order given.
    pub fn scripts(&self) -> Result<Vec<Script>> {
        let values = match self.0.values_of("script") {
            None => return err!("missing script argument"),
            Some(values) => values,
        };
        let mut scripts = vec![];
        for value in values {
            scripts.push(value.parse::<Script>()?);
        }
        Ok(scripts)
    }

    /// Return the codepoint arguments, parsed, in the order given.
    pub fn codepoints(&self) -> Result<Vec<u32>> {
        let values = match self.0.values_of("codepoint") {
            None => return err!("missing codepoint argument"),
            Some(values) => values,
        };
        let mut codepoints = vec![];
        for value in values {
            codepoints.push(parse_codepoint(value)?);
        }
        Ok(codepoints)
    }
}

/// Parse a single codepoint written as hex digits, with an optional `U+`
/// prefix.
fn parse_codepoint(s: &str) -> Result<u32> {
    let digits = if s.starts_with("U+") || s.starts_with("u+") {
        &s[2..]
    } else {
        s
    };
    // from_str_radix tolerates a leading sign, which we don't want.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return err!("invalid codepoint: {}", s);
    }
    match u32::from_str_radix(digits, 16) {
        Ok(cp) => Ok(cp),
        Err(_) => err!("invalid codepoint: {}", s),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_codepoint;

    #[test]
    fn codepoints_with_prefix() {
        assert_eq!(parse_codepoint("U+0041").unwrap(), 0x41);
        assert_eq!(parse_codepoint("u+1F600").unwrap(), 0x1F600);
        assert_eq!(parse_codepoint("U+0").unwrap(), 0);
    }

    #[test]
    fn codepoints_bare() {
        assert_eq!(parse_codepoint("41").unwrap(), 0x41);
        assert_eq!(parse_codepoint("10ffff").unwrap(), 0x10FFFF);
    }

    #[test]
    fn codepoints_invalid() {
        assert!(parse_codepoint("").is_err());
        assert!(parse_codepoint("U+").is_err());
        assert!(parse_codepoint("xyz").is_err());
        assert!(parse_codepoint("+41").is_err());
        assert!(parse_codepoint("U+-41").is_err());
        // Too many digits to fit in a u32.
        assert!(parse_codepoint("FFFFFFFFF").is_err());
    }
}

use std::{fmt, str::FromStr};

/// Number of leading characters of a credential that may be displayed.
pub const PREFIX_LEN: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The credential is empty or only whitespace.
    #[error("credential cannot be empty")]
    Empty,
}

/// An opaque bearer token.
///
/// The full value is only reachable through [`Credential::expose`]; `Debug`
/// prints the display prefix and the length.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Accepts any value that is not blank. The value is kept verbatim.
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(CredentialError::Empty);
        }

        Ok(Self(value))
    }

    /// The first [`PREFIX_LEN`] characters, or the whole token if shorter.
    pub fn prefix(&self) -> &str {
        match self.0.char_indices().nth(PREFIX_LEN) {
            Some((i, _)) => &self.0[..i],
            None => &self.0,
        }
    }

    /// The raw secret. Use only to build the outgoing request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Parses a keys file: one credential per line with surrounding
    /// whitespace trimmed, blank lines and lines starting with `#` skipped.
    pub fn parse_list(contents: &str) -> Vec<Self> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .filter_map(|line| Self::new(line).ok())
            .collect()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credential({}... {} chars)",
            self.prefix(),
            self.0.chars().count()
        )
    }
}

impl FromStr for Credential {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_blank() {
        assert_eq!(Credential::new("").unwrap_err(), CredentialError::Empty);
        assert_eq!(Credential::new("  \t").unwrap_err(), CredentialError::Empty);
    }

    #[test]
    fn keeps_value_verbatim() {
        let credential: Credential = "  sk-abc \n".parse().unwrap();
        assert_eq!(credential.expose(), "  sk-abc \n");

        let multiline = Credential::new("bad\nkey").unwrap();
        assert_eq!(multiline.prefix(), "bad\nkey");
    }

    #[test]
    fn prefix_is_ten_chars() {
        let credential = Credential::new("sk-abcdef1234567890abcdef").unwrap();
        assert_eq!(credential.prefix(), "sk-abcdef1");

        let short = Credential::new("sk-abc").unwrap();
        assert_eq!(short.prefix(), "sk-abc");
    }

    #[test]
    fn prefix_respects_char_boundaries() {
        let credential = Credential::new("ключ-abcdefgh").unwrap();
        assert_eq!(credential.prefix(), "ключ-abcde");
    }

    #[test]
    fn debug_does_not_leak() {
        let credential = Credential::new("sk-abcdef1234567890SECRET").unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("sk-abcdef1"));
    }

    #[test]
    fn parse_list_skips_blanks_and_comments() {
        let contents = "# production keys\nsk-one\n\n   \n  sk-two  \n#sk-disabled\nsk-three\n";
        let keys: Vec<_> = Credential::parse_list(contents)
            .iter()
            .map(|c| c.expose().to_string())
            .collect();
        assert_eq!(keys, ["sk-one", "sk-two", "sk-three"]);
    }
}

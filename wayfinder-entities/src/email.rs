use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self { address }
    }

    pub fn into_string(self) -> String {
        self.address
    }

    pub fn as_str(&self) -> &str {
        self.address.as_str()
    }

    /// The part after the `@` sign.
    pub fn domain(&self) -> Option<&str> {
        self.address.rsplit_once('@').map(|(_, domain)| domain)
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self { address: info.addr })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address() {
        assert!("foo@bar.com".parse::<EmailAddress>().is_ok());
        assert!("foo@".parse::<EmailAddress>().is_err());
        assert!("".parse::<EmailAddress>().is_err());
    }

    #[test]
    fn domain_of_address() {
        let email = "visitor@example.org".parse::<EmailAddress>().unwrap();
        assert_eq!(email.domain(), Some("example.org"));
    }
}

//! Customer identity.

use crate::error::DomainError;

/// Brazilian individual taxpayer id (CPF), normalized to its 11 digits.
///
/// Accepts 11 plain digits or the punctuated `NNN.NNN.NNN-NN` form. Check
/// digits are not verified; the customer service is the authority on
/// whether a CPF exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();

        let digits: String = match raw.len() {
            11 => raw.to_string(),
            14 if punctuated(raw) => raw.chars().filter(char::is_ascii_digit).collect(),
            _ => return Err(DomainError::InvalidCpf),
        };

        if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidCpf);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `NNN.NNN.NNN-NN`: separators at fixed positions, digits everywhere else.
fn punctuated(raw: &str) -> bool {
    raw.bytes().enumerate().all(|(i, b)| match i {
        3 | 7 => b == b'.',
        11 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(Cpf::parse("12345678900").unwrap().as_str(), "12345678900");
    }

    #[test]
    fn test_punctuated() {
        assert_eq!(
            Cpf::parse(" 123.456.789-00 ").unwrap().as_str(),
            "12345678900"
        );
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(Cpf::parse("1234"), Err(DomainError::InvalidCpf)));
        assert!(matches!(
            Cpf::parse("1234567890a"),
            Err(DomainError::InvalidCpf)
        ));
        assert!(matches!(Cpf::parse(""), Err(DomainError::InvalidCpf)));
    }

    #[test]
    fn test_misplaced_punctuation_rejected() {
        for raw in ["1.2.3-45678900", "1234.567.89-00", "123.456.78900", "123-456-789.00"] {
            assert!(
                matches!(Cpf::parse(raw), Err(DomainError::InvalidCpf)),
                "accepted {}",
                raw
            );
        }
    }
}

use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One call of the auction.
///
/// Calls serialize as their canonical token (`Pass`, `Dbl`, `Rdbl`, `1S`,
/// `3NT`) and only that exact spelling parses back, so comparing two calls
/// is the same as comparing their canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    /// Parses an answer as authors write it: case-insensitive, with the
    /// words `pass`, `dbl` and `rdbl` allowed in any case.
    pub fn from_authored(token: &str) -> Option<Call> {
        match token.to_ascii_uppercase().as_str() {
            "PASS" => Some(Call::Pass),
            "DBL" => Some(Call::Double),
            "RDBL" => Some(Call::Redouble),
            upper => upper.parse().ok(),
        }
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "Pass".to_string(),
            Call::Double => "Dbl".to_string(),
            Call::Redouble => "Rdbl".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.symbol()),
        }
    }
}

impl FromStr for Call {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pass" => return Ok(Call::Pass),
            "Dbl" => return Ok(Call::Double),
            "Rdbl" => return Ok(Call::Redouble),
            _ => {}
        }
        let mut chars = s.chars();
        let level = chars.next().and_then(|c| c.to_digit(10)).ok_or(())? as u8;
        if !(1..=7).contains(&level) {
            return Err(());
        }
        let strain = Strain::from_symbol(chars.as_str()).ok_or(())?;
        Ok(Call::Bid { level, strain })
    }
}

impl TryFrom<String> for Call {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse().map_err(|_| format!("not a canonical call: {:?}", s))
    }
}

impl From<Call> for String {
    fn from(call: Call) -> Self {
        call.render()
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tokens() {
        assert_eq!("Pass".parse::<Call>(), Ok(Call::Pass));
        assert_eq!("Dbl".parse::<Call>(), Ok(Call::Double));
        assert_eq!("Rdbl".parse::<Call>(), Ok(Call::Redouble));
        assert_eq!(
            "1NT".parse::<Call>(),
            Ok(Call::Bid {
                level: 1,
                strain: Strain::NoTrump
            })
        );
        assert_eq!(
            "7C".parse::<Call>(),
            Ok(Call::Bid {
                level: 7,
                strain: Strain::Clubs
            })
        );
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!("1nt".parse::<Call>(), Err(()));
        assert_eq!("pass".parse::<Call>(), Err(()));
        assert_eq!("P".parse::<Call>(), Err(()));
        assert_eq!("8S".parse::<Call>(), Err(()));
        assert_eq!("0H".parse::<Call>(), Err(()));
        assert_eq!("1N".parse::<Call>(), Err(()));
        assert_eq!("".parse::<Call>(), Err(()));
    }

    #[test]
    fn test_authored_spellings() {
        assert_eq!(Call::from_authored("pass"), Some(Call::Pass));
        assert_eq!(Call::from_authored("Dbl"), Some(Call::Double));
        assert_eq!(Call::from_authored("RDBL"), Some(Call::Redouble));
        assert_eq!(
            Call::from_authored("3nt"),
            Some(Call::Bid {
                level: 3,
                strain: Strain::NoTrump
            })
        );
        assert_eq!(Call::from_authored("3n"), None);
        assert_eq!(Call::from_authored("x"), None);
    }

    #[test]
    fn test_render_roundtrip() {
        for level in 1..=7 {
            for strain in Strain::ALL {
                let call = Call::Bid { level, strain };
                assert_eq!(call.render().parse::<Call>(), Ok(call));
            }
        }
        assert_eq!(Call::Double.to_string(), "Dbl");
    }

    #[test]
    fn test_serializes_as_token() {
        let call = Call::Bid {
            level: 3,
            strain: Strain::NoTrump,
        };
        assert_eq!(serde_json::to_string(&call).unwrap(), "\"3NT\"");
        let back: Call = serde_json::from_str("\"Rdbl\"").unwrap();
        assert_eq!(back, Call::Redouble);
        assert!(serde_json::from_str::<Call>("\"3nt\"").is_err());
    }
}

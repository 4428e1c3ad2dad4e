use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a batch run does when one directory fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failing directory.
    FailFast,
    /// Record the failure and continue with the next directory.
    #[default]
    Collect,
}

impl ErrorPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorPolicy::FailFast => "fail-fast",
            ErrorPolicy::Collect => "collect",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "fail-fast" | "failfast" => Ok(ErrorPolicy::FailFast),
            "collect" => Ok(ErrorPolicy::Collect),
            other => Err(format!(
                "unknown error policy '{}' (expected fail-fast or collect)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorPolicy;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("fail-fast".parse(), Ok(ErrorPolicy::FailFast));
        assert_eq!("FAIL_FAST".parse(), Ok(ErrorPolicy::FailFast));
        assert_eq!("collect".parse(), Ok(ErrorPolicy::Collect));
        assert!("retry".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn default_is_collect() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Collect);
    }
}

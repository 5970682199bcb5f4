use boot_core::error::BootError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `MAJOR[.MINOR[.PATCH]]` interpreter version.
///
/// Missing components compare as zero, so `3.6` == `3.6.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for RuntimeVersion {
    type Err = BootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BootError::Config(format!("Invalid runtime version '{}'", s));

        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u32, BootError> {
            match parts.next() {
                Some(part) => part.parse::<u32>().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };

        let version = RuntimeVersion::new(next(true)?, next(false)?, next(false)?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl TryFrom<String> for RuntimeVersion {
    type Error = BootError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuntimeVersion> for String {
    fn from(version: RuntimeVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_versions() {
        assert_eq!("3".parse::<RuntimeVersion>().unwrap(), RuntimeVersion::new(3, 0, 0));
        assert_eq!("3.6".parse::<RuntimeVersion>().unwrap(), RuntimeVersion::new(3, 6, 0));
        assert_eq!(
            "3.11.4".parse::<RuntimeVersion>().unwrap(),
            RuntimeVersion::new(3, 11, 4)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<RuntimeVersion>().is_err());
        assert!("three".parse::<RuntimeVersion>().is_err());
        assert!("3.x".parse::<RuntimeVersion>().is_err());
        assert!("3.1.2.4".parse::<RuntimeVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let old: RuntimeVersion = "3.9".parse().unwrap();
        let new: RuntimeVersion = "3.10".parse().unwrap();
        assert!(old < new);
        assert!("2.7.18".parse::<RuntimeVersion>().unwrap() < "3.6".parse().unwrap());
    }
}

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// Locale identifier with `_` between subtags, e.g. `en` or `en_US`.
///
/// Casing is kept exactly as given. Only ASCII alphanumeric subtags are
/// accepted, so a tag is always safe to use as a file stem.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag {
    value: String,
}

impl LanguageTag {
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidTag("language tag is empty"));
        }

        let mut value = String::with_capacity(trimmed.len());
        for (idx, part) in trimmed.split(['-', '_']).enumerate() {
            if part.is_empty() {
                return Err(CoreError::InvalidTag("language tag has empty subtag"));
            }
            if !part.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return Err(CoreError::InvalidTag("language tag has invalid character"));
            }
            if idx == 0 && !part.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(CoreError::InvalidTag("invalid language subtag"));
            }
            if idx > 0 {
                value.push('_');
            }
            value.push_str(part);
        }

        Ok(Self { value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn primary(&self) -> &str {
        self.value.split('_').next().unwrap_or(&self.value)
    }

    /// First subtag after the language that looks like a region (two
    /// letters or three digits), so `zh_Hant_TW` yields `TW`.
    pub fn region(&self) -> Option<&str> {
        self.value.split('_').skip(1).find(|part| is_region(part))
    }
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && value.chars().all(|ch| ch.is_ascii_alphabetic()))
        || (value.len() == 3 && value.chars().all(|ch| ch.is_ascii_digit()))
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for LanguageTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

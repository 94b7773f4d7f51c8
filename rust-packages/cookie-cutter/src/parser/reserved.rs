use serde_json::json;

use crate::constants::{
    DEFAULT_RESERVED_ATTRIBUTES, DOMAIN_ATTRIBUTE, PATH_ATTRIBUTE, PORT_ATTRIBUTE,
    VERSION_ATTRIBUTE,
};
use crate::enums::ReservedAttribute;
use crate::errors::{CookieError, CookieErrorCode};

/// Set of whole names that are consumed as metadata instead of becoming cookies.
///
/// Matching is ASCII case-insensitive. A leading `$` alone does not reserve a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedAttributes {
    entries: Vec<(String, ReservedAttribute)>,
}

impl ReservedAttributes {
    /// Builds a set from the given names, rejecting any that could never
    /// appear as a cookie name.
    pub fn new<I, S>(names: I) -> Result<Self, CookieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reserved = Self::empty();

        for name in names {
            reserved.insert(name.as_ref())?;
        }

        Ok(reserved)
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: &str) -> Result<(), CookieError> {
        validate_name(name)?;

        if self.classify(name).is_none() {
            self.entries.push((name.to_string(), kind_of(name)));
        }

        Ok(())
    }

    pub fn classify(&self, name: &str) -> Option<ReservedAttribute> {
        self.entries
            .iter()
            .find(|(reserved, _)| reserved.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.classify(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReservedAttributes {
    fn default() -> Self {
        Self {
            entries: DEFAULT_RESERVED_ATTRIBUTES
                .iter()
                .map(|name| (name.to_string(), kind_of(name)))
                .collect(),
        }
    }
}

fn kind_of(name: &str) -> ReservedAttribute {
    if name.eq_ignore_ascii_case(VERSION_ATTRIBUTE) {
        ReservedAttribute::Version
    } else if name.eq_ignore_ascii_case(PATH_ATTRIBUTE) {
        ReservedAttribute::Path
    } else if name.eq_ignore_ascii_case(DOMAIN_ATTRIBUTE) {
        ReservedAttribute::Domain
    } else if name.eq_ignore_ascii_case(PORT_ATTRIBUTE) {
        ReservedAttribute::Port
    } else {
        ReservedAttribute::Other
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), CookieError> {
    let valid = name.len() > 1
        && name.starts_with('$')
        && name
            .chars()
            .all(|ch| ch.is_ascii_graphic() && ch != ';' && ch != '=');

    if valid {
        return Ok(());
    }

    tracing::error!(name = %name, "invalid reserved attribute name");

    Err(CookieError::new(
        CookieErrorCode::InvalidReservedName,
        "reserved_attributes",
        "insert",
        "validation",
        "Reserved attribute names must start with '$' followed by visible ASCII other than ';' and '='"
            .to_string(),
        Some(json!({ "name": name })),
    ))
}

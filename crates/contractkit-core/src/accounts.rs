//! Named account roles.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{Error, Result};

/// Symbolic account roles mapped to positions in an externally managed
/// account list (e.g. `deployer -> 0`).
///
/// Deserializing rejects a role that appears more than once instead of
/// keeping the last index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamedAccounts(BTreeMap<String, u32>);

impl NamedAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a role, returning the index it previously mapped to.
    pub fn insert(&mut self, role: impl Into<String>, index: u32) -> Option<u32> {
        self.0.insert(role.into(), index)
    }

    pub fn index_of(&self, role: &str) -> Option<u32> {
        self.0.get(role).copied()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains_key(role)
    }

    /// Resolve a role against the account list supplied by the wallet provider.
    pub fn resolve<'a, A>(&self, role: &str, accounts: &'a [A]) -> Result<&'a A> {
        let index = self
            .index_of(role)
            .ok_or_else(|| Error::NotFound(format!("named account '{}'", role)))?;

        accounts.get(index as usize).ok_or_else(|| {
            Error::InvalidInput(format!(
                "named account '{}' refers to index {} but only {} accounts are available",
                role,
                index,
                accounts.len()
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(role, index)| (role.as_str(), *index))
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|role| role.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for NamedAccounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(role, index)| (role.into(), index)).collect())
    }
}

impl<'de> Deserialize<'de> for NamedAccounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NamedAccountsVisitor;

        impl<'de> Visitor<'de> for NamedAccountsVisitor {
            type Value = NamedAccounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of account role names to indices")
            }

            fn visit_map<M: MapAccess<'de>>(
                self,
                mut map: M,
            ) -> std::result::Result<Self::Value, M::Error> {
                let mut accounts = NamedAccounts::new();
                while let Some((role, index)) = map.next_entry::<String, u32>()? {
                    if accounts.contains(&role) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate named account role '{}'",
                            role
                        )));
                    }
                    accounts.insert(role, index);
                }
                Ok(accounts)
            }
        }

        deserializer.deserialize_map(NamedAccountsVisitor)
    }
}

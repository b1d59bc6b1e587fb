//!
//! The suite name to record sequence mapping.
//!

use std::fmt;

use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::record::BenchmarkRecord;

///
/// The suite name to record sequence mapping.
///
/// Suites keep the order they were first written in, so re-serializing a
/// ledger never moves existing suites around.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Entries {
    /// Suites in insertion order.
    suites: Vec<(String, Vec<BenchmarkRecord>)>,
}

impl Entries {
    ///
    /// Returns the records of a suite.
    ///
    pub fn get(&self, suite: &str) -> Option<&[BenchmarkRecord]> {
        self.suites
            .iter()
            .find(|(name, _)| name == suite)
            .map(|(_, records)| records.as_slice())
    }

    ///
    /// Returns the records of a suite, creating an empty suite at the end if absent.
    ///
    pub(crate) fn get_or_insert(&mut self, suite: &str) -> &mut Vec<BenchmarkRecord> {
        let index = match self.suites.iter().position(|(name, _)| name == suite) {
            Some(index) => index,
            None => {
                self.suites.push((suite.to_owned(), Vec::new()));
                self.suites.len() - 1
            }
        };
        &mut self.suites[index].1
    }

    ///
    /// Iterates over suites in stored order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BenchmarkRecord])> {
        self.suites
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    ///
    /// Returns the number of suites.
    ///
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    ///
    /// Whether there are no suites.
    ///
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

impl serde::Serialize for Entries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.suites.len()))?;
        for (name, records) in self.suites.iter() {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

///
/// Reads suites in document order.
///
struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Entries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of suite names to benchmark record arrays")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut suites: Vec<(String, Vec<BenchmarkRecord>)> = Vec::new();
        while let Some((name, records)) = access.next_entry::<String, Vec<BenchmarkRecord>>()? {
            if suites.iter().any(|(existing, _)| *existing == name) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate suite `{name}`"
                )));
            }
            suites.push((name, records));
        }
        Ok(Entries { suites })
    }
}

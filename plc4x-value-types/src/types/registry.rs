//! Process-wide lookup table for [`PlcValueType`]

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::PlcValueType;

static REGISTRY: OnceLock<ValueTypeRegistry> = OnceLock::new();

/// Read-only map from wire code to value type
///
/// Built once from [`PlcValueType::ALL`] on first use and shared by every
/// thread afterwards.
#[derive(Debug)]
pub struct ValueTypeRegistry {
    by_code: HashMap<u16, PlcValueType>,
    entries: Vec<PlcValueType>,
}

impl ValueTypeRegistry {
    pub fn global() -> &'static ValueTypeRegistry {
        REGISTRY.get_or_init(|| {
            let registry = Self::from_table(&PlcValueType::ALL);
            debug!("Value type registry initialized with {} entries", registry.len());
            registry
        })
    }

    fn from_table(table: &[PlcValueType]) -> Self {
        let mut by_code = HashMap::with_capacity(table.len());
        for value_type in table {
            let previous = by_code.insert(value_type.code(), *value_type);
            debug_assert!(
                previous.is_none(),
                "duplicate value type code {:#04x}",
                value_type.code()
            );
        }

        let mut entries = table.to_vec();
        entries.sort_by_key(|value_type| value_type.code());

        Self { by_code, entries }
    }

    /// Returns the value type registered under `code`
    pub fn lookup(&self, code: u16) -> Option<PlcValueType> {
        self.by_code.get(&code).copied()
    }

    pub fn is_defined(&self, code: u16) -> bool {
        self.lookup(code).is_some()
    }

    /// Returns the value type with the given protocol name, ignoring ASCII case
    pub fn lookup_name(&self, name: &str) -> Option<PlcValueType> {
        self.entries
            .iter()
            .find(|value_type| value_type.name().eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn describe(&self, value_type: &PlcValueType) -> String {
        value_type.describe()
    }

    /// Iterates the registered value types in code order
    pub fn iter(&self) -> impl Iterator<Item = PlcValueType> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::first_duplicate_code;
    use std::thread;

    #[test]
    fn test_global_is_built_once() {
        let first = ValueTypeRegistry::global();
        let second = ValueTypeRegistry::global();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), PlcValueType::ALL.len());
    }

    #[test]
    fn test_concurrent_readers_share_registry() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let registry = ValueTypeRegistry::global();
                    assert_eq!(registry.lookup(0x23), Some(PlcValueType::DINT));
                    registry as *const ValueTypeRegistry as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_iter_is_ordered_by_code() {
        let codes: Vec<u16> = ValueTypeRegistry::global().iter().map(|v| v.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(codes.first(), Some(&0x00));
        assert_eq!(codes.last(), Some(&0x71));
    }

    #[test]
    fn test_first_duplicate_code() {
        assert_eq!(first_duplicate_code(&PlcValueType::ALL), None);
        assert_eq!(first_duplicate_code(&[]), None);

        let table = [PlcValueType::BOOL, PlcValueType::DINT, PlcValueType::BOOL];
        assert_eq!(first_duplicate_code(&table), Some(0x01));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "duplicate value type code")]
    fn test_from_table_rejects_duplicates() {
        ValueTypeRegistry::from_table(&[PlcValueType::REAL, PlcValueType::REAL]);
    }

    #[test]
    fn test_registry_describe_matches_display() {
        let registry = ValueTypeRegistry::global();
        assert_eq!(
            registry.describe(&PlcValueType::LREAL),
            "PlcValueType(0x32, Float64)"
        );
    }
}

//! `serde` support for `OrderedList`.
//!
//! A list serializes as `{ default_order, entries }` with entries in
//! insertion order. Ascending order is rebuilt on deserialization, and
//! insertion order is what "first inserted" removals depend on, so it is
//! the one worth keeping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::list::OrderedList;
use crate::types::{OrderedEntry, DEFAULT_ORDER};

#[derive(Serialize)]
struct ListRef<'a, T> {
    default_order: i32,
    entries: Vec<&'a OrderedEntry<T>>,
}

#[derive(Deserialize)]
struct ListOwned<T> {
    #[serde(default = "default_order")]
    default_order: i32,
    entries: Vec<OrderedEntry<T>>,
}

fn default_order() -> i32 {
    DEFAULT_ORDER
}

impl<T: Serialize> Serialize for OrderedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ListRef {
            default_order: self.default_order(),
            entries: self.insertion_order(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let owned = ListOwned::<T>::deserialize(deserializer)?;
        let mut list = OrderedList::with_default_order(owned.default_order);
        list.extend(owned.entries);
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_insertion_order() {
        let mut list = OrderedList::with_default_order(7);
        list.add(2, "b").add(1, "a");

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "default_order": 7,
                "entries": [
                    { "order": 2, "element": "b" },
                    { "order": 1, "element": "a" },
                ],
            })
        );
    }

    #[test]
    fn test_deserialize_preserves_first_inserted_semantics() {
        let json = r#"{"default_order":5,"entries":[{"order":9,"element":"x"},{"order":1,"element":"x"}]}"#;
        let mut list: OrderedList<String> = serde_json::from_str(json).unwrap();

        assert_eq!(list.default_order(), 5);
        list.remove_element(&String::from("x"));
        assert_eq!(list.into_pairs(), vec![(1, String::from("x"))]);
    }

    #[test]
    fn test_deserialize_missing_default_order() {
        let list: OrderedList<u8> = serde_json::from_str(r#"{"entries":[]}"#).unwrap();

        assert!(list.is_empty());
        assert_eq!(list.default_order(), DEFAULT_ORDER);
    }
}

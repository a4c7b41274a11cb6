//! # Foods
//!
//! Per-dish nutrition records.
//!
//! A record keeps every non-key column of the source row, in column order, so the JSON
//! handed to clients reads the same way the CSV does.
use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// A single cell of a nutrition row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nutrient {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Nutrient {
    pub fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();

        if trimmed.is_empty() {
            return Nutrient::Missing;
        }

        if let Ok(int) = trimmed.parse::<i64>() {
            return Nutrient::Int(int);
        }

        match trimmed.parse::<f64>() {
            Ok(float) if float.is_finite() => Nutrient::Float(float),
            // keep the raw cell, not the trimmed one
            _ => Nutrient::Text(cell.to_string()),
        }
    }
}

/// Attribute name to value, in source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodRecord {
    fields: Vec<(String, Nutrient)>,
}

impl FoodRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. The loader makes column names unique before records are built.
    pub fn push(&mut self, attribute: impl Into<String>, value: Nutrient) {
        self.fields.push((attribute.into(), value));
    }

    pub fn get(&self, attribute: &str) -> Option<&Nutrient> {
        self.fields
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Nutrient)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, Nutrient)> for FoodRecord {
    fn from_iter<I: IntoIterator<Item = (K, Nutrient)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for FoodRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FoodRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = FoodRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of nutrition attributes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = FoodRecord::new();
                while let Some((name, value)) = access.next_entry::<String, Nutrient>()? {
                    record.push(name, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// A dish as the service returns it: `{ "<name>": { ...record } }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub record: &'a FoodRecord,
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, self.record)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!(Nutrient::parse("250"), Nutrient::Int(250));
        assert_eq!(Nutrient::parse(" 8 "), Nutrient::Int(8));
        assert_eq!(Nutrient::parse("3.5"), Nutrient::Float(3.5));
        assert_eq!(Nutrient::parse(""), Nutrient::Missing);
        assert_eq!(Nutrient::parse("   "), Nutrient::Missing);
        assert_eq!(Nutrient::parse("trace"), Nutrient::Text("trace".to_string()));
    }

    #[test]
    fn test_non_finite_is_text() {
        assert_eq!(Nutrient::parse("NaN"), Nutrient::Text("NaN".to_string()));
        assert_eq!(Nutrient::parse("inf"), Nutrient::Text("inf".to_string()));
    }

    #[test]
    fn test_record_keeps_column_order() {
        let record: FoodRecord = [
            ("Protein", Nutrient::Int(8)),
            ("Calories", Nutrient::Int(250)),
            ("Note", Nutrient::Missing),
        ]
        .into_iter()
        .collect();

        let rendered = serde_json::to_string(&record).unwrap();
        assert_eq!(rendered, r#"{"Protein":8,"Calories":250,"Note":null}"#);
    }

    #[test]
    fn test_entry_shape() {
        let record: FoodRecord = [("Calories", Nutrient::Float(71.5))].into_iter().collect();
        let entry = Entry {
            name: "Idli",
            record: &record,
        };

        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({ "Idli": { "Calories": 71.5 } })
        );
    }

    #[test]
    fn test_record_from_json() {
        let record: FoodRecord =
            serde_json::from_str(r#"{"Calories":250,"Fats (g)":1.5,"Tag":"veg","Iron":null}"#)
                .unwrap();

        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Calories", "Fats (g)", "Tag", "Iron"]);
        assert_eq!(record.get("Calories"), Some(&Nutrient::Int(250)));
        assert_eq!(record.get("Fats (g)"), Some(&Nutrient::Float(1.5)));
        assert_eq!(record.get("Iron"), Some(&Nutrient::Missing));
    }
}

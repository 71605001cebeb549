use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a backend record: used as a path segment, a row key and a cache-key part.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i32>()
            .map_err(|e| format!("Invalid i32: {}", e))
    }
}

/// Natural keys (GL class id, account code, unit abbreviation, location code).
impl AggregateId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            Err("Empty identifier".to_string())
        } else {
            Ok(s.to_string())
        }
    }
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_round_trip() {
        assert_eq!(i32::from_string(" 42 "), Ok(42));
        assert!(i32::from_string("abc").is_err());
        assert_eq!(7.as_string(), "7");
    }

    #[test]
    fn test_string_rejects_blank() {
        assert!(String::from_string("  ").is_err());
        assert_eq!(String::from_string("DEF"), Ok("DEF".to_string()));
    }
}

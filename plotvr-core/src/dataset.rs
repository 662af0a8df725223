//! Dataset container and JSON decoding

use crate::point::Sample;
use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::io::Read;
use std::ops::Index;

/// An immutable snapshot of samples plus a playback speed.
///
/// Wire format: `{"data": [[x, y, z, color], ...], "speed": 1.0}`. Unknown
/// fields are ignored, a missing or `null` `data` field yields an empty
/// dataset and a missing `speed` reads as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "data", default, deserialize_with = "null_as_empty")]
    samples: Vec<Sample>,
    #[serde(default)]
    speed: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Sample>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Sample>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset from samples and a speed
    pub fn from_samples(samples: Vec<Sample>, speed: f64) -> Self {
        Self { samples, speed }
    }

    /// Decode a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a dataset from a JSON byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the dataset has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in load order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Playback speed, advisory only
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Get an iterator over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ Data: samples: {}, speed={} }}", self.len(), self.speed)
    }
}

impl Index<usize> for Dataset {
    type Output = Sample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: Vec::from_iter(iter),
            speed: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_and_speed() {
        let dataset =
            Dataset::from_json_str(r#"{"data": [[0, 0, -5, 1], [1.5, 2, 3, 7]], "speed": 1.0}"#)
                .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0], Sample::new(0.0, 0.0, -5.0, 1.0));
        assert_eq!(dataset[1], Sample::new(1.5, 2.0, 3.0, 7.0));
        assert_eq!(dataset.speed(), 1.0);
    }

    #[test]
    fn test_missing_data_is_empty() {
        let dataset = Dataset::from_json_str(r#"{"speed": 2.5}"#).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.speed(), 2.5);

        let dataset = Dataset::from_json_str(r#"{"data": null}"#).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.speed(), 0.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dataset = Dataset::from_json_str(
            r#"{"title": "iris", "data": [[1, 2, 3, 0]], "axes": {"x": "len"}}"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Dataset::from_json_str(r#"{"data": [[1, 2, "three"]]"#).is_err());
        assert!(Dataset::from_json_str("not json").is_err());
    }

    #[test]
    fn test_display_summary() {
        let dataset = Dataset::from_samples(vec![Sample::default(); 3], 0.5);
        assert_eq!(dataset.to_string(), "{ Data: samples: 3, speed=0.5 }");
    }
}

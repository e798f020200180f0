use serde::{Deserialize, Serialize};

use super::PropertyType;
use super::patch::{lenient_text, pick};

/// Descriptive attributes of the property (wizard step 1).
///
/// Everything is free-form text except the type; only the saleable area is
/// required to move on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub name: String,
    pub address: String,
    pub building_age: String,
    pub property_type: PropertyType,
    /// Saleable area; gates navigation past step 1.
    pub area: String,
    pub floor: String,
    pub car_parks: String,
}

/// Partial update for [`PropertyDetails`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertyPatch {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub building_age: Option<String>,
    pub property_type: Option<PropertyType>,
    #[serde(deserialize_with = "lenient_text")]
    pub area: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub floor: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub car_parks: Option<String>,
}

impl PropertyDetails {
    /// Returns a copy with the provided patch fields applied.
    pub fn merged(
        &self,
        patch: &PropertyPatch,
    ) -> Self {
        Self {
            name: pick(&self.name, &patch.name),
            address: pick(&self.address, &patch.address),
            building_age: pick(&self.building_age, &patch.building_age),
            property_type: patch.property_type.unwrap_or(self.property_type),
            area: pick(&self.area, &patch.area),
            floor: pick(&self.floor, &patch.floor),
            car_parks: pick(&self.car_parks, &patch.car_parks),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merged_only_touches_provided_fields() {
        let details = PropertyDetails {
            name: "Tower A".to_string(),
            area: "1200".to_string(),
            ..Default::default()
        };
        let patch = PropertyPatch {
            floor: Some("3".to_string()),
            property_type: Some(PropertyType::Office),
            ..Default::default()
        };

        let merged = details.merged(&patch);

        assert_eq!(merged.name, "Tower A");
        assert_eq!(merged.area, "1200");
        assert_eq!(merged.floor, "3");
        assert_eq!(merged.property_type, PropertyType::Office);
    }

    #[test]
    fn merged_stores_non_numeric_text_as_is() {
        let patch = PropertyPatch {
            area: Some("about 1200 sq ft".to_string()),
            ..Default::default()
        };

        let merged = PropertyDetails::default().merged(&patch);

        assert_eq!(merged.area, "about 1200 sq ft");
    }
}

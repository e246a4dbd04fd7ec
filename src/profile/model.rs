use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type PrivacySettings = BTreeMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub id: String,
    pub full_name: String,
    pub bio: String,
    pub profile_picture: Option<String>,
    pub location: Location,
    pub birth_info: BirthInfo,
    pub astrology: Astrology,
    pub interests: Vec<String>,
    pub privacy_settings: PrivacySettings,
    pub is_online: bool,
    pub last_seen: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty() && self.country.is_empty()
    }

    /// `"city, region"` where region is the state, or the country when the
    /// state is unknown. Empty parts are left out.
    pub fn place_label(&self) -> Option<String> {
        let region = if self.state.is_empty() {
            &self.country
        } else {
            &self.state
        };

        let label = [self.city.as_str(), region.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        (!label.is_empty()).then_some(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfo {
    pub birthdate: Option<String>,
    pub birth_time: Option<String>,
    pub birth_location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Astrology {
    pub sun_sign: Option<String>,
    pub moon_sign: Option<String>,
    pub rising_sign: Option<String>,
}

impl Astrology {
    pub fn is_empty(&self) -> bool {
        self.sun_sign.is_none() && self.moon_sign.is_none() && self.rising_sign.is_none()
    }
}

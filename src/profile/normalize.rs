use serde_json::Value;

use super::coalesce::{first_non_empty, first_non_empty_or};
use super::model::{Astrology, BirthInfo, Location, NormalizedProfile, PrivacySettings};
use super::record::Record;

pub const DEFAULT_ID: &str = "me";
pub const DEFAULT_FULL_NAME: &str = "Me";
pub const DEFAULT_BIO: &str = "No bio yet.";
pub const DEFAULT_LAST_SEEN: &str = "recently";

pub const SHOW_BIO: &str = "showBio";
pub const SHOW_PROFILE_PICTURE: &str = "showProfilePicture";
pub const SHOW_LOCATION: &str = "showLocation";
pub const SHOW_BIRTHDATE: &str = "showBirthdate";
pub const SHOW_BIRTH_TIME: &str = "showBirthTime";
pub const SHOW_BIRTH_LOCATION: &str = "showBirthLocation";
pub const SHOW_ASTROLOGY: &str = "showAstrology";
pub const SHOW_INTERESTS: &str = "showInterests";

type TextCandidate<'a> = &'a dyn Fn() -> Option<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub default_bio: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_bio: DEFAULT_BIO.to_string(),
        }
    }
}

pub fn normalize(user: Option<&Value>, chart: Option<&Value>) -> Option<NormalizedProfile> {
    normalize_with(user, chart, &NormalizeOptions::default())
}

/// `None` only when the user record is missing or JSON `null`.
pub fn normalize_with(
    user: Option<&Value>,
    chart: Option<&Value>,
    options: &NormalizeOptions,
) -> Option<NormalizedProfile> {
    let user = user.filter(|value| !value.is_null())?;
    let u = Record::new(Some(user));
    let c = Record::new(chart);

    let id = first_non_empty_or::<String>(
        &[&|| u.scalar_text("id"), &|| u.scalar_text("email")],
        DEFAULT_ID.to_string(),
    );

    let full_name = first_non_empty_or::<String>(
        &[&|| u.text("fullName"), &|| u.text("name"), &|| joined_name(&u)],
        DEFAULT_FULL_NAME.to_string(),
    );

    let explicit_bio = first_text(&[
        &|| u.text("bio"),
        &|| u.text("about"),
        &|| u.text("aboutMe"),
    ]);

    let profile_picture = first_text(&[
        &|| u.text("profilePicture"),
        &|| u.text("avatar"),
        &|| u.text("avatarUrl"),
        &|| u.text("photoURL"),
        &|| u.text("photoUrl"),
        &|| u.text("picture"),
        &|| u.text("image"),
    ]);

    let location = Location {
        city: top_then_nested(&u, "location", &["city"]),
        state: top_then_nested(&u, "location", &["state", "region"]),
        country: top_then_nested(&u, "location", &["country"]),
    };

    let birth_info = BirthInfo {
        birthdate: first_text(&[
            &|| u.text("birthdate"),
            &|| u.text("birthDate"),
            &|| u.text("birthday"),
            &|| u.text("dob"),
            &|| u.text("dateOfBirth"),
        ]),
        birth_time: first_text(&[
            &|| u.text("birthTime"),
            &|| u.text("timeOfBirth"),
            &|| u.text("birth_time"),
        ]),
        birth_location: first_text(&[
            &|| u.text("birthLocation"),
            &|| u.text("birthPlace"),
            &|| u.text("placeOfBirth"),
            &|| location.place_label(),
        ]),
    };

    let astrology = Astrology {
        sun_sign: first_text(&[&|| sign(&u, &c, "sun"), &|| u.text("zodiacSign")]),
        moon_sign: sign(&u, &c, "moon"),
        rising_sign: first_text(&[&|| sign(&u, &c, "rising"), &|| c.text("ascendant")]),
    };

    let interests = u.string_list("interests").unwrap_or_default();

    let mut privacy_settings = PrivacySettings::new();
    for (flag, shown) in [
        (SHOW_BIO, explicit_bio.is_some()),
        (SHOW_PROFILE_PICTURE, profile_picture.is_some()),
        (SHOW_LOCATION, !location.is_empty()),
        (SHOW_BIRTHDATE, birth_info.birthdate.is_some()),
        (SHOW_BIRTH_TIME, birth_info.birth_time.is_some()),
        (SHOW_BIRTH_LOCATION, birth_info.birth_location.is_some()),
        (SHOW_ASTROLOGY, !astrology.is_empty()),
        (SHOW_INTERESTS, !interests.is_empty()),
    ] {
        privacy_settings.insert(flag.to_string(), shown);
    }
    // Shallow merge: explicit booleans replace computed flags one key at a time.
    privacy_settings.extend(u.bool_map("privacySettings"));

    Some(NormalizedProfile {
        id,
        full_name,
        bio: explicit_bio.unwrap_or_else(|| options.default_bio.clone()),
        profile_picture,
        location,
        birth_info,
        astrology,
        interests,
        privacy_settings,
        is_online: true,
        last_seen: DEFAULT_LAST_SEEN.to_string(),
    })
}

fn first_text(candidates: &[TextCandidate<'_>]) -> Option<String> {
    first_non_empty(candidates)
}

fn joined_name(u: &Record<'_>) -> Option<String> {
    let parts = [u.text("firstName"), u.text("lastName")];
    let joined = parts.into_iter().flatten().collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Tries every key at the top level first, then under `parent`.
fn top_then_nested(u: &Record<'_>, parent: &str, keys: &[&str]) -> String {
    let nested = u.child(parent);
    keys.iter()
        .find_map(|key| u.text(key))
        .or_else(|| keys.iter().find_map(|key| nested.text(key)))
        .unwrap_or_default()
}

// chart shapes seen: `sunSign`, `sun: "Leo"`, `sun: { sign: "Leo" }`
fn sign(u: &Record<'_>, c: &Record<'_>, body: &str) -> Option<String> {
    let key = format!("{body}Sign");
    first_text(&[
        &|| u.text(&key),
        &|| u.nested_text("astrology", &key),
        &|| c.text(&key),
        &|| c.text(body),
        &|| c.nested_text(body, "sign"),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn profile(user: Value) -> NormalizedProfile {
        normalize(Some(&user), None).expect("profile")
    }

    #[test]
    fn numeric_id_is_rendered_as_text() {
        assert_eq!(profile(json!({ "id": 42 })).id, "42");
    }

    #[test]
    fn email_stands_in_for_missing_id() {
        let p = profile(json!({ "id": "  ", "email": "ada@example.com" }));
        assert_eq!(p.id, "ada@example.com");
    }

    #[test]
    fn partial_name_parts_still_join() {
        assert_eq!(profile(json!({ "lastName": "Lovelace" })).full_name, "Lovelace");
    }

    #[test]
    fn custom_default_bio_is_used() {
        let options = NormalizeOptions {
            default_bio: "Ask me about stars".to_string(),
        };
        let p = normalize_with(Some(&json!({})), None, &options).expect("profile");
        assert_eq!(p.bio, "Ask me about stars");
        assert_eq!(p.privacy_settings.get(SHOW_BIO), Some(&false));
    }

    #[test]
    fn region_stands_in_for_state() {
        let p = profile(json!({ "location": { "region": "Bavaria", "country": "Germany" } }));
        assert_eq!(p.location.state, "Bavaria");
        assert_eq!(p.location.country, "Germany");
    }

    #[test]
    fn explicit_birth_location_wins_over_synthesis() {
        let p = profile(json!({ "birthPlace": "Marylebone", "city": "London" }));
        assert_eq!(p.birth_info.birth_location.as_deref(), Some("Marylebone"));
    }

    #[test]
    fn birth_location_is_synthesized_from_location() {
        let p = profile(json!({ "city": "London", "location": { "country": "UK" } }));
        assert_eq!(p.birth_info.birth_location.as_deref(), Some("London, UK"));
        assert_eq!(p.privacy_settings.get(SHOW_BIRTH_LOCATION), Some(&true));
    }

    #[test]
    fn chart_shapes_fill_astrology() {
        let chart = json!({
            "sun": "Sagittarius",
            "moon": { "sign": "Cancer" },
            "ascendant": "Libra",
        });
        let p = normalize(Some(&json!({})), Some(&chart)).expect("profile");
        assert_eq!(
            p.astrology,
            Astrology {
                sun_sign: Some("Sagittarius".to_string()),
                moon_sign: Some("Cancer".to_string()),
                rising_sign: Some("Libra".to_string()),
            }
        );
        assert_eq!(p.privacy_settings.get(SHOW_ASTROLOGY), Some(&true));
    }

    #[test]
    fn user_signs_beat_chart_signs() {
        let user = json!({ "astrology": { "moonSign": "Pisces" }, "sunSign": "Leo" });
        let chart = json!({ "sunSign": "Aries", "moonSign": "Virgo", "risingSign": "Gemini" });
        let p = normalize(Some(&user), Some(&chart)).expect("profile");
        assert_eq!(p.astrology.sun_sign.as_deref(), Some("Leo"));
        assert_eq!(p.astrology.moon_sign.as_deref(), Some("Pisces"));
        assert_eq!(p.astrology.rising_sign.as_deref(), Some("Gemini"));
    }

    #[test]
    fn unknown_explicit_privacy_keys_are_kept() {
        let p = profile(json!({ "privacySettings": { "showEmail": true, "showBio": "no" } }));
        assert_eq!(p.privacy_settings.get("showEmail"), Some(&true));
        assert_eq!(p.privacy_settings.get(SHOW_BIO), Some(&false));
    }

    #[test]
    fn placeholders_are_constant() {
        let p = profile(json!({ "isOnline": false, "lastSeen": "yesterday" }));
        assert!(p.is_online);
        assert_eq!(p.last_seen, "recently");
    }
}

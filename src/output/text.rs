use crate::error::AppResult;
use crate::profile::NormalizedProfile;

pub fn print_lines<I, S>(lines: I) -> AppResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
    Ok(())
}

pub fn profile_lines(profile: &NormalizedProfile) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", profile.full_name, profile.id),
        format!("   bio: {}", profile.bio),
    ];

    if let Some(picture) = &profile.profile_picture {
        lines.push(format!("   picture: {picture}"));
    }
    if let Some(place) = profile.location.place_label() {
        lines.push(format!("   location: {place}"));
    }

    let birth = &profile.birth_info;
    let birth_parts = [&birth.birthdate, &birth.birth_time, &birth.birth_location]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !birth_parts.is_empty() {
        lines.push(format!("   born: {}", birth_parts.join(" | ")));
    }

    let astro = &profile.astrology;
    if !astro.is_empty() {
        let sign = |value: &Option<String>| value.as_deref().unwrap_or("?").to_string();
        lines.push(format!(
            "   sun: {}  moon: {}  rising: {}",
            sign(&astro.sun_sign),
            sign(&astro.moon_sign),
            sign(&astro.rising_sign)
        ));
    }

    if !profile.interests.is_empty() {
        lines.push(format!("   interests: {}", profile.interests.join(", ")));
    }

    let hidden = profile
        .privacy_settings
        .iter()
        .filter(|(_, shown)| !**shown)
        .map(|(flag, _)| flag.as_str())
        .collect::<Vec<_>>();
    if !hidden.is_empty() {
        lines.push(format!("   hidden: {}", hidden.join(", ")));
    }

    lines.push(format!(
        "   status: {} (last seen {})",
        if profile.is_online { "online" } else { "offline" },
        profile.last_seen
    ));
    lines
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::profile::normalize;

    #[test]
    fn renders_minimal_profile() {
        let profile = normalize(Some(&json!({})), None).expect("profile");
        let lines = profile_lines(&profile);

        assert_eq!(lines[0], "Me (me)");
        assert!(lines.iter().any(|line| line.contains("hidden: showAstrology")));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("   status: online (last seen recently)")
        );
    }

    #[test]
    fn renders_birth_and_signs() {
        let user = json!({
            "fullName": "Ada Lovelace",
            "birthdate": "1815-12-10",
            "city": "London",
            "sunSign": "Sagittarius",
            "interests": ["math", "poetry"],
        });
        let profile = normalize(Some(&user), None).expect("profile");
        let lines = profile_lines(&profile);

        assert!(lines.contains(&"   born: 1815-12-10 | London".to_string()));
        assert!(lines.contains(&"   sun: Sagittarius  moon: ?  rising: ?".to_string()));
        assert!(lines.contains(&"   interests: math, poetry".to_string()));
    }
}

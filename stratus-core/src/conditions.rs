//! Mapping from OpenWeatherMap icon codes to the bundled condition art.
//!
//! The provider classifies current conditions with a short code like `"10d"`:
//! two digits for the condition group, one letter for day/night. Day and
//! night variants share the same art here.

/// The finite set of condition icons the result panel can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionIcon {
    Clear,
    /// Startup default, and the fallback for mist/fog codes.
    #[default]
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl ConditionIcon {
    /// Resolve a provider icon code. Unrecognized codes fall back to `Clear`.
    pub fn for_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => ConditionIcon::Clear,
            "02d" | "02n" => ConditionIcon::Cloud,
            "03d" | "03n" | "04d" | "04n" => ConditionIcon::Drizzle,
            "09d" | "09n" | "10d" | "10n" | "11d" | "11n" => ConditionIcon::Rain,
            "13d" | "13n" => ConditionIcon::Snow,
            "50d" | "50n" => ConditionIcon::Cloud,
            _ => ConditionIcon::Clear,
        }
    }

    /// Three-line art rendered above the temperature.
    pub fn art(&self) -> [&'static str; 3] {
        match self {
            ConditionIcon::Clear => [r"   \ | /   ", r"  - (*) -  ", r"   / | \   "],
            ConditionIcon::Cloud => [r"    .--.   ", r" .-(    ). ", r"(__.__)__) "],
            ConditionIcon::Drizzle => [r"  .-(  ).  ", r" (__.__)__)", r"   ' ' '   "],
            ConditionIcon::Rain => [r"  .-(  ).  ", r" (__.__)__)", r"  / / / /  "],
            ConditionIcon::Snow => [r"  .-(  ).  ", r" (__.__)__)", r"  * * * *  "],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_night_variants_share_art() {
        for group in ["01", "02", "03", "04", "09", "10", "11", "13", "50"] {
            let day = ConditionIcon::for_code(&format!("{group}d"));
            let night = ConditionIcon::for_code(&format!("{group}n"));
            assert_eq!(day, night, "group {group}");
        }
    }

    #[test]
    fn rain_group_covers_showers_and_thunder() {
        assert_eq!(ConditionIcon::for_code("09d"), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::for_code("10n"), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::for_code("10d"), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::for_code("11n"), ConditionIcon::Rain);
    }

    #[test]
    fn unrecognized_codes_fall_back_to_clear() {
        assert_eq!(ConditionIcon::for_code("99x"), ConditionIcon::Clear);
        assert_eq!(ConditionIcon::for_code(""), ConditionIcon::Clear);
    }

    #[test]
    fn startup_default_is_cloud() {
        assert_eq!(ConditionIcon::default(), ConditionIcon::Cloud);
    }
}

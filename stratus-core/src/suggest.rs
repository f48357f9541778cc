//! City suggestions for the search box.
//!
//! Suggestions come from a small static list of popular cities, not from a
//! network call: the panel must update on every keystroke with zero latency.
//! Matching is a case-insensitive substring test against the city name or its
//! country, results keep the list's original order, and at most
//! [`MAX_SUGGESTIONS`] entries are shown.

/// A (city, country) pair from the static reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityEntry {
    pub name: &'static str,
    pub country: &'static str,
}

impl CityEntry {
    const fn new(name: &'static str, country: &'static str) -> Self {
        Self { name, country }
    }

    fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.country.to_lowercase().contains(needle_lower)
    }
}

pub const POPULAR_CITIES: &[CityEntry] = &[
    CityEntry::new("London", "United Kingdom"),
    CityEntry::new("New York", "United States"),
    CityEntry::new("Tokyo", "Japan"),
    CityEntry::new("Paris", "France"),
    CityEntry::new("Sydney", "Australia"),
    CityEntry::new("Dubai", "United Arab Emirates"),
    CityEntry::new("Singapore", "Singapore"),
    CityEntry::new("Mumbai", "India"),
    CityEntry::new("Berlin", "Germany"),
    CityEntry::new("Toronto", "Canada"),
    CityEntry::new("Barcelona", "Spain"),
    CityEntry::new("Rome", "Italy"),
    CityEntry::new("Amsterdam", "Netherlands"),
    CityEntry::new("Bangkok", "Thailand"),
    CityEntry::new("Cairo", "Egypt"),
    CityEntry::new("Moscow", "Russia"),
    CityEntry::new("Beijing", "China"),
    CityEntry::new("Seoul", "South Korea"),
    CityEntry::new("Mexico City", "Mexico"),
    CityEntry::new("Buenos Aires", "Argentina"),
    CityEntry::new("Lagos", "Nigeria"),
    CityEntry::new("Istanbul", "Turkey"),
    CityEntry::new("Jakarta", "Indonesia"),
    CityEntry::new("Manila", "Philippines"),
    CityEntry::new("Karachi", "Pakistan"),
];

pub const MAX_SUGGESTIONS: usize = 8;

/// Filter the static list for `input`. Empty input yields no matches.
pub fn filter_cities(input: &str) -> Vec<CityEntry> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    POPULAR_CITIES
        .iter()
        .filter(|city| city.matches(&needle))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

/// Transient state of the suggestion panel: the current match set and the
/// keyboard highlight. `highlighted == None` means nothing is selected, the
/// equivalent of the classic `-1` index.
///
/// The match set survives hiding the panel, so regaining focus can re-show
/// the last filter pass. It is discarded when the input is cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionState {
    matches: Vec<CityEntry>,
    highlighted: Option<usize>,
    visible: bool,
}

impl SuggestionState {
    /// Recompute matches for the current input text. Non-empty input shows
    /// the panel and resets the highlight; empty input clears everything.
    pub fn refilter(&mut self, input: &str) {
        if input.is_empty() {
            self.clear();
        } else {
            self.matches = filter_cities(input);
            self.highlighted = None;
            self.visible = true;
        }
    }

    /// Hide the panel and drop the match set (input was cleared).
    pub fn clear(&mut self) {
        self.matches.clear();
        self.highlighted = None;
        self.visible = false;
    }

    /// Hide the panel but keep the matches for a later re-show.
    pub fn hide(&mut self) {
        self.highlighted = None;
        self.visible = false;
    }

    /// Re-show the panel if the last filter pass still has matches.
    pub fn reshow(&mut self) {
        if !self.matches.is_empty() {
            self.visible = true;
        }
    }

    /// Advance the highlight, clamped to the last entry. No wraparound.
    pub fn highlight_next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the highlight up; from the first entry it deselects entirely.
    pub fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn highlighted_city(&self) -> Option<CityEntry> {
        self.highlighted.and_then(|i| self.matches.get(i).copied())
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn matches(&self) -> &[CityEntry] {
        &self.matches
    }

    /// Whether the panel should currently be drawn.
    pub fn is_visible(&self) -> bool {
        self.visible && !self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &SuggestionState) -> Vec<&'static str> {
        state.matches().iter().map(|c| c.name).collect()
    }

    #[test]
    fn filter_is_case_insensitive_on_name_and_country() {
        let by_name = filter_cities("lon");
        assert_eq!(by_name, filter_cities("LON"));
        assert!(by_name.iter().any(|c| c.name == "London"));
        assert!(by_name.iter().any(|c| c.name == "Barcelona"));

        let by_country = filter_cities("japan");
        assert_eq!(by_country.len(), 1);
        assert_eq!(by_country[0].name, "Tokyo");
    }

    #[test]
    fn filter_keeps_source_order_and_caps_at_eight() {
        // "an" hits more than eight entries across names and countries.
        let matched = filter_cities("an");
        assert_eq!(matched.len(), MAX_SUGGESTIONS);

        let mut source = POPULAR_CITIES.iter();
        for city in &matched {
            assert!(
                source.any(|c| c == city),
                "{} out of source order",
                city.name
            );
        }
    }

    #[test]
    fn filter_matches_exactly_the_containing_entries() {
        let needle = "united";
        let expected: Vec<CityEntry> = POPULAR_CITIES
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(needle) || c.country.to_lowercase().contains(needle)
            })
            .take(MAX_SUGGESTIONS)
            .copied()
            .collect();
        assert_eq!(filter_cities(needle), expected);
        // United Kingdom, United States, United Arab Emirates
        assert_eq!(expected.len(), 3);
    }

    #[test]
    fn empty_input_clears_matches_and_hides() {
        let mut state = SuggestionState::default();
        state.refilter("tok");
        assert!(state.is_visible());

        state.refilter("");
        assert!(!state.is_visible());
        assert!(state.matches().is_empty());
    }

    #[test]
    fn refilter_resets_highlight() {
        let mut state = SuggestionState::default();
        state.refilter("o");
        state.highlight_next();
        assert_eq!(state.highlighted_index(), Some(0));

        state.refilter("on");
        assert_eq!(state.highlighted_index(), None);
    }

    #[test]
    fn highlight_next_clamps_at_last_entry() {
        let mut state = SuggestionState::default();
        state.refilter("japan");
        assert_eq!(state.matches().len(), 1);

        for _ in 0..5 {
            state.highlight_next();
        }
        assert_eq!(state.highlighted_index(), Some(0));
    }

    #[test]
    fn pressing_down_n_times_reaches_min_of_n_minus_one_and_last() {
        let mut state = SuggestionState::default();
        state.refilter("an");
        let last = state.matches().len() - 1;

        for n in 1..=state.matches().len() + 3 {
            let mut probe = state.clone();
            for _ in 0..n {
                probe.highlight_next();
            }
            assert_eq!(probe.highlighted_index(), Some((n - 1).min(last)));
        }
    }

    #[test]
    fn highlight_prev_from_first_deselects() {
        let mut state = SuggestionState::default();
        state.refilter("an");
        state.highlight_next();
        assert_eq!(state.highlighted_index(), Some(0));

        state.highlight_prev();
        assert_eq!(state.highlighted_index(), None);

        // and stays deselected
        state.highlight_prev();
        assert_eq!(state.highlighted_index(), None);
    }

    #[test]
    fn hide_keeps_matches_for_reshow() {
        let mut state = SuggestionState::default();
        state.refilter("lon");
        let before = names(&state);

        state.hide();
        assert!(!state.is_visible());

        state.reshow();
        assert!(state.is_visible());
        assert_eq!(names(&state), before);
    }

    #[test]
    fn reshow_with_no_matches_stays_hidden() {
        let mut state = SuggestionState::default();
        state.refilter("zzzz");
        assert!(state.matches().is_empty());

        state.reshow();
        assert!(!state.is_visible());
    }
}

//! Expand/collapse state for a model card description.

use crate::catalog::ModelInfo;
use crate::text::truncate_chars;

/// Descriptions longer than this many characters get a "Read more" control.
pub const TRUNCATION_LIMIT: usize = 70;

/// The inline control rendered after the description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionControl {
    ReadMore,
    ShowLess,
    /// Short descriptions link straight to the licenses instead
    ViewLicenses,
}

impl DescriptionControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReadMore => "Read more",
            Self::ShowLess => "Show less",
            Self::ViewLicenses => "View licenses",
        }
    }
}

/// What the description block shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionView<'a> {
    pub text: &'a str,
    /// The text was cut; the widget draws an ellipsis after it
    pub truncated: bool,
    pub control: DescriptionControl,
    /// Secondary "View Licenses" button below the text
    pub show_license_button: bool,
}

/// Local state of one card's description block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptionState {
    expanded: bool,
}

impl DescriptionState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn view<'a>(&self, info: &'a ModelInfo) -> DescriptionView<'a> {
        let description = info.description.as_str();
        let is_long = description.chars().count() > TRUNCATION_LIMIT;

        let (text, truncated, control) = match (is_long, self.expanded) {
            (false, _) => (description, false, DescriptionControl::ViewLicenses),
            (true, true) => (description, false, DescriptionControl::ShowLess),
            (true, false) => (
                truncate_chars(description, TRUNCATION_LIMIT),
                true,
                DescriptionControl::ReadMore,
            ),
        };

        DescriptionView {
            text,
            truncated,
            control,
            show_license_button: self.expanded && !info.licenses.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::License;

    fn model(description: &str, licenses: usize) -> ModelInfo {
        ModelInfo {
            id: "m".into(),
            name: "M".into(),
            size: "1GB".into(),
            description: description.into(),
            licenses: (0..licenses)
                .map(|i| License { link: format!("https://license/{}", i) })
                .collect(),
            tag: None,
        }
    }

    #[test]
    fn test_short_description_offers_licenses() {
        let info = model(&"a".repeat(TRUNCATION_LIMIT), 1);
        let view = DescriptionState::default().view(&info);
        assert_eq!(view.text.len(), TRUNCATION_LIMIT);
        assert!(!view.truncated);
        assert_eq!(view.control, DescriptionControl::ViewLicenses);
        assert!(!view.show_license_button);
    }

    #[test]
    fn test_long_description_collapsed_shows_first_70_chars() {
        let description: String = ('a'..='z').cycle().take(120).collect();
        let info = model(&description, 1);
        let view = DescriptionState::default().view(&info);
        assert_eq!(view.text, &description[..TRUNCATION_LIMIT]);
        assert!(view.truncated);
        assert_eq!(view.control, DescriptionControl::ReadMore);
    }

    #[test]
    fn test_expand_collapse_round_trip_is_idempotent() {
        let description = "x".repeat(71);
        let info = model(&description, 2);
        let mut state = DescriptionState::default();
        let collapsed = state.view(&info).text.to_string();

        state.toggle();
        let expanded = state.view(&info);
        assert_eq!(expanded.text, description);
        assert_eq!(expanded.control, DescriptionControl::ShowLess);
        assert!(expanded.show_license_button);

        state.toggle();
        assert_eq!(state.view(&info).text, collapsed);
        state.toggle();
        state.toggle();
        assert_eq!(state.view(&info).text, collapsed);
    }

    #[test]
    fn test_expanded_without_licenses_hides_license_button() {
        let info = model(&"y".repeat(100), 0);
        let mut state = DescriptionState::default();
        state.toggle();
        assert!(!state.view(&info).show_license_button);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 70 two-byte characters is still a short description
        let info = model(&"é".repeat(TRUNCATION_LIMIT), 0);
        assert_eq!(
            DescriptionState::default().view(&info).control,
            DescriptionControl::ViewLicenses
        );
    }
}

use super::{hackathon_id::HackathonId, non_empty};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};
use strum::EnumIter;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

fn one() -> u32 {
    1
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    #[serde(rename = "_id")]
    pub id: HackathonId,
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub location: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub mode: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_deadline: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "one")]
    pub min_team_size: u32,
    #[serde(default = "one")]
    pub max_team_size: u32,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub rules: Option<String>,
    #[serde(default)]
    pub prizes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Organizer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Hackathon {
    pub fn status(&self, now: DateTime<Utc>) -> HackathonStatus {
        if now > self.end_date {
            HackathonStatus::Ended
        } else if now >= self.start_date {
            HackathonStatus::InProgress
        } else {
            HackathonStatus::Upcoming
        }
    }

    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        now < self.registration_deadline
    }

    /// Whole days until the registration deadline, rounded up. Zero or negative once it passed.
    pub fn days_left_to_register(&self, now: DateTime<Utc>) -> i64 {
        let millis = self
            .registration_deadline
            .signed_duration_since(now)
            .num_milliseconds();
        let days = millis.div_euclid(MILLIS_PER_DAY);
        if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
            days
        } else {
            days + 1
        }
    }

    /// Text shown on the listing card, only while the event has not started.
    pub fn registration_hint(&self, now: DateTime<Utc>) -> Option<String> {
        if self.status(now) != HackathonStatus::Upcoming {
            return None;
        }
        let days = self.days_left_to_register(now);
        if days <= 0 {
            return None;
        }
        let s = if days == 1 { "" } else { "s" };
        Some(format!("{days} day{s} left to register"))
    }

    pub fn registration_panel(&self, now: DateTime<Utc>) -> RegistrationPanel {
        if self.status(now) == HackathonStatus::Ended {
            RegistrationPanel::Ended
        } else if !self.is_registration_open(now) {
            RegistrationPanel::Closed
        } else {
            RegistrationPanel::Open
        }
    }

    pub fn rules(&self) -> Option<&str> {
        non_empty(self.rules.as_ref())
    }

    pub fn prizes(&self) -> Option<&str> {
        non_empty(self.prizes.as_ref())
    }

    pub fn organizer_email(&self) -> Option<&str> {
        self.organizer
            .as_ref()
            .and_then(|organizer| non_empty(organizer.email.as_ref()))
    }

    pub fn team_size_label(&self) -> String {
        format!("{} - {} members", self.min_team_size, self.max_team_size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HackathonStatus {
    Upcoming,
    InProgress,
    Ended,
}

impl HackathonStatus {
    pub fn label(self) -> &'static str {
        match self {
            HackathonStatus::Upcoming => "Upcoming",
            HackathonStatus::InProgress => "In Progress",
            HackathonStatus::Ended => "Ended",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HackathonStatus::Upcoming => "status-upcoming",
            HackathonStatus::InProgress => "status-in-progress",
            HackathonStatus::Ended => "status-ended",
        }
    }
}

/// Listing filter on the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, strum::Display)]
pub enum HackathonFilter {
    #[default]
    All,
    Upcoming,
    Ongoing,
    Past,
}

impl HackathonFilter {
    pub fn matches(self, hackathon: &Hackathon, now: DateTime<Utc>) -> bool {
        match self {
            HackathonFilter::All => true,
            HackathonFilter::Upcoming => hackathon.start_date > now,
            HackathonFilter::Ongoing => hackathon.start_date <= now && hackathon.end_date >= now,
            HackathonFilter::Past => hackathon.end_date < now,
        }
    }

    pub fn apply<'a>(self, hackathons: &'a [Hackathon], now: DateTime<Utc>) -> Vec<&'a Hackathon> {
        hackathons
            .iter()
            .filter(|hackathon| self.matches(hackathon, now))
            .collect()
    }
}

/// What the registration section of the detail page offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationPanel {
    Open,
    Closed,
    Ended,
}

/// Leading tags plus the count of the ones left out.
#[derive(Debug, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> TagPreview<'a> {
    pub fn new(tags: &'a [String], limit: usize) -> Self {
        let cut = tags.len().min(limit);
        TagPreview {
            shown: &tags[..cut],
            hidden: tags.len() - cut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    // Registration closes on the 5th, event runs from the 10th to the 12th.
    fn hackathon() -> Hackathon {
        serde_json::from_value(serde_json::json!({
            "_id": "h1",
            "title": "Rust Rumble",
            "description": "Build something fast",
            "location": "Prague",
            "mode": "Hybrid",
            "startDate": "2025-03-10T09:00:00.000Z",
            "endDate": "2025-03-12T18:00:00.000Z",
            "registrationDeadline": "2025-03-05T00:00:00.000Z",
            "tags": ["rust", "wasm", "web", "cli", "embedded", "games"],
            "minTeamSize": 2,
            "maxTeamSize": 4,
            "organizer": { "name": "Ferris", "email": "ferris@example.com" },
            "rules": "",
        }))
        .unwrap()
    }

    #[test]
    fn decodes_backend_document() {
        let hackathon = hackathon();
        assert_eq!(HackathonId::new("h1"), hackathon.id);
        assert_eq!(6, hackathon.tags.len());
        assert_eq!(Some("ferris@example.com"), hackathon.organizer_email());
        assert_eq!(None, hackathon.rules(), "empty rules count as missing");
        assert_eq!(None, hackathon.prizes());
        assert_eq!("2 - 4 members", hackathon.team_size_label());
    }

    #[test]
    fn null_optional_fields_fall_back_to_defaults() {
        let hackathon: Hackathon = serde_json::from_value(serde_json::json!({
            "_id": "h2",
            "title": "Minimal",
            "description": null,
            "startDate": "2025-03-10T09:00:00Z",
            "endDate": "2025-03-12T18:00:00Z",
            "registrationDeadline": "2025-03-05T00:00:00Z",
            "tags": null,
        }))
        .unwrap();
        assert!(hackathon.tags.is_empty());
        assert!(hackathon.description.is_empty());
        assert_eq!(1, hackathon.min_team_size);
        assert_eq!(None, hackathon.organizer);
    }

    #[rstest]
    #[case(at(1, 0), HackathonStatus::Upcoming)]
    #[case(at(10, 9), HackathonStatus::InProgress)]
    #[case(at(12, 18), HackathonStatus::InProgress)]
    #[case(at(12, 19), HackathonStatus::Ended)]
    fn status_follows_event_dates(#[case] now: DateTime<Utc>, #[case] expected: HackathonStatus) {
        assert_eq!(expected, hackathon().status(now));
    }

    #[rstest]
    #[case(HackathonFilter::All, at(11, 0), true)]
    #[case(HackathonFilter::Upcoming, at(10, 8), true)]
    #[case(HackathonFilter::Upcoming, at(10, 9), false)]
    #[case(HackathonFilter::Ongoing, at(10, 9), true)]
    #[case(HackathonFilter::Ongoing, at(12, 18), true)]
    #[case(HackathonFilter::Ongoing, at(12, 19), false)]
    #[case(HackathonFilter::Past, at(12, 18), false)]
    #[case(HackathonFilter::Past, at(13, 0), true)]
    fn filter_matches(
        #[case] filter: HackathonFilter,
        #[case] now: DateTime<Utc>,
        #[case] expected: bool,
    ) {
        assert_eq!(expected, filter.matches(&hackathon(), now));
    }

    #[test]
    fn filters_are_listed_in_button_order() {
        let labels: Vec<_> = HackathonFilter::iter().map(|f| f.to_string()).collect();
        assert_eq!(vec!["All", "Upcoming", "Ongoing", "Past"], labels);
    }

    #[test]
    fn apply_keeps_only_matching() {
        let mut past = hackathon();
        past.id = HackathonId::new("old");
        past.start_date = at(1, 0);
        past.end_date = at(2, 0);
        let all = vec![hackathon(), past];
        let found = HackathonFilter::Past.apply(&all, at(4, 0));
        assert_eq!(1, found.len());
        assert_eq!("old", found[0].id.id);
    }

    #[rstest]
    #[case(at(4, 0), 1)]
    #[case(at(3, 23), 2)]
    #[case(at(3, 0), 2)]
    #[case(at(5, 0), 0)]
    #[case(at(5, 12), 0)]
    #[case(at(6, 12), -1)]
    fn days_left_rounds_up(#[case] now: DateTime<Utc>, #[case] expected: i64) {
        assert_eq!(expected, hackathon().days_left_to_register(now));
    }

    #[test]
    fn registration_hint_wording() {
        let hackathon = hackathon();
        assert_eq!(
            Some("1 day left to register".to_string()),
            hackathon.registration_hint(at(4, 0))
        );
        assert_eq!(
            Some("4 days left to register".to_string()),
            hackathon.registration_hint(at(1, 0))
        );
        // Deadline passed but event not started yet.
        assert_eq!(None, hackathon.registration_hint(at(7, 0)));
        assert_eq!(None, hackathon.registration_hint(at(11, 0)));
    }

    #[rstest]
    #[case(at(4, 23), RegistrationPanel::Open)]
    #[case(at(5, 0), RegistrationPanel::Closed)]
    #[case(at(11, 0), RegistrationPanel::Closed)]
    #[case(at(13, 0), RegistrationPanel::Ended)]
    fn registration_panel(#[case] now: DateTime<Utc>, #[case] expected: RegistrationPanel) {
        assert_eq!(expected, hackathon().registration_panel(now));
    }

    #[test]
    fn tag_preview_cuts_at_limit() {
        let hackathon = hackathon();
        let preview = TagPreview::new(&hackathon.tags, 4);
        assert_eq!(4, preview.shown.len());
        assert_eq!(2, preview.hidden);

        let preview = TagPreview::new(&hackathon.tags[..3], 5);
        assert_eq!(3, preview.shown.len());
        assert_eq!(0, preview.hidden);
    }
}

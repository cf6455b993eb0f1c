//! Everything the site says, loaded once from `content/site.json`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::engine::countdown::Countdown;
use crate::error::SiteError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Brain,
    Lock,
    Chip,
    Globe,
    Cpu,
    Shield,
    Database,
    Smartphone,
    Zap,
    Lightbulb,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Lock => "🔒",
            Icon::Chip => "📌",
            Icon::Globe => "🌐",
            Icon::Cpu => "🖥️",
            Icon::Shield => "🛡️",
            Icon::Database => "🗄️",
            Icon::Smartphone => "📱",
            Icon::Zap => "⚡",
            Icon::Lightbulb => "💡",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Cyan,
    Purple,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Purple => "accent-purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Theme {
    pub icon: Icon,
    pub accent: Accent,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProblemStatement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub details: String,
    pub difficulty: Difficulty,
    pub resources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub slug: String,
    pub label: String,
    pub icon: Icon,
    pub problems: Vec<ProblemStatement>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OpenTrack {
    pub title: String,
    pub body: String,
    pub judging: String,
}

#[derive(Deserialize)]
struct RawDuration {
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

#[derive(Deserialize)]
struct RawEvent {
    name: String,
    tagline: String,
    boot_text: String,
    countdown: RawDuration,
    starts_at: Option<String>,
    #[serde(default)]
    schedule_url: Option<String>,
}

#[derive(Deserialize)]
struct RawContent {
    event: RawEvent,
    themes: Vec<Theme>,
    categories: Vec<Category>,
    open_innovation: OpenTrack,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub name: String,
    pub tagline: String,
    pub boot_text: String,
    pub countdown: Countdown,
    pub starts_at: Option<DateTime<Utc>>,
    /// Where "View Schedule" leads. Unset until the schedule is published.
    pub schedule_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub event: Event,
    pub themes: Vec<Theme>,
    pub categories: Vec<Category>,
    pub open_innovation: OpenTrack,
}

impl SiteContent {
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let raw: RawContent = serde_json::from_str(json)?;

        if raw.categories.is_empty() {
            return Err(SiteError::NoCategories);
        }
        let mut seen = HashSet::new();
        for category in &raw.categories {
            if !seen.insert(category.slug.as_str()) {
                return Err(SiteError::DuplicateCategory(category.slug.clone()));
            }
        }

        let RawDuration { days, hours, minutes, seconds } = raw.event.countdown;
        let countdown = Countdown::new(days, hours, minutes, seconds)?;
        let starts_at = raw
            .event
            .starts_at
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|_| SiteError::StartsAt(s))
            })
            .transpose()?;

        Ok(Self {
            event: Event {
                name: raw.event.name,
                tagline: raw.event.tagline,
                boot_text: raw.event.boot_text,
                countdown,
                starts_at,
                schedule_url: raw.event.schedule_url.filter(|url| !url.trim().is_empty()),
            },
            themes: raw.themes,
            categories: raw.categories,
            open_innovation: raw.open_innovation,
        })
    }

    pub fn category(&self, slug: &str) -> Result<&Category, SiteError> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| SiteError::UnknownCategory(slug.to_string()))
    }

    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Countdown shown when the hero mounts. A configured start instant wins
    /// over the fixed duration.
    pub fn initial_countdown(&self, now: DateTime<Utc>) -> Countdown {
        match self.event.starts_at {
            Some(start) => Countdown::until(now, start),
            None => self.event.countdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn minimal(categories: &str, countdown: &str, starts_at: &str) -> String {
        format!(
            r#"{{
                "event": {{
                    "name": "N", "tagline": "T", "boot_text": ">> B",
                    "countdown": {countdown}, "starts_at": {starts_at}
                }},
                "themes": [],
                "categories": {categories},
                "open_innovation": {{ "title": "O", "body": "B", "judging": "J" }}
            }}"#
        )
    }

    const ONE_CATEGORY: &str =
        r#"[{ "slug": "ai", "label": "AI", "icon": "cpu", "problems": [] }]"#;
    const SHORT: &str = r#"{ "days": 0, "hours": 1, "minutes": 2, "seconds": 3 }"#;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.event.name, "MAKE-A-THON 6.0");
        assert_eq!(content.event.boot_text, ">> INITIALIZING MAKE-A-THON 6.0");
        assert_eq!(content.event.countdown, Countdown::new(10, 12, 34, 56).unwrap());
        assert_eq!(content.themes.len(), 4);

        let slugs: Vec<_> = content.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["ai", "cybersecurity", "blockchain", "iot"]);
        for category in &content.categories {
            assert_eq!(category.problems.len(), 2);
            assert!(category.problems.iter().all(|p| !p.resources.is_empty()));
        }
        assert_eq!(content.default_category().map(|c| c.slug.as_str()), Some("ai"));
    }

    #[test]
    fn test_category_lookup() {
        let content = SiteContent::load().unwrap();
        let iot = content.category("iot").unwrap();
        assert_eq!(iot.label, "Internet of Things");
        assert_eq!(iot.problems[0].difficulty, Difficulty::Hard);
        assert!(matches!(
            content.category("quantum"),
            Err(SiteError::UnknownCategory(slug)) if slug == "quantum"
        ));
    }

    #[test]
    fn test_rejects_bad_content() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(SiteError::Content(_))
        ));
        assert!(matches!(
            SiteContent::from_json(&minimal("[]", SHORT, "null")),
            Err(SiteError::NoCategories)
        ));
        let twice = format!(
            "[{}, {}]",
            &ONE_CATEGORY[1..ONE_CATEGORY.len() - 1],
            &ONE_CATEGORY[1..ONE_CATEGORY.len() - 1]
        );
        assert!(matches!(
            SiteContent::from_json(&minimal(&twice, SHORT, "null")),
            Err(SiteError::DuplicateCategory(slug)) if slug == "ai"
        ));
        let bad_minutes = r#"{ "days": 0, "hours": 0, "minutes": 75, "seconds": 0 }"#;
        assert!(matches!(
            SiteContent::from_json(&minimal(ONE_CATEGORY, bad_minutes, "null")),
            Err(SiteError::DurationField { unit: "minutes", .. })
        ));
        assert!(matches!(
            SiteContent::from_json(&minimal(ONE_CATEGORY, SHORT, r#""next friday""#)),
            Err(SiteError::StartsAt(_))
        ));
    }

    #[test]
    fn test_schedule_link_is_optional() {
        assert_eq!(SiteContent::load().unwrap().event.schedule_url, None);

        let with_link = minimal(ONE_CATEGORY, SHORT, "null").replacen(
            r#""boot_text": ">> B","#,
            r#""boot_text": ">> B", "schedule_url": "/schedule.pdf","#,
            1,
        );
        let content = SiteContent::from_json(&with_link).unwrap();
        assert_eq!(content.event.schedule_url.as_deref(), Some("/schedule.pdf"));

        let blank = with_link.replace("/schedule.pdf", " ");
        assert_eq!(SiteContent::from_json(&blank).unwrap().event.schedule_url, None);
    }

    #[test]
    fn test_start_instant_overrides_fixed_countdown() {
        let fixed = SiteContent::from_json(&minimal(ONE_CATEGORY, SHORT, "null")).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(fixed.initial_countdown(now), Countdown::new(0, 1, 2, 3).unwrap());

        let dated = SiteContent::from_json(&minimal(
            ONE_CATEGORY,
            SHORT,
            r#""2025-03-03T06:30:00+00:00""#,
        ))
        .unwrap();
        assert_eq!(dated.initial_countdown(now), Countdown::new(2, 6, 30, 0).unwrap());
    }
}

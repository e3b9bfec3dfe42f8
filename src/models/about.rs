use serde::{Deserialize, Serialize};

use crate::utils::date::format_date_regional;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub tagline: String,
    pub mission: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// ISO `yyyy-mm-dd`
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub joined: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Milestone {
    pub date: String,
    pub title: String,
    pub description: String,
}

impl AboutContent {
    /// Copy of the content with every date in regional display order.
    pub fn with_regional_dates(&self) -> Self {
        let mut content = self.clone();
        content.updated_at = format_date_regional(&content.updated_at);
        for member in content.team.iter_mut() {
            member.joined = member.joined.as_deref().map(format_date_regional);
        }
        for milestone in content.milestones.iter_mut() {
            milestone.date = format_date_regional(&milestone.date);
        }
        content
    }
}

impl TeamMember {
    // Helper for templates, askama can't match on Option<String> refs nicely
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }

    pub fn joined_text(&self) -> &str {
        self.joined.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AboutContent {
        AboutContent {
            title: "About Us".to_string(),
            tagline: "Small team".to_string(),
            mission: "Build things".to_string(),
            sections: vec![],
            team: vec![
                TeamMember {
                    name: "Asha".to_string(),
                    role: "Founder".to_string(),
                    bio: None,
                    joined: Some("2019-03-01".to_string()),
                },
                TeamMember {
                    name: "Ravi".to_string(),
                    role: "Engineer".to_string(),
                    bio: Some("Likes Rust".to_string()),
                    joined: None,
                },
            ],
            milestones: vec![Milestone {
                date: "2020-01-15".to_string(),
                title: "Launch".to_string(),
                description: "First release".to_string(),
            }],
            updated_at: "2024-05-21".to_string(),
        }
    }

    #[test]
    fn regional_dates_cover_every_date_field() {
        let content = sample().with_regional_dates();
        assert_eq!(content.updated_at, "21-05-2024");
        assert_eq!(content.team[0].joined.as_deref(), Some("01-03-2019"));
        assert_eq!(content.team[1].joined, None);
        assert_eq!(content.milestones[0].date, "15-01-2020");
    }

    #[test]
    fn regional_dates_leave_original_untouched() {
        let original = sample();
        let _ = original.with_regional_dates();
        assert_eq!(original.updated_at, "2024-05-21");
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let json = r#"{"title":"t","tagline":"g","mission":"m"}"#;
        let content: AboutContent = serde_json::from_str(json).unwrap();
        assert!(content.sections.is_empty());
        assert!(content.team.is_empty());
        assert!(content.milestones.is_empty());
        assert_eq!(content.updated_at, "");
    }
}

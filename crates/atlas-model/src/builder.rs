use serde::{Deserialize, Serialize};

/// One community member.
///
/// `title`, `wallet` and `region` come from the member sheet; everything else
/// is optional enrichment that defaults to zero or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Builder {
    /// Display name.
    pub title: String,
    /// Opaque wallet identifier.
    pub wallet: String,
    /// Free-text country or region, used verbatim as the grouping key.
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub earned: f64,
    #[serde(default)]
    pub submissions: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Builder {
    /// Create a builder with only the required fields set.
    pub fn new(
        title: impl Into<String>,
        wallet: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            wallet: wallet.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    /// A builder is only kept when both title and wallet are non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.wallet.trim().is_empty()
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Set the earned amount.
    #[must_use]
    pub fn with_earned(mut self, earned: f64) -> Self {
        self.earned = earned;
        self
    }

    /// Set submission and win counts.
    #[must_use]
    pub fn with_record(mut self, submissions: u32, won: u32) -> Self {
        self.submissions = submissions;
        self.won = won;
        self
    }
}

/// Social profile links keyed by platform. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Socials {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none()
            && self.linkedin.is_none()
            && self.github.is_none()
            && self.website.is_none()
    }

    /// Present links as `(platform, url)` pairs in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("twitter", self.twitter.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("github", self.github.as_deref()),
            ("website", self.website.as_deref()),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.map(|url| (platform, url)))
        .collect()
    }
}

//! Per-platform limits. Every validator reads from this table.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Email,
    Instagram,
    Twitter,
    Facebook,
    LinkedIn,
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Email,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::TikTok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Email => "email",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::LinkedIn => "linkedin",
            Platform::TikTok => "tiktok",
        }
    }

    pub fn limits(&self) -> &'static PlatformLimits {
        match self {
            Platform::Email => &PLATFORM_LIMITS[0],
            Platform::Instagram => &PLATFORM_LIMITS[1],
            Platform::Twitter => &PLATFORM_LIMITS[2],
            Platform::Facebook => &PLATFORM_LIMITS[3],
            Platform::LinkedIn => &PLATFORM_LIMITS[4],
            Platform::TikTok => &PLATFORM_LIMITS[5],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.limits().display_name)
    }
}

/// Limits for one platform.
///
/// `char_limit` is the platform's declared maximum for a whole post.
/// `primary_limit`/`primary_warn_at` apply to the main copy field checked by
/// the per-platform validators (email subject, tweet with hashtags, captions,
/// posts) and may be stricter than `char_limit`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformLimits {
    pub platform: Platform,
    pub display_name: &'static str,
    pub char_limit: Option<usize>,
    pub hashtag_max: usize,
    pub hashtag_recommended: usize,
    pub primary_field: &'static str,
    pub primary_limit: usize,
    pub primary_warn_at: usize,
}

/// Recommended maximum for the email preview text
pub const EMAIL_PREVIEW_TEXT_RECOMMENDED: usize = 90;

/// Share of `char_limit` above which the generic length check warns
pub const APPROACHING_LIMIT_RATIO: f64 = 0.9;

pub static PLATFORM_LIMITS: [PlatformLimits; 6] = [
    PlatformLimits {
        platform: Platform::Email,
        display_name: "Email",
        char_limit: None,
        hashtag_max: 0,
        hashtag_recommended: 0,
        primary_field: "subject",
        primary_limit: 100,
        primary_warn_at: 50,
    },
    PlatformLimits {
        platform: Platform::Instagram,
        display_name: "Instagram",
        char_limit: Some(2200),
        hashtag_max: 30,
        hashtag_recommended: 10,
        primary_field: "caption",
        primary_limit: 2200,
        primary_warn_at: 2000,
    },
    PlatformLimits {
        platform: Platform::Twitter,
        display_name: "Twitter/X",
        char_limit: Some(280),
        hashtag_max: 5,
        hashtag_recommended: 2,
        primary_field: "tweet",
        primary_limit: 280,
        primary_warn_at: 250,
    },
    PlatformLimits {
        platform: Platform::Facebook,
        display_name: "Facebook",
        char_limit: Some(63206),
        hashtag_max: 10,
        hashtag_recommended: 3,
        primary_field: "post",
        primary_limit: 63206,
        primary_warn_at: 60000,
    },
    PlatformLimits {
        platform: Platform::LinkedIn,
        display_name: "LinkedIn",
        char_limit: Some(3000),
        hashtag_max: 5,
        hashtag_recommended: 3,
        primary_field: "post",
        primary_limit: 3000,
        primary_warn_at: 2700,
    },
    PlatformLimits {
        platform: Platform::TikTok,
        display_name: "TikTok",
        char_limit: Some(2200),
        hashtag_max: 5,
        hashtag_recommended: 4,
        primary_field: "caption",
        primary_limit: 150,
        primary_warn_at: 120,
    },
];

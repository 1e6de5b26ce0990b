//! Length and hashtag validation for platform copy

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::limits::{Platform, APPROACHING_LIMIT_RATIO, EMAIL_PREVIEW_TEXT_RECOMMENDED};
use crate::template::CampaignContent;

/// Outcome of validating one piece of copy. `valid` is always `errors.is_empty()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn clean() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallValidation {
    pub valid: bool,
    pub total_errors: usize,
    pub total_warnings: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraft {
    pub subject: Option<String>,
    pub preview_text: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwitterDraft {
    pub tweet: Option<String>,
    pub hashtags: Option<Vec<String>>,
}

/// Instagram and TikTok drafts share a shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptionDraft {
    pub caption: Option<String>,
    pub hashtags: Option<Vec<String>>,
}

/// Facebook and LinkedIn drafts share a shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub post: Option<String>,
    pub hashtags: Option<Vec<String>>,
}

/// Partial copy for any subset of platforms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignDrafts {
    #[serde(default)]
    pub email: Option<EmailDraft>,
    #[serde(default)]
    pub instagram: Option<CaptionDraft>,
    #[serde(default)]
    pub twitter: Option<TwitterDraft>,
    #[serde(default)]
    pub facebook: Option<PostDraft>,
    #[serde(default)]
    pub linkedin: Option<PostDraft>,
    #[serde(default)]
    pub tiktok: Option<CaptionDraft>,
}

impl From<&CampaignContent> for CampaignDrafts {
    fn from(content: &CampaignContent) -> Self {
        CampaignDrafts {
            email: content.email.as_ref().map(|e| EmailDraft {
                subject: Some(e.subject.clone()),
                preview_text: Some(e.preview_text.clone()),
                body: Some(e.body.clone()),
            }),
            instagram: content.instagram.as_ref().map(|i| CaptionDraft {
                caption: Some(i.caption.clone()),
                hashtags: Some(i.hashtags.clone()),
            }),
            twitter: content.twitter.as_ref().map(|t| TwitterDraft {
                tweet: Some(t.tweet.clone()),
                hashtags: Some(t.hashtags.clone()),
            }),
            facebook: content.facebook.as_ref().map(|p| PostDraft {
                post: Some(p.post.clone()),
                hashtags: None,
            }),
            linkedin: content.linkedin.as_ref().map(|l| PostDraft {
                post: Some(l.post.clone()),
                hashtags: Some(l.hashtags.clone()),
            }),
            tiktok: content.tiktok.as_ref().map(|t| CaptionDraft {
                caption: Some(t.caption.clone()),
                hashtags: Some(t.hashtags.clone()),
            }),
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Check `content` against the platform's declared character limit
pub fn validate_content_length(platform: Platform, content: &str) -> ValidationResult {
    let Some(limit) = platform.limits().char_limit else {
        return ValidationResult::clean();
    };

    let len = char_len(content);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if len > limit {
        errors.push(format!(
            "{} content exceeds the {} character limit ({}/{})",
            platform, limit, len, limit
        ));
    } else if len as f64 > limit as f64 * APPROACHING_LIMIT_RATIO {
        warnings.push(format!(
            "{} content is approaching the {} character limit ({}/{})",
            platform, limit, len, limit
        ));
    }

    ValidationResult::new(errors, warnings)
}

/// Check a hashtag list against the platform's maximum and recommendation
pub fn validate_hashtag_count<S: AsRef<str>>(platform: Platform, hashtags: &[S]) -> ValidationResult {
    let limits = platform.limits();
    let count = hashtags.len();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if count > limits.hashtag_max {
        errors.push(format!(
            "{} allows at most {} hashtags ({} provided)",
            platform, limits.hashtag_max, count
        ));
    } else if count > limits.hashtag_recommended {
        warnings.push(format!(
            "{} posts perform best with {} or fewer hashtags ({} provided)",
            platform, limits.hashtag_recommended, count
        ));
    }

    ValidationResult::new(errors, warnings)
}

#[derive(Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    /// Required-field check. Returns the field when present and non-blank.
    fn require<'a>(&mut self, label: &str, value: Option<&'a str>) -> Option<&'a str> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ => {
                self.errors.push(format!("{} is required", label));
                None
            }
        }
    }

    fn check_primary_length(&mut self, platform: Platform, label: &str, len: usize) {
        let limits = platform.limits();
        if len > limits.primary_limit {
            self.errors.push(format!(
                "{} exceeds {} characters ({}/{})",
                label, limits.primary_limit, len, limits.primary_limit
            ));
        } else if len > limits.primary_warn_at {
            self.warnings.push(format!(
                "{} is approaching the {} character limit ({}/{})",
                label, limits.primary_limit, len, limits.primary_limit
            ));
        }
    }

    fn hashtags(&mut self, platform: Platform, hashtags: Option<&Vec<String>>) {
        if let Some(hashtags) = hashtags {
            self.absorb(validate_hashtag_count(platform, hashtags.as_slice()));
        }
    }

    fn absorb(&mut self, result: ValidationResult) {
        self.errors.extend(result.errors);
        self.warnings.extend(result.warnings);
    }

    fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

pub fn validate_email_content(draft: &EmailDraft) -> ValidationResult {
    let limits = Platform::Email.limits();
    let mut findings = Findings::default();

    if let Some(subject) = findings.require("Email subject", draft.subject.as_deref()) {
        let len = char_len(subject);
        if len > limits.primary_limit {
            findings.errors.push(format!(
                "Email subject exceeds {} characters ({}/{})",
                limits.primary_limit, len, limits.primary_limit
            ));
        } else if len > limits.primary_warn_at {
            findings.warnings.push(format!(
                "Email subject is longer than the recommended {} characters ({}/{})",
                limits.primary_warn_at, len, limits.primary_warn_at
            ));
        }
    }

    if let Some(preview) = draft.preview_text.as_deref() {
        let len = char_len(preview);
        if len > EMAIL_PREVIEW_TEXT_RECOMMENDED {
            findings.warnings.push(format!(
                "Email preview text is longer than the recommended {} characters ({}/{})",
                EMAIL_PREVIEW_TEXT_RECOMMENDED, len, EMAIL_PREVIEW_TEXT_RECOMMENDED
            ));
        }
    }

    findings.require("Email body", draft.body.as_deref());

    findings.finish()
}

/// Tweet length counts each hashtag as `" #tag"`
pub fn validate_twitter_content(draft: &TwitterDraft) -> ValidationResult {
    let mut findings = Findings::default();

    if let Some(tweet) = findings.require("Tweet", draft.tweet.as_deref()) {
        // Hashtags post as "\n\n#a #b" after the tweet
        let tags = draft.hashtags.as_deref().unwrap_or_default();
        let hashtag_len = if tags.is_empty() {
            0
        } else {
            let tag_chars: usize = tags
                .iter()
                .map(|tag| 1 + char_len(tag.trim_start_matches('#')))
                .sum();
            2 + tag_chars + (tags.len() - 1)
        };
        findings.check_primary_length(Platform::Twitter, "Tweet", char_len(tweet) + hashtag_len);
    }

    findings.hashtags(Platform::Twitter, draft.hashtags.as_ref());
    findings.finish()
}

pub fn validate_instagram_content(draft: &CaptionDraft) -> ValidationResult {
    validate_caption(Platform::Instagram, "Instagram caption", draft)
}

pub fn validate_tiktok_content(draft: &CaptionDraft) -> ValidationResult {
    validate_caption(Platform::TikTok, "TikTok caption", draft)
}

fn validate_caption(platform: Platform, label: &str, draft: &CaptionDraft) -> ValidationResult {
    let mut findings = Findings::default();

    if let Some(caption) = findings.require(label, draft.caption.as_deref()) {
        findings.check_primary_length(platform, label, char_len(caption));
    }

    findings.hashtags(platform, draft.hashtags.as_ref());
    findings.finish()
}

pub fn validate_facebook_content(draft: &PostDraft) -> ValidationResult {
    validate_post(Platform::Facebook, "Facebook post", draft)
}

pub fn validate_linkedin_content(draft: &PostDraft) -> ValidationResult {
    validate_post(Platform::LinkedIn, "LinkedIn post", draft)
}

fn validate_post(platform: Platform, label: &str, draft: &PostDraft) -> ValidationResult {
    let mut findings = Findings::default();

    if let Some(post) = findings.require(label, draft.post.as_deref()) {
        findings.check_primary_length(platform, label, char_len(post));
    }

    findings.hashtags(platform, draft.hashtags.as_ref());
    findings.finish()
}

/// Validate every platform. Platforms without a draft are reported clean.
pub fn validate_all_platform_content(drafts: &CampaignDrafts) -> BTreeMap<Platform, ValidationResult> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            let result = match platform {
                Platform::Email => drafts.email.as_ref().map(validate_email_content),
                Platform::Instagram => drafts.instagram.as_ref().map(validate_instagram_content),
                Platform::Twitter => drafts.twitter.as_ref().map(validate_twitter_content),
                Platform::Facebook => drafts.facebook.as_ref().map(validate_facebook_content),
                Platform::LinkedIn => drafts.linkedin.as_ref().map(validate_linkedin_content),
                Platform::TikTok => drafts.tiktok.as_ref().map(validate_tiktok_content),
            };
            (platform, result.unwrap_or_else(ValidationResult::clean))
        })
        .collect()
}

pub fn get_overall_validation(results: &BTreeMap<Platform, ValidationResult>) -> OverallValidation {
    OverallValidation {
        valid: results.values().all(ValidationResult::valid),
        total_errors: results.values().map(|r| r.errors.len()).sum(),
        total_warnings: results.values().map(|r| r.warnings.len()).sum(),
    }
}

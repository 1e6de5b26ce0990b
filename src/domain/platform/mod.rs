//! Per-platform content validation.
//!
//! Hard limits produce errors, the band just below a limit produces
//! warnings. Nothing here fails: every validator returns a
//! [`ValidationResult`] and callers decide whether to block sending.

mod limits;
mod validator;

pub use limits::{
    Platform, PlatformLimits, APPROACHING_LIMIT_RATIO, EMAIL_PREVIEW_TEXT_RECOMMENDED,
    PLATFORM_LIMITS,
};
pub use validator::{
    get_overall_validation, validate_all_platform_content, validate_content_length,
    validate_email_content, validate_facebook_content, validate_hashtag_count,
    validate_instagram_content, validate_linkedin_content, validate_tiktok_content,
    validate_twitter_content, CaptionDraft, CampaignDrafts, EmailDraft, OverallValidation,
    PostDraft, TwitterDraft, ValidationResult,
};

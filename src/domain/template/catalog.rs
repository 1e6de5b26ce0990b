//! Built-in campaign templates and catalog file loading

use std::fs;
use std::path::Path;

use chrono::Utc;

use super::types::{
    CampaignContent, CampaignType, EmailContent, EstimatedReach, FacebookContent,
    InstagramContent, LinkedInContent, MarketingCampaignTemplate, RecommendedTiming,
    TemplateError, TemplateResult, TemplateVariable, TikTokContent, TwitterContent,
    VariableType,
};

/// Hashtag groups shared by the music-producer templates
pub mod hashtags {
    pub const GENERAL: &[&str] = &[
        "musicproducer",
        "producer",
        "beatmaker",
        "producerlife",
        "studiolife",
        "musicproduction",
        "beats",
        "newmusic",
        "homestudio",
        "producergrind",
    ];

    pub const HIPHOP: &[&str] = &["hiphopbeats", "trapbeats", "boombap", "typebeat", "rapbeats"];

    pub const DAW: &[&str] = &["flstudio", "ableton", "logicpro", "protools", "daw"];

    pub fn pick(groups: &[(&[&str], usize)]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|(group, n)| group.iter().take(*n).map(|t| t.to_string()))
            .collect()
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn timing(email: &str, social: &str, urgency: Option<&str>) -> Option<RecommendedTiming> {
    Some(RecommendedTiming {
        email: email.to_string(),
        social: social.to_string(),
        urgency: urgency.map(str::to_string),
    })
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    campaign_type: CampaignType,
    product_types: &[&str],
    icon: &str,
    estimated_reach: EstimatedReach,
) -> MarketingCampaignTemplate {
    let now = Utc::now();
    MarketingCampaignTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        campaign_type,
        product_types: tags(product_types),
        icon: icon.to_string(),
        estimated_reach,
        content: CampaignContent::default(),
        variables: Vec::new(),
        recommended_timing: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_pack_launch() -> MarketingCampaignTemplate {
    let mut t = template(
        "sample-pack-launch",
        "Sample Pack Launch",
        "Complete multi-platform campaign for launching a new sample pack",
        CampaignType::ProductLaunch,
        &["sample_pack"],
        "Music",
        EstimatedReach::High,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "NEW: {{productName}} just dropped".to_string(),
            preview_text: "Fresh sounds for your next hit".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p><strong>Introducing {{productName}}</strong></p>\n\n\
                   <p>{{soundCount}} drums, loops, and one-shots, key and BPM labeled, 100% royalty-free.</p>\n\n\
                   <p><strong>Launch special:</strong> {{discountPercent}}% off for the next 48 hours.</p>\n\n\
                   <p><a href=\"{{productUrl}}\">Get the Pack</a></p>\n\n\
                   <p>Let's make some heat,<br>{{creatorName}}</p>"
                .to_string(),
            cta_text: "Get the Pack".to_string(),
            cta_url: "{{productUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "NEW DROP: {{productName}} is here.\n\n\
                      {{soundCount}} sounds crafted for {{genre}} producers.\n\n\
                      Launch discount: {{discountPercent}}% off for 48 hours only.\n\n\
                      Link in bio to grab it now."
                .to_string(),
            hashtags: hashtags::pick(&[
                (hashtags::GENERAL, 8),
                (hashtags::HIPHOP, 4),
                (hashtags::DAW, 4),
            ]),
            call_to_action: "Link in bio".to_string(),
            suggested_image_style: Some("carousel".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "NEW: {{productName}} just dropped\n\n\
                    {{soundCount}} sounds for {{genre}} producers\n\
                    {{discountPercent}}% off for 48 hours\n\n\
                    {{productUrl}}"
                .to_string(),
            hashtags: tags(&["beatmaker", "producer"]),
        }),
        facebook: Some(FacebookContent {
            post: "Introducing {{productName}}: {{soundCount}} sounds crafted for {{genre}} producers.\n\n\
                   Every loop is mixed and ready to drop into your DAW. 100% royalty-free.\n\n\
                   Launch special: {{discountPercent}}% off for the next 48 hours only.\n\n\
                   {{productUrl}}"
                .to_string(),
            call_to_action: "Get the Pack".to_string(),
            suggested_image_style: Some("carousel".to_string()),
        }),
        linkedin: Some(LinkedInContent {
            post: "{{productName}} is now available: {{soundCount}} sounds designed for professional {{genre}} productions.\n\n\
                   I'm offering a {{discountPercent}}% launch discount for the next 48 hours.\n\n\
                   {{productUrl}}"
                .to_string(),
            hashtags: tags(&["MusicProduction", "SoundDesign", "AudioProduction"]),
            professional_angle: Some(
                "Position as professional resource for audio industry".to_string(),
            ),
        }),
        tiktok: Some(TikTokContent {
            caption: "New pack just dropped. {{soundCount}} sounds for {{genre}} producers. Link in bio."
                .to_string(),
            hashtags: tags(&["beatmaker", "producertok", "musicproducer", "makingbeats"]),
            hook_line: "I just dropped my new sample pack and here's what's inside".to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{productName}}", "Product Name", VariableType::Text)
            .required()
            .with_placeholder("e.g., Midnight Drums Vol. 2"),
        TemplateVariable::new("{{productUrl}}", "Product URL", VariableType::Url)
            .required()
            .with_placeholder("https://yourstore.com/pack"),
        TemplateVariable::new("{{soundCount}}", "Number of Sounds", VariableType::Number)
            .required()
            .with_default("100+"),
        TemplateVariable::new("{{genre}}", "Genre/Style", VariableType::Text)
            .required()
            .with_default("hip-hop"),
        TemplateVariable::new("{{discountPercent}}", "Discount Percentage", VariableType::Discount)
            .with_default("25"),
        TemplateVariable::new("{{firstName}}", "Recipient First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text)
            .required()
            .with_placeholder("Your name or brand"),
    ];

    t.recommended_timing = timing(
        "Day 1, 9:00 AM (local time)",
        "Day 1, 12:00 PM (highest engagement)",
        Some("Send reminder 24 hours before discount expires"),
    );
    t
}

pub fn course_launch() -> MarketingCampaignTemplate {
    let mut t = template(
        "course-launch",
        "Course Launch",
        "Multi-platform campaign for launching a new course or masterclass",
        CampaignType::ProductLaunch,
        &["course", "masterclass"],
        "GraduationCap",
        EstimatedReach::High,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "Doors are open: {{courseName}}".to_string(),
            preview_text: "Enrollment is now open - limited spots available".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p>The wait is over. <strong>{{courseName}}</strong> is officially live.</p>\n\n\
                   <p>{{moduleCount}} modules covering {{mainOutcome}}.</p>\n\n\
                   <p>Early enrollment: {{coursePrice}}.</p>\n\n\
                   <p><a href=\"{{courseUrl}}\">Enroll Now</a></p>\n\n\
                   <p>See you inside,<br>{{creatorName}}</p>"
                .to_string(),
            cta_text: "Enroll Now".to_string(),
            cta_url: "{{courseUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "{{courseName}} is LIVE.\n\n\
                      {{moduleCount}} modules. Everything I know about {{mainOutcome}}.\n\n\
                      Link in bio to enroll."
                .to_string(),
            hashtags: hashtags::pick(&[(hashtags::GENERAL, 6), (hashtags::DAW, 2)]),
            call_to_action: "Link in bio".to_string(),
            suggested_image_style: Some("reel".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "{{courseName}} is live.\n\n{{moduleCount}} modules on {{mainOutcome}}.\n\n{{courseUrl}}"
                .to_string(),
            hashtags: tags(&["musicproduction"]),
        }),
        facebook: None,
        linkedin: Some(LinkedInContent {
            post: "After years of producing, I've turned what I know about {{mainOutcome}} into {{courseName}}.\n\n\
                   {{moduleCount}} modules, built for working producers.\n\n\
                   {{courseUrl}}"
                .to_string(),
            hashtags: tags(&["MusicEducation", "OnlineLearning"]),
            professional_angle: None,
        }),
        tiktok: Some(TikTokContent {
            caption: "My course is finally live. {{moduleCount}} modules. Link in bio.".to_string(),
            hashtags: tags(&["producertok", "musicproducer", "learnontiktok"]),
            hook_line: "Everything I wish I knew when I started producing".to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{courseName}}", "Course Name", VariableType::Text)
            .required()
            .with_placeholder("e.g., Mixing Masterclass"),
        TemplateVariable::new("{{courseUrl}}", "Course URL", VariableType::Url)
            .required()
            .with_placeholder("https://yourstore.com/course"),
        TemplateVariable::new("{{moduleCount}}", "Number of Modules", VariableType::Number)
            .required()
            .with_default("8"),
        TemplateVariable::new("{{mainOutcome}}", "Main Outcome", VariableType::Text)
            .required()
            .with_default("mixing and mastering"),
        TemplateVariable::new("{{coursePrice}}", "Course Price", VariableType::Price)
            .required()
            .with_placeholder("e.g., $97"),
        TemplateVariable::new("{{firstName}}", "Recipient First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text)
            .required()
            .with_placeholder("Your name or brand"),
    ];

    t.recommended_timing = timing(
        "Day 1, 10:00 AM (local time)",
        "Day 1, 6:00 PM",
        Some("Close early-bird pricing after 72 hours"),
    );
    t
}

pub fn preset_pack_launch() -> MarketingCampaignTemplate {
    let mut t = template(
        "preset-pack-launch",
        "Preset Pack Launch",
        "Launch campaign for synth presets, effect chains, or DAW templates",
        CampaignType::ProductLaunch,
        &["preset_pack"],
        "Sliders",
        EstimatedReach::Medium,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "{{presetCount}} new {{synthName}} presets just dropped".to_string(),
            preview_text: "Instant sound design - no programming required".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p>I just released <strong>{{productName}}</strong>: {{presetCount}} {{synthName}} presets for {{genre}} producers.</p>\n\n\
                   <p>Inside: {{category1}} and {{category2}}, all macro-mapped.</p>\n\n\
                   <p><strong>Launch price:</strong> {{discountPercent}}% off for the first 48 hours.</p>\n\n\
                   <p><a href=\"{{productUrl}}\">Get the Presets</a></p>\n\n\
                   <p>Happy producing,<br>{{creatorName}}</p>"
                .to_string(),
            cta_text: "Get the Presets".to_string(),
            cta_url: "{{productUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "NEW: {{productName}} for {{synthName}}\n\n\
                      {{presetCount}} presets. Zero sound design required.\n\n\
                      Launch price: {{discountPercent}}% off for 48 hours.\n\n\
                      Link in bio."
                .to_string(),
            hashtags: tags(&[
                "synthpresets",
                "serum",
                "vitalpresets",
                "sounddesign",
                "musicproducer",
                "producerlife",
                "synth",
                "electronicmusic",
            ]),
            call_to_action: "Link in bio".to_string(),
            suggested_image_style: Some("carousel".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "{{presetCount}} new {{synthName}} presets just dropped\n\n\
                    {{productName}}, designed for {{genre}} producers\n\n\
                    {{discountPercent}}% off for 48 hours\n\n\
                    {{productUrl}}"
                .to_string(),
            hashtags: tags(&["presets", "sounddesign"]),
        }),
        facebook: Some(FacebookContent {
            post: "Just released {{productName}}: {{presetCount}} {{synthName}} presets for {{genre}} producers.\n\n\
                   Inside: {{category1}} and {{category2}}, all macro-mapped.\n\n\
                   Launch special: {{discountPercent}}% off for the first 48 hours.\n\n\
                   {{productUrl}}"
                .to_string(),
            call_to_action: "Get the Presets".to_string(),
            suggested_image_style: Some("carousel".to_string()),
        }),
        linkedin: Some(LinkedInContent {
            post: "Announcing {{productName}}: {{presetCount}} professional {{synthName}} presets, optimized for {{genre}} productions.\n\n\
                   Available with {{discountPercent}}% off for 48 hours.\n\n\
                   {{productUrl}}"
                .to_string(),
            hashtags: tags(&["SoundDesign", "MusicProduction", "AudioTools"]),
            professional_angle: Some("Position as time-saving professional tool".to_string()),
        }),
        tiktok: Some(TikTokContent {
            caption: "{{presetCount}} {{synthName}} presets just dropped. {{discountPercent}}% off in bio."
                .to_string(),
            hashtags: tags(&["synthpresets", "sounddesign", "producertok", "serum"]),
            hook_line: "I just made sound design 10x faster with these presets".to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{productName}}", "Product Name", VariableType::Text)
            .required()
            .with_placeholder("e.g., Future Bass Essentials"),
        TemplateVariable::new("{{productUrl}}", "Product URL", VariableType::Url).required(),
        TemplateVariable::new("{{synthName}}", "Synth Name", VariableType::Text)
            .required()
            .with_default("Serum"),
        TemplateVariable::new("{{presetCount}}", "Number of Presets", VariableType::Number)
            .required()
            .with_default("50"),
        TemplateVariable::new("{{genre}}", "Target Genre", VariableType::Text)
            .required()
            .with_default("electronic"),
        TemplateVariable::new("{{category1}}", "Sound Category 1", VariableType::Text)
            .required()
            .with_default("Leads and pads"),
        TemplateVariable::new("{{category2}}", "Sound Category 2", VariableType::Text)
            .required()
            .with_default("Basses and plucks"),
        TemplateVariable::new("{{discountPercent}}", "Discount Percentage", VariableType::Discount)
            .with_default("20"),
        TemplateVariable::new("{{firstName}}", "Recipient First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text).required(),
    ];

    t.recommended_timing = timing("Day 1, 11:00 AM", "Day 1, 2:00 PM", None);
    t
}

pub fn bundle_launch() -> MarketingCampaignTemplate {
    let mut t = template(
        "bundle-launch",
        "Bundle Launch",
        "Launch campaign for product bundles or masterclass packages",
        CampaignType::ProductLaunch,
        &["bundle", "masterclass"],
        "Package",
        EstimatedReach::High,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "The {{bundleName}} is here (save {{savingsAmount}})".to_string(),
            preview_text: "Everything you need in one package".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p><strong>Introducing the {{bundleName}}</strong></p>\n\n\
                   <ul><li>{{item1}}</li><li>{{item2}}</li><li>{{item3}}</li><li>{{item4}}</li></ul>\n\n\
                   <p><strong>Total value:</strong> {{totalValue}}<br>\
                   <strong>Bundle price:</strong> {{bundlePrice}} (save {{savingsAmount}})</p>\n\n\
                   <p>Everything you need to {{mainBenefit}}.</p>\n\n\
                   <p><a href=\"{{productUrl}}\">Get the Bundle</a></p>\n\n\
                   <p>Let's level up together,<br>{{creatorName}}</p>"
                .to_string(),
            cta_text: "Get the Bundle".to_string(),
            cta_url: "{{productUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "THE {{bundleName}} IS HERE.\n\n\
                      {{item1}}\n{{item2}}\n{{item3}}\n{{item4}}\n\n\
                      Total value: {{totalValue}}\nYour price: {{bundlePrice}}\n\n\
                      Link in bio. Limited time offer."
                .to_string(),
            hashtags: hashtags::pick(&[(hashtags::GENERAL, 8)]),
            call_to_action: "Link in bio".to_string(),
            suggested_image_style: Some("carousel".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "The {{bundleName}} just dropped\n\n\
                    {{item1}} + {{item2}} + more\n\n\
                    Worth {{totalValue}}, yours for {{bundlePrice}}\n\n\
                    {{productUrl}}"
                .to_string(),
            hashtags: tags(&["producer", "bundle"]),
        }),
        facebook: Some(FacebookContent {
            post: "The {{bundleName}} includes {{item1}}, {{item2}}, {{item3}} and {{item4}}.\n\n\
                   Total value: {{totalValue}}. Bundle price: {{bundlePrice}} (save {{savingsAmount}}).\n\n\
                   {{productUrl}}"
                .to_string(),
            call_to_action: "Get the Bundle".to_string(),
            suggested_image_style: Some("carousel".to_string()),
        }),
        linkedin: Some(LinkedInContent {
            post: "Announcing the {{bundleName}}, a complete package for producers looking to {{mainBenefit}}.\n\n\
                   Combined value of {{totalValue}}, available at {{bundlePrice}}.\n\n\
                   {{productUrl}}"
                .to_string(),
            hashtags: tags(&["MusicProduction", "ProducerTools", "AudioProduction"]),
            professional_angle: Some("Frame as comprehensive professional toolkit".to_string()),
        }),
        tiktok: Some(TikTokContent {
            caption: "The {{bundleName}} is live. {{totalValue}} worth of content for {{bundlePrice}}. Link in bio."
                .to_string(),
            hashtags: tags(&["producertok", "musicproducer", "bundle", "studioessentials"]),
            hook_line: "I just bundled everything you need to level up as a producer".to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{bundleName}}", "Bundle Name", VariableType::Text)
            .required()
            .with_placeholder("e.g., Producer Starter Bundle"),
        TemplateVariable::new("{{productUrl}}", "Product URL", VariableType::Url).required(),
        TemplateVariable::new("{{item1}}", "Bundle Item 1", VariableType::Text).required(),
        TemplateVariable::new("{{item2}}", "Bundle Item 2", VariableType::Text).required(),
        TemplateVariable::new("{{item3}}", "Bundle Item 3", VariableType::Text).required(),
        TemplateVariable::new("{{item4}}", "Bundle Item 4", VariableType::Text).required(),
        TemplateVariable::new("{{totalValue}}", "Total Value", VariableType::Price)
            .required()
            .with_placeholder("e.g., $297"),
        TemplateVariable::new("{{bundlePrice}}", "Bundle Price", VariableType::Price)
            .required()
            .with_placeholder("e.g., $97"),
        TemplateVariable::new("{{savingsAmount}}", "Savings Amount", VariableType::Price)
            .required()
            .with_placeholder("e.g., $200"),
        TemplateVariable::new("{{mainBenefit}}", "Main Benefit", VariableType::Text)
            .required()
            .with_default("take your production to the next level"),
        TemplateVariable::new("{{firstName}}", "Recipient First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text).required(),
    ];

    t.recommended_timing = timing(
        "Day 1, 9:00 AM",
        "Day 1, 12:00 PM",
        Some("Bundle pricing available for limited time"),
    );
    t
}

pub fn black_friday() -> MarketingCampaignTemplate {
    let mut t = template(
        "black-friday",
        "Black Friday Sale",
        "Biggest sale of the year across every platform",
        CampaignType::SeasonalHoliday,
        &["sample_pack", "preset_pack", "course", "bundle"],
        "ShoppingBag",
        EstimatedReach::High,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "BLACK FRIDAY: {{discountPercent}}% off everything".to_string(),
            preview_text: "Use code {{discountCode}} before midnight".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p>Everything in the store is {{discountPercent}}% off until {{endDate}}.</p>\n\n\
                   <p>Use code <strong>{{discountCode}}</strong> at checkout.</p>\n\n\
                   <p><a href=\"{{storeUrl}}\">Shop the Sale</a></p>"
                .to_string(),
            cta_text: "Shop the Sale".to_string(),
            cta_url: "{{storeUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "BLACK FRIDAY IS HERE.\n\n{{discountPercent}}% off everything with code {{discountCode}}.\n\nEnds {{endDate}}."
                .to_string(),
            hashtags: hashtags::pick(&[(hashtags::GENERAL, 8)])
                .into_iter()
                .chain(tags(&["blackfriday", "blackfridaysale"]))
                .collect(),
            call_to_action: "Shop via link in bio".to_string(),
            suggested_image_style: Some("single".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "BLACK FRIDAY: {{discountPercent}}% off everything\n\nCode: {{discountCode}}\nEnds {{endDate}}\n\n{{storeUrl}}"
                .to_string(),
            hashtags: tags(&["BlackFriday"]),
        }),
        facebook: Some(FacebookContent {
            post: "Black Friday is here. Everything is {{discountPercent}}% off with code {{discountCode}} until {{endDate}}.\n\n{{storeUrl}}"
                .to_string(),
            call_to_action: "Shop Now".to_string(),
            suggested_image_style: None,
        }),
        linkedin: None,
        tiktok: Some(TikTokContent {
            caption: "{{discountPercent}}% off everything. Code {{discountCode}}. Ends {{endDate}}.".to_string(),
            hashtags: tags(&["blackfriday", "producertok", "musicproducer"]),
            hook_line: "The biggest sale I've ever done".to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{discountPercent}}", "Discount Percentage", VariableType::Discount)
            .required()
            .with_default("50"),
        TemplateVariable::new("{{discountCode}}", "Discount Code", VariableType::Text)
            .required()
            .with_default("BLACKFRIDAY"),
        TemplateVariable::new("{{endDate}}", "Sale End Date", VariableType::Date).required(),
        TemplateVariable::new("{{storeUrl}}", "Store URL", VariableType::Url).required(),
        TemplateVariable::new("{{firstName}}", "Recipient First Name", VariableType::Text)
            .with_default("there"),
    ];

    t.recommended_timing = timing(
        "Friday, 6:00 AM",
        "Friday, 9:00 AM and 7:00 PM",
        Some("Last-chance email Sunday evening"),
    );
    t
}

pub fn course_completion() -> MarketingCampaignTemplate {
    let mut t = template(
        "course-completion",
        "Course Completion Celebration",
        "Celebrate student completing your course",
        CampaignType::CourseMilestone,
        &["course"],
        "GraduationCap",
        EstimatedReach::High,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "You did it! {{courseName}} complete".to_string(),
            preview_text: "Congratulations on finishing the course".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p><strong>CONGRATULATIONS!</strong></p>\n\n\
                   <p>You just completed <strong>{{courseName}}</strong>.</p>\n\n\
                   <p>Ready for the next step? {{nextCourseName}} picks up right where this left off.</p>\n\n\
                   <p><a href=\"{{nextCourseUrl}}\">See What's Next</a></p>"
                .to_string(),
            cta_text: "See What's Next".to_string(),
            cta_url: "{{nextCourseUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "Shoutout to everyone who just finished {{courseName}}.\n\nTag someone who should start next."
                .to_string(),
            hashtags: hashtags::pick(&[(hashtags::GENERAL, 5)]),
            call_to_action: "Tag a friend".to_string(),
            suggested_image_style: None,
        }),
        twitter: None,
        facebook: None,
        linkedin: Some(LinkedInContent {
            post: "Proud of every student who completed {{courseName}} this month.".to_string(),
            hashtags: tags(&["MusicEducation"]),
            professional_angle: Some("Celebrate student outcomes".to_string()),
        }),
        tiktok: None,
    };

    t.variables = vec![
        TemplateVariable::new("{{courseName}}", "Course Name", VariableType::Text).required(),
        TemplateVariable::new("{{nextCourseName}}", "Next Course", VariableType::Text).required(),
        TemplateVariable::new("{{nextCourseUrl}}", "Next Course URL", VariableType::Url),
        TemplateVariable::new("{{firstName}}", "Student First Name", VariableType::Text)
            .with_default("there"),
    ];

    t.recommended_timing = timing("Immediately on completion", "Weekly roundup", None);
    t
}

pub fn module_completion() -> MarketingCampaignTemplate {
    let mut t = template(
        "module-completion",
        "Module Completion Check-In",
        "Encourage students after completing a module",
        CampaignType::CourseMilestone,
        &["course"],
        "CheckCircle",
        EstimatedReach::Medium,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "Nice work on {{moduleName}}!".to_string(),
            preview_text: "You're making great progress".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p><strong>Nice work completing {{moduleName}}!</strong> You're {{progressPercent}}% through {{courseName}}.</p>\n\n\
                   <ul><li>{{recap1}}</li><li>{{recap2}}</li><li>{{recap3}}</li></ul>\n\n\
                   <p><strong>Pro tip:</strong> {{proTip}}</p>\n\n\
                   <p>Up next: <strong>{{nextModuleName}}</strong>, where you'll discover {{nextModuleTeaser}}.</p>\n\n\
                   <p><a href=\"{{courseUrl}}\">Continue to Next Module</a></p>\n\n\
                   <p>Keep it up,<br>{{creatorName}}</p>"
                .to_string(),
            cta_text: "Continue to Next Module".to_string(),
            cta_url: "{{courseUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "Progress check for everyone working through {{courseName}}.\n\n\
                      Drop your progress percentage in the comments.\n\n\
                      Even 15 minutes a day adds up."
                .to_string(),
            hashtags: tags(&[
                "learning",
                "musicproducer",
                "courseprogress",
                "producerlife",
                "musicproduction",
                "musiccourse",
            ]),
            call_to_action: "Drop your progress in comments".to_string(),
            suggested_image_style: Some("single".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "To everyone taking one of my courses: how's your progress?\n\n\
                    15 minutes a day beats 3 hours once a week."
                .to_string(),
            hashtags: tags(&["learning", "producer"]),
        }),
        facebook: Some(FacebookContent {
            post: "Course check-in! How's {{courseName}} going?\n\n\
                   Share your progress in the comments, and ask your questions below."
                .to_string(),
            call_to_action: "Share your progress".to_string(),
            suggested_image_style: None,
        }),
        linkedin: Some(LinkedInContent {
            post: "Consistent, incremental progress beats sporadic intensive sessions.\n\n\
                   What are you learning right now?"
                .to_string(),
            hashtags: tags(&["Learning", "MusicProduction", "Consistency"]),
            professional_angle: Some("Educational philosophy".to_string()),
        }),
        tiktok: Some(TikTokContent {
            caption: "Course check-in. How's your progress? Drop it in the comments.".to_string(),
            hashtags: tags(&["producertok", "learning", "musicproducer"]),
            hook_line: "If you're taking one of my courses right now, this is for you".to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{firstName}}", "Student First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text).required(),
        TemplateVariable::new("{{courseName}}", "Course Name", VariableType::Text).required(),
        TemplateVariable::new("{{moduleName}}", "Completed Module Name", VariableType::Text).required(),
        TemplateVariable::new("{{progressPercent}}", "Progress Percentage", VariableType::Number)
            .required()
            .with_placeholder("40"),
        TemplateVariable::new("{{recap1}}", "Module Recap 1", VariableType::Text).required(),
        TemplateVariable::new("{{recap2}}", "Module Recap 2", VariableType::Text).required(),
        TemplateVariable::new("{{recap3}}", "Module Recap 3", VariableType::Text).required(),
        TemplateVariable::new("{{proTip}}", "Pro Tip Related to Module", VariableType::Text).required(),
        TemplateVariable::new("{{nextModuleName}}", "Next Module Name", VariableType::Text).required(),
        TemplateVariable::new("{{nextModuleTeaser}}", "Next Module Teaser", VariableType::Text)
            .required()
            .with_placeholder("how to create professional-sounding mixes"),
        TemplateVariable::new("{{courseUrl}}", "Course URL", VariableType::Url).required(),
    ];

    t.recommended_timing = timing(
        "Immediately after module completion",
        "General progress check-in posts",
        None,
    );
    t
}

pub fn certificate_earned() -> MarketingCampaignTemplate {
    let mut t = template(
        "certificate-earned",
        "Certificate Earned Recognition",
        "Recognize and celebrate certificate achievement",
        CampaignType::CourseMilestone,
        &["course"],
        "Award",
        EstimatedReach::High,
    );

    t.content = CampaignContent {
        email: Some(EmailContent {
            subject: "Your certificate is ready!".to_string(),
            preview_text: "You've earned it".to_string(),
            body: "<p>Hey {{firstName}},</p>\n\n\
                   <p>You've completed <strong>{{courseName}}</strong> and earned your certificate!</p>\n\n\
                   <p><a href=\"{{certificateUrl}}\">Download Your Certificate</a></p>\n\n\
                   <ul><li>{{achievement1}}</li><li>{{achievement2}}</li><li>{{achievement3}}</li></ul>\n\n\
                   <p>Share it and tag me at {{socialHandle}}.</p>\n\n\
                   <p>Keep going with {{recommendedCourse1}} or {{recommendedCourse2}}: <a href=\"{{storeUrl}}\">Browse More Courses</a></p>\n\n\
                   <p>Proud of you,<br>{{creatorName}}</p>"
                .to_string(),
            cta_text: "Download Your Certificate".to_string(),
            cta_url: "{{certificateUrl}}".to_string(),
        }),
        instagram: Some(InstagramContent {
            caption: "CERTIFICATES GOING OUT\n\n\
                      If you finished {{courseName}}, share your certificate in your stories and tag me!"
                .to_string(),
            hashtags: tags(&[
                "certificate",
                "musicproducer",
                "achievement",
                "producerlife",
                "coursecompletion",
                "levelup",
            ]),
            call_to_action: "Share your certificate and tag me".to_string(),
            suggested_image_style: Some("single".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: "Certificates going out to {{courseName}} graduates!\n\nIf you earned yours, share it and tag me."
                .to_string(),
            hashtags: tags(&["certified", "producer"]),
        }),
        facebook: Some(FacebookContent {
            post: "CERTIFICATES ARE READY!\n\n\
                   Everyone who completed {{courseName}} can download theirs now: {{achievement1}}, {{achievement2}}, {{achievement3}}."
                .to_string(),
            call_to_action: "Share your certificate".to_string(),
            suggested_image_style: None,
        }),
        linkedin: Some(LinkedInContent {
            post: "Congratulations to the latest graduates of {{courseName}}.\n\n\
                   Skills demonstrated: {{achievement1}}, {{achievement2}}, {{achievement3}}."
                .to_string(),
            hashtags: tags(&["Certification", "MusicProduction", "ProfessionalDevelopment"]),
            professional_angle: Some("Professional certification recognition".to_string()),
        }),
        tiktok: Some(TikTokContent {
            caption: "Certificates are ready! If you finished the course, go download yours.".to_string(),
            hashtags: tags(&["producertok", "certified", "musicproducer", "achievement"]),
            hook_line: "If you just completed my course, your certificate is waiting for you"
                .to_string(),
        }),
    };

    t.variables = vec![
        TemplateVariable::new("{{firstName}}", "Student First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text).required(),
        TemplateVariable::new("{{courseName}}", "Course Name", VariableType::Text).required(),
        TemplateVariable::new("{{certificateUrl}}", "Certificate Download URL", VariableType::Url)
            .required(),
        TemplateVariable::new("{{achievement1}}", "Achievement 1", VariableType::Text).required(),
        TemplateVariable::new("{{achievement2}}", "Achievement 2", VariableType::Text).required(),
        TemplateVariable::new("{{achievement3}}", "Achievement 3", VariableType::Text).required(),
        TemplateVariable::new("{{socialHandle}}", "Your Social Handle", VariableType::Text)
            .required()
            .with_placeholder("@yourname"),
        TemplateVariable::new("{{recommendedCourse1}}", "Recommended Course 1", VariableType::Text),
        TemplateVariable::new("{{recommendedCourse2}}", "Recommended Course 2", VariableType::Text),
        TemplateVariable::new("{{storeUrl}}", "Store URL", VariableType::Url),
    ];

    t.recommended_timing = timing(
        "Immediately when certificate is issued",
        "Weekly graduate recognition posts",
        None,
    );
    t
}

/// Shared shape of the storewide seasonal sales
struct SeasonalSale<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    icon: &'a str,
    reach: EstimatedReach,
    email: EmailContent,
    caption: &'a str,
    instagram_tags: &'a [&'a str],
    tweet: &'a str,
    twitter_tags: &'a [&'a str],
    facebook_post: &'a str,
    facebook_cta: &'a str,
    linkedin_post: &'a str,
    linkedin_tags: &'a [&'a str],
    linkedin_angle: &'a str,
    tiktok_caption: &'a str,
    tiktok_tags: &'a [&'a str],
    hook_line: &'a str,
}

fn seasonal_sale(sale: SeasonalSale<'_>) -> MarketingCampaignTemplate {
    let mut t = template(
        sale.id,
        sale.name,
        sale.description,
        CampaignType::SeasonalHoliday,
        &["sample_pack", "course", "preset_pack", "bundle"],
        sale.icon,
        sale.reach,
    );

    t.content = CampaignContent {
        email: Some(sale.email),
        instagram: Some(InstagramContent {
            caption: sale.caption.to_string(),
            hashtags: tags(sale.instagram_tags),
            call_to_action: "Link in bio".to_string(),
            suggested_image_style: Some("single".to_string()),
        }),
        twitter: Some(TwitterContent {
            tweet: sale.tweet.to_string(),
            hashtags: tags(sale.twitter_tags),
        }),
        facebook: Some(FacebookContent {
            post: sale.facebook_post.to_string(),
            call_to_action: sale.facebook_cta.to_string(),
            suggested_image_style: Some("single".to_string()),
        }),
        linkedin: Some(LinkedInContent {
            post: sale.linkedin_post.to_string(),
            hashtags: tags(sale.linkedin_tags),
            professional_angle: Some(sale.linkedin_angle.to_string()),
        }),
        tiktok: Some(TikTokContent {
            caption: sale.tiktok_caption.to_string(),
            hashtags: tags(sale.tiktok_tags),
            hook_line: sale.hook_line.to_string(),
        }),
    };
    t
}

fn sale_email(subject: &str, preview_text: &str, body: &str, cta: &str) -> EmailContent {
    EmailContent {
        subject: subject.to_string(),
        preview_text: preview_text.to_string(),
        body: body.to_string(),
        cta_text: cta.to_string(),
        cta_url: "{{storeUrl}}".to_string(),
    }
}

fn sale_code_variables(percent: &str, code: &str) -> Vec<TemplateVariable> {
    vec![
        TemplateVariable::new("{{firstName}}", "Recipient First Name", VariableType::Text)
            .with_default("there"),
        TemplateVariable::new("{{creatorName}}", "Your Name", VariableType::Text).required(),
        TemplateVariable::new("{{discountPercent}}", "Discount Percentage", VariableType::Discount)
            .required()
            .with_default(percent),
        TemplateVariable::new("{{discountCode}}", "Discount Code", VariableType::Text)
            .required()
            .with_default(code),
        TemplateVariable::new("{{storeUrl}}", "Store URL", VariableType::Url).required(),
    ]
}

pub fn new_year_sale() -> MarketingCampaignTemplate {
    let mut t = seasonal_sale(SeasonalSale {
        id: "new-year-sale",
        name: "New Year Sale",
        description: "Ring in the new year with a fresh start",
        icon: "Sparkles",
        reach: EstimatedReach::High,
        email: sale_email(
            "New year, new sounds: {{discountPercent}}% off",
            "Start {{year}} with fresh sounds",
            "<p>Hey {{firstName}},</p>\n\n\
             <p>Happy New Year! {{year}} is here, and it's time to level up.</p>\n\n\
             <p><strong>{{discountPercent}}% OFF</strong> all sample packs, presets, and courses with code <strong>{{discountCode}}</strong>.</p>\n\n\
             <p><strong>My New Year challenge to you:</strong> {{challenge}}</p>\n\n\
             <p><a href=\"{{storeUrl}}\">Start the Year Right</a></p>\n\n\
             <p>Here's to a creative {{year}},<br>{{creatorName}}</p>",
            "Start the Year Right",
        ),
        caption: "NEW YEAR SALE\n\n{{year}} is here. Time to level up.\n\n\
                  {{discountPercent}}% off everything. Code: {{discountCode}}\n\n\
                  What's your production goal for this year?\n\nLink in bio.",
        instagram_tags: &["newyear", "newyearsale", "musicproducer", "producerlife", "producergoals"],
        tweet: "New year, new sounds.\n\n{{discountPercent}}% off everything.\n\nCode: {{discountCode}}\n\n{{storeUrl}}",
        twitter_tags: &["newyear", "producer"],
        facebook_post: "HAPPY NEW YEAR!\n\n{{discountPercent}}% off everything with code {{discountCode}}.\n\n\
                        My challenge to you: {{challenge}}\n\n{{storeUrl}}",
        facebook_cta: "Shop New Year Sale",
        linkedin_post: "Welcome to {{year}}.\n\nFor producers investing in their craft this year: \
                        {{discountPercent}}% off all resources.\n\n{{storeUrl}}",
        linkedin_tags: &["NewYear", "MusicProduction", "Goals"],
        linkedin_angle: "Year-start professional development",
        tiktok_caption: "New year sale. {{discountPercent}}% off everything. What's your production goal for {{year}}?",
        tiktok_tags: &["newyear", "producertok", "musicproducer", "newyearsale"],
        hook_line: "It's a new year and here's how to start it right as a producer",
    });

    t.variables = sale_code_variables("30", "NEWYEAR");
    t.variables.extend([
        TemplateVariable::new("{{year}}", "Year", VariableType::Text)
            .required()
            .with_default("2025"),
        TemplateVariable::new("{{challenge}}", "New Year Challenge", VariableType::Text)
            .required()
            .with_placeholder("Finish one full track in January"),
    ]);
    t.recommended_timing = timing("January 1st morning", "New Year's Eve and January 1st", None);
    t
}

pub fn summer_sale() -> MarketingCampaignTemplate {
    let mut t = seasonal_sale(SeasonalSale {
        id: "summer-sale",
        name: "Summer Sale",
        description: "Hot deals for the summer season",
        icon: "Sun",
        reach: EstimatedReach::Medium,
        email: sale_email(
            "Summer sale: {{discountPercent}}% off",
            "Hot sounds for the summer",
            "<p>Hey {{firstName}},</p>\n\n\
             <p>Summer is here, time to make some heat.</p>\n\n\
             <p><strong>{{discountPercent}}% OFF</strong> everything with code <strong>{{discountCode}}</strong>.</p>\n\n\
             <ul><li>{{featured1}}</li><li>{{featured2}}</li><li>{{featured3}}</li></ul>\n\n\
             <p><a href=\"{{storeUrl}}\">Shop Summer Sale</a></p>\n\n\
             <p>Stay cool, make heat,<br>{{creatorName}}</p>",
            "Shop Summer Sale",
        ),
        caption: "SUMMER SALE\n\n{{discountPercent}}% off everything.\n\nCode: {{discountCode}}\n\nLink in bio.",
        instagram_tags: &["summersale", "summer", "musicproducer", "beatmaker", "summervibes"],
        tweet: "Summer sale\n\n{{discountPercent}}% off everything\n\nCode: {{discountCode}}\n\n{{storeUrl}}",
        twitter_tags: &["summersale", "producer"],
        facebook_post: "SUMMER SALE\n\n{{discountPercent}}% off all sample packs, presets, and courses.\n\n\
                        Use code: {{discountCode}}\n\n{{storeUrl}}",
        facebook_cta: "Shop the Sale",
        linkedin_post: "Summer sale: {{discountPercent}}% off all production resources.\n\n\
                        Use code {{discountCode}} at {{storeUrl}}",
        linkedin_tags: &["SummerSale", "MusicProduction"],
        linkedin_angle: "Seasonal professional investment",
        tiktok_caption: "Summer sale. {{discountPercent}}% off. Code: {{discountCode}}. Link in bio.",
        tiktok_tags: &["summersale", "producertok", "musicproducer", "summer"],
        hook_line: "Summer sale on all my sounds and courses",
    });

    t.variables = sale_code_variables("25", "SUMMER");
    t.variables.extend([
        TemplateVariable::new("{{featured1}}", "Featured Item 1", VariableType::Text).required(),
        TemplateVariable::new("{{featured2}}", "Featured Item 2", VariableType::Text).required(),
        TemplateVariable::new("{{featured3}}", "Featured Item 3", VariableType::Text).required(),
    ]);
    t.recommended_timing = timing("Late June or early July", "Throughout summer", None);
    t
}

pub fn anniversary_birthday() -> MarketingCampaignTemplate {
    let mut t = seasonal_sale(SeasonalSale {
        id: "anniversary-birthday",
        name: "Anniversary / Birthday Sale",
        description: "Celebrate your store or brand anniversary",
        icon: "Cake",
        reach: EstimatedReach::Medium,
        email: sale_email(
            "{{years}} years! {{discountPercent}}% off to celebrate",
            "It's our anniversary",
            "<p>Hey {{firstName}},</p>\n\n\
             <p><strong>{{years}} YEARS!</strong> From {{startingPoint}} to now, you are the reason I'm still here.</p>\n\n\
             <p><strong>{{discountPercent}}% off</strong> everything for 48 hours with code <strong>{{discountCode}}</strong>.</p>\n\n\
             <ul><li>{{milestone1}}</li><li>{{milestone2}}</li><li>{{milestone3}}</li></ul>\n\n\
             <p><a href=\"{{storeUrl}}\">Celebrate With Me</a></p>\n\n\
             <p>Here's to {{years}} more,<br>{{creatorName}}</p>",
            "Celebrate With Me",
        ),
        caption: "{{years}} YEARS\n\nFrom {{startingPoint}} to now - what a journey.\n\n\
                  {{discountPercent}}% off everything for 48 hours. Code: {{discountCode}}\n\nLink in bio.",
        instagram_tags: &["anniversary", "celebration", "musicproducer", "thankyou", "milestone"],
        tweet: "{{years}} years of making sounds and building this community.\n\n\
                {{discountPercent}}% off everything for 48 hours.\n\nCode: {{discountCode}}\n\n{{storeUrl}}",
        twitter_tags: &["anniversary", "thankyou"],
        facebook_post: "{{years}} YEARS!\n\nFrom {{startingPoint}} to now, it's been incredible.\n\n\
                        {{discountPercent}}% off everything for 48 hours with code {{discountCode}}.\n\n\
                        Milestones: {{milestone1}}, {{milestone2}}, {{milestone3}}.\n\n{{storeUrl}}",
        facebook_cta: "Celebrate With Me",
        linkedin_post: "Celebrating {{years}} years in music production education, starting from {{startingPoint}}.\n\n\
                        To mark the occasion: {{discountPercent}}% off all resources for 48 hours.\n\n{{storeUrl}}",
        linkedin_tags: &["Anniversary", "MusicProduction", "Milestone"],
        linkedin_angle: "Business milestone celebration",
        tiktok_caption: "{{years}} years! {{discountPercent}}% off everything to celebrate.",
        tiktok_tags: &["anniversary", "producertok", "musicproducer", "thankyou"],
        hook_line: "I just hit a big milestone and I want to celebrate with you",
    });

    t.variables = sale_code_variables("30", "ANNIVERSARY");
    t.variables.extend([
        TemplateVariable::new("{{years}}", "Number of Years", VariableType::Number).required(),
        TemplateVariable::new("{{startingPoint}}", "Where You Started", VariableType::Text)
            .required()
            .with_placeholder("making beats in my bedroom"),
        TemplateVariable::new("{{milestone1}}", "Milestone 1", VariableType::Text).required(),
        TemplateVariable::new("{{milestone2}}", "Milestone 2", VariableType::Text).required(),
        TemplateVariable::new("{{milestone3}}", "Milestone 3", VariableType::Text).required(),
    ]);
    t.recommended_timing = timing(
        "Morning of anniversary date",
        "Day before and day of anniversary",
        None,
    );
    t
}

pub fn back_to_school() -> MarketingCampaignTemplate {
    let mut t = seasonal_sale(SeasonalSale {
        id: "back-to-school",
        name: "Back to School Sale",
        description: "Fall learning season promotion",
        icon: "BookOpen",
        reach: EstimatedReach::Medium,
        email: sale_email(
            "Back to school: {{discountPercent}}% off courses",
            "Time to level up your skills",
            "<p>Hey {{firstName}},</p>\n\n\
             <p>School's back in session, and that includes producer school.</p>\n\n\
             <p><strong>{{discountPercent}}% OFF</strong> all courses with code <strong>{{discountCode}}</strong>.</p>\n\n\
             <ul><li>{{topic1}}</li><li>{{topic2}}</li><li>{{topic3}}</li></ul>\n\n\
             <p><a href=\"{{storeUrl}}\">Start Learning</a></p>\n\n\
             <p>Class is in session,<br>{{creatorName}}</p>",
            "Start Learning",
        ),
        caption: "BACK TO SCHOOL\n\nNot that kind of school - producer school.\n\n\
                  {{discountPercent}}% off all courses. Code: {{discountCode}}\n\nLink in bio.",
        instagram_tags: &["backtoschool", "learning", "musicproducer", "musiccourse", "learnmusic"],
        tweet: "Back to school - producer edition.\n\n{{discountPercent}}% off all courses.\n\n\
                Code: {{discountCode}}\n\n{{storeUrl}}",
        twitter_tags: &["backtoschool", "producer"],
        facebook_post: "BACK TO SCHOOL SALE\n\n{{discountPercent}}% off all courses.\n\n\
                        Learn {{topic1}}, {{topic2}} and {{topic3}}.\n\nUse code: {{discountCode}}\n\n{{storeUrl}}",
        facebook_cta: "Start Learning",
        linkedin_post: "Back to school season: {{discountPercent}}% off all music production courses.\n\n\
                        Topics include {{topic1}}, {{topic2}} and {{topic3}}.\n\n\
                        Use code {{discountCode}} at {{storeUrl}}",
        linkedin_tags: &["BackToSchool", "ProfessionalDevelopment", "MusicProduction"],
        linkedin_angle: "Professional skill development",
        tiktok_caption: "Back to school sale. {{discountPercent}}% off courses.",
        tiktok_tags: &["backtoschool", "producertok", "musicproducer", "learning"],
        hook_line: "Back to school but make it producer school",
    });

    t.variables = sale_code_variables("25", "BACKTOSCHOOL");
    t.variables.extend([
        TemplateVariable::new("{{topic1}}", "Course Topic 1", VariableType::Text).required(),
        TemplateVariable::new("{{topic2}}", "Course Topic 2", VariableType::Text).required(),
        TemplateVariable::new("{{topic3}}", "Course Topic 3", VariableType::Text).required(),
    ]);
    t.recommended_timing = timing("Late August / Early September", "Back to school season", None);
    t
}

/// Every built-in template
pub fn builtin_templates() -> Vec<MarketingCampaignTemplate> {
    vec![
        sample_pack_launch(),
        course_launch(),
        preset_pack_launch(),
        bundle_launch(),
        black_friday(),
        new_year_sale(),
        summer_sale(),
        anniversary_birthday(),
        back_to_school(),
        course_completion(),
        module_completion(),
        certificate_earned(),
    ]
}

/// Load templates from a JSON file holding an array of templates
pub fn load_catalog_file(path: impl AsRef<Path>) -> TemplateResult<Vec<MarketingCampaignTemplate>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| TemplateError::CatalogLoad(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| TemplateError::CatalogLoad(format!("{}: {}", path.display(), e)))
}

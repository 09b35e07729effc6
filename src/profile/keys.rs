pub const ONBOARDING_KEY: &str = "@onboarding_completed";

pub const USER_FIRST_NAME_KEY: &str = "@user_first_name";
pub const USER_LAST_NAME_KEY: &str = "@user_last_name";
pub const USER_EMAIL_KEY: &str = "@user_email";
pub const USER_PHONE_KEY: &str = "@user_phone";
pub const USER_AVATAR_KEY: &str = "@user_avatar";

pub const NOTIFY_ORDER_STATUSES_KEY: &str = "@notify_order_statuses";
pub const NOTIFY_PASSWORD_CHANGES_KEY: &str = "@notify_password_changes";
pub const NOTIFY_SPECIAL_OFFERS_KEY: &str = "@notify_special_offers";
pub const NOTIFY_NEWSLETTER_KEY: &str = "@notify_newsletter";

/// Every profile field. Logout removes these plus [`ONBOARDING_KEY`].
pub const PROFILE_KEYS: [&str; 9] = [
    USER_FIRST_NAME_KEY,
    USER_LAST_NAME_KEY,
    USER_EMAIL_KEY,
    USER_PHONE_KEY,
    USER_AVATAR_KEY,
    NOTIFY_ORDER_STATUSES_KEY,
    NOTIFY_PASSWORD_CHANGES_KEY,
    NOTIFY_SPECIAL_OFFERS_KEY,
    NOTIFY_NEWSLETTER_KEY,
];

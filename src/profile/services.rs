use tracing::{info, instrument};

use super::dto::{initials, HeaderInfo, NotificationPrefs, UserProfile};
use super::keys::*;
use crate::error::StoreError;
use crate::storage::KeyValueStore;

pub async fn is_onboarding_completed(kv: &dyn KeyValueStore) -> Result<bool, StoreError> {
    Ok(kv.get(ONBOARDING_KEY).await?.as_deref() == Some("true"))
}

#[instrument(skip_all)]
pub async fn complete_onboarding(
    kv: &dyn KeyValueStore,
    first_name: &str,
    email: &str,
) -> Result<(), StoreError> {
    kv.set(ONBOARDING_KEY, "true").await?;
    kv.set(USER_FIRST_NAME_KEY, first_name.trim()).await?;
    kv.set(USER_EMAIL_KEY, email.trim()).await?;
    info!("onboarding completed");
    Ok(())
}

pub async fn load_profile(kv: &dyn KeyValueStore) -> Result<UserProfile, StoreError> {
    let text = |v: Option<String>| v.unwrap_or_default();
    Ok(UserProfile {
        first_name: text(kv.get(USER_FIRST_NAME_KEY).await?),
        last_name: text(kv.get(USER_LAST_NAME_KEY).await?),
        email: text(kv.get(USER_EMAIL_KEY).await?),
        phone: text(kv.get(USER_PHONE_KEY).await?),
        avatar: kv.get(USER_AVATAR_KEY).await?.filter(|a| !a.is_empty()),
        notifications: NotificationPrefs {
            order_statuses: kv.get_bool(NOTIFY_ORDER_STATUSES_KEY).await?,
            password_changes: kv.get_bool(NOTIFY_PASSWORD_CHANGES_KEY).await?,
            special_offers: kv.get_bool(NOTIFY_SPECIAL_OFFERS_KEY).await?,
            newsletter: kv.get_bool(NOTIFY_NEWSLETTER_KEY).await?,
        },
    })
}

/// Writes every field. A missing avatar removes the stored one.
#[instrument(skip(kv, profile))]
pub async fn save_profile(kv: &dyn KeyValueStore, profile: &UserProfile) -> Result<(), StoreError> {
    kv.set(USER_FIRST_NAME_KEY, profile.first_name.trim()).await?;
    kv.set(USER_LAST_NAME_KEY, profile.last_name.trim()).await?;
    kv.set(USER_EMAIL_KEY, profile.email.trim()).await?;
    kv.set(USER_PHONE_KEY, profile.phone.trim()).await?;
    match &profile.avatar {
        Some(uri) => kv.set(USER_AVATAR_KEY, uri).await?,
        None => kv.remove(USER_AVATAR_KEY).await?,
    }

    let n = profile.notifications;
    kv.set_bool(NOTIFY_ORDER_STATUSES_KEY, n.order_statuses).await?;
    kv.set_bool(NOTIFY_PASSWORD_CHANGES_KEY, n.password_changes).await?;
    kv.set_bool(NOTIFY_SPECIAL_OFFERS_KEY, n.special_offers).await?;
    kv.set_bool(NOTIFY_NEWSLETTER_KEY, n.newsletter).await?;
    info!("profile saved");
    Ok(())
}

pub async fn remove_avatar(kv: &dyn KeyValueStore) -> Result<(), StoreError> {
    kv.remove(USER_AVATAR_KEY).await
}

#[instrument(skip(kv))]
pub async fn logout(kv: &dyn KeyValueStore) -> Result<(), StoreError> {
    let mut keys: Vec<&str> = PROFILE_KEYS.to_vec();
    keys.push(ONBOARDING_KEY);
    kv.remove_many(&keys).await?;
    info!("logged out");
    Ok(())
}

pub async fn load_header(kv: &dyn KeyValueStore) -> Result<HeaderInfo, StoreError> {
    let first = kv.get(USER_FIRST_NAME_KEY).await?.unwrap_or_default();
    let last = kv.get(USER_LAST_NAME_KEY).await?.unwrap_or_default();
    let avatar = kv.get(USER_AVATAR_KEY).await?.filter(|a| !a.is_empty());
    Ok(HeaderInfo {
        avatar,
        initials: initials(&first, &last),
    })
}

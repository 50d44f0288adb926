use crate::storage::KvStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

const KEY_THEME: &str = "theme";
const KEY_LANGUAGE: &str = "language";
const KEY_USER_NAME: &str = "user_name";
const KEY_USER_DOB: &str = "user_dob";
const KEY_AVATAR: &str = "avatar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Arabic,
    English,
    French,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
            Self::French => "fr",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ar" => Some(Self::Arabic),
            "en" => Some(Self::English),
            "fr" => Some(Self::French),
            _ => None,
        }
    }

    /// Initial language when nothing is persisted yet: the system locale
    /// if it is one we ship, Arabic otherwise.
    fn from_locale() -> Self {
        sys_locale::get_locale()
            .and_then(|l| Self::parse(l.get(..2).unwrap_or_default()))
            .unwrap_or(Self::Arabic)
    }
}

struct ProfileState {
    theme: Theme,
    language: Language,
    user_name: String,
    user_dob: String,
    avatar: Option<String>,
}

/// Settings and profile service. Constructed once at startup from the
/// persistence boundary and injected into everything that needs it; every
/// setter writes through to storage.
pub struct ProfileService {
    kv: Arc<dyn KvStore>,
    state: RwLock<ProfileState>,
}

impl ProfileService {
    pub async fn load(kv: Arc<dyn KvStore>) -> Result<Arc<Self>> {
        let theme = kv
            .get(KEY_THEME)
            .await
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default();
        let language = match kv.get(KEY_LANGUAGE).await.and_then(|s| Language::parse(&s)) {
            Some(lang) => lang,
            None => Language::from_locale(),
        };
        let user_name = kv.get(KEY_USER_NAME).await.unwrap_or_default();
        let user_dob = kv.get(KEY_USER_DOB).await.unwrap_or_default();
        let avatar = kv.get(KEY_AVATAR).await;

        info!(
            language = language.as_str(),
            theme = theme.as_str(),
            profile_active = !user_name.trim().is_empty(),
            "profile loaded"
        );

        Ok(Arc::new(Self {
            kv,
            state: RwLock::new(ProfileState {
                theme,
                language,
                user_name,
                user_dob,
                avatar,
            }),
        }))
    }

    pub async fn theme(&self) -> Theme {
        self.state.read().await.theme
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.state.write().await.theme = theme;
        self.kv.set(KEY_THEME, theme.as_str()).await
    }

    pub async fn language(&self) -> Language {
        self.state.read().await.language
    }

    pub async fn set_language(&self, language: Language) -> Result<()> {
        self.state.write().await.language = language;
        self.kv.set(KEY_LANGUAGE, language.as_str()).await
    }

    pub async fn user_name(&self) -> String {
        self.state.read().await.user_name.clone()
    }

    pub async fn set_user_name(&self, name: &str) -> Result<()> {
        self.state.write().await.user_name = name.to_string();
        self.kv.set(KEY_USER_NAME, name).await
    }

    pub async fn user_dob(&self) -> String {
        self.state.read().await.user_dob.clone()
    }

    pub async fn set_user_dob(&self, dob: &str) -> Result<()> {
        self.state.write().await.user_dob = dob.to_string();
        self.kv.set(KEY_USER_DOB, dob).await
    }

    pub async fn avatar(&self) -> Option<String> {
        self.state.read().await.avatar.clone()
    }

    /// `None` clears the avatar and removes its key entirely.
    pub async fn set_avatar(&self, avatar: Option<&str>) -> Result<()> {
        self.state.write().await.avatar = avatar.map(str::to_string);
        match avatar {
            Some(id) => self.kv.set(KEY_AVATAR, id).await,
            None => self.kv.remove(KEY_AVATAR).await,
        }
    }

    /// The history gate: a profile is active once a non-empty user name
    /// has been saved.
    pub async fn is_active(&self) -> bool {
        !self.state.read().await.user_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStore;

    #[tokio::test]
    async fn defaults_without_persisted_state() {
        let profile = ProfileService::load(Arc::new(MemStore::new())).await.unwrap();
        assert_eq!(profile.theme().await, Theme::Dark);
        assert!(!profile.is_active().await);
        assert_eq!(profile.avatar().await, None);
    }

    #[tokio::test]
    async fn setters_write_through() {
        let kv = Arc::new(MemStore::new());
        let profile = ProfileService::load(kv.clone()).await.unwrap();

        profile.set_user_name("Sara").await.unwrap();
        profile.set_language(Language::French).await.unwrap();
        profile.set_theme(Theme::Light).await.unwrap();
        assert!(profile.is_active().await);
        assert_eq!(kv.get("user_name").await.as_deref(), Some("Sara"));
        assert_eq!(kv.get("language").await.as_deref(), Some("fr"));
        assert_eq!(kv.get("theme").await.as_deref(), Some("light"));

        // A fresh service sees the persisted values.
        let reloaded = ProfileService::load(kv.clone()).await.unwrap();
        assert_eq!(reloaded.language().await, Language::French);
        assert_eq!(reloaded.user_name().await, "Sara");
    }

    #[tokio::test]
    async fn whitespace_name_does_not_activate_profile() {
        let profile = ProfileService::load(Arc::new(MemStore::new())).await.unwrap();
        profile.set_user_name("   ").await.unwrap();
        assert!(!profile.is_active().await);
    }

    #[tokio::test]
    async fn clearing_avatar_removes_the_key() {
        let kv = Arc::new(MemStore::new());
        let profile = ProfileService::load(kv.clone()).await.unwrap();
        profile.set_avatar(Some("3")).await.unwrap();
        assert_eq!(kv.get("avatar").await.as_deref(), Some("3"));
        profile.set_avatar(None).await.unwrap();
        assert_eq!(kv.get("avatar").await, None);
    }
}

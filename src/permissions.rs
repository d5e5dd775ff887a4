//! Permission Scopes
//!
//! The closed set of grantable capabilities. Scope strings are the canonical
//! wire and storage representation: new scopes may be appended, existing ones
//! must never be renamed or reused.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single grantable capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PermissionScope {
    /// Play, pause, stop, next and previous.
    #[serde(rename = "player.control")]
    PlayerControl,

    /// Adjust volume.
    #[serde(rename = "player.volume")]
    PlayerVolume,

    /// Add to and remove from the queue.
    #[serde(rename = "player.queue")]
    PlayerQueue,

    /// Power players on and off.
    #[serde(rename = "player.power")]
    PlayerPower,

    /// View player status.
    #[serde(rename = "player.view")]
    PlayerView,

    /// Browse and search the library.
    #[serde(rename = "library.read")]
    LibraryRead,

    /// Add and edit library items.
    #[serde(rename = "library.write")]
    LibraryWrite,

    /// Delete library items.
    #[serde(rename = "library.delete")]
    LibraryDelete,

    /// View playlists.
    #[serde(rename = "playlist.read")]
    PlaylistRead,

    /// Create and edit playlists.
    #[serde(rename = "playlist.write")]
    PlaylistWrite,

    /// Delete playlists.
    #[serde(rename = "playlist.delete")]
    PlaylistDelete,

    /// View provider status.
    #[serde(rename = "provider.view")]
    ProviderView,

    /// Configure providers.
    #[serde(rename = "provider.manage")]
    ProviderManage,

    /// Modify system settings.
    #[serde(rename = "system.settings")]
    SystemSettings,

    /// Full system administration. Implies every other scope.
    #[serde(rename = "system.admin")]
    SystemAdmin,

    /// View users.
    #[serde(rename = "user.read")]
    UserRead,

    /// Create and edit users.
    #[serde(rename = "user.write")]
    UserWrite,

    /// Delete users.
    #[serde(rename = "user.delete")]
    UserDelete,
}

impl PermissionScope {
    /// Every scope in declaration order.
    pub const ALL: [Self; 18] = [
        Self::PlayerControl,
        Self::PlayerVolume,
        Self::PlayerQueue,
        Self::PlayerPower,
        Self::PlayerView,
        Self::LibraryRead,
        Self::LibraryWrite,
        Self::LibraryDelete,
        Self::PlaylistRead,
        Self::PlaylistWrite,
        Self::PlaylistDelete,
        Self::ProviderView,
        Self::ProviderManage,
        Self::SystemSettings,
        Self::SystemAdmin,
        Self::UserRead,
        Self::UserWrite,
        Self::UserDelete,
    ];

    /// Canonical dotted string for this scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerControl => "player.control",
            Self::PlayerVolume => "player.volume",
            Self::PlayerQueue => "player.queue",
            Self::PlayerPower => "player.power",
            Self::PlayerView => "player.view",
            Self::LibraryRead => "library.read",
            Self::LibraryWrite => "library.write",
            Self::LibraryDelete => "library.delete",
            Self::PlaylistRead => "playlist.read",
            Self::PlaylistWrite => "playlist.write",
            Self::PlaylistDelete => "playlist.delete",
            Self::ProviderView => "provider.view",
            Self::ProviderManage => "provider.manage",
            Self::SystemSettings => "system.settings",
            Self::SystemAdmin => "system.admin",
            Self::UserRead => "user.read",
            Self::UserWrite => "user.write",
            Self::UserDelete => "user.delete",
        }
    }

    /// Domain this scope is grouped under.
    #[must_use]
    pub const fn domain(self) -> PermissionDomain {
        match self {
            Self::PlayerControl
            | Self::PlayerVolume
            | Self::PlayerQueue
            | Self::PlayerPower
            | Self::PlayerView => PermissionDomain::Player,
            Self::LibraryRead | Self::LibraryWrite | Self::LibraryDelete => {
                PermissionDomain::Library
            }
            Self::PlaylistRead | Self::PlaylistWrite | Self::PlaylistDelete => {
                PermissionDomain::Playlist
            }
            Self::ProviderView | Self::ProviderManage => PermissionDomain::Provider,
            Self::SystemSettings | Self::SystemAdmin => PermissionDomain::System,
            Self::UserRead | Self::UserWrite | Self::UserDelete => PermissionDomain::User,
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerControl => "Control players",
            Self::PlayerVolume => "Change volume",
            Self::PlayerQueue => "Manage queue",
            Self::PlayerPower => "Power players",
            Self::PlayerView => "View players",
            Self::LibraryRead => "Read library",
            Self::LibraryWrite => "Edit library",
            Self::LibraryDelete => "Delete library items",
            Self::PlaylistRead => "Read playlists",
            Self::PlaylistWrite => "Edit playlists",
            Self::PlaylistDelete => "Delete playlists",
            Self::ProviderView => "View providers",
            Self::ProviderManage => "Manage providers",
            Self::SystemSettings => "Change settings",
            Self::SystemAdmin => "Administer system",
            Self::UserRead => "View users",
            Self::UserWrite => "Edit users",
            Self::UserDelete => "Delete users",
        }
    }

    /// Longer description of what the scope allows.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PlayerControl => "Play, pause, stop, next and previous",
            Self::PlayerVolume => "Adjust player volume",
            Self::PlayerQueue => "Add items to and remove items from player queues",
            Self::PlayerPower => "Turn players on and off",
            Self::PlayerView => "View player status",
            Self::LibraryRead => "Browse and search the library",
            Self::LibraryWrite => "Add and edit library items",
            Self::LibraryDelete => "Delete library items",
            Self::PlaylistRead => "View playlists",
            Self::PlaylistWrite => "Create and edit playlists",
            Self::PlaylistDelete => "Delete playlists",
            Self::ProviderView => "View provider status",
            Self::ProviderManage => "Configure providers",
            Self::SystemSettings => "Modify system settings",
            Self::SystemAdmin => "Full system administration",
            Self::UserRead => "View users",
            Self::UserWrite => "Create and edit users",
            Self::UserDelete => "Delete users",
        }
    }

    /// Iterate the scopes belonging to `domain`.
    pub fn in_domain(domain: PermissionDomain) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |scope| scope.domain() == domain)
    }
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionScope {
    type Err = UnknownScopeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == value)
            .ok_or_else(|| UnknownScopeError(value.to_string()))
    }
}

impl TryFrom<&str> for PermissionScope {
    type Error = UnknownScopeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A candidate string did not match any registered scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission scope: {0}")]
pub struct UnknownScopeError(pub String);

/// Scope grouping, taken from the prefix of the scope string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDomain {
    /// `player.*`
    Player,

    /// `library.*`
    Library,

    /// `playlist.*`
    Playlist,

    /// `provider.*`
    Provider,

    /// `system.*`
    System,

    /// `user.*`
    User,
}

impl PermissionDomain {
    /// Domain prefix as used in scope strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Library => "library",
            Self::Playlist => "playlist",
            Self::Provider => "provider",
            Self::System => "system",
            Self::User => "user",
        }
    }
}

impl fmt::Display for PermissionDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input accepted by permission checks.
///
/// Resolution never fails loudly: anything that does not name a registered
/// scope resolves to `None`, which every check treats as "not permitted".
pub trait ScopeQuery {
    /// Resolve to a registered scope, if any.
    fn resolve_scope(self) -> Option<PermissionScope>;
}

impl ScopeQuery for PermissionScope {
    fn resolve_scope(self) -> Option<PermissionScope> {
        Some(self)
    }
}

impl ScopeQuery for &PermissionScope {
    fn resolve_scope(self) -> Option<PermissionScope> {
        Some(*self)
    }
}

impl ScopeQuery for &str {
    fn resolve_scope(self) -> Option<PermissionScope> {
        self.parse().ok()
    }
}

impl ScopeQuery for String {
    fn resolve_scope(self) -> Option<PermissionScope> {
        self.as_str().resolve_scope()
    }
}

impl ScopeQuery for &String {
    fn resolve_scope(self) -> Option<PermissionScope> {
        self.as_str().resolve_scope()
    }
}

impl<T: ScopeQuery> ScopeQuery for Option<T> {
    fn resolve_scope(self) -> Option<PermissionScope> {
        self.and_then(ScopeQuery::resolve_scope)
    }
}

/// Catalog entry describing a single permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Stable identifier for the entry.
    pub permission_id: String,

    /// Scope this entry describes.
    pub scope: PermissionScope,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Time the entry was recorded.
    pub created_at: Timestamp,
}

impl Permission {
    /// Build a catalog entry for `scope`, keyed by its scope string.
    #[must_use]
    pub fn for_scope(scope: PermissionScope, created_at: Timestamp) -> Self {
        Self {
            permission_id: scope.as_str().to_string(),
            scope,
            name: scope.label().to_string(),
            description: scope.description().to_string(),
            created_at,
        }
    }

    /// One catalog entry per registered scope, in declaration order.
    #[must_use]
    pub fn catalog(created_at: Timestamp) -> Vec<Self> {
        PermissionScope::ALL
            .into_iter()
            .map(|scope| Self::for_scope(scope, created_at))
            .collect()
    }
}

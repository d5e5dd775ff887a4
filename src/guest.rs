//! Guest Access
//!
//! Guest access is exposed through a dedicated URL and token instead of a full
//! login. [`GuestAccessInfo`] is a read-only snapshot of the current guest
//! configuration; a disabled snapshot never carries a URL, a token or any
//! capability, whatever was configured before.

use serde::{Deserialize, Serialize};

use crate::{permissions::PermissionScope, roles::Role};

/// Capability flags granted to guests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestCapabilities {
    /// Start playback of library items.
    pub can_play_media: bool,

    /// Add to and reorder the queue.
    pub can_control_queue: bool,

    /// Play, pause, skip.
    pub can_control_playback: bool,

    /// Change volume.
    pub can_control_volume: bool,
}

impl GuestCapabilities {
    /// No capabilities.
    pub const NONE: Self = Self {
        can_play_media: false,
        can_control_queue: false,
        can_control_playback: false,
        can_control_volume: false,
    };

    /// Derive the flags a role would grant.
    ///
    /// Playing media needs both queue access and library read access; the other
    /// flags map onto a single player scope each.
    #[must_use]
    pub fn from_role(role: &Role) -> Self {
        Self {
            can_play_media: role.has_permission(PermissionScope::PlayerQueue)
                && role.has_permission(PermissionScope::LibraryRead),
            can_control_queue: role.has_permission(PermissionScope::PlayerQueue),
            can_control_playback: role.has_permission(PermissionScope::PlayerControl),
            can_control_volume: role.has_permission(PermissionScope::PlayerVolume),
        }
    }

    /// Whether any flag is set.
    #[must_use]
    pub const fn any(self) -> bool {
        self.can_play_media
            || self.can_control_queue
            || self.can_control_playback
            || self.can_control_volume
    }
}

/// Guest access settings as configured by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestAccessConfig {
    /// Master switch.
    pub enabled: bool,

    /// Public guest URL.
    pub url: Option<String>,

    /// Guest token handed out with the URL.
    pub token: Option<String>,

    /// Capabilities granted while enabled.
    pub capabilities: GuestCapabilities,

    /// Players guests may control. Empty means all.
    pub player_filter: Vec<String>,

    /// Providers guests may browse. Empty means all.
    pub provider_filter: Vec<String>,
}

impl GuestAccessConfig {
    /// Current read-only view of these settings.
    #[must_use]
    pub fn snapshot(&self) -> GuestAccessInfo {
        if !self.enabled {
            return GuestAccessInfo::disabled();
        }

        GuestAccessInfo::enabled(self.url.clone(), self.token.clone(), self.capabilities)
            .with_filters(self.player_filter.clone(), self.provider_filter.clone())
    }
}

/// Snapshot of the guest access state handed to API and UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GuestAccessRecord")]
pub struct GuestAccessInfo {
    enabled: bool,
    guest_url: Option<String>,
    guest_token: Option<String>,
    can_play_media: bool,
    can_control_queue: bool,
    can_control_playback: bool,
    can_control_volume: bool,
    player_filter: Vec<String>,
    provider_filter: Vec<String>,
}

impl GuestAccessInfo {
    /// Snapshot of disabled guest access.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            guest_url: None,
            guest_token: None,
            can_play_media: false,
            can_control_queue: false,
            can_control_playback: false,
            can_control_volume: false,
            player_filter: Vec::new(),
            provider_filter: Vec::new(),
        }
    }

    /// Snapshot of enabled guest access with no filters.
    #[must_use]
    pub fn enabled(
        guest_url: Option<String>,
        guest_token: Option<String>,
        capabilities: GuestCapabilities,
    ) -> Self {
        Self {
            enabled: true,
            guest_url,
            guest_token,
            can_play_media: capabilities.can_play_media,
            can_control_queue: capabilities.can_control_queue,
            can_control_playback: capabilities.can_control_playback,
            can_control_volume: capabilities.can_control_volume,
            player_filter: Vec::new(),
            provider_filter: Vec::new(),
        }
    }

    /// Restrict the players and providers guests see. No effect when disabled.
    #[must_use]
    pub fn with_filters(mut self, player_filter: Vec<String>, provider_filter: Vec<String>) -> Self {
        if self.enabled {
            self.player_filter = player_filter;
            self.provider_filter = provider_filter;
        }

        self
    }

    /// Whether guest access is on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Guest URL, only while enabled.
    #[must_use]
    pub fn guest_url(&self) -> Option<&str> {
        self.guest_url.as_deref()
    }

    /// Guest token, only while enabled.
    #[must_use]
    pub fn guest_token(&self) -> Option<&str> {
        self.guest_token.as_deref()
    }

    /// Granted capability flags.
    #[must_use]
    pub const fn capabilities(&self) -> GuestCapabilities {
        GuestCapabilities {
            can_play_media: self.can_play_media,
            can_control_queue: self.can_control_queue,
            can_control_playback: self.can_control_playback,
            can_control_volume: self.can_control_volume,
        }
    }

    /// Player filter.
    #[must_use]
    pub fn player_filter(&self) -> &[String] {
        &self.player_filter
    }

    /// Provider filter.
    #[must_use]
    pub fn provider_filter(&self) -> &[String] {
        &self.provider_filter
    }
}

/// Wire shape of [`GuestAccessInfo`], normalised on conversion.
#[derive(Debug, Deserialize)]
struct GuestAccessRecord {
    enabled: bool,
    #[serde(default)]
    guest_url: Option<String>,
    #[serde(default)]
    guest_token: Option<String>,
    can_play_media: bool,
    can_control_queue: bool,
    can_control_playback: bool,
    can_control_volume: bool,
    #[serde(default)]
    player_filter: Vec<String>,
    #[serde(default)]
    provider_filter: Vec<String>,
}

impl From<GuestAccessRecord> for GuestAccessInfo {
    fn from(record: GuestAccessRecord) -> Self {
        if !record.enabled {
            return Self::disabled();
        }

        Self::enabled(
            record.guest_url,
            record.guest_token,
            GuestCapabilities {
                can_play_media: record.can_play_media,
                can_control_queue: record.can_control_queue,
                can_control_playback: record.can_control_playback,
                can_control_volume: record.can_control_volume,
            },
        )
        .with_filters(record.player_filter, record.provider_filter)
    }
}

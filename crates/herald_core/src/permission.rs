//! Permission and scope metadata carried by commands.
//!
//! The framework stores and exposes these; enforcement happens in the host
//! application before a command runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Privilege required to invoke a command, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    #[default]
    Public,
    GuildAdmin,
    BotAdmin,
    BotOwner,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Public => "public",
            PermissionLevel::GuildAdmin => "guild_admin",
            PermissionLevel::BotAdmin => "bot_admin",
            PermissionLevel::BotOwner => "bot_owner",
        }
    }
}

impl FromStr for PermissionLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(PermissionLevel::Public),
            "guild_admin" => Ok(PermissionLevel::GuildAdmin),
            "bot_admin" => Ok(PermissionLevel::BotAdmin),
            "bot_owner" => Ok(PermissionLevel::BotOwner),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of channel an invocation came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    #[default]
    Guild,
    Private,
}

/// Where a command may be invoked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    Anywhere,
    GuildOnly,
    DmOnly,
}

impl Scope {
    pub fn allows(&self, kind: ChannelKind) -> bool {
        match self {
            Scope::Anywhere => true,
            Scope::GuildOnly => kind == ChannelKind::Guild,
            Scope::DmOnly => kind == ChannelKind::Private,
        }
    }
}

//! Typed request and response models for the endpoints this crate wraps.
//!
//! Response models default every field so that fields added by newer
//! server versions (or absent on older ones) never fail decoding; the
//! remainder of a payload is kept in `extra` where it matters.
//!
//! Request models omit unset fields when serialized. Patch models use
//! `Option<Option<T>>` for nullable fields: `None` leaves the field out,
//! `Some(None)` sends an explicit `null`.

mod bot;
mod channel;
mod common;
mod file;
mod plugin;
mod post;
mod preference;
mod role;
mod status;
mod system;
mod team;
mod user;

pub use bot::{Bot, BotPatch, CreateBot};
pub use channel::{Channel, ChannelMember, ChannelPatch, ChannelType, CreateChannel};
pub use common::StatusOk;
pub use file::{FileInfo, FileUploadResponse, PublicLink, UploadFiles};
pub use plugin::UploadPlugin;
pub use post::{CreatePost, Post, PostList, PostPatch, Reaction};
pub use preference::Preference;
pub use role::{Role, RolePatch};
pub use status::UserStatus;
pub use system::{ClientConfig, SystemPing};
pub use team::{CreateTeam, Team, TeamMember, TeamPatch};
pub use user::{CreateUser, User, UserPatch};

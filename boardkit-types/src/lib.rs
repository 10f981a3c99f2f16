//! Platform wire types shared across the Boardkit crates.
//!
//! This crate defines the inert shapes the remote work-management
//! platform sends and receives:
//! - numeric id newtypes that accept both the string and number wire
//!   forms ([`BoardId`], [`ItemId`], [`AssetId`], [`UpdateId`])
//! - the column type-tag enumeration ([`ColumnKind`])
//! - record shapes for boards, groups, items, assets, updates and raw
//!   column readings
//!
//! Typed column values and row binding live in `boardkit-columns` and
//! `boardkit-model`; nothing here performs any mapping of its own.

mod asset;
mod board;
mod group;
mod ids;
mod item;
mod kind;
mod state;
mod update;

pub use asset::Asset;
pub use board::{Board, ItemsPage};
pub use group::Group;
pub use ids::{AssetId, BoardId, ItemId, UpdateId};
pub use item::{ColumnReading, Item};
pub use kind::ColumnKind;
pub use state::{BoardKind, Permission, State};
pub use update::Update;

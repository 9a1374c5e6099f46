//! Core types for the deskmate intent engine
//!
//! This crate provides the data model shared by every other crate:
//! - Persona identifiers
//! - Conversation catalog entries and follow-up offers
//! - Query results handed to the rendering layer
//! - Typed widget payloads and the demo payload catalog
//! - Query normalization
//! - Error types

pub mod conversation;
pub mod error;
pub mod persona;
pub mod text;
pub mod widgets;

pub use conversation::{ConversationEntry, FollowUp, QueryMatch};
pub use error::{Error, Result};
pub use persona::PersonaId;
pub use text::normalize;
pub use widgets::{Widget, WidgetType};

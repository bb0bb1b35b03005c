//! HSRDB Core Library
//!
//! Client-side engine for the HSRDB game-data browser, including:
//! - Rich-text markup transformation (markup)
//! - Game enum localization (enums)
//! - Data language handling (lang)
//! - Read-only HTTP query client (client)
//! - Request session tokens for stale-response discarding (session)
//! - Pagination math (pagination)
//!
//! This library is UI-independent: the terminal client consumes it, and the
//! same types would back any other front end over the dataset API.

pub mod client;
pub mod enums;
pub mod error;
pub mod lang;
pub mod markup;
pub mod pagination;
pub mod session;
pub mod types;

// Re-export common types
pub use client::{ApiConfig, QueryClient};
pub use error::{CoreError, CoreResult};
pub use lang::Lang;
pub use session::{RequestSeq, RequestToken};

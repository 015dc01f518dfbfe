//! # aura-tokens
//!
//! The token composer: merges the dual-model prediction with the
//! persona's rule-based overrides into the final CSS class/variable
//! bundle. The rule layer is complete on its own: composing against
//! the fallback prediction still yields a full bundle, which is what
//! keeps the engine usable when the ML layer is down.

pub mod vocabulary;

mod composer;
mod overrides;

pub use composer::{compose, is_self_consistent};

//! Controller layer: queued user intents, error modeling, and applying intents to the session.

pub mod events;
pub mod orchestration;

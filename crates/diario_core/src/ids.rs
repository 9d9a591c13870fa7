//! Client-side id generation strategies.

use chrono::Utc;
use uuid::Uuid;

use crate::ports::IdGenerator;

/// Epoch-milliseconds ids, byte-compatible with what existing installs hold.
///
/// Two calls inside the same millisecond mint the same id; callers that
/// cannot tolerate that should inject [`UuidIds`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

/// Random v4 uuid ids for callers that need collision resistance.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

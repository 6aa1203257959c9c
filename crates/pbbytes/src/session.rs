//! Session lifecycle events whose string fields are stored as [`ByteBuffer`]s.
//!
//! A [`SessionEvent`] mirrors the `SessionEvent` protobuf message: each string
//! field is encoded up front so the wire encoder only has to frame it.

use crate::{ByteBuffer, Encoder};

/// Kind of a [`SessionEvent`], with its protobuf enum number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum EventType {
    /// Unset.
    #[default]
    Unknown = 0,
    /// A new session started.
    SessionStart = 1,
}

/// Source of the identifiers recorded on a session event.
pub trait IdentifierProvider {
    /// Identifier of the session being started.
    fn session_id(&self) -> &str;
    /// Identifier of the session before this one, if there was one.
    fn previous_session_id(&self) -> Option<&str>;
    /// Identifier of this app installation.
    fn installation_id(&self) -> &str;
}

/// Source of event timestamps.
pub trait TimeProvider {
    /// Current time in microseconds since the Unix epoch.
    fn timestamp_us(&self) -> u64;
}

/// A session event ready to be handed to a wire encoder.
///
/// String fields are `None` when they were never populated, which happens
/// only if encoding them failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SessionEvent {
    /// What happened.
    pub event_type: EventType,
    /// Identifier of this session.
    pub session_id: Option<ByteBuffer>,
    /// Identifier of the preceding session; empty for the first session.
    pub previous_session_id: Option<ByteBuffer>,
    /// Identifier of the app installation.
    pub firebase_installation_id: Option<ByteBuffer>,
    /// When the event happened, in microseconds since the Unix epoch.
    pub event_timestamp_us: u64,
}

impl SessionEvent {
    /// Builds a session-start event with the default encoder.
    pub fn session_start(
        identifiers: &impl IdentifierProvider,
        time: &impl TimeProvider,
    ) -> Self {
        Self::session_start_with(&Encoder::default(), identifiers, time)
    }

    /// Builds a session-start event, encoding its strings with `encoder`.
    pub fn session_start_with(
        encoder: &Encoder,
        identifiers: &impl IdentifierProvider,
        time: &impl TimeProvider,
    ) -> Self {
        let encode = |value: Option<&str>| encoder.encode_text(value).ok();

        let event = Self {
            event_type: EventType::SessionStart,
            session_id: encode(Some(identifiers.session_id())),
            previous_session_id: encode(identifiers.previous_session_id()),
            firebase_installation_id: encode(Some(identifiers.installation_id())),
            event_timestamp_us: time.timestamp_us(),
        };
        tracing::debug!(
            timestamp_us = event.event_timestamp_us,
            "built session start event"
        );
        event
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Outbound wire formatting for Bedstead.
//!
//! The adapter turns world events into client-facing sound announcements and
//! serializes them. It is a one-way leaf: nothing here ever reads a message
//! back, and asking it to do so is treated as a programming error.

use bedstead_core::{BedData, Event};
use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

/// Longest sound name, in bytes, a client accepts.
pub const MAX_STRING_LENGTH: usize = 32_767;

/// Sound played when a block explodes.
pub const EXPLOSION_SOUND: &str = "entity.generic.explode";

/// Sound played when a wooden block such as a bed is placed.
pub const WOOD_PLACE_SOUND: &str = "block.wood.place";

/// Named sound effect played at a block position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaySoundMessage {
    /// Registry name of the sound.
    pub sound: String,
    /// East-west block coordinate.
    pub x: i32,
    /// Vertical block coordinate.
    pub y: i32,
    /// North-south block coordinate.
    pub z: i32,
    /// Playback volume, `1.0` being normal.
    pub volume: f32,
    /// Playback pitch, `1.0` being normal.
    pub pitch: f32,
}

/// Errors raised while formatting messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The codec only writes messages; reading them back is unsupported.
    #[error("{message} is outbound only and cannot be decoded")]
    DecodeUnsupported {
        /// Name of the message type.
        message: &'static str,
    },
    /// A string exceeded [`MAX_STRING_LENGTH`].
    #[error("string of {length} bytes exceeds the {max} byte limit", max = MAX_STRING_LENGTH)]
    StringTooLong {
        /// Byte length of the rejected string.
        length: usize,
    },
}

/// Message formatter for a single message type.
pub trait Codec {
    /// Message type handled by the codec.
    type Message;

    /// Appends the wire form of `message` to `buf`.
    fn encode(&self, buf: &mut BytesMut, message: &Self::Message) -> Result<(), CodecError>;

    /// Reads a message back from `buf`.
    fn decode(&self, buf: &mut Bytes) -> Result<Self::Message, CodecError>;
}

/// Codec for [`PlaySoundMessage`].
///
/// Layout: VarInt-prefixed UTF-8 name, `x`, `y`, `z` as big-endian `i32`,
/// volume as big-endian `f32`, then pitch scaled by 63 into one byte.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaySoundCodec;

impl Codec for PlaySoundCodec {
    type Message = PlaySoundMessage;

    fn encode(&self, buf: &mut BytesMut, message: &PlaySoundMessage) -> Result<(), CodecError> {
        write_utf8(buf, &message.sound)?;
        buf.put_i32(message.x);
        buf.put_i32(message.y);
        buf.put_i32(message.z);
        buf.put_f32(message.volume);
        buf.put_u8(pitch_byte(message.pitch));
        Ok(())
    }

    fn decode(&self, _buf: &mut Bytes) -> Result<PlaySoundMessage, CodecError> {
        log::error!("attempted to decode an outbound PlaySoundMessage");
        Err(CodecError::DecodeUnsupported {
            message: "PlaySoundMessage",
        })
    }
}

/// Scales a pitch multiplier into its one-byte wire form.
#[must_use]
pub fn pitch_byte(pitch: f32) -> u8 {
    (pitch * 63.0).round().clamp(0.0, 255.0) as u8
}

/// Writes a VarInt length prefix followed by the UTF-8 bytes of `value`.
pub fn write_utf8(buf: &mut BytesMut, value: &str) -> Result<(), CodecError> {
    let length = value.len();
    if length > MAX_STRING_LENGTH {
        return Err(CodecError::StringTooLong { length });
    }
    write_var_int(buf, length as u32);
    buf.put_slice(value.as_bytes());
    Ok(())
}

/// Appends `value` seven bits at a time, low bits first, setting the top bit
/// of every byte but the last. Sound names use it as their length prefix.
pub fn write_var_int(buf: &mut BytesMut, mut value: u32) {
    loop {
        if value & !0x7F == 0 {
            buf.put_u8(value as u8);
            return;
        }
        buf.put_u8((value & 0x7F | 0x80) as u8);
        value >>= 7;
    }
}

/// Sound announcements clients should hear for the provided events.
///
/// Explosions are announced at their centre. A bed is announced once, when its
/// head half appears.
#[must_use]
pub fn sound_announcements(events: &[Event]) -> Vec<PlaySoundMessage> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::ExplosionTriggered { center, .. } => Some(PlaySoundMessage {
                sound: EXPLOSION_SOUND.to_owned(),
                x: center.x(),
                y: center.y(),
                z: center.z(),
                volume: 4.0,
                pitch: 1.0,
            }),
            Event::BlockChanged { pos, old, new } => {
                let placed_head = !old.material.is_bed_family()
                    && BedData::from_state(new).is_some_and(BedData::is_head);
                placed_head.then(|| PlaySoundMessage {
                    sound: WOOD_PLACE_SOUND.to_owned(),
                    x: pos.x(),
                    y: pos.y(),
                    z: pos.z(),
                    volume: 1.0,
                    pitch: 0.8,
                })
            }
            _ => None,
        })
        .collect()
}

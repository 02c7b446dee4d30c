//! Connection-side contract the generated dispatcher is written against.
//!
//! The generated `ApiServerConnectionBase::read_message` decodes a frame and
//! calls a per-message hook; the generated gating layer consults
//! [`ProtoService::is_connection_setup`] and [`ProtoService::is_authenticated`]
//! before invoking a handler and sends replies through
//! [`ProtoService::send_message`].

use crate::error::Result;
use crate::proto::{ProtoMessage, ProtoWriteBuffer, ServiceMessage};

/// Lifecycle of one API connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Closed, or torn down after a fatal error.
    Disconnected,
    /// Transport established, waiting for `HelloRequest`.
    #[default]
    Handshake,
    /// Hello exchanged, not authenticated.
    Connected,
    /// Password accepted (or none configured).
    Authenticated,
}

impl ConnectionState {
    #[inline]
    pub fn is_connection_setup(self) -> bool {
        matches!(self, ConnectionState::Connected | ConnectionState::Authenticated)
    }

    #[inline]
    pub fn is_authenticated(self) -> bool {
        self == ConnectionState::Authenticated
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        self == ConnectionState::Disconnected
    }
}

/// Transport and state hooks for a connection speaking the API.
pub trait ProtoService {
    fn is_authenticated(&self) -> bool;

    fn is_connection_setup(&self) -> bool;

    /// Tear the connection down. Called when a reply cannot be sent.
    fn on_fatal_error(&mut self);

    /// A message requiring authentication arrived before authentication.
    fn on_unauthenticated_access(&mut self);

    /// A message requiring setup arrived before the hello exchange.
    fn on_no_setup_connection(&mut self);

    /// Buffer for one outbound message, reserved to `reserve_size` bytes.
    fn create_buffer(&mut self, reserve_size: usize) -> ProtoWriteBuffer {
        ProtoWriteBuffer::with_capacity(reserve_size)
    }

    /// Frame and transmit an encoded message.
    fn send_buffer(&mut self, buffer: ProtoWriteBuffer, message_type: u16) -> Result<()>;

    /// Size, encode and send `msg` under an explicit message type.
    fn send_message_as<M: ProtoMessage + ?Sized>(&mut self, msg: &M, message_type: u16) -> Result<()>
    where
        Self: Sized,
    {
        let mut size = 0;
        msg.calculate_size(&mut size);
        let mut buffer = self.create_buffer(size as usize);
        msg.encode(&mut buffer);
        self.send_buffer(buffer, message_type)
    }

    /// Send a service message; the type id comes from `T::MESSAGE_TYPE`.
    fn send_message<T: ServiceMessage>(&mut self, msg: &T) -> Result<()>
    where
        Self: Sized,
    {
        if T::LOG {
            tracing::trace!("send_message {}: {}", T::MESSAGE_NAME, msg.dump());
        }
        self.send_message_as(msg, T::MESSAGE_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{ProtoDecode, ProtoSize, ProtoVarInt};

    #[derive(Debug, Default)]
    struct Counter {
        value: u32,
    }

    impl ProtoDecode for Counter {
        fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
            match field_id {
                1 => self.value = value.as_uint32(),
                _ => return false,
            }
            true
        }
    }

    impl ProtoMessage for Counter {
        fn encode(&self, buffer: &mut ProtoWriteBuffer) {
            buffer.encode_uint32(1, self.value, false);
        }

        fn calculate_size(&self, total_size: &mut u32) {
            ProtoSize::add_uint32_field(total_size, 1, self.value, false);
        }

        fn dump_to(&self, out: &mut String) {
            out.push_str(&format!("Counter {{\n  value: {}\n}}", self.value));
        }
    }

    impl ServiceMessage for Counter {
        const MESSAGE_TYPE: u16 = 77;
        const ESTIMATED_SIZE: u16 = 4;
        const MESSAGE_NAME: &'static str = "counter";
    }

    #[derive(Default)]
    struct Recorder {
        sent: Vec<(u16, Vec<u8>, usize)>,
    }

    impl ProtoService for Recorder {
        fn is_authenticated(&self) -> bool {
            true
        }

        fn is_connection_setup(&self) -> bool {
            true
        }

        fn on_fatal_error(&mut self) {}

        fn on_unauthenticated_access(&mut self) {}

        fn on_no_setup_connection(&mut self) {}

        fn send_buffer(&mut self, buffer: ProtoWriteBuffer, message_type: u16) -> Result<()> {
            self.sent.push((message_type, buffer.as_slice().to_vec(), buffer.len()));
            Ok(())
        }
    }

    #[test]
    fn test_connection_state_predicates() {
        assert!(!ConnectionState::Handshake.is_connection_setup());
        assert!(ConnectionState::Connected.is_connection_setup());
        assert!(!ConnectionState::Connected.is_authenticated());
        assert!(ConnectionState::Authenticated.is_connection_setup());
        assert!(ConnectionState::Authenticated.is_authenticated());
        assert!(ConnectionState::Disconnected.is_closed());
        assert_eq!(ConnectionState::default(), ConnectionState::Handshake);
    }

    #[test]
    fn test_send_message_uses_message_type() {
        let mut service = Recorder::default();
        service.send_message(&Counter { value: 300 }).unwrap();

        assert_eq!(service.sent.len(), 1);
        let (message_type, bytes, len) = &service.sent[0];
        assert_eq!(*message_type, 77);
        assert_eq!(bytes, &vec![0x08, 0xAC, 0x02]);
        assert_eq!(*len, 3);
    }

    #[test]
    fn test_send_empty_message() {
        let mut service = Recorder::default();
        service.send_message(&Counter::default()).unwrap();
        assert!(service.sent[0].1.is_empty());
    }
}

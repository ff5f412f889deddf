// libftm/src/transport/traits.rs

use crate::LinkError;
use crate::protocol::{Command, Response};

/// Transceiver abstracts the tag link away from protocol/engine logic.
///
/// Implementations wrap the platform's ISO 15693 handle. They must not
/// retry internally and must bound every `transceive` with their own
/// timeout; the engine never does.
pub trait Transceiver: Send {
    /// Open the link. Returning `Ok` does not guarantee the link is usable:
    /// callers check `is_connected` afterwards.
    fn connect(&mut self) -> Result<(), LinkError>;

    /// Whether the link is currently open
    fn is_connected(&self) -> bool;

    /// Largest request the link accepts in one exchange
    fn max_transceive_len(&self) -> usize;

    /// Send raw bytes and block until the tag answers
    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>, LinkError>;

    /// Release the link
    fn close(&mut self) -> Result<(), LinkError>;

    /// Encode `cmd`, transceive it and decode the answer. Default
    /// implementation is built on `transceive`; transports rarely need to
    /// override it.
    fn execute(&mut self, cmd: &Command) -> crate::Result<Response> {
        let request = cmd.encode()?;
        #[cfg(feature = "diagnostics")]
        log::trace!("-> {}", crate::utils::bytes_to_hex_spaced(&request));
        let raw = self.transceive(&request)?;
        #[cfg(feature = "diagnostics")]
        log::trace!("<- {}", crate::utils::bytes_to_hex_spaced(&raw));
        Response::decode(cmd.command_code(), &raw)
    }
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn connect(&mut self) -> Result<(), LinkError> {
        (**self).connect()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn max_transceive_len(&self) -> usize {
        (**self).max_transceive_len()
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>, LinkError> {
        (**self).transceive(data)
    }

    fn close(&mut self) -> Result<(), LinkError> {
        (**self).close()
    }

    fn execute(&mut self, cmd: &Command) -> crate::Result<Response> {
        (**self).execute(cmd)
    }
}

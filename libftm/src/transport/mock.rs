// libftm/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::LinkError;
use crate::transport::traits::Transceiver;

/// Default transceive limit reported by ISO 15693 links on handsets.
pub const DEFAULT_MAX_TRANSCEIVE_LEN: usize = 253;

/// Shared state behind a MockTransceiver.
#[derive(Debug)]
pub struct MockState {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Result<Vec<u8>, LinkError>>,
    pub connected: bool,
    /// When false, `connect` returns Ok but leaves the link closed
    /// (the behaviour of a tag that refuses writes).
    pub connect_opens: bool,
    pub connect_error: Option<LinkError>,
    pub close_error: Option<LinkError>,
    pub max_transceive_len: usize,
    pub connect_calls: usize,
    pub close_calls: usize,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            responses: VecDeque::new(),
            connected: false,
            connect_opens: true,
            connect_error: None,
            close_error: None,
            max_transceive_len: DEFAULT_MAX_TRANSCEIVE_LEN,
            connect_calls: 0,
            close_calls: 0,
        }
    }
}

/// Mock transceiver for tests and demos. It records sent requests and
/// returns queued responses or injected link errors. Clones share state,
/// so a test can keep a clone after handing one to the engine.
#[derive(Debug, Clone, Default)]
pub struct MockTransceiver {
    state: Arc<Mutex<MockState>>,
}

impl MockTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tag whose `connect` never opens the link.
    pub fn read_only() -> Self {
        let mock = Self::new();
        mock.state().connect_opens = false;
        mock
    }

    pub fn with_max_transceive_len(self, len: usize) -> Self {
        self.state().max_transceive_len = len;
        self
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the recorded state from others.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.state().responses.push_back(Ok(resp));
    }

    pub fn push_error(&self, err: LinkError) {
        self.state().responses.push_back(Err(err));
    }

    /// Make the next `connect` call fail with `err`.
    pub fn fail_connect_with(&self, err: LinkError) {
        self.state().connect_error = Some(err);
    }

    /// Make `close` fail with `err` (the link is still marked closed).
    pub fn fail_close_with(&self, err: LinkError) {
        self.state().close_error = Some(err);
    }

    /// Simulate the tag leaving or re-entering the field.
    pub fn set_connected(&self, connected: bool) {
        self.state().connected = connected;
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state().sent.clone()
    }

    pub fn transceive_count(&self) -> usize {
        self.state().sent.len()
    }

    pub fn pending_responses(&self) -> usize {
        self.state().responses.len()
    }

    pub fn connect_calls(&self) -> usize {
        self.state().connect_calls
    }

    pub fn close_calls(&self) -> usize {
        self.state().close_calls
    }

    /// True when `other` is a clone of this mock.
    pub fn same_tag(&self, other: &MockTransceiver) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Transceiver for MockTransceiver {
    fn connect(&mut self) -> Result<(), LinkError> {
        let mut st = self.state();
        st.connect_calls += 1;
        if let Some(err) = st.connect_error.take() {
            return Err(err);
        }
        if st.connect_opens {
            st.connected = true;
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state().connected
    }

    fn max_transceive_len(&self) -> usize {
        self.state().max_transceive_len
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>, LinkError> {
        let mut st = self.state();
        if !st.connected {
            return Err(LinkError::Other("not connected".into()));
        }
        st.sent.push(data.to_vec());
        match st.responses.pop_front() {
            Some(Err(LinkError::TagLost)) => {
                st.connected = false;
                Err(LinkError::TagLost)
            }
            Some(resp) => resp,
            None => Err(LinkError::Other("timeout".into())),
        }
    }

    fn close(&mut self) -> Result<(), LinkError> {
        let mut st = self.state();
        st.close_calls += 1;
        st.connected = false;
        match st.close_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

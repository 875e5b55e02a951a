//! Mock label provider for testing.
//!
//! Records every shipment it receives and answers with a configured label or
//! error. Tests use the call log to assert how many outbound label calls the
//! handler made.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::shipping::{ShipmentRequest, ShippingLabel};
use crate::ports::{LabelError, LabelProvider};

/// Mock label provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockLabelProvider::with_label_url("https://labels.example/1.pdf");
/// mock.create_label(&request).await?;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockLabelProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    outcome: Option<Result<ShippingLabel, LabelError>>,
    requests: Vec<ShipmentRequest>,
}

impl MockLabelProvider {
    /// Create a mock that returns a label without a link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns the given label link.
    pub fn with_label_url(url: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_outcome(Ok(ShippingLabel {
            label_url: Some(url.into()),
        }));
        mock
    }

    /// Create a mock whose every call fails with `error`.
    pub fn failing(error: LabelError) -> Self {
        let mock = Self::new();
        mock.set_outcome(Err(error));
        mock
    }

    pub fn set_outcome(&self, outcome: Result<ShippingLabel, LabelError>) {
        self.inner.lock().unwrap().outcome = Some(outcome);
    }

    /// Shipments received so far.
    pub fn requests(&self) -> Vec<ShipmentRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

#[async_trait]
impl LabelProvider for MockLabelProvider {
    async fn create_label(&self, request: &ShipmentRequest) -> Result<ShippingLabel, LabelError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request.clone());
        state
            .outcome
            .clone()
            .unwrap_or_else(|| Ok(ShippingLabel::default()))
    }
}

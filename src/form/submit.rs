use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use super::controller::{FormController, FormError, FormId, FormResult, SubmitState};
use super::validation::ValidationError;

/// Destination for a validated form payload.
///
/// The site currently terminates submissions locally; this trait is the seam
/// where a real HTTP endpoint plugs in later without touching form code.
pub trait SubmissionSink<T>: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn deliver(&self, form_id: FormId, model: &T) -> Result<(), Self::Error>;
}

/// What the user sees after a successful submit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmissionReceipt {
    pub form_id: FormId,
    pub acknowledgment: Cow<'static, str>,
}

/// Mock sink: encodes the model as JSON and emits it through the `log`
/// facade. The equivalent of the site's `console.log` termination.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        Self
    }
}

impl<T> SubmissionSink<T> for LoggingSink
where
    T: Serialize + Send + Sync + 'static,
{
    type Error = serde_json::Error;

    fn deliver(&self, form_id: FormId, model: &T) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(model)?;
        log::info!(target: "genexui::submit", "form {} submitted: {payload}", form_id.0);
        Ok(())
    }
}

/// Captures delivered payloads in memory. Test double for [`SubmissionSink`].
#[derive(Clone)]
pub struct RecordingSink<T> {
    deliveries: Arc<RwLock<Vec<(FormId, T)>>>,
}

impl<T> RecordingSink<T> {
    pub fn new() -> Self {
        Self {
            deliveries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RecordingSink<T> {
    pub fn deliveries(&self) -> Vec<(FormId, T)> {
        let deliveries = match self.deliveries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        deliveries.clone()
    }
}

impl<T> SubmissionSink<T> for RecordingSink<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Error = Infallible;

    fn deliver(&self, form_id: FormId, model: &T) -> Result<(), Self::Error> {
        let mut deliveries = match self.deliveries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        deliveries.push((form_id, model.clone()));
        Ok(())
    }
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    /// Validates, delivers the model to `sink`, and on success resets the
    /// form to its defaults, returning the acknowledgment receipt.
    ///
    /// Returns `Ok(None)` when validation fails: the error state stays
    /// populated for inline display and nothing is delivered.
    pub fn submit_to<S>(
        &self,
        sink: &S,
        acknowledgment: impl Into<Cow<'static, str>>,
    ) -> FormResult<Option<SubmissionReceipt>>
    where
        S: SubmissionSink<T>,
    {
        let form_id = self.form_id()?;
        self.submit(|model| {
            sink.deliver(form_id, model)
                .map_err(|error| FormError::DeliveryFailed(error.to_string()))
        })?;

        if self.snapshot()?.submit_state != SubmitState::Succeeded {
            return Ok(None);
        }

        self.reset_after_submit()?;
        let receipt = SubmissionReceipt {
            form_id,
            acknowledgment: acknowledgment.into(),
        };
        log::debug!(target: "genexui::submit", "form {} acknowledged: {}", form_id.0, receipt.acknowledgment);
        Ok(Some(receipt))
    }
}

//! Fluent builder for constructing a [`TurnLoop`].

use lb_client::{RetryPolicy, SessionParams, Transport};
use lb_policy::DispatchPolicy;

use crate::{CancelFlag, TurnLoop};

/// Fluent builder for [`TurnLoop<T, P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                         |
/// |---------------|---------------------------------|
/// | `.retry(r)`   | `RetryPolicy::default()`        |
/// | `.cancel(c)`  | A fresh flag nobody else holds  |
///
/// # Example
///
/// ```rust,ignore
/// let cancel = CancelFlag::new();
/// let outcome = TurnLoopBuilder::new(transport, params, RandomPolicy::from_time())
///     .retry(RetryPolicy::none())
///     .cancel(cancel.clone())
///     .build()
///     .run(&mut NoopObserver)?;
/// ```
pub struct TurnLoopBuilder<T: Transport, P: DispatchPolicy> {
    transport: T,
    params:    SessionParams,
    policy:    P,
    retry:     Option<RetryPolicy>,
    cancel:    Option<CancelFlag>,
}

impl<T: Transport, P: DispatchPolicy> TurnLoopBuilder<T, P> {
    pub fn new(transport: T, params: SessionParams, policy: P) -> Self {
        Self { transport, params, policy, retry: None, cancel: None }
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Share a cancellation flag with the loop.  Keep a clone to request a
    /// stop from elsewhere (an observer, another thread).
    pub fn cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn build(self) -> TurnLoop<T, P> {
        TurnLoop {
            transport: self.transport,
            params:    self.params,
            policy:    self.policy,
            retry:     self.retry.unwrap_or_default(),
            cancel:    self.cancel.unwrap_or_default(),
        }
    }
}

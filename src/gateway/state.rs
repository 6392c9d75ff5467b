use std::time::Duration;

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::generation::ConstrainedModel;
use crate::resolver::Resolver;
use crate::storage::PairStore;

/// Shared state handed to every handler.
pub struct HandlerState<M: ConstrainedModel + 'static, S: PairStore + 'static> {
    pub resolver: Resolver<M, S>,

    /// Whole-request budget enforced by the router.
    pub request_timeout: Duration,
}

impl<M, S> HandlerState<M, S>
where
    M: ConstrainedModel + 'static,
    S: PairStore + 'static,
{
    pub fn new(resolver: Resolver<M, S>) -> Self {
        Self {
            resolver,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl<M: ConstrainedModel + 'static, S: PairStore + 'static> Clone for HandlerState<M, S> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

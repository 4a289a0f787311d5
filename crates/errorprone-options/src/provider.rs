//! Deferred argument batches.

/// Produces raw arguments when the options are resolved.
///
/// The returned strings are emitted verbatim, in order, without validation.
pub trait ArgumentProvider {
    fn arguments(&self) -> Vec<String>;
}

impl<F> ArgumentProvider for F
where
    F: Fn() -> Vec<String>,
{
    fn arguments(&self) -> Vec<String> {
        self()
    }
}

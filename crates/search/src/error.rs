use coilpack_core::RequestError;

/// Errors that can occur when starting a search.
///
/// Per-tuple problems (infeasible geometry, evaluator failures, filter
/// rejections) never surface here; they are reported through events.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),
}

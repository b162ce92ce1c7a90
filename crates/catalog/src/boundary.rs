use async_trait::async_trait;

/// Translates between one transport and the catalog views.
///
/// Implemented once per transport. The implementation turns a parsed request
/// into view parameters and a result envelope into its own response type,
/// and decides how unhandled faults are reported.
#[async_trait]
pub trait BoundaryAdapter: Send + Sync {
    type Request: Send;
    type Response: Send;

    async fn dispatch(&self, request: Self::Request) -> Self::Response;
}

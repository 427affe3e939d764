use crate::model::{CategoryId, RawNode};

/// Anything that can list the children of a category.
///
/// Implementations never fail: a listing that could not be obtained is
/// reported as an empty one.
#[async_trait::async_trait]
pub trait CategorySource: Send + Sync {
    async fn children(&self, id: &CategoryId) -> RawNode;
}

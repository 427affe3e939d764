use tracing::info;

use crate::{
    model::{raw_entries, CategoryId, Children, RawNode, Roots, SubCategory, Tree},
    source::CategorySource,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Listings requested from the source.
    pub fetches: usize,
    /// Listings that came back empty, whether the category is childless or every attempt failed.
    pub empty: usize,
}

/// Walks the taxonomy three listings deep, one request at a time.
pub struct TreeBuilder<S> {
    source: S,
    stats: BuildStats,
}

impl<S> TreeBuilder<S>
where
    S: CategorySource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            stats: BuildStats::default(),
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn into_source(self) -> S {
        self.source
    }

    async fn children(&mut self, id: &CategoryId) -> RawNode {
        let node = self.source.children(id).await;

        self.stats.fetches += 1;
        if node.is_empty() {
            self.stats.empty += 1;
        }

        node
    }

    /// Build the raw (not normalized) tree for `roots`.
    ///
    /// Under every second level entry the builder lists the children of each
    /// of that entry's own children, flattened into one list. The names of
    /// the intermediate categories are not kept.
    #[tracing::instrument(skip_all, fields(roots = roots.len()))]
    pub async fn build(&mut self, roots: &Roots) -> Tree {
        let mut tree = Tree::new();

        for (name, id) in roots.iter() {
            info!("Processing {name}, ({id})");
            let listing = self.children(id).await;

            let mut subcategories = Vec::new();
            for (sub_id, sub_name) in raw_entries(&listing) {
                info!("Processing {sub_name}, ({sub_id})");
                let sub_listing = self.children(sub_id).await;

                let mut leaves = Vec::new();
                for (inner_id, inner_name) in raw_entries(&sub_listing) {
                    info!("Processing {inner_name}, ({inner_id})");
                    let inner_listing = self.children(inner_id).await;

                    leaves.extend(raw_entries(&inner_listing).map(|(_, leaf)| leaf.clone()));
                }

                subcategories.push(SubCategory::new(sub_name.clone(), leaves));
            }

            tree.insert(name.clone(), Children::Nodes(subcategories));
        }

        info!(
            fetches = self.stats.fetches,
            empty = self.stats.empty,
            "Category tree built"
        );

        tree
    }
}

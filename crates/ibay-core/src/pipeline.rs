use std::path::Path;

use tracing::info;

use crate::{
    fs::{read_json, write_json_pretty},
    model::{Roots, Tree},
    normalize::normalize,
    source::CategorySource,
    tree::TreeBuilder,
};

/// Build the tree from `source`, write it to `raw_path`, then write the
/// normalized tree to `normalized_path`. Returns the normalized tree.
pub async fn scrape<S>(
    source: S,
    roots: &Roots,
    raw_path: impl AsRef<Path>,
    normalized_path: impl AsRef<Path>,
) -> anyhow::Result<Tree>
where
    S: CategorySource,
{
    let mut builder = TreeBuilder::new(source);
    let mut tree = builder.build(roots).await;

    write_json_pretty(&tree, raw_path).await?;

    normalize(&mut tree);
    write_json_pretty(&tree, normalized_path).await?;

    let stats = builder.stats();
    info!(
        categories = tree.len(),
        fetches = stats.fetches,
        empty = stats.empty,
        "Scrape finished"
    );

    Ok(tree)
}

/// Normalize a previously written raw tree file.
pub async fn normalize_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> anyhow::Result<Tree> {
    let tree: Tree = read_json(input).await?;
    let tree = tree.normalized();

    write_json_pretty(&tree, output).await?;

    Ok(tree)
}

//! Category taxonomy types.

use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{consts::DEFAULT_ROOTS, error::TreeError};

pub type CategoryName = String;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Listing returned by the endpoint for one parent id: `[{"5501": "Full Time"}, ...]`.
pub type RawNode = Vec<IndexMap<CategoryId, CategoryName>>;

/// Iterate every `(id, name)` pair of a listing in response order.
pub fn raw_entries(node: &RawNode) -> impl Iterator<Item = (&CategoryId, &CategoryName)> {
    node.iter().flat_map(IndexMap::iter)
}

/// Children of a node, or the node's own name once it has been marked as a leaf.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Children<T> {
    Nodes(Vec<T>),
    Leaf(CategoryName),
}

impl<T> Children<T> {
    /// `true` only for an empty list. A leaf marker is not "empty".
    pub fn is_empty_nodes(&self) -> bool {
        matches!(self, Self::Nodes(nodes) if nodes.is_empty())
    }

    pub fn nodes(&self) -> Option<&[T]> {
        match self {
            Self::Nodes(nodes) => Some(nodes.as_slice()),
            Self::Leaf(_) => None,
        }
    }

    pub fn nodes_mut(&mut self) -> Option<&mut Vec<T>> {
        match self {
            Self::Nodes(nodes) => Some(nodes),
            Self::Leaf(_) => None,
        }
    }

    pub fn leaf(&self) -> Option<&str> {
        match self {
            Self::Nodes(_) => None,
            Self::Leaf(name) => Some(name.as_str()),
        }
    }

    /// Replace an empty list with `Leaf(name)`. Returns whether it did.
    pub(crate) fn collapse_empty(&mut self, name: &str) -> bool {
        if self.is_empty_nodes() {
            *self = Self::Leaf(name.to_owned());
            true
        } else {
            false
        }
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self::Nodes(Vec::new())
    }
}

/// Second level entry, serialized as a single-key object `{"name": children}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(
    try_from = "IndexMap<CategoryName, Children<CategoryName>>",
    into = "IndexMap<CategoryName, Children<CategoryName>>"
)]
pub struct SubCategory {
    pub name: CategoryName,
    pub children: Children<CategoryName>,
}

impl SubCategory {
    pub fn new(name: impl Into<CategoryName>, children: Vec<CategoryName>) -> Self {
        Self {
            name: name.into(),
            children: Children::Nodes(children),
        }
    }
}

impl TryFrom<IndexMap<CategoryName, Children<CategoryName>>> for SubCategory {
    type Error = TreeError;

    fn try_from(value: IndexMap<CategoryName, Children<CategoryName>>) -> Result<Self, Self::Error> {
        if value.len() != 1 {
            return Err(TreeError::SubCategoryKeys(value.len()));
        }

        let (name, children) = value
            .into_iter()
            .next()
            .ok_or(TreeError::SubCategoryKeys(0))?;

        Ok(Self { name, children })
    }
}

impl From<SubCategory> for IndexMap<CategoryName, Children<CategoryName>> {
    fn from(value: SubCategory) -> Self {
        IndexMap::from([(value.name, value.children)])
    }
}

/// The assembled taxonomy, keyed by top-level category name in insertion order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Tree(IndexMap<CategoryName, Children<SubCategory>>);

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<CategoryName>, children: Children<SubCategory>) {
        self.0.insert(name.into(), children);
    }

    pub fn get(&self, name: &str) -> Option<&Children<SubCategory>> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryName, &Children<SubCategory>)> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&CategoryName, &mut Children<SubCategory>)> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CategoryName, Children<SubCategory>)> for Tree {
    fn from_iter<I: IntoIterator<Item = (CategoryName, Children<SubCategory>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fixed top-level input: category name to id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Roots(IndexMap<CategoryName, CategoryId>);

impl Roots {
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryName, &CategoryId)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Roots {
    fn default() -> Self {
        DEFAULT_ROOTS
            .iter()
            .map(|(name, id)| ((*name).to_owned(), CategoryId::from(*id)))
            .collect()
    }
}

impl FromIterator<(CategoryName, CategoryId)> for Roots {
    fn from_iter<I: IntoIterator<Item = (CategoryName, CategoryId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Roots {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, id)| (name.to_owned(), CategoryId::from(id)))
                .collect(),
        )
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
pub mod consts;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod settings;
pub mod source;
pub mod tree;
pub mod url;

pub use consts::*;
pub use error::{FetchError, TreeError};
pub use fetch::{FetchConfig, Fetcher};
pub use model::{CategoryId, CategoryName, Children, RawNode, Roots, SubCategory, Tree};
pub use normalize::normalize;
pub use source::CategorySource;
pub use tree::{BuildStats, TreeBuilder};

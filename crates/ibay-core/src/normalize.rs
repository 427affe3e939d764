use crate::model::{SubCategory, Tree};

/// Mark childless categories with their own name.
///
/// A top-level category with no subcategories becomes its name. Otherwise each
/// subcategory with no leaves becomes its name. Only these two levels are
/// visited, and values that are already names are left alone.
pub fn normalize(tree: &mut Tree) {
    for (name, children) in tree.iter_mut() {
        if children.collapse_empty(name) {
            continue;
        }

        if let Some(subcategories) = children.nodes_mut() {
            subcategories.iter_mut().for_each(SubCategory::normalize);
        }
    }
}

impl SubCategory {
    pub fn normalize(&mut self) {
        self.children.collapse_empty(&self.name);
    }
}

impl Tree {
    #[must_use]
    pub fn normalized(mut self) -> Self {
        normalize(&mut self);
        self
    }
}

use std::collections::{BTreeMap, BTreeSet};

/// Valid classes and, per class, the valid subclasses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    classes: BTreeMap<String, BTreeSet<String>>,
}

impl Taxonomy {
    pub fn new(classes: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { classes }
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Class names in sorted order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Subclasses of one class, `None` when the class is unknown.
    pub fn subclasses(&self, class: &str) -> Option<&BTreeSet<String>> {
        self.classes.get(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.classes.iter().map(|(class, subs)| (class.as_str(), subs))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

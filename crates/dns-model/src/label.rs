use std::fmt;

use serde::{Deserialize, Serialize};

/// The class/subclass pair attached to every record of a run.
///
/// Construct through taxonomy validation; the composite form joins the two
/// names with `:` verbatim, so a name that itself contains `:` cannot be
/// split back unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    class: String,
    subclass: String,
}

impl Label {
    pub fn new(class: impl Into<String>, subclass: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            subclass: subclass.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn subclass(&self) -> &str {
        &self.subclass
    }

    /// `"{class}:{subclass}"`.
    pub fn composite(&self) -> String {
        format!("{}:{}", self.class, self.subclass)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.class, self.subclass)
    }
}

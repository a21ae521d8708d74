use serde::{Deserialize, Serialize};

/// One reportable import edge: `parent` imports the external `package`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub parent: String,
    pub package: String,
    pub license: String,
}

impl Entry {
    pub fn new(
        parent: impl Into<String>,
        package: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            parent: parent.into(),
            package: package.into(),
            license: license.into(),
        }
    }
}

use serde::{ Serialize, Deserialize };

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dependency {
    pub name: String, // Package name inferred from the filename
    pub version: String, // Empty when no version pattern matched
    pub full_name: String, // Filename without the library directory, keeps ".jar"
}

impl Dependency {
    pub fn new(name: String, version: String, full_name: String) -> Self {
        Dependency {
            name,
            version,
            full_name,
        }
    }

    /// Formatted name for log output (e.g. "dom4j@2.1.3")
    pub fn display_name(&self) -> String {
        if self.version.is_empty() {
            self.name.clone()
        } else {
            format!("{}@{}", self.name, self.version)
        }
    }
}

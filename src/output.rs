use crate::dependency::Dependency;
use crate::error::Result;

/// Render dependencies as a single line JSON array
pub fn render_json(dependencies: &[Dependency]) -> Result<String> {
    Ok(serde_json::to_string(dependencies)?)
}

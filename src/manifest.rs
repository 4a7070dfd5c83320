use std::{fs, path::Path};

use anyhow::Context;
use serde_json::Value;

pub const DESCRIPTION: &str = "Created with Discord Bot With NestJS CLI by Mquiuqui";

/// Rewrites the generated project's `package.json` with the attribution
/// description, leaving every other field untouched.
pub fn patch_description(project_dir: &Path) -> anyhow::Result<()> {
    let path = project_dir.join("package.json");

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let mut manifest: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

    manifest
        .as_object_mut()
        .ok_or_else(|| anyhow::Error::msg(format!("`{}` is not a JSON object", path.display())))?
        .insert(
            "description".to_string(),
            Value::String(DESCRIPTION.to_string()),
        );

    let output = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, output)
        .with_context(|| format!("failed to write `{}`", path.display()))?;

    Ok(())
}

//! Offline preview render command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use draftsite_preview::PreviewEngine;
use draftsite_wizard::PreferenceRecord;

/// Load a preference record from a TOML file, or defaults when omitted.
fn load_record(input: Option<&PathBuf>) -> Result<PreferenceRecord> {
    match input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            let record: PreferenceRecord = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
            Ok(record)
        }
        None => Ok(PreferenceRecord::default()),
    }
}

/// Run the render command.
pub async fn run(input: Option<PathBuf>, output: PathBuf, minify: bool) -> Result<()> {
    let record = load_record(input.as_ref())?;

    let engine = PreviewEngine::new().with_minified_css(minify);
    let html = engine.render(&record)?;

    fs::write(&output, &html)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", output.display(), e))?;

    tracing::info!("Wrote {} bytes to {}", html.len(), output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_record_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("record.toml");
        let output = dir.path().join("preview.html");
        fs::write(
            &input,
            r#"
business_type = "portfolio"
design_style = "creative"
color_scheme = "purple"
business_name = "Ada Lovelace"
"#,
        )
        .unwrap();

        run(Some(input), output.clone(), false).await.unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("My Work"));
    }

    #[tokio::test]
    async fn missing_input_defaults_to_personal_template() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("preview.html");

        run(None, output.clone(), true).await.unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Hello, I'm John"));
    }

    #[tokio::test]
    async fn unreadable_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("preview.html");

        let result = run(Some(dir.path().join("nope.toml")), output, true).await;
        assert!(result.is_err());
    }
}

use libquay::Tag;
use libquay::format::{format_size, format_timestamp, short_digest};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Pretty,
    Json,
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

/// Check if we should use colors on stderr
pub fn should_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr
pub fn error(message: &str) {
    if should_color() {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("✗ {}", message);
    }
}

/// One table row per tag.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TagRow {
    #[tabled(rename = "TAG")]
    pub name: String,
    #[tabled(rename = "DIGEST")]
    pub digest: String,
    #[tabled(rename = "SIZE")]
    pub size: String,
    #[tabled(rename = "STARTED")]
    pub started: String,
    #[tabled(rename = "MODIFIED")]
    pub modified: String,
}

impl From<&Tag> for TagRow {
    fn from(tag: &Tag) -> Self {
        let digest = tag
            .manifest_digest
            .as_deref()
            .map(|d| short_digest(d).to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let size = match (tag.size, tag.is_manifest_list) {
            (Some(bytes), _) => format_size(bytes),
            (None, Some(true)) => "multi-arch".to_string(),
            (None, _) => "N/A".to_string(),
        };

        Self {
            name: tag.name.clone(),
            digest,
            size,
            started: tag
                .started_at()
                .map(|ts| format_timestamp(&ts))
                .unwrap_or_else(|| "N/A".to_string()),
            modified: tag
                .last_modified_at()
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Renders tags in the requested format.
pub fn render_tags(tags: &[Tag], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => {
            let rows: Vec<TagRow> = tags.iter().map(TagRow::from).collect();
            Ok(Table::new(&rows).with(Style::empty()).to_string())
        }
        OutputFormat::Json => serde_json::to_string_pretty(tags)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(tags).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

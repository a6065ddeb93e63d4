//! Persona CLI support
//!
//! Catalog/config loading and plain-text rendering for the `persona` binary.

use anyhow::{Context, Result};
use persona_core::{CatalogSnapshot, PersonaCacheRecord, PersonaConfig, PersonaResult};
use std::fs;
use std::path::Path;
use tracing::info;

const BAR_WIDTH: usize = 20;

/// Load a Data Dragon `champion.json` file
pub fn load_catalog(path: &Path) -> Result<CatalogSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = CatalogSnapshot::from_ddragon_json(&json)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    info!(version = catalog.version(), champions = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Config from an explicit path, else `PERSONA_CONFIG_PATH`, else defaults
pub fn load_config(path: Option<&Path>) -> Result<PersonaConfig> {
    match path {
        Some(path) => PersonaConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(PersonaConfig::from_env_or_default()),
    }
}

pub fn save_record(path: &Path, record: &PersonaCacheRecord) -> Result<()> {
    let json = record.to_json()?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn bar(value: u8) -> String {
    let filled = (value as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Human-readable persona report
pub fn render_report(result: &PersonaResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", result.archetype));
    out.push_str(&format!("  \"{}\"\n\n", result.quip));
    out.push_str(&format!("Role: {}\n\n", result.role));

    for (field, value) in result.traits.iter() {
        out.push_str(&format!("{:<13}{} {:>3}%\n", field.label(), bar(value), value));
    }

    if !result.strengths.is_empty() {
        out.push_str("\nStrengths\n");
        for line in &result.strengths {
            out.push_str(&format!("  + {line}\n"));
        }
    }
    if !result.blind_spots.is_empty() {
        out.push_str("\nBlind spots\n");
        for line in &result.blind_spots {
            out.push_str(&format!("  - {line}\n"));
        }
    }

    out.push_str("\nResolved\n");
    for trace in &result.trace {
        let id = trace.id.as_deref().unwrap_or("(none)");
        let method = trace.method.map(|m| format!("{m:?}").to_lowercase()).unwrap_or_default();
        out.push_str(&format!("  {:<16} -> {:<12} {}\n", trace.input, id, method));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::{compute_persona, ChampionRecord, ClassTag, PersonaRequest};
    use std::io::Write;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(
            "test",
            vec![ChampionRecord::new("LeeSin", "Lee Sin").with_tags(&[ClassTag::Fighter])],
        )
        .unwrap()
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50).matches('#').count(), 10);
    }

    #[test]
    fn test_report_lists_every_field_and_input() {
        let request = PersonaRequest::new("Jungle", ["lee", "zzz", "j4"]);
        let result = compute_persona(&request, &catalog(), &PersonaConfig::default());
        let report = render_report(&result);

        assert!(report.starts_with(result.archetype.label()));
        for label in ["Aggression", "Risk", "Teamplay", "Control", "Mechanics", "Adaptability"] {
            assert!(report.contains(label), "missing {label}");
        }
        assert!(report.contains("LeeSin"));
        assert!(report.contains("(none)"));
        assert!(report.contains("alias"));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version": "9.9.9", "data": {{"Ahri": {{"id": "Ahri", "name": "Ahri", "tags": ["Mage"]}}}}}}"#
        )
        .unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.version(), "9.9.9");
        assert!(catalog.contains("Ahri"));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/champion.json")).unwrap_err();
        assert!(err.to_string().contains("reading catalog"));
    }
}

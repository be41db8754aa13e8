use anyhow::{Context, Result};
use colored::Colorize;
use reno_quote::models::Requirement;
use reno_quote::pricing;
use serde::Deserialize;
use std::path::Path;

/// Requirement document accepted by the quote command. Ids are optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequirementFile {
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    basic_info: reno_quote::models::BasicInfo,
    #[serde(default)]
    style_preferences: reno_quote::models::StylePreferences,
    #[serde(default)]
    material_choices: reno_quote::models::MaterialChoices,
}

impl RequirementFile {
    fn into_requirement(self) -> Requirement {
        let mut requirement = Requirement::new(self.project_id.unwrap_or_else(|| "local".to_string()));
        requirement.basic_info = self.basic_info;
        requirement.style_preferences = self.style_preferences;
        requirement.material_choices = self.material_choices;
        requirement
    }
}

fn load_requirement(path: &Path) -> Result<Requirement> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: RequirementFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid requirement JSON in {}", path.display()))?;
    Ok(file.into_requirement())
}

/// Execute the quote command
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let requirement = load_requirement(path)?;
    let quotation = pricing::calculate(&requirement)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quotation)?);
        return Ok(());
    }

    println!("{}", quotation.name.bold());
    println!();
    println!(
        "  {:<32} {:>12} {:>10} {:>14}",
        "Item".cyan(),
        "Unit price".cyan(),
        "Quantity".cyan(),
        "Total".cyan()
    );
    for detail in &quotation.details {
        println!(
            "  {:<32} {:>12.2} {:>10.2} {:>14.2}",
            detail.item, detail.unit_price, detail.quantity, detail.total
        );
        println!("    {}", detail.description.dimmed());
    }
    println!();
    println!("  {}: {:.2}", "Materials".cyan(), quotation.itemized_costs.materials);
    println!("  {}: {:.2}", "Labor".cyan(), quotation.itemized_costs.labor);
    println!("  {}: {:.2}", "Design".cyan(), quotation.itemized_costs.design);
    println!("  {}: {:.2}", "Total".green().bold(), quotation.total_price);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reno_quote::models::Style;
    use std::io::Write;

    #[test]
    fn test_load_requirement_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"basicInfo": {{"area": 60}}, "stylePreferences": {{"style": "nordic"}}}}"#
        )
        .unwrap();

        let requirement = load_requirement(file.path()).unwrap();
        assert_eq!(requirement.basic_info.area, Some(60.0));
        assert_eq!(requirement.style(), Style::Nordic);
        assert_eq!(requirement.project_id, "local");
    }

    #[test]
    fn test_execute_rejects_missing_area() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let err = execute(file.path(), true).unwrap_err();
        assert!(err.to_string().contains("area is required"));
    }
}

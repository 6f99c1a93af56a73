/// Project manifest authoring tool main entry point
mod manifest;

use constants::units::feet_to_metres;
use manifest::{ProjectManifest, starter_manifest, validate_manifest};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <generate|validate> <manifest.json>", args[0]);
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let path = &args[2];

    match command {
        "generate" => {
            let manifest = starter_manifest();
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(path, json)?;
            println!("wrote starter project manifest to {path}");
        }
        "validate" => {
            let json = fs::read_to_string(path)?;
            let manifest: ProjectManifest = serde_json::from_str(&json)?;
            let report = validate_manifest(&manifest);

            println!(
                "project '{}': {} levels, {} family types",
                manifest.project_name,
                manifest.levels.len(),
                manifest.furniture_families.len()
            );
            for level in &manifest.levels {
                println!(
                    "  level '{}' at {:.1} ft ({:.2} m)",
                    level.name,
                    level.elevation,
                    feet_to_metres(level.elevation)
                );
            }
            for problem in &report {
                println!("problem: {problem}");
            }
            if !report.is_empty() {
                std::process::exit(1);
            }
            println!("manifest is valid");
        }
        other => {
            eprintln!("unknown command '{other}', expected generate or validate");
            std::process::exit(1);
        }
    }

    Ok(())
}

use crate::OutputFormat;
use crate::chart::{PRESETS, Unit, pace_seconds};
use crate::format::{format_pace, format_time};
use anyhow::Result;

/// List the target-time presets with their even-split paces.
pub fn presets(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "{:<8} {:<10} {:<9} {:<9}",
                "Preset", "Finish", "Pace/km", "Pace/mi"
            );
            println!("{}", "-".repeat(38));
            for preset in PRESETS {
                let secs = preset.minutes * 60.0;
                println!(
                    "{:<8} {:<10} {:<9} {:<9}",
                    preset.label,
                    format_time(secs),
                    format_pace(pace_seconds(secs, Unit::Km)),
                    format_pace(pace_seconds(secs, Unit::Mi)),
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = PRESETS
                .iter()
                .map(|preset| {
                    let secs = preset.minutes * 60.0;
                    serde_json::json!({
                        "label": preset.label,
                        "minutes": preset.minutes,
                        "finish": format_time(secs),
                        "pace_km": format_pace(pace_seconds(secs, Unit::Km)),
                        "pace_mi": format_pace(pace_seconds(secs, Unit::Mi)),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

use crate::chart::PRESETS;
use crate::config::Config;
use crate::format::format_time;
use crate::state::{FileStore, TargetTime, TokenFile};
use crate::token;
use anyhow::{Context, Result};

use super::share::share_url;

/// Set and persist the target finish time.
///
/// Input comes from one of three places: a time string, raw minutes, or a
/// preset label. The value is clamped to the configured range here — the
/// holder itself accepts whatever it is given.
pub fn set(
    config: &Config,
    time: Option<String>,
    minutes: Option<f64>,
    preset: Option<String>,
) -> Result<()> {
    let requested = if let Some(t) = &time {
        token::decode(t)
    } else if let Some(m) = minutes {
        anyhow::ensure!(m.is_finite(), "--minutes must be a finite number");
        m
    } else if let Some(label) = &preset {
        PRESETS
            .iter()
            .find(|p| p.label == label.as_str())
            .with_context(|| {
                format!("Unknown preset '{}'. Run 'mpace presets' to list them", label)
            })?
            .minutes
    } else {
        anyhow::bail!("Provide a time (H:MM:SS), --minutes, or --preset");
    };

    let clamped = config.chart.clamp(requested);
    if clamped != requested {
        eprintln!(
            "Note: {} min is outside the {}-{} min range, using {} min",
            requested, config.chart.min_minutes, config.chart.max_minutes, clamped
        );
    }

    let dir = config.state_dir()?;
    let store = FileStore::open(&dir);
    let channel = TokenFile::new(&dir, None);
    let mut holder = TargetTime::init(store, channel, config.chart.default_minutes);
    holder.set_minutes(clamped);

    let tok = token::encode(clamped);
    println!("✓ Target time set to {}", format_time(holder.total_seconds()));
    println!("Share: {}", share_url(config, &tok));

    Ok(())
}

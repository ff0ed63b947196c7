use crate::OutputFormat;
use crate::chart::{self, Unit};
use crate::config::Config;
use crate::format::{format_pace, format_time};
use crate::locale::{self, Key, Lang};
use crate::state::{FileStore, KvStore, LANG_KEY, TargetTime, TokenFile, UNIT_KEY};
use anyhow::Result;

/// Resolve the active unit: explicit flag (persisted as the new preference),
/// then stored preference, then kilometers.
pub fn resolve_unit(store: &mut impl KvStore, flag: Option<Unit>) -> Unit {
    match flag {
        Some(unit) => {
            store.set(UNIT_KEY, unit.as_str());
            unit
        }
        None => store
            .get(UNIT_KEY)
            .and_then(|v| Unit::parse(&v))
            .unwrap_or_default(),
    }
}

/// Resolve the display language: explicit flag (persisted), then stored
/// preference, then the LANG environment probe.
pub fn resolve_lang(store: &mut impl KvStore, flag: Option<Lang>) -> Lang {
    match flag {
        Some(lang) => {
            store.set(LANG_KEY, lang.as_str());
            lang
        }
        None => store
            .get(LANG_KEY)
            .and_then(|v| Lang::parse(&v))
            .unwrap_or_else(|| locale::detect_lang(std::env::var("LANG").ok().as_deref())),
    }
}

pub fn chart(
    config: &Config,
    time: Option<String>,
    unit: Option<Unit>,
    lang: Option<Lang>,
    format: OutputFormat,
) -> Result<()> {
    let dir = config.state_dir()?;
    let store = FileStore::open(&dir);
    // A --time argument is the override channel: it wins over the saved
    // target but does not overwrite it.
    let channel = TokenFile::new(&dir, time);
    let mut holder = TargetTime::init(store, channel, config.chart.default_minutes);

    let unit = resolve_unit(holder.store_mut(), unit);
    let lang = resolve_lang(holder.store_mut(), lang);

    let total_seconds = holder.total_seconds();
    let splits = chart::compute_splits(total_seconds, unit, |tag| {
        locale::resolve(lang, Key::for_tag(tag)).to_string()
    });
    let pace = chart::pace_seconds(total_seconds, unit);

    match format {
        OutputFormat::Text => {
            let distance_label = match unit {
                Unit::Km => "42.195 km",
                Unit::Mi => "26.2 mi",
            };
            let pace_key = match unit {
                Unit::Km => Key::PacePerKm,
                Unit::Mi => Key::PacePerMile,
            };
            println!(
                "{} · {}",
                locale::resolve(lang, Key::Title),
                distance_label
            );
            println!(
                "{}: {}   {}: {}",
                locale::resolve(lang, Key::TargetTime),
                format_time(total_seconds),
                locale::resolve(lang, pace_key),
                format_pace(pace)
            );
            println!();
            println!(
                "{:<16} {:<12}",
                locale::resolve(lang, Key::Distance),
                locale::resolve(lang, Key::SplitTime)
            );
            println!("{}", "-".repeat(28));
            for split in &splits {
                let marker = if split.is_half || split.is_finish {
                    "*"
                } else {
                    " "
                };
                println!("{:<16} {} {}", split.label, marker, split.time);
            }
            println!();
            println!("{}", locale::resolve(lang, Key::GoodLuck));
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "minutes": holder.minutes(),
                "target_time": format_time(total_seconds),
                "unit": unit,
                "lang": lang,
                "pace": format_pace(pace),
                "splits": splits,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

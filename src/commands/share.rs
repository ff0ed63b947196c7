use crate::OutputFormat;
use crate::config::Config;
use crate::format::format_time;
use crate::state::{FileStore, TargetTime, TokenFile};
use crate::token;
use anyhow::Result;

pub fn share_url(config: &Config, token: &str) -> String {
    format!(
        "{}?target_time={}",
        config.share.base_url.trim_end_matches('/'),
        token
    )
}

/// Print the shareable link for the current target time.
pub fn share(config: &Config, format: OutputFormat) -> Result<()> {
    let dir = config.state_dir()?;
    let store = FileStore::open(&dir);
    let channel = TokenFile::new(&dir, None);
    let holder = TargetTime::init(store, channel, config.chart.default_minutes);

    let tok = holder
        .channel()
        .last_published()
        .unwrap_or_else(|| token::encode(holder.minutes()));
    let url = share_url(config, &tok);

    match format {
        OutputFormat::Text => {
            println!("Target: {}", format_time(holder.total_seconds()));
            println!("Token:  {}", tok);
            println!("Link:   {}", url);
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "minutes": holder.minutes(),
                "target_time": format_time(holder.total_seconds()),
                "token": tok,
                "url": url,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

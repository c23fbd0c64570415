use colored::*;
use hostel_guide::api::dtos::responses::EventDetailResponse;
use hostel_guide::config::Config;
use hostel_guide::domain::services::event_service::{EventService, DEFAULT_WINDOW_DAYS};
use hostel_guide::error::AppError;
use hostel_guide::infra::factory::bootstrap_state;
use std::path::Path;

#[tokio::main]
async fn main() {
    println!("{}", "📦 Exporting event pages".bold().green());

    let config = Config::from_env();
    println!("Content: {}", config.content_dir.display());
    println!("Output:  {}", config.export_dir.display());

    let state = bootstrap_state(&config);

    match export(&state.event_service, &config.export_dir).await {
        Ok(count) => println!("{}", format!("✅ Wrote {} event pages.", count).green()),
        Err(e) => {
            eprintln!("{}", format!("❌ Export failed: {}", e).red().bold());
            std::process::exit(1);
        }
    }
}

async fn export(events: &EventService, out_dir: &Path) -> Result<usize, AppError> {
    tokio::fs::create_dir_all(out_dir).await?;

    let feed = events.upcoming_events(DEFAULT_WINDOW_DAYS).await?;
    write_json(&out_dir.join("index.json"), &feed).await?;

    let ids = events.all_event_ids().await?;
    let mut written = 0;

    for id in &ids {
        if !is_safe_file_stem(id) {
            println!("{}", format!("⚠️  '{}' cannot be used as a file name, skipping", id).yellow());
            continue;
        }
        let Some(event) = events.resolve(id).await? else {
            println!("{}", format!("⚠️  {} did not resolve, skipping", id).yellow());
            continue;
        };
        let page = EventDetailResponse {
            is_recurring: event.is_recurring,
            event,
        };
        write_json(&out_dir.join(format!("{}.json", id)), &page).await?;
        println!("   {}", id.cyan());
        written += 1;
    }

    Ok(written)
}

// Ids come from content files; keep every page inside the output directory.
fn is_safe_file_stem(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains("..")
        && !id.contains(['/', '\\'])
        && !id.chars().any(char::is_control)
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let body = serde_json::to_vec_pretty(value)
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to encode {}: {}", path.display(), e)))?;
    tokio::fs::write(path, body).await?;
    Ok(())
}

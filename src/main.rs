use clap::Parser;
use kushti_post::{cli, config, error, generator, interactive, media, platform, store, wizard};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use kushti_post_common::PostingInput;
use store::{FileStore, ReportStore, SettingsStore};

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    let kv = FileStore::new(&data_dir);

    match cli.command {
        Commands::Post { keyword, event, location, date, language, video } => {
            let client = generator::GeminiClient::from_config(&config)?;

            let video_file = match video {
                Some(path) => Some(media::check_video_file(&path)?),
                None => None,
            };
            let input = PostingInput {
                video_file,
                primary_keyword: keyword.unwrap_or_default(),
                event_name: event,
                location,
                date,
                language: language.unwrap_or_default(),
            };

            interactive::run_wizard(
                wizard::Wizard::with_input(input),
                &kv,
                &client,
                &platform::BrowserOpener,
            )
            .await?;
        }

        Commands::Settings {
            show,
            set_page,
            page_id,
            clear_page,
            footer,
            theme,
            add_hashtag,
            remove_hashtag,
        } => {
            let store = SettingsStore::new(&kv);
            let mut settings = store.load()?;
            let mut changed = false;

            if let (Some(name), Some(id)) = (set_page, page_id) {
                settings.set_facebook_page(&name, &id)?;
                println!("✔ Facebook Page: {}", name.trim());
                changed = true;
            }
            if clear_page {
                settings.clear_facebook_page();
                println!("✔ Facebook Page removed");
                changed = true;
            }
            if let Some(footer) = footer {
                settings.set_footer(&footer);
                changed = true;
            }
            if let Some(theme) = theme {
                settings.set_theme(theme);
                changed = true;
            }
            for tag in &add_hashtag {
                if settings.add_hashtag(tag) {
                    changed = true;
                } else {
                    println!("⚠ Skipped hashtag: {}", tag);
                }
            }
            for tag in &remove_hashtag {
                if settings.remove_hashtag(tag) {
                    changed = true;
                } else {
                    println!("⚠ Not saved: {}", tag);
                }
            }

            if changed {
                store.save(&settings)?;
                println!("✔ Settings saved");
            }

            if show || !changed {
                println!("Settings ({}):", kv.dir().display());
                match settings.facebook_page() {
                    Some(page) => println!("  Facebook Page: {} (ID: {})", page.name, page.id),
                    None => println!("  Facebook Page: (none)"),
                }
                println!("  Theme: {}", settings.theme);
                println!("  Hashtags: {}", settings.saved_hashtags.join(" "));
                println!("  Footer: {}", settings.default_footer.replace('\n', " / "));
            }
        }

        Commands::Reports { limit, json } => {
            let mut reports = ReportStore::new(&kv).list()?;
            if let Some(limit) = limit {
                reports.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else if reports.is_empty() {
                println!("No posting reports yet");
            } else {
                for report in &reports {
                    let mark = |posted: bool| if posted { "✔" } else { "…" };
                    println!(
                        "{}  {}  [{}]  YT {} FB {} IG {} WA {}  ({})",
                        report.date,
                        report.title,
                        report.keyword,
                        mark(report.status.youtube),
                        mark(report.status.facebook),
                        mark(report.status.instagram),
                        mark(report.status.whatsapp),
                        report.fb_page,
                    );
                }
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ Model: {}", config.model);
            }

            if show {
                println!("Config:");
                println!("  Model: {}", config.model);
                println!("  API: {}", config.api_base_url);
                println!("  Data: {}", data_dir.display());
                println!("  API key: {}", if config.has_api_key() { "set" } else { "not set" });
            }
        }
    }

    Ok(())
}

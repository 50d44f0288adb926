use anyhow::{Result, bail};
use falak::cards::{FalkCategory, Period, ZODIAC_SIGNS};
use falak::config::Config;
use falak::generation::{GeminiBackend, StreamEvent};
use falak::history::HistoryStore;
use falak::profile::{Language, ProfileService, Theme};
use falak::readings::Readings;
use falak::scoring;
use falak::storage::FileStore;
use std::io::Write;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: falak <command>

readings:
  tarot                                  draw today's tarot card
  horoscope <sign> [daily|weekly|monthly]
  numerology <name> <yyyy-mm-dd>
  compat <name1> <name2>                 name compatibility
  zodiac-compat <sign1> <sign2>
  love <name1> <name2>                   love compatibility
  gematria <name>                        message of the day
  talee <name> <mothers-name> <gender>
  falk <gender> <skin-tone> <love|work|luck>

profile:
  profile show
  profile name <name>
  profile dob <yyyy-mm-dd>
  profile language <ar|en|fr>
  profile theme <light|dark>
  profile avatar <id|clear>

history:
  history show
  history remove <id>
  history clear
  signs                                  list zodiac sign identifiers";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = Config::load()?;
    let kv = Arc::new(FileStore::new(&config.data_dir).await?);
    let profile = ProfileService::load(kv.clone()).await?;
    let history = HistoryStore::load(kv, profile.clone()).await;
    let backend = Arc::new(GeminiBackend::new(&config));
    let readings = Readings::new(&config, backend, history.clone(), profile.clone());

    match (command.as_str(), &args[1..]) {
        ("tarot", []) => {
            let (tx, printer) = spawn_printer();
            let result = readings.tarot(tx).await?;
            printer.await?;
            if result.outcome.from_cache {
                println!("(today's reading)\n{}: {}", result.card.english, result.interpretation);
            } else {
                println!("Card drawn: {} ({})", result.card.english, result.card.arabic);
            }
        }
        ("horoscope", [sign, rest @ ..]) => {
            let period = match rest {
                [] => Period::Daily,
                [p] => Period::parse(p).ok_or_else(|| {
                    anyhow::anyhow!("unknown period: {p} (daily, weekly or monthly)")
                })?,
                _ => bail!("{USAGE}"),
            };
            let (tx, printer) = spawn_printer();
            let outcome = readings.horoscope(sign, period, tx).await?;
            printer.await?;
            if outcome.from_cache {
                println!("(today's reading)\n{}", outcome.content);
            }
        }
        ("numerology", [name, dob]) => {
            let (tx, printer) = spawn_printer();
            let outcome = readings.numerology(name, dob, tx).await?;
            printer.await?;
            if outcome.from_cache {
                println!("(today's reading)\n{}", outcome.content);
            }
        }
        ("compat", [name1, name2]) => {
            println!("Compatibility: {}%", scoring::name_compatibility(name1, name2));
            let (tx, printer) = spawn_printer();
            let result = readings.name_compatibility(name1, name2, tx).await?;
            printer.await?;
            if result.outcome.from_cache {
                println!("(today's reading)\n{}", result.outcome.content);
            }
        }
        ("zodiac-compat", [sign1, sign2]) => {
            let (tx, printer) = spawn_printer();
            let outcome = readings.zodiac_compatibility(sign1, sign2, tx).await?;
            printer.await?;
            if outcome.from_cache {
                println!("(today's reading)\n{}", outcome.content);
            }
        }
        ("love", [name1, name2]) => {
            println!("Love match: {}%", scoring::love_compatibility(name1, name2));
            let (tx, printer) = spawn_printer();
            let result = readings.love_compatibility(name1, name2, tx).await?;
            printer.await?;
            if result.outcome.from_cache {
                println!("(today's reading)\n{}", result.outcome.content);
            }
        }
        ("gematria", [name]) => {
            let (tx, printer) = spawn_printer();
            let result = readings.gematria(name, tx).await?;
            printer.await?;
            if result.outcome.from_cache {
                println!("(today's reading)\n{}", result.outcome.content);
            }
        }
        ("talee", [name, mothers_name, gender]) => {
            let (tx, printer) = spawn_printer();
            let outcome = readings.talee(name, mothers_name, gender, tx).await?;
            printer.await?;
            if outcome.from_cache {
                println!("(today's reading)\n{}", outcome.content);
            }
        }
        ("falk", [gender, skin_tone, category]) => {
            let category = FalkCategory::parse(category)
                .ok_or_else(|| anyhow::anyhow!("unknown category: {category} (love, work or luck)"))?;
            let (tx, printer) = spawn_printer();
            let result = readings.falk_lyom(gender, skin_tone, category, tx).await?;
            printer.await?;
            if result.outcome.from_cache {
                println!("(today's reading)\n{}: {}", result.card.name, result.interpretation);
            } else {
                println!("Card drawn: {}", result.card.name);
            }
        }
        ("profile", rest) => run_profile(&profile, rest).await?,
        ("history", rest) => run_history(&history, rest).await?,
        ("signs", []) => {
            let language = profile.language().await;
            for sign in &ZODIAC_SIGNS {
                println!("{} {:<12} {}", sign.icon, sign.value, sign.label(language));
            }
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

async fn run_profile(profile: &ProfileService, args: &[String]) -> Result<()> {
    match args {
        [] | [_] if matches!(args.first().map(String::as_str), None | Some("show")) => {
            let name = profile.user_name().await;
            println!("name:     {}", if name.is_empty() { "(not set)" } else { name.as_str() });
            println!("dob:      {}", profile.user_dob().await);
            println!("language: {}", profile.language().await.as_str());
            println!("theme:    {}", profile.theme().await.as_str());
            println!("avatar:   {}", profile.avatar().await.unwrap_or_else(|| "(none)".into()));
        }
        [cmd, value] => match cmd.as_str() {
            "name" => profile.set_user_name(value).await?,
            "dob" => profile.set_user_dob(value).await?,
            "language" => {
                let language = Language::parse(value)
                    .ok_or_else(|| anyhow::anyhow!("unknown language: {value} (ar, en or fr)"))?;
                profile.set_language(language).await?;
            }
            "theme" => {
                let theme = match value.as_str() {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => bail!("unknown theme: {value} (light or dark)"),
                };
                profile.set_theme(theme).await?;
            }
            "avatar" if value == "clear" => profile.set_avatar(None).await?,
            "avatar" => profile.set_avatar(Some(value)).await?,
            _ => bail!("{USAGE}"),
        },
        _ => bail!("{USAGE}"),
    }
    Ok(())
}

async fn run_history(history: &HistoryStore, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("show") => {
            let records = history.all().await;
            if records.is_empty() {
                println!("No readings recorded yet.");
            }
            for record in records {
                println!("{}  [{}] {}  ({})", record.id, record.kind.as_str(), record.title, record.date);
            }
        }
        Some("remove") => match args.get(1).and_then(|id| id.parse::<i64>().ok()) {
            Some(id) => history.remove(id).await?,
            None => bail!("history remove needs a numeric id"),
        },
        Some("clear") => history.clear().await?,
        _ => bail!("{USAGE}"),
    }
    Ok(())
}

/// Prints stream fragments as they arrive. Finishes when the last sender
/// clone is dropped at the end of the reading call.
fn spawn_printer() -> (mpsc::Sender<StreamEvent>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel(64);
    let handle = tokio::spawn(async move {
        let mut out = std::io::stdout();
        while let Some(event) = rx.recv().await {
            match event {
                StreamEvent::TextDelta(fragment) => {
                    let _ = write!(out, "{fragment}");
                    let _ = out.flush();
                }
                StreamEvent::Done => {
                    let _ = writeln!(out);
                }
                StreamEvent::Error(e) => {
                    let _ = writeln!(out, "\n[stream failed] {e}");
                }
            }
        }
    });
    (tx, handle)
}

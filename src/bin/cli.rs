use anyhow::Context;
use clap::{Parser, Subcommand};
use oshi_checker_engine::{
    AttributeCatalog, AttributeCategory, BattleRecord, DataCatalog, EngineConfig, KoreanLevel, LanguagePreference, Locale,
    OshiEngine, SurveyScores,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oshi-checker-cli")]
#[command(about = "Oshi Checker ranking engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output locale (ja, ko, en)
    #[arg(short, long, global = true, default_value = "ja")]
    locale: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a survey, apply recorded battles and print the final ranking
    Rank {
        /// Members JSON file
        #[arg(long)]
        members: PathBuf,

        /// Groups JSON file
        #[arg(long)]
        groups: PathBuf,

        /// Survey scores JSON file ({"key": weight, ...})
        #[arg(long)]
        survey: PathBuf,

        /// Battle records JSON file, applied in order
        #[arg(long)]
        battles: Option<PathBuf>,

        /// Korean level (none, beginner, intermediate, advanced, native)
        #[arg(short, long, default_value = "none")]
        korean_level: String,

        /// Do not favor members with Japanese support
        #[arg(long)]
        no_jp_preference: bool,
    },

    /// List the attribute catalog by category
    Labels,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oshi_checker_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let locale = Locale::parse_or_primary(&cli.locale);
    let config = EngineConfig::from_env()?;

    match cli.command {
        Commands::Rank {
            members,
            groups,
            survey,
            battles,
            korean_level,
            no_jp_preference,
        } => {
            let catalog = DataCatalog::from_paths(&members, &groups)?;
            let engine = OshiEngine::new(catalog, config)?;

            let scores: SurveyScores = read_json(&survey)?;
            let records: Vec<BattleRecord> = match &battles {
                Some(path) => read_json(path)?,
                None => Vec::new(),
            };

            let pool = engine.survey_candidates(&scores);
            println!("🎯 Candidate pool ({}):", pool.len());
            for (i, candidate) in pool.iter().enumerate() {
                println!(
                    "   {}. {} ({:.2})",
                    i + 1,
                    candidate.member.display_name(locale),
                    candidate.survey_score
                );
            }

            let mut session = engine.start_battle(pool);
            for record in &records {
                session
                    .record(&record.winner_id, record.loser_id())
                    .with_context(|| format!("applying battle {} vs {}", record.member_a, record.member_b))?;
            }

            let preference = LanguagePreference::new(
                KoreanLevel::parse_lenient(&korean_level),
                !no_jp_preference,
            );
            let result = engine.final_ranking(&session.finish(), preference);

            println!("\n🏆 Final ranking:");
            for (i, candidate) in result.ranked.iter().enumerate() {
                let group = engine
                    .group_of(candidate)
                    .map(|g| g.display_name(locale).to_string())
                    .unwrap_or_default();
                let tags: Vec<&str> = candidate
                    .member
                    .tags
                    .iter()
                    .take(3)
                    .map(|tag| engine.label_of(tag, locale))
                    .collect();

                println!(
                    "   {}. {} [{}] score {:.2} (wins {}, bonus {:.1}) {}",
                    i + 1,
                    candidate.member.display_name(locale),
                    group,
                    candidate.final_score,
                    candidate.win_count,
                    candidate.language_bonus,
                    tags.join(" / ")
                );
                if i + 1 == result.top().len() && !result.finalists().is_empty() {
                    println!("   ---");
                }
            }

            println!("\n📣 Share text:\n{}", engine.share_text(&result, locale));
        }

        Commands::Labels => {
            let attributes = AttributeCatalog::builtin();
            for category in AttributeCategory::ALL {
                println!("{} ({})", category.as_str(), category.color());
                for key in attributes.keys_in(category) {
                    println!("   {:<18} {}", key, attributes.label_of(key, locale));
                }
            }
        }
    }

    Ok(())
}

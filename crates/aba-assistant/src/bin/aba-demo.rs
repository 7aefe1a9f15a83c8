//! Aba marketplace assistant demo
//!
//! # Usage
//!
//! ```bash
//! # One-off product search
//! cargo run --bin aba-demo -- search "I need wedding shoes size 43" --lang pidgin
//!
//! # Dashboard question
//! cargo run --bin aba-demo -- ask "Total revenue this month?"
//!
//! # Scripted conversation
//! cargo run --bin aba-demo -- chat --persona buyer --lang yoruba
//!
//! # Interactive search
//! cargo run --bin aba-demo -- repl
//! ```

use aba_assistant::{
    AssistantConfig, ConversationScript, Insight, Language, Marketplace, Persona, SearchResult,
    Speaker,
};
use aba_utils::LogFormat;
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aba-demo")]
#[command(about = "Multilingual shopping assistant for the Aba digital marketplace", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language pack merged over the built-in tables
    #[arg(long, global = true)]
    pack: Option<PathBuf>,

    /// Log output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for products
    Search {
        /// What the shopper typed
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Answer language (english, igbo, yoruba, hausa, pidgin)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the dashboard analytics box
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        #[arg(long)]
        json: bool,
    },
    /// Play a scripted conversation
    Chat {
        /// trader or buyer
        #[arg(short, long)]
        persona: Persona,

        #[arg(short, long)]
        lang: Option<Language>,

        #[arg(long)]
        json: bool,
    },
    /// List sample queries and placeholders
    Samples {
        #[arg(short, long)]
        lang: Option<Language>,
    },
    /// Interactive search
    Repl {
        #[arg(short, long)]
        lang: Option<Language>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<AssistantConfig> {
    let config = match &cli.config {
        Some(path) => AssistantConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AssistantConfig::default(),
    };
    let mut config = config.with_env()?;
    if let Some(pack) = &cli.pack {
        config.language_pack_path = Some(pack.clone());
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_search(result: &SearchResult) {
    println!("{}\n", result.understanding);

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "Product", "Price", "Seller", "Rating", "Match", "Notes"]);

    for (rank, product) in result.matches.iter().enumerate() {
        let mut notes = Vec::new();
        if rank == 0 {
            notes.push("Best match".to_string());
        }
        if let Some(label) = product.bulk_label() {
            notes.push(label);
        }
        if product.in_stock {
            notes.push("In stock".to_string());
        }

        table.add_row(vec![
            Cell::new(&product.icon),
            Cell::new(&product.name),
            Cell::new(product.price_label()),
            Cell::new(&product.seller),
            Cell::new(format!("⭐ {:.1} ({})", product.rating, product.reviews)),
            Cell::new(product.confidence_label()),
            Cell::new(notes.join(", ")),
        ]);
    }

    println!("{table}\n");
    println!("💡 {}", result.suggestion);
}

fn print_insight(insight: &Insight) {
    println!("{}\n", insight.title);
    println!("{}", insight.content);
}

fn print_script(script: &ConversationScript) {
    let language = script.served;
    println!("{} {} · {}", language.flag(), language.name(), script.persona);
    if script.is_fallback() {
        println!("(no {} script, showing English)", script.requested.name());
    }
    println!();

    for turn in script.iter() {
        let who = match turn.speaker {
            Speaker::User => "You",
            Speaker::Assistant => "Aba AI",
        };
        println!("[{}] {who}:", turn.time);
        for line in turn.message.lines() {
            println!("    {line}");
        }
    }
}

fn print_samples(market: &Marketplace, language: Language) {
    let phrases = market.phrases();
    println!("{} {}: {}", language.flag(), language.name(), language.greeting());
    println!("\n{}\n", phrases.placeholder(language));
    for sample in phrases.sample_queries(language) {
        println!("  • {sample}");
    }
    println!("\nAsk the dashboard:");
    for question in phrases.analytics_questions() {
        println!("  • {question}");
    }
}

async fn repl(market: &Marketplace, language: Option<Language>) -> anyhow::Result<()> {
    let mut session = market.search_session();
    if let Some(language) = language {
        session.select_language(language);
    }

    println!("Aba marketplace assistant. Type a search, :lang <code> to switch language, :quit to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let current = session.language();
        print!("{} {}> ", current.flag(), current.short_code());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!("\n{}", current.thanks());
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match input.split_once(' ').map_or((input, ""), |(cmd, rest)| (cmd, rest.trim())) {
            (":quit" | ":q", _) => {
                println!("{}", current.thanks());
                break;
            }
            (":lang", code) => match code.parse::<Language>() {
                Ok(language) => {
                    session.select_language(language);
                    println!("{}", language.greeting());
                }
                Err(e) => eprintln!("{e}"),
            },
            (":samples", _) => print_samples(market, current),
            _ => {
                if let Err(e) = session.submit_query(input) {
                    eprintln!("{e}");
                    continue;
                }
                println!("Thinking...\n");
                if let Some(result) = session.settled().await {
                    print_search(&result);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    aba_utils::init_tracing_with(filter, cli.log_format);

    let config = load_config(&cli)?;
    let market = Marketplace::from_config(config)?;

    match cli.command {
        Commands::Search { query, lang, json } => {
            let mut session = market.search_session();
            if let Some(lang) = lang {
                session.select_language(lang);
            }
            session.submit_query(&query.join(" "))?;
            let result = session
                .settled()
                .await
                .context("search was cancelled")?;
            if json {
                print_json(&*result)?;
            } else {
                print_search(&result);
            }
        }
        Commands::Ask { question, json } => {
            let mut session = market.analytics_session();
            session.submit_query(&question.join(" "))?;
            let insight = session
                .settled()
                .await
                .context("question was cancelled")?;
            if json {
                print_json(&*insight)?;
            } else {
                print_insight(&insight);
            }
        }
        Commands::Chat {
            persona,
            lang,
            json,
        } => {
            let session = market.chat_session();
            if let Some(lang) = lang {
                session.select_language(lang);
            }
            session.select_persona(Some(persona));
            let script = session
                .current_script(market.scripts())
                .context("no persona selected")?;
            if json {
                print_json(&script)?;
            } else {
                print_script(&script);
            }
        }
        Commands::Samples { lang } => {
            print_samples(&market, lang.unwrap_or(market.config().default_language));
        }
        Commands::Repl { lang } => repl(&market, lang).await?,
    }

    Ok(())
}

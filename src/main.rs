// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-respond: inspect message catalogs and render response envelopes
//!
//! Loads a language directory the same way a web service would, then either
//! lists its languages, resolves a single message, or renders a full
//! response envelope in any supported format.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use i18n_respond::config::{DEFAULT_ENV_KEY, DEFAULT_LANG, DEFAULT_LANG_DIR};
use i18n_respond::{EnvelopeFormat, EnvelopeResponse, Options, Payload, RequestSignals, Resolver};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "i18n-respond")]
#[command(version)]
#[command(about = "Inspect message catalogs and render localized response envelopes")]
#[command(long_about = None)]
struct Cli {
    /// Directory holding one JSON file per language
    #[arg(short = 'D', long, global = true, default_value = DEFAULT_LANG_DIR)]
    dir: PathBuf,

    /// Language used when a request names none
    #[arg(long, global = true, default_value = DEFAULT_LANG)]
    default_lang: String,

    /// Environment variable holding the run mode (`prod` disables traces)
    #[arg(long, global = true, default_value = DEFAULT_ENV_KEY)]
    env_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the languages found in the language directory
    Languages,

    /// Resolve a single message code
    Lookup {
        /// Language to resolve in (falls back to the default language)
        #[arg(short, long)]
        lang: String,

        /// Message code
        #[arg(short, long, allow_hyphen_values = true)]
        code: String,

        /// Template parameter, repeat for each placeholder
        #[arg(short, long = "param")]
        params: Vec<String>,
    },

    /// Render a response envelope
    Envelope {
        /// Response code
        #[arg(short, long, allow_negative_numbers = true)]
        code: i64,

        /// Value of the `lang` request header
        #[arg(short, long)]
        lang: Option<String>,

        /// Value of the `User-Agent` request header
        #[arg(short, long)]
        user_agent: Option<String>,

        /// Value of the `debug` request header
        #[arg(long)]
        debug_header: Option<String>,

        /// Trace id attached by upstream middleware
        #[arg(short, long)]
        trace_id: Option<String>,

        /// Template parameter, repeat for each placeholder
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Response data as JSON (plain text is sent as a string)
        #[arg(short, long)]
        data: Option<String>,

        /// Error description for the debug trace
        #[arg(short, long)]
        error: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: EnvelopeFormat,

        /// JSONP callback name
        #[arg(long)]
        callback: Option<String>,

        /// Enable debug mode for every request
        #[arg(long)]
        debug: bool,

        /// Write the rendered envelope to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let options = Options::new()
        .with_lang_dir(&cli.dir)
        .with_default_lang(&cli.default_lang)
        .with_env_key(&cli.env_key);

    match cli.command {
        Commands::Languages => {
            let resolver = load(options)?;
            let default_lang = resolver.default_language();
            println!("Languages in {}: {}", cli.dir.display(), resolver.count());
            for lang in resolver.languages() {
                let messages = resolver.catalog().get(lang).map_or(0, |m| m.len());
                let marker = if lang == default_lang { " (default)" } else { "" };
                println!("  {:<12} {:>4} messages{}", lang, messages, marker);
            }
            if !resolver.language_exists(&default_lang) {
                println!(
                    "  warning: default language {} has no file; unknown codes are echoed",
                    default_lang
                );
            }
        }

        Commands::Lookup { lang, code, params } => {
            let resolver = load(options)?;
            println!("{}", resolver.resolve(&lang, &code, &params));
        }

        Commands::Envelope {
            code,
            lang,
            user_agent,
            debug_header,
            trace_id,
            params,
            data,
            error,
            format,
            callback,
            debug,
            output,
        } => {
            let resolver = load(options.with_debug_mode(debug))?;

            let signals = RequestSignals {
                language: lang,
                user_agent,
                debug: debug_header,
                trace_id,
            };
            let data = data.map(|raw| parse_data(&raw)).unwrap_or(Value::Null);
            let payload = if params.is_empty() {
                Payload::Plain(data)
            } else {
                Payload::WithParams { params, data }
            };

            let envelope = resolver.build_envelope(
                &signals,
                code,
                payload,
                error.as_ref().map(|e| e as &dyn std::fmt::Display),
            );
            let mut response = EnvelopeResponse::new(envelope, format);
            if let Some(callback) = callback {
                response = response.with_callback(callback);
            }
            let body = response
                .render()
                .with_context(|| format!("rendering envelope as {}", format))?;

            if let Some(output_path) = output {
                std::fs::write(&output_path, &body)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                println!("Envelope saved to: {}", output_path.display());
            } else {
                println!("{}", body);
            }
        }
    }

    Ok(())
}

fn load(options: Options) -> Result<Resolver> {
    let dir = options.lang_dir.clone();
    Resolver::new(options)
        .with_context(|| format!("loading language files from {}", dir.display()))
}

fn parse_data(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

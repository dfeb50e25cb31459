mod api;
mod provider;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use adcopy_gen::config::GeneratorConfig;
use adcopy_gen::hashtags::generate_hashtags_with_seed;
use adcopy_gen::{
    format_float, generate_with_provider, AdCopyRequest, Objective, Platform, Tone,
};

#[derive(Parser)]
#[command(name = "adcopy-gen", about = "Ad copy generator and performance estimator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Hashtags(HashtagArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[arg(long)]
    product: Option<String>,
    #[arg(long, default_value = "")]
    audience: String,
    #[arg(long, default_value = "facebook")]
    platform: String,
    #[arg(long, default_value = "awareness")]
    objective: String,
    #[arg(long, default_value = "professional")]
    tone: String,
    #[arg(long, default_value = "technology")]
    industry: String,
    #[arg(long)]
    max_length: Option<usize>,
    #[arg(long)]
    language: Option<String>,
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    budget: Option<f64>,
    #[arg(long)]
    ai: bool,
    #[arg(long)]
    ai_model: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    details: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            product: None,
            audience: String::new(),
            platform: "facebook".to_string(),
            objective: "awareness".to_string(),
            tone: "professional".to_string(),
            industry: "technology".to_string(),
            max_length: None,
            language: None,
            region: None,
            budget: None,
            ai: false,
            ai_model: None,
            seed: None,
            details: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct HashtagArgs {
    #[arg(long)]
    content: Option<String>,
    #[arg(long, default_value = "instagram")]
    platform: String,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Generate(GenerateArgs::default()));

    match command {
        Command::Generate(args) => run_generate(args).await,
        Command::Hashtags(args) => run_hashtags(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let config = GeneratorConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default();

    let mut input = AdCopyRequest::default();
    input.product_name = read_product(args.product)?;
    input.target_audience = args.audience;
    input.platform = Platform::from_str(&args.platform)
        .ok_or_else(|| format!("invalid platform: {}", args.platform))?;
    input.objective = Objective::from_str(&args.objective)
        .ok_or_else(|| format!("invalid objective: {}", args.objective))?;
    input.tone =
        Tone::from_str(&args.tone).ok_or_else(|| format!("invalid tone: {}", args.tone))?;
    input.industry = args.industry;
    input.max_length = args.max_length;
    input.language = args.language;
    input.region = args.region;
    input.budget = args.budget;

    let provider_copy = if args.ai {
        let client = provider::ProviderClient::from_env(&config.provider, args.ai_model)
            .ok_or_else(|| "ADCOPY_API_KEY is not set".to_string())?;
        Some(client.draft_copy(&input).await?)
    } else {
        None
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let output = generate_with_provider(&input, provider_copy.as_ref(), seed, &config);

    println!("Headline: {}", output.headline);
    println!("Primary text: {}", output.primary_text);
    println!("Call to action: {}", output.call_to_action);
    println!("Tagline: {}", output.tagline);
    println!(
        "Performance score: {} (improvement potential {})",
        format_float(output.performance_score, 1),
        format_float(output.improvement_potential, 1)
    );
    println!(
        "Estimated CTR: {}% | CPC: ${}",
        format_float(output.estimated_ctr, 2),
        format_float(output.estimated_cpc, 2)
    );
    println!(
        "Keywords ({}): {}",
        output.keywords.len(),
        output.keywords.join(", ")
    );
    println!(
        "Hashtags ({}): {}",
        output.hashtags.len(),
        output.hashtags.join(" ")
    );
    println!("Emojis: {}", output.emojis.join(" "));

    if !output.suggestions.is_empty() {
        println!("\nAlternate headlines:");
        for suggestion in &output.suggestions {
            println!("- {}", suggestion);
        }
    }

    if args.details {
        println!("\nValue proposition: {}", output.value_proposition);
        println!("Benefits:");
        for benefit in &output.benefits {
            println!("- {}", benefit);
        }
        println!("Creative id: {}", output.creative_id);
    }

    Ok(())
}

fn run_hashtags(args: HashtagArgs) -> Result<(), String> {
    let config = GeneratorConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default();
    let content = read_content(args.content)?;
    let platform = Platform::from_str(&args.platform)
        .ok_or_else(|| format!("invalid platform: {}", args.platform))?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let hashtags =
        generate_hashtags_with_seed(&content, platform, config.limits.hashtag_cap, seed);
    println!("{}", hashtags.join(" "));
    println!("({} hashtags)", hashtags.len());
    Ok(())
}

fn read_product(arg: Option<String>) -> Result<String, String> {
    if let Some(product) = arg {
        if !product.trim().is_empty() {
            return Ok(product.trim().to_string());
        }
    }
    Err("missing product name: pass --product".to_string())
}

fn read_content(arg: Option<String>) -> Result<String, String> {
    if let Some(content) = arg {
        if !content.trim().is_empty() {
            return Ok(content);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing content: pass --content or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

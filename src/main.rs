use clap::Parser;
use tracing_subscriber::EnvFilter;

use issueassist::{Analysis, Analyzer, Config, GitHubClient, IssueData};

#[derive(Parser, Debug)]
#[command(name = "issueassist")]
#[command(version = "0.1.0")]
#[command(about = "Analyze a GitHub issue with an LLM, or a keyword heuristic in demo mode")]
struct Args {
    /// GitHub repository URL (e.g. https://github.com/owner/repo)
    #[arg(short, long)]
    repo: String,

    /// Issue number to analyze
    #[arg(short, long)]
    issue: u64,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Force demo mode regardless of any configured credential
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("issueassist=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env();
    if args.demo {
        config.force_demo = true;
    }

    // Fetch errors are the only hard failures shown to the user; there is
    // no fallback for an issue that does not exist.
    let github = GitHubClient::new(config.github_token.as_deref())?;
    let issue = github.fetch_issue(&args.repo, args.issue).await?;
    tracing::info!(
        "Fetched issue with {} comment(s), state: {}",
        issue.comment_count(),
        issue.state
    );

    let analyzer = Analyzer::new(&config);
    tracing::info!(
        "Analyzing in {} mode",
        if analyzer.is_live() { "live" } else { "demo" }
    );
    let analysis = analyzer.analyze(&issue).await;

    output_analysis(&issue, &analysis, &args)?;

    Ok(())
}

fn output_analysis(issue: &IssueData, analysis: &Analysis, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(analysis)?,
        "markdown" => format_markdown(issue, analysis),
        _ => format_text(issue, analysis),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(issue: &IssueData, analysis: &Analysis) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Issue Analysis: {} ===\n\n", issue.title));
    output.push_str(&format!("State: {}\n", issue.state));
    if !issue.labels.is_empty() {
        output.push_str(&format!("Existing labels: {}\n", issue.labels.join(", ")));
    }
    output.push_str(&format!("Comments: {}\n\n", issue.comment_count()));

    output.push_str(&format!("Summary: {}\n", analysis.summary));
    output.push_str(&format!("Type: {}\n", analysis.issue_type));
    output.push_str(&format!("Priority: {}\n", analysis.priority_score));
    if !analysis.suggested_labels.is_empty() {
        output.push_str(&format!(
            "Suggested labels: {}\n",
            analysis.suggested_labels.join(", ")
        ));
    }
    output.push_str(&format!("Potential impact: {}\n", analysis.potential_impact));

    output
}

fn format_markdown(issue: &IssueData, analysis: &Analysis) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Issue Analysis: {}\n\n", issue.title));
    output.push_str(&format!(
        "*State: {}, {} comment(s)*\n\n",
        issue.state,
        issue.comment_count()
    ));

    output.push_str("| Field | Value |\n|-------|-------|\n");
    output.push_str(&format!("| Summary | {} |\n", analysis.summary));
    output.push_str(&format!("| Type | {} |\n", analysis.issue_type));
    output.push_str(&format!("| Priority | {} |\n", analysis.priority_score));
    output.push_str(&format!(
        "| Suggested labels | {} |\n",
        analysis.suggested_labels.join(", ")
    ));
    output.push_str(&format!(
        "| Potential impact | {} |\n",
        analysis.potential_impact
    ));

    output
}

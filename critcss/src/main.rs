use clap::Parser;
use critcss_lib::{extract, extract_from_endpoint_response, CssSource, WantedSelectors};
use std::fs;

const CRITCSS_INTRO: &str = r#"
        ______     _ __  ___________ _____
       / ____/____(_) /_/ ____/ ___// ___/
      / /   / ___/ / __/ /    \__ \ \__ \
     / /___/ /  / / /_/ /___ ___/ /___/ /
     \____/_/  /_/\__/\____//____//____/

    Welcome to CritCSS - Critical CSS Rule Extraction!
"#;

#[derive(Parser)]
#[command(name = "CritCSS")]
#[command(about = "Extract the critical subset of a stylesheet for a set of wanted selectors")]
struct Args {
    /// Input stylesheet.
    css: String,

    /// JSON file with the wanted selectors, either a bare selectors object
    /// ({"classes": [...], ...}) or a full page-analysis endpoint response.
    selectors: String,
}

fn main() {
    env_logger::init();
    eprintln!("{}", CRITCSS_INTRO);

    // parse the args given in terminal
    let args: Args = Args::parse();

    let css_text = match fs::read_to_string(&args.css) {
        Ok(css) => css,
        Err(e) => {
            eprintln!("Error reading CSS file: {}", e);
            std::process::exit(1);
        }
    };

    let selectors_text = match fs::read_to_string(&args.selectors) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading selectors file: {}", e);
            std::process::exit(1);
        }
    };

    let payload: serde_json::Value = match serde_json::from_str(&selectors_text) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error parsing selectors JSON: {}", e);
            std::process::exit(1);
        }
    };

    let source = CssSource::inline(css_text.clone());

    // A payload with a `success` flag is an endpoint response; anything
    // else is read as a bare WantedSelectors object.
    let result = if payload.get("success").is_some() {
        extract_from_endpoint_response(&source, &payload)
    } else {
        match serde_json::from_value::<WantedSelectors>(payload) {
            Ok(wanted) => extract(&source, &wanted),
            Err(e) => {
                eprintln!("Error reading wanted selectors: {}", e);
                std::process::exit(1);
            }
        }
    };

    match result {
        Ok(critical) => {
            let original_len = css_text.len();
            let critical_len = critical.len();
            let reduction = if original_len > 0 {
                (original_len - critical_len.min(original_len)) as f64 / original_len as f64 * 100.0
            } else {
                0.0
            };
            log::info!(
                "critical CSS: {} -> {} bytes ({:.1}% reduction)",
                original_len,
                critical_len,
                reduction
            );
            print!("{}", critical);
        }
        Err(e) => {
            eprintln!("Error extracting critical CSS: {}", e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use jsonstyle_lib::dom::dom_tree::Document;
use jsonstyle_lib::parser::{html, serialize};
use jsonstyle_lib::styler::{DEFAULT_CONFIG_PATH, DEFAULT_HEADER_TEXT_ID, DEFAULT_STYLE_BLOCK_ID};
use jsonstyle_lib::{
    ConfigSource, ConfigStyler, FileSource, HttpSource, RenderError, RenderReport, StyleTargets,
};
use log::info;
use std::fs;
use std::path::Path;
use url::Url;

const JSONSTYLE_INTRO: &str = r#"
       _                       __        __
      (_)________  ____  _____/ /___  __/ /__
     / / ___/ __ \/ __ \/ ___/ __/ / / / / _ \
    / (__  ) /_/ / / / (__  ) /_/ /_/ / /  __/
 __/ /____/\____/_/ /_/____/\__/\__, /_/\___/
/___/                          /____/

    Style an HTML page from a JSON configuration.
"#;

#[derive(Parser)]
#[command(name = "jsonstyle")]
#[command(about = "Apply a JSON style configuration to an HTML page")]
struct Args {
    /// Input HTML page.
    input: String,

    /// Where to write the styled page.
    output: String,

    /// Configuration path, relative to the page (or to --base-url).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Fetch the configuration over HTTP, resolved against this URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Id of the element receiving the generated CSS.
    #[arg(long, default_value = DEFAULT_STYLE_BLOCK_ID)]
    style_id: String,

    /// Id of the element receiving the header text.
    #[arg(long, default_value = DEFAULT_HEADER_TEXT_ID)]
    header_id: String,

    /// Emit minified CSS.
    #[arg(long)]
    minify: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    println!("{}", JSONSTYLE_INTRO);

    // parse the args given in terminal
    let args: Args = Args::parse();

    let html_content = match fs::read_to_string(&args.input) {
        Ok(html_content) => html_content,
        Err(e) => {
            eprintln!("Error reading HTML file: {}", e);
            std::process::exit(1);
        }
    };
    let document = html::create_dom_tree(&html_content);

    let result = match &args.base_url {
        Some(base_url) => match Url::parse(base_url) {
            Ok(base) => render(HttpSource::new(base), &args, &document).await,
            Err(e) => {
                eprintln!("Invalid base URL {}: {}", base_url, e);
                std::process::exit(1);
            }
        },
        None => {
            let page_dir = Path::new(&args.input)
                .parent()
                .unwrap_or_else(|| Path::new("."));
            render(FileSource::new(page_dir), &args, &document).await
        }
    };

    match result {
        Ok(report) => info!(
            "applied {} bytes of CSS, header text {:?}",
            report.css.len(),
            report.header_text
        ),
        Err(e) => {
            eprintln!("Error applying configuration: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = fs::write(&args.output, serialize::to_html(&document)) {
        eprintln!("Error writing {}: {}", args.output, e);
        std::process::exit(1);
    }
    println!("Wrote styled page to {}", args.output);
}

async fn render<S: ConfigSource>(
    source: S,
    args: &Args,
    document: &Document,
) -> Result<RenderReport, RenderError> {
    ConfigStyler::new(source)
        .with_config_path(args.config.as_str())
        .with_targets(StyleTargets {
            style_block_id: args.style_id.clone(),
            header_text_id: args.header_id.clone(),
        })
        .minified(args.minify)
        .render(document)
        .await
}

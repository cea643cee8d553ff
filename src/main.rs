//! AlphaEdge shell entry point.
//!
//! With the `gui` feature, opens the hosted web app in a native window.
//! Without it, runs a console demo that drives the bridge the way page
//! scripts would and prints what the UI thread receives.

use clap::Parser;

use alphaedge_bridge::app::LaunchOptions;

#[derive(Parser, Debug)]
#[command(name = "alphaedge-bridge", about = "AlphaEdge.ai native shell", version)]
struct Cli {
    /// Section of the web app to open (dashboard, stock_analysis, recommendations, portfolio, profile, help)
    #[arg(long, short = 'f')]
    feature: Option<String>,
    /// Origin of the hosted web app, overriding the settings file
    #[arg(long)]
    url: Option<String>,
    /// Settings file to use instead of the platform default
    #[arg(long)]
    config: Option<String>,
}

impl From<Cli> for LaunchOptions {
    fn from(cli: Cli) -> Self {
        LaunchOptions { feature: cli.feature, base_url: cli.url, config_path: cli.config }
    }
}

#[cfg(feature = "gui")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    alphaedge_bridge::logging::init();
    let cli = Cli::parse();
    alphaedge_bridge::ui::webview_app::run(cli.into())
}

#[cfg(not(feature = "gui"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::mpsc;

    use alphaedge_bridge::app::App;
    use alphaedge_bridge::rpc_handler::handle_message;
    use alphaedge_bridge::types::ui::UiCommand;

    alphaedge_bridge::logging::init();
    let cli = Cli::parse();
    let app = App::new(&cli.into())?;
    app.startup();

    println!();
    println!("AlphaEdge shell v{} (demo mode, no window)", env!("CARGO_PKG_VERSION"));
    println!("  title: {}", app.title());
    println!("  url:   {}", app.start_url());
    println!();

    let (tx, rx) = mpsc::channel::<UiCommand>();
    let bridge = app.bridge(tx);

    let script_calls = [
        r#"{"id":1,"method":"getData","params":{"dataType":"user"}}"#,
        r#"{"id":2,"method":"getData","params":{"dataType":"portfolio"}}"#,
        r#"{"id":3,"method":"getData","params":{"dataType":"watchlist"}}"#,
        r#"{"id":4,"method":"sendData","params":{"dataType":"add_stock","payload":"{\"ticker\":\"TCS\",\"quantity\":10,\"price\":3300.0}"}}"#,
        r#"{"id":5,"method":"sendData","params":{"dataType":"add_stock","payload":"{\"ticker\":\"TCS\"}"}}"#,
        r#"{"id":6,"method":"showToast","params":{"message":"Welcome back"}}"#,
        r#"{"id":7,"method":"close"}"#,
    ];

    for raw in script_calls {
        println!("→ {}", raw);
        let reply = handle_message(&bridge, raw);
        println!("← {}", serde_json::to_string(&reply)?);
        for command in rx.try_iter() {
            match command {
                UiCommand::ShowToast { message, duration_ms } => {
                    println!("  [toast {}ms] {}", duration_ms, message)
                }
                UiCommand::Close => println!("  [close]"),
                UiCommand::Reply(r) => println!("  [reply] {:?}", r),
            }
        }
    }

    app.shutdown();
    Ok(())
}

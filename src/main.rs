use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = huectl::cli::Cli::parse();
    let exit_code = huectl::run(cli).await;
    std::process::exit(exit_code);
}

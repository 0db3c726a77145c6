// ABOUTME: CLI entrypoint for the drivemd command
// ABOUTME: Handles error exit codes and command dispatch

use clap::Parser;
use drivemd::{
    api::DriveClient, auth::resolve_token, batch::run_export, cli::Cli, export::Exporter,
    model::ROOT_FOLDER_ID, progress::ConsoleProgress, Error, Result,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("drivemd: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command() {
        drivemd::cli::Commands::Export => {
            let settings = cli.resolve_settings()?;
            let token = resolve_token(cli.token.clone())?;
            let client = DriveClient::new(token.clone(), Some(cli.api_base.clone()))?;
            let exporter = Exporter::new(token, Some(cli.export_base.clone()))?;
            let progress = ConsoleProgress::new();

            run_export(&client, &exporter, &settings, &progress)?;
        }
        drivemd::cli::Commands::List => {
            let settings = cli.resolve_settings()?;
            let token = resolve_token(cli.token.clone())?;
            let client = DriveClient::new(token, Some(cli.api_base.clone()))?;

            let folder_id = if settings.folder_name.is_empty() {
                ROOT_FOLDER_ID.to_string()
            } else {
                client
                    .find_folder(&settings.folder_name)?
                    .ok_or_else(|| Error::FolderNotFound(settings.folder_name.clone()))?
            };

            for file in client.list_children(&folder_id)? {
                println!("{}\t{}", file.name, file.mime_type);
            }
        }
        drivemd::cli::Commands::SaveSettings => {
            let settings = cli.resolve_settings()?;
            settings.save()?;
            println!(
                "Saved settings to {}",
                drivemd::Settings::settings_path(&settings.download_path).display()
            );
        }
    }

    Ok(())
}

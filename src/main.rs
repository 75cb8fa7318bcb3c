use anyhow::{Context, Result};
use minised::cli::parse_args;
use minised::diff_formatter::DiffFormatter;
use minised::{config, logger, FileProcessor};
use tracing::debug;

fn main() -> Result<()> {
    let cli = parse_args();

    let config = config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(log_path) = logger::init_logging(cli.verbose, config.logging.debug)? {
        debug!(path = %log_path.display(), "file logging enabled");
    }

    let edit_config = cli.edit_config();
    let processor = FileProcessor::new(config.edit.options(), config.write.clone());

    if cli.dry_run {
        let edit = processor.process_file(&edit_config)?;
        print!("{}", DiffFormatter::format_edit(&edit, DiffFormatter::should_use_color()));
        return Ok(());
    }

    processor.apply_to_file(&edit_config)?;
    Ok(())
}

//! The `detect-encoding` command: report the detected character encoding of one or more files.

use crate::cli::DetectEncodingArgs;
use crate::config::ConfigService;
use crate::core::encoding::read_file_detecting_encoding;
use crate::Result;

/// Execute the `detect-encoding` command with an injected configuration service.
pub async fn execute(args: DetectEncodingArgs, config_service: &dyn ConfigService) -> Result<()> {
    let _config = config_service.get_config()?;
    let paths = args.get_file_paths()?;

    for path in &paths {
        match read_file_detecting_encoding(path) {
            Ok((text, info)) => {
                println!(
                    "{}: {} (confidence {:.2}{})",
                    path.display(),
                    info.charset.label(),
                    info.confidence,
                    if info.bom_detected { ", BOM" } else { "" }
                );
                if args.verbose {
                    let sample: String = text.chars().take(80).collect();
                    println!("  sample: {sample:?}");
                    if info.used_replacement {
                        println!("  warning: decoding required lossy replacement characters");
                    }
                }
            }
            Err(err) => {
                eprintln!("{}: {}", path.display(), err.user_friendly_message());
            }
        }
    }

    Ok(())
}

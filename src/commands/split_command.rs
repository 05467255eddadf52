//! The `split` command: separate a bilingual track back into monolingual tracks.

use crate::cli::SplitArgs;
use crate::config::ConfigService;
use crate::core::formats;
use crate::core::split::{self, SplitOptions};
use crate::Result;

/// Execute the `split` command with an injected configuration service.
pub async fn execute(args: SplitArgs, config_service: &dyn ConfigService) -> Result<()> {
    let _config = config_service.get_config()?;

    let source = formats::load_subtitle(&args.input)?;
    let options = SplitOptions {
        strip_formatting: !args.keep_formatting,
        lang1_label: args.lang1_label.clone(),
        lang2_label: args.lang2_label.clone(),
    };

    let result = split::split(&source, &options)?;

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| args.input.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();
    let base_name = split::clean_base_name(&args.input);

    if let Some(lang1) = result.lang1 {
        let extension = lang1.format.extension();
        let path = split::output_path(&args.input, &output_dir, &base_name, &args.lang1_label, extension);
        formats::save_subtitle(&lang1, &path)?;
        println!("Wrote {}", path.display());
    }
    if let Some(lang2) = result.lang2 {
        let extension = lang2.format.extension();
        let path = split::output_path(&args.input, &output_dir, &base_name, &args.lang2_label, extension);
        formats::save_subtitle(&lang2, &path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

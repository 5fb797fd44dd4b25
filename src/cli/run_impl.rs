use anyhow::Result;

use crate::formatters;
use crate::replacer::Replacer;
use crate::types::Replacement;

use super::Args;

pub fn run_with_args(args: Args) -> Result<()> {
    let replacement = Replacement::new(args.old_string.as_str(), args.new_string.as_str())
        .verify(args.should_verify());

    log::debug!(
        "target {}, verification {}",
        args.file_path.display(),
        if replacement.verify { "on" } else { "off" }
    );
    let report = Replacer::new().replace(&args.file_path, &replacement)?;

    if args.json {
        let s = serde_json::to_string_pretty(&report)?;
        println!("{}", s);
        return Ok(());
    }

    let s = formatters::text::format(&report);
    println!("{}", s);
    Ok(())
}

use crate::types::ReplaceReport;
use std::io::IsTerminal;

pub fn format(r: &ReplaceReport) -> String {
    format_with(r, &Colors::enabled())
}

fn format_with(r: &ReplaceReport, colors: &Colors) -> String {
    let check = colors.paint("✓", "32");
    let Some(counts) = r.verified else {
        return format!("{check} Replaced in {} (not verified)", r.path.display());
    };

    let plural = if r.replaced == 1 { "occurrence" } else { "occurrences" };
    [
        format!("{check} Successfully replaced in {}", r.path.display()),
        format!("  - Changed: {} {plural}", r.replaced),
        format!("  - New string count: {}", counts.new_string_count),
        format!("  - Old string remaining: {}", counts.old_string_remaining),
    ]
    .join("\n")
}

struct Colors {
    enabled: bool,
}

impl Colors {
    fn enabled() -> Self {
        Colors {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }
}

//! Interactive section picker

use anyhow::Result;
use std::io::{BufRead, Write};
use trustreg_dashboard::{Dashboard, OutputFormat, Section};

const PROMPT: &str = "Navigate> ";

pub fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Navigate")?;
    for (i, section) in Section::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, section.label())?;
    }
    writeln!(out, "  q. Quit")?;
    Ok(())
}

/// Read section choices until `q` or end of input
///
/// Each choice renders the section in terminal format. Render failures are
/// reported and the loop continues.
pub fn run_menu(dashboard: &Dashboard, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    print_menu(out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let choice = line?;
        let choice = choice.trim();
        match choice {
            "" => {}
            "q" | "quit" | "exit" => break,
            "?" | "help" => print_menu(out)?,
            _ => match crate::cli::parse_section(choice) {
                Ok(section) => match dashboard.render(&[section], OutputFormat::Terminal) {
                    Ok(rendered) => writeln!(out, "{rendered}")?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                },
                Err(e) => writeln!(out, "Error: {e}")?,
            },
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustreg_utils::DashboardConfig;

    fn dashboard() -> Dashboard {
        let config = DashboardConfig::builder()
            .data_path("/nonexistent/trustreg.csv")
            .build()
            .unwrap();
        Dashboard::new(config, std::path::Path::new("/"))
    }

    #[test]
    fn test_menu_lists_sections() {
        let mut out = Vec::new();
        print_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Overview"));
        assert!(text.contains("6. TrustReg Evolution Story"));
    }

    #[test]
    fn test_menu_loop() {
        let input = "6\nsettings\n2\nq\n3\n";
        let mut out = Vec::new();
        run_menu(&dashboard(), input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Phase 5 — Policy Learning"));
        assert!(text.contains("Error: Unknown section 'settings'"));
        assert!(text.contains("Error: Decision data not found"));
        // Nothing after `q` is rendered
        assert!(!text.contains("Decision Distribution"));
    }
}

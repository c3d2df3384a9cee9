//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use flywin_core::view::{BannerColor, ListSection, ReportView, RiskBanner};
use unicode_width::UnicodeWidthStr;

/// Print a finished audit.
pub fn print_report(subject: &str, report: &ReportView) {
    let title = report.company_name.as_deref().unwrap_or(subject);
    println!();
    println!("{}", title.cyan().bold());
    println!();

    if let Some(banner) = &report.banner {
        let (badge, summary) = banner_lines(banner, term_width().saturating_sub(2).max(20));
        println!("{}", banner_colored(&badge, banner.color));
        for line in summary {
            println!("{}", line);
        }
        println!();
    }

    for section in report.strengths.iter().chain(report.risks.iter()) {
        print_section(section, 0);
    }

    if !report.next_steps.is_empty() {
        println!("{}", "Next Steps".bold());
        for section in &report.next_steps {
            print_section(section, 2);
        }
    }

    if !report.gap_analysis.is_empty() {
        println!("{}", "Gap Analysis".bold());
        for section in &report.gap_analysis {
            print_section(section, 2);
        }
    }

    if !report.crm_links.is_empty() {
        println!("{}", "CRM".bold());
        for link in &report.crm_links {
            println!("  {} {}", pad_right(link.label, 12), link.url.underline());
        }
        println!();
    }

    if report.is_empty() {
        println!("{}", "The audit came back empty.".dimmed());
    }
}

/// Short coloured badge plus the full risk summary wrapped to `width`.
fn banner_lines(banner: &RiskBanner, width: usize) -> (String, Vec<String>) {
    let badge = match &banner.label {
        Some(label) => format!(" {} RISK ", truncate_visual(label, width - 7)),
        None => " RISK ".to_string(),
    };
    let summary = banner
        .summary
        .as_deref()
        .map(|s| wrap_visual(s, width))
        .unwrap_or_default();
    (badge, summary)
}

fn print_section(section: &ListSection, indent: usize) {
    let pad = " ".repeat(indent);
    println!("{}{}", pad, section_title(section.title));
    for item in &section.items {
        println!("{}  • {}", pad, item);
    }
    println!();
}

fn section_title(title: &str) -> ColoredString {
    match title {
        "Strengths" | "Complete" => title.green().bold(),
        "Risks" | "Missing" => title.red().bold(),
        "Partial" | "Immediate" => title.yellow().bold(),
        _ => title.bold(),
    }
}

fn banner_colored(text: &str, color: BannerColor) -> ColoredString {
    match color {
        BannerColor::High => text.white().bold().on_red(),
        BannerColor::Moderate => text.black().bold().on_yellow(),
        BannerColor::Low => text.white().bold().on_green(),
        BannerColor::Neutral => text.white().on_bright_black(),
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Word-wrap a string to a visual width. Words wider than the line keep a line of their own.
fn wrap_visual(s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let needed = UnicodeWidthStr::width(current.as_str()) + UnicodeWidthStr::width(word) + 1;
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_wrap_keeps_full_summary() {
        let summary = "Champion is engaged but the economic buyer has not been identified and procurement has stalled for three weeks.";
        let lines = wrap_visual(summary, 78);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| UnicodeWidthStr::width(l.as_str()) <= 78));
        assert_eq!(lines.join(" "), summary);
    }

    #[test]
    fn test_banner_shows_whole_summary() {
        let summary = "Champion is engaged but the economic buyer has not been identified and procurement has stalled for three weeks.";
        let banner = RiskBanner {
            label: Some("HIGH".to_string()),
            summary: Some(summary.to_string()),
            color: BannerColor::High,
        };

        let (badge, lines) = banner_lines(&banner, 78);
        assert_eq!(badge, " HIGH RISK ");
        assert_eq!(lines.join(" "), summary);
    }

    #[test]
    fn test_banner_without_summary() {
        let banner = RiskBanner {
            label: None,
            summary: None,
            color: BannerColor::Neutral,
        };
        let (badge, lines) = banner_lines(&banner, 78);
        assert_eq!(badge, " RISK ");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_wrap_long_word() {
        let lines = wrap_visual("see https://example.com/a/very/long/path ok", 10);
        assert_eq!(lines, vec!["see", "https://example.com/a/very/long/path", "ok"]);
    }

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a long summary line", 8), "a long..");
        assert_eq!(UnicodeWidthStr::width(truncate_visual("日本語のテキスト", 7).as_str()), 6);
    }
}

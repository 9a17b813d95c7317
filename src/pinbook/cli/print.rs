use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use pinbook::api::{CmdMessage, MessageLevel};
use pinbook::index::DisplayRecord;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const PIN_WIDTH: usize = 16;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One line per record: index, name, identifier, last change.
pub(super) fn render_record_list(records: &[DisplayRecord], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for dr in records {
        let idx = format!("{:>3}. ", dr.index.0);
        let name = pad_to_width(&truncate_to_width(&dr.record.name, NAME_WIDTH), NAME_WIDTH);
        let pin = pad_to_width(&dr.record.identifier, PIN_WIDTH);
        let time = format!(
            "{:>width$}",
            format_time_ago(dr.record.updated_at, now),
            width = TIME_WIDTH
        );
        out.push_str(&format!(
            "{}{} {} {}\n",
            idx,
            name,
            pin.bold(),
            time.dimmed()
        ));
    }
    out
}

/// Full detail for `view`, records separated by a blank line.
pub(super) fn render_full_records(
    records: &[DisplayRecord],
    label: &str,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let r = &dr.record;
        out.push_str(&format!(
            "{} {}\n",
            dr.index.to_string().yellow(),
            r.name.bold()
        ));
        out.push_str(&format!("  {}: {}\n", label, r.identifier));
        out.push_str(&format!(
            "  Added:   {} ({})\n",
            r.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            format_time_ago(r.created_at, now)
        ));
        out.push_str(&format!(
            "  Changed: {} ({})\n",
            r.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            format_time_ago(r.updated_at, now)
        ));
        out.push_str(&format!("  Id:      {}\n", r.id.as_str().dimmed()));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

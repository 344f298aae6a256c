//! Text rendering for command results.
//!
//! Every function here is pure: it takes a `CmdResult` (or part of one) and returns
//! the string to print. Styling goes through `console`, which drops colors when the
//! output is not a terminal.

use console::style;
use providerdb::commands::{CmdMessage, CmdResult, MessageLevel};
use providerdb::model::ProviderView;
use providerdb::pagination::Page;

const NAME_WIDTH: usize = 24;
const COMPANY_WIDTH: usize = 28;

pub fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();

    if let Some(page) = &result.page {
        out.push_str(&render_page(page));
    } else if !result.listed.is_empty() {
        out.push_str(&render_details(&result.listed));
    }

    if let Some(count) = result.count {
        out.push_str(&format!("{}\n", count));
    }

    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_json(result: &CmdResult) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let line = match m.level {
                MessageLevel::Info => style(&m.content).dim().to_string(),
                MessageLevel::Success => style(&m.content).green().to_string(),
                MessageLevel::Warning => style(&m.content).yellow().to_string(),
            };
            format!("{}\n", line)
        })
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let cut: String = text.chars().take(width - 1).collect();
        format!("{}…", cut)
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn render_row(p: &ProviderView) -> String {
    format!(
        "{:>4}  {}  {}  {}\n",
        style(p.id).cyan(),
        pad(&p.name, NAME_WIDTH),
        pad(&p.company_name, COMPANY_WIDTH),
        p.address
    )
}

pub fn render_page(page: &Page<ProviderView>) -> String {
    let mut out = String::new();
    if !page.items.is_empty() {
        out.push_str(&format!(
            "{:>4}  {}  {}  {}\n",
            style("ID").bold(),
            style(pad("NAME", NAME_WIDTH)).bold(),
            style(pad("COMPANY", COMPANY_WIDTH)).bold(),
            style("ADDRESS").bold()
        ));
        for p in &page.items {
            out.push_str(&render_row(p));
        }
    }

    if page.total_pages > 0 {
        let shown = page.current_page.saturating_add(1);
        let mut footer = format!(
            "Page {} of {} ({} providers)",
            shown,
            page.total_pages,
            page.total_items
        );
        if page.has_previous {
            footer.push_str(&format!(" · prev: --page {}", page.current_page.saturating_sub(1)));
        }
        if page.has_next {
            footer.push_str(&format!(" · next: --page {}", shown));
        }
        out.push_str(&format!("{}\n", style(footer).dim()));
    }
    out
}

pub fn render_details(providers: &[ProviderView]) -> String {
    providers
        .iter()
        .map(|p| {
            format!(
                "{} {}\n  Company: {}\n  Address: {}\n",
                style(format!("#{}", p.id)).cyan(),
                style(&p.name).bold(),
                p.company_name,
                p.address
            )
        })
        .collect()
}

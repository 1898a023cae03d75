use crate::app::RenderState;
use crate::engine::config::DisplayConfig;
use crate::engine::{Configuration, ParseReport};
use crate::reading::Token;
use crate::ui::theme::colors;
use crate::vocabulary::{VerbType, Vocabulary};
use crossterm::style::Stylize;

pub const HELP_TEXT: &str = "\
Type a description to craft it, e.g. `visual property is true`.
  @<file>                       craft a description read from a file
  :vocab                        list verbs and compounds
  :set symbolic centric|skip    how symbolic verbs (= : <>) are read
  :set inject on|off            record malformed properties as diagnostics
  :set merge greedy|backtrack   how unfinished compounds are settled
  :h, :help                     show this help
  :q, :quit                     leave";

pub fn render_tokens(tokens: &[Token]) -> String {
    let rendered: Vec<String> = tokens
        .iter()
        .map(|token| {
            let text = format!("[{}]", token.text);
            if token.is_merged() {
                text.with(colors::accent()).to_string()
            } else {
                text.with(colors::text()).to_string()
            }
        })
        .collect();

    format!("{} {}", "tokens:".with(colors::dimmed()), rendered.join(" "))
}

pub fn render_tuples(report: &ParseReport) -> String {
    if report.tuples.is_empty() {
        return format!("{} {}", "tuples:".with(colors::dimmed()), "none".with(colors::dimmed()));
    }

    let lines: Vec<String> = report
        .tuples
        .iter()
        .map(|tuple| {
            format!(
                "  ({:?}, {:?}) {}",
                tuple.subject,
                tuple.object,
                format!("{}@{}+{}", tuple.verb.verb_type, tuple.verb.start, tuple.verb.chain_offset)
                    .with(colors::dimmed())
            )
        })
        .collect();

    format!("{}\n{}", "tuples:".with(colors::dimmed()), lines.join("\n"))
}

pub fn render_configuration(configuration: &Configuration, pretty: bool) -> String {
    let json = if pretty {
        configuration.to_json_pretty()
    } else {
        configuration.to_json()
    };

    match json {
        Ok(json) => json.with(colors::json()).to_string(),
        Err(err) => format!("serialization failed: {}", err)
            .with(colors::error())
            .to_string(),
    }
}

fn render_diagnostics(configuration: &Configuration) -> Option<String> {
    if !configuration.has_diagnostics() {
        return None;
    }

    let lines: Vec<String> = configuration
        .diagnostics()
        .into_iter()
        .map(|(key, [subject, object])| {
            format!("  {} ({:?}, {:?})", key, subject, object)
                .with(colors::error())
                .to_string()
        })
        .collect();
    Some(lines.join("\n"))
}

pub fn render_vocabulary(vocabulary: &Vocabulary) -> String {
    let mut lines = Vec::new();
    for verb_type in VerbType::ALL {
        let phrases: Vec<&str> = vocabulary.verbs(verb_type).iter().map(String::as_str).collect();
        lines.push(format!(
            "{} {}",
            format!("{:>9}:", verb_type).with(colors::accent()),
            phrases.join(", ")
        ));
    }

    let compounds: Vec<&str> = vocabulary.compounds().iter().map(String::as_str).collect();
    lines.push(format!(
        "{} {}",
        format!("{:>9}:", "compound").with(colors::accent()),
        compounds.join(", ")
    ));
    lines.join("\n")
}

/// Render a state as terminal text; `None` when there is nothing to print.
pub fn render(state: &RenderState, display: &DisplayConfig) -> Option<String> {
    match state {
        RenderState::Report { source, report } => {
            let mut sections = vec![format!("# {}", source).with(colors::dimmed()).to_string()];
            if display.show_tokens {
                sections.push(render_tokens(&report.tokens));
            }
            if display.show_tuples {
                sections.push(render_tuples(report));
            }
            if let Some(diagnostics) = render_diagnostics(&report.configuration) {
                sections.push(diagnostics);
            }
            sections.push(render_configuration(
                &report.configuration,
                display.pretty_json,
            ));
            Some(sections.join("\n"))
        }
        RenderState::Vocabulary(vocabulary) => Some(render_vocabulary(vocabulary)),
        RenderState::Help => Some(HELP_TEXT.to_string()),
        RenderState::Notice(notice) => Some(notice.clone().with(colors::accent()).to_string()),
        RenderState::Error(message) => Some(message.clone().with(colors::error()).to_string()),
        RenderState::Idle(_) => None,
    }
}

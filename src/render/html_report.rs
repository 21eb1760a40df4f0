//! Study-note report rendering
//!
//! Turns bilingual notes into one self-contained HTML file: styles and the
//! view-switcher script are inlined so the report opens anywhere without a
//! server. Three views: side-by-side, English only, Hindi only.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::catalog::{Board, ClassLevel, Stream, Subject};
use crate::models::content::{BilingualNotes, NoteSection, SectionKind};

/// Report header metadata
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub board: Board,
    pub class_level: ClassLevel,
    pub stream: Option<Stream>,
    pub subject: Subject,
}

impl ReportMeta {
    fn class_label(&self) -> String {
        match self.stream.filter(|_| self.class_level.has_stream()) {
            Some(stream) => format!("{} ({})", self.class_level.prompt_label(), stream.as_key()),
            None => self.class_level.prompt_label(),
        }
    }
}

/// Render bilingual notes into a standalone HTML document.
pub fn render(notes: &BilingualNotes, meta: &ReportMeta) -> String {
    let mut sections_html = String::new();
    for section in &notes.sections {
        sections_html.push_str(&render_section(section));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - Study Notes</title>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&family=Noto+Sans+Devanagari:wght@400;600;800&display=swap" rel="stylesheet">
<style>{css}</style>
</head>
<body class="view-split">
<header>
  <h1>{title}</h1>
  <div class="meta">
    <span class="badge">{board}</span>
    <span class="badge">{class}</span>
    <span class="badge">{subject}</span>
  </div>
  <nav class="tabs">
    <button id="tab-split" class="tab active" onclick="setView('split')">English + Hindi</button>
    <button id="tab-en" class="tab" onclick="setView('en')">English</button>
    <button id="tab-hi" class="tab" onclick="setView('hi')">Hindi</button>
  </nav>
</header>
<main>
{sections}</main>
<script>
function setView(view) {{
  document.body.className = 'view-' + view;
  document.querySelectorAll('.tab').forEach(function (tab) {{
    tab.classList.toggle('active', tab.id === 'tab-' + view);
  }});
}}
</script>
</body>
</html>
"#,
        title = escape_html(&notes.title),
        board = escape_html(meta.board.as_key()),
        class = escape_html(&meta.class_label()),
        subject = escape_html(meta.subject.name()),
        css = REPORT_CSS,
        sections = sections_html,
    )
}

fn render_section(section: &NoteSection) -> String {
    let title_hi = section
        .title_hi
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(&section.title);

    format!(
        r#"<section class="card type-{kind}">
  <h2><span class="lang-en">{title_en}</span><span class="lang-hi">{title_hi}</span></h2>
  <div class="columns">
    <div class="col lang-en">{content_en}</div>
    <div class="col lang-hi">{content_hi}</div>
  </div>
</section>
"#,
        kind = section.kind.as_str(),
        title_en = escape_html(&section.title),
        title_hi = escape_html(title_hi),
        content_en = format_inline(&section.content_en),
        content_hi = format_inline(&section.content_hi),
    )
}

/// Minimal markdown-ish inline formatting on already-escaped text:
/// `**bold**`, `*italic*`, `- ` bullets, line breaks.
fn format_inline(text: &str) -> String {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    static ITALIC: OnceLock<Regex> = OnceLock::new();

    let escaped = escape_html(text);
    let bold = BOLD
        .get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("static pattern"))
        .replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC
        .get_or_init(|| Regex::new(r"\*([^*\n]+?)\*").expect("static pattern"))
        .replace_all(&bold, "<em>$1</em>");

    italic.replace("\n- ", "<br>&bull; ").replace('\n', "<br>")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const REPORT_CSS: &str = r#"
:root { --ink: #1e293b; --muted: #64748b; --line: #e2e8f0; --accent: #4f46e5; }
* { box-sizing: border-box; }
body { margin: 0; color: var(--ink); background: #f8fafc; font-family: 'Inter', 'Noto Sans Devanagari', sans-serif; }
header { background: linear-gradient(135deg, #4f46e5, #7c3aed); color: #fff; padding: 28px 24px 18px; }
header h1 { margin: 0 0 10px; font-size: 1.6rem; }
.meta { margin-bottom: 14px; }
.badge { display: inline-block; background: rgba(255,255,255,.18); border-radius: 999px; padding: 3px 12px; margin-right: 6px; font-size: .8rem; font-weight: 600; }
.tabs { display: flex; gap: 8px; }
.tab { border: 0; border-radius: 8px 8px 0 0; padding: 8px 16px; font: inherit; font-weight: 600; cursor: pointer; background: rgba(255,255,255,.15); color: #fff; }
.tab.active { background: #f8fafc; color: var(--accent); }
main { max-width: 960px; margin: 0 auto; padding: 24px 16px 48px; }
.card { background: #fff; border: 1px solid var(--line); border-left: 4px solid var(--muted); border-radius: 10px; padding: 18px 20px; margin-bottom: 16px; }
.card h2 { margin: 0 0 12px; font-size: 1.1rem; }
.card.type-info { border-left-color: #2563eb; }
.card.type-alert { border-left-color: #dc2626; background: #fef2f2; }
.card.type-success { border-left-color: #16a34a; background: #f0fdf4; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 18px; }
.col { font-size: .95rem; line-height: 1.7; }
.col.lang-hi { border-left: 1px dashed var(--line); padding-left: 18px; }
.lang-hi { font-family: 'Noto Sans Devanagari', 'Inter', sans-serif; }
h2 .lang-hi { margin-left: 10px; color: var(--muted); font-weight: 600; }
body.view-en .lang-hi { display: none; }
body.view-hi .lang-en { display: none; }
body.view-en .columns, body.view-hi .columns { grid-template-columns: 1fr; }
body.view-en .col.lang-hi, body.view-hi .col.lang-hi { border-left: 0; padding-left: 0; }
@media (max-width: 640px) { .columns { grid-template-columns: 1fr; } .col.lang-hi { border-left: 0; padding-left: 0; } }
"#;

//! HTML for the single summarization screen.

use std::fmt::Write;

use crate::submission::Outcome;

pub struct PageView<'a> {
    /// Text echoed back into the input box.
    pub text: &'a str,
    pub outcome: &'a Outcome,
    /// Load error shown as a banner while no model is available.
    pub model_error: Option<&'a str>,
}

const STYLE: &str = r#"
body { margin: 0; background-color: #f5f7fa; font-family: system-ui, sans-serif; color: #2c3e50; }
main { max-width: 1200px; margin: 0 auto; padding: 24px; }
.header-title { text-align: center; font-size: 2.5rem; margin-bottom: 10px; }
.header-subtitle { text-align: center; color: #7f8c8d; font-size: 1.1rem; margin-bottom: 30px; }
.columns { display: flex; gap: 32px; }
.column { flex: 1; min-width: 0; }
.hint { color: #7f8c8d; font-style: italic; }
textarea { width: 100%; box-sizing: border-box; height: 300px; font-size: 16px; border-radius: 10px; padding: 12px; }
button { width: 100%; margin-top: 12px; padding: 12px; font-size: 16px; border: none; border-radius: 10px; background: #ff4b4b; color: white; cursor: pointer; }
button:disabled { opacity: 0.6; cursor: progress; }
.summary-box { background-color: #e8f4f8; padding: 20px; border-radius: 10px; border-left: 5px solid #4CAF50; min-height: 200px; font-size: 16px; line-height: 1.6; white-space: pre-wrap; }
.stats { display: flex; gap: 16px; margin-top: 16px; }
.metric { flex: 1; }
.metric-label { color: #7f8c8d; font-size: 0.9rem; }
.metric-value { font-size: 1.8rem; }
.alert { padding: 12px 16px; border-radius: 10px; margin: 12px 0; }
.alert-warning { background: #fff8e1; color: #8a6d00; }
.alert-error { background: #fdecea; color: #a12622; }
.alert-info { background: #e8f0fe; color: #1a4d8f; }
footer { margin-top: 40px; border-top: 1px solid #dfe3e8; padding-top: 16px; text-align: center; color: #7f8c8d; }
"#;

// Shows a busy state while the form request is in flight.
const SCRIPT: &str = r#"
document.getElementById("summarize-form").addEventListener("submit", function () {
  var button = document.getElementById("summarize-button");
  button.disabled = true;
  button.textContent = "⏳ Summarizing...";
});
"#;

pub fn render(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Text Summarization</title>\n");
    let _ = write!(html, "<style>{}</style>\n</head>\n<body>\n<main>\n", STYLE);

    html.push_str("<h1 class=\"header-title\">📝 Text Summarization</h1>\n");
    html.push_str("<p class=\"header-subtitle\">Enter some text and get a short summary</p>\n");

    if let Some(error) = view.model_error {
        let _ = write!(
            html,
            "<div class=\"alert alert-error\">❌ {}</div>\n\
             <div class=\"alert alert-info\">💡 Place the model file at the configured path or start the server with --model-path.</div>\n",
            escape_html(error)
        );
    }

    html.push_str("<div class=\"columns\">\n");
    render_input(&mut html, view.text);
    render_result(&mut html, view.outcome);
    html.push_str("</div>\n");

    html.push_str(
        "<footer><p>💡 <b>How to use:</b> enter text on the left → press Summarize → read the result on the right</p></footer>\n",
    );
    let _ = write!(html, "</main>\n<script>{}</script>\n</body>\n</html>\n", SCRIPT);
    html
}

fn render_input(html: &mut String, text: &str) {
    html.push_str("<section class=\"column\">\n<h3>📥 Original text</h3>\n");
    html.push_str("<p class=\"hint\">Type or paste the text to summarize</p>\n");
    let _ = write!(
        html,
        "<form id=\"summarize-form\" method=\"post\" action=\"/\">\n\
         <textarea name=\"text\" aria-label=\"Input Text\" \
         placeholder=\"Example: Artificial intelligence (AI) is a field of computer science...\">{}</textarea>\n\
         <button id=\"summarize-button\" type=\"submit\">🚀 Summarize</button>\n</form>\n",
        escape_html(text)
    );
    html.push_str("</section>\n");
}

fn render_result(html: &mut String, outcome: &Outcome) {
    html.push_str("<section class=\"column\">\n<h3>📤 Summary</h3>\n");
    html.push_str("<p class=\"hint\">The summary will appear here</p>\n");

    match outcome {
        Outcome::Idle => {}
        Outcome::Warning(message) => {
            let _ = write!(html, "<div class=\"alert alert-warning\">⚠️ {}</div>\n", escape_html(message));
        }
        Outcome::Unavailable(message) => {
            let _ = write!(html, "<div class=\"alert alert-error\">❌ {}</div>\n", escape_html(message));
        }
        Outcome::Summary { summary, stats } => {
            let _ = write!(
                html,
                "<div class=\"summary-box\" id=\"summary\">{}</div>\n\
                 <div class=\"stats\">\n\
                 <div class=\"metric\"><div class=\"metric-label\">Original length</div>\
                 <div class=\"metric-value\" id=\"original-words\">{} words</div></div>\n\
                 <div class=\"metric\"><div class=\"metric-label\">Summary length</div>\
                 <div class=\"metric-value\" id=\"summary-words\">{} words</div></div>\n\
                 </div>\n",
                escape_html(summary),
                stats.original_words,
                stats.summary_words
            );
        }
    }

    html.push_str("</section>\n");
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

use maud::{html, PreEscaped, DOCTYPE};

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
.question { margin-bottom: 1.5rem; }
.prompt { font-weight: bold; }
.feedback { margin-left: 0.5rem; font-style: italic; }";

/// Wraps a rendered quiz fragment in a standalone HTML page. `fragment` is
/// inserted as-is and must already be escaped.
pub fn render_page(title: &str, container_id: &str, fragment: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (title) }
                form id=(container_id) {
                    (PreEscaped(fragment))
                }
            }
        }
    }
    .into_string()
}

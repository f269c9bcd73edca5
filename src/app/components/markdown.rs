use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render trusted, compiled-in Markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(source: &'static str, class: Option<String>) -> Element {
    let html_content = render_markdown(source);
    let class = class.unwrap_or_else(|| "c-prose".to_string());

    rsx! {
        div {
            class: "{class}",
            dangerous_inner_html: "{html_content}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_become_list_items() {
        let html = render_markdown("- one\n- two");
        assert!(html.contains("<ul>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_inline_code_and_strong() {
        let html = render_markdown("Wait on **conditions**, not `sleep`.");
        assert!(html.contains("<strong>conditions</strong>"));
        assert!(html.contains("<code>sleep</code>"));
    }
}

//! Documentation page

use axum::{extract::Host, response::Html};

const DOCS_TEMPLATE: &str = include_str!("../../assets/docs.html");

/// Static endpoint listing, with `{base_url}` taken from the request's Host
///
/// GET /
pub async fn docs_page(host: Option<Host>) -> Html<String> {
    let base_url = match host {
        Some(Host(host)) => format!("http://{}/", escape_html(&host)),
        None => "/".to_string(),
    };
    Html(DOCS_TEMPLATE.replace("{base_url}", &base_url))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

//! HTML rendering helpers
//!
//! Pages are plain format!-built HTML wrapped in a shared layout. No
//! template engine; handlers assemble a body string and call [`page`].

use axum::response::Html;

/// Escape text for safe interpolation into HTML
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An anchor tag with escaped label
pub fn link(href: &str, label: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape(href), escape(label))
}

/// A titled section wrapping a list of pre-rendered HTML items
///
/// Empty item lists render an explicit "none" marker so search pages with no
/// results still produce a page rather than a bare heading.
pub fn list_section(title: &str, items: &[String]) -> String {
    let body = if items.is_empty() {
        "<li class=\"empty\">(none)</li>".to_string()
    } else {
        items
            .iter()
            .map(|item| format!("<li>{}</li>", item))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!("<h2>{}</h2>\n<ul>\n{}\n</ul>", escape(title), body)
}

/// Wrap a page body in the shared layout
pub fn page(title: &str, body: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - tunebase</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 12px 20px;
        }}
        header a {{ margin-right: 12px; }}
        a {{ color: #4a9eff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        main {{ padding: 20px; }}
        h1 {{ color: #4a9eff; }}
        li.empty {{ color: #888; }}
        input {{ background: #2a2a2a; color: #e0e0e0; border: 1px solid #3a3a3a; padding: 4px; }}
    </style>
</head>
<body>
    <header>
        <a href="/">Home</a>
        <a href="/search_song">Songs</a>
        <a href="/search_album">Albums</a>
        <a href="/search_artist">Artists</a>
        <a href="/search_genre">Genres</a>
        <a href="/search_playlist">Playlists</a>
        <a href="/login">Login</a>
    </header>
    <main>
        <h1>{title}</h1>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    );
    Html(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_link_escapes_label() {
        let html = link("/artist/a1", "AC<DC");
        assert!(html.contains("href=\"/artist/a1\""));
        assert!(html.contains("AC&lt;DC"));
    }

    #[test]
    fn test_list_section_empty() {
        let html = list_section("Results", &[]);
        assert!(html.contains("(none)"));
    }

    #[test]
    fn test_page_escapes_title() {
        let Html(html) = page("A<B", "<p>body</p>");
        assert!(html.contains("<h1>A&lt;B</h1>"));
        assert!(html.contains("<p>body</p>"));
    }
}

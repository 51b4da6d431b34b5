//! Queryable page document.
//!
//! Extraction only needs three read-only capabilities from a page, so the
//! engine works against [`PageDocument`] rather than a concrete DOM.

use scraper::{ElementRef, Html, Selector};

/// Read-only view of a loaded page.
pub trait PageDocument {
    /// Text content of the first element matching `selector`, in document order.
    ///
    /// A selector that fails to parse behaves like a selector with no match.
    fn query_first(&self, selector: &str) -> Option<String>;

    /// Content of the first `<meta>` tag whose `property` or `name` equals `name`.
    ///
    /// Both attributes are checked for every key, so `og:*` keys published
    /// under `name` and `author` published under `property` are found too.
    fn query_meta(&self, name: &str) -> Option<String>;

    /// Text of the first HTML `<title>`, or an empty string.
    ///
    /// `<title>` elements inside inline SVG are not the document title.
    fn title(&self) -> String;
}

/// [`PageDocument`] backed by a parsed HTML tree.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn parse_selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(sel) => Some(sel),
            Err(e) => {
                log::debug!("Skipping invalid selector '{}': {:?}", selector, e);
                None
            }
        }
    }
}

impl PageDocument for HtmlDocument {
    fn query_first(&self, selector: &str) -> Option<String> {
        let sel = Self::parse_selector(selector)?;
        self.html
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    fn query_meta(&self, name: &str) -> Option<String> {
        let sel = Self::parse_selector("meta[content]")?;
        self.html
            .select(&sel)
            .find(|el| {
                let meta = el.value();
                meta.attr("property") == Some(name) || meta.attr("name") == Some(name)
            })
            .and_then(|el| el.value().attr("content"))
            .filter(|content| !content.trim().is_empty())
            .map(String::from)
    }

    fn title(&self) -> String {
        let Some(sel) = Self::parse_selector("title") else {
            return String::new();
        };
        self.html
            .select(&sel)
            .find(|el| {
                !el.ancestors()
                    .filter_map(ElementRef::wrap)
                    .any(|parent| parent.value().name() == "svg")
            })
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
        <head>
            <title>Senior Designer - Acme</title>
            <meta property="og:site_name" content="Acme">
            <meta name="author" content="  ">
        </head>
        <body>
            <div class="company">First Co</div>
            <div class="company">Second Co</div>
            <span class="job-title"> Designer <b>II</b></span>
        </body>
        </html>
    "#;

    #[test]
    fn test_query_first_returns_first_in_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.query_first(".company").as_deref(), Some("First Co"));
    }

    #[test]
    fn test_query_first_collects_nested_text() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.query_first(".job-title").as_deref(), Some(" Designer II"));
    }

    #[test]
    fn test_invalid_selector_is_no_match() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.query_first("[[invalid"), None);
    }

    #[test]
    fn test_query_meta_by_property_and_name() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.query_meta("og:site_name").as_deref(), Some("Acme"));
        // blank content counts as absent
        assert_eq!(doc.query_meta("author"), None);
        assert_eq!(doc.query_meta("og:title"), None);
    }

    #[test]
    fn test_title() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.title(), "Senior Designer - Acme");
        assert_eq!(HtmlDocument::parse("<p>no title</p>").title(), "");
    }

    #[test]
    fn test_title_ignores_svg_titles() {
        let icon_only = HtmlDocument::parse("<body><svg><title>Close icon</title></svg></body>");
        assert_eq!(icon_only.title(), "");

        let doc = HtmlDocument::parse(
            "<head><title>Staff Accountant</title></head>\
             <body><svg><title>Close icon</title></svg></body>",
        );
        assert_eq!(doc.title(), "Staff Accountant");

        let icon_first = HtmlDocument::parse(
            "<body><svg><title>Menu</title></svg><title>Buyer</title></body>",
        );
        assert_eq!(icon_first.title(), "Buyer");
    }

    #[test]
    fn test_query_meta_matches_either_attribute() {
        let doc = HtmlDocument::parse(
            r#"<meta name="og:title" content="Analyst"><meta property="author" content="Initech">"#,
        );
        assert_eq!(doc.query_meta("og:title").as_deref(), Some("Analyst"));
        assert_eq!(doc.query_meta("author").as_deref(), Some("Initech"));
    }
}

//! HTML backend: turns render records into a complete document page.

use crate::record::{AttributeRow, RenderRecord};

/// Escapes HTML special characters in a string.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a full HTML page for one language.
///
/// Each record becomes a `<section>` whose `id` is the node fragment, with a
/// summary block followed by a collapsible attribute table.
#[must_use]
pub fn render_page(records: &[RenderRecord], language: &str, title: &str) -> String {
    let mut sections = String::new();
    for record in records {
        sections.push_str(&render_section(record));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{language}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="style.css">
</head>
<body>
<main>
{sections}</main>
<script src="rdfconv.js" defer></script>
</body>
</html>
"#,
        language = escape_html(language),
        title = escape_html(title),
        sections = sections,
    )
}

fn render_section(record: &RenderRecord) -> String {
    let mut summary = String::new();
    if let Some(title) = &record.title {
        summary.push_str(&format!(
            "<div class=\"title\"><h1>{}</h1></div>\n",
            escape_html(title)
        ));
    }
    summary.push_str(&format!(
        "<div class=\"rdf-id\">{}</div>\n",
        escape_html(&record.id)
    ));
    if let Some(type_label) = &record.type_label {
        summary.push_str(&format!(
            "<div class=\"type\"><h2>{}</h2></div>\n",
            escape_html(type_label)
        ));
    }
    if let Some(description) = &record.description {
        summary.push_str(&format!(
            "<div class=\"desc\">{}</div>\n",
            escape_html(description)
        ));
    }

    let mut rows = String::new();
    for row in &record.attributes {
        rows.push_str(&render_row(row));
    }

    format!(
        r##"<section class="rdf-node" id="{fragment}">
<div class="summary">
{summary}</div>
<div class="full-info">
<table>
{rows}</table>
</div>
<a class="show-more" href="#">Show more</a>
</section>
"##,
        fragment = escape_html(&record.fragment),
        summary = summary,
        rows = rows,
    )
}

fn render_row(row: &AttributeRow) -> String {
    let mut objects = Vec::with_capacity(row.objects.len());
    for entry in &row.objects {
        match &entry.link {
            // Reference entries link their (plain text) display title.
            Some(link) => objects.push(format!(
                "<a href=\"{}\">{}</a>",
                escape_html(link),
                escape_html(&entry.title)
            )),
            // The merged literal entry is already an HTML fragment.
            None => objects.push(entry.title.clone()),
        }
    }

    format!(
        "<tr><td><a href=\"{link}\">{title}</a></td><td>{objects}</td></tr>\n",
        link = escape_html(&row.predicate_link),
        title = escape_html(&row.predicate_title),
        objects = objects.join("<br>"),
    )
}

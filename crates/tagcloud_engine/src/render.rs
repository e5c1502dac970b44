use std::io::{self, Write};

use tagcloud_core::{FontSize, TagCloud};

use crate::config::Stylesheet;

/// Writes `cloud` as a complete HTML page.
///
/// Entries are emitted in the cloud's (alphabetical) order, one `<span>` per
/// word carrying its size class and a `count: N` tooltip.
pub fn render_html<W: Write>(
    out: &mut W,
    cloud: &TagCloud,
    label: &str,
    stylesheet: &Stylesheet,
) -> io::Result<()> {
    let heading = format!("Top {} words in {}", cloud.requested, escape_html(label));

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(
        out,
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />"
    )?;
    writeln!(out, "<title>{heading}</title>")?;
    match stylesheet {
        Stylesheet::Linked(href) => writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(href)
        )?,
        Stylesheet::Embedded => write_embedded_styles(out)?,
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{heading}</h2>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;
    for entry in &cloud.entries {
        writeln!(
            out,
            "<span style=\"cursor:default\" class=\"{}\" title=\"count: {}\">{}</span>",
            entry.font_size.class_name(),
            entry.count,
            escape_html(&entry.word)
        )?;
    }
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

pub fn render_to_string(cloud: &TagCloud, label: &str, stylesheet: &Stylesheet) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_html(&mut buffer, cloud, label, stylesheet);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn write_embedded_styles<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "<style type=\"text/css\">")?;
    writeln!(out, "div.cdiv {{ width: 80%; margin: 0 auto; }}")?;
    writeln!(out, "p.cbox {{ line-height: 1.6; text-align: center; }}")?;
    for size in FontSize::all() {
        writeln!(out, ".{} {{ font-size: {}px; }}", size.class_name(), size)?;
    }
    writeln!(out, "</style>")
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

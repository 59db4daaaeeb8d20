use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Local;

use etq_model::Record;

/// The fixed QR image placed on every label block. One static asset for the
/// whole sheet; nothing is encoded per record.
const QR_CODE_SVG: &str = include_str!("../assets/qr_code.svg");

const STYLE: &str = "\
  body { font-family: sans-serif; margin: 24px; }\n\
  .label { display: flex; align-items: center; page-break-inside: avoid;\n\
           border-bottom: 1px solid #ccc; padding: 12px 0; }\n\
  .label .text { flex: 2; }\n\
  .label .qr { flex: 1; text-align: center; }\n\
  .label .qr svg { width: 96px; height: 96px; }\n\
  .label h2 { margin: 0 0 4px 0; font-size: 16px; }\n\
  .label p { margin: 0; font-size: 13px; }\n\
  .footer { margin-top: 16px; font-size: 11px; color: #666; }\n\
  @media print { .footer { display: none; } }\n";

/// Render the printable sheet: one block per entry of the (already
/// expanded) record sequence.
pub fn render_sheet(records: &[&Record]) -> String {
    let stamp = Local::now().format("%d/%m/%Y %H:%M");
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Etiquetas</title>\n");
    let _ = writeln!(html, "<style>\n{STYLE}</style>\n</head>\n<body>");
    for record in records {
        push_label_block(&mut html, record);
    }
    let _ = writeln!(html, "<p class=\"footer\">Gerado em {stamp}</p>");
    html.push_str("</body>\n</html>\n");
    html
}

fn push_label_block(html: &mut String, record: &Record) {
    html.push_str("<div class=\"label\">\n<div class=\"text\">\n");
    let _ = writeln!(
        html,
        "<h2>Fornecedor: {}</h2>\n\
         <p><strong>DESENHO:</strong> {}</p>\n\
         <p><strong>TAG:</strong> {}</p>\n\
         <p><strong>SKU:</strong> {}</p>\n\
         <p><strong>DESCRIÇÃO:</strong> {}</p>",
        escape_html(&record.supplier),
        escape_html(&record.draw),
        escape_html(&record.equipament),
        escape_html(&record.sku),
        escape_html(&record.description),
    );
    let _ = writeln!(html, "</div>\n<div class=\"qr\">\n{QR_CODE_SVG}</div>");
    html.push_str("</div>\n");
}

/// Minimal HTML escaping for text interpolated into the sheet.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render and write the sheet to disk, creating parent directories.
pub fn write_sheet(path: &Path, records: &[&Record]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let html = render_sheet(records);
    fs::write(path, html).with_context(|| format!("write sheet: {}", path.display()))?;
    tracing::info!(blocks = records.len(), path = %path.display(), "sheet written");
    Ok(())
}

//! HTML color report: summary of the source image and its ranked colors

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::analysis::ranking::{Code, Ranking};
use crate::io::configuration::{MM_PER_INCH, MM_PER_STITCH};

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
  td, th {
    border: 1px solid #ddd;
    padding: 9px;
  }

  tr:nth-child(even){background-color: #f2f2f2;}

  tr:hover {background-color: #ddd;}

  th {
    padding-top: 12px;
    padding-bottom: 12px;
    text-align: left;
    background-color: #04AA6D;
    color: white;
  }

  img {
    width: 500px;
  }
  </style>
  <meta http-equiv="X-UA-Compatible">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta http-equiv="Content-Type" content="text/html; charset=utf-8" />
</head>
<body>
<div>
"#;

const TABLE_HEAD: &str = r#"<table class="table" style="width:70%;">
<thead><tr>
  <th style="width:5%">Number</th>
  <th style="width:25%">Color</th>
  <th>Pixel Count</th>
  <th>Color Code</th>
  <th>RGB</th>
  <th>Percentage</th>
</tr></thead>
<tbody>
"#;

const FOOTER: &str = "</tbody>\n</table>\n</div>\n</body>\n</html>\n";

/// Physical size of a `width` x `height` stitch pattern
pub fn physical_size(width: usize, height: usize) -> String {
    let (mm_x, mm_y) = (width * MM_PER_STITCH, height * MM_PER_STITCH);
    format!(
        "size  ({mm_x}mm x {mm_y}mm)  ({:.2}in, {:.2}in)",
        mm_x as f64 / MM_PER_INCH,
        mm_y as f64 / MM_PER_INCH
    )
}

/// Code as HTML; glyphs that are not plain ASCII become entities
pub fn html_code(code: &Code) -> String {
    code.as_str()
        .chars()
        .map(|c| {
            if c.is_ascii() {
                escape_char(c)
            } else {
                format!("&#{};", u32::from(c))
            }
        })
        .collect()
}

fn escape_char(c: char) -> String {
    match c {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        _ => c.to_string(),
    }
}

fn escape(text: &str) -> String {
    text.chars().map(escape_char).collect()
}

/// `data:` URI embedding `bytes` of the given MIME type as base64
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Build the HTML report for an image of `width` x `height` pixels
///
/// `image_src` becomes the `src` of the report's image; pass a
/// [`data_uri`] to make the report self-contained.
pub fn html_report(image_src: &str, width: usize, height: usize, ranking: &Ranking) -> String {
    let mut html = String::from(HEADER);

    html.push_str(&format!(
        "<div><img src=\"{}\"></div><p style=\"page-break-before: always\"></p>\n\
         <div style='font-size: larger;margin:20px'>pixel count: {} pixels size ({width} x {height}) Colors: {}</div>\n\
         <div style='font-size: larger;margin:20px'>{}</div>\n",
        escape(image_src),
        ranking.total(),
        ranking.distinct(),
        physical_size(width, height),
    ));

    html.push_str(TABLE_HEAD);

    for stat in ranking.stats() {
        let rgb = stat.color.css_rgb();
        html.push_str(&format!(
            "  <tr>\n\
             \x20   <td style=\"text-align:center\">{}</td>\n\
             \x20   <td style=\"background-color:{rgb};\"></td>\n\
             \x20   <td>{}</td>\n\
             \x20   <td>{}</td>\n\
             \x20   <td>{rgb}</td>\n\
             \x20   <td>{:.2}%</td>\n\
             \x20 </tr>\n",
            html_code(&stat.code),
            stat.count,
            stat.color.to_hex(),
            stat.percent,
        ));
    }

    html.push_str(FOOTER);
    html
}

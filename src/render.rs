use crate::providers::ipinfo::Record;
use console::{measure_text_width, pad_str, style, Alignment};

const LABEL_WIDTH: usize = 14;

/// Helper: coloured keys so the box is easy to scan.
fn key(s: &str) -> String {
  style(format!("{s:<LABEL_WIDTH$}")).bold().cyan().to_string()
}

fn blank(value: Option<&str>) -> &str {
  value.unwrap_or("")
}

/// Label/value pairs in display order. Missing values stay empty.
fn fields(record: &Record) -> [(&'static str, &str); 9] {
  [
    ("IP:", record.ip.as_str()),
    ("Hostname:", blank(record.hostname.as_deref())),
    ("City:", blank(record.city.as_deref())),
    ("Region:", blank(record.region.as_deref())),
    ("Country:", blank(record.country.as_deref())),
    ("Postal:", blank(record.postal.as_deref())),
    ("Location:", blank(record.loc.as_deref())),
    ("Organization:", blank(record.org.as_deref())),
    ("Timezone:", blank(record.timezone.as_deref())),
  ]
}

/// Renders the record as a rounded box, one labeled line per field.
#[must_use]
pub fn info_box(record: &Record) -> String {
  let title = style("IP INFORMATION").bold().green().to_string();
  let mut lines = vec![title, String::new()];
  lines.extend(
    fields(record)
      .iter()
      .map(|(label, value)| format!("{}{value}", key(label))),
  );
  if record.bogon {
    lines.push(String::new());
    lines.push(
      style("Note: bogon (private or reserved) address")
        .yellow()
        .to_string(),
    );
  }

  let width = lines
    .iter()
    .map(|l| measure_text_width(l))
    .max()
    .unwrap_or_default();
  let border = "─".repeat(width + 2);

  let mut out = format!("╭{border}╮\n");
  for line in &lines {
    out.push_str(&format!(
      "│ {} │\n",
      pad_str(line, width, Alignment::Left, None)
    ));
  }
  out.push_str(&format!("╰{border}╯\n"));
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Record {
    Record {
      ip: "8.8.8.8".into(),
      hostname: Some("dns.google".into()),
      city: Some("Mountain View".into()),
      region: Some("California".into()),
      country: Some("US".into()),
      postal: Some("94043".into()),
      loc: Some("37.4056,-122.0775".into()),
      org: Some("AS15169 Google LLC".into()),
      timezone: Some("America/Los_Angeles".into()),
      bogon: false,
    }
  }

  fn body_lines(rendered: &str) -> Vec<String> {
    let stripped = console::strip_ansi_codes(rendered).to_string();
    stripped
      .lines()
      .filter(|l| l.starts_with('│'))
      .map(|l| l.trim_matches('│').trim().to_string())
      .collect()
  }

  #[test]
  fn test_fields_in_fixed_order() {
    let lines = body_lines(&info_box(&sample()));
    let labels: Vec<&str> = lines
      .iter()
      .filter_map(|l| l.split_whitespace().next())
      .filter(|w| w.ends_with(':'))
      .collect();
    assert_eq!(
      labels,
      [
        "IP:",
        "Hostname:",
        "City:",
        "Region:",
        "Country:",
        "Postal:",
        "Location:",
        "Organization:",
        "Timezone:"
      ]
    );
    assert!(lines.iter().any(|l| l.ends_with("AS15169 Google LLC")));
  }

  #[test]
  fn test_missing_fields_render_blank() {
    let record = Record {
      ip: "10.0.0.1".into(),
      bogon: true,
      ..Default::default()
    };
    let lines = body_lines(&info_box(&record));
    assert!(lines.contains(&"City:".to_string()));
    assert!(lines.contains(&"Location:".to_string()));
    assert!(lines.iter().any(|l| l.starts_with("Note: bogon")));
  }

  #[test]
  fn test_box_lines_share_width() {
    let rendered = info_box(&sample());
    let widths: Vec<usize> = rendered.lines().map(measure_text_width).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
  }
}

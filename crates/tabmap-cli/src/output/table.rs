use serde_json::Value;
use tabmap_core::project::Record;

/// Print records as an aligned text table. Null cells render as blanks.
pub fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("(no records)");
        return;
    }

    let headers: Vec<String> = records[0].keys().cloned().collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for record in records {
        for (i, header) in headers.iter().enumerate() {
            let len = cell_text(record.get(header)).chars().count();
            widths[i] = widths[i].max(len);
        }
    }

    let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();
    print_row(&header_cells, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("  {}", rule.join("  "));

    for record in records {
        let cells: Vec<&str> = headers.iter().map(|h| cell_text(record.get(h))).collect();
        print_row(&cells, &widths);
    }
}

fn print_row(cells: &[&str], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    println!("  {}", line.join("  ").trim_end());
}

fn cell_text(value: Option<&Value>) -> &str {
    match value {
        Some(Value::String(s)) => s,
        _ => "",
    }
}

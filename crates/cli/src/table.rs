use unicode_width::UnicodeWidthStr;

use salesboard_analytics::SellerReport;

const HEADERS: [&str; 8] = ["#", "seller", "name", "revenue", "profit", "sales", "bonus", "top product"];

/// Render reports as a plain-text table, one row per seller in rank order.
pub(crate) fn render(reports: &[SellerReport]) -> String {
    let rows: Vec<[String; 8]> = reports
        .iter()
        .enumerate()
        .map(|(rank, r)| {
            let top = r
                .top_products
                .first()
                .map(|p| format!("{} x{}", p.sku, p.quantity))
                .unwrap_or_else(|| "-".to_string());
            [
                (rank + 1).to_string(),
                r.seller_id.clone(),
                r.name.clone(),
                format!("{:.2}", r.revenue),
                format!("{:.2}", r.profit),
                r.sales_count.to_string(),
                format!("{:.2}", r.bonus),
                top,
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

/// Numeric columns are right-aligned; text columns left-aligned.
fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (col, (cell, width)) in cells.zip(widths).enumerate() {
        if col > 0 {
            line.push_str("  ");
        }
        let pad = " ".repeat(width.saturating_sub(cell.width()));
        if matches!(col, 0 | 3 | 4 | 5 | 6) {
            line.push_str(&pad);
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&pad);
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

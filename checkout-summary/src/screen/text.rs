//! Plain-text rendering of a summary view (terminal output)

use super::SummaryView;

/// Fixed-width line builder
struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Left and right text on one line, padded to the width
    fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();

        if lw + rw >= self.width {
            self.write_line(&format!("{} {}", left, right))
        } else {
            let spaces = self.width - lw - rw;
            self.write_line(&format!("{}{}{}", left, " ".repeat(spaces), right))
        }
    }

    fn dash_sep(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.write_line(&sep)
    }

    fn finalize(self) -> String {
        self.buf
    }
}

/// Render the view as fixed-width text
pub fn render_text(view: &SummaryView, width: usize) -> String {
    let mut b = TextBuilder::new(width);

    for row in &view.rows {
        if row.kind == super::RowKind::Total {
            b.dash_sep();
        }
        b.line_lr(row.label, &row.value);
        if let Some(note) = &row.note {
            b.write_line(note);
        }
    }

    b.write_line("");
    b.write_line(&format!("{}{}", view.details_button.caption, view.details_button.icon));
    if let Some(details) = &view.details {
        for line in &details.lines {
            let name = if line.name.is_empty() { &line.id } else { &line.name };
            b.line_lr(&format!("  {}", name), &line.price);
            if let Some(savings) = &line.savings {
                b.line_lr("    savings", savings);
            }
        }
        b.line_lr("  Total savings", &details.savings);
        if let Some(discount) = &details.discount {
            b.line_lr("  Promo discount", discount);
        }
    }

    b.write_line(&format!("{}{}", view.promo_button.caption, view.promo_button.icon));
    if let Some(entry) = &view.promo_entry {
        match &entry.applied {
            Some(applied) => b.write_line(&format!("  Applied promo: {}", applied)),
            None => b.write_line("  No promo applied"),
        };
    }

    b.finalize()
}

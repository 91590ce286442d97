/// Terminal tint for a cell. Only used when color is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Plain,
    Good,
    Warn,
    Bad,
}

impl Tone {
    const fn ansi(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Good => Some("32"),
            Self::Warn => Some("33"),
            Self::Bad => Some("31"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    text: String,
    tone: Tone,
}

impl Cell {
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// `-` for a missing value.
    pub fn maybe(text: Option<&str>) -> Self {
        Self::from(text.unwrap_or("-"))
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::toned(text, Tone::Plain)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::toned(text, Tone::Plain)
    }
}

const GAP: &str = "  ";
const ELLIPSIS: char = '…';
const MIN_LAST_WIDTH: usize = 8;

/// Rows under fixed headers, with an optional summary line underneath.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
    footer: Option<String>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            ..Self::default()
        }
    }

    /// Append a row. Short rows are padded with `-`, extra cells dropped.
    pub fn push<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut row: Vec<Cell> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize_with(self.headers.len(), || Cell::from("-"));
        self.rows.push(row);
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Lay the table out. When `max_width` is set, the last column gives up
    /// width first and its cells are cut with an ellipsis.
    #[must_use]
    pub fn render(&self, max_width: Option<usize>, color: bool) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);

        if self.rows.is_empty() {
            lines.push("(nothing to show)".to_string());
        } else {
            let widths = self.widths(max_width);
            let header: Vec<Cell> = self.headers.iter().map(|h| Cell::from(*h)).collect();
            lines.push(line(&header, &widths, false));
            let span = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
            lines.push("-".repeat(span));
            lines.extend(self.rows.iter().map(|row| line(row, &widths, color)));
        }

        if let Some(footer) = &self.footer {
            lines.push(footer.clone());
        }
        lines.join("\n")
    }

    fn widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        if let (Some(max), Some((last, rest))) = (max_width, widths.split_last_mut()) {
            let used = rest.iter().sum::<usize>() + GAP.len() * rest.len();
            let floor = MIN_LAST_WIDTH.min(*last);
            *last = (*last).min(max.saturating_sub(used)).max(floor);
        }
        widths
    }
}

fn line(cells: &[Cell], widths: &[usize], color: bool) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let text = clip(&cell.text, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            match cell.tone.ansi().filter(|_| color) {
                Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[0m{pad}"),
                None => format!("{text}{pad}"),
            }
        })
        .collect();
    rendered.join(GAP).trim_end().to_string()
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push(ELLIPSIS);
    clipped
}

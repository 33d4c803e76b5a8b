#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Self {
        // padding must be at least 1
        PaddingWidth(std::cmp::max(width, 1))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Self {
        // left must be at least 1
        LeftWidth(std::cmp::max(width, 1))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RightWidth(usize);

impl RightWidth {
    pub(crate) fn new(width: usize) -> Self {
        // right must be at least 2 (so we can hyphenate)
        RightWidth(std::cmp::max(width, 2))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

/// Lays out two columns: a left column of names, and a right column of (wrapped) descriptions.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    right: RightWidth,
}

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_RIGHT_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// The right column shrinks (down to a minimum) when the columns don't fit the total width.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        right: RightWidth,
        total_width: Option<TotalWidth>,
    ) -> Self {
        let Some(TotalWidth(total)) = total_width else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No total width available.  Selecting right: {}.", right.0);
            }

            return Self::new(padding, left, right);
        };

        let non_right = left.0 + padding.0;
        let target_total_width = (total as f64 * TARGET_TOTAL_FACTOR) as usize;

        if right.0 + non_right <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns fit within the target total {target_total_width}.  Selecting right: {}.", right.0);
            }

            Self::new(padding, left, right)
        } else if non_right < target_total_width {
            let calculated_right = std::cmp::max(target_total_width - non_right, MINIMUM_RIGHT_WIDTH);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Left column {non_right} fits within the target total {target_total_width}.  Selecting right: {calculated_right}.");
            }

            Self::new(padding, left, RightWidth::new(calculated_right))
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Left column {non_right} does not fit within the target total {target_total_width}.  Selecting right: {MINIMUM_RIGHT_WIDTH}.");
            }

            Self::new(padding, left, RightWidth::new(MINIMUM_RIGHT_WIDTH))
        }
    }

    pub(crate) fn new(padding: PaddingWidth, left: LeftWidth, right: RightWidth) -> Self {
        Self {
            padding,
            left,
            right,
        }
    }

    /// Render one row, wrapping the right column onto continuation lines.
    pub(crate) fn render(&self, indent: usize, left: &str, right: &str) -> Vec<String> {
        let padding = self.padding.0;
        let left_column_width = self.left.0;
        let right_parts = chunk(right, self.right.0);
        let mut out = Vec::default();

        for (i, part) in right_parts.iter().enumerate() {
            let label = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{:left_column_width$}{:padding$}{}",
                "", label, "", part
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{}", "", left));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

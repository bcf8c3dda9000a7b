//! Typography tables and the display-name scaler.
//!
//! Font sizes are a closed scale with a static point table. Glyph widths are an
//! average per family (in em units); this is an approximation good enough for
//! page-break estimation, not for exact line breaking.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Font family / weight
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Humanist sans-serif (modern, minimal, bold, compact).
    Sans,
    /// Old-style serif (classic, elegant).
    Serif,
    /// Monospace, used for dates in the timeline template.
    Mono,
}

impl FontFamily {
    /// Average advance width of a character in em units.
    pub fn average_char_width(&self) -> f32 {
        match self {
            FontFamily::Sans => 0.50,
            FontFamily::Serif => 0.47,
            FontFamily::Mono => 0.60,
        }
    }

    pub fn space_width(&self) -> f32 {
        match self {
            FontFamily::Sans => 0.28,
            FontFamily::Serif => 0.25,
            FontFamily::Mono => 0.60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
}

// ────────────────────────────────────────────────────────────────────────────
// Size scale
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Xs,
    Sm,
    Base,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Xxxxl,
}

impl FontSize {
    pub fn points(&self) -> f32 {
        match self {
            FontSize::Xs => 8.0,
            FontSize::Sm => 9.0,
            FontSize::Base => 10.0,
            FontSize::Md => 11.0,
            FontSize::Lg => 13.0,
            FontSize::Xl => 18.0,
            FontSize::Xxl => 22.0,
            FontSize::Xxxl => 26.0,
            FontSize::Xxxxl => 32.0,
        }
    }
}

/// Calibration curve for the name scaler. Templates with an oversized header
/// use `Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCurve {
    Standard,
    Large,
}

/// Picks the header size for a person's name from its length.
///
/// Standard curve: more than 30 chars → `Xl`, more than 20 → `Xxl`, otherwise
/// `Xxxl`. The large curve is the same buckets one tier up. A blank or absent
/// name gets the largest tier of the curve.
pub fn scale_for_display_name(name: Option<&str>, curve: NameCurve) -> FontSize {
    let len = name.map(|n| n.trim().chars().count()).unwrap_or(0);
    let tiers = match curve {
        NameCurve::Standard => [FontSize::Xl, FontSize::Xxl, FontSize::Xxxl],
        NameCurve::Large => [FontSize::Xxl, FontSize::Xxxl, FontSize::Xxxxl],
    };
    if len > 30 {
        tiers[0]
    } else if len > 20 {
        tiers[1]
    } else {
        tiers[2]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Physical page used by the export backend. All values are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
    /// Line box height as a multiple of the font size.
    pub line_height: f32,
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    pub fn content_height(&self) -> f32 {
        self.height_pt - 2.0 * self.margin_pt
    }
}

/// A4 portrait with half-inch margins.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_pt: 595.28,
        height_pt: 841.89,
        margin_pt: 36.0,
        line_height: 1.35,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Rendered width of a single word in points.
pub fn measure_word(word: &str, family: FontFamily, size_pt: f32) -> f32 {
    word.chars().count() as f32 * family.average_char_width() * size_pt
}

/// Estimates how many lines `text` occupies when greedily word-wrapped at
/// `max_width_pt`. Explicit newlines start a new line.
pub fn estimated_lines(text: &str, family: FontFamily, size_pt: f32, max_width_pt: f32) -> u16 {
    let space_w = family.space_width() * size_pt;
    let mut total = 0u16;

    for paragraph in text.lines() {
        let mut line_count = 0u16;
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = measure_word(word, family, size_pt);
            if line_count == 0 {
                line_count = 1;
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width_pt {
                line_count = line_count.saturating_add(1);
                current_width = word_w;
            } else {
                current_width += space_w + word_w;
            }
        }
        total = total.saturating_add(line_count);
    }
    total
}

/// One line of greedily wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    /// An explicit newline follows this line.
    pub ends_paragraph: bool,
}

/// The lines [`estimated_lines`] counts, in order. Blank paragraphs produce
/// no line.
pub fn wrap_lines(text: &str, family: FontFamily, size_pt: f32, max_width_pt: f32) -> Vec<WrappedLine> {
    let space_w = family.space_width() * size_pt;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = measure_word(word, family, size_pt);
            if current.is_empty() {
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width_pt {
                lines.push(WrappedLine {
                    text: std::mem::take(&mut current),
                    ends_paragraph: false,
                });
                current_width = word_w;
            } else {
                current.push(' ');
                current_width += space_w + word_w;
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(WrappedLine {
                text: current,
                ends_paragraph: true,
            });
        }
    }
    lines
}

/// Rejoins consecutive wrapped lines. Wrapping the result again at the same
/// width gives back the same lines.
pub fn join_lines(lines: &[WrappedLine]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(if lines[i - 1].ends_paragraph { '\n' } else { ' ' });
        }
        out.push_str(&line.text);
    }
    out
}

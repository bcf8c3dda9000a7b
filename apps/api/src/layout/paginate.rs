//! Page flow: splits a layout tree into fixed-height pages.
//!
//! Heights are estimated from the typography tables (greedy word wrap over
//! average glyph widths), so page breaks are approximate. Every page fragment
//! fits the page's content height.
//!
//! # Rules
//! - Column containers are breakable: children are placed in order and a child
//!   that does not fit is itself split, or moved to the next page.
//! - Text, images, wrapping rows and `keep_together` boxes move to the next
//!   page whole when they fit on one. Taller ones are split anyway: text by
//!   wrapped line, wrapping rows by line, boxes by child.
//! - Row containers are split per column: page *i* holds fragment *i* of every
//!   column, so sidebars continue beside the main column.
//! - A section title never ends a page without the start of its section.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::layout::tree::{Container, Direction, LayoutNode, LayoutTree, NodeRole, TextNode};
use crate::layout::typography::{
    estimated_lines, join_lines, measure_word, wrap_lines, PageConfig, WrappedLine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginateError {
    #[error("document needs more than {limit} pages")]
    TooManyPages { limit: usize },

    #[error("pagination cancelled")]
    Cancelled,
}

/// Per-page fragments of one node. `None` means the node places nothing on
/// that page.
type Fragments = Result<Vec<Option<LayoutNode>>, PaginateError>;

/// Splits trees into page-sized fragments of their root.
///
/// Stops early once any node needs more than `max_pages` fragments, or when
/// the cancel flag is raised.
pub struct Paginator<'a> {
    page: &'a PageConfig,
    max_pages: usize,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Paginator<'a> {
    pub fn new(page: &'a PageConfig) -> Self {
        Self {
            page,
            max_pages: usize::MAX,
            cancel: None,
        }
    }

    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn cancel_on(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn run(&self, tree: &LayoutTree) -> Result<Vec<LayoutNode>, PaginateError> {
        let height = self.page.content_height();
        let pages: Vec<LayoutNode> = self
            .split(&tree.root, self.page.content_width(), height, height)?
            .into_iter()
            .flatten()
            .collect();
        self.check(pages.len())?;
        Ok(pages)
    }

    /// k fragments of any node land on k distinct pages, so a fragment count
    /// over the limit already means the document is over it.
    fn check(&self, fragments: usize) -> Result<(), PaginateError> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(PaginateError::Cancelled);
        }
        if fragments > self.max_pages {
            return Err(PaginateError::TooManyPages {
                limit: self.max_pages,
            });
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Estimated rendered height of `node` laid out at `width` points.
pub fn measure(node: &LayoutNode, width: f32, page: &PageConfig) -> f32 {
    match node {
        LayoutNode::Text(text) => text_height(text, width, page),
        LayoutNode::Image(image) => image.size_pt,
        LayoutNode::Container(c) => {
            let inner = (width - c.style.padding.horizontal()).max(1.0);
            let content = match c.direction {
                Direction::Column => {
                    let heights: f32 = c.children.iter().map(|n| measure(n, inner, page)).sum();
                    heights + gaps(c)
                }
                Direction::Row if c.style.wrap => wrapped_row_height(c, inner, page),
                Direction::Row => row_widths(c, inner)
                    .into_iter()
                    .zip(&c.children)
                    .map(|(w, n)| measure(n, w, page))
                    .fold(0.0, f32::max),
            };
            content + c.style.padding.vertical()
        }
    }
}

fn text_height(text: &TextNode, width: f32, page: &PageConfig) -> f32 {
    let lines = estimated_lines(&text.content, text.style.family, text.style.size_pt, width);
    f32::from(lines) * text.style.size_pt * page.line_height
}

fn gaps(c: &Container) -> f32 {
    c.style.gap_pt * c.children.len().saturating_sub(1) as f32
}

/// Widths of a row's children: explicit fractions first, the remainder split
/// evenly among children without one.
fn row_widths(c: &Container, inner: f32) -> Vec<f32> {
    let available = (inner - gaps(c)).max(1.0);
    let fixed: f32 = c.children.iter().filter_map(width_fraction).sum();
    let flexible = c.children.iter().filter(|n| width_fraction(n).is_none()).count();
    let share = if flexible > 0 {
        ((1.0 - fixed).max(0.0)) / flexible as f32
    } else {
        0.0
    };
    c.children
        .iter()
        .map(|n| width_fraction(n).unwrap_or(share) * available)
        .collect()
}

fn width_fraction(node: &LayoutNode) -> Option<f32> {
    match node {
        LayoutNode::Container(c) => c.style.width_fraction,
        _ => None,
    }
}

/// Single-line width a node wants before wrapping.
fn intrinsic_width(node: &LayoutNode) -> f32 {
    match node {
        LayoutNode::Text(t) => {
            let words: Vec<&str> = t.content.split_whitespace().collect();
            let spaces = words.len().saturating_sub(1) as f32;
            words
                .iter()
                .map(|w| measure_word(w, t.style.family, t.style.size_pt))
                .sum::<f32>()
                + spaces * t.style.family.space_width() * t.style.size_pt
        }
        LayoutNode::Image(i) => i.size_pt,
        LayoutNode::Container(c) => {
            let children: f32 = c.children.iter().map(intrinsic_width).sum();
            children + c.style.padding.horizontal() + gaps(c)
        }
    }
}

fn wrapped_row_height(c: &Container, inner: f32, page: &PageConfig) -> f32 {
    let lines = row_lines(c, inner, page);
    let heights: f32 = lines.iter().map(|(_, h)| h).sum();
    heights + c.style.gap_pt * lines.len().saturating_sub(1) as f32
}

/// Children of a wrapping row grouped into lines, with each line's height.
fn row_lines(c: &Container, inner: f32, page: &PageConfig) -> Vec<(Range<usize>, f32)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut line_width = 0.0_f32;
    let mut line_height = 0.0_f32;

    for (i, child) in c.children.iter().enumerate() {
        let w = intrinsic_width(child).min(inner);
        let h = measure(child, w.max(1.0), page);
        if i > start && line_width + c.style.gap_pt + w > inner {
            lines.push((start..i, line_height));
            start = i;
            line_width = w;
            line_height = h;
        } else {
            line_width += if i == start { w } else { c.style.gap_pt + w };
            line_height = line_height.max(h);
        }
    }
    if start < c.children.len() {
        lines.push((start..c.children.len(), line_height));
    }
    lines
}

fn is_atomic(node: &LayoutNode) -> bool {
    match node {
        LayoutNode::Container(c) => c.style.keep_together || c.style.wrap || c.children.is_empty(),
        _ => true,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Splitting
// ────────────────────────────────────────────────────────────────────────────

impl Paginator<'_> {
    /// Splits `node` into per-page fragments. Fragment 0 fits `first_avail`
    /// (the rest of the current page), later fragments fit `page_avail`.
    fn split(
        &self,
        node: &LayoutNode,
        width: f32,
        first_avail: f32,
        page_avail: f32,
    ) -> Fragments {
        self.check(0)?;
        let height = measure(node, width, self.page);
        if height <= first_avail {
            return Ok(vec![Some(node.clone())]);
        }

        let pieces = if is_atomic(node) && (height <= page_avail || !is_breakable(node)) {
            if first_avail >= page_avail {
                // Fresh page and still too tall: only images end up here.
                vec![Some(node.clone())]
            } else {
                vec![None, Some(node.clone())]
            }
        } else {
            match node {
                LayoutNode::Text(text) => self.split_text(text, width, first_avail, page_avail),
                LayoutNode::Image(_) => vec![Some(node.clone())],
                LayoutNode::Container(c) => match c.direction {
                    Direction::Row if c.style.wrap => {
                        self.split_wrapped_row(c, width, first_avail, page_avail)
                    }
                    Direction::Row => self.split_row(c, width, first_avail, page_avail)?,
                    Direction::Column => self.split_column(c, width, first_avail, page_avail)?,
                },
            }
        };

        let orphaned_title = matches!(pieces.first(), Some(Some(first)) if heading_only(first));
        if orphaned_title && pieces.len() > 1 && first_avail < page_avail {
            let mut moved = vec![None];
            moved.extend(self.split(node, width, page_avail, page_avail)?);
            self.check(moved.len())?;
            return Ok(moved);
        }

        self.check(pieces.len())?;
        Ok(pieces)
    }

    fn split_text(
        &self,
        text: &TextNode,
        width: f32,
        first_avail: f32,
        page_avail: f32,
    ) -> Vec<Option<LayoutNode>> {
        let style = &text.style;
        let line_h = style.size_pt * self.page.line_height;
        let lines = wrap_lines(&text.content, style.family, style.size_pt, width);
        let fit = |avail: f32| (avail / line_h).floor().max(0.0) as usize;
        let head = fit(first_avail).min(lines.len());
        let per_page = fit(page_avail).max(1);

        let fragment = |chunk: &[WrappedLine]| {
            LayoutNode::Text(TextNode {
                content: join_lines(chunk),
                ..text.clone()
            })
        };
        let mut pieces = vec![(head > 0).then(|| fragment(&lines[..head]))];
        pieces.extend(lines[head..].chunks(per_page).map(|chunk| Some(fragment(chunk))));
        pieces
    }

    fn split_wrapped_row(
        &self,
        c: &Container,
        width: f32,
        first_avail: f32,
        page_avail: f32,
    ) -> Vec<Option<LayoutNode>> {
        let inner = (width - c.style.padding.horizontal()).max(1.0);
        let pad = c.style.padding.vertical();
        let gap = c.style.gap_pt;
        let fragment = |children: Vec<LayoutNode>| {
            LayoutNode::Container(Container {
                children,
                ..empty_like(c)
            })
        };

        let mut pieces = Vec::new();
        let mut current: Vec<LayoutNode> = Vec::new();
        let mut used = 0.0_f32;
        let mut avail = first_avail - pad;

        for (range, height) in row_lines(c, inner, self.page) {
            if current.is_empty() {
                if height > avail && pieces.is_empty() && first_avail < page_avail {
                    pieces.push(None);
                    avail = page_avail - pad;
                }
                used = height;
            } else if used + gap + height > avail {
                pieces.push(Some(fragment(std::mem::take(&mut current))));
                avail = page_avail - pad;
                used = height;
            } else {
                used += gap + height;
            }
            current.extend(c.children[range].iter().cloned());
        }
        if !current.is_empty() {
            pieces.push(Some(fragment(current)));
        }
        pieces
    }

    fn split_column(
        &self,
        c: &Container,
        width: f32,
        first_avail: f32,
        page_avail: f32,
    ) -> Fragments {
        let inner = (width - c.style.padding.horizontal()).max(1.0);
        let pad = c.style.padding.vertical();
        let gap = c.style.gap_pt;
        let full = (page_avail - pad).max(1.0);

        let mut fragments: Vec<Vec<LayoutNode>> = Vec::new();
        let mut current: Vec<LayoutNode> = Vec::new();
        let mut remaining = (first_avail - pad).max(0.0);

        for child in &c.children {
            let lead = if current.is_empty() { 0.0 } else { gap };
            let height = measure(child, inner, self.page);
            if lead + height <= remaining {
                current.push(child.clone());
                remaining -= lead + height;
                continue;
            }

            let pieces = self.split(child, inner, (remaining - lead).max(0.0), full)?;
            for (i, piece) in pieces.into_iter().enumerate() {
                if i > 0 {
                    fragments.push(std::mem::take(&mut current));
                    self.check(fragments.len())?;
                    remaining = full;
                }
                if let Some(piece) = piece {
                    let lead = if current.is_empty() { 0.0 } else { gap };
                    remaining = (remaining - lead - measure(&piece, inner, self.page)).max(0.0);
                    current.push(piece);
                }
            }
        }
        fragments.push(current);

        Ok(fragments
            .into_iter()
            .map(|children| {
                (!children.is_empty()).then(|| {
                    LayoutNode::Container(Container {
                        children,
                        ..empty_like(c)
                    })
                })
            })
            .collect())
    }

    fn split_row(&self, c: &Container, width: f32, first_avail: f32, page_avail: f32) -> Fragments {
        let inner = (width - c.style.padding.horizontal()).max(1.0);
        let pad = c.style.padding.vertical();
        let first = (first_avail - pad).max(0.0);
        let full = (page_avail - pad).max(1.0);

        let columns = row_widths(c, inner)
            .into_iter()
            .zip(&c.children)
            .map(|(w, child)| self.split(child, w, first, full))
            .collect::<Result<Vec<_>, _>>()?;
        let page_count = columns.iter().map(Vec::len).max().unwrap_or(0);

        Ok((0..page_count)
            .map(|i| {
                let cells: Vec<Option<&LayoutNode>> =
                    columns.iter().map(|col| col.get(i).and_then(Option::as_ref)).collect();
                if cells.iter().all(Option::is_none) {
                    return None;
                }
                // Columns with nothing on this page keep an empty box so the
                // remaining columns stay at their widths.
                let children = cells
                    .into_iter()
                    .zip(&c.children)
                    .filter_map(|(cell, whole)| match (cell, whole) {
                        (Some(node), _) => Some(node.clone()),
                        (None, LayoutNode::Container(wc)) => {
                            Some(LayoutNode::Container(empty_like(wc)))
                        }
                        (None, _) => None,
                    })
                    .collect();
                Some(LayoutNode::Container(Container {
                    children,
                    ..empty_like(c)
                }))
            })
            .collect())
    }
}

fn is_breakable(node: &LayoutNode) -> bool {
    match node {
        LayoutNode::Text(_) => true,
        LayoutNode::Image(_) => false,
        LayoutNode::Container(c) => !c.children.is_empty(),
    }
}

/// True when `node` shows section titles and nothing else.
fn heading_only(node: &LayoutNode) -> bool {
    let mut titles = 0;
    let mut other = 0;
    node.walk(&mut |n| match n {
        LayoutNode::Text(t) if t.role == NodeRole::SectionTitle => titles += 1,
        LayoutNode::Text(_) | LayoutNode::Image(_) => other += 1,
        LayoutNode::Container(_) => {}
    });
    titles > 0 && other == 0
}

fn empty_like(c: &Container) -> Container {
    Container {
        role: c.role,
        direction: c.direction,
        style: c.style,
        children: Vec::new(),
    }
}

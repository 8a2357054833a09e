//! Figure grid: a title band over three rows by three columns with uniform
//! gutters.

use crate::canvas::Rect;

pub const ROWS: u32 = 3;
pub const COLS: u32 = 3;

/// Placement of one panel in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub col_span: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32, col_span: u32) -> Self {
        Self { row, col, col_span }
    }
}

/// Every panel of the dashboard and its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSlot {
    Gauge,
    Trend,
    Distribution,
    Breakdown,
    Correlation,
    Stats,
}

impl PanelSlot {
    pub const ALL: [PanelSlot; 6] = [
        PanelSlot::Gauge,
        PanelSlot::Trend,
        PanelSlot::Distribution,
        PanelSlot::Breakdown,
        PanelSlot::Correlation,
        PanelSlot::Stats,
    ];

    /// Heading drawn in the panel's title strip.
    pub fn title(self) -> &'static str {
        match self {
            PanelSlot::Gauge => "Current Market Sentiment",
            PanelSlot::Trend => "Sentiment Trend Analysis",
            PanelSlot::Distribution => "Sentiment Distribution",
            PanelSlot::Breakdown => "Classification Breakdown",
            PanelSlot::Correlation => "Market Correlation",
            PanelSlot::Stats => sentilab_core::stats::REPORT_TITLE,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            PanelSlot::Gauge => Cell::new(0, 0, 1),
            PanelSlot::Trend => Cell::new(0, 1, 2),
            PanelSlot::Distribution => Cell::new(1, 0, 1),
            PanelSlot::Breakdown => Cell::new(1, 1, 1),
            PanelSlot::Correlation => Cell::new(1, 2, 1),
            PanelSlot::Stats => Cell::new(2, 0, 3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    title: Rect,
    bounds: Rect,
    gutter: u32,
}

impl Grid {
    /// Grid over a `width` x `height` figure; margin, gutter and title band
    /// scale with the figure.
    pub fn new(width: u32, height: u32) -> Self {
        let gutter = (width.min(height) / 60).max(4);
        let (title, bounds) = Rect::new(0, 0, width, height)
            .inset(gutter)
            .split_top((height / 16).max(12));
        Self {
            title,
            bounds,
            gutter,
        }
    }

    /// Band above the panels for the figure title.
    pub fn title(&self) -> Rect {
        self.title
    }

    /// Space between panels, also the outer margin.
    pub fn gutter(&self) -> u32 {
        self.gutter
    }

    /// Pixel rectangle of a cell.
    pub fn rect(&self, cell: Cell) -> Rect {
        let col_w = (self.bounds.width - (COLS - 1) * self.gutter) / COLS;
        let row_h = (self.bounds.height - (ROWS - 1) * self.gutter) / ROWS;
        let span = cell.col_span.clamp(1, COLS - cell.col);
        Rect::new(
            self.bounds.x + cell.col * (col_w + self.gutter),
            self.bounds.y + cell.row * (row_h + self.gutter),
            span * col_w + (span - 1) * self.gutter,
            row_h,
        )
    }

    pub fn slot(&self, slot: PanelSlot) -> Rect {
        self.rect(slot.cell())
    }
}

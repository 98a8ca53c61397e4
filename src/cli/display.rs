// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for rankfuse views.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `RANKFUSE_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals), then
//! defaults to dark.
//!
//! Every drawing function returns a `String` instead of printing, so the walk
//! loop can write to any sink and tests can look at the frames. Respects
//! `NO_COLOR` and non-TTY detection for pipelines.

use rankfuse::presenter::{
    format_k, format_score, BreakdownRow, RankedRow, RankingColumn, Step, StepState, View,
};
use rankfuse::{FusionError, ScoreBreakdown};
use std::fmt::Write as _;
use std::sync::OnceLock;

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 72;

/// Longest score bar in the final ranking.
const BAR_WIDTH: usize = 24;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("RANKFUSE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// The handful of roles the views color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Headings and the active step.
    Accent,
    /// Scores and the winning row.
    Good,
    /// The `k` value.
    Highlight,
    /// Undefined scores and errors.
    Bad,
    /// Borders, formulas, inactive steps.
    Muted,
}

fn rgb_for(role: Role, theme: Theme) -> (u8, u8, u8) {
    match (theme, role) {
        (Theme::Dark, Role::Accent) => (86, 182, 194),    // #56b6c2
        (Theme::Dark, Role::Good) => (152, 195, 121),     // #98c379
        (Theme::Dark, Role::Highlight) => (229, 192, 123), // #e5c07b
        (Theme::Dark, Role::Bad) => (224, 108, 117),      // #e06c75
        (Theme::Dark, Role::Muted) => (92, 99, 112),      // #5c6370
        (Theme::Light, Role::Accent) => (1, 132, 188),    // #0184bc
        (Theme::Light, Role::Good) => (80, 161, 79),      // #50a14f
        (Theme::Light, Role::Highlight) => (193, 132, 1), // #c18401
        (Theme::Light, Role::Bad) => (228, 86, 73),       // #e45649
        (Theme::Light, Role::Muted) => (160, 161, 167),   // #a0a1a7
    }
}

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Color `text` by role, optionally bold. Plain text when colors are off.
pub fn paint(role: Role, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = rgb_for(role, theme());
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, rgb(r, g, b), text, RESET)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Accumulates one boxed frame.
#[derive(Default)]
struct Frame {
    out: String,
}

impl Frame {
    fn border(&self, s: &str) -> String {
        paint(Role::Muted, false, s)
    }

    /// ┌─ LABEL ──────────┐
    fn top(&mut self, label: &str) {
        self.divider('┌', '┐', label);
    }

    /// ├─ LABEL ──────────┤
    fn mid(&mut self, label: &str) {
        self.divider('├', '┤', label);
    }

    fn divider(&mut self, left: char, right: char, label: &str) {
        let label_part = format!("─ {} ", paint(Role::Accent, true, label));
        let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
        let _ = writeln!(
            self.out,
            "{}{}{}",
            self.border(&left.to_string()),
            label_part,
            self.border(&format!("{}{}", "─".repeat(remaining), right))
        );
    }

    /// │ content          │
    fn row(&mut self, content: &str) {
        let line = format!(" {}", content);
        let pad = BOX_WIDTH.saturating_sub(visible_len(&line));
        let _ = writeln!(
            self.out,
            "{}{}{}{}",
            self.border("│"),
            line,
            " ".repeat(pad),
            self.border("│")
        );
    }

    /// └──────────────────┘
    fn bottom(&mut self) {
        let _ = writeln!(
            self.out,
            "{}",
            self.border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
        );
    }

    fn finish(self) -> String {
        self.out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// Step tabs, `k`, and which arrows are live.
pub fn draw_header(state: &StepState) -> String {
    let tabs: Vec<String> = Step::ALL
        .iter()
        .map(|&step| {
            let label = format!("{} {}", step.index() + 1, step.title());
            if step == state.step() {
                paint(Role::Accent, true, &format!("[{}]", label))
            } else {
                paint(Role::Muted, false, &format!(" {} ", label))
            }
        })
        .collect();

    let back = if state.can_go_back() { "◀ prev" } else { "      " };
    let forward = if state.can_go_forward() { "next ▶" } else { "" };
    format!(
        "{}\n{}  {}  {}\n",
        tabs.join(" "),
        paint(Role::Highlight, true, &format!("k = {}", format_k(state.k()))),
        paint(Role::Muted, false, back),
        paint(Role::Muted, false, forward)
    )
}

/// Draw any view model.
pub fn draw_view(view: &View) -> String {
    match view {
        View::Rankings { columns } => draw_rankings(columns),
        View::Breakdown { k, rows } => draw_breakdown(*k, rows),
        View::FinalRanking { k, rows, error } => draw_final(*k, rows, error.as_ref()),
    }
}

fn draw_rankings(columns: &[RankingColumn]) -> String {
    let mut frame = Frame::default();
    frame.top(Step::RankingsView.title());

    let width = BOX_WIDTH.saturating_sub(2) / columns.len().max(1);
    let header: String = columns
        .iter()
        .map(|c| pad_right(&paint(Role::Accent, true, &c.source), width))
        .collect();
    frame.row(&header);

    let depth = columns.iter().map(|c| c.items.len()).max().unwrap_or(0);
    for position in 0..depth {
        let line: String = columns
            .iter()
            .map(|c| {
                let cell = c
                    .items
                    .get(position)
                    .map(|item| format!("{}. {}", position + 1, item))
                    .unwrap_or_default();
                pad_right(&cell, width)
            })
            .collect();
        frame.row(&line);
    }

    frame.bottom();
    frame.finish()
}

fn draw_breakdown(k: f64, rows: &[BreakdownRow]) -> String {
    let mut frame = Frame::default();
    frame.top(&format!("RRF Scores (k = {})", format_k(k)));

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            frame.row("");
        }
        let score = match row.score {
            Some(score) => paint(Role::Good, true, &format_score(score)),
            None => paint(Role::Bad, true, "undefined"),
        };
        frame.row(&format!("{}: {}", paint(Role::Accent, true, &row.item), score));
        frame.row(&format!("  {}", paint(Role::Muted, false, &row.formula)));
        if let Some(error) = &row.error {
            frame.row(&format!("  {}", paint(Role::Bad, false, &error.to_string())));
        }
    }

    frame.bottom();
    frame.finish()
}

fn draw_final(k: f64, rows: &[RankedRow], error: Option<&FusionError>) -> String {
    let mut frame = Frame::default();
    frame.top(&format!("{} (k = {})", Step::FinalRankingView.title(), format_k(k)));

    if let Some(error) = error {
        frame.row(&paint(Role::Bad, true, "ranking undefined"));
        frame.row(&paint(Role::Bad, false, &error.to_string()));
        frame.bottom();
        return frame.finish();
    }

    let top = rows.first().map_or(0.0, |r| r.score);
    let label_width = rows.iter().map(|r| r.item.len()).max().unwrap_or(0);
    for row in rows {
        let role = if row.position == 1 { Role::Good } else { Role::Accent };
        frame.row(&format!(
            "{:>2}. {} (Score: {})  {}",
            row.position,
            pad_right(&paint(role, true, &row.item), label_width),
            format_score(row.score),
            paint(Role::Muted, false, &score_bar(row.score, top))
        ));
    }

    frame.bottom();
    frame.finish()
}

/// Bar proportional to `score / top`, at least one cell for any positive score.
pub fn score_bar(score: f64, top: f64) -> String {
    if top.is_nan() || score.is_nan() || top <= 0.0 || score <= 0.0 {
        return String::new();
    }
    let cells = ((score / top).min(1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.max(1))
}

/// One item's breakdown, term by term, for `rankfuse explain`.
pub fn draw_score_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut frame = Frame::default();
    frame.top(&format!(
        "{} (k = {})",
        breakdown.label,
        format_k(breakdown.k)
    ));

    let source_width = breakdown
        .terms
        .iter()
        .map(|t| t.source_label.len())
        .max()
        .unwrap_or(0);
    for term in &breakdown.terms {
        frame.row(&format!(
            "{}  rank {:>3}   1/({} + {}) = {:.6}",
            pad_right(&term.source_label, source_width),
            term.rank,
            format_k(breakdown.k),
            term.rank,
            term.contribution
        ));
    }
    frame.mid("Total");
    frame.row(&paint(Role::Good, true, &format!("{:.6}", breakdown.total)));

    frame.bottom();
    frame.finish()
}

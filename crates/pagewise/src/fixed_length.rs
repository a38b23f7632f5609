//! Fixed-length pagination with up to two omitted chunks.
//!
//! The first page, the last page and the pages around the current one stay
//! visible. When everything does not fit in the budget, one or two runs of
//! pages collapse into a single marker each, and the result always uses the
//! whole budget.

use serde_json::Value;

use crate::behaviour::PaginationBehaviour;
use crate::config::PaginationConfig;
use crate::data::PaginationData;
use crate::error::Result;
use crate::guard::guard_marker_not_a_page_number;
use crate::marker::Marker;
use crate::request::PaginationRequest;

/// Where omitted chunks go for a given request and budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Every page fits.
    Full,
    /// Current page near the start; one chunk omitted towards the end.
    LeftAnchored,
    /// Current page near the end; one chunk omitted towards the start.
    RightAnchored,
    /// One chunk omitted on each side of the current page.
    TwoChunks,
}

impl Layout {
    pub fn omitted_chunks(self) -> usize {
        match self {
            Self::Full => 0,
            Self::LeftAnchored | Self::RightAnchored => 1,
            Self::TwoChunks => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedLength;

impl FixedLength {
    pub fn layout(request: &PaginationRequest, maximum_visible: u64) -> Layout {
        let total = request.total_pages();
        let current = request.current_page();

        if total <= maximum_visible {
            return Layout::Full;
        }

        let breakpoint = single_omission_breakpoint(maximum_visible);
        if current <= breakpoint {
            Layout::LeftAnchored
        } else if current > total - breakpoint {
            Layout::RightAnchored
        } else {
            Layout::TwoChunks
        }
    }
}

impl PaginationBehaviour for FixedLength {
    fn compute(
        &self,
        request: &PaginationRequest,
        config: &PaginationConfig,
    ) -> Result<PaginationData> {
        let total = request.total_pages();
        let current = request.current_page();
        let maximum = config.maximum_visible();
        let marker = config.omitted_chunk_marker();

        guard_marker_not_a_page_number(marker, total)?;

        let layout = Self::layout(request, maximum);
        tracing::debug!(
            ?layout,
            total_pages = total,
            current_page = current,
            maximum_visible = maximum,
            "computing fixed-length pagination"
        );

        let data = match layout {
            Layout::Full => PaginationData::full(1..=total),
            Layout::LeftAnchored => left_anchored(total, current, maximum, marker),
            Layout::RightAnchored => right_anchored(total, current, maximum, marker),
            Layout::TwoChunks => two_chunks(total, current, maximum, marker),
        };
        Ok(data)
    }
}

/// Distance from either edge within which a single omitted chunk suffices.
fn single_omission_breakpoint(maximum: u64) -> u64 { maximum.div_ceil(2) }

fn capacity(maximum: u64) -> usize { usize::try_from(maximum).unwrap_or_default() }

fn left_anchored(total: u64, current: u64, maximum: u64, marker: &Marker) -> PaginationData {
    let rest = maximum - current;
    let gap_at = rest.div_ceil(2) + current;
    // gap_at < maximum here, so the page after the gap never exceeds total
    let resume = total - (maximum - gap_at - 1);

    PaginationData::chunked([1..=gap_at - 1, resume..=total], marker, capacity(maximum))
}

fn right_anchored(total: u64, current: u64, maximum: u64, marker: &Marker) -> PaginationData {
    let rest = maximum - (total - current) + 1;
    let gap_at = current - (rest.div_ceil(2) - 1);
    let right_len = total - gap_at;
    let left_len = maximum - right_len - 1;

    PaginationData::chunked([1..=left_len, gap_at + 1..=total], marker, capacity(maximum))
}

fn two_chunks(total: u64, current: u64, maximum: u64, marker: &Marker) -> PaginationData {
    // one slot is the current page itself
    let budget = maximum - 1;
    let (left_budget, right_budget) = if current <= total.div_ceil(2) {
        (budget.div_ceil(2), budget / 2)
    } else {
        (budget / 2, budget.div_ceil(2))
    };

    // each gap sits in the middle of its side's budget
    let left_gap_from = left_budget / 2 + 1;
    let left_gap_to = current - (left_budget - left_gap_from) - 1;
    let right_gap_from = right_budget.div_ceil(2) + current;
    let right_gap_to = total - (right_budget - (right_gap_from - current));

    PaginationData::chunked(
        [
            1..=left_gap_from - 1,
            left_gap_to + 1..=right_gap_from - 1,
            right_gap_to + 1..=total,
        ],
        marker,
        capacity(maximum),
    )
}

/// Fixed-length pagination of `total_pages` around `current_page`.
///
/// Guards run in order: total pages, current page, current within total,
/// maximum visible, then the marker against `1..=total_pages`. The first
/// failure is returned.
///
/// ```
/// use pagewise::{Entry, compute};
///
/// let data = compute(20, 9, 15, "...").unwrap();
/// let shown: Vec<String> = data
///     .iter()
///     .map(|entry| match entry {
///         Entry::Page(page) => page.to_string(),
///         Entry::Omitted(marker) => marker.to_string(),
///     })
///     .collect();
///
/// assert_eq!(shown.join(" "), "1 2 3 ... 6 7 8 9 10 11 12 ... 18 19 20");
/// ```
pub fn compute(
    total_pages: u64,
    current_page: u64,
    maximum_visible: u64,
    marker: impl Into<Marker>,
) -> Result<PaginationData> {
    let request = PaginationRequest::new(total_pages, current_page)?;
    let config = PaginationConfig::new(maximum_visible)?.with_omitted_chunk_marker(marker);
    FixedLength.compute(&request, &config)
}

/// [`compute`] for an untyped marker, which must be an int or a string.
pub fn compute_with_value(
    total_pages: u64,
    current_page: u64,
    maximum_visible: u64,
    marker: &Value,
) -> Result<PaginationData> {
    let request = PaginationRequest::new(total_pages, current_page)?;
    let config = PaginationConfig::new(maximum_visible)?.with_omitted_chunk_marker_value(marker)?;
    FixedLength.compute(&request, &config)
}

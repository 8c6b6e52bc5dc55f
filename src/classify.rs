//! Line classification
//!
//! Splits a flat list of lines into hatch ladders, tram-line pairs, closed
//! loops and singles. Each pass only sees the lines no earlier pass has
//! claimed, so every input line ends up in exactly one group.

use glam::DVec2;

use crate::config::ClassifyConfig;
use crate::primitives::LineSegment;

/// Two near-parallel lines of similar length drawn side by side
#[derive(Debug, Clone, PartialEq)]
pub struct TramPair {
    pub first: LineSegment,
    pub second: LineSegment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Parallel rungs of steadily changing length
    Hatch,
    /// Lines joined end to end back to the start
    Closed,
}

/// An ordered run of lines forming one structure
#[derive(Debug, Clone, PartialEq)]
pub struct LineSequence {
    pub kind: SequenceKind,
    pub lines: Vec<LineSegment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedLines {
    pub singles: Vec<LineSegment>,
    pub tram_pairs: Vec<TramPair>,
    pub sequences: Vec<LineSequence>,
}

impl ClassifiedLines {
    /// Number of input lines accounted for across all groups.
    pub fn line_count(&self) -> usize {
        self.singles.len()
            + 2 * self.tram_pairs.len()
            + self.sequences.iter().map(|s| s.lines.len()).sum::<usize>()
    }
}

/// Partition `lines` into singles, tram pairs and sequences.
pub fn classify_lines(lines: &[LineSegment], config: &ClassifyConfig) -> ClassifiedLines {
    let mut claimed = vec![false; lines.len()];

    let mut sequences = find_hatch_ladders(lines, &mut claimed, config);
    let tram_pairs = find_tram_pairs(lines, &mut claimed, config);
    sequences.extend(find_closed_loops(lines, &mut claimed, config));

    let singles: Vec<LineSegment> = lines
        .iter()
        .zip(&claimed)
        .filter(|&(_, &c)| !c)
        .map(|(l, _)| l.clone())
        .collect();

    crate::log::debug!(
        singles = singles.len(),
        tram_pairs = tram_pairs.len(),
        sequences = sequences.len(),
        "lines classified"
    );

    ClassifiedLines {
        singles,
        tram_pairs,
        sequences,
    }
}

// ============================================================================
// Hatch ladders
// ============================================================================

fn find_hatch_ladders(
    lines: &[LineSegment],
    claimed: &mut [bool],
    config: &ClassifyConfig,
) -> Vec<LineSequence> {
    let mut seen = vec![false; lines.len()];
    let mut ladders = Vec::new();

    for seed in 0..lines.len() {
        if claimed[seed] || seen[seed] || lines[seed].unit_vector().is_none() {
            continue;
        }
        let group = grow_ladder(lines, claimed, seed, config);
        for &i in &group {
            seen[i] = true;
        }
        if let Some(ordered) = order_ladder(lines, group, config) {
            crate::log::debug!(rungs = ordered.len(), "hatch ladder");
            for &i in &ordered {
                claimed[i] = true;
            }
            ladders.push(LineSequence {
                kind: SequenceKind::Hatch,
                lines: ordered.iter().map(|&i| lines[i].clone()).collect(),
            });
        }
    }
    ladders
}

/// Breadth-first collection of parallel lines with nearby midpoints.
fn grow_ladder(
    lines: &[LineSegment],
    claimed: &[bool],
    seed: usize,
    config: &ClassifyConfig,
) -> Vec<usize> {
    let mut group = vec![seed];
    let mut next = 0;
    while next < group.len() {
        let member = &lines[group[next]];
        next += 1;
        for (k, candidate) in lines.iter().enumerate() {
            if claimed[k] || group.contains(&k) {
                continue;
            }
            let reach = config.hatch_gap_factor * member.length().max(candidate.length());
            if candidate.is_parallel_to(&lines[seed], config.parallel_angle_eps)
                && member.midpoint().distance(candidate.midpoint()) <= reach
            {
                group.push(k);
            }
        }
    }
    group
}

/// Order rungs across the ladder and accept only steadily growing or shrinking lengths.
fn order_ladder(
    lines: &[LineSegment],
    mut group: Vec<usize>,
    config: &ClassifyConfig,
) -> Option<Vec<usize>> {
    if group.len() < config.min_hatch_lines {
        return None;
    }
    let axis = lines[group[0]].unit_vector()?;
    // increasing x, or increasing y for horizontal rungs
    let mut normal = axis.perp();
    if normal.x < 0.0 || (normal.x == 0.0 && normal.y < 0.0) {
        normal = -normal;
    }
    let origin = lines[group[0]].midpoint();
    let offset = |i: usize| (lines[i].midpoint() - origin).dot(normal);
    group.sort_by(|&a, &b| offset(a).total_cmp(&offset(b)));

    let steps: Vec<f64> = group
        .windows(2)
        .map(|w| lines[w[1]].length() - lines[w[0]].length())
        .collect();
    let growing = steps.iter().all(|&d| d > config.length_eps);
    let shrinking = steps.iter().all(|&d| d < -config.length_eps);
    (growing || shrinking).then_some(group)
}

// ============================================================================
// Tram pairs
// ============================================================================

fn find_tram_pairs(
    lines: &[LineSegment],
    claimed: &mut [bool],
    config: &ClassifyConfig,
) -> Vec<TramPair> {
    let mut pairs = Vec::new();
    for i in 0..lines.len() {
        if claimed[i] {
            continue;
        }
        let partner = (0..lines.len())
            .filter(|&j| j != i && !claimed[j])
            .filter(|&j| is_tram_pair(&lines[i], &lines[j], config))
            .min_by(|&a, &b| {
                let da = lines[i].midpoint().distance(lines[a].midpoint());
                let db = lines[i].midpoint().distance(lines[b].midpoint());
                da.total_cmp(&db)
            });
        if let Some(j) = partner {
            claimed[i] = true;
            claimed[j] = true;
            pairs.push(TramPair {
                first: lines[i].clone(),
                second: lines[j].clone(),
            });
        }
    }
    pairs
}

fn is_tram_pair(a: &LineSegment, b: &LineSegment, config: &ClassifyConfig) -> bool {
    if !a.is_parallel_to(b, config.parallel_angle_eps) {
        return false;
    }
    let longer = a.length().max(b.length());
    if a.length().min(b.length()) / longer < config.tram_length_ratio {
        return false;
    }
    let Some(separation) = a.distance_to_line(b.midpoint()) else {
        return false;
    };
    if separation <= config.endpoint_eps || separation > config.tram_max_separation_factor * longer
    {
        return false;
    }
    overlap_along(a, b)
}

/// Projections of both lines onto `a`'s direction overlap.
fn overlap_along(a: &LineSegment, b: &LineSegment) -> bool {
    let Some(axis) = a.unit_vector() else {
        return false;
    };
    let origin = a.start();
    let (a0, a1) = a.project_onto(origin, axis);
    let (b0, b1) = b.project_onto(origin, axis);
    a1 >= b0 && b1 >= a0
}

// ============================================================================
// Closed loops
// ============================================================================

fn find_closed_loops(
    lines: &[LineSegment],
    claimed: &mut [bool],
    config: &ClassifyConfig,
) -> Vec<LineSequence> {
    let mut loops = Vec::new();
    for start in 0..lines.len() {
        if claimed[start] {
            continue;
        }
        if let Some((chain, edges)) = trace_loop(lines, claimed, start, config.endpoint_eps) {
            crate::log::debug!(edges = chain.len(), "closed loop");
            for &i in &chain {
                claimed[i] = true;
            }
            loops.push(LineSequence {
                kind: SequenceKind::Closed,
                lines: edges,
            });
        }
    }
    loops
}

/// Follow lines end to end from `start` until the chain closes.
///
/// Depth-first over the unclaimed lines meeting at each corner, backing up
/// out of dead ends. Returns the indices used and the edges re-oriented
/// along the traversal.
fn trace_loop(
    lines: &[LineSegment],
    claimed: &[bool],
    start: usize,
    eps: f64,
) -> Option<(Vec<usize>, Vec<LineSegment>)> {
    let mut walk = LoopWalk {
        lines,
        claimed,
        origin: lines[start].start(),
        eps,
        chain: vec![start],
        edges: vec![lines[start].clone()],
    };
    let closed = walk.extend(lines[start].end());
    closed.then_some((walk.chain, walk.edges))
}

struct LoopWalk<'a> {
    lines: &'a [LineSegment],
    claimed: &'a [bool],
    origin: DVec2,
    eps: f64,
    chain: Vec<usize>,
    edges: Vec<LineSegment>,
}

impl LoopWalk<'_> {
    fn extend(&mut self, cursor: DVec2) -> bool {
        if self.chain.len() >= 3 && cursor.abs_diff_eq(self.origin, self.eps) {
            return true;
        }
        for (k, line) in self.lines.iter().enumerate() {
            if self.claimed[k] || self.chain.contains(&k) {
                continue;
            }
            let Some(next) = line.other_point(cursor, self.eps) else {
                continue;
            };
            self.chain.push(k);
            self.edges.push(LineSegment::new(cursor, next));
            if self.extend(next) {
                return true;
            }
            self.chain.pop();
            self.edges.pop();
        }
        false
    }
}

//! Epsilon-aware two-key ordering.
//!
//! The pairwise rule is: compare final color scores, treating values within
//! `epsilon` as equal, then break ties by the exact final percent score,
//! both descending, keeping input order on a full tie.
//!
//! Applied pairwise, "within epsilon" is not transitive (`a ≈ b` and
//! `b ≈ c` do not imply `a ≈ c`), so it cannot be handed to a sort as is.
//! Instead color scores are grouped into *tie clusters*: walking the scores
//! from highest to lowest, a cluster is anchored at its first score and
//! absorbs every score within `epsilon` of that anchor. Items are then
//! stably sorted by `(cluster, percent descending)`, which is a total order.
//!
//! Every pair inside a cluster is within `epsilon`, and every pair more than
//! `epsilon` apart lands in different clusters in color order, so the
//! pairwise rule holds for all pairs except chains straddling a cluster
//! boundary, which are ordered by color.

use std::cmp::Ordering;

use super::types::ItemScore;

/// The pairwise rule on two scored items. `Less` means `a` ranks first.
///
/// Not transitive near the epsilon boundary; use [`rank_order`] to sort.
pub fn compare_scores(a: &ItemScore, b: &ItemScore, epsilon: f64) -> Ordering {
    let color_diff = b.final_color_score - a.final_color_score;
    if color_diff.abs() > epsilon {
        return if color_diff > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    b.final_percent_score.total_cmp(&a.final_percent_score)
}

/// Assigns each color score the index of its tie cluster (0 = best).
pub fn tie_clusters(colors: &[f64], epsilon: f64) -> Vec<usize> {
    let mut by_color: Vec<usize> = (0..colors.len()).collect();
    by_color.sort_by(|&a, &b| colors[b].total_cmp(&colors[a]));

    let mut clusters = vec![0; colors.len()];
    let mut cluster = 0;
    let mut anchor: Option<f64> = None;

    for idx in by_color {
        let color = colors[idx];
        match anchor {
            Some(a) if a - color <= epsilon => {}
            Some(_) => {
                cluster += 1;
                anchor = Some(color);
            }
            None => anchor = Some(color),
        }
        clusters[idx] = cluster;
    }

    clusters
}

/// Sort key realising the total order.
#[derive(Debug, Clone, Copy)]
struct RankKey {
    cluster: usize,
    percent: f64,
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cluster
            .cmp(&other.cluster)
            .then_with(|| other.percent.total_cmp(&self.percent))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

/// Returns indices into `scores`, best first.
///
/// The sort is stable: items tied on both keys keep their input order.
pub fn rank_order(scores: &[ItemScore], epsilon: f64) -> Vec<usize> {
    let colors: Vec<f64> = scores.iter().map(|s| s.final_color_score).collect();
    let keys: Vec<RankKey> = tie_clusters(&colors, epsilon)
        .into_iter()
        .zip(scores)
        .map(|(cluster, s)| RankKey {
            cluster,
            percent: s.final_percent_score,
        })
        .collect();

    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
    indices
}

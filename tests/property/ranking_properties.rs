use proptest::prelude::*;
use u_blockrank::block::{score_block, BlockKind, Requirement};
use u_blockrank::category::{classify, ConfidenceTier};
use u_blockrank::ranking::{rank_items, rank_order, ItemInput, ItemScore};
use u_blockrank::weights::redistribute;
use u_blockrank::BlockScore;

fn arb_kind() -> impl Strategy<Value = BlockKind> {
    prop_oneof![
        Just(BlockKind::Mandatory),
        Just(BlockKind::Preferred),
        Just(BlockKind::Tasks),
    ]
}

fn arb_requirements() -> impl Strategy<Value = Vec<Requirement>> {
    prop::collection::vec(-50i32..160, 0..12).prop_map(|percents| {
        percents
            .into_iter()
            .enumerate()
            .map(|(i, p)| Requirement::new(format!("req-{i}"), p))
            .collect()
    })
}

fn arb_items() -> impl Strategy<Value = Vec<ItemInput>> {
    prop::collection::vec(
        (arb_requirements(), arb_requirements(), arb_requirements()),
        0..25,
    )
    .prop_map(|blocks| {
        blocks
            .into_iter()
            .enumerate()
            .map(|(i, (m, p, t))| {
                ItemInput::new(format!("item-{i}"))
                    .with_mandatory(m)
                    .with_preferred(p)
                    .with_tasks(t)
            })
            .collect()
    })
}

fn scored(id: usize, color: f64, percent: f64) -> ItemScore {
    ItemScore {
        item_id: format!("item-{id}"),
        mandatory: BlockScore::default(),
        preferred: BlockScore::default(),
        tasks: BlockScore::default(),
        final_color_score: color,
        final_percent_score: percent,
        used_weights: Default::default(),
        rank: None,
    }
}

// ── Classification ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_depends_only_on_clamped_percent(p in any::<i32>()) {
        let tier = classify(p);
        let clamped = p.clamp(0, 100);
        prop_assert_eq!(tier, classify(clamped));
        let expected = if clamped >= 70 {
            ConfidenceTier::High
        } else if clamped >= 30 {
            ConfidenceTier::Partial
        } else {
            ConfidenceTier::Low
        };
        prop_assert_eq!(tier, expected);
    }
}

// ── Block scoring ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tier_counts_cover_every_requirement(reqs in arb_requirements(), kind in arb_kind()) {
        let score = score_block(&reqs, kind);
        prop_assert_eq!(score.g + score.y + score.r, reqs.len());
        prop_assert_eq!(score.details.len(), reqs.len());
        for (detail, req) in score.details.iter().zip(&reqs) {
            prop_assert_eq!(&detail.name, &req.name);
            prop_assert_eq!(detail.percent, req.match_percent.clamp(0, 100));
        }
    }

    #[test]
    fn block_scores_are_bounded(reqs in arb_requirements(), kind in arb_kind()) {
        let score = score_block(&reqs, kind);
        prop_assert!(score.color_score.is_finite());
        prop_assert!(score.percent_score.is_finite());
        prop_assert!((0.0..=1.0 + 1e-12).contains(&score.color_score));
        // Each tier average is at most 1 after normalisation.
        prop_assert!(score.percent_score >= 0.0);
        prop_assert!(score.percent_score <= (1.0 + 0.5 + 0.01) * score.color_score + 1e-12);
    }

    #[test]
    fn no_high_or_partial_means_zero(
        percents in prop::collection::vec(-100i32..30, 1..10),
        kind in arb_kind(),
    ) {
        let reqs: Vec<Requirement> = percents
            .into_iter()
            .map(|p| Requirement::new("low", p))
            .collect();
        let score = score_block(&reqs, kind);
        prop_assert_eq!(score.color_score, 0.0);
        prop_assert_eq!(score.percent_score, 0.0);
    }
}

// ── Weights ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weight_budget_is_conserved_with_mandatory(p in any::<bool>(), t in any::<bool>()) {
        let w = redistribute(false, p, t);
        prop_assert!((w.total() - 1.4).abs() < 1e-12);
        prop_assert_eq!(w.preferred == 0.0, p);
        prop_assert_eq!(w.tasks == 0.0, t);
    }
}

// ── Ranking ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranks_are_one_to_k(items in arb_items()) {
        let ranked = rank_items(&items);
        prop_assert_eq!(ranked.len(), items.len());
        for (pos, score) in ranked.iter().enumerate() {
            prop_assert_eq!(score.rank, Some(pos + 1));
        }
    }

    #[test]
    fn ranking_is_a_permutation_of_the_input(items in arb_items()) {
        let ranked = rank_items(&items);
        let mut input_ids: Vec<&str> = items.iter().map(|i| i.item_id.as_str()).collect();
        let mut output_ids: Vec<&str> = ranked.iter().map(|s| s.item_id.as_str()).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn separated_colors_follow_color_order(items in arb_items()) {
        let ranked = rank_items(&items);
        for (pos, a) in ranked.iter().enumerate() {
            for b in &ranked[pos + 1..] {
                if (a.final_color_score - b.final_color_score).abs() > 1e-6 {
                    prop_assert!(a.final_color_score > b.final_color_score);
                }
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(items in arb_items()) {
        prop_assert_eq!(rank_items(&items), rank_items(&items));
    }

    #[test]
    fn adversarial_clusters_order_totally(
        steps in prop::collection::vec((0u32..4, 0u32..5), 1..60),
    ) {
        // Colors drift down in sub-epsilon steps so neighbours chain together,
        // percent scores drawn from a small set to force exact ties.
        let mut color = 1.0;
        let scores: Vec<ItemScore> = steps
            .iter()
            .enumerate()
            .map(|(i, &(step, percent))| {
                color -= f64::from(step) * 4e-7;
                scored(i, color, f64::from(percent) / 10.0)
            })
            .collect();

        let order = rank_order(&scores, 1e-6);
        let mut seen = order.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..scores.len()).collect::<Vec<_>>());

        for (pos, &i) in order.iter().enumerate() {
            for &j in &order[pos + 1..] {
                let (a, b) = (&scores[i], &scores[j]);
                if (a.final_color_score - b.final_color_score).abs() > 1e-6 {
                    prop_assert!(a.final_color_score > b.final_color_score);
                } else if a.final_color_score == b.final_color_score {
                    // Exact color ties are decided by percent, then input order.
                    prop_assert!(
                        a.final_percent_score > b.final_percent_score
                            || (a.final_percent_score == b.final_percent_score && i < j)
                    );
                }
            }
        }
    }
}

use crate::{Owner, PersonTotal, Prize, RankedPrize, registry::Registry};

/// Sum of every prize amount, whoever holds the number
///
/// Saturates at `u64::MAX`; loaded prize lists are checked to fit.
pub fn total_prize_amount(prizes: &[Prize]) -> u64 {
    prizes.iter().fold(0, |total, p| total.saturating_add(p.amount))
}

/// Prizes sorted by amount (highest first) with their owners
///
/// Ties keep the order of the prize list. A number with no holder gets
/// [`Owner::Unknown`].
pub fn ranked_prizes(registry: &Registry, prizes: &[Prize]) -> Vec<RankedPrize> {
    let mut sorted: Vec<&Prize> = prizes.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, prize)| RankedPrize {
            rank: index + 1,
            number: prize.number.clone(),
            amount: prize.amount,
            owner: Owner::from(registry.find_owner(&prize.number)),
        })
        .collect()
}

/// Winnings of every registered person, in registration order
///
/// Every holder gets an entry, winners or not. Each prize goes to the
/// first holder of its number; prizes nobody holds are left out.
pub fn totals_by_person(registry: &Registry, prizes: &[Prize]) -> Vec<PersonTotal> {
    let mut totals: Vec<PersonTotal> = registry
        .holders()
        .iter()
        .map(|h| PersonTotal {
            name: h.name.clone(),
            total: 0,
            prizes: Vec::new(),
        })
        .collect();

    for prize in prizes {
        // holders and totals share indices
        if let Some(slot) = registry.holders().iter().position(|h| h.holds(&prize.number)) {
            let entry = &mut totals[slot];
            entry.total = entry.total.saturating_add(prize.amount);
            entry.prizes.push(prize.clone());
        }
    }

    totals
}

/// Put totals in display order: biggest winner first, each person's
/// prizes biggest first. Ties keep their previous order.
pub fn rank_totals(mut totals: Vec<PersonTotal>) -> Vec<PersonTotal> {
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    for person in &mut totals {
        person.prizes.sort_by(|a, b| b.amount.cmp(&a.amount));
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Holder;

    fn holder(name: &str, numbers: &[&str]) -> Holder {
        Holder {
            name: name.to_string(),
            numbers: numbers.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn prize(number: &str, amount: u64) -> Prize {
        Prize {
            number: number.to_string(),
            amount,
        }
    }

    fn sample_registry() -> Registry {
        Registry::new(vec![
            holder("Gus Martinez", &["82419", "34567"]),
            holder("Claire Todd", &["56290"]),
            holder("Jimmy Trivani", &["93028"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_totals_example() {
        let totals = totals_by_person(&sample_registry(), &[prize("56290", 500)]);

        assert_eq!(totals.len(), 3);
        let claire = totals.iter().find(|t| t.name == "Claire Todd").unwrap();
        assert_eq!(claire.total, 500);
        assert_eq!(claire.prizes, vec![prize("56290", 500)]);

        for other in totals.iter().filter(|t| t.name != "Claire Todd") {
            assert_eq!(other.total, 0);
            assert!(other.prizes.is_empty());
            assert!(!other.has_won());
        }
    }

    #[test]
    fn test_totals_accumulate_and_drop_unregistered() {
        let prizes = vec![
            prize("82419", 1000),
            prize("61223", 400000), // nobody holds it
            prize("34567", 250),
        ];
        let totals = totals_by_person(&sample_registry(), &prizes);

        assert_eq!(totals[0].name, "Gus Martinez");
        assert_eq!(totals[0].total, 1250);
        assert_eq!(totals[0].prizes.len(), 2);

        let assigned: u64 = totals.iter().map(|t| t.total).sum();
        assert_eq!(assigned, 1250);
        assert_eq!(total_prize_amount(&prizes), 401250);
    }

    #[test]
    fn test_totals_first_holder_takes_shared_number() {
        let reg = Registry::new(vec![
            holder("Ana", &["00217"]),
            holder("Bea", &["00217"]),
        ])
        .unwrap();
        let totals = totals_by_person(&reg, &[prize("00217", 700)]);

        assert_eq!(totals[0].total, 700);
        assert_eq!(totals[1].total, 0);
    }

    #[test]
    fn test_rank_totals_orders_winners_first() {
        let prizes = vec![
            prize("34567", 100),
            prize("93028", 900),
            prize("82419", 300),
        ];
        let ranked = rank_totals(totals_by_person(&sample_registry(), &prizes));

        let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Jimmy Trivani", "Gus Martinez", "Claire Todd"]);
        assert_eq!(ranked[1].prizes, vec![prize("82419", 300), prize("34567", 100)]);
        assert!(!ranked[2].has_won());
    }

    #[test]
    fn test_ranked_prizes() {
        let prizes = vec![
            prize("56290", 500),
            prize("61223", 400000),
            prize("34567", 1000),
        ];
        let ranked = ranked_prizes(&sample_registry(), &prizes);

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(ranked[0].number, "61223");
        assert_eq!(ranked[0].owner, Owner::Unknown);
        assert_eq!(ranked[0].owner.to_string(), "Unknown");
        assert_eq!(ranked[1].owner, Owner::Known("Gus Martinez".to_string()));
        assert_eq!(ranked[2].amount, 500);
    }

    #[test]
    fn test_ranked_prizes_ties_keep_list_order() {
        let prizes = vec![prize("82419", 100), prize("93028", 100)];
        let ranked = ranked_prizes(&sample_registry(), &prizes);

        assert_eq!(ranked[0].number, "82419");
        assert_eq!(ranked[1].number, "93028");
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let prizes = vec![prize("82419", u64::MAX), prize("34567", 1)];

        assert_eq!(total_prize_amount(&prizes), u64::MAX);
        let totals = totals_by_person(&sample_registry(), &prizes);
        assert_eq!(totals[0].total, u64::MAX);
        assert_eq!(totals[0].prizes.len(), 2);
    }

    #[test]
    fn test_empty_prize_list() {
        assert_eq!(total_prize_amount(&[]), 0);
        assert!(ranked_prizes(&sample_registry(), &[]).is_empty());
        assert!(totals_by_person(&sample_registry(), &[]).iter().all(|t| t.total == 0));
    }
}

//! Tiebreaker selection ("spin the wheel")

use crate::core::error::DomainError;
use crate::picks::PickId;
use rand::Rng;

/// Uniform random choice among tied leaders
///
/// The random source is always passed in, so callers decide between an
/// entropy-seeded generator in production and a seeded one in tests.
///
/// # Example
///
/// ```
/// use dishide_domain::picks::PickId;
/// use dishide_domain::voting::Tiebreaker;
/// use rand::SeedableRng;
///
/// let leaders = vec![PickId::new("a"), PickId::new("b")];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let winner = Tiebreaker::resolve(&leaders, &mut rng).unwrap();
/// assert!(leaders.contains(&winner));
/// ```
pub struct Tiebreaker;

impl Tiebreaker {
    /// Pick one of `leader_ids` uniformly at random
    ///
    /// Fewer than two candidates is a contract violation, not a tie.
    pub fn resolve<R: Rng + ?Sized>(
        leader_ids: &[PickId],
        rng: &mut R,
    ) -> Result<PickId, DomainError> {
        if leader_ids.len() < 2 {
            return Err(DomainError::InvalidUsage(format!(
                "tiebreak needs at least two leaders, got {}",
                leader_ids.len()
            )));
        }

        let index = rng.gen_range(0..leader_ids.len());
        Ok(leader_ids[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(names: &[&str]) -> Vec<PickId> {
        names.iter().map(|n| PickId::new(*n)).collect()
    }

    #[test]
    fn test_resolve_returns_member() {
        let leaders = ids(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let winner = Tiebreaker::resolve(&leaders, &mut rng).unwrap();
            assert!(leaders.contains(&winner));
        }
    }

    #[test]
    fn test_resolve_is_roughly_uniform() {
        let leaders = ids(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 30_000;
        let mut counts = [0usize; 3];

        for _ in 0..trials {
            let winner = Tiebreaker::resolve(&leaders, &mut rng).unwrap();
            let index = leaders.iter().position(|id| id == &winner).unwrap();
            counts[index] += 1;
        }

        // Expected 10_000 each; allow a generous 5% band
        for count in counts {
            assert!((9_500..=10_500).contains(&count), "counts: {:?}", counts);
        }
    }

    #[test]
    fn test_resolve_is_deterministic_for_a_seed() {
        let leaders = ids(&["a", "b", "c", "d"]);
        let first = Tiebreaker::resolve(&leaders, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = Tiebreaker::resolve(&leaders, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_rejects_empty_and_singleton() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Tiebreaker::resolve(&[], &mut rng),
            Err(DomainError::InvalidUsage(_))
        ));
        assert!(matches!(
            Tiebreaker::resolve(&ids(&["a"]), &mut rng),
            Err(DomainError::InvalidUsage(_))
        ));
    }
}

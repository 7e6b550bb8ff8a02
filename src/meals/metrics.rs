use crate::meals::repo_types::Meal;

/// Summary of a user's meals, computed over them in `ate_at` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealMetrics {
    pub total: u64,
    pub in_diet: u64,
    pub out_diet: u64,
    /// Longest run of consecutive in-diet meals.
    pub best_streak: u64,
    /// Run of in-diet meals ending at the latest meal.
    pub current_streak: u64,
}

impl MealMetrics {
    /// Single pass over diet flags. The caller supplies them oldest first.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut m = MealMetrics::default();
        for is_diet in flags {
            m.total += 1;
            if is_diet {
                m.in_diet += 1;
                m.current_streak += 1;
            } else {
                m.out_diet += 1;
                m.current_streak = 0;
            }
            if m.current_streak > m.best_streak {
                m.best_streak = m.current_streak;
            }
        }
        m
    }

    /// `meals` must already be sorted by `ate_at` ascending.
    pub fn from_meals(meals: &[Meal]) -> Self {
        Self::from_flags(meals.iter().map(|m| m.is_diet))
    }
}

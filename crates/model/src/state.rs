//! Health states for the HIV progression model.

/// Three-state HIV progression classification.
///
/// The discriminant of each state is its row/column index into the
/// transition matrix and the per-state cost and utility tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HealthState {
    /// Chronic infection without an AIDS-defining illness.
    Well = 0,
    /// AIDS-defining illness (the disease-onset event).
    Aids = 1,
    /// Death from HIV. Absorbing: no transitions leave this state.
    Death = 2,
}

impl HealthState {
    /// All three states in index order.
    pub const ALL: [HealthState; 3] = [Self::Well, Self::Aids, Self::Death];

    /// Returns the zero-based index of this state (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the state with the given index, if any.
    pub fn from_index(index: usize) -> Option<HealthState> {
        Self::ALL.get(index).copied()
    }

    /// Returns true for the absorbing death state.
    pub fn is_death(self) -> bool {
        matches!(self, Self::Death)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_index_values() {
        assert_eq!(HealthState::Well.as_index(), 0);
        assert_eq!(HealthState::Aids.as_index(), 1);
        assert_eq!(HealthState::Death.as_index(), 2);
    }

    #[test]
    fn from_index_round_trip() {
        for &state in &HealthState::ALL {
            assert_eq!(HealthState::from_index(state.as_index()), Some(state));
        }
        assert_eq!(HealthState::from_index(3), None);
    }

    #[test]
    fn all_ordering() {
        assert_eq!(
            HealthState::ALL,
            [HealthState::Well, HealthState::Aids, HealthState::Death]
        );
    }

    #[test]
    fn only_death_is_death() {
        assert!(HealthState::Death.is_death());
        assert!(!HealthState::Well.is_death());
        assert!(!HealthState::Aids.is_death());
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_eq<T: Eq>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<HealthState>();
        assert_eq::<HealthState>();
        assert_hash::<HealthState>();
    }
}

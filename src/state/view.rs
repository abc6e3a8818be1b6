use std::collections::HashMap;

use crate::infra::Vertex;

/// The per-step snapshot a policy decides from: where every player is
/// and which resources remain. Rebuilt by the game loop each step; the
/// core only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct TurnView {
    pub player_locations: HashMap<String, Vertex>,
    pub resources: Vec<Vertex>,
}

impl TurnView {
    pub fn location_of(&self, player: &str) -> Option<Vertex> {
        self.player_locations.get(player).copied()
    }

    /// The first player entry that is not the given one. With two
    /// players this identifies the opponent.
    pub fn opponent_of(&self, player: &str) -> Option<(&str, Vertex)> {
        self.player_locations
            .iter()
            .find(|(name, _)| name.as_str() != player)
            .map(|(name, &v)| (name.as_str(), v))
    }

    pub fn has_resource(&self, vertex: Vertex) -> bool {
        self.resources.contains(&vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_lookup() {
        let mut view = TurnView::default();
        view.player_locations.insert("rat".to_string(), 3);
        view.player_locations.insert("python".to_string(), 7);

        assert_eq!(view.location_of("rat"), Some(3));
        assert_eq!(view.opponent_of("rat"), Some(("python", 7)));
        assert_eq!(view.opponent_of("python"), Some(("rat", 3)));
        assert_eq!(TurnView::default().opponent_of("rat"), None);
    }
}
